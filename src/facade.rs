//! Facade delegating to the catalog orchestrator.
//!
//! The surface handed to presentation layers (console session, future HTTP
//! handlers). Pure pass-through: failure translation into user-facing
//! messages is the caller's job, not done here.

use crate::catalog::ProductCatalog;
use crate::config::PantryConfig;
use crate::error::CatalogError;
use crate::types::{Product, ProductId};
use std::path::PathBuf;

pub struct ProductFacade {
    catalog: ProductCatalog,
}

impl ProductFacade {
    pub fn new(config: &PantryConfig) -> Self {
        Self::with_catalog(ProductCatalog::new(config))
    }

    pub fn with_catalog(catalog: ProductCatalog) -> Self {
        Self { catalog }
    }

    pub fn get_all(&self) -> &[Product] {
        self.catalog.get_all()
    }

    pub fn get_by_id(&self, id: ProductId) -> Result<&Product, CatalogError> {
        self.catalog.get_by_id(id)
    }

    pub fn exists(&self, id: ProductId) -> bool {
        self.catalog.exists(id)
    }

    pub fn append(&mut self, product: Product) -> Result<bool, CatalogError> {
        self.catalog.append(product)
    }

    pub fn update(&mut self, id: ProductId, product: Product) -> Result<bool, CatalogError> {
        self.catalog.update(id, product)
    }

    pub fn remove(&mut self, id: ProductId) -> Result<(), CatalogError> {
        self.catalog.remove(id)
    }

    pub fn image_path(&self, id: ProductId) -> Result<PathBuf, CatalogError> {
        self.catalog.image_path(id)
    }
}
