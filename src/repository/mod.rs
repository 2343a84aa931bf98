//! Product Record Store
//!
//! In-memory keyed collection of product records. Pure data structure: no I/O,
//! no concurrency control (callers are single-threaded by contract). Records
//! are kept in insertion order.

use crate::error::CatalogError;
use crate::types::{Product, ProductId};

/// In-memory record store. The catalog owns record lifetime through this type;
/// nothing here touches the filesystem.
#[derive(Debug, Default)]
pub struct ProductRepository {
    products: Vec<Product>,
}

impl ProductRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a record. Duplicate ids are rejected rather than silently
    /// admitted, so `get_by_id` stays deterministic.
    pub fn append(&mut self, product: Product) -> Result<(), CatalogError> {
        if self.exists(product.id) {
            return Err(CatalogError::DuplicateId(product.id));
        }
        self.products.push(product);
        Ok(())
    }

    /// Look up a record, failing with `NotFound` when absent. Deliberately not
    /// an `Option`: callers must not silently proceed on a missing id.
    pub fn get_by_id(&self, id: ProductId) -> Result<&Product, CatalogError> {
        self.products
            .iter()
            .find(|p| p.id == id)
            .ok_or(CatalogError::NotFound(id))
    }

    pub fn exists(&self, id: ProductId) -> bool {
        self.products.iter().any(|p| p.id == id)
    }

    /// Replace the record with matching id in place, preserving its position.
    pub fn update(&mut self, id: ProductId, product: Product) -> Result<(), CatalogError> {
        let slot = self
            .products
            .iter_mut()
            .find(|p| p.id == id)
            .ok_or(CatalogError::NotFound(id))?;
        *slot = product;
        Ok(())
    }

    /// Delete the record with matching id. A no-op when absent.
    pub fn remove(&mut self, id: ProductId) {
        self.products.retain(|p| p.id != id);
    }

    /// All records in insertion order.
    pub fn get_all(&self) -> &[Product] {
        &self.products
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }
}
