//! Catalog Orchestrator
//!
//! Sequences the record store and the image store so every catalog mutation
//! updates both. The two stores are updated one after the other with no
//! rollback; the partial outcomes that can result are deliberate and
//! observable (most notably a record retained with no stored image).

use crate::config::PantryConfig;
use crate::error::CatalogError;
use crate::image::{FsImageStore, ImageStore};
use crate::repository::ProductRepository;
use crate::types::{Product, ProductId};
use std::path::PathBuf;

/// Orchestrates the in-memory repository and the on-disk image store. Carries
/// no state of its own beyond the two stores it sequences.
pub struct ProductCatalog {
    repository: ProductRepository,
    images: Box<dyn ImageStore>,
}

impl ProductCatalog {
    /// Build a catalog over the configured image roots.
    pub fn new(config: &PantryConfig) -> Self {
        Self::with_store(Box::new(FsImageStore::new(
            &config.source_root,
            &config.image_root,
        )))
    }

    /// Build a catalog over a specific image store implementation.
    pub fn with_store(images: Box<dyn ImageStore>) -> Self {
        Self {
            repository: ProductRepository::new(),
            images,
        }
    }

    /// Insert a record, then store its image. `Ok(false)` means the record was
    /// admitted but its source image was unusable, leaving the record with no
    /// stored image — a valid state, not an error.
    pub fn append(&mut self, product: Product) -> Result<bool, CatalogError> {
        let id = product.id;
        self.repository.append(product.clone())?;

        let stored = self.images.save(&product)?;
        if stored {
            tracing::info!(id, "product appended with stored image");
        } else {
            tracing::warn!(id, "product appended, retained without stored image");
        }
        Ok(stored)
    }

    pub fn get_all(&self) -> &[Product] {
        self.repository.get_all()
    }

    pub fn get_by_id(&self, id: ProductId) -> Result<&Product, CatalogError> {
        self.repository.get_by_id(id)
    }

    pub fn exists(&self, id: ProductId) -> bool {
        self.repository.exists(id)
    }

    /// Replace the record, then replace its stored image from the new source.
    /// Record-store `NotFound` propagates before the filesystem is touched.
    pub fn update(&mut self, id: ProductId, product: Product) -> Result<bool, CatalogError> {
        self.repository.update(id, product.clone())?;

        let stored = self.images.update(&product)?;
        tracing::info!(id, stored, "product updated");
        Ok(stored)
    }

    /// Remove the record and its stored image. Removal is anchored on the
    /// record: an absent record fails `NotFound`, while an absent stored image
    /// is tolerated so that a record whose image save once failed can still be
    /// removed.
    pub fn remove(&mut self, id: ProductId) -> Result<(), CatalogError> {
        self.repository.get_by_id(id)?;

        match self.images.remove(id) {
            Ok(()) => {}
            Err(CatalogError::ImageNotFound(_)) => {
                tracing::warn!(id, "no stored image to remove");
            }
            Err(e) => return Err(e),
        }

        self.repository.remove(id);
        tracing::info!(id, "product removed");
        Ok(())
    }

    /// Stored image location for a record. Propagates `ImageNotFound` for
    /// records without a stored image.
    pub fn image_path(&self, id: ProductId) -> Result<PathBuf, CatalogError> {
        self.images.image_path(id)
    }
}
