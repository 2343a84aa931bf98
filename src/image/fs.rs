use crate::error::CatalogError;
use crate::image::contract::ImageStore;
use crate::types::{Product, ProductId};
use std::path::{Path, PathBuf};

/// Filesystem-backed image store.
///
/// `source_root` anchors relative caller-supplied source paths; `image_root`
/// is the canonical store. Both directories must already exist — creating them
/// is the embedding application's job, not this store's.
#[derive(Debug, Clone)]
pub struct FsImageStore {
    source_root: PathBuf,
    image_root: PathBuf,
}

impl FsImageStore {
    pub fn new(source_root: impl Into<PathBuf>, image_root: impl Into<PathBuf>) -> Self {
        Self {
            source_root: source_root.into(),
            image_root: image_root.into(),
        }
    }

    pub fn image_root(&self) -> &Path {
        &self.image_root
    }

    /// Relative source paths are taken to live under the source root.
    fn resolve_source(&self, source: &Path) -> PathBuf {
        if source.is_absolute() {
            source.to_path_buf()
        } else {
            self.source_root.join(source)
        }
    }

    /// Canonical stored location for an id given the source extension.
    fn stored_path(&self, id: ProductId, ext: &str) -> PathBuf {
        self.image_root.join(format!("{}.{}", id, ext))
    }

    /// Scan the image root for the file stored under this id, whatever its
    /// extension. The stem must equal the id exactly, so `1.jpg` never matches
    /// a lookup for 10.
    fn locate_stored(&self, id: ProductId) -> Result<Option<PathBuf>, CatalogError> {
        let entries = std::fs::read_dir(&self.image_root)
            .map_err(|e| CatalogError::io(&self.image_root, e))?;

        let stem = id.to_string();
        for entry in entries {
            let entry = match entry {
                Ok(e) => e,
                Err(e) => {
                    tracing::warn!(
                        "Failed to read directory entry in {}: {}",
                        self.image_root.display(),
                        e
                    );
                    continue;
                }
            };

            let path = entry.path();
            if !path.is_file() {
                continue;
            }
            if path.file_stem().and_then(|s| s.to_str()) == Some(stem.as_str()) {
                return Ok(Some(path));
            }
        }

        Ok(None)
    }
}

impl ImageStore for FsImageStore {
    fn save(&self, product: &Product) -> Result<bool, CatalogError> {
        let source = self.resolve_source(&product.image_source);
        if !source.is_file() {
            tracing::warn!(
                id = product.id,
                source = %source.display(),
                "image source unreadable, nothing stored"
            );
            return Ok(false);
        }

        // The stored name is derived from the source extension; a source
        // without one has no derivable name and is treated as unusable.
        let ext = match source.extension().and_then(|e| e.to_str()) {
            Some(ext) => ext,
            None => {
                tracing::warn!(
                    id = product.id,
                    source = %source.display(),
                    "image source has no extension, nothing stored"
                );
                return Ok(false);
            }
        };

        let dest = self.stored_path(product.id, ext);
        std::fs::copy(&source, &dest).map_err(|e| CatalogError::io(&dest, e))?;
        tracing::debug!(id = product.id, dest = %dest.display(), "image stored");
        Ok(true)
    }

    fn update(&self, product: &Product) -> Result<bool, CatalogError> {
        // The extension may have changed since the last save, so the previous
        // file is located by id, not by recomputing the old name. A missing
        // previous file is fine: update degrades to save.
        if let Some(previous) = self.locate_stored(product.id)? {
            std::fs::remove_file(&previous).map_err(|e| CatalogError::io(&previous, e))?;
            tracing::debug!(
                id = product.id,
                previous = %previous.display(),
                "previous stored image removed"
            );
        }
        self.save(product)
    }

    fn remove(&self, id: ProductId) -> Result<(), CatalogError> {
        let stored = self
            .locate_stored(id)?
            .ok_or(CatalogError::ImageNotFound(id))?;
        std::fs::remove_file(&stored).map_err(|e| CatalogError::io(&stored, e))?;
        tracing::debug!(id, stored = %stored.display(), "stored image removed");
        Ok(())
    }

    fn image_path(&self, id: ProductId) -> Result<PathBuf, CatalogError> {
        self.locate_stored(id)?
            .ok_or(CatalogError::ImageNotFound(id))
    }
}
