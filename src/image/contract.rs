use crate::error::CatalogError;
use crate::types::{Product, ProductId};
use std::path::PathBuf;

/// Storage seam for stored product images.
///
/// `save` and `update` report an unusable source as `Ok(false)` rather than an
/// error: a product without a stored image is a valid catalog state.
pub trait ImageStore {
    /// Copy the product's source image to its canonical stored location,
    /// overwriting any file already at that exact path. `Ok(false)` means the
    /// source was unreadable and nothing was mutated.
    fn save(&self, product: &Product) -> Result<bool, CatalogError>;

    /// Replace whatever is stored for this id, regardless of the previous
    /// extension, with the product's current source image. Falls back to plain
    /// `save` semantics when nothing was stored before.
    fn update(&self, product: &Product) -> Result<bool, CatalogError>;

    /// Delete the stored file for this id, whatever its extension. Fails with
    /// `ImageNotFound` when nothing is stored.
    fn remove(&self, id: ProductId) -> Result<(), CatalogError>;

    /// Locate the stored file for this id. Fails with `ImageNotFound` when
    /// nothing is stored.
    fn image_path(&self, id: ProductId) -> Result<PathBuf, CatalogError>;
}
