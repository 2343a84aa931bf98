//! Core types for the product catalog.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// ProductId: externally assigned integer key for a catalog record.
///
/// Ids are never generated by the catalog; the caller owns the numbering.
pub type ProductId = u32;

/// Product: one catalog record.
///
/// `image_source` is the caller-side path to the image at the time of the call,
/// not a reference into the image store. The stored location is always derived
/// from the id and the source file's extension, never persisted here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    pub description: String,
    pub price: f64,
    pub image_source: PathBuf,
}

impl Product {
    pub fn new(
        id: ProductId,
        description: impl Into<String>,
        price: f64,
        image_source: impl Into<PathBuf>,
    ) -> Self {
        Self {
            id,
            description: description.into(),
            price,
            image_source: image_source.into(),
        }
    }
}
