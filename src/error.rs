//! Error taxonomy for catalog operations.
//!
//! Failures propagate verbatim to the caller so it can see which layer failed:
//! `NotFound` comes from the record store, `ImageNotFound` from the image store.
//! An unreadable image source is NOT an error — `ImageStore::save` reports it as
//! a boolean result, because a product without a stored image is a valid state.

use crate::types::ProductId;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CatalogError {
    /// A record was required to exist but does not.
    #[error("product {0} not found")]
    NotFound(ProductId),

    /// A stored image file was required to exist but does not.
    #[error("no stored image for product {0}")]
    ImageNotFound(ProductId),

    /// An append collided with an already-registered id.
    #[error("product {0} already exists")]
    DuplicateId(ProductId),

    /// Configuration loading or validation failure.
    #[error("configuration error: {0}")]
    Config(String),

    /// Filesystem mutation failed inside the image store.
    #[error("image store I/O failure at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl CatalogError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}
