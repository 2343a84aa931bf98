//! Pantry: Product Catalog with a Filesystem Image Store
//!
//! Keeps an in-memory product record store consistent with a co-located on-disk
//! image store. Records are volatile; stored images are the only durable artifact,
//! keyed by `<id>.<ext>` under the configured image root.

pub mod catalog;
pub mod config;
pub mod error;
pub mod facade;
pub mod image;
pub mod logging;
pub mod repository;
pub mod tooling;
pub mod types;
