//! Integration tests for the pantry product catalog

mod facade_contracts;
mod image_store_contracts;
mod repository_properties;
