//! Image Store
//!
//! Maps product ids to stored image files under a configured image root.
//! Stored names are derived (`<id>.<ext>`), never persisted: the id is the only
//! key, so renaming or re-extending a source image can never leave a dangling
//! stored-path reference.

pub mod contract;
pub mod fs;

pub use contract::ImageStore;
pub use fs::FsImageStore;
