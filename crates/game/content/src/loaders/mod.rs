//! Content loaders for reading tower data and configuration from files.
//!
//! Tower records go through [`crate::io::import_tower`], so a file loader
//! reports the same accumulated errors as an in-memory import.

pub mod config;
pub mod factory;
pub mod tower;

pub use config::ConfigLoader;
pub use factory::ContentFactory;
pub use tower::TowerLoader;

use std::path::Path;

/// Common result type for loaders.
pub type LoadResult<T> = anyhow::Result<T>;

/// Helper function to read file contents.
pub(crate) fn read_file(path: &Path) -> LoadResult<String> {
    std::fs::read_to_string(path)
        .map_err(|e| anyhow::anyhow!("Failed to read file {}: {}", path.display(), e))
}
