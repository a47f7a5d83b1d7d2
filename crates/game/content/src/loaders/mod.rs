//! Content loaders for reading cavern data from files.
//!
//! This module converts RON/JSON/TOML files into `cavern-core` types.

pub mod cavern;
pub mod config;
pub mod factory;

pub use cavern::{CavernLayout, CavernLoader};
pub use config::ConfigLoader;
pub use factory::ContentFactory;

use std::path::Path;

/// Common result type for loaders.
pub type LoadResult<T> = anyhow::Result<T>;

/// Helper function to read file contents.
pub(crate) fn read_file(path: &Path) -> LoadResult<String> {
    std::fs::read_to_string(path)
        .map_err(|e| anyhow::anyhow!("Failed to read file {}: {}", path.display(), e))
}
