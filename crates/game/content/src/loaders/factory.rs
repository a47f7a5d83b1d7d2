//! Content factory for loading caverns and configuration from a data directory.

use std::path::{Path, PathBuf};

use cavern_core::AgentConfig;

use crate::loaders::{CavernLayout, CavernLoader, ConfigLoader, LoadResult};

/// Content factory that loads all cavern content from a data directory.
///
/// # Directory Structure
///
/// ```text
/// data_dir/
/// ├── agent.toml
/// └── caverns/
///     ├── tutorial.ron
///     └── deep_vault.json
/// ```
pub struct ContentFactory {
    data_dir: PathBuf,
}

impl ContentFactory {
    /// Creates a new content factory pointing to a data directory.
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    /// Load agent configuration from `agent.toml`.
    ///
    /// A missing file yields the default configuration.
    pub fn load_config(&self) -> LoadResult<AgentConfig> {
        let path = self.data_dir.join("agent.toml");
        if !path.exists() {
            return Ok(AgentConfig::default());
        }
        ConfigLoader::load(&path)
    }

    /// Load the cavern named `name` from `caverns/`, trying `.ron` then `.json`.
    pub fn load_cavern(&self, name: &str) -> LoadResult<CavernLayout> {
        let dir = self.data_dir.join("caverns");
        let ron = dir.join(format!("{name}.ron"));
        if ron.exists() {
            return CavernLoader::load(&ron);
        }
        CavernLoader::load(&dir.join(format!("{name}.json")))
    }

    /// Get the data directory path.
    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }
}
