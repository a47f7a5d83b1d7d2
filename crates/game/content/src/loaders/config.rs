//! Agent configuration loader.

use std::path::Path;

use cavern_core::AgentConfig;

use crate::loaders::{LoadResult, read_file};

/// Loader for agent configuration from TOML files.
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load config data from a TOML file.
    ///
    /// Omitted fields fall back to [`AgentConfig::default`].
    pub fn load(path: &Path) -> LoadResult<AgentConfig> {
        let content = read_file(path)?;
        let config: AgentConfig = toml::from_str(&content)
            .map_err(|e| anyhow::anyhow!("Failed to parse config TOML: {}", e))?;

        Ok(config)
    }
}
