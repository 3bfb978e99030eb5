//! Battle configuration loader.

use std::path::Path;

use pressturn_core::BattleConfig;

use crate::loaders::{LoadResult, read_file};

/// Loader for battle configuration from TOML files.
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load config data from a TOML file.
    ///
    /// A missing file yields the default configuration; keys absent from the
    /// file keep their default values.
    pub fn load(path: &Path) -> LoadResult<BattleConfig> {
        if !path.exists() {
            tracing::info!(path = %path.display(), "no battle config found, using defaults");
            return Ok(BattleConfig::default());
        }

        let content = read_file(path)?;
        Self::parse(&content)
    }

    pub fn parse(content: &str) -> LoadResult<BattleConfig> {
        toml::from_str(content).map_err(|e| anyhow::anyhow!("Failed to parse config TOML: {}", e))
    }
}
