//! Content loaders for reading battle data from files.
//!
//! Catalogs are JSON, the battle configuration is TOML and rosters are plain
//! text. Every loader produces `pressturn-core` values directly.

pub mod config;
pub mod factory;
pub mod roster;
pub mod skills;
pub mod units;

pub use config::ConfigLoader;
pub use factory::{ContentFactory, MatchSetup};
pub use roster::RosterLoader;
pub use skills::SkillLoader;
pub use units::UnitLoader;

use std::path::Path;

/// Common result type for loaders.
pub type LoadResult<T> = anyhow::Result<T>;

/// Helper function to read file contents.
pub(crate) fn read_file(path: &Path) -> LoadResult<String> {
    std::fs::read_to_string(path)
        .map_err(|e| anyhow::anyhow!("Failed to read file {}: {}", path.display(), e))
}
