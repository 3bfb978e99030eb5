//! Leader and creature catalog loader.

use std::path::Path;

use crate::catalog::{UnitCatalog, UnitTemplate};
use crate::loaders::{LoadResult, read_file};

/// Loader for unit catalogs from JSON files.
///
/// Entries carry `name`, a `stats` block (`HP`, `MP`, `Str`, `Skl`, `Mag`,
/// `Spd`, `Lck`), an `affinity` map from element to code and, for creatures,
/// their innate `skills`.
pub struct UnitLoader;

impl UnitLoader {
    /// Load unit templates from a JSON array file.
    pub fn load(path: &Path) -> LoadResult<Vec<UnitTemplate>> {
        let content = read_file(path)?;
        Self::parse(&content)
            .map_err(|e| anyhow::anyhow!("{} ({})", e, path.display()))
    }

    pub fn parse(content: &str) -> LoadResult<Vec<UnitTemplate>> {
        serde_json::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse unit catalog JSON: {}", e))
    }

    /// Load both catalogs into one lookup.
    pub fn load_catalog(leaders: &Path, creatures: &Path) -> LoadResult<UnitCatalog> {
        let leaders = Self::load(leaders)?;
        let creatures = Self::load(creatures)?;
        tracing::debug!(
            leaders = leaders.len(),
            creatures = creatures.len(),
            "unit catalogs loaded"
        );
        Ok(UnitCatalog::new(leaders, creatures))
    }
}
