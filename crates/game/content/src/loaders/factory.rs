//! Content factory for assembling a match from data files.

use std::path::{Path, PathBuf};

use pressturn_core::{BattleConfig, Team};

use crate::catalog::{SkillCatalog, UnitCatalog};
use crate::loaders::{ConfigLoader, LoadResult, RosterLoader, SkillLoader, UnitLoader};

/// Everything needed to start a battle.
#[derive(Clone, Debug)]
pub struct MatchSetup {
    pub config: BattleConfig,
    pub skills: SkillCatalog,
    pub first: Team,
    pub second: Team,
}

/// Content factory that loads all battle content from a data directory.
///
/// # Directory Structure
///
/// ```text
/// data_dir/
/// ├── battle.toml
/// ├── skills.json
/// ├── samurai.json
/// ├── monsters.json
/// └── rosters/
///     └── *.txt
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

    /// Load battle configuration from `battle.toml`.
    pub fn load_config(&self) -> LoadResult<BattleConfig> {
        ConfigLoader::load(&self.data_dir.join("battle.toml"))
    }

    /// Load the skill catalog from `skills.json`.
    pub fn load_skills(&self) -> LoadResult<SkillCatalog> {
        SkillLoader::load(&self.data_dir.join("skills.json"))
    }

    /// Load leaders from `samurai.json` and creatures from `monsters.json`.
    pub fn load_units(&self) -> LoadResult<UnitCatalog> {
        UnitLoader::load_catalog(
            &self.data_dir.join("samurai.json"),
            &self.data_dir.join("monsters.json"),
        )
    }

    /// Roster files shipped under `rosters/`.
    pub fn roster_files(&self) -> LoadResult<Vec<PathBuf>> {
        RosterLoader::list(&self.rosters_dir())
    }

    /// Loads every catalog, then validates and builds both teams of `roster`.
    ///
    /// A relative `roster` path is resolved against `rosters/`.
    pub fn prepare_match(&self, roster: &Path) -> LoadResult<MatchSetup> {
        let roster = if roster.is_relative() && !roster.exists() {
            self.rosters_dir().join(roster)
        } else {
            roster.to_path_buf()
        };

        let config = self.load_config()?;
        let skills = self.load_skills()?;
        let units = self.load_units()?;
        let [first, second] = RosterLoader::load(&roster)?;

        for spec in [&first, &second] {
            spec.validate(&skills)
                .map_err(|e| anyhow::anyhow!("Invalid team in {}: {}", roster.display(), e))?;
        }

        tracing::info!(roster = %roster.display(), "match content loaded");
        Ok(MatchSetup {
            config,
            skills,
            first: first.build(&units)?,
            second: second.build(&units)?,
        })
    }

    /// Returns the data directory path.
    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    fn rosters_dir(&self) -> PathBuf {
        self.data_dir.join("rosters")
    }
}
