//! Data-driven content for press-turn battles.
//!
//! This crate is the loading side of the engine:
//! - Skill catalog (JSON), classified into behaviors once at load time
//! - Leader and creature catalogs (JSON)
//! - Roster files describing both teams, plus roster validation
//! - Battle configuration (TOML)
//!
//! Everything here produces fully built `pressturn-core` values; the engine
//! never touches files.

pub mod catalog;
pub mod roster;

#[cfg(feature = "loaders")]
pub mod loaders;

pub use catalog::{SkillCatalog, StatBlock, UnitCatalog, UnitTemplate, usable_skills};
pub use roster::{
    LeaderEntry, MAX_CREATURES, MAX_LEADER_SKILLS, PLAYER_IDS, RosterError, RosterSpec,
    parse_rosters,
};

#[cfg(feature = "loaders")]
pub use loaders::{
    ConfigLoader, ContentFactory, LoadResult, MatchSetup, RosterLoader, SkillLoader, UnitLoader,
};
