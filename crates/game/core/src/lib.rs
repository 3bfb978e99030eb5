//! Deterministic press-turn combat rules.
//!
//! `pressturn-core` holds the battle model (units, teams, board and reserve),
//! the affinity and damage calculator, the two-currency turn economy and the
//! skill protocol. All mutation flows through [`engine::BattleEngine`]; content
//! loading and presentation live in sibling crates that depend on the types
//! re-exported here.
pub mod combat;
pub mod config;
pub mod engine;
pub mod error;
pub mod log;
pub mod skill;
pub mod state;
pub mod turn;

pub use combat::{Affinity, AffinityTable, AttackKind, DamageOutcome, Element, InstantKillOutcome};
pub use config::{BOARD_SLOTS, BattleConfig, DamageParams, LEADER_SLOT};
pub use engine::{
    ActionOutcome, BattleEngine, BattlePhase, Command, CommandError, MatchEnd, MatchResult,
};
pub use error::{ErrorSeverity, GameError};
pub use log::BattleEvent;
pub use skill::{
    HitCount, Skill, SkillAudience, SkillBehavior, SkillCategory, SkillKind, SkillRejection,
    TargetMode,
};
pub use state::{
    Battlefield, ResourceMeter, Side, Stats, Team, TeamError, Unit, UnitAction, UnitId, UnitKind,
    UnitRef,
};
pub use turn::{ActionOrder, TurnBudget, TurnConsumption, TurnCost, TurnTracker};
