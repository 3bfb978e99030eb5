//! Skill definitions and the polymorphic skill protocol.
//!
//! Behavior is fixed once when a [`Skill`] is built: [`SkillKind::classify`]
//! maps the name and category to one variant, and the engine only ever talks
//! to that variant through [`SkillBehavior`].
//!
//! # Execution
//!
//! ```text
//! engine: audience check → MP check → pre_validate → MP debit → apply
//! ```
//!
//! `pre_validate` must not mutate anything. `apply` always succeeds, records
//! one team skill use and settles its own turn cost.

mod context;
mod hits;
mod invocation;
mod offensive;
mod restore;
mod special;

use std::fmt;
use std::str::FromStr;

pub use context::{SkillContext, SkillOutcome, SkillRejection};
pub use hits::HitCount;
pub use invocation::{InvitationSkill, SabbatmaSkill};
pub use offensive::OffensiveSkill;
pub(crate) use offensive::land_hits;
pub use restore::{HealSkill, RevivalSkill, RevivalStrength};
pub use special::SpecialSkill;

use crate::combat::Element;

// ============================================================================
// Catalog tags
// ============================================================================

/// Who a skill is aimed at, as written in the catalog.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Hash, Default, strum::Display, strum::EnumString, strum::AsRefStr,
)]
#[strum(ascii_case_insensitive)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TargetMode {
    #[default]
    Single,
    Multi,
    All,
    Ally,
    Party,
    #[strum(serialize = "Self")]
    #[cfg_attr(feature = "serde", serde(rename = "Self"))]
    Caster,
    Universal,
}

impl TargetMode {
    pub const fn faces_enemy(self) -> bool {
        matches!(self, Self::Single | Self::Multi | Self::All)
    }
}

/// Catalog "type" of a skill: an element or a support family.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SkillCategory {
    Element(Element),
    Heal,
    Support,
    Ailment,
    Special,
    Passive,
}

impl FromStr for SkillCategory {
    type Err = strum::ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if let Ok(element) = s.parse::<Element>() {
            return Ok(Self::Element(element));
        }
        match s.trim().to_ascii_lowercase().as_str() {
            "heal" => Ok(Self::Heal),
            "support" => Ok(Self::Support),
            "ailment" => Ok(Self::Ailment),
            "special" => Ok(Self::Special),
            "passive" => Ok(Self::Passive),
            _ => Err(strum::ParseError::VariantNotFound),
        }
    }
}

impl fmt::Display for SkillCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Element(element) => write!(f, "{element}"),
            Self::Heal => f.write_str("Heal"),
            Self::Support => f.write_str("Support"),
            Self::Ailment => f.write_str("Ailment"),
            Self::Special => f.write_str("Special"),
            Self::Passive => f.write_str("Passive"),
        }
    }
}

// ============================================================================
// Behavior
// ============================================================================

/// Execution contract shared by every skill variant.
pub trait SkillBehavior {
    /// Checks the resolved target. Must not mutate state.
    fn pre_validate(&self, _skill: &Skill, _ctx: &SkillContext<'_>) -> Result<(), SkillRejection> {
        Ok(())
    }

    /// Applies the skill. Records one team skill use and settles the turn cost.
    fn apply(&self, skill: &Skill, ctx: &mut SkillContext<'_>) -> SkillOutcome;
}

/// Which units a skill may be pointed at.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SkillAudience {
    /// A living unit on the opposing board.
    Enemy,
    /// A living unit on the user's board.
    Ally,
    /// Any unit of the user's team, board or reserve, alive or not.
    AnyAlly,
    /// A unit of the user's team outside the board; also needs a board slot.
    Reserve,
}

/// Closed set of skill behaviors, chosen at load time.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SkillKind {
    Offensive(OffensiveSkill),
    Heal(HealSkill),
    Revival(RevivalSkill),
    Invitation(InvitationSkill),
    Sabbatma(SabbatmaSkill),
    Special(SpecialSkill),
}

impl SkillKind {
    /// Assigns the behavior for a catalog entry.
    pub fn classify(name: &str, category: SkillCategory) -> Self {
        match name {
            "Invitation" => return Self::Invitation(InvitationSkill),
            "Sabbatma" => return Self::Sabbatma(SabbatmaSkill),
            "Recarm" => return Self::Revival(RevivalSkill::new(RevivalStrength::Half)),
            "Samarecarm" => return Self::Revival(RevivalSkill::new(RevivalStrength::Full)),
            _ => {}
        }
        match category {
            SkillCategory::Element(element) => Self::Offensive(OffensiveSkill::new(element)),
            SkillCategory::Heal => Self::Heal(HealSkill),
            SkillCategory::Support
            | SkillCategory::Ailment
            | SkillCategory::Special
            | SkillCategory::Passive => Self::Special(SpecialSkill),
        }
    }

    pub fn audience(&self, target: TargetMode) -> SkillAudience {
        match self {
            Self::Offensive(_) => SkillAudience::Enemy,
            Self::Heal(_) => SkillAudience::Ally,
            Self::Revival(_) => SkillAudience::AnyAlly,
            Self::Invitation(_) | Self::Sabbatma(_) => SkillAudience::Reserve,
            Self::Special(_) if target.faces_enemy() => SkillAudience::Enemy,
            Self::Special(_) => SkillAudience::Ally,
        }
    }

    /// Whether the skill ends with a creature placed on the board.
    pub fn summons(&self) -> bool {
        matches!(self, Self::Invitation(_) | Self::Sabbatma(_))
    }

    fn behavior(&self) -> &dyn SkillBehavior {
        match self {
            Self::Offensive(skill) => skill,
            Self::Heal(skill) => skill,
            Self::Revival(skill) => skill,
            Self::Invitation(skill) => skill,
            Self::Sabbatma(skill) => skill,
            Self::Special(skill) => skill,
        }
    }
}

// ============================================================================
// Skill
// ============================================================================

/// Immutable skill definition shared by every unit that knows it.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Skill {
    pub name: String,
    pub category: SkillCategory,
    pub cost: u32,
    pub power: u32,
    pub target: TargetMode,
    pub hits: HitCount,
    pub effect: Option<String>,
    pub kind: SkillKind,
}

impl Skill {
    /// Creates a skill and classifies its behavior.
    pub fn new(name: impl Into<String>, category: SkillCategory) -> Self {
        let name = name.into();
        let kind = SkillKind::classify(&name, category);
        Self {
            name,
            category,
            cost: 0,
            power: 0,
            target: TargetMode::default(),
            hits: HitCount::default(),
            effect: None,
            kind,
        }
    }

    #[must_use]
    pub fn with_cost(mut self, cost: u32) -> Self {
        self.cost = cost;
        self
    }

    #[must_use]
    pub fn with_power(mut self, power: u32) -> Self {
        self.power = power;
        self
    }

    #[must_use]
    pub fn with_target(mut self, target: TargetMode) -> Self {
        self.target = target;
        self
    }

    #[must_use]
    pub fn with_hits(mut self, hits: HitCount) -> Self {
        self.hits = hits;
        self
    }

    #[must_use]
    pub fn with_effect(mut self, effect: impl Into<String>) -> Self {
        self.effect = Some(effect.into());
        self
    }

    pub fn audience(&self) -> SkillAudience {
        self.kind.audience(self.target)
    }

    pub fn pre_validate(&self, ctx: &SkillContext<'_>) -> Result<(), SkillRejection> {
        self.kind.behavior().pre_validate(self, ctx)
    }

    pub fn apply(&self, ctx: &mut SkillContext<'_>) -> SkillOutcome {
        self.kind.behavior().apply(self, ctx)
    }
}
