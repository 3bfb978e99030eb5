//! Roster files: parsing, validation and team construction.
//!
//! # Format
//!
//! ```text
//! Player 1 Team
//! [Samurai] Flynn (Agi, Dia)
//! Pixie
//! Jack Frost
//! Player 2 Team
//! [Samurai] Walter
//! Angel
//! ```
//!
//! Blank lines are ignored, as is anything before the first section header.

use std::collections::BTreeSet;

use pressturn_core::{ErrorSeverity, GameError, Team, TeamError};

use crate::catalog::{SkillCatalog, UnitCatalog};

/// Most creatures a roster may list.
pub const MAX_CREATURES: usize = 7;

/// Most skills a leader may bring.
pub const MAX_LEADER_SKILLS: usize = 8;

/// Player identifiers, in section order.
pub const PLAYER_IDS: [&str; 2] = ["J1", "J2"];

const SECTION_HEADERS: [&str; 2] = ["Player 1 Team", "Player 2 Team"];
const LEADER_TAG: &str = "[Samurai]";

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum RosterError {
    #[error("{player} has no leader")]
    MissingLeader { player: String },

    #[error("{player} lists more than one leader")]
    DuplicateLeader { player: String },

    #[error("{player} lists {count} creatures (max {max})", max = MAX_CREATURES)]
    TooManyCreatures { player: String, count: usize },

    #[error("{player} lists {name} twice")]
    DuplicateCreature { player: String, name: String },

    #[error("{player}'s leader has {count} skills (max {max})", max = MAX_LEADER_SKILLS)]
    TooManySkills { player: String, count: usize },

    #[error("{player}'s leader lists {skill} twice")]
    DuplicateSkill { player: String, skill: String },

    #[error("{player}'s leader knows unknown skill {skill}")]
    UnknownSkill { player: String, skill: String },

    #[error("no leader named {name} in the catalog")]
    UnknownLeader { name: String },

    #[error("no creature named {name} in the catalog")]
    UnknownCreature { name: String },

    #[error(transparent)]
    Team(#[from] TeamError),
}

impl GameError for RosterError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            Self::Team(err) => err.severity(),
            _ => ErrorSeverity::Validation,
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::MissingLeader { .. } => "ROSTER_MISSING_LEADER",
            Self::DuplicateLeader { .. } => "ROSTER_DUPLICATE_LEADER",
            Self::TooManyCreatures { .. } => "ROSTER_TOO_MANY_CREATURES",
            Self::DuplicateCreature { .. } => "ROSTER_DUPLICATE_CREATURE",
            Self::TooManySkills { .. } => "ROSTER_TOO_MANY_SKILLS",
            Self::DuplicateSkill { .. } => "ROSTER_DUPLICATE_SKILL",
            Self::UnknownSkill { .. } => "ROSTER_UNKNOWN_SKILL",
            Self::UnknownLeader { .. } => "ROSTER_UNKNOWN_LEADER",
            Self::UnknownCreature { .. } => "ROSTER_UNKNOWN_CREATURE",
            Self::Team(err) => err.error_code(),
        }
    }
}

/// Leader line: catalog name plus the skills chosen for this match.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LeaderEntry {
    pub name: String,
    pub skills: Vec<String>,
}

impl LeaderEntry {
    fn parse(line: &str) -> Self {
        let line = line.replacen(LEADER_TAG, "", 1);
        let (name, skills) = match line.split_once('(') {
            Some((name, rest)) => (name, rest.trim_end().trim_end_matches(')')),
            None => (line.as_str(), ""),
        };
        Self {
            name: name.trim().to_owned(),
            skills: skills
                .split(',')
                .map(str::trim)
                .filter(|skill| !skill.is_empty())
                .map(str::to_owned)
                .collect(),
        }
    }
}

/// One player's section of a roster file, names not yet resolved.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RosterSpec {
    pub player: String,
    pub leader: Option<LeaderEntry>,
    pub creatures: Vec<String>,
}

impl RosterSpec {
    pub fn new(player: impl Into<String>) -> Self {
        Self {
            player: player.into(),
            leader: None,
            creatures: Vec::new(),
        }
    }

    /// Checks team-building rules against the skill catalog.
    pub fn validate(&self, skills: &SkillCatalog) -> Result<(), RosterError> {
        let player = || self.player.clone();
        let leader = self
            .leader
            .as_ref()
            .ok_or_else(|| RosterError::MissingLeader { player: player() })?;

        if self.creatures.len() > MAX_CREATURES {
            return Err(RosterError::TooManyCreatures {
                player: player(),
                count: self.creatures.len(),
            });
        }
        if let Some(name) = first_duplicate(&self.creatures) {
            return Err(RosterError::DuplicateCreature {
                player: player(),
                name: name.to_owned(),
            });
        }

        if leader.skills.len() > MAX_LEADER_SKILLS {
            return Err(RosterError::TooManySkills {
                player: player(),
                count: leader.skills.len(),
            });
        }
        if let Some(skill) = first_duplicate(&leader.skills) {
            return Err(RosterError::DuplicateSkill {
                player: player(),
                skill: skill.to_owned(),
            });
        }
        if let Some(skill) = leader.skills.iter().find(|skill| !skills.contains(skill)) {
            return Err(RosterError::UnknownSkill {
                player: player(),
                skill: skill.clone(),
            });
        }
        Ok(())
    }

    /// Resolves every name against `units` and builds the team.
    pub fn build(&self, units: &UnitCatalog) -> Result<Team, RosterError> {
        let entry = self.leader.as_ref().ok_or_else(|| RosterError::MissingLeader {
            player: self.player.clone(),
        })?;
        let leader = units
            .leader(&entry.name)
            .ok_or_else(|| RosterError::UnknownLeader {
                name: entry.name.clone(),
            })?
            .leader(&entry.skills);

        let creatures = self
            .creatures
            .iter()
            .map(|name| {
                units
                    .creature(name)
                    .map(|template| template.creature())
                    .ok_or_else(|| RosterError::UnknownCreature { name: name.clone() })
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Team::new(&self.player, leader, creatures)?)
    }
}

/// Splits a roster file into the two players' sections.
///
/// Fails only on a section that names two leaders; everything else is left
/// to [`RosterSpec::validate`].
pub fn parse_rosters(text: &str) -> Result<[RosterSpec; 2], RosterError> {
    let mut rosters = PLAYER_IDS.map(RosterSpec::new);
    let mut section: Option<usize> = None;

    for line in text.lines().map(str::trim) {
        if let Some(index) = SECTION_HEADERS.iter().position(|header| *header == line) {
            section = Some(index);
            continue;
        }
        let Some(index) = section else { continue };
        if line.is_empty() {
            continue;
        }

        let roster = &mut rosters[index];
        if line.contains(LEADER_TAG) {
            if roster.leader.is_some() {
                return Err(RosterError::DuplicateLeader {
                    player: roster.player.clone(),
                });
            }
            roster.leader = Some(LeaderEntry::parse(line));
        } else if !line.starts_with("Player") {
            roster.creatures.push(line.to_owned());
        }
    }

    Ok(rosters)
}

fn first_duplicate(names: &[String]) -> Option<&str> {
    let mut seen = BTreeSet::new();
    names
        .iter()
        .find(|name| !seen.insert(name.as_str()))
        .map(String::as_str)
}
