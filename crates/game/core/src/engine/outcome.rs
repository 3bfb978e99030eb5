use crate::combat::Affinity;
use crate::log::BattleEvent;
use crate::skill::Skill;
use crate::state::{Side, UnitId, UnitRef};
use crate::turn::TurnConsumption;

/// A player command with every choice already resolved by the caller.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Command<'a> {
    Attack {
        actor: UnitId,
        target: UnitRef,
    },
    Shoot {
        actor: UnitId,
        target: UnitRef,
    },
    UseSkill {
        actor: UnitId,
        target: UnitRef,
        skill: &'a Skill,
        /// Board slot for summoning skills.
        slot: Option<usize>,
    },
    Invoke {
        summoner: UnitId,
        creature: UnitId,
        /// Required when the leader invokes; creatures swap themselves out.
        slot: Option<usize>,
    },
    Pass,
    Surrender {
        side: Side,
    },
}

/// How the match ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display)]
#[strum(serialize_all = "snake_case")]
pub enum MatchEnd {
    /// The loser has no living unit on the board.
    Defeat,
    Surrender,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MatchResult {
    pub winner: Side,
    pub player: String,
    pub reason: MatchEnd,
}

/// Structured result of an accepted command.
#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub struct ActionOutcome {
    /// Unit that acted; `None` for surrender.
    pub actor: Option<UnitRef>,
    /// Ordered, human-readable event log.
    pub log: Vec<BattleEvent>,
    /// Target affinity for attacks and offensive skills.
    pub affinity: Option<Affinity>,
    pub damage_dealt: u32,
    /// Creature that entered the board.
    pub summoned: Option<UnitRef>,
    pub turns: TurnConsumption,
    /// Set once the command ended the match.
    pub finished: Option<MatchResult>,
}

impl ActionOutcome {
    pub(crate) fn new(actor: Option<UnitRef>) -> Self {
        Self {
            actor,
            ..Self::default()
        }
    }

    /// The log rendered line by line.
    pub fn lines(&self) -> impl Iterator<Item = String> + '_ {
        self.log.iter().map(ToString::to_string)
    }
}
