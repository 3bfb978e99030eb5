//! Combat resolution engine.
//!
//! [`BattleEngine`] is the sole mutator of the battlefield. Every command runs
//! the same pipeline:
//!
//! ```text
//! validate actor → resolve (attack / shoot / skill / invoke / pass)
//!   → settle turn cost → evict fallen creatures → check winner
//!   → switch initiative or rotate the action order
//! ```
//!
//! Validation happens before any mutation, so a rejected command leaves the
//! battle exactly as it was.

mod errors;
mod outcome;
mod queries;
mod resolve;
mod settle;

pub use errors::CommandError;
pub use outcome::{ActionOutcome, Command, MatchEnd, MatchResult};

use crate::config::BattleConfig;
use crate::error::GameError;
use crate::state::{Battlefield, Side, Team, UnitId, UnitRef};
use crate::turn::{ActionOrder, TurnBudget, TurnTracker};

/// Engine lifecycle.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display)]
#[strum(serialize_all = "snake_case")]
pub enum BattlePhase {
    /// Teams not handed over yet.
    Setup,
    /// A team holds the initiative and accepts commands.
    ActiveTurn,
    /// Initiative is moving to the other team.
    TeamSwitch,
    Finished,
}

/// Resolves one match between two teams.
#[derive(Clone, Debug)]
pub struct BattleEngine {
    config: BattleConfig,
    field: Option<Battlefield>,
    active: Side,
    turns: TurnTracker,
    order: ActionOrder,
    phase: BattlePhase,
    result: Option<MatchResult>,
}

impl Default for BattleEngine {
    fn default() -> Self {
        Self::new(BattleConfig::default())
    }
}

impl BattleEngine {
    pub fn new(config: BattleConfig) -> Self {
        Self {
            config,
            field: None,
            active: Side::First,
            turns: TurnTracker::default(),
            order: ActionOrder::new(),
            phase: BattlePhase::Setup,
            result: None,
        }
    }

    /// Deploys both teams and hands the initiative to `first`.
    ///
    /// Each leader takes slot 0 and up to three creatures fill slots 1..=3 in
    /// roster order; the rest wait in reserve. Creatures are deployed as-is:
    /// one already at 0 HP holds its slot until the first action's eviction.
    pub fn initialize(&mut self, mut first: Team, mut second: Team) {
        first.deploy();
        second.deploy();

        tracing::info!(
            first = first.player(),
            second = second.player(),
            "battle initialized"
        );

        self.field = Some(Battlefield::new(first, second));
        self.result = None;
        self.begin_initiative(Side::First);
    }

    /// Runs a command through the pipeline.
    pub fn execute(&mut self, command: Command<'_>) -> Result<ActionOutcome, CommandError> {
        let result = self.dispatch(command);
        if let Err(err) = &result {
            tracing::warn!(
                code = err.error_code(),
                severity = err.severity().as_str(),
                %err,
                "command rejected"
            );
        }
        result
    }

    fn dispatch(&mut self, command: Command<'_>) -> Result<ActionOutcome, CommandError> {
        self.ensure_running()?;
        match command {
            Command::Attack { actor, target } => self.resolve_attack(actor, target),
            Command::Shoot { actor, target } => self.resolve_shoot(actor, target),
            Command::UseSkill {
                actor,
                target,
                skill,
                slot,
            } => self.resolve_skill(actor, target, skill, slot),
            Command::Invoke {
                summoner,
                creature,
                slot,
            } => self.resolve_invoke(summoner, creature, slot),
            Command::Pass => self.resolve_pass(),
            Command::Surrender { side } => self.resolve_surrender(side),
        }
    }

    // ========================================================================
    // Entry points
    // ========================================================================

    pub fn attack(&mut self, actor: UnitId, target: UnitRef) -> Result<ActionOutcome, CommandError> {
        self.execute(Command::Attack { actor, target })
    }

    pub fn shoot(&mut self, actor: UnitId, target: UnitRef) -> Result<ActionOutcome, CommandError> {
        self.execute(Command::Shoot { actor, target })
    }

    pub fn use_skill(
        &mut self,
        actor: UnitId,
        target: UnitRef,
        skill: &crate::skill::Skill,
        slot: Option<usize>,
    ) -> Result<ActionOutcome, CommandError> {
        self.execute(Command::UseSkill {
            actor,
            target,
            skill,
            slot,
        })
    }

    pub fn invoke(
        &mut self,
        summoner: UnitId,
        creature: UnitId,
        slot: Option<usize>,
    ) -> Result<ActionOutcome, CommandError> {
        self.execute(Command::Invoke {
            summoner,
            creature,
            slot,
        })
    }

    pub fn pass(&mut self) -> Result<ActionOutcome, CommandError> {
        self.execute(Command::Pass)
    }

    pub fn surrender(&mut self, side: Side) -> Result<ActionOutcome, CommandError> {
        self.execute(Command::Surrender { side })
    }

    // ========================================================================
    // Accessors
    // ========================================================================

    pub fn config(&self) -> &BattleConfig {
        &self.config
    }

    pub fn phase(&self) -> BattlePhase {
        self.phase
    }

    pub fn field(&self) -> Option<&Battlefield> {
        self.field.as_ref()
    }

    pub fn active_side(&self) -> Side {
        self.active
    }

    pub fn active_team(&self) -> Option<&Team> {
        self.field.as_ref().map(|field| field.team(self.active))
    }

    pub fn opponent_team(&self) -> Option<&Team> {
        self.field
            .as_ref()
            .map(|field| field.team(self.active.opponent()))
    }

    pub fn action_order(&self) -> &[UnitId] {
        self.order.as_slice()
    }

    /// Unit at the head of the action order.
    pub fn current_actor(&self) -> Option<UnitRef> {
        if self.phase != BattlePhase::ActiveTurn {
            return None;
        }
        self.order.head().map(|unit| UnitRef::new(self.active, unit))
    }

    pub fn turns(&self) -> TurnBudget {
        self.turns.budget()
    }

    pub fn is_finished(&self) -> bool {
        self.phase == BattlePhase::Finished
    }

    pub fn result(&self) -> Option<&MatchResult> {
        self.result.as_ref()
    }

    /// Player identifier of the winning team.
    pub fn winner(&self) -> Option<&str> {
        self.result.as_ref().map(|result| result.player.as_str())
    }

    fn ensure_running(&self) -> Result<(), CommandError> {
        match self.phase {
            BattlePhase::Setup => Err(CommandError::NotStarted),
            BattlePhase::Finished => Err(CommandError::MatchFinished),
            BattlePhase::ActiveTurn | BattlePhase::TeamSwitch => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::{Stats, Unit};

    fn team(player: &str, creatures: usize) -> Team {
        let leader = Unit::leader(format!("{player}-L"), 60, 30, Stats::new(8, 8, 8, 9, 8));
        let creatures = (0..creatures)
            .map(|i| Unit::creature(format!("{player}-C{i}"), 20, 10, Stats::new(5, 5, 5, 5, 5)))
            .collect();
        Team::new(player, leader, creatures).expect("valid team")
    }

    #[test]
    fn commands_before_initialize_are_rejected() {
        let mut engine = BattleEngine::default();
        assert_eq!(engine.phase(), BattlePhase::Setup);
        assert_eq!(engine.pass(), Err(CommandError::NotStarted));
        assert!(engine.current_actor().is_none());
    }

    #[test]
    fn initialize_grants_one_full_turn_per_board_unit() {
        let mut engine = BattleEngine::default();
        engine.initialize(team("J1", 5), team("J2", 1));

        assert_eq!(engine.phase(), BattlePhase::ActiveTurn);
        assert_eq!(engine.active_side(), Side::First);
        assert_eq!(engine.turns(), TurnBudget::new(4, 0));
        assert_eq!(engine.action_order().len(), 4);
        assert_eq!(engine.current_actor(), Some(UnitRef::new(Side::First, UnitId::LEADER)));
    }

    #[test]
    fn initiative_alternates_when_budget_runs_out() {
        let mut engine = BattleEngine::default();
        engine.initialize(team("J1", 0), team("J2", 2));

        let outcome = engine.pass().unwrap();
        assert_eq!(engine.active_side(), Side::First);
        assert_eq!(outcome.turns.blinking_gained, 1);

        engine.pass().unwrap();
        assert_eq!(engine.active_side(), Side::Second);
        assert_eq!(engine.turns(), TurnBudget::new(3, 0));
        assert_eq!(engine.active_team().map(Team::player), Some("J2"));
    }

    #[test]
    fn simultaneous_wipe_goes_to_the_acting_team() {
        let mut engine = BattleEngine::default();
        engine.initialize(team("J1", 1), team("J2", 1));
        let field = engine.field.as_mut().unwrap();
        for side in [Side::First, Side::Second] {
            for id in [UnitId::LEADER, UnitId(1)] {
                field.unit_mut(UnitRef::new(side, id)).knock_out();
            }
        }

        let result = engine.detect_defeat().unwrap();
        assert_eq!(result.winner, Side::First);
        assert_eq!(result.player, "J1");
        assert_eq!(result.reason, MatchEnd::Defeat);
    }

    #[test]
    fn opponent_wipe_alone_goes_to_the_acting_team() {
        let mut engine = BattleEngine::default();
        engine.initialize(team("J1", 0), team("J2", 0));
        assert!(engine.detect_defeat().is_none());

        engine
            .field
            .as_mut()
            .unwrap()
            .unit_mut(UnitRef::new(Side::First, UnitId::LEADER))
            .knock_out();
        assert_eq!(engine.detect_defeat().map(|result| result.winner), Some(Side::Second));
    }

    #[test]
    fn fallen_creatures_are_deployed_as_is() {
        let mut first = team("J1", 1);
        first.unit_mut(UnitId(1)).unwrap().knock_out();
        let mut engine = BattleEngine::default();
        engine.initialize(first, team("J2", 0));

        let team = engine.active_team().unwrap();
        assert_eq!(team.occupant(1), Some(UnitId(1)));
        assert_eq!(engine.action_order(), &[UnitId::LEADER]);
        assert_eq!(engine.turns(), TurnBudget::new(1, 0));
    }

    #[test]
    fn target_queries_reflect_the_active_side() {
        let mut engine = BattleEngine::default();
        engine.initialize(team("J1", 1), team("J2", 2));

        assert_eq!(engine.enemy_targets().len(), 3);
        assert_eq!(engine.ally_targets().len(), 2);
        assert!(engine.enemy_targets().iter().all(|unit| unit.side == Side::Second));
        assert_eq!(
            engine.find_unit("J2-C1"),
            Some(UnitRef::new(Side::Second, UnitId(2)))
        );
        assert!(engine.available_actions().contains(&crate::state::UnitAction::Shoot));
    }
}
