use pressturn_core::{
    Affinity, AffinityTable, BattleEngine, BattleEvent, CommandError, Element, LEADER_SLOT,
    MatchEnd, MatchResult, Side, Skill, SkillCategory, SkillRejection, Stats, Team, TargetMode,
    TurnBudget, TurnConsumption, Unit, UnitAction, UnitId, UnitRef,
};

fn leader(name: &str, hp: u32, speed: u32) -> Unit {
    Unit::leader(name, hp, 50, Stats::new(10, 10, 10, speed, 10))
}

fn creature(name: &str, hp: u32, speed: u32) -> Unit {
    Unit::creature(name, hp, 20, Stats::new(10, 10, 10, speed, 10))
}

fn team(player: &str, leader: Unit, creatures: Vec<Unit>) -> Team {
    Team::new(player, leader, creatures).expect("valid team")
}

fn start(first: Team, second: Team) -> BattleEngine {
    let mut engine = BattleEngine::default();
    engine.initialize(first, second);
    engine
}

fn ally(unit: UnitId) -> UnitRef {
    UnitRef::new(Side::First, unit)
}

fn foe(unit: UnitId) -> UnitRef {
    UnitRef::new(Side::Second, unit)
}

fn hp_of(engine: &BattleEngine, unit: UnitRef) -> u32 {
    engine.field().unwrap().unit(unit).hp().current
}

#[test]
fn ten_strength_attack_leaves_fifteen_hp_target_at_nine() {
    let first = team("J1", leader("Flynn", 100, 10), Vec::new());
    let second = team("J2", leader("Walter", 15, 5), vec![creature("Slime", 20, 3)]);
    let mut engine = start(first, second);

    let outcome = engine.attack(UnitId::LEADER, foe(UnitId::LEADER)).unwrap();

    assert_eq!(outcome.damage_dealt, 6);
    assert_eq!(outcome.affinity, Some(Affinity::Neutral));
    assert_eq!(hp_of(&engine, foe(UnitId::LEADER)), 9);
    assert!(outcome.lines().any(|line| line == "Walter ends with HP:9/15"));

    // One full turn spent: initiative moves to J2 with one turn per living board unit.
    assert_eq!(engine.active_side(), Side::Second);
    assert_eq!(engine.turns(), TurnBudget::new(2, 0));
    assert_eq!(
        outcome.log.last(),
        Some(&BattleEvent::InitiativePassed {
            player: "J2".into()
        })
    );
}

#[test]
fn null_hit_deals_nothing_and_costs_two_full_turns() {
    let first = team(
        "J1",
        leader("Flynn", 100, 10),
        vec![creature("Pixie", 20, 5), creature("Jack", 20, 4)],
    );
    let walter = leader("Walter", 40, 5)
        .with_affinities(AffinityTable::new().with(Element::Phys, Affinity::Null));
    let mut engine = start(first, team("J2", walter, Vec::new()));

    let outcome = engine.attack(UnitId::LEADER, foe(UnitId::LEADER)).unwrap();

    assert_eq!(outcome.damage_dealt, 0);
    assert_eq!(outcome.affinity, Some(Affinity::Null));
    assert_eq!(outcome.turns, TurnConsumption::new(2, 0, 0));
    assert_eq!(hp_of(&engine, foe(UnitId::LEADER)), 40);
    assert_eq!(engine.turns(), TurnBudget::new(1, 0));
    assert_eq!(engine.active_side(), Side::First);
}

#[test]
fn repel_hurts_attacker_and_ends_initiative() {
    let first = team(
        "J1",
        leader("Flynn", 100, 10),
        vec![creature("Pixie", 20, 5), creature("Jack", 20, 4)],
    );
    let walter = leader("Walter", 40, 5)
        .with_affinities(AffinityTable::new().with(Element::Phys, Affinity::Repel));
    let mut engine = start(first, team("J2", walter, Vec::new()));

    let outcome = engine.attack(UnitId::LEADER, foe(UnitId::LEADER)).unwrap();

    assert_eq!(outcome.turns, TurnConsumption::new(3, 0, 0));
    assert_eq!(hp_of(&engine, ally(UnitId::LEADER)), 94);
    assert_eq!(hp_of(&engine, foe(UnitId::LEADER)), 40);
    assert_eq!(engine.active_side(), Side::Second);
}

#[test]
fn drain_heals_target_and_ends_initiative() {
    let first = team("J1", leader("Flynn", 100, 10), vec![creature("Pixie", 20, 5)]);
    let mut walter = leader("Walter", 15, 5)
        .with_affinities(AffinityTable::new().with(Element::Phys, Affinity::Drain));
    walter.take_damage(10);
    let mut engine = start(first, team("J2", walter, Vec::new()));

    let outcome = engine.attack(UnitId::LEADER, foe(UnitId::LEADER)).unwrap();

    assert_eq!(outcome.damage_dealt, 0);
    assert_eq!(hp_of(&engine, foe(UnitId::LEADER)), 11);
    assert_eq!(outcome.turns, TurnConsumption::new(2, 0, 0));
    assert_eq!(engine.active_side(), Side::Second);
}

#[test]
fn exploiting_weakness_stretches_initiative_without_growing_total() {
    let first = team(
        "J1",
        leader("Flynn", 100, 10),
        vec![creature("Pixie", 20, 5), creature("Jack", 20, 4)],
    );
    let walter = leader("Walter", 200, 5)
        .with_affinities(AffinityTable::new().with(Element::Phys, Affinity::Weak));
    let mut engine = start(first, team("J2", walter, Vec::new()));

    let mut previous = engine.turns().total();
    let mut actions = 0;
    while engine.active_side() == Side::First {
        let actor = engine.current_actor().unwrap();
        engine.attack(actor.unit, foe(UnitId::LEADER)).unwrap();
        actions += 1;
        if engine.active_side() == Side::First {
            let total = engine.turns().total();
            assert!(total <= previous, "turn total grew from {previous} to {total}");
            previous = total;
        }
    }

    // Three full turns become three blinking turns, then each blinking turn is spent.
    assert_eq!(actions, 6);
    // floor(6.156 × 1.5) = 9 per hit.
    assert_eq!(hp_of(&engine, foe(UnitId::LEADER)), 200 - 6 * 9);
}

#[test]
fn pass_trades_full_turn_for_blinking_turn() {
    let first = team("J1", leader("Flynn", 100, 10), vec![creature("Pixie", 20, 5)]);
    let mut engine = start(first, team("J2", leader("Walter", 40, 5), Vec::new()));

    let outcome = engine.pass().unwrap();

    assert_eq!(outcome.turns, TurnConsumption::new(1, 0, 1));
    assert_eq!(engine.turns(), TurnBudget::new(1, 1));
    assert_eq!(engine.current_actor(), Some(ally(UnitId(1))));

    engine.pass().unwrap();
    assert_eq!(engine.turns(), TurnBudget::new(1, 0));
}

#[test]
fn recarm_revives_fallen_creature_at_half_hp() {
    let flynn = leader("Flynn", 100, 10).with_skills(["Recarm"]);
    let mut pixie = creature("Pixie", 21, 6);
    pixie.knock_out();
    let first = team("J1", flynn, vec![pixie, creature("Jack", 20, 5)]);
    let mut engine = start(first, team("J2", leader("Walter", 40, 5), Vec::new()));

    assert_eq!(engine.fallen_allies(), vec![ally(UnitId(1))]);
    assert_eq!(engine.turns(), TurnBudget::new(2, 0));

    let recarm = Skill::new("Recarm", SkillCategory::Heal)
        .with_cost(8)
        .with_target(TargetMode::Ally);
    engine
        .use_skill(UnitId::LEADER, ally(UnitId(1)), &recarm, None)
        .unwrap();

    let field = engine.field().unwrap();
    assert_eq!(field.unit(ally(UnitId(1))).hp().current, 10);
    assert_eq!(field.unit(ally(UnitId::LEADER)).mp().current, 42);
    assert_eq!(field.team(Side::First).skill_uses(), 1);
    assert_eq!(engine.turns(), TurnBudget::new(1, 0));
    assert_eq!(engine.action_order(), &[UnitId(2), UnitId::LEADER, UnitId(1)]);
}

#[test]
fn revival_on_living_target_is_rejected_without_cost() {
    let flynn = leader("Flynn", 100, 10).with_skills(["Samarecarm"]);
    let first = team("J1", flynn, vec![creature("Pixie", 20, 5)]);
    let mut engine = start(first, team("J2", leader("Walter", 40, 5), Vec::new()));
    let before = engine.field().cloned();

    let samarecarm = Skill::new("Samarecarm", SkillCategory::Heal).with_cost(20);
    let err = engine
        .use_skill(UnitId::LEADER, ally(UnitId(1)), &samarecarm, None)
        .unwrap_err();

    assert!(matches!(
        err,
        CommandError::Skill(SkillRejection::TargetAlive { .. })
    ));
    assert_eq!(engine.field().cloned(), before);
    assert_eq!(engine.turns(), TurnBudget::new(2, 0));
}

#[test]
fn fallen_leader_keeps_its_slot_while_creatures_fight_on() {
    let first = team("J1", leader("Flynn", 100, 10), Vec::new());
    let second = team("J2", leader("Walter", 5, 5), vec![creature("Slime", 30, 3)]);
    let mut engine = start(first, second);

    let outcome = engine.attack(UnitId::LEADER, foe(UnitId::LEADER)).unwrap();

    assert!(outcome.finished.is_none());
    assert!(!engine.is_finished());
    let walter_team = engine.field().unwrap().team(Side::Second);
    assert_eq!(walter_team.occupant(LEADER_SLOT), Some(UnitId::LEADER));
    assert!(!walter_team.leader().is_alive());

    assert_eq!(engine.active_side(), Side::Second);
    assert_eq!(engine.turns(), TurnBudget::new(1, 0));
    assert_eq!(engine.action_order(), &[UnitId(1)]);
}

#[test]
fn light_skill_kills_resisting_creature_with_enough_luck() {
    let flynn = leader("Flynn", 100, 10).with_skills(["Hama"]);
    let angel = Unit::creature("Angel", 30, 20, Stats::new(10, 10, 10, 5, 7))
        .with_affinities(AffinityTable::new().with(Element::Light, Affinity::Resist));
    let second = team("J2", leader("Walter", 40, 5), vec![angel]);
    let mut engine = start(team("J1", flynn, Vec::new()), second);

    let hama = Skill::new("Hama", SkillCategory::Element(Element::Light))
        .with_cost(5)
        .with_power(5);
    let outcome = engine
        .use_skill(UnitId::LEADER, foe(UnitId(1)), &hama, None)
        .unwrap();

    assert_eq!(outcome.affinity, Some(Affinity::Resist));
    assert_eq!(outcome.turns, TurnConsumption::new(1, 0, 0));
    let walter_team = engine.field().unwrap().team(Side::Second);
    assert!(!walter_team.unit(UnitId(1)).unwrap().is_alive());
    assert_eq!(walter_team.occupant(1), None);
    assert_eq!(walter_team.reserve(), &[UnitId(1)]);
}

#[test]
fn light_skill_misses_when_luck_falls_short() {
    let flynn = leader("Flynn", 100, 10).with_skills(["Hama"]);
    let angel = Unit::creature("Angel", 30, 20, Stats::new(10, 10, 10, 5, 8))
        .with_affinities(AffinityTable::new().with(Element::Light, Affinity::Resist));
    let second = team("J2", leader("Walter", 40, 5), vec![angel]);
    let first = team("J1", flynn, vec![creature("Pixie", 20, 5)]);
    let mut engine = start(first, second);

    let hama = Skill::new("Hama", SkillCategory::Element(Element::Light)).with_power(5);
    let outcome = engine
        .use_skill(UnitId::LEADER, foe(UnitId(1)), &hama, None)
        .unwrap();

    assert_eq!(hp_of(&engine, foe(UnitId(1))), 30);
    assert!(outcome.log.contains(&BattleEvent::Missed {
        attacker: "Flynn".into()
    }));
    assert_eq!(engine.turns(), TurnBudget::new(1, 0));
}

#[test]
fn wiping_out_the_board_wins_the_match() {
    let first = team("J1", leader("Flynn", 100, 10), Vec::new());
    let mut engine = start(first, team("J2", leader("Walter", 5, 5), Vec::new()));

    let outcome = engine.attack(UnitId::LEADER, foe(UnitId::LEADER)).unwrap();

    let expected = MatchResult {
        winner: Side::First,
        player: "J1".into(),
        reason: MatchEnd::Defeat,
    };
    assert_eq!(outcome.finished, Some(expected));
    assert_eq!(
        outcome.log.last(),
        Some(&BattleEvent::Winner {
            player: "J1".into()
        })
    );
    assert_eq!(engine.winner(), Some("J1"));
    assert_eq!(engine.current_actor(), None);
}

#[test]
fn surrender_hands_the_match_to_the_opponent() {
    let first = team("J1", leader("Flynn", 100, 10), Vec::new());
    let mut engine = start(first, team("J2", leader("Walter", 40, 5), Vec::new()));

    let outcome = engine.surrender(Side::First).unwrap();

    assert_eq!(outcome.finished.map(|result| result.reason), Some(MatchEnd::Surrender));
    assert_eq!(engine.winner(), Some("J2"));
    assert!(engine.is_finished());
    assert_eq!(engine.pass(), Err(CommandError::MatchFinished));
}

#[test]
fn invalid_commands_leave_the_battle_untouched() {
    let flynn = leader("Flynn", 100, 10).with_skills(["Agi"]);
    let first = team("J1", flynn, vec![creature("Pixie", 20, 12)]);
    let mut engine = start(first, team("J2", leader("Walter", 40, 5), Vec::new()));
    let before = engine.field().cloned();

    // Pixie is faster, so she heads the order.
    assert_eq!(engine.current_actor(), Some(ally(UnitId(1))));
    assert!(matches!(
        engine.attack(UnitId::LEADER, foe(UnitId::LEADER)),
        Err(CommandError::ActorNotCurrent { .. })
    ));
    assert!(matches!(
        engine.shoot(UnitId(1), foe(UnitId::LEADER)),
        Err(CommandError::ActionNotAllowed {
            action: UnitAction::Shoot,
            ..
        })
    ));
    assert!(matches!(
        engine.attack(UnitId(1), ally(UnitId::LEADER)),
        Err(CommandError::WrongSide { .. })
    ));
    let agi = Skill::new("Agi", SkillCategory::Element(Element::Fire)).with_cost(3);
    assert!(matches!(
        engine.use_skill(UnitId(1), foe(UnitId::LEADER), &agi, None),
        Err(CommandError::SkillNotKnown { .. })
    ));

    assert_eq!(engine.field().cloned(), before);
    assert_eq!(engine.turns(), TurnBudget::new(2, 0));
    assert_eq!(engine.action_order(), &[UnitId(1), UnitId::LEADER]);
}

#[test]
fn skill_costing_more_than_current_mp_is_rejected() {
    let flynn = Unit::leader("Flynn", 100, 4, Stats::new(10, 10, 10, 10, 10)).with_skills(["Agi"]);
    let mut engine = start(
        team("J1", flynn, Vec::new()),
        team("J2", leader("Walter", 40, 5), Vec::new()),
    );

    let agi = Skill::new("Agi", SkillCategory::Element(Element::Fire))
        .with_cost(5)
        .with_power(10);
    assert_eq!(
        engine.use_skill(UnitId::LEADER, foe(UnitId::LEADER), &agi, None),
        Err(CommandError::InsufficientMp {
            unit: "Flynn".into(),
            needed: 5,
            available: 4,
        })
    );
}
