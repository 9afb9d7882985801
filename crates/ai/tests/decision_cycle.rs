//! Full decision cycles through the controller.

use game_content::{AggressiveWeights, DefensiveWeights, SupportWeights};
use game_core::{
    AreaEffectGeometry, AreaOrigin, AreaPattern, FactionId, FactionTable, FixedRng, Grid,
    Pathfinder, PcgRng, Position, Skill, SkillEffect, SkillId, Unit, UnitClass, UnitId, manhattan,
};
use tactical_ai::{ActionType, Strategy, TacticalAiController};

const BLUE: FactionId = FactionId(0);
const RED: FactionId = FactionId(1);

fn p(x: i32, y: i32) -> Position {
    Position::new(x, y)
}

fn board(width: i32, height: i32, units: &[Unit]) -> Grid {
    let mut grid = Grid::new(width, height).unwrap();
    for unit in units {
        grid.place_unit(unit).unwrap();
    }
    grid
}

#[test]
fn advancing_unit_carries_its_path() {
    let units = vec![
        Unit::new(UnitId(1), p(0, 1), BLUE, 10),
        Unit::new(UnitId(2), p(5, 1), RED, 10),
    ];
    let grid = board(6, 3, &units);
    let factions = FactionTable::new();
    let pathfinder = Pathfinder::new(&grid, &factions);
    let rng = FixedRng(99);
    let controller = TacticalAiController::new(&grid, &factions, &pathfinder, &rng);
    let weights = AggressiveWeights::default();

    let decision = controller.decide(&units[0], &Strategy::Aggressive(&weights), &units, &[]);

    assert_eq!(decision.action, ActionType::Move);
    assert_eq!(decision.target, Some(UnitId(2)));
    assert_eq!(decision.destination, Some(p(3, 1)));
    assert_eq!(decision.path, Some(vec![p(1, 1), p(2, 1), p(3, 1)]));
}

#[test]
fn allies_are_walked_through_but_never_stood_on() {
    let mut units = vec![
        Unit::new(UnitId(1), p(0, 0), BLUE, 10),
        Unit::new(UnitId(2), p(1, 0), BLUE, 10),
        Unit::new(UnitId(3), p(4, 0), RED, 10),
    ];
    let grid = board(5, 3, &units);
    let factions = FactionTable::new();
    let pathfinder = Pathfinder::new(&grid, &factions);
    let rng = FixedRng(99);
    let controller = TacticalAiController::new(&grid, &factions, &pathfinder, &rng);
    let weights = AggressiveWeights::default();
    let strategy = Strategy::Aggressive(&weights);

    let decision = controller.decide(&units[0], &strategy, &units, &[]);
    assert_eq!(decision.destination, Some(p(3, 0)));
    assert_eq!(decision.path, Some(vec![p(1, 0), p(2, 0), p(3, 0)]));

    // With a second ally on the attack square the unit stops short.
    units.push(Unit::new(UnitId(4), p(3, 0), BLUE, 10));
    let grid = board(5, 3, &units);
    let pathfinder = Pathfinder::new(&grid, &factions);
    let controller = TacticalAiController::new(&grid, &factions, &pathfinder, &rng);
    let decision = controller.decide(&units[0], &strategy, &units, &[]);
    assert_eq!(decision.destination, Some(p(2, 0)));
    assert_eq!(decision.path, Some(vec![p(1, 0), p(2, 0)]));
}

#[test]
fn area_skill_fills_the_affected_cells() {
    let fireball = Skill::new(SkillId(4), "Fireball", 5)
        .with_area(AreaPattern::Cloud, AreaOrigin::AtTarget, 1)
        .with_ground_hazard();
    let units = vec![
        Unit::new(UnitId(1), p(0, 0), BLUE, 10).with_class(UnitClass::Mage),
        Unit::new(UnitId(2), p(3, 0), RED, 10),
    ];
    let grid = board(6, 6, &units);
    let factions = FactionTable::new();
    let pathfinder = Pathfinder::new(&grid, &factions);
    let rng = FixedRng(99);
    let controller = TacticalAiController::new(&grid, &factions, &pathfinder, &rng);
    let weights = AggressiveWeights::default();
    let skills = [fireball];

    let decision = controller.decide(&units[0], &Strategy::Aggressive(&weights), &units, &skills);

    assert_eq!(decision.action, ActionType::UseSkill);
    assert_eq!(decision.skill, Some(SkillId(4)));
    assert_eq!(decision.affected.len(), 5);
    for cell in [p(2, 0), p(4, 0), p(2, 1), p(3, 1), p(4, 1)] {
        assert!(decision.affected.contains(cell), "missing {cell}");
    }
    let preview = AreaEffectGeometry::new(&grid).for_skill(&skills[0], p(0, 0), p(3, 0));
    assert_eq!(decision.affected, preview);
}

#[test]
fn the_roll_decides_between_skill_and_melee() {
    let cleave = Skill::new(SkillId(1), "Cleave", 1);
    let units = vec![
        Unit::new(UnitId(1), p(1, 1), BLUE, 10),
        Unit::new(UnitId(2), p(2, 1), RED, 10),
    ];
    let grid = board(4, 4, &units);
    let factions = FactionTable::new();
    let pathfinder = Pathfinder::new(&grid, &factions);
    let weights = AggressiveWeights::default();
    let strategy = Strategy::Aggressive(&weights);
    let skills = [cleave];

    let low = FixedRng(0);
    let controller = TacticalAiController::new(&grid, &factions, &pathfinder, &low);
    let decision = controller.decide(&units[0], &strategy, &units, &skills);
    assert_eq!(decision.action, ActionType::UseSkill);
    assert_eq!(decision.skill, Some(SkillId(1)));
    assert!(decision.affected.is_empty());

    let high = FixedRng(99);
    let controller = TacticalAiController::new(&grid, &factions, &pathfinder, &high);
    let decision = controller.decide(&units[0], &strategy, &units, &skills);
    assert_eq!(decision.action, ActionType::MeleeAttack);
    assert_eq!(decision.skill, None);
}

#[test]
fn healer_supports_a_wounded_ally() {
    let mend = Skill::new(SkillId(5), "Mend", 3).with_effect(SkillEffect::Supportive);
    let units = vec![
        Unit::new(UnitId(1), p(0, 0), BLUE, 10).with_class(UnitClass::Cleric),
        Unit::new(UnitId(2), p(2, 0), BLUE, 10).with_hp(5),
        Unit::new(UnitId(3), p(5, 5), RED, 10),
    ];
    let grid = board(6, 6, &units);
    let factions = FactionTable::new();
    let pathfinder = Pathfinder::new(&grid, &factions);
    let rng = PcgRng;
    let controller = TacticalAiController::new(&grid, &factions, &pathfinder, &rng);
    let weights = SupportWeights::default();
    let skills = [mend];

    let decision = controller.decide(&units[0], &Strategy::Support(&weights), &units, &skills);

    assert_eq!(decision.action, ActionType::Support);
    assert_eq!(decision.target, Some(UnitId(2)));
    assert_eq!(decision.skill, Some(SkillId(5)));
}

#[test]
fn self_cast_healing_cloud_covers_the_neighbours() {
    let mist = Skill::new(SkillId(8), "Healing Mist", 1)
        .with_effect(SkillEffect::Supportive)
        .with_area(AreaPattern::Cloud, AreaOrigin::FromCaster, 1);
    let units = vec![
        Unit::new(UnitId(1), p(2, 2), BLUE, 10)
            .with_hp(4)
            .with_class(UnitClass::Cleric),
        Unit::new(UnitId(2), p(2, 3), BLUE, 10),
        Unit::new(UnitId(3), p(5, 5), RED, 10),
    ];
    let grid = board(6, 6, &units);
    let factions = FactionTable::new();
    let pathfinder = Pathfinder::new(&grid, &factions);
    let controller = TacticalAiController::new(&grid, &factions, &pathfinder, &PcgRng);
    let weights = SupportWeights::default();
    let skills = [mist];

    let decision = controller.decide(&units[0], &Strategy::Support(&weights), &units, &skills);

    assert_eq!(decision.action, ActionType::Support);
    assert_eq!(decision.target, Some(UnitId(1)));
    assert_eq!(decision.skill, Some(SkillId(8)));
    assert_eq!(decision.affected.len(), 8);
    assert!(decision.affected.contains(p(2, 3)));
    assert!(!decision.affected.contains(p(2, 2)));
}

#[test]
fn wounded_defender_backs_away() {
    let units = vec![
        Unit::new(UnitId(1), p(2, 2), BLUE, 10).with_hp(2),
        Unit::new(UnitId(2), p(3, 2), RED, 10),
    ];
    let grid = board(7, 7, &units);
    let factions = FactionTable::new();
    let pathfinder = Pathfinder::new(&grid, &factions);
    let rng = FixedRng(0);
    let controller = TacticalAiController::new(&grid, &factions, &pathfinder, &rng);
    let weights = DefensiveWeights::default();

    let decision = controller.decide(&units[0], &Strategy::Defensive(&weights), &units, &[]);

    assert_eq!(decision.action, ActionType::Move);
    let destination = decision.destination.unwrap();
    assert!(manhattan(destination, p(3, 2)) > manhattan(p(2, 2), p(3, 2)));
    assert_eq!(decision.path.unwrap().last(), Some(&destination));
}

#[test]
fn staying_put_is_a_wait() {
    let units = vec![
        Unit::new(UnitId(1), p(0, 0), BLUE, 10),
        Unit::new(UnitId(2), p(2, 0), RED, 10),
    ];
    let grid = board(5, 5, &units);
    let factions = FactionTable::new();
    let pathfinder = Pathfinder::new(&grid, &factions);
    let rng = FixedRng(0);
    let controller = TacticalAiController::new(&grid, &factions, &pathfinder, &rng);
    let weights = DefensiveWeights::default();

    // Already inside the preferred band and first in cell order.
    let decision = controller.decide(&units[0], &Strategy::Defensive(&weights), &units, &[]);
    assert!(decision.is_wait());
    assert_eq!(decision.destination, None);
}

#[test]
fn seeded_decisions_replay() {
    let skills = [Skill::new(SkillId(1), "Cleave", 1)];
    let units = vec![
        Unit::new(UnitId(1), p(1, 1), BLUE, 10),
        Unit::new(UnitId(2), p(1, 2), RED, 10),
    ];
    let grid = board(4, 4, &units);
    let factions = FactionTable::new();
    let pathfinder = Pathfinder::new(&grid, &factions);
    let weights = AggressiveWeights::default();
    let strategy = Strategy::Aggressive(&weights);

    let mut controller =
        TacticalAiController::new(&grid, &factions, &pathfinder, &PcgRng).with_seed(42);
    let mut first = Vec::new();
    for turn in 0..20 {
        controller.set_turn(turn);
        first.push(controller.decide(&units[0], &strategy, &units, &skills));
    }
    for (turn, expected) in first.iter().enumerate() {
        controller.set_turn(turn as u64);
        assert_eq!(&controller.decide(&units[0], &strategy, &units, &skills), expected);
    }
    assert!(first.iter().all(|decision| matches!(
        decision.action,
        ActionType::UseSkill | ActionType::MeleeAttack
    )));
}
