//! One round of decisions on the bundled skirmish scenario.

use game_content::{Battle, BehaviorRegistry, ContentFactory};
use game_core::{FactionTable, Pathfinder, PcgRng, SkillId, UnitId, manhattan};
use tactical_ai::{ActionType, AiDecision, Strategy, TacticalAiController};

fn load() -> (Battle, FactionTable, BehaviorRegistry) {
    let factory = ContentFactory::bundled();
    (
        factory.load_battle("skirmish").unwrap(),
        factory.load_factions().unwrap(),
        factory.load_behaviors().unwrap(),
    )
}

fn decide_all(
    battle: &Battle,
    factions: &FactionTable,
    behaviors: &BehaviorRegistry,
) -> Vec<AiDecision> {
    let pathfinder = Pathfinder::new(&battle.grid, factions);
    let controller = TacticalAiController::new(&battle.grid, factions, &pathfinder, &PcgRng)
        .with_seed(battle.seed);

    battle
        .ai_units()
        .map(|unit| {
            let name = battle.behavior_of(unit.id).unwrap();
            let profile = behaviors.resolve(name).unwrap();
            let strategy = Strategy::from(&profile);
            controller.decide(unit, &strategy, &battle.units, battle.skills_of(unit.id))
        })
        .collect()
}

#[test]
fn medic_patches_up_the_wounded_mage() {
    let (battle, factions, behaviors) = load();
    let decisions = decide_all(&battle, &factions, &behaviors);
    let medic = decisions.iter().find(|d| d.unit == UnitId(13)).unwrap();

    assert_eq!(medic.action, ActionType::Support);
    assert_eq!(medic.target, Some(UnitId(11)));
    assert_eq!(medic.skill, Some(SkillId(5)));
}

#[test]
fn wounded_sniper_falls_back() {
    let (battle, factions, behaviors) = load();
    let decisions = decide_all(&battle, &factions, &behaviors);
    let sniper = decisions.iter().find(|d| d.unit == UnitId(11)).unwrap();

    // The wounded cleric is the softest mark; it is out of spell range.
    assert_eq!(sniper.target, Some(UnitId(3)));
    assert_eq!(sniper.action, ActionType::Move);
    let cleric = battle.unit(UnitId(3)).unwrap().position;
    let start = battle.unit(UnitId(11)).unwrap().position;
    let destination = sniper.destination.unwrap();
    assert!(manhattan(destination, cleric) > manhattan(start, cleric));
}

#[test]
fn every_decision_is_executable() {
    let (battle, factions, behaviors) = load();
    let decisions = decide_all(&battle, &factions, &behaviors);
    assert_eq!(decisions.len(), battle.ai_units().count());

    for decision in &decisions {
        let unit = battle.unit(decision.unit).unwrap();
        match decision.action {
            ActionType::Move => {
                let destination = decision.destination.unwrap();
                assert!(battle.grid.is_walkable(destination));
                assert!(battle.grid.occupant_at(destination).is_none());
                let path = decision.path.as_ref().unwrap();
                assert_eq!(path.last(), Some(&destination));
                assert!(path.len() as u32 <= unit.movement_range);
            }
            ActionType::UseSkill | ActionType::Support => {
                let skill = decision.skill.unwrap();
                let loadout = battle.skills_of(unit.id);
                let skill = loadout.iter().find(|s| s.id == skill).unwrap();
                let target = battle.unit(decision.target.unwrap()).unwrap();
                assert!(skill.reaches(unit.position, target.position));
            }
            ActionType::MeleeAttack | ActionType::RangedAttack => {
                let target = battle.unit(decision.target.unwrap()).unwrap();
                assert!(unit.position.chebyshev(target.position) <= unit.attack_range);
            }
            ActionType::Wait => {}
        }
    }

    // Same seed, same battle: same decisions.
    assert_eq!(decisions, decide_all(&battle, &factions, &behaviors));
}
