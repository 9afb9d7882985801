//! Loads the bundled data set and a scratch data directory end to end.

use std::fs;

use game_content::{BehaviorKind, BehaviorProfile, ContentFactory};
use game_core::{FactionId, Position, SkillId, UnitId};
use tempfile::TempDir;

#[test]
fn bundled_data_loads() {
    let factory = ContentFactory::bundled();

    let config = factory.load_config().expect("config.toml");
    assert_eq!(config.search_budget, Some(4096));

    let behaviors = factory.load_behaviors().expect("behaviors.ron");
    assert!(matches!(
        behaviors.get("berserker"),
        Some(BehaviorProfile::Aggressive(weights)) if weights.aggression == 250
    ));
    assert_eq!(
        behaviors.resolve("sniper").unwrap().kind(),
        BehaviorKind::Defensive
    );

    let factions = factory.load_factions().expect("factions.ron");
    assert!(factions.is_hostile(FactionId(0), FactionId(1)));
    assert!(factions.is_allied(FactionId(2), FactionId(1)));
    assert_eq!(factions.name(FactionId(2)), Some("Hill Clans"));

    let skills = factory.load_skills().expect("skills.ron");
    assert!(skills.get(SkillId(4)).unwrap().leaves_hazard());
    assert!(skills.get(SkillId(5)).unwrap().is_supportive());
}

#[test]
fn bundled_skirmish_is_consistent() {
    let factory = ContentFactory::bundled();
    let battle = factory.load_battle("skirmish").expect("skirmish.ron");
    let behaviors = factory.load_behaviors().unwrap();

    assert_eq!(battle.grid.width(), 10);
    assert_eq!(battle.grid.height(), 8);
    for unit in &battle.units {
        let occupant = battle.grid.occupant_at(unit.position).unwrap();
        assert_eq!(occupant.unit, unit.id);
        assert_eq!(occupant.faction, unit.faction);
    }
    for unit in battle.ai_units() {
        let name = battle.behavior_of(unit.id).unwrap();
        assert!(behaviors.resolve(name).is_ok(), "unknown behavior {name}");
    }
    assert_eq!(battle.unit(UnitId(11)).unwrap().hp_percent(), 31);
    assert!(battle.grid.hazard_at(Position::new(3, 5)).is_some());
}

#[test]
fn scratch_directory_round_trip() {
    let temp_dir = TempDir::new().unwrap();
    let root = temp_dir.path();
    fs::create_dir_all(root.join("battles")).unwrap();
    fs::write(root.join("config.toml"), "").unwrap();
    fs::write(root.join("behaviors.ron"), "{}").unwrap();
    fs::write(root.join("factions.ron"), "(relations: [(0, 1, Allied)])").unwrap();
    fs::write(root.join("skills.ron"), r#"[(id: 1, name: "Jab", range: 1)]"#).unwrap();
    fs::write(
        root.join("battles").join("tiny.ron"),
        r#"(
            name: "tiny",
            rows: ["...", "..."],
            units: [
                (id: 1, position: (0, 0), faction: 0, max_hp: 10, skills: [1]),
                (id: 2, position: (2, 1), faction: 1, max_hp: 10, behavior: Some("aggressive")),
            ],
        )"#,
    )
    .unwrap();

    let factory = ContentFactory::new(root);
    assert!(factory.load_config().unwrap().search_budget.is_some());
    assert_eq!(factory.load_behaviors().unwrap().len(), 4);
    assert!(factory.load_factions().unwrap().is_allied(FactionId(1), FactionId(0)));

    let battle = factory.load_battle("tiny").unwrap();
    assert_eq!(battle.seed, 0);
    assert_eq!(battle.skills_of(UnitId(1)).len(), 1);
    assert_eq!(battle.ai_units().map(|u| u.id).collect::<Vec<_>>(), vec![UnitId(2)]);

    assert!(factory.load_battle("missing").is_err());
}
