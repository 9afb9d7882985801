//! Battle scenario loader.
//!
//! A scenario is a terrain sketch plus the units, hazards and skill loadouts
//! that start on it. Loading validates placement and builds the [`Grid`]
//! with occupancy already recorded.

use std::collections::{BTreeMap, BTreeSet};
use std::path::Path;

use game_core::{
    FactionId, Grid, Hazard, Position, ResourceMeter, Skill, SkillId, Unit, UnitClass, UnitId,
};
use serde::Deserialize;

use crate::loaders::{LoadResult, SkillCatalog, read_file};

#[derive(Debug, Deserialize)]
struct UnitRon {
    id: UnitId,
    position: (i32, i32),
    faction: FactionId,
    max_hp: u32,
    #[serde(default)]
    hp: Option<u32>,
    #[serde(default)]
    class: UnitClass,
    #[serde(default = "default_movement_range")]
    movement_range: u32,
    #[serde(default = "default_attack_range")]
    attack_range: u32,
    /// Behaviour profile name; `None` for player-controlled units.
    #[serde(default)]
    behavior: Option<String>,
    #[serde(default)]
    skills: Vec<SkillId>,
}

fn default_movement_range() -> u32 {
    3
}

fn default_attack_range() -> u32 {
    1
}

#[derive(Debug, Deserialize)]
struct HazardRon {
    position: (i32, i32),
    damage_per_turn: u32,
    #[serde(default = "permanent")]
    remaining_turns: i32,
}

fn permanent() -> i32 {
    -1
}

#[derive(Debug, Deserialize)]
struct BattleRon {
    name: String,
    #[serde(default)]
    seed: u64,
    /// ASCII terrain, one string per row: `#` wall, anything else floor.
    rows: Vec<String>,
    units: Vec<UnitRon>,
    #[serde(default)]
    hazards: Vec<HazardRon>,
}

/// A fully assembled battle: grid with occupancy, units, behaviours and
/// skill loadouts.
#[derive(Clone, Debug)]
pub struct Battle {
    pub name: String,
    pub seed: u64,
    pub grid: Grid,
    /// Sorted by [`UnitId`].
    pub units: Vec<Unit>,
    behaviors: BTreeMap<UnitId, String>,
    loadouts: BTreeMap<UnitId, Vec<Skill>>,
}

impl Battle {
    pub fn unit(&self, id: UnitId) -> Option<&Unit> {
        self.units.iter().find(|unit| unit.id == id)
    }

    /// Behaviour profile name of an AI-controlled unit.
    pub fn behavior_of(&self, id: UnitId) -> Option<&str> {
        self.behaviors.get(&id).map(String::as_str)
    }

    /// Skills the unit can use, in loadout order.
    pub fn skills_of(&self, id: UnitId) -> &[Skill] {
        self.loadouts.get(&id).map_or(&[], Vec::as_slice)
    }

    /// Units that have a behaviour profile, in id order.
    pub fn ai_units(&self) -> impl Iterator<Item = &Unit> + '_ {
        self.units
            .iter()
            .filter(|unit| self.behaviors.contains_key(&unit.id))
    }
}

/// Loader for battle scenarios from RON files.
///
/// ```ron
/// (
///     name: "ambush",
///     seed: 7,
///     rows: ["....", ".#..", "...."],
///     units: [
///         (id: 1, position: (0, 0), faction: 0, max_hp: 30),
///         (id: 2, position: (3, 2), faction: 1, max_hp: 20,
///          class: Mage, behavior: Some("aggressive"), skills: [4]),
///     ],
///     hazards: [(position: (2, 0), damage_per_turn: 5, remaining_turns: 3)],
/// )
/// ```
pub struct BattleLoader;

impl BattleLoader {
    pub fn load(path: &Path, skills: &SkillCatalog) -> LoadResult<Battle> {
        let content = read_file(path)?;
        Self::parse(&content, skills)
            .map_err(|e| anyhow::anyhow!("Invalid battle {}: {}", path.display(), e))
    }

    pub fn parse(content: &str, skills: &SkillCatalog) -> LoadResult<Battle> {
        let data: BattleRon = ron::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse battle RON: {}", e))?;

        let mut grid = Grid::from_rows(&data.rows)
            .map_err(|e| anyhow::anyhow!("Invalid terrain: {}", e))?;

        for hazard in &data.hazards {
            let (x, y) = hazard.position;
            grid.set_hazard(
                Position::new(x, y),
                Hazard::new(hazard.damage_per_turn, hazard.remaining_turns),
            )
            .map_err(|e| anyhow::anyhow!("Invalid hazard: {}", e))?;
        }

        let mut seen = BTreeSet::new();
        let mut units = Vec::with_capacity(data.units.len());
        let mut behaviors = BTreeMap::new();
        let mut loadouts = BTreeMap::new();

        for spec in data.units {
            if !seen.insert(spec.id) {
                anyhow::bail!("Duplicate unit id {}", spec.id);
            }
            if spec.max_hp == 0 {
                anyhow::bail!("Unit {} has zero max_hp", spec.id);
            }

            let (x, y) = spec.position;
            let hp = spec.hp.unwrap_or(spec.max_hp).min(spec.max_hp);
            let unit = Unit {
                id: spec.id,
                position: Position::new(x, y),
                hp: ResourceMeter::new(hp, spec.max_hp),
                faction: spec.faction,
                alive: hp > 0,
                movement_range: spec.movement_range,
                attack_range: spec.attack_range,
                class: spec.class,
            };

            if unit.is_alive() {
                grid.place_unit(&unit)
                    .map_err(|e| anyhow::anyhow!("Cannot place unit {}: {}", unit.id, e))?;
            }

            let loadout = spec
                .skills
                .iter()
                .map(|id| {
                    skills.get(*id).cloned().ok_or_else(|| {
                        anyhow::anyhow!("Unit {} references unknown {}", spec.id, id)
                    })
                })
                .collect::<LoadResult<Vec<_>>>()?;
            if !loadout.is_empty() {
                loadouts.insert(spec.id, loadout);
            }
            if let Some(behavior) = spec.behavior {
                behaviors.insert(spec.id, behavior);
            }
            units.push(unit);
        }
        units.sort_by_key(|unit| unit.id);

        tracing::debug!(
            battle = %data.name,
            width = grid.width(),
            height = grid.height(),
            units = units.len(),
            "battle loaded"
        );

        Ok(Battle {
            name: data.name,
            seed: data.seed,
            grid,
            units,
            behaviors,
            loadouts,
        })
    }
}
