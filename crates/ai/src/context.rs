//! Read-only view of the battlefield for one unit's decision.
//!
//! The [`AiContext`] is the blackboard shared by the three decision phases
//! (target, action, move). It borrows everything and owns nothing but the
//! id-ordered roster, so building one per decision is cheap.

use game_core::{FactionTable, Grid, Position, Skill, Unit, UnitId, chebyshev, manhattan};

/// Context for one unit's decision.
///
/// Every unit query returns units in ascending [`UnitId`] order, which is
/// the tie-break order for equal scores.
pub struct AiContext<'a> {
    /// The unit making the decision.
    pub unit: &'a Unit,
    pub grid: &'a Grid,
    pub factions: &'a FactionTable,
    /// Skills the unit may use this turn, in loadout order.
    pub skills: &'a [Skill],
    roster: Vec<&'a Unit>,
}

impl<'a> AiContext<'a> {
    pub fn new(
        unit: &'a Unit,
        units: &'a [Unit],
        grid: &'a Grid,
        factions: &'a FactionTable,
        skills: &'a [Skill],
    ) -> Self {
        let mut roster: Vec<&Unit> = units.iter().collect();
        roster.sort_by_key(|other| other.id);
        Self {
            unit,
            grid,
            factions,
            skills,
            roster,
        }
    }

    pub fn position(&self) -> Position {
        self.unit.position
    }

    pub fn hp_percent(&self) -> u32 {
        self.unit.hp_percent()
    }

    /// Looks a unit up by id (dead units included).
    pub fn unit(&self, id: UnitId) -> Option<&'a Unit> {
        self.roster.iter().copied().find(|other| other.id == id)
    }

    /// Living units hostile to the acting unit.
    pub fn enemies(&self) -> Vec<&'a Unit> {
        self.roster
            .iter()
            .copied()
            .filter(|other| other.is_alive() && self.is_hostile(other))
            .collect()
    }

    /// Living allied units, excluding the acting unit.
    pub fn allies(&self) -> Vec<&'a Unit> {
        self.roster
            .iter()
            .copied()
            .filter(|other| other.id != self.unit.id && other.is_alive() && self.is_ally(other))
            .collect()
    }

    /// Living allied units including the acting unit itself.
    pub fn allies_and_self(&self) -> Vec<&'a Unit> {
        self.roster
            .iter()
            .copied()
            .filter(|other| {
                other.is_alive() && (other.id == self.unit.id || self.is_ally(other))
            })
            .collect()
    }

    pub fn is_hostile(&self, other: &Unit) -> bool {
        self.factions.is_hostile(self.unit.faction, other.faction)
    }

    pub fn is_ally(&self, other: &Unit) -> bool {
        self.factions.is_allied(self.unit.faction, other.faction)
    }

    pub fn distance_to(&self, position: Position) -> u32 {
        manhattan(self.unit.position, position)
    }

    pub fn reach_to(&self, position: Position) -> u32 {
        chebyshev(self.unit.position, position)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use game_core::{FactionId, Relationship};

    #[test]
    fn rosters_are_filtered_and_sorted() {
        let grid = Grid::new(6, 6).unwrap();
        let factions = FactionTable::new()
            .with(FactionId(0), FactionId(2), Relationship::Allied)
            .with(FactionId(0), FactionId(3), Relationship::Neutral);
        let units = vec![
            Unit::new(UnitId(9), Position::new(5, 5), FactionId(1), 10),
            Unit::new(UnitId(1), Position::new(0, 0), FactionId(0), 10),
            Unit::new(UnitId(4), Position::new(2, 2), FactionId(1), 10),
            Unit::new(UnitId(3), Position::new(1, 1), FactionId(2), 10),
            Unit::new(UnitId(5), Position::new(3, 3), FactionId(1), 10).dead(),
            Unit::new(UnitId(6), Position::new(4, 4), FactionId(3), 10),
        ];
        let me = units[1].clone();
        let ctx = AiContext::new(&me, &units, &grid, &factions, &[]);

        let enemies: Vec<_> = ctx.enemies().iter().map(|u| u.id).collect();
        assert_eq!(enemies, vec![UnitId(4), UnitId(9)]);
        let allies: Vec<_> = ctx.allies().iter().map(|u| u.id).collect();
        assert_eq!(allies, vec![UnitId(3)]);
        let team: Vec<_> = ctx.allies_and_self().iter().map(|u| u.id).collect();
        assert_eq!(team, vec![UnitId(1), UnitId(3)]);
        assert!(ctx.unit(UnitId(5)).is_some());
        assert_eq!(ctx.distance_to(Position::new(2, 3)), 5);
        assert_eq!(ctx.reach_to(Position::new(2, 3)), 3);
    }
}
