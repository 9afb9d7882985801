//! Passability rules for movement searches.

use crate::env::FactionTable;
use crate::state::{Grid, Position, Unit};

/// Decides whether a mover may enter (or pass through) a cell.
pub trait BlockingRule {
    fn is_passable(
        &self,
        grid: &Grid,
        factions: &FactionTable,
        mover: &Unit,
        position: Position,
    ) -> bool;
}

/// Default rule: walls block, and so does anyone who is not on your side.
///
/// A cell is passable when it is walkable and either empty, occupied by the
/// mover itself, or occupied by a unit whose faction is allied with the
/// mover's. Neutral and hostile occupants block.
#[derive(Clone, Copy, Debug, Default)]
pub struct SideBlocking;

impl BlockingRule for SideBlocking {
    fn is_passable(
        &self,
        grid: &Grid,
        factions: &FactionTable,
        mover: &Unit,
        position: Position,
    ) -> bool {
        let Some(cell) = grid.cell(position) else {
            return false;
        };
        if !cell.is_walkable() {
            return false;
        }
        match cell.occupant() {
            None => true,
            Some(occupant) if occupant.unit == mover.id => true,
            Some(occupant) => factions.is_allied(mover.faction, occupant.faction),
        }
    }
}

/// Stricter rule: every other unit blocks, allies included.
#[derive(Clone, Copy, Debug, Default)]
pub struct SolidUnits;

impl BlockingRule for SolidUnits {
    fn is_passable(
        &self,
        grid: &Grid,
        _factions: &FactionTable,
        mover: &Unit,
        position: Position,
    ) -> bool {
        grid.cell(position).is_some_and(|cell| {
            cell.is_walkable() && cell.occupant().is_none_or(|occupant| occupant.unit == mover.id)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::env::{FactionId, Relationship};
    use crate::state::{Occupant, UnitId};

    fn setup() -> (Grid, FactionTable, Unit) {
        let mut grid = Grid::from_rows(&["....#"]).unwrap();
        grid.place(Position::new(1, 0), Occupant::new(UnitId(2), FactionId(0)))
            .unwrap();
        grid.place(Position::new(2, 0), Occupant::new(UnitId(3), FactionId(1)))
            .unwrap();
        grid.place(Position::new(3, 0), Occupant::new(UnitId(4), FactionId(2)))
            .unwrap();
        let factions = FactionTable::new().with(FactionId(0), FactionId(2), Relationship::Neutral);
        let mover = Unit::new(UnitId(1), Position::new(0, 0), FactionId(0), 10);
        grid.place_unit(&mover).unwrap();
        (grid, factions, mover)
    }

    #[test]
    fn side_blocking_lets_allies_through() {
        let (grid, factions, mover) = setup();
        let rule = SideBlocking;
        assert!(rule.is_passable(&grid, &factions, &mover, Position::new(0, 0)));
        assert!(rule.is_passable(&grid, &factions, &mover, Position::new(1, 0)));
        assert!(!rule.is_passable(&grid, &factions, &mover, Position::new(2, 0)));
        assert!(!rule.is_passable(&grid, &factions, &mover, Position::new(3, 0)));
        assert!(!rule.is_passable(&grid, &factions, &mover, Position::new(4, 0)));
        assert!(!rule.is_passable(&grid, &factions, &mover, Position::new(5, 0)));
    }

    #[test]
    fn solid_units_block_allies() {
        let (grid, factions, mover) = setup();
        let rule = SolidUnits;
        assert!(rule.is_passable(&grid, &factions, &mover, Position::new(0, 0)));
        assert!(!rule.is_passable(&grid, &factions, &mover, Position::new(1, 0)));
    }
}
