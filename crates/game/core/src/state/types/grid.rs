//! Battle grid: the fixed cell array with walkability, occupancy and hazards.

use arrayvec::ArrayVec;

use crate::config::GameConfig;
use crate::env::FactionId;
use crate::state::GridError;

use super::{CardinalDirection, Position, Unit, UnitId};

/// In-bounds cardinal neighbours of a cell, in [`CardinalDirection::ALL`] order.
pub type Neighbors = ArrayVec<Position, { GameConfig::MAX_NEIGHBORS }>;

/// Lingering ground effect owned by the hazard subsystem.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Hazard {
    pub damage_per_turn: u32,
    /// Turns left before the hazard expires. Negative means permanent.
    pub remaining_turns: i32,
}

impl Hazard {
    pub const fn new(damage_per_turn: u32, remaining_turns: i32) -> Self {
        Self {
            damage_per_turn,
            remaining_turns,
        }
    }

    pub const fn permanent(damage_per_turn: u32) -> Self {
        Self::new(damage_per_turn, -1)
    }

    pub const fn is_permanent(&self) -> bool {
        self.remaining_turns < 0
    }
}

/// Occupancy record. The faction travels with the id so that blocking rules
/// can be evaluated from the grid alone.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Occupant {
    pub unit: UnitId,
    pub faction: FactionId,
}

impl Occupant {
    pub const fn new(unit: UnitId, faction: FactionId) -> Self {
        Self { unit, faction }
    }
}

/// A single grid square.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Cell {
    position: Position,
    walkable: bool,
    occupant: Option<Occupant>,
    hazard: Option<Hazard>,
}

impl Cell {
    fn floor(position: Position) -> Self {
        Self {
            position,
            walkable: true,
            occupant: None,
            hazard: None,
        }
    }

    pub fn position(&self) -> Position {
        self.position
    }

    pub fn x(&self) -> i32 {
        self.position.x
    }

    pub fn y(&self) -> i32 {
        self.position.y
    }

    pub fn is_walkable(&self) -> bool {
        self.walkable
    }

    pub fn occupant(&self) -> Option<Occupant> {
        self.occupant
    }

    pub fn is_occupied(&self) -> bool {
        self.occupant.is_some()
    }

    pub fn hazard(&self) -> Option<&Hazard> {
        self.hazard.as_ref()
    }

    pub fn has_hazard(&self) -> bool {
        self.hazard.is_some()
    }
}

/// Fixed-size 2D cell array. Shape never changes after construction.
///
/// All queries are side-effect free and fail softly: anything outside the
/// grid is simply absent.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Grid {
    width: i32,
    height: i32,
    cells: Vec<Cell>, // Row-major: [y * width + x]
}

impl Grid {
    /// Creates an all-floor grid.
    ///
    /// Structurally invalid shapes are rejected here, at setup time, so that
    /// decision-time code never has to consider them.
    pub fn new(width: i32, height: i32) -> Result<Self, GridError> {
        if width <= 0 || height <= 0 {
            return Err(GridError::InvalidDimensions { width, height });
        }
        let cells = width as usize * height as usize;
        if cells > GameConfig::MAX_GRID_CELLS {
            return Err(GridError::TooLarge {
                cells,
                max: GameConfig::MAX_GRID_CELLS,
            });
        }

        let cells = (0..height)
            .flat_map(|y| (0..width).map(move |x| Cell::floor(Position::new(x, y))))
            .collect();

        Ok(Self {
            width,
            height,
            cells,
        })
    }

    /// Builds a grid from ASCII rows: `#` is a wall, anything else is floor.
    ///
    /// Rows shorter than the first row are padded with floor.
    pub fn from_rows<S: AsRef<str>>(rows: &[S]) -> Result<Self, GridError> {
        let height = rows.len() as i32;
        let width = rows
            .first()
            .map_or(0, |row| row.as_ref().chars().count() as i32);
        let mut grid = Self::new(width, height)?;

        for (y, row) in rows.iter().enumerate() {
            for (x, glyph) in row.as_ref().chars().enumerate().take(width as usize) {
                if glyph == '#' {
                    grid.set_walkable(Position::new(x as i32, y as i32), false)?;
                }
            }
        }

        Ok(grid)
    }

    pub fn width(&self) -> i32 {
        self.width
    }

    pub fn height(&self) -> i32 {
        self.height
    }

    pub fn is_valid(&self, x: i32, y: i32) -> bool {
        x >= 0 && y >= 0 && x < self.width && y < self.height
    }

    pub fn contains(&self, position: Position) -> bool {
        self.is_valid(position.x, position.y)
    }

    fn index(&self, position: Position) -> Option<usize> {
        self.contains(position)
            .then(|| position.y as usize * self.width as usize + position.x as usize)
    }

    /// Cell lookup by coordinates; `None` out of bounds.
    pub fn cell_at(&self, x: i32, y: i32) -> Option<&Cell> {
        self.cell(Position::new(x, y))
    }

    /// Cell lookup by position; `None` out of bounds.
    pub fn cell(&self, position: Position) -> Option<&Cell> {
        self.index(position).map(|index| &self.cells[index])
    }

    fn cell_mut(&mut self, position: Position) -> Result<&mut Cell, GridError> {
        let index = self
            .index(position)
            .ok_or(GridError::OutOfBounds(position))?;
        Ok(&mut self.cells[index])
    }

    /// All cells in row-major order.
    pub fn cells(&self) -> impl Iterator<Item = &Cell> + '_ {
        self.cells.iter()
    }

    pub fn is_walkable(&self, position: Position) -> bool {
        self.cell(position).is_some_and(Cell::is_walkable)
    }

    pub fn occupant_at(&self, position: Position) -> Option<Occupant> {
        self.cell(position).and_then(Cell::occupant)
    }

    pub fn is_occupied(&self, position: Position) -> bool {
        self.occupant_at(position).is_some()
    }

    pub fn hazard_at(&self, position: Position) -> Option<&Hazard> {
        self.cell(position).and_then(Cell::hazard)
    }

    /// In-bounds cardinal neighbours (no diagonals), in N/E/S/W order.
    pub fn cardinal_neighbors(&self, position: Position) -> Neighbors {
        CardinalDirection::ALL
            .iter()
            .map(|direction| {
                let (dx, dy) = direction.delta();
                position.offset(dx, dy)
            })
            .filter(|neighbor| self.contains(*neighbor))
            .collect()
    }

    // ========================================================================
    // Mutation (external collaborators, between turns only)
    // ========================================================================

    pub fn set_walkable(&mut self, position: Position, walkable: bool) -> Result<(), GridError> {
        self.cell_mut(position)?.walkable = walkable;
        Ok(())
    }

    /// Records `unit` as the occupant of its current position.
    pub fn place_unit(&mut self, unit: &Unit) -> Result<(), GridError> {
        self.place(unit.position, Occupant::new(unit.id, unit.faction))
    }

    pub fn place(&mut self, position: Position, occupant: Occupant) -> Result<(), GridError> {
        let cell = self.cell_mut(position)?;
        if !cell.walkable {
            return Err(GridError::NotWalkable(position));
        }
        match cell.occupant {
            Some(existing) if existing.unit != occupant.unit => Err(GridError::Occupied {
                position,
                occupant: existing.unit,
            }),
            _ => {
                cell.occupant = Some(occupant);
                Ok(())
            }
        }
    }

    /// Removes and returns the occupant of `position`, if any.
    pub fn clear_occupant(&mut self, position: Position) -> Option<Occupant> {
        self.cell_mut(position).ok()?.occupant.take()
    }

    pub fn set_hazard(&mut self, position: Position, hazard: Hazard) -> Result<(), GridError> {
        self.cell_mut(position)?.hazard = Some(hazard);
        Ok(())
    }

    /// Removes and returns the hazard on `position`, if any.
    pub fn clear_hazard(&mut self, position: Position) -> Option<Hazard> {
        self.cell_mut(position).ok()?.hazard.take()
    }
}
