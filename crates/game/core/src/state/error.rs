//! Grid setup and mutation errors.
//!
//! Queries never fail; these errors are raised while a battle grid is being
//! built or while the turn system updates occupancy and hazards between turns.

use crate::error::{ErrorSeverity, GameError};
use crate::state::{Position, UnitId};

/// Errors that occur while building or mutating a [`crate::Grid`].
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum GridError {
    /// Width or height is zero or negative.
    #[error("grid dimensions must be positive (width: {width}, height: {height})")]
    InvalidDimensions { width: i32, height: i32 },

    /// The grid would exceed the supported cell count.
    #[error("grid of {cells} cells exceeds the maximum of {max}")]
    TooLarge { cells: usize, max: usize },

    /// Position is outside the grid bounds.
    #[error("position {0} is out of grid bounds")]
    OutOfBounds(Position),

    /// A unit cannot stand on a non-walkable cell.
    #[error("cell {0} is not walkable")]
    NotWalkable(Position),

    /// Cell is already occupied by another unit.
    #[error("cell {position} is already occupied by unit {occupant}")]
    Occupied {
        position: Position,
        occupant: UnitId,
    },
}

impl GameError for GridError {
    fn severity(&self) -> ErrorSeverity {
        use GridError::*;
        match self {
            InvalidDimensions { .. } | TooLarge { .. } => ErrorSeverity::Fatal,
            OutOfBounds(_) | NotWalkable(_) => ErrorSeverity::Validation,
            Occupied { .. } => ErrorSeverity::Recoverable,
        }
    }

    fn error_code(&self) -> &'static str {
        use GridError::*;
        match self {
            InvalidDimensions { .. } => "GRID_INVALID_DIMENSIONS",
            TooLarge { .. } => "GRID_TOO_LARGE",
            OutOfBounds(_) => "GRID_OUT_OF_BOUNDS",
            NotWalkable(_) => "GRID_NOT_WALKABLE",
            Occupied { .. } => "GRID_OCCUPIED",
        }
    }
}
