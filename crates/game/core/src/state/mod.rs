//! Battlefield state as seen by the spatial queries.
//!
//! The grid, unit views and skill definitions are owned by the host's turn
//! system. This crate only reads them during a decision; the mutators on
//! [`Grid`] exist for that turn system to call between turns.
mod error;
pub mod types;

pub use error::GridError;
pub use types::{
    CardinalDirection, Cell, Grid, Hazard, Neighbors, Occupant, Position, ResourceMeter, Skill,
    SkillEffect, SkillId, SkillTags, Unit, UnitClass, UnitId, chebyshev, manhattan,
};
