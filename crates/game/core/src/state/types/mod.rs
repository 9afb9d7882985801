pub mod common;
pub mod grid;
pub mod skill;
pub mod unit;

pub use common::{CardinalDirection, Position, ResourceMeter, UnitId, chebyshev, manhattan};
pub use grid::{Cell, Grid, Hazard, Neighbors, Occupant};
pub use skill::{Skill, SkillEffect, SkillId, SkillTags};
pub use unit::{Unit, UnitClass};
