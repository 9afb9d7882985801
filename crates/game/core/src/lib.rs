//! Spatial rules of a tactical grid battle.
//!
//! `game-core` owns the battlefield model ([`Grid`], [`Unit`], [`Skill`]),
//! faction stances, movement legality ([`nav::Pathfinder`]) and area-of-effect
//! geometry ([`targeting::AreaEffectGeometry`]). Everything here is
//! synchronous and deterministic; the AI crate and host tooling build on the
//! types re-exported below.
pub mod config;
pub mod env;
pub mod error;
pub mod nav;
pub mod state;
pub mod targeting;

pub use config::GameConfig;
pub use env::{
    FactionId, FactionTable, FixedRng, PcgRng, ROLL_SKILL, Relationship, RngOracle,
    compute_seed,
};
pub use error::{ErrorSeverity, GameError};
pub use nav::{BlockingRule, Pathfinder, Reachability, SideBlocking, SolidUnits};
pub use state::{
    CardinalDirection, Cell, Grid, GridError, Hazard, Neighbors, Occupant, Position,
    ResourceMeter, Skill, SkillEffect, SkillId, SkillTags, Unit, UnitClass, UnitId, chebyshev,
    manhattan,
};
pub use targeting::{AffectedArea, AreaEffectGeometry, AreaOrigin, AreaPattern, AreaSpec};
