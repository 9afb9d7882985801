//! Data-driven battle content and loaders.
//!
//! This crate houses AI behaviour weights and loaders for the RON/TOML data
//! a battle is set up from:
//! - Behaviour profiles (strategy variant + weights)
//! - Faction stances
//! - Skill catalog
//! - Battle scenarios (terrain, units, hazards, loadouts)
//! - Engine configuration
//!
//! Content is read once at battle start and never mutated during combat.

pub mod behavior;

#[cfg(feature = "loaders")]
pub mod loaders;

pub use behavior::{
    AggressiveWeights, BehaviorKind, BehaviorProfile, BehaviorRegistry, CoreWeights,
    DefensiveWeights, ProtectorWeights, SupportWeights,
};

#[cfg(feature = "loaders")]
pub use loaders::{
    Battle, BattleLoader, BehaviorLoader, ConfigLoader, ContentFactory, FactionLoader,
    LoadResult, SkillCatalog, SkillLoader,
};
