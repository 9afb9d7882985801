//! Content loaders for reading battle data from files.
//!
//! TOML holds the engine configuration; everything else (behaviour
//! profiles, faction stances, skill catalog, battle scenarios) is RON.

pub mod battle;
pub mod behaviors;
pub mod config;
pub mod factions;
pub mod factory;
pub mod skills;

pub use battle::{Battle, BattleLoader};
pub use behaviors::BehaviorLoader;
pub use config::ConfigLoader;
pub use factions::FactionLoader;
pub use factory::ContentFactory;
pub use skills::{SkillCatalog, SkillLoader};

use std::path::Path;

/// Common result type for loaders.
pub type LoadResult<T> = anyhow::Result<T>;

/// Helper function to read file contents.
pub(crate) fn read_file(path: &Path) -> LoadResult<String> {
    std::fs::read_to_string(path)
        .map_err(|e| anyhow::anyhow!("Failed to read file {}: {}", path.display(), e))
}
