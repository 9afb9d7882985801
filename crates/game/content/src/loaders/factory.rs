//! Content factory for loading a battle's data set from a directory.

use std::path::{Path, PathBuf};

use game_core::{FactionTable, GameConfig};

use crate::behavior::BehaviorRegistry;
use crate::loaders::{
    Battle, BattleLoader, BehaviorLoader, ConfigLoader, FactionLoader, LoadResult, SkillCatalog,
    SkillLoader,
};

/// Content factory that loads all battle content from a data directory.
///
/// # Directory Structure
///
/// ```text
/// data_dir/
/// ├── config.toml
/// ├── behaviors.ron
/// ├── factions.ron
/// ├── skills.ron
/// └── battles/
///     ├── skirmish.ron
///     └── siege.ron
/// ```
pub struct ContentFactory {
    data_dir: PathBuf,
}

impl ContentFactory {
    /// Creates a new content factory pointing to a data directory.
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    /// Factory over the data set shipped with this crate.
    pub fn bundled() -> Self {
        Self::new(Path::new(env!("CARGO_MANIFEST_DIR")).join("data"))
    }

    /// Load engine configuration from `config.toml`.
    pub fn load_config(&self) -> LoadResult<GameConfig> {
        ConfigLoader::load(&self.data_dir.join("config.toml"))
    }

    /// Load behaviour profiles from `behaviors.ron`.
    pub fn load_behaviors(&self) -> LoadResult<BehaviorRegistry> {
        BehaviorLoader::load(&self.data_dir.join("behaviors.ron"))
    }

    /// Load faction stances from `factions.ron`.
    pub fn load_factions(&self) -> LoadResult<FactionTable> {
        FactionLoader::load(&self.data_dir.join("factions.ron"))
    }

    /// Load the skill catalog from `skills.ron`.
    pub fn load_skills(&self) -> LoadResult<SkillCatalog> {
        SkillLoader::load(&self.data_dir.join("skills.ron"))
    }

    /// Load `battles/{name}.ron`, resolving loadouts against `skills.ron`.
    pub fn load_battle(&self, name: &str) -> LoadResult<Battle> {
        let skills = self.load_skills()?;
        let path = self.data_dir.join("battles").join(format!("{}.ron", name));
        BattleLoader::load(&path, &skills)
    }

    /// Returns the data directory path.
    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }
}
