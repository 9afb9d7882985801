//! Skill catalog loader.

use std::collections::BTreeMap;
use std::path::Path;

use game_core::{Skill, SkillId};

use crate::loaders::{LoadResult, read_file};

/// Skill definitions by id.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SkillCatalog {
    skills: BTreeMap<SkillId, Skill>,
}

impl SkillCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a skill, returning the previous definition with the same id.
    pub fn insert(&mut self, skill: Skill) -> Option<Skill> {
        self.skills.insert(skill.id, skill)
    }

    pub fn get(&self, id: SkillId) -> Option<&Skill> {
        self.skills.get(&id)
    }

    /// Skills in ascending id order.
    pub fn iter(&self) -> impl Iterator<Item = &Skill> + '_ {
        self.skills.values()
    }

    pub fn len(&self) -> usize {
        self.skills.len()
    }

    pub fn is_empty(&self) -> bool {
        self.skills.is_empty()
    }
}

/// Loads the skill catalog from a RON list of [`Skill`] definitions.
///
/// ```ron
/// [
///     (id: 1, name: "Cleave", range: 1, tags: "MELEE"),
///     (id: 4, name: "Fireball", range: 5,
///      area: (pattern: Cloud, origin: AtTarget, size: 1),
///      creates_ground_hazard: true),
/// ]
/// ```
pub struct SkillLoader;

impl SkillLoader {
    pub fn load(path: &Path) -> LoadResult<SkillCatalog> {
        let content = read_file(path)?;
        Self::parse(&content)
    }

    pub fn parse(content: &str) -> LoadResult<SkillCatalog> {
        let skills: Vec<Skill> = ron::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse skills RON: {}", e))?;

        let mut catalog = SkillCatalog::new();
        for skill in skills {
            let id = skill.id;
            if catalog.insert(skill).is_some() {
                anyhow::bail!("Duplicate skill id {}", id);
            }
        }
        Ok(catalog)
    }
}
