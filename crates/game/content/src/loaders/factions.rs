//! Faction table loader.

use std::path::Path;

use game_core::{FactionId, FactionTable, Relationship};
use serde::Deserialize;

use crate::loaders::{LoadResult, read_file};

#[derive(Debug, Deserialize)]
struct FactionEntryRon {
    id: FactionId,
    name: String,
}

#[derive(Debug, Deserialize)]
struct FactionsRon {
    #[serde(default)]
    factions: Vec<FactionEntryRon>,
    #[serde(default)]
    relations: Vec<(FactionId, FactionId, Relationship)>,
}

/// Loads a [`FactionTable`] from RON.
///
/// ```ron
/// (
///     factions: [(id: 0, name: "Crown"), (id: 1, name: "Raiders")],
///     relations: [(0, 1, Hostile)],
/// )
/// ```
///
/// Pairs that are not listed stay hostile.
pub struct FactionLoader;

impl FactionLoader {
    pub fn load(path: &Path) -> LoadResult<FactionTable> {
        let content = read_file(path)?;
        Self::parse(&content)
    }

    pub fn parse(content: &str) -> LoadResult<FactionTable> {
        let data: FactionsRon = ron::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse factions RON: {}", e))?;

        let mut table = FactionTable::new();
        for entry in data.factions {
            table.set_name(entry.id, entry.name);
        }
        for (a, b, relationship) in data.relations {
            if a == b {
                anyhow::bail!("Faction {} cannot declare a stance toward itself", a);
            }
            table.declare(a, b, relationship);
        }
        Ok(table)
    }
}
