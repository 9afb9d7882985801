//! Behaviour profile loader.

use std::collections::BTreeMap;
use std::path::Path;

use crate::behavior::{BehaviorProfile, BehaviorRegistry};
use crate::loaders::{LoadResult, read_file};

/// Loads named behaviour profiles from RON.
///
/// File format: `{ name: BehaviorProfile }`. Weight fields that are left out
/// keep their defaults.
///
/// ```ron
/// {
///     "berserker": Aggressive((aggression: 250, hazard_avoidance: 10)),
///     "bodyguard": Protector((guard_bonus: 300)),
/// }
/// ```
pub struct BehaviorLoader;

impl BehaviorLoader {
    /// Loads `path` on top of [`BehaviorRegistry::with_defaults`], so the
    /// four kind names are always available.
    pub fn load(path: &Path) -> LoadResult<BehaviorRegistry> {
        let content = read_file(path)?;
        Self::parse(&content)
            .map_err(|e| anyhow::anyhow!("Failed to load behaviors {}: {}", path.display(), e))
    }

    pub fn parse(content: &str) -> LoadResult<BehaviorRegistry> {
        let entries: BTreeMap<String, BehaviorProfile> = ron::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse behaviors RON: {}", e))?;

        let mut registry = BehaviorRegistry::with_defaults();
        for (name, profile) in entries {
            tracing::debug!(profile = %name, kind = %profile.kind(), "loaded behavior profile");
            registry.insert(name, profile);
        }
        Ok(registry)
    }
}
