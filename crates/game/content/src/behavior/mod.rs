//! Behaviour profiles for AI-controlled units.
//!
//! A profile picks one of the four strategy variants and carries that
//! variant's weight table. Profiles are plain values: loaded once at battle
//! start, shared by reference, never mutated during combat.

mod weights;

use std::collections::BTreeMap;

pub use weights::{
    AggressiveWeights, CoreWeights, DefensiveWeights, ProtectorWeights, SupportWeights,
};

/// Strategy variant tag.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
    strum::EnumIter,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum BehaviorKind {
    Aggressive,
    Protector,
    Defensive,
    Support,
}

/// Strategy variant plus its weights.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum BehaviorProfile {
    Aggressive(AggressiveWeights),
    Protector(ProtectorWeights),
    Defensive(DefensiveWeights),
    Support(SupportWeights),
}

impl BehaviorProfile {
    /// Profile of the given kind with default weights.
    pub fn default_for(kind: BehaviorKind) -> Self {
        match kind {
            BehaviorKind::Aggressive => Self::Aggressive(AggressiveWeights::default()),
            BehaviorKind::Protector => Self::Protector(ProtectorWeights::default()),
            BehaviorKind::Defensive => Self::Defensive(DefensiveWeights::default()),
            BehaviorKind::Support => Self::Support(SupportWeights::default()),
        }
    }

    pub fn kind(&self) -> BehaviorKind {
        match self {
            Self::Aggressive(_) => BehaviorKind::Aggressive,
            Self::Protector(_) => BehaviorKind::Protector,
            Self::Defensive(_) => BehaviorKind::Defensive,
            Self::Support(_) => BehaviorKind::Support,
        }
    }

    pub fn core(&self) -> CoreWeights {
        match self {
            Self::Aggressive(weights) => weights.core(),
            Self::Protector(weights) => weights.core(),
            Self::Defensive(weights) => weights.core(),
            Self::Support(weights) => weights.core(),
        }
    }
}

impl Default for BehaviorProfile {
    fn default() -> Self {
        Self::default_for(BehaviorKind::Aggressive)
    }
}

/// Named behaviour profiles, keyed by the names unit definitions refer to.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct BehaviorRegistry {
    profiles: BTreeMap<String, BehaviorProfile>,
}

impl BehaviorRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry holding one default profile per kind, keyed by the kind's
    /// snake_case name.
    pub fn with_defaults() -> Self {
        use strum::IntoEnumIterator;

        let mut registry = Self::new();
        for kind in BehaviorKind::iter() {
            registry.insert(kind.as_ref(), BehaviorProfile::default_for(kind));
        }
        registry
    }

    pub fn insert(&mut self, name: impl Into<String>, profile: BehaviorProfile) {
        self.profiles.insert(name.into(), profile);
    }

    pub fn get(&self, name: &str) -> Option<&BehaviorProfile> {
        self.profiles.get(name)
    }

    /// Looks `name` up, falling back to the default profile of the kind
    /// with that name.
    ///
    /// # Errors
    ///
    /// Returns an error if `name` is neither registered nor a kind name.
    pub fn resolve(&self, name: &str) -> Result<BehaviorProfile, String> {
        if let Some(profile) = self.profiles.get(name) {
            return Ok(*profile);
        }
        name.parse::<BehaviorKind>()
            .map(BehaviorProfile::default_for)
            .map_err(|_| format!("Behavior profile '{}' not found", name))
    }

    pub fn names(&self) -> impl Iterator<Item = &str> + '_ {
        self.profiles.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.profiles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.profiles.is_empty()
    }
}
