//! Faction relationship table.

use std::collections::BTreeMap;
use std::fmt;

/// Faction identifier.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct FactionId(pub u16);

impl fmt::Display for FactionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "faction#{}", self.0)
    }
}

/// Stance between two factions.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
    strum::EnumIter,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum Relationship {
    Hostile,
    Neutral,
    Allied,
}

/// Symmetric faction-pair lookup.
///
/// A faction is always allied with itself. Pairs that were never declared
/// are hostile.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FactionTable {
    relations: BTreeMap<(FactionId, FactionId), Relationship>,
    names: BTreeMap<FactionId, String>,
}

impl FactionTable {
    pub fn new() -> Self {
        Self::default()
    }

    fn key(a: FactionId, b: FactionId) -> (FactionId, FactionId) {
        if a <= b { (a, b) } else { (b, a) }
    }

    /// Records the stance between `a` and `b` (order does not matter).
    ///
    /// Declaring a faction's stance toward itself is ignored.
    pub fn declare(&mut self, a: FactionId, b: FactionId, relationship: Relationship) {
        if a == b {
            return;
        }
        self.relations.insert(Self::key(a, b), relationship);
    }

    #[must_use]
    pub fn with(mut self, a: FactionId, b: FactionId, relationship: Relationship) -> Self {
        self.declare(a, b, relationship);
        self
    }

    pub fn set_name(&mut self, faction: FactionId, name: impl Into<String>) {
        self.names.insert(faction, name.into());
    }

    pub fn name(&self, faction: FactionId) -> Option<&str> {
        self.names.get(&faction).map(String::as_str)
    }

    pub fn relationship(&self, a: FactionId, b: FactionId) -> Relationship {
        if a == b {
            return Relationship::Allied;
        }
        self.relations
            .get(&Self::key(a, b))
            .copied()
            .unwrap_or(Relationship::Hostile)
    }

    pub fn is_hostile(&self, a: FactionId, b: FactionId) -> bool {
        self.relationship(a, b) == Relationship::Hostile
    }

    pub fn is_allied(&self, a: FactionId, b: FactionId) -> bool {
        self.relationship(a, b) == Relationship::Allied
    }

    pub fn is_neutral(&self, a: FactionId, b: FactionId) -> bool {
        self.relationship(a, b) == Relationship::Neutral
    }

    /// Declared pairs in ascending key order.
    pub fn declared(&self) -> impl Iterator<Item = (FactionId, FactionId, Relationship)> + '_ {
        self.relations.iter().map(|(&(a, b), &rel)| (a, b, rel))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const CROWN: FactionId = FactionId(0);
    const GUILD: FactionId = FactionId(1);
    const RAIDERS: FactionId = FactionId(2);

    #[test]
    fn same_faction_is_allied() {
        let mut table = FactionTable::new();
        table.declare(CROWN, CROWN, Relationship::Hostile);
        assert!(table.is_allied(CROWN, CROWN));
    }

    #[test]
    fn undeclared_pairs_are_hostile() {
        let table = FactionTable::new();
        assert!(table.is_hostile(CROWN, RAIDERS));
    }

    #[test]
    fn lookup_is_symmetric() {
        let table = FactionTable::new()
            .with(GUILD, CROWN, Relationship::Allied)
            .with(RAIDERS, GUILD, Relationship::Neutral);

        assert!(table.is_allied(CROWN, GUILD));
        assert!(table.is_allied(GUILD, CROWN));
        assert!(table.is_neutral(GUILD, RAIDERS));
        assert_eq!(
            table.relationship(RAIDERS, GUILD),
            table.relationship(GUILD, RAIDERS)
        );
        assert_eq!(table.declared().count(), 2);
    }

    #[test]
    fn relationship_parses() {
        assert_eq!("allied".parse::<Relationship>().unwrap(), Relationship::Allied);
        assert_eq!("Hostile".parse::<Relationship>().unwrap(), Relationship::Hostile);
        assert_eq!(Relationship::Neutral.as_ref(), "neutral");
    }
}
