//! Read-only unit view consumed by the spatial queries and the AI.

use crate::env::FactionId;

use super::{Position, ResourceMeter, UnitId};

/// Unit type tag.
///
/// The tag drives skill suitability: melee-oriented classes stick to skills
/// that work at arm's length, caster-oriented classes prefer reach or ground
/// hazards, everyone else takes whatever is usable.
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
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
pub enum UnitClass {
    /// Front-line melee combatant.
    #[default]
    Fighter,
    /// Fast melee flanker.
    Skirmisher,
    /// Monster with natural weapons.
    Beast,
    /// Bow or crossbow user.
    Archer,
    /// Offensive spellcaster.
    Mage,
    /// Healer and buffer.
    Cleric,
}

impl UnitClass {
    pub const fn is_melee_oriented(self) -> bool {
        matches!(self, Self::Fighter | Self::Skirmisher | Self::Beast)
    }

    pub const fn is_caster_oriented(self) -> bool {
        matches!(self, Self::Mage | Self::Cleric)
    }
}

/// Snapshot of a unit as seen by this crate.
///
/// The turn system owns the authoritative record and keeps `position` in
/// sync with the grid's occupancy.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Unit {
    pub id: UnitId,
    pub position: Position,
    pub hp: ResourceMeter,
    pub faction: FactionId,
    pub alive: bool,
    /// Movement budget per turn, in Manhattan steps.
    pub movement_range: u32,
    /// Chebyshev reach of the basic attack. `1` is melee.
    pub attack_range: u32,
    pub class: UnitClass,
}

impl Unit {
    /// Creates a living unit at full health with melee reach and a movement
    /// range of 3.
    pub fn new(id: UnitId, position: Position, faction: FactionId, max_hp: u32) -> Self {
        Self {
            id,
            position,
            hp: ResourceMeter::full(max_hp),
            faction,
            alive: true,
            movement_range: 3,
            attack_range: 1,
            class: UnitClass::default(),
        }
    }

    #[must_use]
    pub fn with_hp(mut self, current: u32) -> Self {
        self.hp.current = current;
        self
    }

    #[must_use]
    pub fn with_class(mut self, class: UnitClass) -> Self {
        self.class = class;
        self
    }

    #[must_use]
    pub fn with_movement_range(mut self, movement_range: u32) -> Self {
        self.movement_range = movement_range;
        self
    }

    #[must_use]
    pub fn with_attack_range(mut self, attack_range: u32) -> Self {
        self.attack_range = attack_range;
        self
    }

    #[must_use]
    pub fn dead(mut self) -> Self {
        self.alive = false;
        self.hp.current = 0;
        self
    }

    /// Alive flag set and health above zero.
    pub fn is_alive(&self) -> bool {
        self.alive && !self.hp.is_empty()
    }

    /// Current health as a percentage of maximum health.
    pub fn hp_percent(&self) -> u32 {
        self.hp.percent()
    }

    /// True when the basic attack reaches further than an adjacent cell.
    pub fn has_ranged_attack(&self) -> bool {
        self.attack_range > 1
    }
}

impl core::fmt::Display for Unit {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{} {} at {}", self.id, self.class, self.position)
    }
}
