//! Skill definitions as read by the AI and the area geometry.

use bitflags::bitflags;

use crate::targeting::{AreaOrigin, AreaPattern, AreaSpec};

use super::Position;

/// Identifier of a skill definition in the battle's skill catalog.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct SkillId(pub u16);

impl core::fmt::Display for SkillId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "skill#{}", self.0)
    }
}

/// Who a skill is meant for.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SkillEffect {
    /// Damages or hinders enemies.
    #[default]
    Harmful,
    /// Heals or buffs allies.
    Supportive,
}

bitflags! {
    /// Suitability tags attached to a skill definition by content authors.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
    pub struct SkillTags: u8 {
        const MELEE  = 1 << 0;
        const RANGED = 1 << 1;
        const HAZARD = 1 << 2;
        const HEAL   = 1 << 3;
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for SkillTags {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        bitflags::serde::serialize(self, serializer)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for SkillTags {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        bitflags::serde::deserialize(deserializer)
    }
}

/// Static definition of an ability a unit may use.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Skill {
    pub id: SkillId,
    pub name: String,
    /// Manhattan distance from caster to the aimed cell.
    pub range: u32,
    #[cfg_attr(feature = "serde", serde(default))]
    pub effect: SkillEffect,
    #[cfg_attr(feature = "serde", serde(default))]
    pub area: AreaSpec,
    #[cfg_attr(feature = "serde", serde(default))]
    pub creates_ground_hazard: bool,
    #[cfg_attr(feature = "serde", serde(default))]
    pub tags: SkillTags,
}

impl Skill {
    /// Single-target harmful skill with the given range.
    pub fn new(id: SkillId, name: impl Into<String>, range: u32) -> Self {
        Self {
            id,
            name: name.into(),
            range,
            effect: SkillEffect::Harmful,
            area: AreaSpec::default(),
            creates_ground_hazard: false,
            tags: SkillTags::empty(),
        }
    }

    #[must_use]
    pub fn with_area(mut self, pattern: AreaPattern, origin: AreaOrigin, size: u32) -> Self {
        self.area = AreaSpec::new(pattern, origin, size);
        self
    }

    #[must_use]
    pub fn with_effect(mut self, effect: SkillEffect) -> Self {
        self.effect = effect;
        self
    }

    #[must_use]
    pub fn with_ground_hazard(mut self) -> Self {
        self.creates_ground_hazard = true;
        self.tags |= SkillTags::HAZARD;
        self
    }

    #[must_use]
    pub fn with_tags(mut self, tags: SkillTags) -> Self {
        self.tags |= tags;
        self
    }

    /// Supportive by effect or by the `HEAL` tag.
    pub fn is_supportive(&self) -> bool {
        self.effect == SkillEffect::Supportive || self.tags.contains(SkillTags::HEAL)
    }

    /// Close-quarters skill. An explicit `MELEE`/`RANGED` tag decides;
    /// untagged skills count as melee at range 1 or less.
    pub fn is_melee(&self) -> bool {
        if self.has_reach_tag() {
            self.tags.contains(SkillTags::MELEE)
        } else {
            self.range <= 1
        }
    }

    /// Skill meant for distance. An explicit `MELEE`/`RANGED` tag decides;
    /// untagged skills count as ranged beyond range 1.
    pub fn is_ranged(&self) -> bool {
        if self.has_reach_tag() {
            self.tags.contains(SkillTags::RANGED)
        } else {
            self.range > 1
        }
    }

    fn has_reach_tag(&self) -> bool {
        self.tags.intersects(SkillTags::MELEE | SkillTags::RANGED)
    }

    pub fn has_area(&self) -> bool {
        self.area.pattern != AreaPattern::None
    }

    /// Hazard-creating either by flag or by tag.
    pub fn leaves_hazard(&self) -> bool {
        self.creates_ground_hazard || self.tags.contains(SkillTags::HAZARD)
    }

    /// True when `target` lies within the skill's Manhattan range of `caster`.
    pub fn reaches(&self, caster: Position, target: Position) -> bool {
        caster.manhattan(target) <= self.range
    }
}
