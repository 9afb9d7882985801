//! Area-of-effect targeting.
//!
//! Skills that hit more than one cell describe their footprint with an
//! [`AreaSpec`]. [`AreaEffectGeometry`] turns a spec plus a source and a
//! target into the concrete set of affected cells:
//! - LineLimited: a projectile that stops at the first unit it meets
//! - LinePassthrough: a beam that hits every cell on the line
//! - Cloud: a square burst around the anchor
//! - Fan: a widening cone along a cardinal axis
//!
//! Preview (highlighting) and resolution (applying effects) must call the
//! same function so that what the player sees is what gets hit.
mod area;
mod line;

pub use area::{AffectedArea, AreaEffectGeometry};
pub use line::{rasterize_line, rescale_toward};

// ============================================================================
// Area Specification
// ============================================================================

/// Shape of a skill's area of effect.
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
pub enum AreaPattern {
    /// Single target, no area.
    #[default]
    None,
    /// Line that collapses onto the first occupied cell.
    LineLimited,
    /// Line that affects every cell it crosses.
    LinePassthrough,
    /// Every cell within Chebyshev `size` of the anchor, anchor excluded.
    Cloud,
    /// Cone along a cardinal direction, one row wider per step.
    Fan,
}

impl AreaPattern {
    pub const fn is_line(self) -> bool {
        matches!(self, Self::LineLimited | Self::LinePassthrough)
    }
}

/// Where the pattern is anchored.
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
pub enum AreaOrigin {
    /// Pattern emanates from the caster toward the target.
    #[default]
    FromCaster,
    /// Pattern is centred on (or starts at) the target cell.
    AtTarget,
}

/// Footprint of a skill: pattern, anchor and size.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AreaSpec {
    pub pattern: AreaPattern,
    #[cfg_attr(feature = "serde", serde(default))]
    pub origin: AreaOrigin,
    /// Line length, cloud radius or fan depth, depending on the pattern.
    #[cfg_attr(feature = "serde", serde(default))]
    pub size: u32,
}

impl AreaSpec {
    pub const fn new(pattern: AreaPattern, origin: AreaOrigin, size: u32) -> Self {
        Self {
            pattern,
            origin,
            size,
        }
    }

    /// Single-target footprint.
    pub const fn single() -> Self {
        Self::new(AreaPattern::None, AreaOrigin::FromCaster, 0)
    }
}
