//! Per-variant weight tables.
//!
//! All values are integers. Weights are signed score multipliers;
//! `*_percent`, `skill_chance` and `hazard_avoidance` are percentages;
//! ranges and radii are tile counts. Every struct deserializes with
//! `#[serde(default)]`, so data files only list what differs from the
//! defaults documented on each field.

/// Weights shared by every variant's target, action and move scoring.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CoreWeights {
    /// Reward for a target's missing health, applied as
    /// `hp_weight * (100 - hp%) / 100`.
    pub hp_weight: i32,
    /// Cost per Manhattan tile of distance.
    pub distance_weight: i32,
    /// Flat bonus for ending a move Chebyshev-adjacent to the target.
    pub adjacency_bonus: i32,
    /// Percent chance of preferring a suitable skill over a melee attack.
    pub skill_chance: u32,
    /// Percent of the hazard penalty applied to a candidate cell.
    pub hazard_avoidance: u32,
}

// ============================================================================
// Aggressive
// ============================================================================

/// Closes in and finishes off weakened enemies.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct AggressiveWeights {
    /// Default 100.
    pub hp_weight: i32,
    /// Default 10.
    pub distance_weight: i32,
    /// Default 40.
    pub adjacency_bonus: i32,
    /// Targets within this Manhattan distance get `close_range_bonus`. Default 2.
    pub close_range: u32,
    /// Default 30.
    pub close_range_bonus: i32,
    /// Default 30.
    pub skill_chance: u32,
    /// Default 50.
    pub hazard_avoidance: u32,
    /// Percent scaling of the adjacency bonus when moving. Default 150.
    pub aggression: u32,
}

impl Default for AggressiveWeights {
    fn default() -> Self {
        Self {
            hp_weight: 100,
            distance_weight: 10,
            adjacency_bonus: 40,
            close_range: 2,
            close_range_bonus: 30,
            skill_chance: 30,
            hazard_avoidance: 50,
            aggression: 150,
        }
    }
}

impl AggressiveWeights {
    pub fn core(&self) -> CoreWeights {
        CoreWeights {
            hp_weight: self.hp_weight,
            distance_weight: self.distance_weight,
            adjacency_bonus: self.adjacency_bonus,
            skill_chance: self.skill_chance,
            hazard_avoidance: self.hazard_avoidance,
        }
    }
}

// ============================================================================
// Protector
// ============================================================================

/// Stays near endangered allies and engages whoever threatens them.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ProtectorWeights {
    pub hp_weight: i32,
    pub distance_weight: i32,
    pub adjacency_bonus: i32,
    pub skill_chance: u32,
    pub hazard_avoidance: u32,
    /// Allies below this health percent are in danger. Default 70.
    pub danger_hp_percent: u32,
    /// Allies with an enemy within this Chebyshev radius are in danger. Default 2.
    pub danger_radius: u32,
    /// Cost per Manhattan tile between the protector and an enemy when no
    /// ally is in danger.
    pub proximity_weight: i32,
    /// Reward per protector ally within `danger_radius` of an enemy.
    pub group_weight: i32,
    /// Flat bonus for a cell adjacent to the target.
    pub guard_bonus: i32,
}

impl Default for ProtectorWeights {
    fn default() -> Self {
        Self {
            hp_weight: 50,
            distance_weight: 10,
            adjacency_bonus: 40,
            skill_chance: 30,
            hazard_avoidance: 75,
            danger_hp_percent: 70,
            danger_radius: 2,
            proximity_weight: 15,
            group_weight: 20,
            guard_bonus: 200,
        }
    }
}

impl ProtectorWeights {
    pub fn core(&self) -> CoreWeights {
        CoreWeights {
            hp_weight: self.hp_weight,
            distance_weight: self.distance_weight,
            adjacency_bonus: self.adjacency_bonus,
            skill_chance: self.skill_chance,
            hazard_avoidance: self.hazard_avoidance,
        }
    }
}

// ============================================================================
// Defensive
// ============================================================================

/// Keeps its distance, and backs off once hurt.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct DefensiveWeights {
    pub hp_weight: i32,
    /// Reward (not cost) per Manhattan tile to the target.
    pub distance_weight: i32,
    pub adjacency_bonus: i32,
    pub skill_chance: u32,
    pub hazard_avoidance: u32,
    /// Below this health percent the unit retreats. Default 40.
    pub retreat_hp_percent: u32,
    /// While retreating, targets at or above this health percent are
    /// avoided. Default 50.
    pub healthy_hp_percent: u32,
    pub engage_penalty: i32,
    /// Preferred Chebyshev band around the target. Default 2..=3.
    pub band_min: u32,
    pub band_max: u32,
    pub band_bonus: i32,
    /// Penalty for a cell within Chebyshev 1 of the target.
    pub melee_penalty: i32,
    /// Penalty per tile beyond `band_max`.
    pub far_penalty: i32,
}

impl Default for DefensiveWeights {
    fn default() -> Self {
        Self {
            hp_weight: 50,
            distance_weight: 10,
            adjacency_bonus: 0,
            skill_chance: 50,
            hazard_avoidance: 100,
            retreat_hp_percent: 40,
            healthy_hp_percent: 50,
            engage_penalty: 50,
            band_min: 2,
            band_max: 3,
            band_bonus: 40,
            melee_penalty: 60,
            far_penalty: 15,
        }
    }
}

impl DefensiveWeights {
    pub fn core(&self) -> CoreWeights {
        CoreWeights {
            hp_weight: self.hp_weight,
            distance_weight: self.distance_weight,
            adjacency_bonus: self.adjacency_bonus,
            skill_chance: self.skill_chance,
            hazard_avoidance: self.hazard_avoidance,
        }
    }

    pub fn is_retreating(&self, hp_percent: u32) -> bool {
        hp_percent < self.retreat_hp_percent
    }
}

// ============================================================================
// Support
// ============================================================================

/// Heals the most wounded nearby ally; fights only when nobody needs help.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SupportWeights {
    pub hp_weight: i32,
    pub distance_weight: i32,
    pub adjacency_bonus: i32,
    pub skill_chance: u32,
    pub hazard_avoidance: u32,
    /// Manhattan radius in which wounded allies are considered. Default 6.
    pub assist_radius: u32,
    /// Reward for an ally's missing health. Default 150.
    pub heal_weight: i32,
    /// Bonus for a cell from which the best supportive skill reaches the
    /// target. Default 50.
    pub range_bonus: i32,
}

impl Default for SupportWeights {
    fn default() -> Self {
        Self {
            hp_weight: 80,
            distance_weight: 10,
            adjacency_bonus: 20,
            skill_chance: 30,
            hazard_avoidance: 100,
            assist_radius: 6,
            heal_weight: 150,
            range_bonus: 50,
        }
    }
}

impl SupportWeights {
    pub fn core(&self) -> CoreWeights {
        CoreWeights {
            hp_weight: self.hp_weight,
            distance_weight: self.distance_weight,
            adjacency_bonus: self.adjacency_bonus,
            skill_chance: self.skill_chance,
            hazard_avoidance: self.hazard_avoidance,
        }
    }
}
