//! Integer scoring shared by every strategy variant.
//!
//! All three decision phases score candidates with plain `i32` utilities and
//! keep the maximum:
//!
//! 1. **Target scoring**: who to act against ([`target_core`])
//! 2. **Action selection**: what to do to the target ([`actions`])
//! 3. **Move scoring**: where to stand ([`move_core`], [`hazard_penalty`])
//!
//! # Tie-breaking
//!
//! Candidates are always evaluated in a fixed order (ascending [`UnitId`]
//! for units, ascending [`Position`] for cells) and [`best_by_score`] only
//! replaces the current best on a strictly greater score, so the first
//! candidate wins ties.
//!
//! [`UnitId`]: game_core::UnitId

pub mod actions;

use game_content::CoreWeights;
use game_core::{Grid, Position, Unit, chebyshev, manhattan};

/// Flat penalty for standing on any hazard.
pub const HAZARD_BASE_PENALTY: i32 = 50;

/// Extra penalty per point of hazard damage per turn.
pub const HAZARD_DAMAGE_FACTOR: i32 = 10;

/// Missing-health reward: `weight * (100 - hp%) / 100`.
pub fn missing_health_term(weight: i32, hp_percent: u32) -> i32 {
    let missing = 100 - hp_percent.min(100) as i32;
    weight * missing / 100
}

/// Common target score: reward missing health, penalise Manhattan distance.
pub fn target_core(core: &CoreWeights, attacker: Position, target: &Unit) -> i32 {
    missing_health_term(core.hp_weight, target.hp_percent())
        - core.distance_weight * manhattan(attacker, target.position) as i32
}

/// Raw penalty of the hazard on `cell`, 0 when there is none.
pub fn hazard_penalty(grid: &Grid, cell: Position) -> i32 {
    grid.hazard_at(cell).map_or(0, |hazard| {
        HAZARD_BASE_PENALTY + hazard.damage_per_turn as i32 * HAZARD_DAMAGE_FACTOR
    })
}

/// Hazard penalty scaled by a percentage avoidance weight.
pub fn scaled_hazard_penalty(grid: &Grid, cell: Position, avoidance: u32) -> i32 {
    hazard_penalty(grid, cell) * avoidance as i32 / 100
}

/// Common move score for standing on `cell` while engaging `target`.
pub fn move_core(core: &CoreWeights, grid: &Grid, cell: Position, target: Position) -> i32 {
    let mut score = -scaled_hazard_penalty(grid, cell, core.hazard_avoidance)
        - core.distance_weight * manhattan(cell, target) as i32;
    if chebyshev(cell, target) == 1 {
        score += core.adjacency_bonus;
    }
    score
}

/// Returns the candidate with the highest score; the first one wins ties.
///
/// `label` only tags the trace output.
pub fn best_by_score<T, I, F>(label: &str, candidates: I, mut score: F) -> Option<T>
where
    T: Copy + core::fmt::Display,
    I: IntoIterator<Item = T>,
    F: FnMut(T) -> i32,
{
    let mut best: Option<(T, i32)> = None;
    for candidate in candidates {
        let value = score(candidate);
        tracing::trace!("  {} {}: score={}", label, candidate, value);
        match best {
            Some((_, best_value)) if value <= best_value => {}
            _ => best = Some((candidate, value)),
        }
    }
    best.map(|(candidate, _)| candidate)
}
