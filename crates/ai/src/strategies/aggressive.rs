//! Aggressive variant: close in and finish off weakened enemies.

use game_content::AggressiveWeights;
use game_core::{Position, Skill, UnitId, chebyshev, manhattan};

use crate::context::AiContext;
use crate::scoring::{self, actions};
use crate::types::ActionChoice;

pub fn choose_target(weights: &AggressiveWeights, ctx: &AiContext) -> Option<UnitId> {
    let core = weights.core();
    let origin = ctx.position();
    scoring::best_by_score("target", ctx.enemies(), |enemy| {
        let mut score = scoring::target_core(&core, origin, enemy);
        if manhattan(origin, enemy.position) <= weights.close_range {
            score += weights.close_range_bonus;
        }
        score
    })
    .map(|enemy| enemy.id)
}

pub fn choose_action(
    weights: &AggressiveWeights,
    ctx: &AiContext,
    target: Option<UnitId>,
    skills: &[Skill],
    roll: u32,
) -> ActionChoice {
    let target = target.and_then(|id| ctx.unit(id));
    actions::offensive_action(&weights.core(), ctx.unit, target, skills, roll)
}

pub fn evaluate_best_move(
    weights: &AggressiveWeights,
    ctx: &AiContext,
    target: Option<UnitId>,
    candidates: &[Position],
) -> Option<Position> {
    let target = ctx.unit(target?)?.position;
    let core = weights.core();
    let charge = weights.aggression as i32 * core.adjacency_bonus / 100;
    scoring::best_by_score("cell", candidates.iter().copied(), |cell| {
        let mut score = scoring::move_core(&core, ctx.grid, cell, target);
        if chebyshev(cell, target) == 1 {
            score += charge;
        }
        score
    })
}
