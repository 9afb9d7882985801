//! Protector variant: stay near endangered allies and engage whoever
//! threatens them.
//!
//! An ally is in danger when its health is below `danger_hp_percent` or an
//! enemy stands within Chebyshev `danger_radius` of it. The protector picks
//! the most endangered ally (lowest health, then lowest id) and targets the
//! enemy nearest to that ally. With nobody in danger it engages the enemy
//! it can reach fastest, favouring fights its allies are already in.

use game_content::ProtectorWeights;
use game_core::{Position, Skill, Unit, UnitId, chebyshev, manhattan};

use crate::context::AiContext;
use crate::scoring::{self, actions};
use crate::types::ActionChoice;

fn is_endangered(weights: &ProtectorWeights, ally: &Unit, enemies: &[&Unit]) -> bool {
    ally.hp_percent() < weights.danger_hp_percent
        || enemies
            .iter()
            .any(|enemy| chebyshev(ally.position, enemy.position) <= weights.danger_radius)
}

/// The ally most in need of protection, if any.
pub fn endangered_ally<'a>(weights: &ProtectorWeights, ctx: &AiContext<'a>) -> Option<&'a Unit> {
    let enemies = ctx.enemies();
    ctx.allies()
        .into_iter()
        .filter(|ally| is_endangered(weights, ally, &enemies))
        .min_by_key(|ally| (ally.hp_percent(), ally.id))
}

pub fn choose_target(weights: &ProtectorWeights, ctx: &AiContext) -> Option<UnitId> {
    let enemies = ctx.enemies();

    if let Some(ally) = endangered_ally(weights, ctx) {
        tracing::trace!(unit = %ctx.unit.id, ally = %ally.id, "protecting endangered ally");
        return enemies
            .iter()
            .min_by_key(|enemy| (manhattan(ally.position, enemy.position), enemy.id))
            .map(|enemy| enemy.id);
    }

    let allies = ctx.allies();
    let core = weights.core();
    scoring::best_by_score("target", enemies.iter().copied(), |enemy| {
        let engaged = allies
            .iter()
            .filter(|ally| chebyshev(ally.position, enemy.position) <= weights.danger_radius)
            .count() as i32;
        scoring::missing_health_term(core.hp_weight, enemy.hp_percent())
            - weights.proximity_weight * ctx.distance_to(enemy.position) as i32
            + weights.group_weight * engaged
    })
    .map(|enemy| enemy.id)
}

pub fn choose_action(
    weights: &ProtectorWeights,
    ctx: &AiContext,
    target: Option<UnitId>,
    skills: &[Skill],
    roll: u32,
) -> ActionChoice {
    let target = target.and_then(|id| ctx.unit(id));
    actions::offensive_action(&weights.core(), ctx.unit, target, skills, roll)
}

pub fn evaluate_best_move(
    weights: &ProtectorWeights,
    ctx: &AiContext,
    target: Option<UnitId>,
    candidates: &[Position],
) -> Option<Position> {
    let target = ctx.unit(target?)?.position;
    let core = weights.core();
    scoring::best_by_score("cell", candidates.iter().copied(), |cell| {
        let mut score = scoring::move_core(&core, ctx.grid, cell, target);
        if chebyshev(cell, target) == 1 {
            score += weights.guard_bonus;
        }
        score
    })
}
