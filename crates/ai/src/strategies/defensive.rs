//! Defensive variant: keep a comfortable distance and back off once hurt.
//!
//! Below `retreat_hp_percent` the unit is retreating: it shies away from
//! healthy enemies, only attacks from range and moves to maximise distance.
//! Otherwise it hovers in a Chebyshev band around its target.

use game_content::DefensiveWeights;
use game_core::{Position, Skill, UnitId, chebyshev};

use crate::context::AiContext;
use crate::scoring::{self, actions};
use crate::types::ActionChoice;

pub fn choose_target(weights: &DefensiveWeights, ctx: &AiContext) -> Option<UnitId> {
    let retreating = weights.is_retreating(ctx.hp_percent());
    scoring::best_by_score("target", ctx.enemies(), |enemy| {
        let mut score = scoring::missing_health_term(weights.hp_weight, enemy.hp_percent())
            + weights.distance_weight * ctx.distance_to(enemy.position) as i32;
        if retreating && enemy.hp_percent() >= weights.healthy_hp_percent {
            score -= weights.engage_penalty;
        }
        score
    })
    .map(|enemy| enemy.id)
}

pub fn choose_action(
    weights: &DefensiveWeights,
    ctx: &AiContext,
    target: Option<UnitId>,
    skills: &[Skill],
    roll: u32,
) -> ActionChoice {
    let target = target.and_then(|id| ctx.unit(id));
    if !weights.is_retreating(ctx.hp_percent()) {
        return actions::offensive_action(&weights.core(), ctx.unit, target, skills, roll);
    }

    let Some(target) = target else {
        return ActionChoice::wait();
    };

    let ranged_skill = skills.iter().find(|skill| {
        !skill.is_supportive()
            && skill.range > 1
            && actions::is_suitable(ctx.unit.class, skill)
            && skill.reaches(ctx.position(), target.position)
    });
    if let Some(skill) = ranged_skill {
        return ActionChoice::use_skill(skill.id);
    }

    if ctx.reach_to(target.position) > 1 && actions::basic_ranged_reaches(ctx.unit, target) {
        return ActionChoice::ranged();
    }

    tracing::trace!(unit = %ctx.unit.id, "retreating instead of engaging");
    ActionChoice::movement()
}

pub fn evaluate_best_move(
    weights: &DefensiveWeights,
    ctx: &AiContext,
    target: Option<UnitId>,
    candidates: &[Position],
) -> Option<Position> {
    let target = ctx.unit(target?)?.position;
    let retreating = weights.is_retreating(ctx.hp_percent());
    scoring::best_by_score("cell", candidates.iter().copied(), |cell| {
        let mut score = -scoring::scaled_hazard_penalty(ctx.grid, cell, weights.hazard_avoidance);
        let reach = chebyshev(cell, target);
        if retreating {
            return score + weights.distance_weight * cell.manhattan(target) as i32;
        }
        if (weights.band_min..=weights.band_max).contains(&reach) {
            score += weights.band_bonus;
        }
        if reach <= 1 {
            score -= weights.melee_penalty;
        }
        if reach > weights.band_max {
            score -= weights.far_penalty * (reach - weights.band_max) as i32;
        }
        score
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::ActionType;
    use game_core::{FactionId, FactionTable, Grid, SkillId, Unit, UnitClass};

    fn setup(hp: u32) -> Vec<Unit> {
        vec![
            Unit::new(UnitId(1), Position::new(2, 2), FactionId(0), 10)
                .with_hp(hp)
                .with_class(UnitClass::Archer)
                .with_attack_range(4),
            Unit::new(UnitId(2), Position::new(3, 2), FactionId(1), 10),
            Unit::new(UnitId(3), Position::new(6, 2), FactionId(1), 10).with_hp(6),
        ]
    }

    #[test]
    fn retreating_avoids_healthy_targets() {
        let grid = Grid::new(8, 8).unwrap();
        let factions = FactionTable::new();
        let units = setup(3);
        let ctx = AiContext::new(&units[0], &units, &grid, &factions, &[]);
        // #2: 0 + 10 - 50. #3: 20 + 40 - 50.
        assert_eq!(choose_target(&DefensiveWeights::default(), &ctx), Some(UnitId(3)));
    }

    #[test]
    fn retreating_never_melees_an_adjacent_enemy() {
        let grid = Grid::new(8, 8).unwrap();
        let factions = FactionTable::new();
        let units = setup(3);
        let ctx = AiContext::new(&units[0], &units, &grid, &factions, &[]);
        let weights = DefensiveWeights::default();
        let jab = [Skill::new(SkillId(9), "Jab", 1)];
        for roll in [0, 50, 99] {
            let choice = choose_action(&weights, &ctx, Some(UnitId(2)), &jab, roll);
            assert_eq!(choice.kind, ActionType::Move);
        }
        // The distant wounded enemy is shot instead.
        let choice = choose_action(&weights, &ctx, Some(UnitId(3)), &[], 0);
        assert_eq!(choice.kind, ActionType::RangedAttack);
    }

    #[test]
    fn healthy_unit_uses_the_common_table() {
        let grid = Grid::new(8, 8).unwrap();
        let factions = FactionTable::new();
        let units = setup(10);
        let ctx = AiContext::new(&units[0], &units, &grid, &factions, &[]);
        let choice = choose_action(&DefensiveWeights::default(), &ctx, Some(UnitId(2)), &[], 0);
        assert_eq!(choice.kind, ActionType::MeleeAttack);
    }

    #[test]
    fn moves_into_band_or_away() {
        let grid = Grid::new(8, 8).unwrap();
        let factions = FactionTable::new();
        let weights = DefensiveWeights::default();
        let candidates = [Position::new(2, 2), Position::new(0, 2), Position::new(1, 2)];

        let healthy = setup(10);
        let ctx = AiContext::new(&healthy[0], &healthy, &grid, &factions, &[]);
        // Cheb 1: -60. Cheb 3: +40. Cheb 2: +40; (0, 2) is first-seen.
        assert_eq!(
            evaluate_best_move(&weights, &ctx, Some(UnitId(2)), &candidates),
            Some(Position::new(0, 2))
        );

        let hurt = setup(3);
        let ctx = AiContext::new(&hurt[0], &hurt, &grid, &factions, &[]);
        let far = [Position::new(3, 3), Position::new(0, 0), Position::new(1, 2)];
        assert_eq!(
            evaluate_best_move(&weights, &ctx, Some(UnitId(2)), &far),
            Some(Position::new(0, 0))
        );
    }
}
