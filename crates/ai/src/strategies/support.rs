//! Support variant: heal the most wounded nearby ally, fight only when
//! nobody needs help.

use game_content::SupportWeights;
use game_core::{Position, Skill, Unit, UnitId};

use crate::context::AiContext;
use crate::scoring::{self, actions};
use crate::types::ActionChoice;

fn is_friendly(ctx: &AiContext, other: &Unit) -> bool {
    other.id == ctx.unit.id || ctx.is_ally(other)
}

/// Range of the longest-reaching supportive skill in the loadout.
fn heal_range(skills: &[Skill]) -> Option<u32> {
    skills
        .iter()
        .filter(|skill| skill.is_supportive())
        .map(|skill| skill.range)
        .max()
}

pub fn choose_target(weights: &SupportWeights, ctx: &AiContext) -> Option<UnitId> {
    let wounded: Vec<&Unit> = ctx
        .allies_and_self()
        .into_iter()
        .filter(|ally| {
            ally.hp_percent() < 100 && ctx.distance_to(ally.position) <= weights.assist_radius
        })
        .collect();

    if !wounded.is_empty() {
        return scoring::best_by_score("ally", wounded, |ally| {
            scoring::missing_health_term(weights.heal_weight, ally.hp_percent())
                - weights.distance_weight * ctx.distance_to(ally.position) as i32
        })
        .map(|ally| ally.id);
    }

    let core = weights.core();
    scoring::best_by_score("target", ctx.enemies(), |enemy| {
        scoring::target_core(&core, ctx.position(), enemy)
    })
    .map(|enemy| enemy.id)
}

pub fn choose_action(
    weights: &SupportWeights,
    ctx: &AiContext,
    target: Option<UnitId>,
    skills: &[Skill],
    roll: u32,
) -> ActionChoice {
    let target = target.and_then(|id| ctx.unit(id));
    match target {
        Some(ally) if is_friendly(ctx, ally) => actions::supportive_skill(ctx.unit, ally, skills)
            .map_or_else(ActionChoice::movement, |skill| ActionChoice::support(skill.id)),
        _ => actions::offensive_action(&weights.core(), ctx.unit, target, skills, roll),
    }
}

pub fn evaluate_best_move(
    weights: &SupportWeights,
    ctx: &AiContext,
    target: Option<UnitId>,
    candidates: &[Position],
) -> Option<Position> {
    let target = ctx.unit(target?)?;
    if target.id == ctx.unit.id {
        // Tending to itself: stay put.
        return (!candidates.is_empty()).then(|| ctx.position());
    }
    let core = weights.core();
    let reach = if is_friendly(ctx, target) {
        heal_range(ctx.skills)
    } else {
        None
    };
    scoring::best_by_score("cell", candidates.iter().copied(), |cell| {
        let mut score = scoring::move_core(&core, ctx.grid, cell, target.position);
        if reach.is_some_and(|range| cell.manhattan(target.position) <= range) {
            score += weights.range_bonus;
        }
        score
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::ActionType;
    use game_core::{FactionId, FactionTable, Grid, SkillEffect, SkillId, UnitClass};

    fn mend(range: u32) -> Skill {
        Skill::new(SkillId(5), "Mend", range).with_effect(SkillEffect::Supportive)
    }

    fn roster() -> Vec<Unit> {
        vec![
            Unit::new(UnitId(1), Position::new(0, 0), FactionId(0), 10)
                .with_class(UnitClass::Cleric),
            Unit::new(UnitId(2), Position::new(2, 0), FactionId(0), 10).with_hp(8),
            Unit::new(UnitId(3), Position::new(5, 0), FactionId(0), 10).with_hp(2),
            Unit::new(UnitId(9), Position::new(0, 3), FactionId(1), 10).with_hp(1),
        ]
    }

    #[test]
    fn heals_the_most_wounded_ally_in_radius() {
        let grid = Grid::new(8, 8).unwrap();
        let factions = FactionTable::new();
        let units = roster();
        let ctx = AiContext::new(&units[0], &units, &grid, &factions, &[]);
        // #2: 30 - 20. #3: 120 - 50.
        assert_eq!(choose_target(&SupportWeights::default(), &ctx), Some(UnitId(3)));

        let narrow = SupportWeights {
            assist_radius: 1,
            ..SupportWeights::default()
        };
        // Nobody wounded within reach, so the weakest enemy is picked.
        assert_eq!(choose_target(&narrow, &ctx), Some(UnitId(9)));
    }

    #[test]
    fn supports_when_in_range_or_moves_closer() {
        let grid = Grid::new(8, 8).unwrap();
        let factions = FactionTable::new();
        let units = roster();
        let ctx = AiContext::new(&units[0], &units, &grid, &factions, &[]);
        let weights = SupportWeights::default();

        let choice = choose_action(&weights, &ctx, Some(UnitId(2)), &[mend(3)], 0);
        assert_eq!(choice, ActionChoice::support(SkillId(5)));
        let choice = choose_action(&weights, &ctx, Some(UnitId(3)), &[mend(3)], 0);
        assert_eq!(choice.kind, ActionType::Move);
        // Supportive skills are never aimed at enemies.
        let choice = choose_action(&weights, &ctx, Some(UnitId(9)), &[mend(5)], 0);
        assert_eq!(choice.kind, ActionType::Move);
    }

    #[test]
    fn moves_into_healing_range() {
        let grid = Grid::new(8, 8).unwrap();
        let factions = FactionTable::new();
        let units = roster();
        let skills = [mend(3)];
        let ctx = AiContext::new(&units[0], &units, &grid, &factions, &skills);
        let candidates = [Position::new(1, 0), Position::new(2, 1), Position::new(3, 0)];
        // (1, 0): -40. (2, 1): -40. (3, 0): -20 + 50.
        let weights = SupportWeights::default();
        assert_eq!(
            evaluate_best_move(&weights, &ctx, Some(UnitId(3)), &candidates),
            Some(Position::new(3, 0))
        );
        assert_eq!(
            evaluate_best_move(&weights, &ctx, Some(UnitId(1)), &candidates),
            Some(Position::new(0, 0))
        );
    }
}
