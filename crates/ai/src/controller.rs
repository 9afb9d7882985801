//! Per-turn decision pipeline.

use game_core::{
    AffectedArea, AreaEffectGeometry, BlockingRule, FactionTable, Grid, Pathfinder, Position,
    ROLL_SKILL, RngOracle, SideBlocking, Skill, Unit, UnitId, compute_seed,
};
use tracing::{debug, warn};

use crate::context::AiContext;
use crate::strategies::Strategy;
use crate::types::{ActionChoice, ActionType, AiDecision};

/// Turns a strategy into a concrete, executable decision for one unit.
///
/// The controller borrows everything it reads and keeps no state between
/// calls apart from the battle seed and turn number used to derive the
/// skill roll.
///
/// # Pipeline
///
/// 1. Dead or off-grid units wait.
/// 2. [`Strategy::choose_target`]; no target means `Wait`.
/// 3. [`Strategy::choose_action`] with a seeded percentile roll.
/// 4. `Move`: reachable cells not held by another unit go through
///    [`Strategy::evaluate_best_move`]; staying put means `Wait`.
/// 5. Area skills get their affected cells from [`AreaEffectGeometry`],
///    the same function resolution uses.
pub struct TacticalAiController<'a, R: ?Sized, B = SideBlocking> {
    grid: &'a Grid,
    factions: &'a FactionTable,
    pathfinder: &'a Pathfinder<'a, B>,
    rng: &'a R,
    battle_seed: u64,
    turn: u64,
}

impl<'a, R, B> TacticalAiController<'a, R, B>
where
    R: RngOracle + ?Sized,
    B: BlockingRule,
{
    pub fn new(
        grid: &'a Grid,
        factions: &'a FactionTable,
        pathfinder: &'a Pathfinder<'a, B>,
        rng: &'a R,
    ) -> Self {
        Self {
            grid,
            factions,
            pathfinder,
            rng,
            battle_seed: 0,
            turn: 0,
        }
    }

    #[must_use]
    pub fn with_seed(mut self, battle_seed: u64) -> Self {
        self.battle_seed = battle_seed;
        self
    }

    #[must_use]
    pub fn with_turn(mut self, turn: u64) -> Self {
        self.turn = turn;
        self
    }

    pub fn set_turn(&mut self, turn: u64) {
        self.turn = turn;
    }

    pub fn turn(&self) -> u64 {
        self.turn
    }

    /// Decides what `unit` does this turn.
    ///
    /// `all_units` is the full roster (the acting unit included, dead units
    /// allowed); `skills` is the unit's usable loadout.
    pub fn decide(
        &self,
        unit: &Unit,
        strategy: &Strategy,
        all_units: &[Unit],
        skills: &[Skill],
    ) -> AiDecision {
        if !unit.is_alive() {
            debug!(unit = %unit.id, "dead unit waits");
            return AiDecision::wait(unit.id);
        }
        if !self.grid.contains(unit.position) {
            warn!(unit = %unit.id, position = %unit.position, "unit is off the grid, waiting");
            return AiDecision::wait(unit.id);
        }

        let ctx = AiContext::new(unit, all_units, self.grid, self.factions, skills);

        let Some(target) = strategy.choose_target(&ctx) else {
            debug!(unit = %unit.id, strategy = %strategy.kind(), "no target, waiting");
            return AiDecision::wait(unit.id);
        };

        let roll = self
            .rng
            .roll_percent(compute_seed(self.battle_seed, self.turn, unit.id.0, ROLL_SKILL));
        let choice = strategy.choose_action(&ctx, Some(target), skills, roll);

        debug!(
            unit = %unit.id,
            strategy = %strategy.kind(),
            target = %target,
            action = %choice.kind,
            roll,
            "action chosen"
        );

        let decision = match choice.kind {
            ActionType::Wait => AiDecision::wait(unit.id),
            ActionType::Move => self.plan_move(&ctx, strategy, target),
            ActionType::UseSkill | ActionType::Support => self.plan_skill(&ctx, target, choice),
            ActionType::MeleeAttack | ActionType::RangedAttack => {
                AiDecision::new(unit.id, target, choice.kind)
            }
        };

        debug!(decision = %decision, "decision made");
        decision
    }

    fn plan_move(&self, ctx: &AiContext, strategy: &Strategy, target: UnitId) -> AiDecision {
        let unit = ctx.unit;
        let reach = self.pathfinder.reachable_cells(unit, unit.movement_range);
        let candidates: Vec<Position> = reach
            .positions()
            .filter(|&cell| {
                self.grid
                    .occupant_at(cell)
                    .is_none_or(|occupant| occupant.unit == unit.id)
            })
            .collect();

        let Some(destination) = strategy.evaluate_best_move(ctx, Some(target), &candidates) else {
            debug!(unit = %unit.id, candidates = candidates.len(), "no destination, waiting");
            return AiDecision::wait(unit.id);
        };
        if destination == unit.position {
            debug!(unit = %unit.id, "best cell is the current one, waiting");
            return AiDecision::wait(unit.id);
        }

        match self.pathfinder.path_to(unit, destination) {
            Some(path) => AiDecision::new(unit.id, target, ActionType::Move)
                .with_destination(destination, Some(path)),
            None => {
                warn!(
                    unit = %unit.id,
                    destination = %destination,
                    "reachable cell has no path, waiting"
                );
                AiDecision::wait(unit.id)
            }
        }
    }

    fn plan_skill(&self, ctx: &AiContext, target: UnitId, choice: ActionChoice) -> AiDecision {
        let unit = ctx.unit;
        let skill = choice
            .skill
            .and_then(|id| ctx.skills.iter().find(|skill| skill.id == id));
        let (Some(skill), Some(target_unit)) = (skill, ctx.unit(target)) else {
            warn!(
                unit = %unit.id,
                skill = ?choice.skill,
                "chosen skill is not in the loadout, waiting"
            );
            return AiDecision::wait(unit.id);
        };

        let affected = if skill.has_area() {
            AreaEffectGeometry::new(self.grid).for_skill(skill, unit.position, target_unit.position)
        } else {
            AffectedArea::new()
        };

        AiDecision::new(unit.id, target, choice.kind).with_skill(skill.id, affected)
    }
}
