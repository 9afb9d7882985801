//! Strategy variants and their dispatch.
//!
//! Each variant lives in its own module as three free functions, one per
//! decision phase, taking its weight table first. [`Strategy`] borrows a
//! loaded [`BehaviorProfile`] and dispatches to the matching module.

pub mod aggressive;
pub mod defensive;
pub mod protector;
pub mod support;

use game_content::{
    AggressiveWeights, BehaviorKind, BehaviorProfile, DefensiveWeights, ProtectorWeights,
    SupportWeights,
};
use game_core::{Position, Skill, UnitId};

use crate::context::AiContext;
use crate::types::ActionChoice;

/// A behaviour variant bound to its weights.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Strategy<'w> {
    Aggressive(&'w AggressiveWeights),
    Protector(&'w ProtectorWeights),
    Defensive(&'w DefensiveWeights),
    Support(&'w SupportWeights),
}

impl<'w> From<&'w BehaviorProfile> for Strategy<'w> {
    fn from(profile: &'w BehaviorProfile) -> Self {
        match profile {
            BehaviorProfile::Aggressive(weights) => Strategy::Aggressive(weights),
            BehaviorProfile::Protector(weights) => Strategy::Protector(weights),
            BehaviorProfile::Defensive(weights) => Strategy::Defensive(weights),
            BehaviorProfile::Support(weights) => Strategy::Support(weights),
        }
    }
}

impl Strategy<'_> {
    pub fn kind(&self) -> BehaviorKind {
        match self {
            Strategy::Aggressive(_) => BehaviorKind::Aggressive,
            Strategy::Protector(_) => BehaviorKind::Protector,
            Strategy::Defensive(_) => BehaviorKind::Defensive,
            Strategy::Support(_) => BehaviorKind::Support,
        }
    }

    /// Phase 1: who to act against. `None` when nobody qualifies.
    pub fn choose_target(&self, ctx: &AiContext) -> Option<UnitId> {
        match self {
            Strategy::Aggressive(weights) => aggressive::choose_target(weights, ctx),
            Strategy::Protector(weights) => protector::choose_target(weights, ctx),
            Strategy::Defensive(weights) => defensive::choose_target(weights, ctx),
            Strategy::Support(weights) => support::choose_target(weights, ctx),
        }
    }

    /// Phase 2: what to do to the target.
    ///
    /// `roll` is a percentile in `0..100` deciding between a skill and a
    /// melee attack against an adjacent enemy.
    pub fn choose_action(
        &self,
        ctx: &AiContext,
        target: Option<UnitId>,
        skills: &[Skill],
        roll: u32,
    ) -> ActionChoice {
        match self {
            Strategy::Aggressive(weights) => {
                aggressive::choose_action(weights, ctx, target, skills, roll)
            }
            Strategy::Protector(weights) => {
                protector::choose_action(weights, ctx, target, skills, roll)
            }
            Strategy::Defensive(weights) => {
                defensive::choose_action(weights, ctx, target, skills, roll)
            }
            Strategy::Support(weights) => {
                support::choose_action(weights, ctx, target, skills, roll)
            }
        }
    }

    /// Phase 3: where to stand. `None` for an empty candidate list or an
    /// unknown target.
    pub fn evaluate_best_move(
        &self,
        ctx: &AiContext,
        target: Option<UnitId>,
        candidates: &[Position],
    ) -> Option<Position> {
        match self {
            Strategy::Aggressive(weights) => {
                aggressive::evaluate_best_move(weights, ctx, target, candidates)
            }
            Strategy::Protector(weights) => {
                protector::evaluate_best_move(weights, ctx, target, candidates)
            }
            Strategy::Defensive(weights) => {
                defensive::evaluate_best_move(weights, ctx, target, candidates)
            }
            Strategy::Support(weights) => {
                support::evaluate_best_move(weights, ctx, target, candidates)
            }
        }
    }
}
