//! Tactical AI for grid combat.
//!
//! Each AI-controlled unit's turn runs through three phases:
//!
//! 1. **Target**: who to act against (enemy, or an ally for support roles)
//! 2. **Action**: what to do (attack, skill, support, move or wait)
//! 3. **Move**: where to stand when the action is a move
//!
//! # Core Components
//!
//! - [`TacticalAiController`]: runs the pipeline and produces an [`AiDecision`]
//! - [`Strategy`]: one of four behaviour variants bound to its weights
//! - [`AiContext`]: read-only view of the battlefield for one decision
//! - [`scoring`]: integer utilities shared by all variants
//!
//! Decisions are deterministic: the only random branch draws from an
//! injected [`game_core::RngOracle`] with a seed derived from battle state.

pub mod context;
pub mod controller;
pub mod scoring;
pub mod strategies;
pub mod types;

pub use context::AiContext;
pub use controller::TacticalAiController;
pub use strategies::Strategy;
pub use types::{ActionChoice, ActionType, AiDecision};
