//! Read-only battle environment: faction stances and the random oracle.
//!
//! Both are supplied by the host once per battle and only read during a
//! decision.
mod factions;
mod rng;

pub use factions::{FactionId, FactionTable, Relationship};
pub use rng::{FixedRng, PcgRng, ROLL_SKILL, RngOracle, compute_seed};
