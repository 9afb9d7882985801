//! Deterministic random source for the few probabilistic AI branches.
//!
//! Every roll is a pure function of a seed, and every seed is derived from
//! battle state with [`compute_seed`]. Replaying a battle with the same seed
//! therefore replays the same decisions.

/// Seed context for the "skill instead of basic attack" roll.
pub const ROLL_SKILL: u32 = 0;

/// Deterministic random oracle.
///
/// Implementations must return the same value for the same seed.
pub trait RngOracle: Send + Sync {
    /// Generate a random u32 value from a seed.
    fn next_u32(&self, seed: u64) -> u32;

    /// Percentile roll in `0..100`.
    fn roll_percent(&self, seed: u64) -> u32 {
        self.next_u32(seed) % 100
    }

    /// True with probability `percent`% (values of 100 or more always pass).
    fn chance(&self, seed: u64, percent: u32) -> bool {
        self.roll_percent(seed) < percent
    }
}

/// PCG-XSH-RR generator: 64-bit state, 32-bit output.
///
/// Stateless from the caller's point of view: the seed is the state.
#[derive(Clone, Copy, Debug, Default)]
pub struct PcgRng;

impl PcgRng {
    const MULTIPLIER: u64 = 6364136223846793005;
    const INCREMENT: u64 = 1442695040888963407;

    #[inline]
    fn pcg_step(state: u64) -> u64 {
        state
            .wrapping_mul(Self::MULTIPLIER)
            .wrapping_add(Self::INCREMENT)
    }

    #[inline]
    fn pcg_output(state: u64) -> u32 {
        let xorshifted = (((state >> 18) ^ state) >> 27) as u32;
        let rot = (state >> 59) as u32;
        xorshifted.rotate_right(rot)
    }
}

impl RngOracle for PcgRng {
    fn next_u32(&self, seed: u64) -> u32 {
        Self::pcg_output(Self::pcg_step(seed))
    }
}

/// Fixed-output oracle. Handy for tests and for forcing a branch in tooling.
#[derive(Clone, Copy, Debug)]
pub struct FixedRng(pub u32);

impl RngOracle for FixedRng {
    fn next_u32(&self, _seed: u64) -> u32 {
        self.0
    }
}

/// Derives the seed for one roll from battle state.
///
/// * `battle_seed` - fixed at battle start
/// * `turn` - current round number
/// * `unit` - acting unit's id
/// * `context` - distinguishes independent rolls by the same unit in the
///   same turn (e.g. [`ROLL_SKILL`])
pub fn compute_seed(battle_seed: u64, turn: u64, unit: u32, context: u32) -> u64 {
    // SplitMix64 / FxHash style mixing.
    let mut hash = battle_seed;
    hash ^= turn.wrapping_mul(0x9e3779b97f4a7c15);
    hash ^= (unit as u64).wrapping_mul(0x517cc1b727220a95);
    hash ^= (context as u64).wrapping_mul(0x85ebca6b);

    hash ^= hash >> 33;
    hash = hash.wrapping_mul(0xff51afd7ed558ccd);
    hash ^= hash >> 33;

    hash
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pcg_is_deterministic() {
        let rng = PcgRng;
        assert_eq!(rng.next_u32(42), rng.next_u32(42));
        assert_ne!(rng.next_u32(42), rng.next_u32(43));
    }

    #[test]
    fn percent_roll_stays_in_range() {
        let rng = PcgRng;
        for seed in 0..500 {
            assert!(rng.roll_percent(seed) < 100);
        }
    }

    #[test]
    fn chance_extremes() {
        let rng = PcgRng;
        for seed in 0..100 {
            assert!(!rng.chance(seed, 0));
            assert!(rng.chance(seed, 100));
        }
        assert!(FixedRng(29).chance(0, 30));
        assert!(!FixedRng(30).chance(0, 30));
    }

    #[test]
    fn seed_depends_on_every_input() {
        let base = compute_seed(7, 1, 3, ROLL_SKILL);
        assert_ne!(base, compute_seed(8, 1, 3, ROLL_SKILL));
        assert_ne!(base, compute_seed(7, 2, 3, ROLL_SKILL));
        assert_ne!(base, compute_seed(7, 1, 4, ROLL_SKILL));
        assert_ne!(base, compute_seed(7, 1, 3, ROLL_SKILL + 1));
    }
}
