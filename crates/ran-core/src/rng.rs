//! Deterministic per-user and simulation-level RNG wrappers.
//!
//! # Determinism strategy
//!
//! Each user gets its own independent `SmallRng` seeded by:
//!
//!   seed = global_seed XOR (user_id * MIXING_CONSTANT)
//!
//! The mixing constant is the 64-bit fractional part of the golden ratio,
//! which spreads consecutive user IDs uniformly across the seed space.
//! This means:
//!
//! - Users never share RNG state (no ordering dependency between their
//!   random walks).
//! - Adding or removing users at the end of the list does not disturb the
//!   seeds of existing users — runs are reproducible even as populations grow.
//!
//! The optimizer and the simulator's global draws (initial population,
//! user scattering) go through a single [`SimRng`] seeded from the config.

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use crate::UserId;

/// 64-bit fractional golden-ratio constant for seed mixing.
const MIXING_CONSTANT: u64 = 0x9e37_79b9_7f4a_7c15;

// ── UserRng ──────────────────────────────────────────────────────────────────

/// Per-user deterministic RNG.
///
/// Create one per user at simulation init; store in a `Vec<UserRng>` parallel
/// to the user list.
pub struct UserRng(SmallRng);

impl UserRng {
    /// Seed deterministically from the run's global seed and a user ID.
    pub fn new(global_seed: u64, user: UserId) -> Self {
        let seed = global_seed ^ (user.0 as u64).wrapping_mul(MIXING_CONSTANT);
        UserRng(SmallRng::seed_from_u64(seed))
    }

    /// Generate a value uniformly in `range`.
    #[inline]
    pub fn gen_range<T, R>(&mut self, range: R) -> T
    where
        T: rand::distributions::uniform::SampleUniform,
        R: rand::distributions::uniform::SampleRange<T>,
    {
        self.0.gen_range(range)
    }

    /// `true` with probability `p` (clamped to [0, 1]).
    #[inline]
    pub fn gen_bool(&mut self, p: f64) -> bool {
        self.0.gen_bool(p.clamp(0.0, 1.0))
    }
}

// ── SimRng ────────────────────────────────────────────────────────────────────

/// Simulation-level RNG for global operations (population initialization,
/// genetic operators, user scattering).
///
/// Used only in single-threaded contexts.  Derive independent streams with
/// [`child`][Self::child] where parallel randomness is ever needed.
pub struct SimRng(SmallRng);

impl SimRng {
    pub fn new(seed: u64) -> Self {
        SimRng(SmallRng::seed_from_u64(seed))
    }

    /// Derive a child `SimRng` with a different seed offset — useful for
    /// seeding sub-streams deterministically from the root seed.
    pub fn child(&mut self, offset: u64) -> SimRng {
        let child_seed: u64 = self.0.r#gen::<u64>() ^ offset.wrapping_mul(MIXING_CONSTANT);
        SimRng(SmallRng::seed_from_u64(child_seed))
    }

    #[inline]
    pub fn gen_range<T, R>(&mut self, range: R) -> T
    where
        T: rand::distributions::uniform::SampleUniform,
        R: rand::distributions::uniform::SampleRange<T>,
    {
        self.0.gen_range(range)
    }

    #[inline]
    pub fn gen_bool(&mut self, p: f64) -> bool {
        self.0.gen_bool(p.clamp(0.0, 1.0))
    }
}
