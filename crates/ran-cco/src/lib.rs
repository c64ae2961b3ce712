//! `ran-cco` — Coverage & Capacity Optimization.
//!
//! A genetic algorithm searches over the tunable parameters (power, tilt,
//! azimuth) of a fixed set of antenna sites, maximizing nominal coverage
//! area minus aggregate pairwise interference.
//!
//! # Crate layout
//!
//! | Module         | Contents                                               |
//! |----------------|--------------------------------------------------------|
//! | [`candidate`]  | `Candidate` — one gene vector, index-aligned to sites  |
//! | [`population`] | `Population` — one immutable generation                |
//! | [`fitness`]    | `FitnessEvaluator` — candidate → scalar                |
//! | [`optimizer`]  | `CcoConfig`, `GeneticOptimizer`, `CcoOutcome`          |
//! | [`observer`]   | `CcoObserver` progress callbacks                       |
//! | [`error`]      | `CcoError`, `CcoResult<T>`                             |
//!
//! # Generation loop
//!
//! ```text
//! INIT      — population_size candidates, genes sampled on the step grid
//! EVALUATE  — fitness per candidate (Rayon under the `parallel` feature)
//! SELECT    — rank by descending fitness, pair adjacent ranks
//! CROSSOVER — uniform per-gene, gated by crossover_rate
//! MUTATE    — per child with probability mutation_rate, ±half-step, clamp
//! REPLACE   — children become the next generation, wholesale
//! ```
//!
//! The best candidate seen across *all* generations is tracked and returned;
//! a single generation's best may regress, the tracked best never does.
//!
//! # Cargo features
//!
//! | Feature    | Effect                                                  |
//! |------------|---------------------------------------------------------|
//! | `parallel` | Population fitness evaluation on Rayon's thread pool.   |

pub mod candidate;
pub mod error;
pub mod fitness;
pub mod observer;
pub mod optimizer;
pub mod population;

#[cfg(test)]
mod tests;

pub use candidate::Candidate;
pub use error::{CcoError, CcoResult};
pub use fitness::FitnessEvaluator;
pub use observer::{CcoObserver, NoopCcoObserver};
pub use optimizer::{CcoConfig, CcoOutcome, GeneticOptimizer};
pub use population::Population;
