//! `ran-mro` — Mobility Robustness Optimization.
//!
//! A discrete-time simulation of users random-walking across the area,
//! selecting the best-signal antenna and handing over between cells under a
//! hysteresis margin with a retry cap.
//!
//! # Crate layout
//!
//! | Module       | Contents                                                |
//! |--------------|---------------------------------------------------------|
//! | [`config`]   | `MroConfig` — duration, interval, thresholds            |
//! | [`walk`]     | Bounded random-walk movement kernel                     |
//! | [`step`]     | `SimulationStep` — one replay record per user per tick  |
//! | [`sim`]      | `MobilitySimulator` — the tick loop                     |
//! | [`builder`]  | `MroBuilder` — validated construction                   |
//! | [`observer`] | `MroObserver` progress callbacks                        |
//! | [`error`]    | `MroError`, `MroResult<T>`                              |
//!
//! # Tick loop
//!
//! Advancing simulated time is an explicit operation — the engine holds no
//! timers.  Each [`step()`][sim::MobilitySimulator::step]:
//!
//! 1. moves every user by a bounded uniform walk, clamped to the area;
//! 2. samples the signal from every antenna at the new position;
//! 3. applies the connection policy (connect / hold / hand over / drop);
//! 4. appends one [`SimulationStep`] per user to the replay log.
//!
//! Each user owns an independent seeded RNG, so per-user trajectories do not
//! depend on iteration order and runs are reproducible from the config seed.

pub mod builder;
pub mod config;
pub mod error;
pub mod observer;
pub mod sim;
pub mod step;
pub mod walk;


pub use builder::MroBuilder;
pub use config::MroConfig;
pub use error::{MroError, MroResult};
pub use observer::{MroObserver, NoopObserver};
pub use sim::MobilitySimulator;
pub use step::SimulationStep;
