//! `ran-propagation` — the free-space propagation model.
//!
//! # Crate layout
//!
//! | Module     | Contents                                                    |
//! |------------|-------------------------------------------------------------|
//! | [`fspl`]   | Path loss, signal strength, coverage radius, interference   |
//! | [`sample`] | Per-point signal sampling across an antenna set             |
//!
//! Everything here is pure and stateless: plain functions of antenna
//! parameters and geometry, no caches, no configuration.  The coverage
//! evaluator, the optimizer, and the mobility simulator all build on these
//! primitives.

pub mod fspl;
pub mod sample;


pub use fspl::{
    DEFAULT_MIN_SIGNAL_DBM, MAX_SEARCH_RADIUS_M, MIN_PATH_DISTANCE_M, coverage_radius,
    interference, path_loss, signal_strength,
};
pub use sample::{SignalSample, best_signal, signals_at};
