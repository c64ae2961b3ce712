//! Simulation observer trait for progress reporting and data collection.

use ran_core::{Tick, User};

use crate::SimulationStep;

/// Callbacks invoked by [`MobilitySimulator::run`][crate::MobilitySimulator::run]
/// at tick boundaries.
///
/// All methods have default no-op implementations so implementors only need
/// to override what they care about.
pub trait MroObserver {
    /// Called at the very start of each tick, before any movement.
    fn on_tick_start(&mut self, _tick: Tick) {}

    /// Called at the end of each tick with the updated user state and the
    /// replay records appended this tick (one per user).
    fn on_tick_end(&mut self, _tick: Tick, _users: &[User], _steps: &[SimulationStep]) {}

    /// Called once after the final tick completes.
    fn on_sim_end(&mut self, _final_tick: Tick) {}
}

/// An [`MroObserver`] that does nothing.  Use when you need to call `run`
/// but don't want progress callbacks.
pub struct NoopObserver;

impl MroObserver for NoopObserver {}
