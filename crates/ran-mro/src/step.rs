//! The per-tick replay record.

use ran_core::{AntennaId, Point, Tick, UserId};

/// A snapshot of one user at one tick.
///
/// The simulator appends one of these per user per tick, in tick order then
/// user order, forming a finite, replayable log of the whole run.  Records
/// are never rewritten.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SimulationStep {
    pub tick: Tick,

    /// Elapsed simulated seconds at this tick.
    pub timestamp_secs: f64,

    pub user:     UserId,
    pub position: Point,

    /// Serving antenna after this tick's connection policy, or `None` while
    /// unconnected.
    pub connected: Option<AntennaId>,
}
