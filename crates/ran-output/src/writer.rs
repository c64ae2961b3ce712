//! The `OutputWriter` trait implemented by backend writers.

use ran_mro::SimulationStep;

use crate::{AntennaLoadRow, OutputResult, TickMetricsRow};

/// Trait implemented by output backends (currently CSV).
///
/// All methods are infallible from the observer's perspective — errors are
/// stored internally and retrieved with
/// [`MroOutputObserver::take_error`][crate::MroOutputObserver::take_error].
pub trait OutputWriter {
    /// Write a batch of replay records (one tick's worth).
    fn write_steps(&mut self, steps: &[SimulationStep]) -> OutputResult<()>;

    /// Write one tick's headline metrics.
    fn write_tick_metrics(&mut self, row: &TickMetricsRow) -> OutputResult<()>;

    /// Write one tick's per-antenna load rows.
    fn write_loads(&mut self, rows: &[AntennaLoadRow]) -> OutputResult<()>;

    /// Flush and close all underlying file handles.
    ///
    /// Idempotent — safe to call more than once.
    fn finish(&mut self) -> OutputResult<()>;
}
