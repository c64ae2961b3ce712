//! `MroOutputObserver<W>` — bridges `MroObserver` to an `OutputWriter`.

use ran_core::{AntennaConfig, Tick, User};
use ran_metrics::Metrics;
use ran_mro::{MroConfig, MroObserver, SimulationStep};

use crate::row::{AntennaLoadRow, TickMetricsRow};
use crate::writer::OutputWriter;
use crate::OutputError;

/// An [`MroObserver`] that writes the replay log and per-tick metrics to any
/// [`OutputWriter`] backend.
///
/// Errors from the writer are stored internally because `MroObserver`
/// methods have no return value.  After `sim.run()` returns, check for
/// errors with [`take_error`][Self::take_error].
pub struct MroOutputObserver<W: OutputWriter> {
    writer:             W,
    antennas:           Vec<AntennaConfig>,
    tick_duration_secs: f64,
    last_error:         Option<OutputError>,
}

impl<W: OutputWriter> MroOutputObserver<W> {
    /// Create an observer backed by `writer`, using `config` for timestamp
    /// conversion.
    ///
    /// `antennas` must be the simulator's antenna set — metrics and load
    /// rows are computed against it.
    pub fn new(writer: W, config: &MroConfig, antennas: &[AntennaConfig]) -> Self {
        Self {
            writer,
            antennas:           antennas.to_vec(),
            tick_duration_secs: config.update_interval_secs,
            last_error:         None,
        }
    }

    /// Take the stored write error (if any) after `sim.run()` returns.
    ///
    /// Returns `None` if all writes succeeded.
    pub fn take_error(&mut self) -> Option<OutputError> {
        self.last_error.take()
    }

    /// Unwrap the inner writer (e.g. to inspect files after the sim).
    pub fn into_writer(self) -> W {
        self.writer
    }

    fn store_err(&mut self, result: crate::OutputResult<()>) {
        if let Err(e) = result {
            // Keep only the first error.
            if self.last_error.is_none() {
                self.last_error = Some(e);
            }
        }
    }
}

impl<W: OutputWriter> MroObserver for MroOutputObserver<W> {
    fn on_tick_end(&mut self, tick: Tick, users: &[User], steps: &[SimulationStep]) {
        let result = self.writer.write_steps(steps);
        self.store_err(result);

        let metrics = Metrics::compute(users, &self.antennas);
        let timestamp_secs = tick.0 as f64 * self.tick_duration_secs;

        let row = TickMetricsRow {
            tick: tick.0,
            timestamp_secs,
            coverage_ratio:        metrics.coverage_ratio,
            avg_signal_dbm:        metrics.avg_signal_dbm,
            handover_success_rate: metrics.handover_success_rate,
        };
        let result = self.writer.write_tick_metrics(&row);
        self.store_err(result);

        let loads: Vec<AntennaLoadRow> = metrics
            .load_distribution
            .iter()
            .map(|l| AntennaLoadRow {
                tick:            tick.0,
                antenna_id:      l.antenna.0,
                connected_users: l.connected_users,
            })
            .collect();
        if !loads.is_empty() {
            let result = self.writer.write_loads(&loads);
            self.store_err(result);
        }
    }

    fn on_sim_end(&mut self, _final_tick: Tick) {
        let result = self.writer.finish();
        self.store_err(result);
    }
}
