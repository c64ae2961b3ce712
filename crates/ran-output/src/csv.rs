//! CSV output backend.
//!
//! Creates three files in the configured output directory:
//! - `simulation_steps.csv`
//! - `tick_metrics.csv`
//! - `antenna_loads.csv`

use std::fs::File;
use std::path::Path;

use csv::Writer;

use ran_mro::SimulationStep;

use crate::writer::OutputWriter;
use crate::{AntennaLoadRow, OutputResult, TickMetricsRow};

/// Writes simulation output to three CSV files.
pub struct CsvWriter {
    steps:    Writer<File>,
    metrics:  Writer<File>,
    loads:    Writer<File>,
    finished: bool,
}

impl CsvWriter {
    /// Open (or create) the CSV files in `dir` and write the header rows.
    pub fn new(dir: &Path) -> OutputResult<Self> {
        let mut steps = Writer::from_path(dir.join("simulation_steps.csv"))?;
        steps.write_record(["tick", "timestamp_secs", "user_id", "x", "y", "antenna_id"])?;

        let mut metrics = Writer::from_path(dir.join("tick_metrics.csv"))?;
        metrics.write_record([
            "tick",
            "timestamp_secs",
            "coverage_ratio",
            "avg_signal_dbm",
            "handover_success_rate",
        ])?;

        let mut loads = Writer::from_path(dir.join("antenna_loads.csv"))?;
        loads.write_record(["tick", "antenna_id", "connected_users"])?;

        Ok(Self {
            steps,
            metrics,
            loads,
            finished: false,
        })
    }
}

impl OutputWriter for CsvWriter {
    fn write_steps(&mut self, steps: &[SimulationStep]) -> OutputResult<()> {
        for step in steps {
            self.steps.write_record(&[
                step.tick.0.to_string(),
                step.timestamp_secs.to_string(),
                step.user.0.to_string(),
                step.position.x.to_string(),
                step.position.y.to_string(),
                // Empty field while unconnected.
                step.connected.map(|a| a.0.to_string()).unwrap_or_default(),
            ])?;
        }
        Ok(())
    }

    fn write_tick_metrics(&mut self, row: &TickMetricsRow) -> OutputResult<()> {
        self.metrics.write_record(&[
            row.tick.to_string(),
            row.timestamp_secs.to_string(),
            row.coverage_ratio.to_string(),
            row.avg_signal_dbm.to_string(),
            row.handover_success_rate.to_string(),
        ])?;
        Ok(())
    }

    fn write_loads(&mut self, rows: &[AntennaLoadRow]) -> OutputResult<()> {
        for row in rows {
            self.loads.write_record(&[
                row.tick.to_string(),
                row.antenna_id.to_string(),
                row.connected_users.to_string(),
            ])?;
        }
        Ok(())
    }

    fn finish(&mut self) -> OutputResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        self.steps.flush()?;
        self.metrics.flush()?;
        self.loads.flush()?;
        Ok(())
    }
}
