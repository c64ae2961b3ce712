//! `ran-output` — simulation output writers.
//!
//! A CSV backend implementing [`OutputWriter`], driven by
//! [`MroOutputObserver`], which implements `ran_mro::MroObserver`.  Three
//! files are produced in the configured directory:
//!
//! | File                   | Rows                                         |
//! |------------------------|----------------------------------------------|
//! | `simulation_steps.csv` | one per user per tick (the replay log)       |
//! | `tick_metrics.csv`     | one per tick (headline metrics)              |
//! | `antenna_loads.csv`    | one per antenna per tick (load distribution) |
//!
//! The engine core owns no file formats; this crate is the standard driver
//! sink sitting next to it.
//!
//! # Usage
//!
//! ```rust,ignore
//! use ran_output::{CsvWriter, MroOutputObserver};
//!
//! let writer = CsvWriter::new(Path::new("./output"))?;
//! let mut obs = MroOutputObserver::new(writer, &config, sim.antennas());
//! sim.run(&mut obs);
//! if let Some(e) = obs.take_error() {
//!     eprintln!("output error: {e}");
//! }
//! ```

pub mod csv;
pub mod error;
pub mod observer;
pub mod row;
pub mod writer;


pub use self::csv::CsvWriter;
pub use error::{OutputError, OutputResult};
pub use observer::MroOutputObserver;
pub use row::{AntennaLoadRow, TickMetricsRow};
pub use writer::OutputWriter;
