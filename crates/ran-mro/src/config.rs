//! Mobility-simulation configuration.

use ran_core::SimClock;
use ran_propagation::DEFAULT_MIN_SIGNAL_DBM;

use crate::{MroError, MroResult};

/// Default hysteresis margin, in dB.
///
/// Carried over from the historical fixtures, where the handover threshold
/// was applied as a (large, negative) margin on top of the serving signal.
/// A production tuning would use a small positive value here.
pub const DEFAULT_HANDOVER_MARGIN_DB: f64 = -85.0;

/// Default cap on handovers per established connection.
pub const DEFAULT_MAX_HANDOVER_ATTEMPTS: u8 = 3;

/// Top-level simulation configuration.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MroConfig {
    /// Total simulated time, in seconds.  Default: 60.
    pub duration_secs: f64,

    /// Simulated seconds per tick.  Default: 1.
    pub update_interval_secs: f64,

    /// Maximum per-tick displacement; each axis moves by a uniform delta in
    /// ±half this distance.  Default: 10 m.
    pub max_move_distance_m: f64,

    /// Minimum usable signal for establishing (or keeping) a connection,
    /// in dBm.  Default: −95.
    pub min_signal_dbm: f64,

    /// Signal advantage a candidate must have over the *current serving*
    /// signal to trigger a handover, in dB.
    pub handover_margin_db: f64,

    /// Handovers allowed per connection before further ones are suppressed
    /// until the link drops and re-establishes.
    pub max_handover_attempts: u8,

    /// Master RNG seed.  The same seed always produces identical results.
    pub seed: u64,
}

impl Default for MroConfig {
    fn default() -> Self {
        Self {
            duration_secs:         60.0,
            update_interval_secs:  1.0,
            max_move_distance_m:   10.0,
            min_signal_dbm:        DEFAULT_MIN_SIGNAL_DBM,
            handover_margin_db:    DEFAULT_HANDOVER_MARGIN_DB,
            max_handover_attempts: DEFAULT_MAX_HANDOVER_ATTEMPTS,
            seed:                  0,
        }
    }
}

impl MroConfig {
    /// Whole ticks covering the configured duration (rounds up).
    #[inline]
    pub fn total_ticks(&self) -> u64 {
        self.make_clock().ticks_for_secs(self.duration_secs)
    }

    /// Construct a `SimClock` pre-configured for this run.
    pub fn make_clock(&self) -> SimClock {
        SimClock::new(self.update_interval_secs)
    }

    pub(crate) fn validate(&self) -> MroResult<()> {
        if !(self.update_interval_secs > 0.0) {
            return Err(MroError::Config(format!(
                "update_interval_secs must be positive, got {}",
                self.update_interval_secs
            )));
        }
        if !(self.duration_secs >= 0.0) {
            return Err(MroError::Config(format!(
                "duration_secs must be non-negative, got {}",
                self.duration_secs
            )));
        }
        if !(self.max_move_distance_m >= 0.0) {
            return Err(MroError::Config(format!(
                "max_move_distance_m must be non-negative, got {}",
                self.max_move_distance_m
            )));
        }
        Ok(())
    }
}
