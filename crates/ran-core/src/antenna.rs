//! Antenna site configuration.

use crate::geo::Point;
use crate::ids::AntennaId;
use crate::params::{AZIMUTH, POWER, TILT, TunableParams};

/// Default carrier frequency when the caller does not specify one, in MHz.
pub const DEFAULT_FREQUENCY_MHZ: f64 = 2_100.0;

/// One antenna site.
///
/// Position, id, and frequency are fixed for the lifetime of a run; power,
/// tilt, and azimuth are the tunables the optimizer searches over.  The
/// engine never mutates a config in place — [`with_params`][Self::with_params]
/// derives a fresh instance instead.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AntennaConfig {
    pub id:            AntennaId,
    pub position:      Point,
    pub power_dbm:     f64,
    pub tilt_deg:      f64,
    pub azimuth_deg:   f64,
    pub frequency_mhz: f64,
}

impl AntennaConfig {
    /// Construct a site at `position` with the given tunables, each clamped
    /// to its legal range, at the default 2100 MHz carrier.
    pub fn new(id: AntennaId, position: Point, power_dbm: f64, tilt_deg: f64, azimuth_deg: f64) -> Self {
        Self {
            id,
            position,
            power_dbm:     POWER.clamp(power_dbm),
            tilt_deg:      TILT.clamp(tilt_deg),
            azimuth_deg:   AZIMUTH.clamp(azimuth_deg),
            frequency_mhz: DEFAULT_FREQUENCY_MHZ,
        }
    }

    /// Same as [`new`][Self::new] with an explicit carrier frequency.
    pub fn with_frequency(mut self, frequency_mhz: f64) -> Self {
        self.frequency_mhz = frequency_mhz;
        self
    }

    /// Derive a new config with the tunable triple replaced.
    ///
    /// Id, position, and frequency carry over unchanged.
    #[must_use]
    pub fn with_params(&self, params: TunableParams) -> Self {
        Self {
            id:            self.id,
            position:      self.position,
            power_dbm:     params.power_dbm,
            tilt_deg:      params.tilt_deg,
            azimuth_deg:   params.azimuth_deg,
            frequency_mhz: self.frequency_mhz,
        }
    }

    /// The current tunable triple.
    #[inline]
    pub fn params(&self) -> TunableParams {
        TunableParams {
            power_dbm:   self.power_dbm,
            tilt_deg:    self.tilt_deg,
            azimuth_deg: self.azimuth_deg,
        }
    }
}
