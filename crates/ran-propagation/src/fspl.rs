//! Free-space path loss and the quantities derived from it.
//!
//! The model is the textbook FSPL formula with distance in meters and
//! frequency in MHz:
//!
//!   path_loss_db = 20·log10(d) + 20·log10(f) − 27.55
//!
//! Received power is then `tx_power_dbm − path_loss_db`.  For d ≥ 1 m the
//! received power is strictly decreasing in distance, which is what makes
//! the binary search in [`coverage_radius`] valid.

use ran_core::AntennaConfig;

/// Constant term of the FSPL formula for (meters, MHz) units.
const FSPL_OFFSET_DB: f64 = 27.55;

/// Distances below 1 m are floored before the logarithm.  Without the floor
/// the model diverges to +∞ received power at zero separation (log10(0) is
/// undefined); with it, a user standing on the antenna sees the 1 m signal.
pub const MIN_PATH_DISTANCE_M: f64 = 1.0;

/// Upper bound of the coverage-radius search, in meters.
pub const MAX_SEARCH_RADIUS_M: u32 = 10_000;

/// Minimum usable signal when the caller does not specify one, in dBm.
pub const DEFAULT_MIN_SIGNAL_DBM: f64 = -95.0;

/// Free-space path loss over `distance_m` at `frequency_mhz`, in dB.
///
/// `distance_m` is floored to [`MIN_PATH_DISTANCE_M`]; non-positive
/// distances are therefore well-defined rather than an error.
#[inline]
pub fn path_loss(distance_m: f64, frequency_mhz: f64) -> f64 {
    let d = distance_m.max(MIN_PATH_DISTANCE_M);
    20.0 * d.log10() + 20.0 * frequency_mhz.log10() - FSPL_OFFSET_DB
}

/// Received signal strength at `distance_m` from a transmitter at
/// `power_dbm` / `frequency_mhz`, in dBm.
#[inline]
pub fn signal_strength(distance_m: f64, power_dbm: f64, frequency_mhz: f64) -> f64 {
    power_dbm - path_loss(distance_m, frequency_mhz)
}

/// Largest integer radius (meters) at which `antenna` still delivers at
/// least `min_signal_dbm`.
///
/// Binary search over `[0, MAX_SEARCH_RADIUS_M]`; terminates in
/// O(log 10 000) ≈ 14 iterations.  Returns 0 when even the 1 m signal is
/// below the threshold, and the search cap when the whole range qualifies.
pub fn coverage_radius(antenna: &AntennaConfig, min_signal_dbm: f64) -> u32 {
    let mut lo = 0u32;
    let mut hi = MAX_SEARCH_RADIUS_M;
    let mut radius = 0u32;

    while lo <= hi {
        let mid = lo + (hi - lo) / 2;
        let signal = signal_strength(mid as f64, antenna.power_dbm, antenna.frequency_mhz);
        if signal >= min_signal_dbm {
            radius = mid;
            lo = mid + 1;
        } else {
            if mid == 0 {
                break;
            }
            hi = mid - 1;
        }
    }

    radius
}

/// Mutual interference between two antennas, in dBm.
///
/// Evaluated at the Euclidean separation of the two sites as the *minimum*
/// of the two one-way signal strengths: the worst-case degradation either
/// cell suffers at the boundary between them.  Deliberately not a sum of
/// overlapping signal energy.
pub fn interference(a: &AntennaConfig, b: &AntennaConfig) -> f64 {
    let distance = a.position.distance_m(b.position);
    let signal_a = signal_strength(distance, a.power_dbm, a.frequency_mhz);
    let signal_b = signal_strength(distance, b.power_dbm, b.frequency_mhz);
    signal_a.min(signal_b)
}
