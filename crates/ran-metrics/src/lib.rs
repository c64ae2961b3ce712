//! `ran-metrics` — network performance metrics.
//!
//! One entry point: [`Metrics::compute`] reduces a user population and an
//! antenna set to the four headline numbers.  Metrics are recomputed from
//! scratch on every call — there is no incremental state to drift, and every
//! degenerate input (no users, no connections, no handovers) produces a
//! well-defined value rather than a NaN or a division fault.

use rustc_hash::FxHashMap;

use ran_core::{AntennaConfig, AntennaId, User};

#[cfg(test)]
mod tests;

/// Connected-user count for one antenna.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AntennaLoad {
    pub antenna:         AntennaId,
    pub connected_users: u32,
}

/// Headline network metrics for one tick (or one optimizer evaluation).
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Metrics {
    /// Fraction of users with an established connection.  0.0 for an empty
    /// population.
    pub coverage_ratio: f64,

    /// Mean signal over connected users, in dBm.  0.0 when nobody is
    /// connected.
    pub avg_signal_dbm: f64,

    /// Connected-users-with-attempts over total attempts.  1.0 when no
    /// handover was ever attempted.
    pub handover_success_rate: f64,

    /// One entry per antenna in input order, zero counts included.
    pub load_distribution: Vec<AntennaLoad>,
}

impl Metrics {
    /// Compute fresh metrics from the current user and antenna state.
    pub fn compute(users: &[User], antennas: &[AntennaConfig]) -> Metrics {
        let slots: FxHashMap<AntennaId, usize> = antennas
            .iter()
            .enumerate()
            .map(|(i, a)| (a.id, i))
            .collect();
        let mut load = vec![0u32; antennas.len()];

        let mut connected = 0usize;
        let mut signal_sum = 0.0;
        let mut total_attempts = 0u64;
        let mut successful = 0u64;

        for user in users {
            total_attempts += user.handover_attempts as u64;
            if let Some(conn) = user.connection {
                connected += 1;
                signal_sum += conn.signal_dbm;
                if user.handover_attempts > 0 {
                    successful += 1;
                }
                // Connections to antennas outside the given set are ignored
                // for load purposes rather than faulting.
                if let Some(&slot) = slots.get(&conn.antenna) {
                    load[slot] += 1;
                }
            }
        }

        Metrics {
            coverage_ratio: if users.is_empty() {
                0.0
            } else {
                connected as f64 / users.len() as f64
            },
            avg_signal_dbm: if connected == 0 {
                0.0
            } else {
                signal_sum / connected as f64
            },
            handover_success_rate: if total_attempts == 0 {
                1.0
            } else {
                successful as f64 / total_attempts as f64
            },
            load_distribution: antennas
                .iter()
                .zip(load)
                .map(|(antenna, connected_users)| AntennaLoad {
                    antenna: antenna.id,
                    connected_users,
                })
                .collect(),
        }
    }
}
