//! Unit tests for ran-metrics.

use ran_core::{AntennaConfig, AntennaId, Connection, Point, User, UserId};

use crate::Metrics;

// ── Helpers ───────────────────────────────────────────────────────────────────

fn two_sites() -> Vec<AntennaConfig> {
    vec![
        AntennaConfig::new(AntennaId(0), Point::new(0.0, 0.0), 20.0, 0.0, 0.0),
        AntennaConfig::new(AntennaId(1), Point::new(500.0, 0.0), 20.0, 0.0, 0.0),
    ]
}

fn connected_user(id: u32, antenna: u32, signal_dbm: f64, attempts: u8) -> User {
    let mut user = User::new(UserId(id), Point::new(0.0, 0.0));
    user.connection = Some(Connection { antenna: AntennaId(antenna), signal_dbm });
    user.handover_attempts = attempts;
    user
}

// ── Degenerate inputs ─────────────────────────────────────────────────────────

#[test]
fn empty_population_is_all_neutral() {
    let m = Metrics::compute(&[], &two_sites());
    assert_eq!(m.coverage_ratio, 0.0);
    assert_eq!(m.avg_signal_dbm, 0.0);
    assert_eq!(m.handover_success_rate, 1.0);
    assert_eq!(m.load_distribution.len(), 2);
    assert!(m.load_distribution.iter().all(|l| l.connected_users == 0));
}

#[test]
fn no_connected_users_never_yields_nan() {
    let users = vec![
        User::new(UserId(0), Point::new(1.0, 1.0)),
        User::new(UserId(1), Point::new(2.0, 2.0)),
    ];
    let m = Metrics::compute(&users, &two_sites());
    assert_eq!(m.coverage_ratio, 0.0);
    assert_eq!(m.avg_signal_dbm, 0.0);
    assert!(!m.avg_signal_dbm.is_nan());
}

#[test]
fn no_antennas_yields_empty_load() {
    let users = vec![User::new(UserId(0), Point::new(0.0, 0.0))];
    let m = Metrics::compute(&users, &[]);
    assert!(m.load_distribution.is_empty());
}

// ── Headline numbers ──────────────────────────────────────────────────────────

#[test]
fn coverage_ratio_counts_connected_fraction() {
    let users = vec![
        connected_user(0, 0, -70.0, 0),
        connected_user(1, 1, -80.0, 0),
        User::new(UserId(2), Point::new(9.0, 9.0)),
        User::new(UserId(3), Point::new(9.0, 9.0)),
    ];
    let m = Metrics::compute(&users, &two_sites());
    assert_eq!(m.coverage_ratio, 0.5);
}

#[test]
fn avg_signal_over_connected_users_only() {
    let users = vec![
        connected_user(0, 0, -60.0, 0),
        connected_user(1, 1, -80.0, 0),
        User::new(UserId(2), Point::new(9.0, 9.0)), // excluded from the mean
    ];
    let m = Metrics::compute(&users, &two_sites());
    assert_eq!(m.avg_signal_dbm, -70.0);
}

#[test]
fn handover_success_rate_counts_surviving_links() {
    // 2 + 1 attempts total; two users with attempts are still connected,
    // the third lost its link.
    let mut dropped = User::new(UserId(2), Point::new(0.0, 0.0));
    dropped.handover_attempts = 1;
    let users = vec![
        connected_user(0, 0, -70.0, 2),
        connected_user(1, 1, -75.0, 1),
        dropped,
    ];
    let m = Metrics::compute(&users, &two_sites());
    assert_eq!(m.handover_success_rate, 0.5); // 2 successes / 4 attempts
}

#[test]
fn no_attempts_means_perfect_success_rate() {
    let users = vec![connected_user(0, 0, -70.0, 0)];
    let m = Metrics::compute(&users, &two_sites());
    assert_eq!(m.handover_success_rate, 1.0);
}

#[test]
fn load_distribution_in_antenna_order_with_zeros() {
    let users = vec![
        connected_user(0, 1, -70.0, 0),
        connected_user(1, 1, -72.0, 0),
    ];
    let m = Metrics::compute(&users, &two_sites());
    assert_eq!(m.load_distribution[0].antenna, AntennaId(0));
    assert_eq!(m.load_distribution[0].connected_users, 0);
    assert_eq!(m.load_distribution[1].antenna, AntennaId(1));
    assert_eq!(m.load_distribution[1].connected_users, 2);
}

#[test]
fn recomputation_is_pure() {
    let users = vec![connected_user(0, 0, -70.0, 1)];
    let sites = two_sites();
    assert_eq!(Metrics::compute(&users, &sites), Metrics::compute(&users, &sites));
}
