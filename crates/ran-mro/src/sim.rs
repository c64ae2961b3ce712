//! The `MobilitySimulator` and its tick loop.

use log::debug;
use rustc_hash::FxHashMap;

use ran_core::{AntennaConfig, AntennaId, Area, Connection, SimClock, Tick, User, UserRng};
use ran_propagation::{best_signal, signals_at};

use crate::{MroConfig, MroObserver, SimulationStep};

/// The mobility/handover simulator.
///
/// Holds the antenna set, the user population with one [`UserRng`] each,
/// and the append-only replay log.  Time advances only through
/// [`step`][Self::step] (or [`run`][Self::run], which loops it) — there is
/// no internal timer.
///
/// Create via [`MroBuilder`][crate::MroBuilder].
pub struct MobilitySimulator {
    pub(crate) config:   MroConfig,
    pub(crate) antennas: Vec<AntennaConfig>,
    pub(crate) area:     Area,

    /// Simulation clock — tracks the current tick and maps to elapsed time.
    pub(crate) clock: SimClock,

    /// User state, mutated in place each tick.
    pub(crate) users: Vec<User>,

    /// Per-user deterministic RNGs, index-aligned with `users`.
    pub(crate) rngs: Vec<UserRng>,

    /// Replay log: one record per user per processed tick.
    pub(crate) steps: Vec<SimulationStep>,

    /// Antenna id → index into `antennas` (and into per-tick sample vecs).
    pub(crate) slots: FxHashMap<AntennaId, usize>,
}

impl MobilitySimulator {
    // ── Accessors ─────────────────────────────────────────────────────────

    #[inline]
    pub fn config(&self) -> &MroConfig {
        &self.config
    }

    #[inline]
    pub fn antennas(&self) -> &[AntennaConfig] {
        &self.antennas
    }

    #[inline]
    pub fn users(&self) -> &[User] {
        &self.users
    }

    #[inline]
    pub fn clock(&self) -> &SimClock {
        &self.clock
    }

    /// The full replay log accumulated so far.
    #[inline]
    pub fn steps(&self) -> &[SimulationStep] {
        &self.steps
    }

    /// Consume the simulator, keeping only the replay log.
    pub fn into_steps(self) -> Vec<SimulationStep> {
        self.steps
    }

    // ── Public API ────────────────────────────────────────────────────────

    /// Run from the current tick to the configured duration, invoking
    /// observer hooks at every tick boundary.
    pub fn run<O: MroObserver>(&mut self, observer: &mut O) {
        let total = self.config.total_ticks();
        debug!(
            "mro run: {} users, {} antennas, {} ticks",
            self.users.len(),
            self.antennas.len(),
            total
        );
        while self.clock.current_tick.0 < total {
            let now = self.clock.current_tick;
            observer.on_tick_start(now);
            let appended = self.process_tick(now);
            observer.on_tick_end(now, &self.users, &self.steps[appended..]);
            self.clock.advance();
        }
        observer.on_sim_end(self.clock.current_tick);
    }

    /// Advance exactly one tick (ignores the configured duration).
    ///
    /// Returns the replay records appended this tick, one per user.
    pub fn step(&mut self) -> &[SimulationStep] {
        let now = self.clock.current_tick;
        let appended = self.process_tick(now);
        self.clock.advance();
        &self.steps[appended..]
    }

    // ── Core tick processing ──────────────────────────────────────────────

    /// Move, re-measure, and re-connect every user; append replay records.
    ///
    /// Returns the index in `steps` where this tick's records begin.
    fn process_tick(&mut self, now: Tick) -> usize {
        let start = self.steps.len();
        let timestamp_secs = self.clock.timestamp_of(now);

        for (user, rng) in self.users.iter_mut().zip(&mut self.rngs) {
            user.position = crate::walk::walk_step(
                user.position,
                self.config.max_move_distance_m,
                self.area,
                rng,
            );

            let samples = signals_at(user.position, &self.antennas);
            let best = best_signal(&samples);

            match user.connection {
                // UNCONNECTED: connect to the best cell if it is usable.
                None => {
                    if let Some(best) = best
                        && best.dbm >= self.config.min_signal_dbm
                    {
                        user.connection = Some(Connection {
                            antenna:    best.antenna,
                            signal_dbm: best.dbm,
                        });
                        user.handover_attempts = 0;
                    }
                }

                // CONNECTED: re-measure the serving cell at the new
                // position, then hand over, drop, or hold.
                Some(conn) => {
                    // Slot lookup cannot fail: the builder verified every
                    // serving id and connections only ever point at `antennas`.
                    let serving_now = samples[self.slots[&conn.antenna]].dbm;
                    // A connected user implies a non-empty antenna set.
                    let best = best.expect("connected user with no antennas");

                    let can_hand_over = best.antenna != conn.antenna
                        && best.dbm > serving_now + self.config.handover_margin_db
                        && user.handover_attempts < self.config.max_handover_attempts;

                    if serving_now < self.config.min_signal_dbm
                        && !(can_hand_over && best.dbm >= self.config.min_signal_dbm)
                    {
                        // The serving cell is no longer usable and no
                        // handover can rescue the link: it drops.  The
                        // attempt counter resets on the next connect.
                        user.connection = None;
                    } else if can_hand_over {
                        user.connection = Some(Connection {
                            antenna:    best.antenna,
                            signal_dbm: best.dbm,
                        });
                        user.handover_attempts += 1;
                    } else {
                        user.connection = Some(Connection {
                            antenna:    conn.antenna,
                            signal_dbm: serving_now,
                        });
                    }
                }
            }

            self.steps.push(SimulationStep {
                tick: now,
                timestamp_secs,
                user: user.id,
                position: user.position,
                connected: user.serving_antenna(),
            });
        }

        start
    }
}
