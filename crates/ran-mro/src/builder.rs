//! Fluent builder for constructing a [`MobilitySimulator`].

use rustc_hash::FxHashMap;

use ran_core::{AntennaConfig, AntennaId, Area, SimRng, User, UserId, UserRng, scatter_users};

use crate::{MobilitySimulator, MroConfig, MroError, MroResult};

/// Fluent builder for [`MobilitySimulator`].
///
/// # Required inputs
///
/// - [`MroConfig`] — duration, interval, thresholds, seed
/// - `antennas` + `area`
///
/// # User population (pick one)
///
/// | Method             | Effect                                          |
/// |--------------------|-------------------------------------------------|
/// | `.users(v)`        | Caller-supplied users (positions clamped)       |
/// | `.scatter(n)`      | `n` users scattered uniformly from the seed     |
///
/// Default: an empty population (legal; every metric degrades gracefully).
///
/// # Example
///
/// ```rust,ignore
/// let mut sim = MroBuilder::new(MroConfig::default(), antennas, area)
///     .scatter(100)
///     .build()?;
/// sim.run(&mut NoopObserver);
/// ```
pub struct MroBuilder {
    config:   MroConfig,
    antennas: Vec<AntennaConfig>,
    area:     Area,
    users:    Option<Vec<User>>,
    scatter:  Option<usize>,
}

impl MroBuilder {
    /// Create a builder with all required inputs.
    pub fn new(config: MroConfig, antennas: Vec<AntennaConfig>, area: Area) -> Self {
        Self {
            config,
            antennas,
            area,
            users:   None,
            scatter: None,
        }
    }

    /// Supply the user population directly.
    ///
    /// Ids are reassigned densely from 0 so they can index per-user arrays;
    /// positions outside the area are clamped onto it.  Pre-connected users
    /// are allowed if their serving antenna exists.
    pub fn users(mut self, users: Vec<User>) -> Self {
        self.users = Some(users);
        self.scatter = None;
        self
    }

    /// Scatter `count` unconnected users uniformly over the area, seeded
    /// from the config.
    pub fn scatter(mut self, count: usize) -> Self {
        self.scatter = Some(count);
        self.users = None;
        self
    }

    /// Validate inputs and return a ready-to-run simulator.
    pub fn build(self) -> MroResult<MobilitySimulator> {
        self.config.validate()?;

        let slots: FxHashMap<AntennaId, usize> = self
            .antennas
            .iter()
            .enumerate()
            .map(|(i, a)| (a.id, i))
            .collect();
        if slots.len() != self.antennas.len() {
            return Err(MroError::Config("duplicate antenna ids".into()));
        }

        let users = match (self.users, self.scatter) {
            (Some(mut users), _) => {
                for (i, user) in users.iter_mut().enumerate() {
                    user.id = UserId(i as u32);
                    user.position = self.area.clamp(user.position);
                    if let Some(conn) = user.connection
                        && !slots.contains_key(&conn.antenna)
                    {
                        return Err(MroError::UnknownServingAntenna {
                            user:    user.id,
                            antenna: conn.antenna,
                        });
                    }
                }
                users
            }
            (None, Some(count)) => {
                let mut rng = SimRng::new(self.config.seed);
                scatter_users(count, self.area, &mut rng)
            }
            (None, None) => Vec::new(),
        };

        let rngs = users
            .iter()
            .map(|u| UserRng::new(self.config.seed, u.id))
            .collect();

        Ok(MobilitySimulator {
            clock: self.config.make_clock(),
            config: self.config,
            antennas: self.antennas,
            area: self.area,
            users,
            rngs,
            steps: Vec::new(),
            slots,
        })
    }
}
