//! Simulated user/device state.

use crate::geo::{Area, Point};
use crate::ids::{AntennaId, UserId};
use crate::rng::SimRng;

/// An established radio link: the serving antenna and the signal measured
/// when the link was last updated, in dBm.
///
/// The pair travels as one value so a user can never be "connected" without
/// a signal reading or vice versa.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Connection {
    pub antenna:    AntennaId,
    pub signal_dbm: f64,
}

/// One simulated user.
///
/// Created at simulation start, mutated by the mobility simulator every
/// tick, discarded at simulation end.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct User {
    pub id:       UserId,
    pub position: Point,

    /// `None` while unconnected.
    pub connection: Option<Connection>,

    /// Handovers performed since the link was established.  Reset to 0 on
    /// every unconnected → connected transition.
    pub handover_attempts: u8,
}

impl User {
    /// A new, unconnected user at `position`.
    pub fn new(id: UserId, position: Point) -> Self {
        Self {
            id,
            position,
            connection:        None,
            handover_attempts: 0,
        }
    }

    #[inline]
    pub fn is_connected(&self) -> bool {
        self.connection.is_some()
    }

    /// The serving antenna, or `None` while unconnected.
    #[inline]
    pub fn serving_antenna(&self) -> Option<AntennaId> {
        self.connection.map(|c| c.antenna)
    }
}

/// Scatter `count` unconnected users uniformly over `area`.
///
/// Ids are assigned densely from 0 so they double as indices into parallel
/// per-user arrays.
pub fn scatter_users(count: usize, area: Area, rng: &mut SimRng) -> Vec<User> {
    (0..count)
        .map(|i| {
            let position = Point {
                x: rng.gen_range(0.0..=area.width),
                y: rng.gen_range(0.0..=area.height),
            };
            User::new(UserId(i as u32), position)
        })
        .collect()
}
