//! `ran-core` — foundational types for the `rust_ran` radio-network engine.
//!
//! This crate is a dependency of every other `ran-*` crate.  It intentionally
//! has no `ran-*` dependencies and minimal external ones (only `rand`, plus
//! optional `serde`).
//!
//! # What lives here
//!
//! | Module      | Contents                                              |
//! |-------------|-------------------------------------------------------|
//! | [`ids`]     | `AntennaId`, `UserId`                                 |
//! | [`geo`]     | `Point`, `Area`, Euclidean distance                   |
//! | [`params`]  | `Bounds`, `TunableParams`, tunable-parameter limits   |
//! | [`antenna`] | `AntennaConfig`                                       |
//! | [`user`]    | `User`, `Connection`, uniform scattering              |
//! | [`time`]    | `Tick`, `SimClock`                                    |
//! | [`rng`]     | `UserRng` (per-user), `SimRng` (global)               |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types.        |

pub mod antenna;
pub mod geo;
pub mod ids;
pub mod params;
pub mod rng;
pub mod time;
pub mod user;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use antenna::{AntennaConfig, DEFAULT_FREQUENCY_MHZ};
pub use geo::{Area, Point};
pub use ids::{AntennaId, UserId};
pub use params::{AZIMUTH, Bounds, POWER, TILT, TunableParams};
pub use rng::{SimRng, UserRng};
pub use time::{SimClock, Tick};
pub use user::{Connection, User, scatter_users};
