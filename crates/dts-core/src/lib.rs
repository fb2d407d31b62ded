//! `dts-core` — foundational types for the drive-in test station simulation.
//!
//! Every other `dts-*` crate depends on this one.  It has no `dts-*`
//! dependencies and minimal external ones (only `rand` and `thiserror`, plus
//! optional `serde`).
//!
//! # What lives here
//!
//! | Module     | Contents                                                   |
//! |------------|------------------------------------------------------------|
//! | [`ids`]    | `CarId`, `EventSeq`                                        |
//! | [`time`]   | `SimTime`, `SimClock`                                      |
//! | [`rng`]    | `SimRng`, the random interval source                       |
//! | [`config`] | `StationConfig`, `UniformRange`                            |
//! | [`error`]  | `CoreError`, `CoreResult`                                  |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                               |
//! |---------|----------------------------------------------------------------------|
//! | `serde` | `Serialize`/`Deserialize` on the ids, `SimTime` and the config types |

pub mod config;
pub mod error;
pub mod ids;
pub mod rng;
pub mod time;

#[cfg(test)]
mod tests;

// ── Re-exports ────────────────────────────────────────────────────────────────

pub use config::{StationConfig, UniformRange};
pub use error::{CoreError, CoreResult};
pub use ids::{CarId, EventSeq};
pub use rng::SimRng;
pub use time::{SimClock, SimTime};
