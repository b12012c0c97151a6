//! `cp-core` — foundational types for the clearpath route planner.
//!
//! This crate is a dependency of every other `cp-*` crate.  It intentionally
//! has no `cp-*` dependencies and minimal external ones (only `rand` and
//! `thiserror`, plus optional `serde`).
//!
//! # What lives here
//!
//! | Module     | Contents                                  |
//! |------------|-------------------------------------------|
//! | [`ids`]    | `NodeId`, `EdgeId`                        |
//! | [`geo`]    | `GeoPoint`, haversine distance            |
//! | [`rng`]    | `SeededRng` (explicit, caller-owned)      |
//! | [`config`] | `QueryConfig` (radius / seed / zoom)      |
//! | [`error`]  | `CoreError`, `CoreResult`                 |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                              |
//! |---------|-----------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types. |

pub mod config;
pub mod error;
pub mod geo;
pub mod ids;
pub mod rng;

#[cfg(test)]
mod tests;

// ── Re-exports ────────────────────────────────────────────────────────────────

pub use config::QueryConfig;
pub use error::{CoreError, CoreResult};
pub use geo::GeoPoint;
pub use ids::{EdgeId, NodeId};
pub use rng::SeededRng;
