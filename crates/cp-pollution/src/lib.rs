//! `cp-pollution` — synthetic pollution annotation and route scoring.
//!
//! # Crate layout
//!
//! | Module        | Contents                                        |
//! |---------------|-------------------------------------------------|
//! | [`annotate`]  | One-time idempotent pollution fill              |
//! | [`score`]     | Mean pollution over a route's nodes             |
//! | [`recommend`] | `RouteKind` and the lower-pollution rule        |
//!
//! All three are pure or idempotent functions over an already-built
//! [`RoadNetwork`](cp_spatial::RoadNetwork); this crate holds no state and
//! defines no errors.

pub mod annotate;
pub mod recommend;
pub mod score;

#[cfg(test)]
mod tests;

pub use annotate::{annotate_network, POLLUTION_MAX, POLLUTION_MIN};
pub use recommend::{recommend, RouteKind};
pub use score::average_pollution;
