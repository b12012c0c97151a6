//! `cp-render` — interactive map rendering and route exports.
//!
//! # Crate layout
//!
//! | Module     | Contents                                            |
//! |------------|-----------------------------------------------------|
//! | [`map`]    | `MapDocument` — Leaflet HTML canvas + primitives    |
//! | [`panels`] | Legend and route-information overlay HTML           |
//! | [`export`] | Per-route CSV export                                |
//! | [`error`]  | `RenderError`, `RenderResult<T>`                    |
//!
//! The map artifact is a single self-contained HTML file; Leaflet and the
//! OSM raster tiles load from their public CDNs when the file is opened.

pub mod error;
pub mod export;
pub mod map;
pub mod panels;

#[cfg(test)]
mod tests;

pub use error::{RenderError, RenderResult};
pub use export::write_route_csv;
pub use map::{route_points, MapDocument};
