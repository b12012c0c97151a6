//! `cp-spatial` — road network, spatial indexing, and routing.
//!
//! # Crate layout
//!
//! | Module      | Contents                                                 |
//! |-------------|----------------------------------------------------------|
//! | [`network`] | `RoadNetwork` (CSR + R-tree), `RoadNetworkBuilder`       |
//! | [`router`]  | `Router` trait, `Route`, `RoutePair`, `DijkstraRouter`   |
//! | [`class`]   | Drivable road classes, assumed speeds, oneway detection  |
//! | [`osm`]     | `load_within_radius` (feature = `"osm"` only)            |
//! | [`error`]   | `SpatialError`, `SpatialResult<T>`                       |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                             |
//! |---------|----------------------------------------------------|
//! | `osm`   | Enables offline PBF loading via the `osmpbf` crate.|
//! | `serde` | Derives `Serialize`/`Deserialize` on public types. |

pub mod class;
pub mod error;
pub mod network;
pub mod router;

#[cfg(feature = "osm")]
pub mod osm;


pub use error::{SpatialError, SpatialResult};
pub use network::{RoadNetwork, RoadNetworkBuilder};
pub use router::{find_route_pair, DijkstraRouter, Route, RoutePair, RouteWeight, Router};
