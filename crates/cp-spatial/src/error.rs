//! Spatial-subsystem error type.

use thiserror::Error;

use cp_core::NodeId;

/// Errors produced by `cp-spatial`.
#[derive(Debug, Error)]
pub enum SpatialError {
    #[error("no route from {from} to {to}")]
    NoRoute { from: NodeId, to: NodeId },

    #[error("network has no nodes to snap to")]
    EmptyNetwork,

    #[cfg(feature = "osm")]
    #[error("OSM read error: {0}")]
    Osm(String),
}

pub type SpatialResult<T> = Result<T, SpatialError>;
