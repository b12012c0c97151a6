//! Query configuration.
//!
//! The three knobs a caller may turn per session.  Everything else
//! (pollution range, route colors, endpoint circle radius) is a fixed
//! constant of the component that owns it.

use crate::error::{CoreError, CoreResult};

/// Default network fetch radius around the start point, metres.
pub const DEFAULT_RADIUS_M: f32 = 3_000.0;
/// Default pollution RNG seed.
pub const DEFAULT_SEED: u64 = 42;
/// Default initial map zoom level.
pub const DEFAULT_ZOOM: u8 = 14;

/// Per-session query configuration.
///
/// Typically populated from CLI options by the application crate and passed
/// by reference to the components that consume each field.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct QueryConfig {
    /// Road-network fetch radius around the start point, metres.
    pub radius_m: f32,

    /// Seed for the pollution annotator's RNG.  The same seed over the same
    /// network always produces identical pollution values.
    pub seed: u64,

    /// Initial zoom level of the rendered map.
    pub zoom: u8,
}

impl Default for QueryConfig {
    fn default() -> Self {
        Self {
            radius_m: DEFAULT_RADIUS_M,
            seed: DEFAULT_SEED,
            zoom: DEFAULT_ZOOM,
        }
    }
}

impl QueryConfig {
    /// Reject values the downstream components cannot work with.
    pub fn validate(&self) -> CoreResult<()> {
        if !self.radius_m.is_finite() || self.radius_m <= 0.0 {
            return Err(CoreError::Config(format!(
                "radius_m must be a positive number of metres, got {}",
                self.radius_m
            )));
        }
        // OSM raster tiles stop at zoom 19.
        if !(1..=19).contains(&self.zoom) {
            return Err(CoreError::Config(format!(
                "zoom must be in 1..=19, got {}",
                self.zoom
            )));
        }
        Ok(())
    }
}
