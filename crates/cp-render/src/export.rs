//! Per-route CSV export.
//!
//! One row per route node: `node_id, lat, lon, pollution_level`.  The
//! pollution column is empty for an unannotated node.

use std::path::Path;

use csv::Writer;

use cp_spatial::{RoadNetwork, Route};

use crate::error::RenderResult;

/// Write the route's node sequence to a CSV file at `path`.
pub fn write_route_csv(path: &Path, route: &Route, network: &RoadNetwork) -> RenderResult<()> {
    let mut writer = Writer::from_path(path)?;
    writer.write_record(["node_id", "lat", "lon", "pollution_level"])?;

    for &node in &route.nodes {
        let pos = network.position(node);
        let pollution = network
            .pollution(node)
            .map(|p| p.to_string())
            .unwrap_or_default();
        writer.write_record(&[
            node.0.to_string(),
            format!("{:.6}", pos.lat),
            format!("{:.6}", pos.lon),
            pollution,
        ])?;
    }

    writer.flush()?;
    Ok(())
}
