//! Offline OSM PBF loader — enabled with the `osm` Cargo feature.
//!
//! # Usage
//!
//! ```ignore
//! use std::path::Path;
//! use cp_core::GeoPoint;
//! use cp_spatial::osm::load_within_radius;
//!
//! let center = GeoPoint::new(51.507, -0.128);
//! let network = load_within_radius(Path::new("london.osm.pbf"), center, 3_000.0)?;
//! ```
//!
//! # What is loaded
//!
//! Only drivable `highway=*` ways are included (see
//! [`class::car_speed_mps`](crate::class::car_speed_mps)), and only nodes
//! within `radius_m` of `center` — the offline equivalent of the Overpass
//! `around:` filter.  One-way roads add a single directed edge; two-way
//! roads add both directions.
//!
//! # Memory note
//!
//! The loader buffers all OSM nodes inside the radius in a
//! `HashMap<i64, GeoPoint>` for the first pass (needed because ways
//! reference node IDs by OSM integer ID).  The map is freed before the
//! R-tree is built.

use std::collections::{HashMap, HashSet};
use std::path::Path;

use osmpbf::{Element, ElementReader};

use cp_core::{GeoPoint, NodeId};

use crate::class::{car_speed_mps, is_oneway, travel_ms};
use crate::network::{RoadNetwork, RoadNetworkBuilder};
use crate::SpatialError;

// ── Public entry point ────────────────────────────────────────────────────────

/// Load the road network within `radius_m` of `center` from an OSM PBF file.
///
/// Only car-drivable roads are included.  Use [`RoadNetworkBuilder`]
/// directly for non-OSM sources.
///
/// # Errors
///
/// Returns [`SpatialError::Osm`] on file or parse errors.
pub fn load_within_radius(
    path: &Path,
    center: GeoPoint,
    radius_m: f32,
) -> Result<RoadNetwork, SpatialError> {
    // Bounding half-extent in degrees for the cheap pre-filter.  1 degree of
    // latitude ≈ 111 km; longitude shrinks with latitude, so this box only
    // over-admits and the exact haversine check below decides.
    let half_deg = radius_m / 111_000.0;

    // ── Phase 1: collect in-radius OSM nodes + road ways in one pass ──────
    let reader =
        ElementReader::from_path(path).map_err(|e| SpatialError::Osm(e.to_string()))?;

    let mut all_nodes: HashMap<i64, GeoPoint> = HashMap::new();
    let mut road_ways: Vec<OsmWay> = Vec::new();

    let mut keep_node = |id: i64, pos: GeoPoint, nodes: &mut HashMap<i64, GeoPoint>| {
        if pos.within_bbox(center, half_deg) && pos.distance_m(center) <= radius_m {
            nodes.insert(id, pos);
        }
    };

    reader
        .for_each(|elem| match elem {
            Element::Node(n) => {
                let pos = GeoPoint::new(n.lat() as f32, n.lon() as f32);
                keep_node(n.id(), pos, &mut all_nodes);
            }
            Element::DenseNode(n) => {
                let pos = GeoPoint::new(n.lat() as f32, n.lon() as f32);
                keep_node(n.id(), pos, &mut all_nodes);
            }
            Element::Way(w) => {
                // Collect tags eagerly so &str lifetimes don't escape the closure.
                let tags: Vec<(&str, &str)> = w.tags().collect();
                let highway = tags
                    .iter()
                    .find(|(k, _)| *k == "highway")
                    .map(|(_, v)| *v);

                if let Some(speed_mps) = highway.and_then(car_speed_mps) {
                    let oneway_tag = tags
                        .iter()
                        .find(|(k, _)| *k == "oneway")
                        .map(|(_, v)| v.to_string());
                    let oneway = is_oneway(
                        highway.unwrap_or(""),
                        oneway_tag.as_deref(),
                    );
                    let refs: Vec<i64> = w.refs().collect();
                    road_ways.push(OsmWay { refs, speed_mps, oneway });
                }
            }
            _ => {}
        })
        .map_err(|e| SpatialError::Osm(e.to_string()))?;

    // ── Phase 2: identify road-referenced node IDs inside the radius ──────
    let road_node_ids: HashSet<i64> = road_ways
        .iter()
        .flat_map(|w| w.refs.iter().copied())
        .filter(|id| all_nodes.contains_key(id))
        .collect();

    // ── Phase 3: build network ────────────────────────────────────────────
    // Pre-allocate: ~2× road nodes for edges (rough estimate).
    let mut builder = RoadNetworkBuilder::with_capacity(
        road_node_ids.len(),
        road_node_ids.len() * 2,
    );

    // Map OSM node IDs → our NodeIds, adding only road-relevant nodes.
    let mut osm_to_cp: HashMap<i64, NodeId> =
        HashMap::with_capacity(road_node_ids.len());

    for osm_id in &road_node_ids {
        if let Some(&pos) = all_nodes.get(osm_id) {
            let cp_id = builder.add_node(pos);
            osm_to_cp.insert(*osm_id, cp_id);
        }
    }

    // Free the full node map — no longer needed.
    drop(all_nodes);
    drop(road_node_ids);

    // Add directed edges from way node sequences.  A way that crosses the
    // radius boundary contributes only the segments whose endpoints both
    // survived the clip.
    for way in &road_ways {
        for window in way.refs.windows(2) {
            let (osm_a, osm_b) = (window[0], window[1]);
            if let (Some(&from), Some(&to)) =
                (osm_to_cp.get(&osm_a), osm_to_cp.get(&osm_b))
            {
                let len_m = builder.node_pos(from).distance_m(builder.node_pos(to));
                let ms = travel_ms(len_m, way.speed_mps);

                builder.add_directed_edge(from, to, len_m, ms);
                if !way.oneway {
                    builder.add_directed_edge(to, from, len_m, ms);
                }
            }
        }
    }

    Ok(builder.build())
}

// ── Internal types ────────────────────────────────────────────────────────────

struct OsmWay {
    refs:      Vec<i64>,
    speed_mps: f32,
    oneway:    bool,
}
