//! Overpass road-network fetcher.
//!
//! Queries the Overpass API for all `highway=*` ways within a radius of a
//! center point (the `around:` filter runs server-side) and assembles a
//! [`RoadNetwork`] from the response:
//!
//! - only car-drivable highway classes are kept, each with the assumed
//!   speed from [`cp_spatial::class`];
//! - oneway ways contribute a single directed edge per segment, everything
//!   else both directions;
//! - edge length is the haversine distance between consecutive way nodes,
//!   travel time follows from the class speed.

use std::collections::HashMap;

use reqwest::blocking::Client;
use rustc_hash::{FxHashMap, FxHashSet};
use serde::Deserialize;

use cp_core::{GeoPoint, NodeId};
use cp_spatial::class::{car_speed_mps, is_oneway, travel_ms};
use cp_spatial::{RoadNetwork, RoadNetworkBuilder};

use crate::error::{ProviderError, ProviderResult};

/// Public Overpass instance.
const OVERPASS_ENDPOINT: &str = "https://overpass-api.de/api/interpreter";

const USER_AGENT: &str = concat!("clearpath/", env!("CARGO_PKG_VERSION"));

/// Blocking Overpass client producing ready-to-route networks.
pub struct NetworkFetcher {
    client: Client,
    endpoint: String,
}

impl NetworkFetcher {
    /// Build a client against the public Overpass instance.
    pub fn new() -> ProviderResult<Self> {
        Self::with_endpoint(OVERPASS_ENDPOINT)
    }

    /// Build a client against a custom endpoint (self-hosted instance).
    pub fn with_endpoint(endpoint: &str) -> ProviderResult<Self> {
        let client = Client::builder().user_agent(USER_AGENT).build()?;
        Ok(Self { client, endpoint: endpoint.to_string() })
    }

    /// Fetch the drivable road network within `radius_m` of `center`.
    pub fn fetch(&self, center: GeoPoint, radius_m: f32) -> ProviderResult<RoadNetwork> {
        let query = overpass_query(center, radius_m);
        log::debug!("overpass query: {query}");

        let response = self.client.post(&self.endpoint).body(query).send()?;

        let status = response.status();
        if !status.is_success() {
            log::error!("overpass returned HTTP {status}");
            return Err(ProviderError::Status(status.as_u16()));
        }

        let body = response.text()?;
        let network = network_from_overpass_json(&body)?;
        log::info!(
            "fetched road network around {center}: {} nodes, {} edges",
            network.node_count(),
            network.edge_count()
        );
        Ok(network)
    }
}

/// Overpass QL for all highway ways within the radius, with their nodes.
fn overpass_query(center: GeoPoint, radius_m: f32) -> String {
    format!(
        "[out:json];way[\"highway\"](around:{:.0},{:.6},{:.6});(._;>;);out body;",
        radius_m, center.lat, center.lon
    )
}

// ── Response parsing ──────────────────────────────────────────────────────────

#[derive(Deserialize)]
struct OverpassResponse {
    elements: Vec<OverpassElement>,
}

#[derive(Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
enum OverpassElement {
    Node {
        id: i64,
        lat: f64,
        lon: f64,
    },
    Way {
        #[serde(default)]
        nodes: Vec<i64>,
        #[serde(default)]
        tags: HashMap<String, String>,
    },
    #[serde(other)]
    Other,
}

struct RoadWay {
    refs:      Vec<i64>,
    speed_mps: f32,
    oneway:    bool,
}

/// Assemble a [`RoadNetwork`] from an Overpass JSON response body.
pub fn network_from_overpass_json(body: &str) -> ProviderResult<RoadNetwork> {
    let response: OverpassResponse = serde_json::from_str(body)?;

    // ── Phase 1: split the element soup into nodes and drivable ways ──────
    let mut all_nodes: FxHashMap<i64, GeoPoint> = FxHashMap::default();
    let mut road_ways: Vec<RoadWay> = Vec::new();

    for element in response.elements {
        match element {
            OverpassElement::Node { id, lat, lon } => {
                all_nodes.insert(id, GeoPoint::new(lat as f32, lon as f32));
            }
            OverpassElement::Way { nodes, tags } => {
                let Some(highway) = tags.get("highway") else {
                    continue;
                };
                if let Some(speed_mps) = car_speed_mps(highway) {
                    let oneway = is_oneway(highway, tags.get("oneway").map(String::as_str));
                    road_ways.push(RoadWay { refs: nodes, speed_mps, oneway });
                }
            }
            OverpassElement::Other => {}
        }
    }

    // ── Phase 2: identify road-referenced node IDs ────────────────────────
    let road_node_ids: FxHashSet<i64> = road_ways
        .iter()
        .flat_map(|w| w.refs.iter().copied())
        .filter(|id| all_nodes.contains_key(id))
        .collect();

    // ── Phase 3: build network ────────────────────────────────────────────
    let mut builder = RoadNetworkBuilder::with_capacity(
        road_node_ids.len(),
        road_node_ids.len() * 2,
    );

    let mut osm_to_cp: FxHashMap<i64, NodeId> = FxHashMap::default();
    osm_to_cp.reserve(road_node_ids.len());

    for osm_id in &road_node_ids {
        if let Some(&pos) = all_nodes.get(osm_id) {
            let cp_id = builder.add_node(pos);
            osm_to_cp.insert(*osm_id, cp_id);
        }
    }

    drop(all_nodes);
    drop(road_node_ids);

    // Add directed edges from way node sequences.  Segments referencing a
    // node the response did not include are skipped.
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
