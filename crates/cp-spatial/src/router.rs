//! Routing trait and default Dijkstra implementation.
//!
//! # Two weightings, one graph
//!
//! Every query computes the same source/target pair under two edge-cost
//! functions: [`RouteWeight::Length`] (physical metres) and
//! [`RouteWeight::TravelTime`] (car travel time).  The two resulting routes
//! can and often do diverge — a short residential cut-through loses to a
//! faster arterial under `TravelTime`.
//!
//! # Cost units
//!
//! Dijkstra runs on non-negative `u32` costs: centimetres for `Length`,
//! milliseconds for `TravelTime`.  Integer costs keep heap ordering exact;
//! a u32 of centimetres caps at ~42,900 km, far beyond any city-radius
//! query.

use std::cmp::Reverse;
use std::collections::BinaryHeap;

use cp_core::{EdgeId, GeoPoint, NodeId};

use crate::network::RoadNetwork;
use crate::SpatialError;

// ── RouteWeight ───────────────────────────────────────────────────────────────

/// Which per-edge quantity Dijkstra minimizes.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum RouteWeight {
    /// Minimize total physical length (`edge_length_m`).
    Length,
    /// Minimize total car travel time (`edge_travel_ms`).
    TravelTime,
}

// ── Route ─────────────────────────────────────────────────────────────────────

/// The result of a routing query: the node sequence from source to
/// destination plus both accumulated totals of the traversed edges.
///
/// A degenerate route (source == destination) has exactly one node and zero
/// totals.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Route {
    /// Nodes visited in order, source first, destination last.  Never empty.
    pub nodes: Vec<NodeId>,
    /// Total physical length of the traversed edges, metres.
    pub total_length_m: f32,
    /// Total car travel time of the traversed edges, seconds.
    pub total_travel_secs: f32,
}

impl Route {
    /// `true` if the source and destination are the same node.
    pub fn is_trivial(&self) -> bool {
        self.nodes.len() == 1
    }

    /// Number of nodes on the route.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}

/// Both routes of one query over the same snapped node pair.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RoutePair {
    /// Path minimizing total edge length.
    pub shortest: Route,
    /// Path minimizing total travel time.
    pub fastest: Route,
}

// ── Router trait ──────────────────────────────────────────────────────────────

/// Pluggable routing engine.
///
/// Implement this trait to replace the default Dijkstra with a contraction
/// hierarchy or A* without touching the callers.
pub trait Router {
    /// Compute a route from `from` to `to` under the given weight.
    ///
    /// `from == to` is handled as a degenerate single-node route rather than
    /// an error.
    fn route(
        &self,
        network: &RoadNetwork,
        from: NodeId,
        to: NodeId,
        weight: RouteWeight,
    ) -> Result<Route, SpatialError>;
}

// ── DijkstraRouter ────────────────────────────────────────────────────────────

/// Standard Dijkstra's algorithm over the CSR road graph.
pub struct DijkstraRouter;

impl Router for DijkstraRouter {
    fn route(
        &self,
        network: &RoadNetwork,
        from: NodeId,
        to: NodeId,
        weight: RouteWeight,
    ) -> Result<Route, SpatialError> {
        dijkstra(network, from, to, weight)
    }
}

// ── Query-level helper ────────────────────────────────────────────────────────

/// Snap two query coordinates to their nearest network nodes and compute
/// both the length-weighted and the travel-time-weighted route between the
/// same node pair.
///
/// # Errors
///
/// [`SpatialError::EmptyNetwork`] if there is no node to snap to;
/// [`SpatialError::NoRoute`] if the snapped endpoints lie in disconnected
/// components.
pub fn find_route_pair<R: Router>(
    network: &RoadNetwork,
    router: &R,
    start: GeoPoint,
    end: GeoPoint,
) -> Result<RoutePair, SpatialError> {
    let from = network.snap_to_node(start).ok_or(SpatialError::EmptyNetwork)?;
    let to   = network.snap_to_node(end).ok_or(SpatialError::EmptyNetwork)?;

    let shortest = router.route(network, from, to, RouteWeight::Length)?;
    let fastest  = router.route(network, from, to, RouteWeight::TravelTime)?;

    Ok(RoutePair { shortest, fastest })
}

// ── Dijkstra internals ────────────────────────────────────────────────────────

/// Integer edge cost under the given weight: centimetres or milliseconds.
#[inline]
fn edge_cost(network: &RoadNetwork, edge: EdgeId, weight: RouteWeight) -> u32 {
    match weight {
        RouteWeight::Length     => (network.edge_length_m[edge.index()] * 100.0) as u32,
        RouteWeight::TravelTime => network.edge_travel_ms[edge.index()],
    }
}

fn dijkstra(
    network: &RoadNetwork,
    from: NodeId,
    to: NodeId,
    weight: RouteWeight,
) -> Result<Route, SpatialError> {
    if from == to {
        return Ok(Route {
            nodes: vec![from],
            total_length_m: 0.0,
            total_travel_secs: 0.0,
        });
    }

    let n = network.node_count();
    // dist[v] = best known cost to reach v.
    let mut dist = vec![u32::MAX; n];
    // prev_edge[v] = EdgeId that reached v; EdgeId::INVALID for unreached nodes.
    let mut prev_edge = vec![EdgeId::INVALID; n];

    dist[from.index()] = 0;

    // Min-heap: (cost, node). Reverse makes BinaryHeap (max) behave as min-heap.
    // Secondary key NodeId ensures deterministic tie-breaking.
    let mut heap: BinaryHeap<Reverse<(u32, NodeId)>> = BinaryHeap::new();
    heap.push(Reverse((0, from)));

    while let Some(Reverse((cost, node))) = heap.pop() {
        if node == to {
            return Ok(reconstruct(network, prev_edge, from, to));
        }

        // Skip stale heap entries.
        if cost > dist[node.index()] {
            continue;
        }

        for edge in network.out_edges(node) {
            let neighbor = network.edge_to[edge.index()];
            let new_cost = cost.saturating_add(edge_cost(network, edge, weight));

            if new_cost < dist[neighbor.index()] {
                dist[neighbor.index()] = new_cost;
                prev_edge[neighbor.index()] = edge;
                heap.push(Reverse((new_cost, neighbor)));
            }
        }
    }

    Err(SpatialError::NoRoute { from, to })
}

fn reconstruct(
    network: &RoadNetwork,
    prev_edge: Vec<EdgeId>,
    from: NodeId,
    to: NodeId,
) -> Route {
    let mut nodes = Vec::new();
    let mut total_length_m = 0.0f32;
    let mut total_travel_ms = 0u64;

    let mut cur = to;
    nodes.push(cur);
    loop {
        let e = prev_edge[cur.index()];
        if e == EdgeId::INVALID {
            break;
        }
        total_length_m += network.edge_length_m[e.index()];
        total_travel_ms += network.edge_travel_ms[e.index()] as u64;
        cur = network.edge_from[e.index()];
        nodes.push(cur);
    }
    debug_assert_eq!(cur, from);
    nodes.reverse();

    Route {
        nodes,
        total_length_m,
        total_travel_secs: total_travel_ms as f32 / 1000.0,
    }
}
