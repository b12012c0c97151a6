//! Mean pollution over a route's nodes.

use cp_spatial::{RoadNetwork, Route};

/// Arithmetic mean of the pollution level across the route's nodes.
///
/// A node missing its pollution attribute counts as 0 — this should not
/// occur after annotation but is tolerated rather than panicking.  Returns
/// `None` for a zero-length route, where the mean is undefined.
pub fn average_pollution(route: &Route, network: &RoadNetwork) -> Option<f64> {
    if route.nodes.is_empty() {
        return None;
    }
    let sum: u64 = route
        .nodes
        .iter()
        .map(|&n| network.pollution(n).unwrap_or(0) as u64)
        .sum();
    Some(sum as f64 / route.nodes.len() as f64)
}
