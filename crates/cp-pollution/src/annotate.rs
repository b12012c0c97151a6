//! One-time synthetic pollution annotation.
//!
//! # Determinism
//!
//! Values are drawn from the caller's [`SeededRng`] in `NodeId` order, so
//! the same seed over the same network always produces the same
//! assignments.  Nodes that already carry a value consume no draws and are
//! never overwritten — re-running the annotator is a no-op for them.

use cp_core::SeededRng;
use cp_spatial::RoadNetwork;

/// Lowest pollution level the annotator assigns.
pub const POLLUTION_MIN: u8 = 20;
/// Highest pollution level the annotator assigns (inclusive).
pub const POLLUTION_MAX: u8 = 100;

/// Assign every unannotated node a pollution level drawn uniformly from
/// [`POLLUTION_MIN`]..=[`POLLUTION_MAX`].
///
/// Takes exclusive `&mut` access to the network: nothing else can write
/// node attributes while the fill runs.  An empty network is a no-op.
pub fn annotate_network(network: &mut RoadNetwork, rng: &mut SeededRng) {
    for slot in network.node_pollution.iter_mut() {
        if slot.is_none() {
            *slot = Some(rng.gen_range(POLLUTION_MIN..=POLLUTION_MAX));
        }
    }
}
