//! Neighbor ordering for the orb search.

use std::collections::HashSet;

use cavern_core::{NeighborStatus, NodeId};

/// Sorts neighbors by ascending heuristic distance to the orb.
///
/// The sort is stable: neighbors reporting the same distance keep the order
/// the cavern listed them in.
pub fn rank(mut neighbors: Vec<NeighborStatus>) -> Vec<NeighborStatus> {
    neighbors.sort_by_key(|status| status.distance_to_target);
    neighbors
}

/// Ranked ids of the neighbors not yet in `visited`.
pub fn rank_unvisited(neighbors: Vec<NeighborStatus>, visited: &HashSet<NodeId>) -> Vec<NodeId> {
    rank(neighbors)
        .into_iter()
        .map(|status| status.id)
        .filter(|id| !visited.contains(id))
        .collect()
}
