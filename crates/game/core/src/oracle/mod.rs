//! Distance oracle over a fully observable cavern graph.
//!
//! Every query runs Dijkstra from scratch; the graph is static within a round
//! and small enough that caching is left to callers (see
//! [`ShortestPathTree`], which the flee planner keeps for the exit).
mod tree;

pub use tree::ShortestPathTree;

use crate::graph::{Graph, GraphError, NodeId};

/// An ordered walk through the graph together with its total weight.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Path {
    nodes: Vec<NodeId>,
    cost: u64,
}

impl Path {
    pub(crate) fn new(nodes: Vec<NodeId>, cost: u64) -> Self {
        Self { nodes, cost }
    }

    pub fn nodes(&self) -> &[NodeId] {
        &self.nodes
    }

    pub fn cost(&self) -> u64 {
        self.cost
    }

    pub fn start(&self) -> Option<NodeId> {
        self.nodes.first().copied()
    }

    pub fn end(&self) -> Option<NodeId> {
        self.nodes.last().copied()
    }

    /// Number of edges traversed.
    pub fn hop_count(&self) -> usize {
        self.nodes.len().saturating_sub(1)
    }

    /// Consecutive `(from, to)` pairs along the path.
    pub fn hops(&self) -> impl Iterator<Item = (NodeId, NodeId)> + '_ {
        self.nodes.windows(2).map(|pair| (pair[0], pair[1]))
    }

    /// The same walk traversed in the opposite direction.
    pub fn reversed(mut self) -> Self {
        self.nodes.reverse();
        self
    }
}

/// Shortest-path distance from `from` to `to`.
///
/// Returns `Ok(None)` when `to` is not reachable.
pub fn distance(graph: &Graph, from: NodeId, to: NodeId) -> Result<Option<u64>, GraphError> {
    Ok(ShortestPathTree::grow(graph, from, Some(to))?.distance_to(to))
}

/// Shortest path from `from` to `to`; `from == to` yields a single-node path.
pub fn shortest_path(graph: &Graph, from: NodeId, to: NodeId) -> Result<Option<Path>, GraphError> {
    Ok(ShortestPathTree::grow(graph, from, Some(to))?.path_to(to))
}
