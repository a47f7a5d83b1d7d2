use std::cmp::Ordering;
use std::collections::{BinaryHeap, HashMap};

use super::Path;
use crate::graph::{Graph, GraphError, NodeId};

/// Frontier entry. Reversed ordering turns `BinaryHeap` into a min-heap on
/// `(cost, node)`, so equal costs settle in ascending id order.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
struct Frontier {
    cost: u64,
    node: NodeId,
}

impl Ord for Frontier {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .cost
            .cmp(&self.cost)
            .then_with(|| other.node.cmp(&self.node))
    }
}

impl PartialOrd for Frontier {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Shortest-path tree rooted at a single source.
///
/// Built with Dijkstra's algorithm. Nodes absent from the tree are
/// unreachable from the source (or were never settled when the build stopped
/// early at a destination).
#[derive(Clone, Debug)]
pub struct ShortestPathTree {
    source: NodeId,
    dist: HashMap<NodeId, u64>,
    prev: HashMap<NodeId, NodeId>,
}

impl ShortestPathTree {
    /// Settles every node reachable from `source`.
    pub fn build(graph: &Graph, source: NodeId) -> Result<Self, GraphError> {
        Self::grow(graph, source, None)
    }

    /// Runs Dijkstra from `source`, stopping once `stop_at` is settled.
    pub(crate) fn grow(
        graph: &Graph,
        source: NodeId,
        stop_at: Option<NodeId>,
    ) -> Result<Self, GraphError> {
        graph.require(source)?;
        if let Some(target) = stop_at {
            graph.require(target)?;
        }

        let mut dist = HashMap::new();
        let mut prev = HashMap::new();
        let mut heap = BinaryHeap::new();

        dist.insert(source, 0);
        heap.push(Frontier {
            cost: 0,
            node: source,
        });

        while let Some(Frontier { cost, node }) = heap.pop() {
            if dist.get(&node).is_some_and(|&best| cost > best) {
                continue;
            }
            if stop_at == Some(node) {
                break;
            }

            for edge in graph.require(node)?.edges() {
                let next_cost = cost + u64::from(edge.weight);
                let improves = dist.get(&edge.to).is_none_or(|&best| next_cost < best);
                if improves {
                    dist.insert(edge.to, next_cost);
                    prev.insert(edge.to, node);
                    heap.push(Frontier {
                        cost: next_cost,
                        node: edge.to,
                    });
                }
            }
        }

        Ok(Self { source, dist, prev })
    }

    /// Shortest distance from the source, or `None` if unreachable.
    pub fn distance_to(&self, node: NodeId) -> Option<u64> {
        self.dist.get(&node).copied()
    }

    /// Node sequence from the source to `node`, both ends included.
    pub fn path_to(&self, node: NodeId) -> Option<Path> {
        let cost = self.distance_to(node)?;
        let mut nodes = vec![node];
        let mut current = node;
        while current != self.source {
            current = *self.prev.get(&current)?;
            nodes.push(current);
        }
        nodes.reverse();
        Some(Path::new(nodes, cost))
    }

    /// Reachable nodes with their distances, in no particular order.
    pub fn distances(&self) -> impl Iterator<Item = (NodeId, u64)> + '_ {
        self.dist.iter().map(|(&node, &cost)| (node, cost))
    }
}
