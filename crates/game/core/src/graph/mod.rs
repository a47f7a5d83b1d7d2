//! Undirected, positively-weighted cavern graph.
//!
//! Nodes are kept in a `BTreeMap` so every iteration (reward scans, loaders,
//! debug output) runs in ascending id order. Each node stores its incident
//! edges in insertion order, which is the order the agent sees neighbors in.
#[cfg(feature = "serde")]
mod codec;
mod error;
mod types;

use std::collections::BTreeMap;

pub use error::GraphError;
pub use types::{NodeId, Position};

/// Half of an undirected edge, stored on the node it leaves from.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Edge {
    pub to: NodeId,
    pub weight: u32,
}

/// A tile of the cavern.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Node {
    id: NodeId,
    position: Position,
    gold: u32,
    edges: Vec<Edge>,
}

impl Node {
    fn new(id: NodeId, position: Position, gold: u32) -> Self {
        Self {
            id,
            position,
            gold,
            edges: Vec::new(),
        }
    }

    pub fn id(&self) -> NodeId {
        self.id
    }

    pub fn position(&self) -> Position {
        self.position
    }

    /// Gold lying on this tile. Zero once collected.
    pub fn gold(&self) -> u32 {
        self.gold
    }

    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    pub fn neighbors(&self) -> impl Iterator<Item = NodeId> + '_ {
        self.edges.iter().map(|edge| edge.to)
    }

    /// Weight of the edge to `other`, if the two nodes are adjacent.
    pub fn weight_to(&self, other: NodeId) -> Option<u32> {
        self.edges
            .iter()
            .find(|edge| edge.to == other)
            .map(|edge| edge.weight)
    }
}

/// Serialized as flat node and edge lists; deserializing goes through
/// [`Graph::from_parts`], so loaded graphs obey the same rules as built ones.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Graph {
    nodes: BTreeMap<NodeId, Node>,
}

impl Graph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a graph from node and edge lists, validating each entry.
    pub fn from_parts(
        nodes: impl IntoIterator<Item = (NodeId, Position, u32)>,
        edges: impl IntoIterator<Item = (NodeId, NodeId, u32)>,
    ) -> Result<Self, GraphError> {
        let mut graph = Self::new();
        for (id, position, gold) in nodes {
            graph.add_node(id, position, gold)?;
        }
        for (a, b, weight) in edges {
            graph.add_edge(a, b, weight)?;
        }
        Ok(graph)
    }

    pub fn add_node(
        &mut self,
        id: NodeId,
        position: Position,
        gold: u32,
    ) -> Result<(), GraphError> {
        if self.nodes.contains_key(&id) {
            return Err(GraphError::DuplicateNode(id));
        }
        self.nodes.insert(id, Node::new(id, position, gold));
        Ok(())
    }

    /// Connects `a` and `b` in both directions with the same weight.
    pub fn add_edge(&mut self, a: NodeId, b: NodeId, weight: u32) -> Result<(), GraphError> {
        if a == b {
            return Err(GraphError::SelfLoop(a));
        }
        if weight == 0 {
            return Err(GraphError::NonPositiveWeight { a, b });
        }
        let from = self.nodes.get(&a).ok_or(GraphError::UnknownNode(a))?;
        if !self.nodes.contains_key(&b) {
            return Err(GraphError::UnknownNode(b));
        }
        if from.weight_to(b).is_some() {
            return Err(GraphError::DuplicateEdge { a, b });
        }

        if let Some(node) = self.nodes.get_mut(&a) {
            node.edges.push(Edge { to: b, weight });
        }
        if let Some(node) = self.nodes.get_mut(&b) {
            node.edges.push(Edge { to: a, weight });
        }
        Ok(())
    }

    pub fn node(&self, id: NodeId) -> Option<&Node> {
        self.nodes.get(&id)
    }

    /// Like [`Graph::node`], but unknown ids are an error.
    pub fn require(&self, id: NodeId) -> Result<&Node, GraphError> {
        self.nodes.get(&id).ok_or(GraphError::UnknownNode(id))
    }

    pub fn contains(&self, id: NodeId) -> bool {
        self.nodes.contains_key(&id)
    }

    /// Nodes in ascending id order.
    pub fn nodes(&self) -> impl Iterator<Item = &Node> {
        self.nodes.values()
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn weight(&self, a: NodeId, b: NodeId) -> Option<u32> {
        self.nodes.get(&a).and_then(|node| node.weight_to(b))
    }

    pub fn is_adjacent(&self, a: NodeId, b: NodeId) -> bool {
        self.weight(a, b).is_some()
    }

    pub fn gold(&self, id: NodeId) -> u32 {
        self.nodes.get(&id).map_or(0, Node::gold)
    }

    /// Ids of nodes still carrying gold, ascending.
    pub fn reward_nodes(&self) -> impl Iterator<Item = NodeId> + '_ {
        self.nodes
            .values()
            .filter(|node| node.gold > 0)
            .map(|node| node.id)
    }

    /// Removes and returns the gold lying on `id`.
    pub fn take_gold(&mut self, id: NodeId) -> u32 {
        self.nodes
            .get_mut(&id)
            .map_or(0, |node| std::mem::take(&mut node.gold))
    }
}
