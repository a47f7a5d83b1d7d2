//! Serde support for [`Graph`].
//!
//! The wire form lists every node once and every undirected edge once. Edge
//! direction and adjacency are rebuilt by [`Graph::from_parts`], so a document
//! with a zero weight, a self loop or a repeated edge fails to deserialize.

use serde::{Deserialize, Deserializer, Serialize, Serializer, de};

use super::{Graph, NodeId, Position};

#[derive(Serialize, Deserialize)]
struct GraphData {
    nodes: Vec<(NodeId, Position, u32)>, // (id, position, gold)
    edges: Vec<(NodeId, NodeId, u32)>,   // (a, b, weight)
}

impl From<&Graph> for GraphData {
    fn from(graph: &Graph) -> Self {
        let nodes = graph
            .nodes()
            .map(|node| (node.id, node.position, node.gold))
            .collect();
        let edges = graph
            .nodes()
            .flat_map(|node| {
                node.edges
                    .iter()
                    .filter(move |edge| node.id < edge.to)
                    .map(move |edge| (node.id, edge.to, edge.weight))
            })
            .collect();
        Self { nodes, edges }
    }
}

impl Serialize for Graph {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        GraphData::from(self).serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for Graph {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let data = GraphData::deserialize(deserializer)?;
        Graph::from_parts(data.nodes, data.edges).map_err(de::Error::custom)
    }
}
