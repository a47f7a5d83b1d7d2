//! Cavern layout loader.
//!
//! A cavern file lists tiles, weighted passages, and the round's fixed
//! points (start, orb, exit) plus the flee step budget.

use std::path::Path;

use anyhow::Context;
use cavern_core::{Cavern, Graph, GraphError, NodeId, Position};
use serde::Deserialize;

use crate::loaders::{LoadResult, read_file};

/// Cavern data structure for RON/JSON files.
#[derive(Debug, Clone, Deserialize)]
struct CavernData {
    nodes: Vec<(u64, i32, i32, u32)>, // (id, x, y, gold)
    edges: Vec<(u64, u64, u32)>,      // (a, b, weight)
    start: u64,
    orb: u64,
    exit: u64,
    steps: u64,
}

/// A validated cavern layout, ready to be turned into a [`Cavern`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CavernLayout {
    pub graph: Graph,
    pub start: NodeId,
    pub orb: NodeId,
    pub exit: NodeId,
    /// Steps granted when the flee phase begins.
    pub steps: u64,
}

impl CavernLayout {
    /// Creates a fresh simulator positioned on `start`.
    pub fn build(&self) -> Result<Cavern, GraphError> {
        Cavern::new(self.graph.clone(), self.start, self.orb, self.exit)
    }
}

impl TryFrom<CavernData> for CavernLayout {
    type Error = GraphError;

    fn try_from(data: CavernData) -> Result<Self, Self::Error> {
        let graph = Graph::from_parts(
            data.nodes
                .into_iter()
                .map(|(id, x, y, gold)| (NodeId(id), Position::new(x, y), gold)),
            data.edges
                .into_iter()
                .map(|(a, b, weight)| (NodeId(a), NodeId(b), weight)),
        )?;
        for id in [data.start, data.orb, data.exit] {
            graph.require(NodeId(id))?;
        }
        Ok(Self {
            graph,
            start: NodeId(data.start),
            orb: NodeId(data.orb),
            exit: NodeId(data.exit),
            steps: data.steps,
        })
    }
}

/// Loader for cavern layouts.
pub struct CavernLoader;

impl CavernLoader {
    /// Load a cavern from a `.ron` or `.json` file.
    ///
    /// The format is picked from the extension; anything other than `json`
    /// is parsed as RON.
    pub fn load(path: &Path) -> LoadResult<CavernLayout> {
        let content = read_file(path)?;
        let is_json = path
            .extension()
            .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));

        let data: CavernData = if is_json {
            serde_json::from_str(&content)
                .map_err(|e| anyhow::anyhow!("Failed to parse cavern JSON: {}", e))?
        } else {
            ron::from_str(&content)
                .map_err(|e| anyhow::anyhow!("Failed to parse cavern RON: {}", e))?
        };

        CavernLayout::try_from(data)
            .with_context(|| format!("Invalid cavern layout in {}", path.display()))
    }
}
