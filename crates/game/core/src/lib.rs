//! Deterministic cavern model shared by the agent and its tooling.
//!
//! `cavern-core` defines the weighted cavern graph, the shortest-path
//! [`oracle`], and the collaborator traits ([`FindState`], [`FleeState`])
//! through which an agent observes and moves. The [`Cavern`] simulator is a
//! reference implementation of both traits that validates every move.
//!
//! Nothing here logs or touches the filesystem; loaders live in
//! `cavern-content` and decision logic in `cavern-agent`.
pub mod cavern;
pub mod config;
pub mod error;
pub mod graph;
pub mod oracle;
pub mod traits;

pub use cavern::{Cavern, MoveError, Phase};
pub use config::AgentConfig;
pub use error::{CavernError, ErrorSeverity};
pub use graph::{Edge, Graph, GraphError, Node, NodeId, Position};
pub use oracle::{Path, ShortestPathTree, distance, shortest_path};
pub use traits::{FindState, FleeState, NeighborStatus};
