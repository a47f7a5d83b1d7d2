//! Graph construction and lookup errors.

use super::NodeId;
use crate::error::{CavernError, ErrorSeverity};

/// Errors raised while building or querying a [`Graph`](super::Graph).
///
/// Construction rejects anything that would break the oracle's assumptions:
/// edges must join two distinct, known nodes exactly once and carry a
/// positive weight.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum GraphError {
    #[error("node {0} does not exist")]
    UnknownNode(NodeId),

    #[error("node {0} already exists")]
    DuplicateNode(NodeId),

    #[error("edge {a} - {b} already exists")]
    DuplicateEdge { a: NodeId, b: NodeId },

    #[error("edge {0} - {0} would be a self loop")]
    SelfLoop(NodeId),

    #[error("edge {a} - {b} must have a positive weight")]
    NonPositiveWeight { a: NodeId, b: NodeId },
}

impl CavernError for GraphError {
    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Validation
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::UnknownNode(_) => "GRAPH_UNKNOWN_NODE",
            Self::DuplicateNode(_) => "GRAPH_DUPLICATE_NODE",
            Self::DuplicateEdge { .. } => "GRAPH_DUPLICATE_EDGE",
            Self::SelfLoop(_) => "GRAPH_SELF_LOOP",
            Self::NonPositiveWeight { .. } => "GRAPH_NON_POSITIVE_WEIGHT",
        }
    }
}
