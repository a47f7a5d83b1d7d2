use crate::error::{CavernError, ErrorSeverity};
use crate::graph::{Graph, NodeId};

#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum MoveError {
    #[error("node {0} does not exist")]
    UnknownNode(NodeId),

    #[error("node {to} is not adjacent to {from}")]
    NotAdjacent { from: NodeId, to: NodeId },

    #[error("node {to} is blocked")]
    Blocked { to: NodeId },

    #[error("moving {from} -> {to} costs {cost} but only {steps_left} steps remain")]
    InsufficientSteps {
        from: NodeId,
        to: NodeId,
        cost: u32,
        steps_left: u64,
    },
}

impl CavernError for MoveError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            Self::Blocked { .. } => ErrorSeverity::Recoverable,
            Self::UnknownNode(_) | Self::NotAdjacent { .. } => ErrorSeverity::Validation,
            Self::InsufficientSteps { .. } => ErrorSeverity::Fatal,
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::UnknownNode(_) => "MOVE_UNKNOWN_NODE",
            Self::NotAdjacent { .. } => "MOVE_NOT_ADJACENT",
            Self::Blocked { .. } => "MOVE_BLOCKED",
            Self::InsufficientSteps { .. } => "MOVE_INSUFFICIENT_STEPS",
        }
    }
}

/// A single hop between adjacent nodes.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct Step {
    pub from: NodeId,
    pub to: NodeId,
}

impl Step {
    pub fn new(from: NodeId, to: NodeId) -> Self {
        Self { from, to }
    }

    /// Checks the hop against the static layout and returns its cost.
    ///
    /// `blocked` and `budget` describe the dynamic side: tiles the cavern
    /// currently refuses, and the steps left (`None` while unbounded).
    pub fn validate(
        &self,
        graph: &Graph,
        blocked: impl Fn(NodeId) -> bool,
        budget: Option<u64>,
    ) -> Result<u32, MoveError> {
        if !graph.contains(self.to) {
            return Err(MoveError::UnknownNode(self.to));
        }
        let cost = graph
            .weight(self.from, self.to)
            .ok_or(MoveError::NotAdjacent {
                from: self.from,
                to: self.to,
            })?;
        if blocked(self.to) {
            return Err(MoveError::Blocked { to: self.to });
        }
        if let Some(steps_left) = budget
            && steps_left < u64::from(cost)
        {
            return Err(MoveError::InsufficientSteps {
                from: self.from,
                to: self.to,
                cost,
                steps_left,
            });
        }
        Ok(cost)
    }
}
