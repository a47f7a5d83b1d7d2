use cavern_core::{CavernError, ErrorSeverity, GraphError, MoveError, NodeId, Phase};

/// Errors surfaced by [`Agent::explore`](crate::Agent::explore) and
/// [`Agent::flee`](crate::Agent::flee).
///
/// None of these are retried internally. When one is returned the agent's
/// logical position is the node of the last confirmed move.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum AgentError {
    /// The orb (find phase) or the exit (flee phase) cannot be reached.
    #[error("{phase} phase: goal unreachable from {from}")]
    Unreachable { phase: Phase, from: NodeId },

    /// The cavern refused a move the agent believed legal.
    #[error("move {from} -> {to} rejected: {source}")]
    MoveRejected {
        from: NodeId,
        to: NodeId,
        source: MoveError,
    },

    /// Remaining steps no longer cover the way out.
    #[error("budget exceeded at {at}: {steps_left} steps left, {required} required")]
    BudgetExceeded {
        at: NodeId,
        steps_left: u64,
        required: u64,
    },

    #[error(transparent)]
    Graph(#[from] GraphError),
}

impl CavernError for AgentError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            Self::Unreachable { .. } => ErrorSeverity::Fatal,
            Self::MoveRejected { .. } | Self::BudgetExceeded { .. } => ErrorSeverity::Internal,
            Self::Graph(error) => error.severity(),
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::Unreachable { .. } => "AGENT_UNREACHABLE",
            Self::MoveRejected { .. } => "AGENT_MOVE_REJECTED",
            Self::BudgetExceeded { .. } => "AGENT_BUDGET_EXCEEDED",
            Self::Graph(error) => error.error_code(),
        }
    }
}

pub type Result<T> = std::result::Result<T, AgentError>;
