use cavern_core::{AgentConfig, FindState, FleeState, Phase};

use crate::error::Result;
use crate::explore::{ExploreReport, Explorer};
use crate::flee::{FleePlanner, FleeReport};

/// Entry points for both halves of a round.
///
/// `Agent` holds no state between phases; each call starts fresh from what
/// the cavern reports.
#[derive(Clone, Debug, Default)]
pub struct Agent {
    config: AgentConfig,
}

impl Agent {
    pub fn new(config: AgentConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &AgentConfig {
        &self.config
    }

    /// Walks to the orb using only local observations.
    ///
    /// On success the agent stands on the orb. Starting on the orb issues no
    /// moves.
    pub fn explore<S: FindState + ?Sized>(&self, state: &mut S) -> Result<ExploreReport> {
        let start = state.current_node();
        tracing::info!("{} phase started at {}", Phase::Find, start);

        let report = Explorer::new().run(state).inspect_err(|error| {
            tracing::error!("{} phase failed: {}", Phase::Find, error);
        })?;

        tracing::info!(
            "orb reached at {} in {} moves ({} backtracks, {} nodes visited)",
            state.current_node(),
            report.moves.len(),
            report.backtracks,
            report.visited
        );
        Ok(report)
    }

    /// Escapes to the exit, detouring for gold while the steps allow it.
    ///
    /// On success the agent stands on the exit.
    pub fn flee<S: FleeState + ?Sized>(&self, state: &mut S) -> Result<FleeReport> {
        tracing::info!(
            "{} phase started at {}: exit {}, {} steps, {:?}",
            Phase::Flee,
            state.current_node(),
            state.exit(),
            state.steps_left(),
            self.config
        );

        let report = FleePlanner::new(&self.config).run(state).inspect_err(|error| {
            tracing::error!("{} phase failed: {}", Phase::Flee, error);
        })?;

        tracing::info!(
            "escaped in {} moves with {} steps to spare ({} rewards reached, {} detours abandoned)",
            report.moves.len(),
            report.steps_left,
            report.rewards_reached,
            report.detours_abandoned
        );
        Ok(report)
    }
}
