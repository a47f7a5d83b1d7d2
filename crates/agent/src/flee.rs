//! Greedy gold collection under a collapse timer.
//!
//! The planner keeps one shortest-path tree rooted at the exit for the whole
//! flee. The cavern is undirected and static within a round, so that tree
//! answers "how far is the exit from here" for every node. Before each hop it
//! checks that the steps left after the hop still cover the exit distance
//! from where the hop lands (plus the configured reserve). A hop that would
//! break this is never issued; the detour is abandoned and the agent heads
//! out.

use std::collections::HashSet;

use cavern_core::{AgentConfig, FleeState, Graph, NodeId, Path, Phase, ShortestPathTree};

use crate::error::{AgentError, Result};

/// Summary of a successful escape.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FleeReport {
    /// Moves issued, in order. The last one lands on the exit.
    pub moves: Vec<NodeId>,
    /// Gold-bearing nodes deliberately walked to.
    pub rewards_reached: usize,
    /// Detours dropped because the next hop would eat into the way out.
    pub detours_abandoned: usize,
    /// Steps remaining on the exit.
    pub steps_left: u64,
}

pub(crate) struct FleePlanner<'a> {
    config: &'a AgentConfig,
    /// Nodes stood on during this flee. Arrival consumes gold, so these are
    /// never selected again even if the cavern still reports gold there.
    consumed: HashSet<NodeId>,
    report: FleeReport,
}

impl<'a> FleePlanner<'a> {
    pub fn new(config: &'a AgentConfig) -> Self {
        Self {
            config,
            consumed: HashSet::new(),
            report: FleeReport::default(),
        }
    }

    pub fn run<S: FleeState + ?Sized>(mut self, state: &mut S) -> Result<FleeReport> {
        let exit = state.exit();
        let home = ShortestPathTree::build(state.graph(), exit)?;
        self.consumed.insert(state.current_node());

        if self.config.collect_rewards {
            self.collect(state, &home)?;
        }
        self.leave(state, &home)?;

        self.report.steps_left = state.steps_left();
        Ok(self.report)
    }

    /// Detours toward the nearest remaining gold until none is left or the
    /// next hop would cut into the way out.
    fn collect<S>(&mut self, state: &mut S, home: &ShortestPathTree) -> Result<()>
    where
        S: FleeState + ?Sized,
    {
        let reserve = self.config.reserve;
        loop {
            let here = state.current_node();
            let out = exit_distance(home, here)?;
            if state.steps_left() < out.saturating_add(reserve) {
                tracing::debug!(
                    "{} steps left at {}, exit is {} away: no slack for gold",
                    state.steps_left(),
                    here,
                    out
                );
                return Ok(());
            }

            let Some(detour) = self.nearest_reward(state.graph(), here)? else {
                tracing::debug!("no gold left to chase from {}", here);
                return Ok(());
            };
            let Some(target) = detour.end().filter(|&target| target != here) else {
                return Ok(());
            };
            tracing::debug!(
                "heading for gold at {} ({} away, {} hops)",
                target,
                detour.cost(),
                detour.hop_count()
            );

            for (from, to) in detour.hops() {
                let cost = hop_cost(state.graph(), from, to)?;
                let after = exit_distance(home, to)?;
                let needed = cost.saturating_add(after).saturating_add(reserve);
                if state.steps_left() < needed {
                    tracing::info!(
                        "abandoning detour to {} at {}: hop to {} needs {} of {} steps",
                        target,
                        from,
                        to,
                        needed,
                        state.steps_left()
                    );
                    self.report.detours_abandoned += 1;
                    return Ok(());
                }
                self.step(state, from, to)?;
            }
            self.report.rewards_reached += 1;
        }
    }

    /// Walks the shortest path from wherever the agent stands to the exit.
    fn leave<S>(&mut self, state: &mut S, home: &ShortestPathTree) -> Result<()>
    where
        S: FleeState + ?Sized,
    {
        let here = state.current_node();
        let way_out = home
            .path_to(here)
            .map(Path::reversed)
            .ok_or(AgentError::Unreachable {
                phase: Phase::Flee,
                from: here,
            })?;

        if state.steps_left() < way_out.cost() {
            tracing::error!(
                "cannot leave from {}: exit is {} away, {} steps left",
                here,
                way_out.cost(),
                state.steps_left()
            );
            return Err(AgentError::BudgetExceeded {
                at: here,
                steps_left: state.steps_left(),
                required: way_out.cost(),
            });
        }

        tracing::debug!("leaving from {} in {} hops", here, way_out.hop_count());
        for (from, to) in way_out.hops() {
            self.step(state, from, to)?;
        }
        Ok(())
    }

    /// Shortest path to the closest node still holding unconsumed gold.
    /// Equidistant candidates resolve to the lowest node id.
    fn nearest_reward(&self, graph: &Graph, here: NodeId) -> Result<Option<Path>> {
        let from_here = ShortestPathTree::build(graph, here)?;
        let nearest = graph
            .reward_nodes()
            .filter(|id| !self.consumed.contains(id))
            .filter_map(|id| from_here.distance_to(id).map(|cost| (cost, id)))
            .min();
        Ok(nearest.and_then(|(_, id)| from_here.path_to(id)))
    }

    fn step<S>(&mut self, state: &mut S, from: NodeId, to: NodeId) -> Result<()>
    where
        S: FleeState + ?Sized,
    {
        state
            .move_to(to)
            .map_err(|source| AgentError::MoveRejected { from, to, source })?;
        debug_assert_eq!(state.current_node(), to);
        self.consumed.insert(to);
        self.report.moves.push(to);
        Ok(())
    }
}

fn exit_distance(home: &ShortestPathTree, node: NodeId) -> Result<u64> {
    home.distance_to(node).ok_or(AgentError::Unreachable {
        phase: Phase::Flee,
        from: node,
    })
}

fn hop_cost(graph: &Graph, from: NodeId, to: NodeId) -> Result<u64> {
    graph
        .weight(from, to)
        .map(u64::from)
        .ok_or(AgentError::Unreachable {
            phase: Phase::Flee,
            from,
        })
}
