//! Depth-first orb search over a cavern revealed one node at a time.
//!
//! The search keeps an explicit stack of frames instead of recursing, so its
//! depth is bounded by the heap rather than the call stack. Each frame holds
//! the node it was opened on and the ranked neighbors still to try from
//! there. Leaving a frame walks the agent back to the parent frame's node.
//!
//! The heuristic only decides the order in which neighbors are tried.
//! Termination follows from the visited set: every node is entered at most
//! once, so on a finite cavern the stack drains or the orb is found.

use std::collections::HashSet;

use cavern_core::{FindState, NodeId, Phase};

use crate::error::{AgentError, Result};
use crate::ranker;

/// Summary of a successful orb search.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ExploreReport {
    /// Forward and backtracking moves issued, in order.
    pub moves: Vec<NodeId>,
    /// Distinct nodes the agent stood on.
    pub visited: usize,
    /// Moves spent walking back out of dead ends.
    pub backtracks: usize,
    /// Forward moves the cavern refused.
    pub rejected: usize,
}

struct Frame {
    node: NodeId,
    candidates: std::vec::IntoIter<NodeId>,
}

pub(crate) struct Explorer {
    visited: HashSet<NodeId>,
    stack: Vec<Frame>,
    report: ExploreReport,
}

impl Explorer {
    pub fn new() -> Self {
        Self {
            visited: HashSet::new(),
            stack: Vec::new(),
            report: ExploreReport::default(),
        }
    }

    pub fn run<S: FindState + ?Sized>(mut self, state: &mut S) -> Result<ExploreReport> {
        let start = state.current_node();
        self.visit(state);
        if state.distance_to_target() == 0 {
            return Ok(self.finish());
        }

        while let Some(frame) = self.stack.last_mut() {
            let here = frame.node;
            let next = frame.candidates.find(|id| !self.visited.contains(id));

            let Some(next) = next else {
                self.stack.pop();
                if let Some(parent) = self.stack.last() {
                    let parent = parent.node;
                    tracing::debug!("dead end at {}, backing up to {}", here, parent);
                    self.step(state, here, parent)?;
                    self.report.backtracks += 1;
                }
                continue;
            };

            if let Err(source) = state.move_to(next) {
                // The frame has already moved past `next`, so this move is not
                // retried. The node itself stays open to other approaches.
                tracing::warn!("move {} -> {} rejected: {}", here, next, source);
                self.report.rejected += 1;
                continue;
            }
            self.record(state, next);
            self.visit(state);

            if state.distance_to_target() == 0 {
                return Ok(self.finish());
            }
        }

        tracing::warn!(
            "orb unreachable from {} after visiting {} nodes",
            start,
            self.visited.len()
        );
        Err(AgentError::Unreachable {
            phase: Phase::Find,
            from: start,
        })
    }

    /// Marks the current node visited and opens a frame for it.
    fn visit<S: FindState + ?Sized>(&mut self, state: &S) {
        let node = state.current_node();
        self.visited.insert(node);
        let candidates = ranker::rank_unvisited(state.neighbors(), &self.visited);
        tracing::debug!(
            "at {} (distance {}), candidates {:?}",
            node,
            state.distance_to_target(),
            candidates
        );
        self.stack.push(Frame {
            node,
            candidates: candidates.into_iter(),
        });
    }

    /// Moves back toward a parent frame. Failure here is fatal: the search
    /// can no longer reason about where the agent stands.
    fn step<S>(&mut self, state: &mut S, from: NodeId, to: NodeId) -> Result<()>
    where
        S: FindState + ?Sized,
    {
        state
            .move_to(to)
            .map_err(|source| AgentError::MoveRejected { from, to, source })?;
        self.record(state, to);
        Ok(())
    }

    fn record<S: FindState + ?Sized>(&mut self, state: &S, to: NodeId) {
        debug_assert_eq!(state.current_node(), to);
        self.report.moves.push(to);
    }

    fn finish(mut self) -> ExploreReport {
        self.report.visited = self.visited.len();
        self.report
    }
}
