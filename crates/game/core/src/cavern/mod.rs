//! Reference cavern that validates and applies the agent's moves.
//!
//! [`Cavern`] plays the game's side of both phases: it reveals the local
//! neighborhood with an obstacle-blind heuristic while the agent looks for
//! the orb, then exposes the whole graph and charges edge weights against
//! the collapse timer while the agent flees. Every move goes through the same
//! validation; a rejected move leaves the cavern untouched.
mod movement;

use std::collections::HashSet;

pub use movement::MoveError;

use movement::Step;

use crate::graph::{Graph, GraphError, NodeId, Position};
use crate::traits::{FindState, FleeState, NeighborStatus};

/// Which half of the round the cavern is in.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display, strum::AsRefStr)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case")]
pub enum Phase {
    /// Searching for the orb with local information only.
    Find,
    /// Escaping to the exit on a step budget.
    Flee,
}

#[derive(Clone, Debug)]
pub struct Cavern {
    graph: Graph,
    orb: NodeId,
    exit: NodeId,
    position: NodeId,
    phase: Phase,
    /// Collapse timer. Only charged during [`Phase::Flee`].
    steps_left: u64,
    blocked: HashSet<NodeId>,
    /// Destinations of confirmed moves, in order.
    history: Vec<NodeId>,
    /// Destinations of rejected moves, in order.
    rejected: Vec<NodeId>,
    steps_taken: u64,
    gold_collected: u64,
}

impl Cavern {
    /// Places the agent on `start` at the beginning of the find phase.
    pub fn new(graph: Graph, start: NodeId, orb: NodeId, exit: NodeId) -> Result<Self, GraphError> {
        for id in [start, orb, exit] {
            graph.require(id)?;
        }
        Ok(Self {
            graph,
            orb,
            exit,
            position: start,
            phase: Phase::Find,
            steps_left: 0,
            blocked: HashSet::new(),
            history: Vec::new(),
            rejected: Vec::new(),
            steps_taken: 0,
            gold_collected: 0,
        })
    }

    /// Marks `id` as refusing entry. It still shows up as a neighbor.
    pub fn block(&mut self, id: NodeId) -> Result<(), GraphError> {
        self.graph.require(id)?;
        self.blocked.insert(id);
        Ok(())
    }

    /// Starts the collapse timer. Gold under the agent is picked up at once.
    pub fn begin_flee(&mut self, steps: u64) {
        self.phase = Phase::Flee;
        self.steps_left = steps;
        self.collect_gold();
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn current_node(&self) -> NodeId {
        self.position
    }

    pub fn orb(&self) -> NodeId {
        self.orb
    }

    pub fn exit(&self) -> NodeId {
        self.exit
    }

    pub fn graph(&self) -> &Graph {
        &self.graph
    }

    pub fn steps_left(&self) -> u64 {
        self.steps_left
    }

    pub fn steps_taken(&self) -> u64 {
        self.steps_taken
    }

    pub fn gold_collected(&self) -> u64 {
        self.gold_collected
    }

    pub fn history(&self) -> &[NodeId] {
        &self.history
    }

    pub fn rejected(&self) -> &[NodeId] {
        &self.rejected
    }

    pub fn is_on_orb(&self) -> bool {
        self.position == self.orb
    }

    pub fn is_on_exit(&self) -> bool {
        self.position == self.exit
    }

    /// Obstacle-blind distance from `id` to the orb.
    ///
    /// Positions may repeat in hand-built graphs, so only the orb itself
    /// reports zero.
    pub fn heuristic(&self, id: NodeId) -> u32 {
        if id == self.orb {
            return 0;
        }
        let here = self.position_of(id);
        let orb = self.position_of(self.orb);
        here.manhattan(orb).max(1)
    }

    /// Validates and applies a move to an adjacent node.
    pub fn move_to(&mut self, id: NodeId) -> Result<(), MoveError> {
        let budget = match self.phase {
            Phase::Find => None,
            Phase::Flee => Some(self.steps_left),
        };
        let step = Step::new(self.position, id);
        let cost = match step.validate(&self.graph, |node| self.blocked.contains(&node), budget) {
            Ok(cost) => cost,
            Err(error) => {
                self.rejected.push(id);
                return Err(error);
            }
        };

        self.position = id;
        self.history.push(id);
        self.steps_taken += u64::from(cost);
        if self.phase == Phase::Flee {
            self.steps_left -= u64::from(cost);
            self.collect_gold();
        }
        Ok(())
    }

    fn collect_gold(&mut self) {
        self.gold_collected += u64::from(self.graph.take_gold(self.position));
    }

    fn position_of(&self, id: NodeId) -> Position {
        self.graph.node(id).map_or(Position::ORIGIN, |node| node.position())
    }
}

impl FindState for Cavern {
    fn current_node(&self) -> NodeId {
        self.position
    }

    fn neighbors(&self) -> Vec<NeighborStatus> {
        self.graph
            .node(self.position)
            .map(|node| {
                node.neighbors()
                    .map(|id| NeighborStatus::new(id, self.heuristic(id)))
                    .collect()
            })
            .unwrap_or_default()
    }

    fn distance_to_target(&self) -> u32 {
        self.heuristic(self.position)
    }

    fn move_to(&mut self, id: NodeId) -> Result<(), MoveError> {
        Cavern::move_to(self, id)
    }
}

impl FleeState for Cavern {
    fn current_node(&self) -> NodeId {
        self.position
    }

    fn graph(&self) -> &Graph {
        &self.graph
    }

    fn exit(&self) -> NodeId {
        self.exit
    }

    fn steps_left(&self) -> u64 {
        self.steps_left
    }

    fn move_to(&mut self, id: NodeId) -> Result<(), MoveError> {
        Cavern::move_to(self, id)
    }
}
