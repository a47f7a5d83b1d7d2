//! Interfaces the agent uses to observe and move through a cavern.
//!
//! The game (or the [`Cavern`](crate::Cavern) simulator) implements these.
//! Each `move_to` is synchronous: when it returns `Ok`, the move has been
//! applied and the next observation reflects the new position.

use crate::cavern::MoveError;
use crate::graph::{Graph, NodeId};

/// What the agent learns about one neighbor while searching for the orb.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct NeighborStatus {
    pub id: NodeId,
    /// Estimated distance from this neighbor to the orb, ignoring walls.
    /// May be inexact; zero only on the orb itself.
    pub distance_to_target: u32,
}

impl NeighborStatus {
    pub fn new(id: NodeId, distance_to_target: u32) -> Self {
        Self {
            id,
            distance_to_target,
        }
    }
}

/// Partial, local view available while looking for the orb.
pub trait FindState {
    fn current_node(&self) -> NodeId;

    /// Open neighbors of the current node, in the order the cavern lists them.
    fn neighbors(&self) -> Vec<NeighborStatus>;

    /// Heuristic distance from the current node to the orb. Zero means the
    /// agent is standing on it.
    fn distance_to_target(&self) -> u32;

    fn move_to(&mut self, id: NodeId) -> Result<(), MoveError>;
}

/// Full view available while escaping.
pub trait FleeState {
    fn current_node(&self) -> NodeId;

    /// The whole cavern, including the gold still lying on each tile.
    fn graph(&self) -> &Graph;

    fn exit(&self) -> NodeId;

    /// Steps remaining before the cavern collapses.
    fn steps_left(&self) -> u64;

    fn move_to(&mut self, id: NodeId) -> Result<(), MoveError>;
}
