//! Decision logic for a round in the cavern.
//!
//! An [`Agent`] first searches for the orb with nothing but local distance
//! hints ([`explore`]), then escapes to the exit before the collapse timer
//! runs out, picking up gold on the way when the steps allow it ([`flee`]).
//!
//! Modules are organized by responsibility:
//! - [`ranker`] orders visible neighbors by heuristic distance
//! - [`explore`] runs the depth-first orb search with explicit backtracking
//! - [`flee`] plans greedy detours on top of the shortest-path oracle
//! - [`error`] is the error taxonomy shared by both phases
//!
//! The cavern itself is reached only through [`cavern_core::FindState`] and
//! [`cavern_core::FleeState`].
mod agent;
pub mod error;
pub mod explore;
pub mod flee;
pub mod ranker;

pub use agent::Agent;
pub use error::{AgentError, Result};
pub use explore::ExploreReport;
pub use flee::FleeReport;
