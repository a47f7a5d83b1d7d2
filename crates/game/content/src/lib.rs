//! Data-driven cavern definitions and loaders.
//!
//! Provides loaders for RON/JSON/TOML data files:
//! - Cavern layouts (nodes, weighted edges, gold, orb, exit, step budget)
//! - Agent configuration (TOML)
//!
//! Content is consumed by the simulator and the agent; nothing here decides
//! how to move.

#[cfg(feature = "loaders")]
pub mod loaders;

#[cfg(feature = "loaders")]
pub use loaders::{CavernLayout, CavernLoader, ConfigLoader, ContentFactory, LoadResult};
