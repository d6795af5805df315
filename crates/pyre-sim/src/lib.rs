//! Simulation engine for PYRE.
//!
//! Owns the hecs ECS world of city structures, runs the thermal, economy
//! and score systems each tick, validates player actions, and produces
//! MatchSnapshots for renderers and hosts. Also provides the score board
//! and result exchange used by networked competitive matches.

pub mod actions;
pub mod engine;
pub mod exchange;
pub mod registry;
pub mod scoreboard;
pub mod spatial;
pub mod systems;

pub use engine::MatchEngine;
pub use pyre_core as core;

#[cfg(test)]
mod tests;
