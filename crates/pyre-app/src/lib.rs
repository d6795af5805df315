//! PYRE headless host.
//!
//! Runs a match engine on its own thread at a fixed cadence and exposes
//! it to callers through a command channel and a polled snapshot.

pub mod bots;
pub mod error;
pub mod game_loop;
pub mod host;
pub mod state;

pub use pyre_core as core;
