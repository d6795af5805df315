//! Systems that advance the match each tick.
//!
//! Systems are free functions over the registry world and the engine's
//! plain-data state. They do not own state of their own.

pub mod economy;
pub mod phase;
pub mod score;
pub mod snapshot;
pub mod thermal;
