//! Snapshot system: reads the registry and builds a complete MatchSnapshot.
//!
//! This system is read-only; it never modifies the world.

use pyre_core::enums::{GameMode, MatchOutcome, MatchPhase};
use pyre_core::events::MatchEvent;
use pyre_core::state::{MatchSnapshot, StatsView, StructureView};
use pyre_core::types::SimTime;

use crate::registry::StructureRegistry;

use super::economy::FactionState;

/// Everything the snapshot needs besides the registry.
pub struct SnapshotInputs<'a> {
    pub version: u64,
    pub time: SimTime,
    pub phase: MatchPhase,
    pub mode: GameMode,
    pub timer: f64,
    pub factions: &'a [FactionState],
    pub stats: StatsView,
    pub outcome: Option<&'a MatchOutcome>,
}

/// Build a complete MatchSnapshot from the current registry state.
pub fn build_snapshot(
    registry: &StructureRegistry,
    inputs: SnapshotInputs<'_>,
    events: Vec<MatchEvent>,
) -> MatchSnapshot {
    MatchSnapshot {
        version: inputs.version,
        time: inputs.time,
        phase: inputs.phase,
        mode: inputs.mode,
        timer: inputs.timer,
        structures: build_structures(registry),
        factions: inputs.factions.iter().map(FactionState::view).collect(),
        stats: inputs.stats,
        outcome: inputs.outcome.cloned(),
        events,
    }
}

/// Structure views in id order.
fn build_structures(registry: &StructureRegistry) -> Vec<StructureView> {
    registry.ids().filter_map(|id| registry.view(id)).collect()
}
