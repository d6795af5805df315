//! Match snapshot: the complete read-only state handed to renderers and UI.

use serde::{Deserialize, Serialize};

use crate::enums::*;
use crate::events::MatchEvent;
use crate::types::{FactionId, Position, SimTime, StructureId};

/// Complete match state published after each tick.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MatchSnapshot {
    /// Incremented on every reset.
    pub version: u64,
    pub time: SimTime,
    pub phase: MatchPhase,
    pub mode: GameMode,
    /// Seconds remaining in the current phase.
    pub timer: f64,
    pub structures: Vec<StructureView>,
    pub factions: Vec<FactionView>,
    pub stats: StatsView,
    /// Set once the match reaches FINISH.
    pub outcome: Option<MatchOutcome>,
    /// Events produced since the previous snapshot.
    pub events: Vec<MatchEvent>,
}

/// One structure as seen by a renderer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StructureView {
    pub id: StructureId,
    /// Renderer-side handle.
    pub label: String,
    pub position: Position,
    /// Baseline height, for restoring visuals on reset.
    pub height: f64,
    pub heat: f64,
    pub ignited: bool,
    pub ignited_by: Option<FactionId>,
    pub fortified: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FactionView {
    pub id: FactionId,
    pub role: FactionRole,
    /// Only the asymmetric defense carries a budget.
    pub budget: Option<f64>,
    pub income_rate: f64,
    pub cooldown: f64,
    pub max_cooldown: f64,
    pub burnt_count: u32,
    pub burnt_percentage: f64,
}

/// City-wide aggregates.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct StatsView {
    pub total_buildings: u32,
    pub burnt_buildings: u32,
    pub damage_percent: f64,
}
