//! Events emitted by the simulation for audio and UI feedback.

use serde::{Deserialize, Serialize};

use crate::commands::PlayerAction;
use crate::enums::{MatchOutcome, MatchPhase};
use crate::error::ActionError;
use crate::types::{FactionId, StructureId};

/// Something that happened during a tick (or between ticks, for direct actions).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum MatchEvent {
    /// A new match started.
    MatchReset { version: u64, total_buildings: usize },
    /// Phase boundary crossed.
    PhaseChanged { from: MatchPhase, to: MatchPhase },
    /// A structure caught fire.
    StructureIgnited {
        id: StructureId,
        by: Option<FactionId>,
        /// True if heat spread from a neighbour, false for a direct ignite.
        propagated: bool,
    },
    /// An action passed validation and was applied.
    ActionApplied { action: PlayerAction },
    /// An action was rejected; state is unchanged.
    ActionRejected {
        action: PlayerAction,
        reason: ActionError,
    },
    /// The match ended. Emitted exactly once per match.
    MatchFinished { outcome: MatchOutcome },
}
