//! Player actions and host commands sent into the simulation.
//!
//! Actions are validated and applied synchronously, or queued for
//! processing at the next tick boundary.

use serde::{Deserialize, Serialize};

use crate::config::MatchConfig;
use crate::enums::ActionKind;
use crate::types::{FactionId, StructureId};

/// A single player action against one structure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerAction {
    pub kind: ActionKind,
    pub target: StructureId,
    pub faction: FactionId,
}

impl PlayerAction {
    pub fn ignite(target: StructureId, faction: FactionId) -> Self {
        Self {
            kind: ActionKind::Ignite,
            target,
            faction,
        }
    }

    pub fn extinguish(target: StructureId, faction: FactionId) -> Self {
        Self {
            kind: ActionKind::Extinguish,
            target,
            faction,
        }
    }

    pub fn fortify(target: StructureId, faction: FactionId) -> Self {
        Self {
            kind: ActionKind::Fortify,
            target,
            faction,
        }
    }
}

/// Everything a host can ask of a running match.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum MatchCommand {
    /// Queue a player action for the next tick boundary. `version` is the
    /// match version the client last saw; the action is dropped if the
    /// match has been reset since.
    Act { version: u64, action: PlayerAction },
    /// Start a fresh match ("play again") with the given configuration.
    Reset(Box<MatchConfig>),
}
