//! Enumeration types used throughout the simulation.

use serde::{Deserialize, Serialize};

use crate::types::FactionId;

/// Match phase (top-level state).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum MatchPhase {
    /// Preparation: defense may act, offense may not, no fire simulation.
    #[default]
    Setup,
    /// Fire simulation, economy and all actions are live.
    Battle,
    /// Terminal until the next reset.
    Finish,
}

/// Which configuration profile the engine runs.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameMode {
    /// Defense (budget, walls, extinguish) versus offense (cooldown ignite).
    Asymmetric,
    /// 2-4 factions, each with only a cooldown-gated ignite.
    #[default]
    Competitive,
}

/// What a faction is allowed to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FactionRole {
    Defense,
    Offense,
    Competitor,
}

impl FactionRole {
    /// Whether this role may perform the action kind at all.
    pub fn permits(&self, kind: ActionKind) -> bool {
        match self {
            FactionRole::Defense => matches!(kind, ActionKind::Extinguish | ActionKind::Fortify),
            FactionRole::Offense | FactionRole::Competitor => kind == ActionKind::Ignite,
        }
    }

    /// Whether this role may act during the given phase.
    pub fn active_in(&self, phase: MatchPhase) -> bool {
        match self {
            FactionRole::Defense => matches!(phase, MatchPhase::Setup | MatchPhase::Battle),
            FactionRole::Offense | FactionRole::Competitor => phase == MatchPhase::Battle,
        }
    }
}

/// Player action kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ActionKind {
    Ignite,
    Extinguish,
    Fortify,
}

/// Final result of a match.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "factions")]
pub enum MatchOutcome {
    /// A single faction won outright.
    Victory(FactionId),
    /// Several factions tied at the highest non-zero score.
    Draw(Vec<FactionId>),
    /// Nobody scored (or there was nothing to score).
    NoWinner,
}

impl MatchOutcome {
    /// All factions credited with the result, in slot order.
    pub fn winners(&self) -> &[FactionId] {
        match self {
            MatchOutcome::Victory(faction) => std::slice::from_ref(faction),
            MatchOutcome::Draw(factions) => factions,
            MatchOutcome::NoWinner => &[],
        }
    }

    pub fn is_winner(&self, faction: FactionId) -> bool {
        self.winners().contains(&faction)
    }
}
