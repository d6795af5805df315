//! Error types: action validation outcomes, configuration and exchange failures.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::enums::GameMode;

/// Why an action was rejected. State is left unchanged in every case.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error, Serialize, Deserialize)]
pub enum ActionError {
    #[error("action not allowed in the current phase")]
    InvalidPhase,
    #[error("structure is already ignited")]
    AlreadyIgnited,
    #[error("structure is fortified")]
    Fortified,
    #[error("faction action is on cooldown")]
    OnCooldown,
    #[error("insufficient budget")]
    InsufficientFunds,
    #[error("structure has no heat to extinguish")]
    NothingToExtinguish,
    #[error("structure is already fortified")]
    AlreadyFortified,
    #[error("structure not found")]
    StructureNotFound,
    #[error("structure is heated; extinguish it first")]
    HeatPresent,
    #[error("faction is not part of this match")]
    UnknownFaction,
    #[error("action is not available to this faction")]
    ActionUnavailable,
    #[error("action was queued against a match that has since been reset")]
    StaleMatch,
}

/// A configuration rejected at reset time.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("{mode:?} mode does not support {count} factions")]
    FactionCount { mode: GameMode, count: u8 },
    #[error("{field} must be finite and non-negative, got {value}")]
    Negative { field: &'static str, value: f64 },
    #[error("{field} must be finite and positive, got {value}")]
    NonPositive { field: &'static str, value: f64 },
    #[error("{field} must be finite, got {value}")]
    NotFinite { field: &'static str, value: f64 },
    #[error("{field} must lie in [{min}, {max}], got {value}")]
    OutOfRange {
        field: &'static str,
        value: f64,
        min: f64,
        max: f64,
    },
    #[error("imported structure {label:?} has a non-finite position or height")]
    InvalidDescriptor { label: String },
}

/// Failure while exchanging score records through a key-value store.
#[derive(Debug, Error)]
pub enum ExchangeError {
    #[error("failed to encode score record: {0}")]
    Encode(#[from] serde_json::Error),
    #[error("malformed score record under {key}: {source}")]
    Malformed {
        key: String,
        #[source]
        source: serde_json::Error,
    },
}
