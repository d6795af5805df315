//! ECS components for hecs entities.
//!
//! Components are plain data structs with no methods.
//! Game logic lives in systems, not components.

use serde::{Deserialize, Serialize};

use crate::types::{FactionId, StructureId};

/// Identity of a structure. Attached to every structure entity.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Structure {
    pub id: StructureId,
    /// Renderer-side handle; the simulation never interprets it.
    pub label: String,
}

/// Immutable values a structure is restored to on reset.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Baseline {
    pub height: f64,
}

/// Thermal state of a structure.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Thermal {
    /// Accumulated heat, in [0, threshold].
    pub heat: f64,
    /// Monotonic within a match.
    pub ignited: bool,
    /// Faction credited for the ignition. Set iff `ignited`.
    pub ignited_by: Option<FactionId>,
    /// First faction whose fire heated this structure since it was last cold.
    /// Committed to `ignited_by` when the structure ignites.
    pub heat_source: Option<FactionId>,
}

/// Defensive wall state.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Fortification {
    pub fortified: bool,
}
