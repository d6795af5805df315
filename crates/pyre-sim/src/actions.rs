//! Action validator: checks a player action against the current match state
//! and applies it atomically.
//!
//! Every rule is checked before anything is mutated, so a rejected action
//! leaves structure and faction state exactly as it found them.

use pyre_core::commands::PlayerAction;
use pyre_core::config::MatchConfig;
use pyre_core::enums::{ActionKind, MatchPhase};
use pyre_core::error::ActionError;

use crate::registry::StructureRegistry;
use crate::systems::economy::FactionState;

/// Validate and apply `action`.
///
/// Generic checks run first (faction, role, phase, target), then the
/// kind-specific rules in the order the rejection codes are documented.
pub fn execute(
    registry: &mut StructureRegistry,
    factions: &mut [FactionState],
    phase: MatchPhase,
    config: &MatchConfig,
    action: &PlayerAction,
) -> Result<(), ActionError> {
    let faction = factions
        .iter_mut()
        .find(|f| f.id == action.faction)
        .ok_or(ActionError::UnknownFaction)?;
    if !faction.role.permits(action.kind) {
        return Err(ActionError::ActionUnavailable);
    }
    if !faction.role.active_in(phase) {
        return Err(ActionError::InvalidPhase);
    }
    let (thermal, fortification) = registry
        .state_mut(action.target)
        .ok_or(ActionError::StructureNotFound)?;

    match action.kind {
        ActionKind::Ignite => {
            if thermal.ignited {
                return Err(ActionError::AlreadyIgnited);
            }
            if fortification.fortified {
                return Err(ActionError::Fortified);
            }
            if faction.cooldown > 0.0 {
                return Err(ActionError::OnCooldown);
            }

            thermal.heat = config.thermal.threshold;
            thermal.ignited = true;
            thermal.ignited_by = Some(faction.id);
            thermal.heat_source = Some(faction.id);
            fortification.fortified = false;
            faction.cooldown = faction.max_cooldown;
        }
        ActionKind::Extinguish => {
            if thermal.ignited {
                return Err(ActionError::AlreadyIgnited);
            }
            if thermal.heat <= 0.0 {
                return Err(ActionError::NothingToExtinguish);
            }
            spend(faction, config.economy.extinguish_cost)?;

            thermal.heat = 0.0;
            thermal.heat_source = None;
            fortification.fortified = false;
        }
        ActionKind::Fortify => {
            if thermal.ignited {
                return Err(ActionError::AlreadyIgnited);
            }
            if fortification.fortified {
                return Err(ActionError::AlreadyFortified);
            }
            if thermal.heat > 0.0 {
                return Err(ActionError::HeatPresent);
            }
            spend(faction, config.economy.wall_cost)?;

            fortification.fortified = true;
        }
    }

    Ok(())
}

/// Deduct `cost` from the faction budget, or reject without touching it.
fn spend(faction: &mut FactionState, cost: f64) -> Result<(), ActionError> {
    match faction.budget.as_mut() {
        Some(budget) if *budget >= cost => {
            *budget -= cost;
            Ok(())
        }
        _ => Err(ActionError::InsufficientFunds),
    }
}
