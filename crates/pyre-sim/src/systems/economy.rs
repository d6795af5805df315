//! Faction economy: defense income, ignite cooldowns and the difficulty ramp.
//!
//! Runs only during BATTLE. Budgets stay untouched during SETUP so the
//! defense spends exactly its starting budget on early walls.

use pyre_core::config::EconomyConfig;
use pyre_core::constants::{COOLDOWN_FLOOR, COOLDOWN_RAMP, INCOME_RAMP};
use pyre_core::enums::FactionRole;
use pyre_core::state::FactionView;
use pyre_core::types::FactionId;

/// Per-faction resources. Burnt aggregates are derived by the score system.
#[derive(Debug, Clone, PartialEq)]
pub struct FactionState {
    pub id: FactionId,
    pub role: FactionRole,
    /// Only the defense carries a budget.
    pub budget: Option<f64>,
    pub income_rate: f64,
    /// Seconds until the faction may ignite again.
    pub cooldown: f64,
    /// Cooldown applied after each ignite (shrinks under the ramp).
    pub max_cooldown: f64,
    pub burnt_count: u32,
    pub burnt_percentage: f64,
}

impl FactionState {
    pub fn new(id: FactionId, role: FactionRole, economy: &EconomyConfig) -> Self {
        let defense = role == FactionRole::Defense;
        Self {
            id,
            role,
            budget: defense.then_some(economy.initial_budget),
            income_rate: if defense { economy.income_base } else { 0.0 },
            cooldown: 0.0,
            max_cooldown: economy.ignite_cooldown_secs,
            burnt_count: 0,
            burnt_percentage: 0.0,
        }
    }

    pub fn view(&self) -> FactionView {
        FactionView {
            id: self.id,
            role: self.role,
            budget: self.budget,
            income_rate: self.income_rate,
            cooldown: self.cooldown,
            max_cooldown: self.max_cooldown,
            burnt_count: self.burnt_count,
            burnt_percentage: self.burnt_percentage,
        }
    }
}

/// Advance income and cooldowns by `dt`. `progress` is battle progress in [0, 1].
pub fn run(factions: &mut [FactionState], economy: &EconomyConfig, progress: f64, dt: f64) {
    for faction in factions.iter_mut() {
        if economy.difficulty_ramp {
            apply_ramp(faction, economy, progress);
        }

        if let Some(budget) = faction.budget.as_mut() {
            *budget += faction.income_rate * dt;
        }

        faction.cooldown = (faction.cooldown - dt).max(0.0);
    }
}

/// Richer defense and faster ignites as the battle wears on.
fn apply_ramp(faction: &mut FactionState, economy: &EconomyConfig, progress: f64) {
    match faction.role {
        FactionRole::Defense => {
            faction.income_rate = economy.income_base + progress * INCOME_RAMP;
        }
        FactionRole::Offense | FactionRole::Competitor => {
            let floor = COOLDOWN_FLOOR.min(economy.ignite_cooldown_secs);
            faction.max_cooldown =
                (economy.ignite_cooldown_secs - progress * COOLDOWN_RAMP).max(floor);
        }
    }
}
