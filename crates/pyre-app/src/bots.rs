//! Scripted opponents that drive a headless match.
//!
//! Bots only read snapshots and emit actions, exactly like a human client
//! would; they never touch the engine directly.

use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use pyre_core::commands::PlayerAction;
use pyre_core::config::EconomyConfig;
use pyre_core::enums::{FactionRole, MatchPhase};
use pyre_core::state::{FactionView, MatchSnapshot, StructureView};

/// Chance per decision that the defense builds a wall when nothing is burning.
const FORTIFY_CHANCE: f64 = 0.2;

pub struct BotDriver {
    rng: ChaCha8Rng,
}

impl BotDriver {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }

    /// Actions every faction wants to take given the latest snapshot.
    pub fn plan(&mut self, snapshot: &MatchSnapshot, economy: &EconomyConfig) -> Vec<PlayerAction> {
        if snapshot.phase == MatchPhase::Finish {
            return Vec::new();
        }

        let mut actions = Vec::new();
        for faction in &snapshot.factions {
            if !faction.role.active_in(snapshot.phase) {
                continue;
            }
            let action = match faction.role {
                FactionRole::Defense => self.defend(faction, &snapshot.structures, economy),
                FactionRole::Offense | FactionRole::Competitor => {
                    self.attack(faction, &snapshot.structures)
                }
            };
            actions.extend(action);
        }
        actions
    }

    /// Ignite a random standing structure once the cooldown allows.
    fn attack(&mut self, faction: &FactionView, structures: &[StructureView]) -> Option<PlayerAction> {
        if faction.cooldown > 0.0 {
            return None;
        }
        let targets: Vec<&StructureView> = structures
            .iter()
            .filter(|s| !s.ignited && !s.fortified)
            .collect();
        let target = targets.choose(&mut self.rng)?;
        Some(PlayerAction::ignite(target.id, faction.id))
    }

    /// Put out the hottest structure, or occasionally wall off a cold one.
    fn defend(
        &mut self,
        faction: &FactionView,
        structures: &[StructureView],
        economy: &EconomyConfig,
    ) -> Option<PlayerAction> {
        let budget = faction.budget?;

        if budget >= economy.extinguish_cost {
            let hottest = structures
                .iter()
                .filter(|s| !s.ignited && s.heat > 0.0)
                .max_by(|a, b| a.heat.total_cmp(&b.heat));
            if let Some(target) = hottest {
                return Some(PlayerAction::extinguish(target.id, faction.id));
            }
        }

        if budget >= economy.wall_cost && self.rng.gen_bool(FORTIFY_CHANCE) {
            let candidates: Vec<&StructureView> = structures
                .iter()
                .filter(|s| !s.ignited && !s.fortified && s.heat == 0.0)
                .collect();
            let target = candidates.choose(&mut self.rng)?;
            return Some(PlayerAction::fortify(target.id, faction.id));
        }

        None
    }
}
