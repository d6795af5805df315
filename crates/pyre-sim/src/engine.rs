//! Match engine: the core of the simulation.
//!
//! `MatchEngine` owns the structure registry, spatial index and faction
//! state, applies player actions at tick boundaries, runs the systems and
//! produces `MatchSnapshot`s. Completely headless, enabling deterministic
//! testing and several concurrent matches in one process.

use std::collections::VecDeque;

use hecs::Entity;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use tracing::{debug, info, warn};

use pyre_core::commands::{MatchCommand, PlayerAction};
use pyre_core::config::MatchConfig;
use pyre_core::enums::{ActionKind, GameMode, MatchOutcome, MatchPhase};
use pyre_core::error::{ActionError, ConfigError};
use pyre_core::events::MatchEvent;
use pyre_core::state::{MatchSnapshot, StatsView, StructureView};
use pyre_core::types::{FactionId, SimTime, StructureId};

use crate::actions;
use crate::registry::StructureRegistry;
use crate::scoreboard::ScoreRecord;
use crate::spatial::SpatialIndex;
use crate::systems;
use crate::systems::economy::FactionState;
use crate::systems::phase::{PhaseClock, PhaseTransition};
use crate::systems::snapshot::SnapshotInputs;
use crate::systems::thermal::PropagationClock;

/// An action waiting for the next tick, stamped with the match it targets.
#[derive(Debug, Clone, Copy, PartialEq)]
struct QueuedAction {
    version: u64,
    action: PlayerAction,
}

/// The match engine. Owns the ECS world and all match state.
pub struct MatchEngine {
    config: MatchConfig,
    /// Bumped on every reset; queued actions from older versions are dropped.
    version: u64,
    time: SimTime,
    clock: PhaseClock,
    registry: StructureRegistry,
    index: SpatialIndex<Entity>,
    factions: Vec<FactionState>,
    stats: StatsView,
    propagation: PropagationClock,
    outcome: Option<MatchOutcome>,
    action_queue: VecDeque<QueuedAction>,
    events: Vec<MatchEvent>,
    rng: ChaCha8Rng,
}

impl MatchEngine {
    /// Create an engine running a fresh match for `config`.
    pub fn new(config: MatchConfig) -> Result<Self, ConfigError> {
        config.validate()?;

        let mut engine = Self {
            clock: PhaseClock::new(&config.timing),
            rng: ChaCha8Rng::seed_from_u64(config.seed),
            index: SpatialIndex::new(config.thermal.effective_cell_size()),
            config,
            version: 0,
            time: SimTime::default(),
            registry: StructureRegistry::new(),
            factions: Vec::new(),
            stats: StatsView::default(),
            propagation: PropagationClock::default(),
            outcome: None,
            action_queue: VecDeque::new(),
            events: Vec::new(),
        };
        engine.start_match(true);
        Ok(engine)
    }

    /// Start a new match with `config` ("play again").
    ///
    /// An invalid config is rejected and the running match is left untouched.
    pub fn reset(&mut self, config: MatchConfig) -> Result<(), ConfigError> {
        if let Err(err) = config.validate() {
            warn!(%err, "rejected match configuration");
            return Err(err);
        }

        let rebuild_city = self.registry.is_empty()
            || config.city != self.config.city
            || config.seed != self.config.seed;
        self.config = config;
        self.version += 1;
        self.start_match(rebuild_city);
        Ok(())
    }

    /// Re-arm every piece of match state from `self.config`.
    fn start_match(&mut self, rebuild_city: bool) {
        self.rng = ChaCha8Rng::seed_from_u64(self.config.seed);
        if rebuild_city {
            self.registry.create_city(&self.config.city, &mut self.rng);
        } else {
            self.registry.reset_all();
        }
        self.index = SpatialIndex::build(
            self.registry.positions(),
            self.config.thermal.effective_cell_size(),
        );

        self.factions = self
            .config
            .factions()
            .filter_map(|id| {
                let role = self.config.role_of(id)?;
                Some(FactionState::new(id, role, &self.config.economy))
            })
            .collect();

        self.time = SimTime::default();
        self.clock = PhaseClock::new(&self.config.timing);
        self.propagation.reset();
        self.outcome = None;
        self.action_queue.clear();
        self.events.clear();
        self.refresh_stats();

        let total_buildings = self.registry.len();
        info!(
            version = self.version,
            mode = ?self.config.mode,
            factions = self.factions.len(),
            total_buildings,
            "match reset"
        );
        self.events.push(MatchEvent::MatchReset {
            version: self.version,
            total_buildings,
        });
    }

    /// Queue an action for the current match, applied at the next tick boundary.
    pub fn queue_action(&mut self, action: PlayerAction) {
        self.queue_action_for(self.version, action);
    }

    /// Queue an action that was issued against match `version`. If the match
    /// has been reset since, the action is dropped at the next tick.
    pub fn queue_action_for(&mut self, version: u64, action: PlayerAction) {
        self.action_queue.push_back(QueuedAction { version, action });
    }

    /// Handle a command from the host loop.
    pub fn handle_command(&mut self, command: MatchCommand) {
        match command {
            MatchCommand::Act { version, action } => self.queue_action_for(version, action),
            MatchCommand::Reset(config) => {
                // reset logs its own rejection
                let _ = self.reset(*config);
            }
        }
    }

    /// Validate and apply an action immediately.
    pub fn apply_action(&mut self, action: PlayerAction) -> Result<(), ActionError> {
        let result = actions::execute(
            &mut self.registry,
            &mut self.factions,
            self.clock.phase(),
            &self.config,
            &action,
        );

        match result {
            Ok(()) => {
                if action.kind == ActionKind::Ignite {
                    self.events.push(MatchEvent::StructureIgnited {
                        id: action.target,
                        by: Some(action.faction),
                        propagated: false,
                    });
                }
                self.events.push(MatchEvent::ActionApplied { action });
                self.refresh_stats();
            }
            Err(reason) => {
                debug!(?action, %reason, "action rejected");
                self.events
                    .push(MatchEvent::ActionRejected { action, reason });
            }
        }
        result
    }

    /// Advance the match by `dt` seconds of elapsed time and return the
    /// resulting snapshot. Negative or non-finite deltas count as zero.
    pub fn tick(&mut self, dt: f64) -> MatchSnapshot {
        let dt = if dt.is_finite() && dt > 0.0 { dt } else { 0.0 };

        self.process_actions();

        if self.clock.phase() != MatchPhase::Finish {
            self.time.advance(dt);
            match self.clock.advance(dt, &self.config.timing) {
                Some(transition) => self.on_transition(transition),
                None if self.clock.phase() == MatchPhase::Battle => self.run_systems(dt),
                None => {}
            }
        }

        let events = std::mem::take(&mut self.events);
        self.build_snapshot(events)
    }

    /// Current state without advancing time. Pending events are included
    /// but not consumed.
    pub fn snapshot(&self) -> MatchSnapshot {
        self.build_snapshot(self.events.clone())
    }

    /// This client's result, ready to publish through a result exchange.
    pub fn score_record(&self, faction: FactionId, timestamp_ms: u64) -> Option<ScoreRecord> {
        let state = self.faction(faction)?;
        Some(ScoreRecord {
            faction,
            percentage: state.burnt_percentage,
            count: state.burnt_count,
            total_buildings: self.stats.total_buildings,
            timestamp_ms,
        })
    }

    pub fn phase(&self) -> MatchPhase {
        self.clock.phase()
    }

    /// Seconds remaining in the current phase.
    pub fn timer(&self) -> f64 {
        self.clock.timer()
    }

    pub fn time(&self) -> SimTime {
        self.time
    }

    pub fn version(&self) -> u64 {
        self.version
    }

    pub fn config(&self) -> &MatchConfig {
        &self.config
    }

    /// Set once the match reaches FINISH.
    pub fn outcome(&self) -> Option<&MatchOutcome> {
        self.outcome.as_ref()
    }

    pub fn stats(&self) -> StatsView {
        self.stats
    }

    pub fn factions(&self) -> &[FactionState] {
        &self.factions
    }

    pub fn faction(&self, id: FactionId) -> Option<&FactionState> {
        self.factions.iter().find(|f| f.id == id)
    }

    pub fn structure(&self, id: StructureId) -> Option<StructureView> {
        self.registry.view(id)
    }

    /// Get a read-only reference to the structure registry.
    pub fn registry(&self) -> &StructureRegistry {
        &self.registry
    }

    /// Force a structure's heat (for tests that need a warm target).
    #[cfg(test)]
    pub fn set_heat(&mut self, id: StructureId, heat: f64) {
        if let Some((thermal, _)) = self.registry.state_mut(id) {
            thermal.heat = heat;
        }
    }

    /// Get a mutable reference to a faction's state.
    #[cfg(test)]
    pub fn faction_mut(&mut self, id: FactionId) -> Option<&mut FactionState> {
        self.factions.iter_mut().find(|f| f.id == id)
    }

    /// Apply all queued actions, dropping those aimed at an earlier match.
    fn process_actions(&mut self) {
        while let Some(queued) = self.action_queue.pop_front() {
            if queued.version != self.version {
                warn!(
                    queued = queued.version,
                    current = self.version,
                    action = ?queued.action,
                    "dropping action queued before reset"
                );
                self.events.push(MatchEvent::ActionRejected {
                    action: queued.action,
                    reason: ActionError::StaleMatch,
                });
                continue;
            }
            // rejection is recorded as an event
            let _ = self.apply_action(queued.action);
        }
    }

    /// Run the battle systems in order.
    fn run_systems(&mut self, dt: f64) {
        // 1. Income, cooldowns, difficulty ramp
        let progress = self.clock.progress(&self.config.timing);
        systems::economy::run(&mut self.factions, &self.config.economy, progress, dt);

        // 2. Ignition, decay and fire spread
        let report = systems::thermal::run(
            self.registry.world_mut(),
            &self.index,
            &self.config.thermal,
            dt,
            &mut self.propagation,
            &mut self.events,
        );
        if report.ignited > 0 || report.propagated {
            debug!(
                tick = self.time.tick,
                ignited = report.ignited,
                transfers = report.transfers,
                "thermal pass"
            );
        }

        // 3. Score
        self.refresh_stats();

        // 4. Early termination
        if self.config.mode == GameMode::Asymmetric
            && systems::score::offense_reached_threshold(&self.stats, self.config.win_threshold)
        {
            if let Some(transition) = self.clock.finish() {
                self.on_transition(transition);
            }
        }
    }

    fn refresh_stats(&mut self) {
        let total = u32::try_from(self.registry.len()).unwrap_or(u32::MAX);
        self.stats = systems::score::run(self.registry.world(), &mut self.factions, total);
    }

    fn on_transition(&mut self, transition: PhaseTransition) {
        info!(
            from = ?transition.from,
            to = ?transition.to,
            elapsed = self.time.elapsed_secs,
            "phase changed"
        );
        self.events.push(MatchEvent::PhaseChanged {
            from: transition.from,
            to: transition.to,
        });
        if transition.to == MatchPhase::Finish {
            if transition.from == MatchPhase::Battle {
                self.settle_pending_ignitions();
            }
            self.finish_match();
        }
    }

    /// Structures clamped at threshold by the last spread pass still burn
    /// when the battle ends before their next ignition pass.
    fn settle_pending_ignitions(&mut self) {
        let ignited = systems::thermal::ignite_pending(
            self.registry.world_mut(),
            &self.config.thermal,
            &mut self.events,
        );
        if ignited > 0 {
            debug!(ignited, "ignited pending structures at battle end");
            self.refresh_stats();
        }
    }

    /// The only place a match ends; FINISH is terminal, so this runs once.
    fn finish_match(&mut self) {
        let outcome = match self.config.mode {
            GameMode::Asymmetric => {
                systems::score::resolve_asymmetric(&self.stats, self.config.win_threshold)
            }
            GameMode::Competitive => systems::score::resolve_competitive(
                self.factions.iter().map(|f| (f.id, f.burnt_percentage)),
            ),
        };

        info!(
            ?outcome,
            damage_percent = self.stats.damage_percent,
            burnt = self.stats.burnt_buildings,
            total = self.stats.total_buildings,
            "match finished"
        );
        self.events.push(MatchEvent::MatchFinished {
            outcome: outcome.clone(),
        });
        self.outcome = Some(outcome);
    }

    fn build_snapshot(&self, events: Vec<MatchEvent>) -> MatchSnapshot {
        systems::snapshot::build_snapshot(
            &self.registry,
            SnapshotInputs {
                version: self.version,
                time: self.time,
                phase: self.clock.phase(),
                mode: self.config.mode,
                timer: self.clock.timer(),
                factions: &self.factions,
                stats: self.stats,
                outcome: self.outcome.as_ref(),
            },
            events,
        )
    }
}
