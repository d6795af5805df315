//! Thermal system: heat decay, ignition and proximity fire spread.
//!
//! Runs only during BATTLE, in two passes:
//! 1. Ignition/decay. Structures at threshold ignite (committing their heat
//!    source as attribution); other warm structures cool by `decay_rate * dt`.
//! 2. Propagation. Throttled by `PropagationClock`; every burning structure
//!    heats non-ignited, non-fortified neighbours within the spread range
//!    by `transfer_rate * elapsed`, clamped to the threshold.
//!
//! Fortified structures neither gain nor lose heat. When the battle runs
//! out, `ignite_pending` gives structures already at threshold their
//! ignition without a further decay or spread step.

use hecs::{Entity, World};

use pyre_core::components::{Fortification, Structure, Thermal};
use pyre_core::config::ThermalConfig;
use pyre_core::events::MatchEvent;
use pyre_core::types::{FactionId, Position, StructureId};

use crate::spatial::SpatialIndex;

/// Cooperative rate limit for the propagation pass.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct PropagationClock {
    accumulated: f64,
}

impl PropagationClock {
    /// Add `dt`; once at least `interval` has built up, hand back the whole
    /// accumulated time and start over.
    pub fn accumulate(&mut self, dt: f64, interval: f64) -> Option<f64> {
        self.accumulated += dt;
        if self.accumulated >= interval && self.accumulated > 0.0 {
            Some(std::mem::take(&mut self.accumulated))
        } else {
            None
        }
    }

    pub fn reset(&mut self) {
        self.accumulated = 0.0;
    }
}

/// What one thermal tick did.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ThermalReport {
    pub ignited: u32,
    /// Number of source-to-target heat transfers in the propagation pass.
    pub transfers: u32,
    pub propagated: bool,
}

/// A burning structure that can spread heat.
struct FireSource {
    id: StructureId,
    entity: Entity,
    position: Position,
    attribution: Option<FactionId>,
}

pub fn run(
    world: &mut World,
    index: &SpatialIndex<Entity>,
    config: &ThermalConfig,
    dt: f64,
    clock: &mut PropagationClock,
    events: &mut Vec<MatchEvent>,
) -> ThermalReport {
    let mut report = ThermalReport {
        ignited: ignite_and_decay(world, config, dt, events),
        ..ThermalReport::default()
    };

    if let Some(elapsed) = clock.accumulate(dt, config.propagation_interval_secs) {
        report.transfers = propagate(world, index, config, elapsed);
        report.propagated = true;
    }

    report
}

/// Ignite every structure sitting at threshold, without decay or spread.
/// Returns how many ignited.
pub fn ignite_pending(
    world: &mut World,
    config: &ThermalConfig,
    events: &mut Vec<MatchEvent>,
) -> u32 {
    ignite_and_decay(world, config, 0.0, events)
}

/// Pass 1. Returns how many structures ignited.
fn ignite_and_decay(
    world: &mut World,
    config: &ThermalConfig,
    dt: f64,
    events: &mut Vec<MatchEvent>,
) -> u32 {
    let mut ignited = 0;

    for (_entity, (structure, thermal, fortification)) in
        world.query_mut::<(&Structure, &mut Thermal, &Fortification)>()
    {
        if thermal.ignited || fortification.fortified {
            continue;
        }

        if thermal.heat >= config.threshold {
            thermal.ignited = true;
            thermal.heat = config.threshold;
            thermal.ignited_by = thermal.heat_source;
            ignited += 1;
            events.push(MatchEvent::StructureIgnited {
                id: structure.id,
                by: thermal.ignited_by,
                propagated: true,
            });
        } else if thermal.heat > 0.0 {
            thermal.heat = (thermal.heat - config.decay_rate * dt).max(0.0);
            if thermal.heat == 0.0 {
                thermal.heat_source = None;
            }
        }
    }

    ignited
}

/// Pass 2. Sources are visited in id order so attribution is deterministic:
/// the lowest-id burning neighbour claims an unattributed target.
fn propagate(
    world: &mut World,
    index: &SpatialIndex<Entity>,
    config: &ThermalConfig,
    elapsed: f64,
) -> u32 {
    let mut sources: Vec<FireSource> = world
        .query_mut::<(&Structure, &Position, &Thermal, &Fortification)>()
        .into_iter()
        .filter(|(_, (_, _, thermal, fortification))| thermal.ignited && !fortification.fortified)
        .map(|(entity, (structure, pos, thermal, _))| FireSource {
            id: structure.id,
            entity,
            position: *pos,
            attribution: thermal.ignited_by,
        })
        .collect();
    sources.sort_by_key(|source| source.id);

    let gain = config.transfer_rate * elapsed;
    let mut transfers = 0;

    for source in &sources {
        for target in index.within(source.position, config.spread_range) {
            if target == source.entity {
                continue;
            }
            let Ok((thermal, fortification)) =
                world.query_one_mut::<(&mut Thermal, &Fortification)>(target)
            else {
                continue;
            };
            if thermal.ignited || fortification.fortified {
                continue;
            }

            thermal.heat = (thermal.heat + gain).min(config.threshold);
            if thermal.heat_source.is_none() {
                thermal.heat_source = source.attribution;
            }
            transfers += 1;
        }
    }

    transfers
}
