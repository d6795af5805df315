//! Score system: per-faction attribution counts and win resolution.
//!
//! Aggregates are recomputed from the registry every tick; nothing here is
//! incremental, so a reset or a rejected action can never leave stale counts.

use hecs::World;

use pyre_core::components::Thermal;
use pyre_core::enums::MatchOutcome;
use pyre_core::state::StatsView;
use pyre_core::types::FactionId;

use super::economy::FactionState;

/// `count / total * 100`, or 0 for an empty city.
pub fn percentage(count: u32, total: u32) -> f64 {
    if total == 0 {
        0.0
    } else {
        f64::from(count) / f64::from(total) * 100.0
    }
}

/// Recount burnt structures, updating each faction's attributed share.
pub fn run(world: &World, factions: &mut [FactionState], total: u32) -> StatsView {
    for faction in factions.iter_mut() {
        faction.burnt_count = 0;
    }

    let mut burnt = 0;
    for (_entity, thermal) in world.query::<&Thermal>().iter() {
        if !thermal.ignited {
            continue;
        }
        burnt += 1;
        if let Some(owner) = thermal.ignited_by {
            if let Some(faction) = factions.iter_mut().find(|f| f.id == owner) {
                faction.burnt_count += 1;
            }
        }
    }

    for faction in factions.iter_mut() {
        faction.burnt_percentage = percentage(faction.burnt_count, total);
    }

    StatsView {
        total_buildings: total,
        burnt_buildings: burnt,
        damage_percent: percentage(burnt, total),
    }
}

/// Whether city-wide damage has reached the offense's winning threshold.
pub fn offense_reached_threshold(stats: &StatsView, threshold: f64) -> bool {
    stats.total_buildings > 0 && stats.damage_percent >= threshold
}

/// Defense (P1) holds if damage stays under the threshold; otherwise the
/// offense (P2) wins.
pub fn resolve_asymmetric(stats: &StatsView, threshold: f64) -> MatchOutcome {
    if stats.total_buildings == 0 {
        MatchOutcome::NoWinner
    } else if stats.damage_percent < threshold {
        MatchOutcome::Victory(FactionId::P1)
    } else {
        MatchOutcome::Victory(FactionId::P2)
    }
}

/// Highest strictly-positive percentage wins; ties at the maximum draw.
///
/// Order-independent: the winner set is sorted by faction slot and
/// non-finite scores are ignored.
pub fn resolve_competitive(scores: impl IntoIterator<Item = (FactionId, f64)>) -> MatchOutcome {
    let mut best = 0.0;
    let mut winners: Vec<FactionId> = Vec::new();

    for (faction, score) in scores {
        if !score.is_finite() || score <= 0.0 {
            continue;
        }
        if score > best {
            best = score;
            winners.clear();
            winners.push(faction);
        } else if score == best && !winners.contains(&faction) {
            winners.push(faction);
        }
    }

    winners.sort();
    match winners.len() {
        0 => MatchOutcome::NoWinner,
        1 => MatchOutcome::Victory(winners[0]),
        _ => MatchOutcome::Draw(winners),
    }
}
