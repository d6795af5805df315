//! Score board for networked competitive matches.
//!
//! Each client only knows its own percentage; peers' percentages arrive
//! through the result exchange. The board keeps the latest record per
//! faction (last-write-wins on the record timestamp) and ignores records
//! older than the staleness cutoff when resolving.
//!
//! `merge` is commutative, associative and idempotent: feeding the same
//! set of records in any order, any number of times, yields the same board.

use std::cmp::Ordering;
use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use pyre_core::constants::RESULT_STALENESS_CUTOFF_MS;
use pyre_core::enums::MatchOutcome;
use pyre_core::types::FactionId;

use crate::systems::score;

/// One faction's published result.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoreRecord {
    pub faction: FactionId,
    pub percentage: f64,
    pub count: u32,
    pub total_buildings: u32,
    /// Publisher's wall clock, milliseconds since the Unix epoch.
    pub timestamp_ms: u64,
}

impl ScoreRecord {
    /// Total order used to pick a winner between two records for the same
    /// faction. Later timestamps win; ties fall back to the payload so the
    /// choice never depends on arrival order.
    fn precedence(&self, other: &Self) -> Ordering {
        self.timestamp_ms
            .cmp(&other.timestamp_ms)
            .then_with(|| self.percentage.total_cmp(&other.percentage))
            .then_with(|| self.count.cmp(&other.count))
            .then_with(|| self.total_buildings.cmp(&other.total_buildings))
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ScoreBoard {
    records: BTreeMap<FactionId, ScoreRecord>,
    staleness_cutoff_ms: u64,
}

impl Default for ScoreBoard {
    fn default() -> Self {
        Self::new(RESULT_STALENESS_CUTOFF_MS)
    }
}

impl ScoreBoard {
    pub fn new(staleness_cutoff_ms: u64) -> Self {
        Self {
            records: BTreeMap::new(),
            staleness_cutoff_ms,
        }
    }

    /// Keep `record` if it supersedes what we hold for its faction.
    /// Returns whether the board changed.
    pub fn merge(&mut self, record: ScoreRecord) -> bool {
        match self.records.get(&record.faction) {
            Some(existing) if existing.precedence(&record) != Ordering::Less => false,
            _ => {
                self.records.insert(record.faction, record);
                true
            }
        }
    }

    pub fn merge_all(&mut self, records: impl IntoIterator<Item = ScoreRecord>) {
        for record in records {
            self.merge(record);
        }
    }

    pub fn get(&self, faction: FactionId) -> Option<&ScoreRecord> {
        self.records.get(&faction)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Records younger than the staleness cutoff at `now_ms`.
    pub fn fresh(&self, now_ms: u64) -> impl Iterator<Item = &ScoreRecord> + '_ {
        self.records
            .values()
            .filter(move |record| now_ms.saturating_sub(record.timestamp_ms) < self.staleness_cutoff_ms)
    }

    /// Winner set over fresh records.
    pub fn resolve(&self, now_ms: u64) -> MatchOutcome {
        score::resolve_competitive(
            self.fresh(now_ms)
                .map(|record| (record.faction, record.percentage)),
        )
    }
}
