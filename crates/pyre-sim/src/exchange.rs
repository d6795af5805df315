//! Result exchange: publishes and collects score records through an
//! external key-value store.
//!
//! The simulation never talks to a concrete database. Hosts plug in any
//! `KeyValueStore` (a realtime database client, a file, or the in-memory
//! store below). Records live under `rooms/{room}/results/{faction}` as
//! JSON documents.

use std::collections::BTreeMap;

use tracing::warn;

use pyre_core::error::ExchangeError;
use pyre_core::types::FactionId;

use crate::scoreboard::{ScoreBoard, ScoreRecord};

/// Minimal get/set/list primitives the exchange needs from a store.
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&mut self, key: &str, value: String);
    /// All `(key, value)` pairs whose key starts with `prefix`.
    fn list(&self, prefix: &str) -> Vec<(String, String)>;
    /// Remove every key starting with `prefix`.
    fn remove_prefix(&mut self, prefix: &str);
}

impl<T: KeyValueStore + ?Sized> KeyValueStore for &mut T {
    fn get(&self, key: &str) -> Option<String> {
        (**self).get(key)
    }

    fn set(&mut self, key: &str, value: String) {
        (**self).set(key, value)
    }

    fn list(&self, prefix: &str) -> Vec<(String, String)> {
        (**self).list(prefix)
    }

    fn remove_prefix(&mut self, prefix: &str) {
        (**self).remove_prefix(prefix)
    }
}

/// Process-local store, ordered by key.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    entries: BTreeMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: String) {
        self.entries.insert(key.to_string(), value);
    }

    fn list(&self, prefix: &str) -> Vec<(String, String)> {
        self.entries
            .range(prefix.to_string()..)
            .take_while(|(key, _)| key.starts_with(prefix))
            .map(|(key, value)| (key.clone(), value.clone()))
            .collect()
    }

    fn remove_prefix(&mut self, prefix: &str) {
        self.entries.retain(|key, _| !key.starts_with(prefix));
    }
}

/// Score records for one room.
pub struct ResultExchange<S> {
    store: S,
    room: String,
}

impl<S: KeyValueStore> ResultExchange<S> {
    pub fn new(store: S, room: impl Into<String>) -> Self {
        Self {
            store,
            room: room.into(),
        }
    }

    fn prefix(&self) -> String {
        format!("rooms/{}/results/", self.room)
    }

    fn key(&self, faction: FactionId) -> String {
        format!("{}{}", self.prefix(), faction)
    }

    /// Publish this client's record, replacing any earlier one.
    pub fn publish(&mut self, record: &ScoreRecord) -> Result<(), ExchangeError> {
        let key = self.key(record.faction);
        let value = serde_json::to_string(record)?;
        self.store.set(&key, value);
        Ok(())
    }

    /// Read one faction's record.
    pub fn fetch_one(&self, faction: FactionId) -> Result<Option<ScoreRecord>, ExchangeError> {
        let key = self.key(faction);
        self.store
            .get(&key)
            .map(|value| {
                serde_json::from_str(&value).map_err(|source| ExchangeError::Malformed { key, source })
            })
            .transpose()
    }

    /// Every well-formed record in the room. Malformed entries are skipped.
    pub fn fetch(&self) -> Vec<ScoreRecord> {
        self.store
            .list(&self.prefix())
            .into_iter()
            .filter_map(|(key, value)| match serde_json::from_str(&value) {
                Ok(record) => Some(record),
                Err(source) => {
                    let err = ExchangeError::Malformed { key, source };
                    warn!(%err, "skipping score record");
                    None
                }
            })
            .collect()
    }

    /// Merge every published record into `board`.
    pub fn poll_into(&self, board: &mut ScoreBoard) {
        board.merge_all(self.fetch());
    }

    /// Drop all results for the room (play again).
    pub fn clear(&mut self) {
        let prefix = self.prefix();
        self.store.remove_prefix(&prefix);
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn store_mut(&mut self) -> &mut S {
        &mut self.store
    }
}
