//! Persisted win/loss counters

use super::store::{KeyValueStore, StorageError};
use serde::{Deserialize, Serialize};

/// Key the record lives under in the store
pub const STATS_KEY: &str = "wordleStats";

/// Lifetime win and loss counts
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatsRecord {
    pub wins: u32,
    pub losses: u32,
}

impl StatsRecord {
    #[must_use]
    pub const fn games(&self) -> u32 {
        self.wins.saturating_add(self.losses)
    }

    pub fn record_win(&mut self) {
        self.wins = self.wins.saturating_add(1);
    }

    pub fn record_loss(&mut self) {
        self.losses = self.losses.saturating_add(1);
    }
}

/// Reads and writes a [`StatsRecord`] through a key-value store
#[derive(Debug)]
pub struct StatsStore<S> {
    store: S,
}

impl<S: KeyValueStore> StatsStore<S> {
    pub const fn new(store: S) -> Self {
        Self { store }
    }

    /// Load the stored record
    ///
    /// A missing, unreadable or corrupt record yields zero counts. Problems
    /// are logged, never returned.
    pub fn load(&self) -> StatsRecord {
        let raw = match self.store.get(STATS_KEY) {
            Ok(Some(raw)) => raw,
            Ok(None) => return StatsRecord::default(),
            Err(err) => {
                tracing::warn!("stats unavailable, starting from zero: {err}");
                return StatsRecord::default();
            }
        };

        match decode(&raw) {
            Ok(record) => record,
            Err(err) => {
                tracing::warn!("stats record is corrupt, starting from zero: {err}");
                StatsRecord::default()
            }
        }
    }

    /// Persist a record
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the underlying store cannot be written.
    pub fn save(&mut self, record: &StatsRecord) -> Result<(), StorageError> {
        // Serializing two integers cannot fail
        let raw = serde_json::to_string(record).unwrap_or_default();
        self.store.set(STATS_KEY, &raw)?;
        tracing::debug!(wins = record.wins, losses = record.losses, "stats saved");
        Ok(())
    }

    /// Give back the underlying store
    pub fn into_inner(self) -> S {
        self.store
    }
}

/// Decode a stored record, accepting only the `{"wins": n, "losses": m}` object
fn decode(raw: &str) -> Result<StatsRecord, serde_json::Error> {
    match serde_json::from_str(raw)? {
        value @ serde_json::Value::Object(_) => serde_json::from_value(value),
        other => Err(serde::de::Error::custom(format!(
            "expected an object, found {other}"
        ))),
    }
}
