//! Stats command
//!
//! Reads the persisted win/loss record without starting a game.

use crate::output::formatters::win_rate;
use crate::storage::{KeyValueStore, StatsRecord, StatsStore};

/// Persisted stats with derived figures
pub struct StatsReport {
    pub record: StatsRecord,
    pub games: u32,
    pub win_rate: f64,
}

/// Load the stats record from a store and summarise it
pub fn stats_report<S: KeyValueStore>(store: S) -> StatsReport {
    let record = StatsStore::new(store).load();
    StatsReport {
        record,
        games: record.games(),
        win_rate: win_rate(record.wins, record.losses),
    }
}
