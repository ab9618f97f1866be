//! Persistence for the win/loss counters
//!
//! A small key-value abstraction with a file-backed implementation, and the
//! stats record stored through it.

mod paths;
mod stats;
mod store;

pub use paths::AppPaths;
pub use stats::{STATS_KEY, StatsRecord, StatsStore};
pub use store::{FileStore, KeyValueStore, MemoryStore, StorageError};

#[cfg(test)]
pub(crate) use store::FailingStore;
