//! Command implementations

pub mod categories;
pub mod simple;
pub mod stats;

pub use categories::{CategorySummary, list_categories};
pub use simple::run_simple;
pub use stats::{StatsReport, stats_report};
