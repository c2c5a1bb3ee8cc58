//! In-session statistics. Nothing here outlives the process.

pub mod game_metrics;

pub use game_metrics::GameMetrics;
