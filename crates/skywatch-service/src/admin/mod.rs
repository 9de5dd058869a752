//! Admin panel statistics and search browsing.

pub mod stats;

pub use stats::{AdminStats, StatsService};
