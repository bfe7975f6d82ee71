//! Per-day observability record.

use serde::{Deserialize, Serialize};

use crate::{Asset, Date};

/// Metrics recorded once per rebalance for monitoring and plotting.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RebalanceRecord {
    /// Trading day.
    pub date: Date,
    /// Number of assets in the day's universe.
    pub universe_size: usize,
    /// Number of long targets.
    pub longs: usize,
    /// Number of short targets.
    pub shorts: usize,
    /// Account leverage reported by the portfolio.
    pub leverage: f64,
    /// Holdings that could not be closed because they were untradable.
    pub skipped: Vec<Asset>,
}

impl RebalanceRecord {
    /// Number of closes skipped on this day.
    #[must_use]
    pub fn skipped_closes(&self) -> usize {
        self.skipped.len()
    }
}
