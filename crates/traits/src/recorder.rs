//! Observability recorder trait definitions.

use xsmom_primitives::RebalanceRecord;

/// Receives the per-day monitoring record. Recording never influences trading.
pub trait Recorder {
    /// Record one day's metrics.
    fn record(&mut self, record: &RebalanceRecord);
}

/// Accumulates records in memory, one per rebalance.
impl Recorder for Vec<RebalanceRecord> {
    fn record(&mut self, record: &RebalanceRecord) {
        self.push(record.clone());
    }
}

/// Discards every record.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NullRecorder;

impl Recorder for NullRecorder {
    fn record(&mut self, _record: &RebalanceRecord) {}
}
