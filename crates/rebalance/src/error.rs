//! Error types for rebalancing.

use xsmom_primitives::Date;
use xsmom_rank::RankError;
use xsmom_traits::{ProviderError, SinkError};

/// Errors that can occur during a rebalance.
///
/// Untradable closes are not errors; they are skipped and recorded.
#[derive(Debug, thiserror::Error)]
pub enum RebalanceError {
    /// Factor provider failure or malformed cross-section.
    #[error("factor provider error: {0}")]
    Provider(#[from] ProviderError),

    /// Execution sink failure.
    #[error("execution error: {0}")]
    Sink(#[from] SinkError),

    /// Weight construction error.
    #[error("weighting error: {0}")]
    Rank(#[from] RankError),

    /// The provider answered for a different day.
    #[error("scores dated {actual} returned for rebalance on {expected}")]
    DateMismatch {
        /// Day being rebalanced.
        expected: Date,
        /// Day the scores belong to.
        actual: Date,
    },

    /// Invalid configuration.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}

impl RebalanceError {
    /// Returns whether this error originates from upstream data.
    #[must_use]
    pub const fn is_upstream(&self) -> bool {
        matches!(self, Self::Provider(_) | Self::DateMismatch { .. })
    }

    /// Returns whether this error is recoverable.
    #[must_use]
    pub const fn is_recoverable(&self) -> bool {
        match self {
            Self::Sink(err) => err.is_recoverable(),
            _ => false,
        }
    }
}
