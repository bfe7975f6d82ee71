//! Execution sink trait definitions.

use xsmom_primitives::{Asset, PortfolioState, TargetWeights};

use crate::Tradability;

/// Errors an execution sink can surface.
#[derive(Debug, thiserror::Error)]
pub enum SinkError {
    /// An instruction was refused.
    #[error("instruction for {asset} rejected: {reason}")]
    Rejected {
        /// Asset of the refused instruction.
        asset: Asset,
        /// Reason given by the sink.
        reason: String,
    },

    /// Backend-specific failure.
    #[error("execution backend error: {0}")]
    Backend(#[source] Box<dyn std::error::Error + Send + Sync>),
}

impl SinkError {
    /// Returns whether this error is recoverable.
    #[must_use]
    pub const fn is_recoverable(&self) -> bool {
        matches!(self, Self::Rejected { .. })
    }
}

/// Owns the portfolio and turns target-weight instructions into orders.
pub trait ExecutionSink {
    /// Current holdings and account leverage.
    fn portfolio(&self) -> &PortfolioState;

    /// Submit one rebalance worth of instructions.
    ///
    /// # Errors
    /// Returns [`SinkError`] if the instructions cannot be executed.
    fn submit(
        &mut self,
        instructions: &TargetWeights,
        tradability: &dyn Tradability,
    ) -> Result<(), SinkError>;
}
