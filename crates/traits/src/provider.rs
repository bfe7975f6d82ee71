//! Factor provider trait definitions.

use std::collections::BTreeMap;

use xsmom_primitives::{DataError, Date, ScoreVector};

/// Errors a factor provider can surface.
///
/// All of these are upstream data errors: the rebalancer propagates them unchanged
/// rather than trading on substituted data.
#[derive(Debug, thiserror::Error)]
pub enum ProviderError {
    /// The provider has no cross-section for the requested day.
    #[error("no data for date: {0}")]
    NoDataForDate(Date),

    /// The cross-section was malformed.
    #[error("malformed cross-section: {0}")]
    Data(#[from] DataError),

    /// Backend-specific failure.
    #[error("provider backend error: {0}")]
    Backend(#[source] Box<dyn std::error::Error + Send + Sync>),
}

impl ProviderError {
    /// Wrap a backend error.
    pub fn backend(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Backend(Box::new(err))
    }
}

/// Produces one score per universe member for a trading day.
///
/// The indicator behind the scores is opaque to the rebalancer.
pub trait FactorProvider {
    /// Cross-sectional scores for `date`.
    ///
    /// # Errors
    /// Returns [`ProviderError`] if the day is unavailable or the data is malformed.
    fn scores(&self, date: Date) -> Result<ScoreVector, ProviderError>;
}

impl FactorProvider for BTreeMap<Date, ScoreVector> {
    fn scores(&self, date: Date) -> Result<ScoreVector, ProviderError> {
        self.get(&date).cloned().ok_or(ProviderError::NoDataForDate(date))
    }
}
