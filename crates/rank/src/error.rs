//! Error types for ranking and weighting.

/// Errors that can occur while building target weights.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum RankError {
    /// Per-asset leg weight outside `[0, 1]` or not finite.
    #[error("invalid leg weight: {0} (must be finite and in [0, 1])")]
    InvalidLegWeight(f64),

    /// Gross leverage target negative or not finite.
    #[error("invalid gross leverage: {0} (must be finite and non-negative)")]
    InvalidLeverage(f64),
}
