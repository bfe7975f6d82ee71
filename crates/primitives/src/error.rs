//! Error types for malformed daily inputs.

use crate::Asset;

/// Errors raised when constructing daily data from malformed upstream input.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum DataError {
    /// Asset and score vectors differ in length.
    #[error("length mismatch: {assets} assets but {scores} scores")]
    LengthMismatch {
        /// Number of assets supplied.
        assets: usize,
        /// Number of scores supplied.
        scores: usize,
    },

    /// The same asset appears more than once in a cross-section.
    #[error("duplicate asset in cross-section: {0}")]
    DuplicateAsset(Asset),

    /// A score is NaN or infinite.
    #[error("non-finite score {score} for asset {asset}")]
    NonFiniteScore {
        /// Offending asset.
        asset: Asset,
        /// Offending score.
        score: f64,
    },

    /// An asset was placed in both the long and the short leg.
    #[error("asset {0} appears in both legs")]
    OverlappingLegs(Asset),
}
