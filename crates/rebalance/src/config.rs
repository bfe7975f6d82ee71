//! Rebalancer configuration.

use serde::{Deserialize, Serialize};
use xsmom_rank::equal_leg_weight;

use crate::RebalanceError;

/// Configuration for the daily long/short rebalance.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RebalanceConfig {
    /// Target number of assets per leg.
    pub top_k: usize,
    /// Gross leverage of the book when both legs are full.
    pub gross_leverage: f64,
    /// Drop untradable assets from the cross-section before ranking.
    pub screen_untradable: bool,
}

impl Default for RebalanceConfig {
    fn default() -> Self {
        Self { top_k: 3, gross_leverage: 2.0, screen_untradable: false }
    }
}

impl RebalanceConfig {
    /// Per-asset weight, `gross_leverage / (2 * top_k)`.
    ///
    /// # Errors
    /// Returns [`RebalanceError::Rank`] if the leverage is invalid or the resulting
    /// weight exceeds 1.
    pub fn leg_weight(&self) -> Result<f64, RebalanceError> {
        Ok(equal_leg_weight(self.top_k, self.gross_leverage)?)
    }

    /// Check the configuration.
    ///
    /// # Errors
    /// Returns [`RebalanceError`] describing the first invalid field.
    pub fn validate(&self) -> Result<(), RebalanceError> {
        if self.top_k == 0 {
            return Err(RebalanceError::InvalidConfig("top_k must be at least 1".to_string()));
        }
        self.leg_weight().map(|_| ())
    }
}
