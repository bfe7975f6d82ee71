//! Portfolio state type definitions.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::Asset;

/// Current holdings and account leverage.
///
/// Owned and mutated by the execution layer. The rebalancer only reads it. An asset
/// counts as held while its quantity is non-zero.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PortfolioState {
    positions: BTreeMap<Asset, f64>,
    leverage: f64,
}

impl PortfolioState {
    /// Create an empty portfolio.
    #[must_use]
    pub const fn new() -> Self {
        Self { positions: BTreeMap::new(), leverage: 0.0 }
    }

    /// Builder-style variant of [`PortfolioState::set_position`].
    #[must_use]
    pub fn with_position(mut self, asset: impl Into<Asset>, quantity: f64) -> Self {
        self.set_position(asset.into(), quantity);
        self
    }

    /// Builder-style variant of [`PortfolioState::set_leverage`].
    #[must_use]
    pub const fn with_leverage(mut self, leverage: f64) -> Self {
        self.leverage = leverage;
        self
    }

    /// Set the signed quantity held in `asset`. A zero quantity removes the position.
    pub fn set_position(&mut self, asset: Asset, quantity: f64) {
        if quantity == 0.0 {
            self.positions.remove(&asset);
        } else {
            self.positions.insert(asset, quantity);
        }
    }

    /// Set the externally computed account leverage.
    pub const fn set_leverage(&mut self, leverage: f64) {
        self.leverage = leverage;
    }

    /// Signed quantity held in `asset`.
    #[must_use]
    pub fn position(&self, asset: &Asset) -> Option<f64> {
        self.positions.get(asset).copied()
    }

    /// Whether a non-zero position is open in `asset`.
    #[must_use]
    pub fn is_held(&self, asset: &Asset) -> bool {
        self.positions.get(asset).is_some_and(|q| *q != 0.0)
    }

    /// Held assets in ascending asset order.
    pub fn holdings(&self) -> impl Iterator<Item = &Asset> + '_ {
        self.positions.iter().filter(|(_, q)| **q != 0.0).map(|(a, _)| a)
    }

    /// Iterate over `(asset, quantity)` pairs in asset order.
    pub fn positions(&self) -> impl Iterator<Item = (&Asset, f64)> + '_ {
        self.positions.iter().map(|(a, q)| (a, *q))
    }

    /// Externally computed account leverage, recorded for monitoring only.
    #[must_use]
    pub const fn leverage(&self) -> f64 {
        self.leverage
    }

    /// Number of open positions.
    #[must_use]
    pub fn len(&self) -> usize {
        self.positions.len()
    }

    /// Check if flat.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }
}
