//! Tradability predicate definitions.

use std::collections::{BTreeSet, HashSet};

use xsmom_primitives::Asset;

/// Whether an asset can be traded on the current day.
///
/// Delisted or halted assets return false; no order can be placed in them.
pub trait Tradability {
    /// Returns true if an order in `asset` can be placed today.
    fn can_trade(&self, asset: &Asset) -> bool;
}

/// Every asset is tradable.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AllTradable;

impl Tradability for AllTradable {
    fn can_trade(&self, _asset: &Asset) -> bool {
        true
    }
}

/// The set of tradable assets.
impl Tradability for BTreeSet<Asset> {
    fn can_trade(&self, asset: &Asset) -> bool {
        self.contains(asset)
    }
}

/// The set of tradable assets.
impl Tradability for HashSet<Asset> {
    fn can_trade(&self, asset: &Asset) -> bool {
        self.contains(asset)
    }
}

impl<F> Tradability for F
where
    F: Fn(&Asset) -> bool,
{
    fn can_trade(&self, asset: &Asset) -> bool {
        self(asset)
    }
}
