//! Long/short selection type definitions.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::{Asset, DataError};

/// Which side of the book an asset belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Leg {
    /// Positive target weight.
    Long,
    /// Negative target weight.
    Short,
}

impl std::fmt::Display for Leg {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Long => write!(f, "long"),
            Self::Short => write!(f, "short"),
        }
    }
}

/// The day's long and short legs.
///
/// Longs are listed strongest first, shorts weakest first. The two legs never share an
/// asset.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Selection {
    longs: Vec<Asset>,
    shorts: Vec<Asset>,
}

impl Selection {
    /// Create a selection from its two legs.
    ///
    /// # Errors
    /// Returns [`DataError::OverlappingLegs`] if an asset appears in both legs.
    pub fn try_new(longs: Vec<Asset>, shorts: Vec<Asset>) -> Result<Self, DataError> {
        if let Some(shared) = longs.iter().find(|a| shorts.contains(a)) {
            return Err(DataError::OverlappingLegs(shared.clone()));
        }
        Ok(Self { longs, shorts })
    }

    /// Create a selection from legs that are disjoint by construction.
    ///
    /// Callers must guarantee no asset appears in both legs.
    #[must_use]
    pub fn from_disjoint(longs: Vec<Asset>, shorts: Vec<Asset>) -> Self {
        debug_assert!(longs.iter().all(|a| !shorts.contains(a)), "legs overlap");
        Self { longs, shorts }
    }

    /// A selection with both legs empty.
    #[must_use]
    pub const fn empty() -> Self {
        Self { longs: Vec::new(), shorts: Vec::new() }
    }

    /// The long leg.
    #[must_use]
    pub fn longs(&self) -> &[Asset] {
        &self.longs
    }

    /// The short leg.
    #[must_use]
    pub fn shorts(&self) -> &[Asset] {
        &self.shorts
    }

    /// Leg membership of `asset`, if selected.
    #[must_use]
    pub fn leg_of(&self, asset: &Asset) -> Option<Leg> {
        if self.longs.contains(asset) {
            Some(Leg::Long)
        } else if self.shorts.contains(asset) {
            Some(Leg::Short)
        } else {
            None
        }
    }

    /// Whether `asset` is in either leg.
    #[must_use]
    pub fn contains(&self, asset: &Asset) -> bool {
        self.leg_of(asset).is_some()
    }

    /// Union of both legs.
    #[must_use]
    pub fn portfolio_assets(&self) -> BTreeSet<&Asset> {
        self.longs.iter().chain(self.shorts.iter()).collect()
    }

    /// Total number of selected assets.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.longs.len() + self.shorts.len()
    }

    /// Check if both legs are empty.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.longs.is_empty() && self.shorts.is_empty()
    }
}
