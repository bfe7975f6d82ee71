//! Asset type definitions.

use derive_more::Display;
use serde::{Deserialize, Serialize};

/// Opaque identifier for a tradable instrument.
///
/// Equality is by identity. The derived ordering (lexicographic on the symbol) is the
/// secondary key used to break score ties when ranking.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Display, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Asset(String);

impl Asset {
    /// Create a new asset from its symbol.
    #[must_use]
    pub fn new(symbol: impl Into<String>) -> Self {
        Self(symbol.into())
    }

    /// Get the symbol as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for Asset {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl From<String> for Asset {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl AsRef<str> for Asset {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
