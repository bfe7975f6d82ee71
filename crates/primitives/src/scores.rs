//! Cross-sectional score type definitions.

use std::collections::HashSet;

use ndarray::Array1;

use crate::{Asset, DataError, Date};

/// Cross-sectional factor scores for a single trading day.
///
/// One entry per member of the day's universe, in the order the provider supplied
/// them. A score vector is validated on construction and never mutated afterwards:
/// every asset is unique and every score is finite.
#[derive(Debug, Clone, PartialEq)]
pub struct ScoreVector {
    date: Date,
    assets: Vec<Asset>,
    scores: Array1<f64>,
}

impl ScoreVector {
    /// Create a new score vector.
    ///
    /// # Errors
    /// Returns [`DataError`] if the lengths differ, an asset is repeated, or a score is
    /// not finite.
    pub fn try_new(date: Date, assets: Vec<Asset>, scores: Array1<f64>) -> Result<Self, DataError> {
        if assets.len() != scores.len() {
            return Err(DataError::LengthMismatch { assets: assets.len(), scores: scores.len() });
        }

        let mut seen = HashSet::with_capacity(assets.len());
        for (asset, &score) in assets.iter().zip(scores.iter()) {
            if !seen.insert(asset) {
                return Err(DataError::DuplicateAsset(asset.clone()));
            }
            if !score.is_finite() {
                return Err(DataError::NonFiniteScore { asset: asset.clone(), score });
            }
        }

        Ok(Self { date, assets, scores })
    }

    /// Create a score vector from `(asset, score)` pairs.
    ///
    /// # Errors
    /// See [`ScoreVector::try_new`].
    pub fn from_pairs(
        date: Date,
        pairs: impl IntoIterator<Item = (Asset, f64)>,
    ) -> Result<Self, DataError> {
        let (assets, scores): (Vec<Asset>, Vec<f64>) = pairs.into_iter().unzip();
        Self::try_new(date, assets, Array1::from_vec(scores))
    }

    /// An empty cross-section for `date`.
    #[must_use]
    pub fn empty(date: Date) -> Self {
        Self { date, assets: Vec::new(), scores: Array1::zeros(0) }
    }

    /// Trading day the scores belong to.
    #[must_use]
    pub const fn date(&self) -> Date {
        self.date
    }

    /// Universe members in provider order.
    #[must_use]
    pub fn assets(&self) -> &[Asset] {
        &self.assets
    }

    /// Score values aligned with [`ScoreVector::assets`].
    #[must_use]
    pub const fn scores(&self) -> &Array1<f64> {
        &self.scores
    }

    /// Number of assets.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.assets.len()
    }

    /// Check if empty.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.assets.is_empty()
    }

    /// Get the score of a specific asset.
    #[must_use]
    pub fn get(&self, asset: &Asset) -> Option<f64> {
        self.assets.iter().position(|a| a == asset).map(|i| self.scores[i])
    }

    /// Iterate over `(asset, score)` pairs.
    pub fn iter(&self) -> impl Iterator<Item = (&Asset, f64)> + '_ {
        self.assets.iter().zip(self.scores.iter().copied())
    }

    /// A new score vector holding only the assets for which `keep` returns true.
    #[must_use]
    pub fn filtered(&self, mut keep: impl FnMut(&Asset) -> bool) -> Self {
        let (assets, scores): (Vec<Asset>, Vec<f64>) =
            self.iter().filter(|(asset, _)| keep(asset)).map(|(a, s)| (a.clone(), s)).unzip();
        Self { date: self.date, assets, scores: Array1::from_vec(scores) }
    }
}

#[cfg(test)]
mod tests {
    use ndarray::array;

    use super::*;

    fn day() -> Date {
        Date::from_ymd_opt(2024, 1, 2).unwrap()
    }

    #[test]
    fn score_vector_get() {
        let scores = ScoreVector::try_new(
            day(),
            vec![Asset::new("A"), Asset::new("B")],
            array![55.0, 31.5],
        )
        .unwrap();

        assert_eq!(scores.get(&Asset::new("A")), Some(55.0));
        assert_eq!(scores.get(&Asset::new("B")), Some(31.5));
        assert_eq!(scores.get(&Asset::new("C")), None);
        assert_eq!(scores.len(), 2);
    }

    #[test]
    fn rejects_length_mismatch() {
        let err = ScoreVector::try_new(day(), vec![Asset::new("A")], array![1.0, 2.0]).unwrap_err();
        assert_eq!(err, DataError::LengthMismatch { assets: 1, scores: 2 });
    }

    #[test]
    fn rejects_duplicate_asset() {
        let err = ScoreVector::from_pairs(
            day(),
            [(Asset::new("A"), 1.0), (Asset::new("B"), 2.0), (Asset::new("A"), 3.0)],
        )
        .unwrap_err();
        assert_eq!(err, DataError::DuplicateAsset(Asset::new("A")));
    }

    #[test]
    fn rejects_non_finite_score() {
        let err =
            ScoreVector::from_pairs(day(), [(Asset::new("A"), f64::INFINITY)]).unwrap_err();
        assert!(matches!(err, DataError::NonFiniteScore { .. }));
    }

    #[test]
    fn filtered_keeps_order_and_date() {
        let scores = ScoreVector::from_pairs(
            day(),
            [(Asset::new("C"), 3.0), (Asset::new("A"), 1.0), (Asset::new("B"), 2.0)],
        )
        .unwrap();

        let kept = scores.filtered(|a| a.as_str() != "A");
        assert_eq!(kept.date(), day());
        assert_eq!(kept.assets(), &[Asset::new("C"), Asset::new("B")]);
        assert_eq!(kept.scores(), &array![3.0, 2.0]);
    }

    #[test]
    fn empty_vector() {
        let scores = ScoreVector::empty(day());
        assert!(scores.is_empty());
        assert_eq!(scores.iter().count(), 0);
    }
}
