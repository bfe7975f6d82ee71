//! Cross-sectional ranking into long and short legs.

use std::cmp::Ordering;

use ndarray::ArrayView1;
use xsmom_primitives::{Asset, ScoreVector, Selection};

/// Number of assets per leg for a universe of `n` assets and a target of `k`.
///
/// Both legs shrink together to `floor(n / 2)` when the universe cannot hold `2k`
/// assets, so with an odd universe the median asset is left out.
#[must_use]
pub const fn leg_size(n: usize, k: usize) -> usize {
    let half = n / 2;
    if k < half { k } else { half }
}

/// Indices of `values` ordered strongest first.
///
/// The order is total: score descending, then asset ascending. Input order never
/// affects the result.
#[must_use]
pub fn ranked_order(assets: &[Asset], values: ArrayView1<'_, f64>) -> Vec<usize> {
    debug_assert_eq!(assets.len(), values.len());

    let mut order: Vec<usize> = (0..assets.len()).collect();
    order.sort_unstable_by(|&a, &b| match values[b].total_cmp(&values[a]) {
        Ordering::Equal => assets[a].cmp(&assets[b]),
        other => other,
    });
    order
}

/// Rank a cross-section into the top-`k` longs and bottom-`k` shorts.
///
/// Longs are the head of [`ranked_order`], strongest first. Shorts are its tail,
/// weakest first. Legs hold [`leg_size`] assets each, so they never overlap. An empty
/// universe or `k == 0` yields an empty selection.
#[must_use]
pub fn rank(scores: &ScoreVector, k: usize) -> Selection {
    let n = scores.len();
    let m = leg_size(n, k);
    if m == 0 {
        return Selection::empty();
    }

    let assets = scores.assets();
    let order = ranked_order(assets, scores.scores().view());

    let longs = order[..m].iter().map(|&i| assets[i].clone()).collect();
    let shorts = order[n - m..].iter().rev().map(|&i| assets[i].clone()).collect();

    Selection::from_disjoint(longs, shorts)
}

/// Ranks cross-sections with a fixed leg size.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ranker {
    /// Target number of assets per leg.
    pub top_k: usize,
}

impl Ranker {
    /// Create a new ranker.
    #[must_use]
    pub const fn new(top_k: usize) -> Self {
        Self { top_k }
    }

    /// Rank a cross-section.
    #[must_use]
    pub fn rank(&self, scores: &ScoreVector) -> Selection {
        rank(scores, self.top_k)
    }
}

impl Default for Ranker {
    fn default() -> Self {
        Self::new(3)
    }
}
