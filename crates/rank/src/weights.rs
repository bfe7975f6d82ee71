//! Target weight construction.

use xsmom_primitives::{Instruction, Selection, TargetWeights};

use crate::RankError;

/// Equal per-asset weight that spreads `gross_leverage` over two full legs of `k`.
///
/// Returns `gross_leverage / (2k)`, e.g. 1/3 for `k = 3` and a 2x gross book. A zero
/// `k` selects nothing, so its weight is zero.
///
/// # Errors
/// Returns [`RankError::InvalidLeverage`] if `gross_leverage` is negative or not finite,
/// and [`RankError::InvalidLegWeight`] if the resulting weight exceeds 1.
pub fn equal_leg_weight(k: usize, gross_leverage: f64) -> Result<f64, RankError> {
    if !gross_leverage.is_finite() || gross_leverage < 0.0 {
        return Err(RankError::InvalidLeverage(gross_leverage));
    }
    if k == 0 {
        return Ok(0.0);
    }

    let weight = gross_leverage / (2.0 * k as f64);
    if weight > 1.0 {
        return Err(RankError::InvalidLegWeight(weight));
    }
    Ok(weight)
}

/// Build signed target weights for the active legs.
///
/// Each long gets `+leg_weight` and each short `-leg_weight`, longs first. The weight
/// does not depend on how many assets the legs actually hold, so a truncated selection
/// runs at proportionally lower gross leverage. Holdings are not consulted.
///
/// # Errors
/// Returns [`RankError::InvalidLegWeight`] if `leg_weight` is not finite or outside
/// `[0, 1]`.
pub fn build_weights(selection: &Selection, leg_weight: f64) -> Result<TargetWeights, RankError> {
    if !leg_weight.is_finite() || !(0.0..=1.0).contains(&leg_weight) {
        return Err(RankError::InvalidLegWeight(leg_weight));
    }

    let mut weights = TargetWeights::with_capacity(selection.len());
    weights.extend(selection.longs().iter().map(|a| Instruction::long(a.clone(), leg_weight)));
    weights.extend(selection.shorts().iter().map(|a| Instruction::short(a.clone(), leg_weight)));
    Ok(weights)
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;
    use rstest::rstest;
    use xsmom_primitives::{Asset, InstructionKind, Leg};

    use super::*;

    fn selection(longs: &[&str], shorts: &[&str]) -> Selection {
        Selection::try_new(
            longs.iter().map(|s| Asset::new(*s)).collect(),
            shorts.iter().map(|s| Asset::new(*s)).collect(),
        )
        .unwrap()
    }

    #[rstest]
    #[case(3, 2.0, 1.0 / 3.0)]
    #[case(5, 2.0, 0.2)]
    #[case(3, 1.0, 1.0 / 6.0)]
    #[case(1, 2.0, 1.0)]
    #[case(0, 2.0, 0.0)]
    #[case(usize::MAX / 2 + 1, 2.0, 0.0)]
    #[case(usize::MAX, 2.0, 0.0)]
    fn equal_leg_weight_cases(#[case] k: usize, #[case] gross: f64, #[case] expected: f64) {
        assert_relative_eq!(equal_leg_weight(k, gross).unwrap(), expected, epsilon = 1e-12);
    }

    #[rstest]
    #[case(-1.0)]
    #[case(f64::NAN)]
    #[case(f64::INFINITY)]
    fn equal_leg_weight_rejects_bad_leverage(#[case] gross: f64) {
        assert!(matches!(equal_leg_weight(3, gross), Err(RankError::InvalidLeverage(_))));
    }

    #[test]
    fn equal_leg_weight_rejects_over_one() {
        assert_eq!(equal_leg_weight(1, 4.0), Err(RankError::InvalidLegWeight(2.0)));
    }

    #[test]
    fn one_signed_entry_per_selected_asset() {
        let selection = selection(&["A", "B", "C"], &["F", "E", "D"]);
        let weights = build_weights(&selection, 1.0 / 3.0).unwrap();

        assert_eq!(weights.len(), 6);
        for instruction in &weights {
            let expected_sign = match selection.leg_of(&instruction.asset) {
                Some(Leg::Long) => 1.0,
                Some(Leg::Short) => -1.0,
                None => panic!("unselected asset {}", instruction.asset),
            };
            assert_relative_eq!(instruction.target, expected_sign / 3.0, epsilon = 1e-12);
        }
        assert_relative_eq!(weights.gross_leverage(), 2.0, epsilon = 1e-12);
        assert_relative_eq!(weights.net_exposure(), 0.0, epsilon = 1e-12);
    }

    #[test]
    fn longs_emitted_before_shorts() {
        let weights = build_weights(&selection(&["A", "B"], &["Z", "Y"]), 0.25).unwrap();
        let kinds: Vec<InstructionKind> = weights.iter().map(|i| i.kind).collect();
        assert_eq!(
            kinds,
            [InstructionKind::Long, InstructionKind::Long, InstructionKind::Short, InstructionKind::Short]
        );
        assert_eq!(weights.instructions()[2].asset, Asset::new("Z"));
    }

    #[test]
    fn truncated_legs_keep_per_asset_weight() {
        let weights = build_weights(&selection(&["A", "B"], &["E", "D"]), 1.0 / 3.0).unwrap();
        assert_relative_eq!(weights.gross_leverage(), 4.0 / 3.0, epsilon = 1e-12);
    }

    #[test]
    fn empty_selection_gives_no_weights() {
        let weights = build_weights(&Selection::empty(), 1.0 / 3.0).unwrap();
        assert!(weights.is_empty());
    }

    #[rstest]
    #[case(-0.1)]
    #[case(1.5)]
    #[case(f64::NAN)]
    fn rejects_invalid_leg_weight(#[case] weight: f64) {
        let err = build_weights(&selection(&["A"], &["B"]), weight).unwrap_err();
        assert!(matches!(err, RankError::InvalidLegWeight(_)));
    }
}
