//! Target weight type definitions.

use serde::{Deserialize, Serialize};

use crate::{Asset, Leg};

/// Why an instruction was emitted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InstructionKind {
    /// Hold the asset in the long leg.
    Long,
    /// Hold the asset in the short leg.
    Short,
    /// Flatten a holding that dropped out of the selection.
    Close,
}

impl From<Leg> for InstructionKind {
    fn from(leg: Leg) -> Self {
        match leg {
            Leg::Long => Self::Long,
            Leg::Short => Self::Short,
        }
    }
}

/// A single `(asset, target weight)` order instruction.
///
/// The target is a signed fraction of portfolio equity; zero means flatten.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Instruction {
    /// Asset to trade.
    pub asset: Asset,
    /// Signed target weight as a fraction of equity.
    pub target: f64,
    /// Reason for the instruction.
    pub kind: InstructionKind,
}

impl Instruction {
    /// Target `+weight` in the long leg.
    #[must_use]
    pub const fn long(asset: Asset, weight: f64) -> Self {
        Self { asset, target: weight, kind: InstructionKind::Long }
    }

    /// Target `-weight` in the short leg.
    #[must_use]
    pub const fn short(asset: Asset, weight: f64) -> Self {
        Self { asset, target: -weight, kind: InstructionKind::Short }
    }

    /// Flatten the position.
    #[must_use]
    pub const fn close(asset: Asset) -> Self {
        Self { asset, target: 0.0, kind: InstructionKind::Close }
    }

    /// Whether this instruction flattens a position.
    #[must_use]
    pub const fn is_close(&self) -> bool {
        matches!(self.kind, InstructionKind::Close)
    }
}

/// Ordered target weights for one rebalance.
///
/// Emission order is significant only for reproducibility: longs, then shorts, then
/// closes.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TargetWeights {
    instructions: Vec<Instruction>,
}

impl TargetWeights {
    /// Create empty target weights.
    #[must_use]
    pub const fn new() -> Self {
        Self { instructions: Vec::new() }
    }

    /// Create target weights with room for `capacity` instructions.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self { instructions: Vec::with_capacity(capacity) }
    }

    /// Append an instruction.
    pub fn push(&mut self, instruction: Instruction) {
        self.instructions.push(instruction);
    }

    /// Instructions in emission order.
    #[must_use]
    pub fn instructions(&self) -> &[Instruction] {
        &self.instructions
    }

    /// Consume into the underlying instruction list.
    #[must_use]
    pub fn into_instructions(self) -> Vec<Instruction> {
        self.instructions
    }

    /// Iterate over instructions.
    pub fn iter(&self) -> std::slice::Iter<'_, Instruction> {
        self.instructions.iter()
    }

    /// Target weight for `asset`, if instructed.
    #[must_use]
    pub fn get(&self, asset: &Asset) -> Option<f64> {
        self.instructions.iter().find(|i| &i.asset == asset).map(|i| i.target)
    }

    /// Number of instructions of the given kind.
    #[must_use]
    pub fn count(&self, kind: InstructionKind) -> usize {
        self.instructions.iter().filter(|i| i.kind == kind).count()
    }

    /// Sum of absolute target weights.
    #[must_use]
    pub fn gross_leverage(&self) -> f64 {
        self.instructions.iter().map(|i| i.target.abs()).sum()
    }

    /// Sum of signed target weights.
    #[must_use]
    pub fn net_exposure(&self) -> f64 {
        self.instructions.iter().map(|i| i.target).sum()
    }

    /// Number of instructions.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.instructions.len()
    }

    /// Check if empty.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.instructions.is_empty()
    }
}

impl Extend<Instruction> for TargetWeights {
    fn extend<I: IntoIterator<Item = Instruction>>(&mut self, iter: I) {
        self.instructions.extend(iter);
    }
}

impl<'a> IntoIterator for &'a TargetWeights {
    type Item = &'a Instruction;
    type IntoIter = std::slice::Iter<'a, Instruction>;

    fn into_iter(self) -> Self::IntoIter {
        self.instructions.iter()
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;

    #[test]
    fn instruction_signs() {
        assert_eq!(Instruction::long(Asset::new("A"), 0.25).target, 0.25);
        assert_eq!(Instruction::short(Asset::new("B"), 0.25).target, -0.25);

        let close = Instruction::close(Asset::new("C"));
        assert!(close.is_close());
        assert_eq!(close.target, 0.0);
    }

    #[test]
    fn leverage_bookkeeping() {
        let mut weights = TargetWeights::new();
        weights.push(Instruction::long(Asset::new("A"), 1.0 / 3.0));
        weights.push(Instruction::long(Asset::new("B"), 1.0 / 3.0));
        weights.push(Instruction::short(Asset::new("C"), 1.0 / 3.0));
        weights.push(Instruction::close(Asset::new("D")));

        assert_relative_eq!(weights.gross_leverage(), 1.0, epsilon = 1e-12);
        assert_relative_eq!(weights.net_exposure(), 1.0 / 3.0, epsilon = 1e-12);
        assert_eq!(weights.count(InstructionKind::Long), 2);
        assert_eq!(weights.count(InstructionKind::Close), 1);
        assert_eq!(weights.get(&Asset::new("D")), Some(0.0));
        assert_eq!(weights.get(&Asset::new("E")), None);
    }

    #[test]
    fn kind_from_leg() {
        assert_eq!(InstructionKind::from(Leg::Long), InstructionKind::Long);
        assert_eq!(InstructionKind::from(Leg::Short), InstructionKind::Short);
    }
}
