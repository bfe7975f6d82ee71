//! In-memory paper execution sink.

use tracing::warn;
use xsmom_primitives::{PortfolioState, TargetWeights};
use xsmom_traits::{ExecutionSink, SinkError, Tradability};

/// Paper book that fills every tradable instruction at its target weight.
///
/// Positions are stored as equity weights, so the account leverage is the sum of
/// absolute position sizes. There are no prices, fills or PnL. Instructions on
/// untradable assets are skipped and counted.
#[derive(Debug, Clone, Default)]
pub struct PaperBook {
    portfolio: PortfolioState,
    submissions: usize,
    rejected: usize,
}

impl PaperBook {
    /// Create a flat book.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from existing holdings.
    #[must_use]
    pub fn from_portfolio(portfolio: PortfolioState) -> Self {
        Self { portfolio, ..Self::default() }
    }

    /// Number of submitted rebalances.
    #[must_use]
    pub const fn submissions(&self) -> usize {
        self.submissions
    }

    /// Number of instructions skipped because the asset could not trade.
    #[must_use]
    pub const fn rejected(&self) -> usize {
        self.rejected
    }

    fn refresh_leverage(&mut self) {
        let gross: f64 = self.portfolio.positions().map(|(_, w)| w.abs()).sum();
        self.portfolio.set_leverage(gross);
    }
}

impl ExecutionSink for PaperBook {
    fn portfolio(&self) -> &PortfolioState {
        &self.portfolio
    }

    fn submit(
        &mut self,
        instructions: &TargetWeights,
        tradability: &dyn Tradability,
    ) -> Result<(), SinkError> {
        if let Some(bad) = instructions.iter().find(|i| !i.target.is_finite()) {
            return Err(SinkError::Rejected {
                asset: bad.asset.clone(),
                reason: format!("non-finite target {}", bad.target),
            });
        }

        for instruction in instructions {
            if !tradability.can_trade(&instruction.asset) {
                warn!(
                    asset = %instruction.asset,
                    target = instruction.target,
                    "paper order on untradable asset skipped"
                );
                self.rejected += 1;
                continue;
            }
            self.portfolio.set_position(instruction.asset.clone(), instruction.target);
        }

        self.submissions += 1;
        self.refresh_leverage();
        Ok(())
    }
}
