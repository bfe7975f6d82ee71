//! Daily long/short rebalancing.

use tracing::{debug, info, info_span, warn};
use xsmom_primitives::{
    Asset, Date, Instruction, PortfolioState, RebalanceRecord, ScoreVector, Selection,
    TargetWeights,
};
use xsmom_rank::{Ranker, build_weights};
use xsmom_traits::{ExecutionSink, FactorProvider, Recorder, Tradability};

use crate::{RebalanceConfig, RebalanceError};

/// Outcome of one rebalance decision.
#[derive(Debug, Clone, PartialEq)]
pub struct RebalancePlan {
    /// The day's long and short legs.
    pub selection: Selection,
    /// Instructions in emission order: longs, shorts, then closes.
    pub weights: TargetWeights,
    /// Monitoring metrics for the day.
    pub record: RebalanceRecord,
}

impl RebalancePlan {
    /// Holdings left open because they could not be traded.
    #[must_use]
    pub fn skipped(&self) -> &[Asset] {
        &self.record.skipped
    }
}

/// Equal-weight, leveraged long/short rebalancer.
///
/// Holds no state across days: the portfolio is read from the execution sink on every
/// call.
#[derive(Debug, Clone)]
pub struct Rebalancer {
    config: RebalanceConfig,
    ranker: Ranker,
    leg_weight: f64,
}

impl Rebalancer {
    /// Create a rebalancer with the default configuration (3 per leg, 2x gross).
    #[must_use]
    pub fn new() -> Self {
        let config = RebalanceConfig::default();
        let leg_weight = config.gross_leverage / (2.0 * config.top_k as f64);
        Self { ranker: Ranker::new(config.top_k), config, leg_weight }
    }

    /// Create a rebalancer with a custom configuration.
    ///
    /// # Errors
    /// Returns [`RebalanceError`] if the configuration is invalid.
    pub fn with_config(config: RebalanceConfig) -> Result<Self, RebalanceError> {
        config.validate()?;
        let leg_weight = config.leg_weight()?;
        Ok(Self { ranker: Ranker::new(config.top_k), config, leg_weight })
    }

    /// Get the configuration.
    #[must_use]
    pub const fn config(&self) -> &RebalanceConfig {
        &self.config
    }

    /// Per-asset target weight magnitude.
    #[must_use]
    pub const fn leg_weight(&self) -> f64 {
        self.leg_weight
    }

    /// Decide the day's instructions from its scores and the current portfolio.
    ///
    /// Pure: identical inputs give an identical plan.
    ///
    /// # Errors
    /// Returns [`RebalanceError::Rank`] if weights cannot be built.
    pub fn plan<T>(
        &self,
        scores: &ScoreVector,
        portfolio: &PortfolioState,
        tradability: &T,
    ) -> Result<RebalancePlan, RebalanceError>
    where
        T: Tradability + ?Sized,
    {
        let selection = if self.config.screen_untradable {
            let screened = scores.filtered(|asset| tradability.can_trade(asset));
            if screened.len() < scores.len() {
                debug!(
                    date = %scores.date(),
                    removed = scores.len() - screened.len(),
                    "screened untradable assets before ranking"
                );
            }
            self.ranker.rank(&screened)
        } else {
            self.ranker.rank(scores)
        };

        self.plan_selection(scores.date(), scores.len(), selection, portfolio, tradability)
    }

    /// Build instructions for an already ranked selection.
    ///
    /// Longs and shorts get `+w` and `-w`. Every holding outside the selection gets a
    /// zero-weight close when it can trade, and is otherwise skipped and recorded.
    ///
    /// # Errors
    /// Returns [`RebalanceError::Rank`] if weights cannot be built.
    pub fn plan_selection<T>(
        &self,
        date: Date,
        universe_size: usize,
        selection: Selection,
        portfolio: &PortfolioState,
        tradability: &T,
    ) -> Result<RebalancePlan, RebalanceError>
    where
        T: Tradability + ?Sized,
    {
        let mut weights = build_weights(&selection, self.leg_weight)?;
        let mut skipped = Vec::new();

        let portfolio_assets = selection.portfolio_assets();
        for asset in portfolio.holdings().filter(|a| !portfolio_assets.contains(a)) {
            if tradability.can_trade(asset) {
                weights.push(Instruction::close(asset.clone()));
            } else {
                warn!(
                    date = %date,
                    asset = %asset,
                    "cannot close untradable position, leaving it open"
                );
                skipped.push(asset.clone());
            }
        }

        let record = RebalanceRecord {
            date,
            universe_size,
            longs: selection.longs().len(),
            shorts: selection.shorts().len(),
            leverage: portfolio.leverage(),
            skipped,
        };

        debug!(
            date = %date,
            instructions = weights.len(),
            gross = weights.gross_leverage(),
            "planned rebalance"
        );

        Ok(RebalancePlan { selection, weights, record })
    }

    /// Run the daily rebalance for `date`.
    ///
    /// Fetches the day's scores, plans against the sink's portfolio, submits the
    /// instructions and hands the record to `recorder`.
    ///
    /// # Errors
    /// Provider and sink failures are returned unchanged inside [`RebalanceError`].
    pub fn run<P, T, S, R>(
        &self,
        date: Date,
        provider: &P,
        tradability: &T,
        sink: &mut S,
        recorder: &mut R,
    ) -> Result<RebalanceRecord, RebalanceError>
    where
        P: FactorProvider + ?Sized,
        T: Tradability,
        S: ExecutionSink + ?Sized,
        R: Recorder + ?Sized,
    {
        let _span = info_span!("rebalance", date = %date).entered();

        let scores = provider.scores(date)?;
        if scores.date() != date {
            return Err(RebalanceError::DateMismatch { expected: date, actual: scores.date() });
        }

        let plan = self.plan(&scores, sink.portfolio(), tradability)?;
        sink.submit(&plan.weights, tradability)?;

        let record = plan.record;
        info!(
            universe_size = record.universe_size,
            longs = record.longs,
            shorts = record.shorts,
            leverage = record.leverage,
            skipped = record.skipped.len(),
            "rebalanced"
        );
        recorder.record(&record);

        Ok(record)
    }
}

impl Default for Rebalancer {
    fn default() -> Self {
        Self::new()
    }
}
