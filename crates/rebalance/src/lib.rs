#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/factordynamics/xsmom-rs/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![cfg_attr(not(test), warn(unused_crate_dependencies))]

mod rebalancer;
pub use rebalancer::{RebalancePlan, Rebalancer};

mod config;
pub use config::RebalanceConfig;

mod book;
pub use book::PaperBook;

mod error;
pub use error::RebalanceError;

/// Re-export commonly used types.
pub mod prelude {
    pub use xsmom_primitives::{
        Asset, Date, Instruction, InstructionKind, PortfolioState, RebalanceRecord, ScoreVector,
        Selection, TargetWeights,
    };
    pub use xsmom_traits::{
        AllTradable, ExecutionSink, FactorProvider, NullRecorder, Recorder, Tradability,
    };

    pub use super::{PaperBook, RebalanceConfig, RebalanceError, RebalancePlan, Rebalancer};
}
