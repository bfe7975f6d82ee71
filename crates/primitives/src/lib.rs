#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/factordynamics/xsmom-rs/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![cfg_attr(not(test), warn(unused_crate_dependencies))]

mod asset;
pub use asset::Asset;

mod error;
pub use error::DataError;

mod portfolio;
pub use portfolio::PortfolioState;

mod record;
pub use record::RebalanceRecord;

mod scores;
pub use scores::ScoreVector;

mod selection;
pub use selection::{Leg, Selection};

mod weights;
pub use weights::{Instruction, InstructionKind, TargetWeights};

/// Re-export common date type.
pub type Date = chrono::NaiveDate;
