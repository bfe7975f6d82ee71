#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/factordynamics/xsmom-rs/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![cfg_attr(not(test), warn(unused_crate_dependencies))]

mod rank;
pub use rank::{Ranker, leg_size, rank, ranked_order};

mod weights;
pub use weights::{build_weights, equal_leg_weight};

mod error;
pub use error::RankError;
