#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/factordynamics/xsmom-rs/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![cfg_attr(not(test), warn(unused_crate_dependencies))]

mod feed;
pub use feed::{FeedColumns, FrameFeed};

mod records;
pub use records::records_frame;

mod error;
pub use error::UtilsError;
