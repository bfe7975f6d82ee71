#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/factordynamics/xsmom-rs/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![cfg_attr(not(test), warn(unused_crate_dependencies))]

mod provider;
pub use provider::{FactorProvider, ProviderError};

mod tradability;
pub use tradability::{AllTradable, Tradability};

mod sink;
pub use sink::{ExecutionSink, SinkError};

mod recorder;
pub use recorder::{NullRecorder, Recorder};
