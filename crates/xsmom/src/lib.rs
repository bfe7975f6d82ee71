//! # xsmom
//!
//! Daily cross-sectional momentum, traded as an equal-weight long/short book.
//!
//! This crate provides a unified interface to the xsmom crates. Individual components
//! can be enabled via feature flags.
//!
//! ## Features
//!
//! - `full` (default): Enables all components
//! - `primitives`: Core type definitions
//! - `traits`: Provider, tradability, sink and recorder abstractions
//! - `rank`: Leg selection and target weights
//! - `rebalance`: The daily rebalancer and the paper book
//! - `utils`: Polars-backed score feed and record frames
//! - `cli`: The `replay` binary
//!
//! ## Example
//!
//! ```rust,ignore
//! use xsmom::rebalance::prelude::*;
//!
//! let rebalancer = Rebalancer::new();
//! let mut book = PaperBook::new();
//! let mut records: Vec<RebalanceRecord> = Vec::new();
//! rebalancer.run(date, &provider, &AllTradable, &mut book, &mut records)?;
//! ```

#![doc(issue_tracker_base_url = "https://github.com/factordynamics/xsmom-rs/issues/")]
#![cfg_attr(not(test), warn(unused_crate_dependencies))]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]

// Only the replay binary uses these.
#[cfg(feature = "cli")]
use {polars as _, serde_json as _, tracing as _, tracing_subscriber as _};

#[cfg(feature = "primitives")]
#[doc(inline)]
pub use xsmom_primitives as primitives;
#[cfg(feature = "traits")]
#[doc(inline)]
pub use xsmom_traits as traits;
#[cfg(feature = "rank")]
#[doc(inline)]
pub use xsmom_rank as rank;
#[cfg(feature = "rebalance")]
#[doc(inline)]
pub use xsmom_rebalance as rebalance;
#[cfg(feature = "utils")]
#[doc(inline)]
pub use xsmom_utils as utils;
