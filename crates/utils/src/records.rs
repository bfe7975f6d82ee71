//! Conversion of rebalance records to frames.

use polars::prelude::*;
use xsmom_primitives::{Asset, Date, RebalanceRecord};

use crate::UtilsError;

/// Collect per-day rebalance records into a frame.
///
/// Output columns: | date | universe_size | longs | shorts | leverage | skipped |, where
/// `skipped` lists the untradable holdings left open that day, comma separated.
///
/// # Errors
/// Returns [`UtilsError::Polars`] if the frame cannot be assembled.
pub fn records_frame(records: &[RebalanceRecord]) -> Result<DataFrame, UtilsError> {
    let dates: Vec<Date> = records.iter().map(|r| r.date).collect();
    let universe: Vec<u64> = records.iter().map(|r| r.universe_size as u64).collect();
    let longs: Vec<u64> = records.iter().map(|r| r.longs as u64).collect();
    let shorts: Vec<u64> = records.iter().map(|r| r.shorts as u64).collect();
    let leverage: Vec<f64> = records.iter().map(|r| r.leverage).collect();
    let skipped: Vec<String> = records
        .iter()
        .map(|r| r.skipped.iter().map(Asset::as_str).collect::<Vec<_>>().join(","))
        .collect();

    let df = DataFrame::new(vec![
        Column::new("date".into(), dates),
        Column::new("universe_size".into(), universe),
        Column::new("longs".into(), longs),
        Column::new("shorts".into(), shorts),
        Column::new("leverage".into(), leverage),
        Column::new("skipped".into(), skipped),
    ])?;

    Ok(df)
}
