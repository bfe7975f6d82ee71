//! Frame-backed daily score feed.

use std::collections::{BTreeMap, BTreeSet};

use chrono::NaiveDate;
use polars::prelude::*;
use tracing::debug;
use xsmom_primitives::{Asset, Date, ScoreVector};
use xsmom_traits::{FactorProvider, ProviderError};

use crate::UtilsError;

/// Days from 0001-01-01 to 1970-01-01, the origin of polars `Date` values.
const EPOCH_DAYS_FROM_CE: i32 = 719_163;

/// Column names read by [`FrameFeed`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeedColumns {
    /// Trading day, as a polars `Date` or a `YYYY-MM-DD` string.
    pub date: String,
    /// Asset symbol.
    pub symbol: String,
    /// Cross-sectional score.
    pub score: String,
    /// Optional boolean tradability flag. Absent means every listed asset can trade.
    pub tradable: Option<String>,
}

impl Default for FeedColumns {
    fn default() -> Self {
        Self {
            date: "date".to_string(),
            symbol: "symbol".to_string(),
            score: "score".to_string(),
            tradable: Some("tradable".to_string()),
        }
    }
}

#[derive(Debug, Clone, Default)]
struct DayRows {
    assets: Vec<Asset>,
    scores: Vec<f64>,
    tradable: BTreeSet<Asset>,
}

/// Daily cross-sections indexed from a long-format frame.
///
/// Each row is one `(date, symbol, score, tradable)` observation. An asset missing from
/// a day's rows is outside that day's universe and cannot trade on it.
#[derive(Debug, Clone, Default)]
pub struct FrameFeed {
    days: BTreeMap<Date, DayRows>,
}

impl FrameFeed {
    /// Index a collected frame by day.
    ///
    /// Row order within a day is preserved as the universe order.
    ///
    /// # Errors
    /// Returns [`UtilsError`] if a column is missing, has an unusable type, or holds a
    /// null date, symbol or score.
    pub fn from_frame(df: &DataFrame, columns: &FeedColumns) -> Result<Self, UtilsError> {
        let dates = extract_dates(df, &columns.date)?;
        let symbols = extract_symbols(df, &columns.symbol)?;
        let scores = extract_scores(df, &columns.score)?;
        let tradable = match &columns.tradable {
            Some(name) if df.get_column_index(name).is_some() => extract_flags(df, name)?,
            _ => vec![true; df.height()],
        };

        let mut days: BTreeMap<Date, DayRows> = BTreeMap::new();
        let rows = dates.into_iter().zip(symbols).zip(scores).zip(tradable);
        for (((date, symbol), score), can_trade) in rows {
            let day = days.entry(date).or_default();
            let asset = Asset::new(symbol);
            if can_trade {
                day.tradable.insert(asset.clone());
            }
            day.assets.push(asset);
            day.scores.push(score);
        }

        debug!(rows = df.height(), days = days.len(), "indexed score frame");
        Ok(Self { days })
    }

    /// Collect a lazy frame and index it by day.
    ///
    /// # Errors
    /// See [`FrameFeed::from_frame`].
    pub fn from_lazy(lf: LazyFrame, columns: &FeedColumns) -> Result<Self, UtilsError> {
        let df = lf.collect()?;
        Self::from_frame(&df, columns)
    }

    /// Trading days in ascending order.
    pub fn dates(&self) -> impl Iterator<Item = Date> + '_ {
        self.days.keys().copied()
    }

    /// Universe members for `date`, in frame order.
    #[must_use]
    pub fn universe(&self, date: Date) -> Option<&[Asset]> {
        self.days.get(&date).map(|d| d.assets.as_slice())
    }

    /// Assets that can trade on `date`. Empty for unknown days.
    #[must_use]
    pub fn tradable(&self, date: Date) -> BTreeSet<Asset> {
        self.days.get(&date).map(|d| d.tradable.clone()).unwrap_or_default()
    }

    /// Number of trading days.
    #[must_use]
    pub fn len(&self) -> usize {
        self.days.len()
    }

    /// Check if empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.days.is_empty()
    }
}

impl FactorProvider for FrameFeed {
    fn scores(&self, date: Date) -> Result<ScoreVector, ProviderError> {
        let day = self.days.get(&date).ok_or(ProviderError::NoDataForDate(date))?;
        let pairs = day.assets.iter().cloned().zip(day.scores.iter().copied());
        Ok(ScoreVector::from_pairs(date, pairs)?)
    }
}

fn column<'a>(df: &'a DataFrame, name: &str) -> Result<&'a Column, UtilsError> {
    df.column(name).map_err(|_| UtilsError::MissingColumn(name.to_string()))
}

fn invalid_type(name: &str, expected: &'static str, actual: &DataType) -> UtilsError {
    UtilsError::InvalidColumnType { column: name.to_string(), expected, actual: actual.to_string() }
}

fn null_at(name: &str, row: usize) -> UtilsError {
    UtilsError::NullValue { column: name.to_string(), row }
}

fn extract_dates(df: &DataFrame, name: &str) -> Result<Vec<Date>, UtilsError> {
    let col = column(df, name)?;
    match col.dtype() {
        DataType::String => col
            .str()?
            .into_iter()
            .enumerate()
            .map(|(row, v)| {
                let raw = v.ok_or_else(|| null_at(name, row))?;
                NaiveDate::parse_from_str(raw, "%Y-%m-%d")
                    .map_err(|_| UtilsError::InvalidDate(raw.to_string()))
            })
            .collect(),
        DataType::Date => col
            .cast(&DataType::Int32)?
            .i32()?
            .into_iter()
            .enumerate()
            .map(|(row, v)| {
                let days = v.ok_or_else(|| null_at(name, row))?;
                days.checked_add(EPOCH_DAYS_FROM_CE)
                    .and_then(NaiveDate::from_num_days_from_ce_opt)
                    .ok_or_else(|| UtilsError::InvalidDate(format!("{days} days since epoch")))
            })
            .collect(),
        other => Err(invalid_type(name, "date or string", other)),
    }
}

fn extract_symbols(df: &DataFrame, name: &str) -> Result<Vec<String>, UtilsError> {
    let col = column(df, name)?;
    let values = col.str().map_err(|_| invalid_type(name, "string", col.dtype()))?;
    values
        .into_iter()
        .enumerate()
        .map(|(row, v)| v.map(str::to_string).ok_or_else(|| null_at(name, row)))
        .collect()
}

fn extract_scores(df: &DataFrame, name: &str) -> Result<Vec<f64>, UtilsError> {
    let col = column(df, name)?;
    match col.dtype() {
        DataType::Float64
        | DataType::Float32
        | DataType::Int64
        | DataType::Int32
        | DataType::UInt64
        | DataType::UInt32 => {}
        other => return Err(invalid_type(name, "numeric", other)),
    }

    col.cast(&DataType::Float64)?
        .f64()?
        .into_iter()
        .enumerate()
        .map(|(row, v)| v.ok_or_else(|| null_at(name, row)))
        .collect()
}

fn extract_flags(df: &DataFrame, name: &str) -> Result<Vec<bool>, UtilsError> {
    let col = column(df, name)?;
    let values = col.bool().map_err(|_| invalid_type(name, "boolean", col.dtype()))?;
    // A null flag means no tradability information, so no order can be placed.
    Ok(values.into_iter().map(|v| v.unwrap_or(false)).collect())
}
