//! Error types for data utilities.

/// Errors that can occur while loading daily data from a frame.
#[derive(Debug, thiserror::Error)]
pub enum UtilsError {
    /// Polars error.
    #[error("polars error: {0}")]
    Polars(#[from] polars::error::PolarsError),

    /// Missing column.
    #[error("missing column: {0}")]
    MissingColumn(String),

    /// Column has a type that cannot be interpreted.
    #[error("column {column} has type {actual}, expected {expected}")]
    InvalidColumnType {
        /// Column name.
        column: String,
        /// Accepted types.
        expected: &'static str,
        /// Actual type.
        actual: String,
    },

    /// Required value is null.
    #[error("null value in column {column} at row {row}")]
    NullValue {
        /// Column name.
        column: String,
        /// Row index.
        row: usize,
    },

    /// Date string could not be parsed.
    #[error("invalid date: {0}")]
    InvalidDate(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        let err = UtilsError::NullValue { column: "score".to_string(), row: 4 };
        assert_eq!(err.to_string(), "null value in column score at row 4");

        let err = UtilsError::InvalidDate("2013-13-01".to_string());
        assert!(err.to_string().contains("2013-13-01"));
    }
}
