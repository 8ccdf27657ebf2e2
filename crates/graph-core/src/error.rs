// File: crates/graph-core/src/error.rs
// Summary: Error types for table parsing, pivoting, menu selection and clipboard export.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ChartError {
    #[error("invalid CSV: {0}")]
    Csv(#[from] csv::Error),

    #[error("expected at least 3 columns (date, category, value), found {found}")]
    TooFewColumns { found: usize },

    #[error("row {row}: value {value:?} in column '{column}' is not numeric")]
    NotNumeric { row: usize, column: String, value: String },

    #[error("no data rows to plot")]
    NoRows,

    #[error("invalid {menu} selection {input:?}")]
    InvalidSelection { menu: &'static str, input: String },

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

#[derive(Debug, Error)]
pub enum ClipboardError {
    #[error("clipboard copy is not supported on {0}")]
    Unsupported(&'static str),

    #[error("failed to launch {program}: {source}")]
    Spawn {
        program: &'static str,
        #[source]
        source: std::io::Error,
    },

    #[error(transparent)]
    Io(#[from] std::io::Error),
}
