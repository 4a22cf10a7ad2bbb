// ==========================================
// Business Analytics - extraction errors
// ==========================================
// File-level failures only. Row-level problems never become errors:
// cell coercion is total and invalid rows are dropped.
// ==========================================

use thiserror::Error;

/// Extraction failure surfaced to the load caller.
#[derive(Error, Debug)]
pub enum ExtractError {
    #[error("file not found: {0}")]
    FileNotFound(String),

    #[error("unsupported file format: {0} (expected .xlsx/.xls/.csv)")]
    UnsupportedFormat(String),

    #[error("failed to read file: {0}")]
    FileReadError(String),

    #[error("failed to parse workbook: {0}")]
    WorkbookParseError(String),

    #[error("failed to parse CSV: {0}")]
    CsvParseError(String),

    #[error("workbook has no worksheets")]
    EmptyWorkbook,

    #[error("missing column for {domain}.{field}: no header named {header:?} in row {header_row}")]
    MissingColumn {
        domain: &'static str,
        field: &'static str,
        header: String,
        header_row: usize,
    },

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl From<std::io::Error> for ExtractError {
    fn from(err: std::io::Error) -> Self {
        ExtractError::FileReadError(err.to_string())
    }
}

impl From<csv::Error> for ExtractError {
    fn from(err: csv::Error) -> Self {
        ExtractError::CsvParseError(err.to_string())
    }
}

impl From<calamine::Error> for ExtractError {
    fn from(err: calamine::Error) -> Self {
        ExtractError::WorkbookParseError(err.to_string())
    }
}

/// Result alias for the extraction layer.
pub type ExtractResult<T> = Result<T, ExtractError>;
