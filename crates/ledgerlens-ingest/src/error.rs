//! Ingestion error types.

use thiserror::Error;

/// A specialized Result type for ingestion operations.
pub type IngestResult<T> = Result<T, IngestError>;

/// Errors raised while reading a statement spreadsheet.
#[derive(Error, Debug)]
pub enum IngestError {
    /// The container could not be opened or parsed.
    #[error("Cannot read spreadsheet: {0}")]
    Spreadsheet(#[from] calamine::Error),

    /// The workbook has no worksheet, or the worksheet has no data rows.
    #[error("Spreadsheet has no data rows (expected a header row plus line items)")]
    EmptySheet,

    /// The worksheet does not have exactly three columns.
    #[error("Expected exactly {expected} columns (label | prior | current), found {found}")]
    ColumnCount {
        /// Number of columns required.
        expected: usize,
        /// Number of columns found in the worksheet.
        found: usize,
    },

    /// A value cell is not numeric.
    #[error("Non-numeric value in row {row}, column {column}: '{value}'")]
    NonNumericCell {
        /// One-based spreadsheet row of the offending cell.
        row: usize,
        /// One-based column of the offending cell.
        column: usize,
        /// Display form of the offending cell.
        value: String,
    },
}
