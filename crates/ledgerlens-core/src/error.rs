//! Error types for the LedgerLens core library.
//!
//! This module defines the error types used throughout the analysis
//! pipeline, providing structured error handling with context.

use thiserror::Error;

/// A specialized Result type for LedgerLens core operations.
pub type CoreResult<T> = Result<T, CoreError>;

/// The main error type for statement analysis operations.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CoreError {
    /// The reference row used as the composition denominator is absent.
    ///
    /// Fatal for the enrichment step: no output table is produced.
    #[error("Reference row not found: no line item contains '{label}'")]
    MissingReferenceRow {
        /// The label substring that was searched for.
        label: String,
    },

    /// A row lookup found no matching line item.
    #[error("Row not found: no line item contains '{label}'")]
    RowNotFound {
        /// The label substring that was searched for.
        label: String,
    },

    /// A row lookup matched more than one line item.
    #[error("Ambiguous row: {count} line items contain '{label}', expected exactly one")]
    AmbiguousRow {
        /// The label substring that was searched for.
        label: String,
        /// Number of rows that matched.
        count: usize,
    },

    /// Total assets is zero for a period, so composition shares are undefined.
    #[error("Total assets for the {period} period is zero; composition shares are undefined")]
    ZeroTotalAssets {
        /// Which period had the zero denominator ("prior" or "current").
        period: &'static str,
    },

    /// Current liabilities for a period is zero, so the current ratio is undefined.
    #[error("Current liabilities for the {period} period is zero; current ratio is undefined")]
    ZeroLiabilities {
        /// Which period had the zero denominator ("prior" or "current").
        period: &'static str,
    },

    /// Configuration error.
    #[error("Configuration error: {reason}")]
    Config {
        /// Description of the configuration error.
        reason: String,
    },
}

impl CoreError {
    /// Creates a missing reference row error.
    #[must_use]
    pub fn missing_reference_row(label: impl Into<String>) -> Self {
        Self::MissingReferenceRow {
            label: label.into(),
        }
    }

    /// Creates a row not found error.
    #[must_use]
    pub fn row_not_found(label: impl Into<String>) -> Self {
        Self::RowNotFound {
            label: label.into(),
        }
    }

    /// Creates an ambiguous row error.
    #[must_use]
    pub fn ambiguous_row(label: impl Into<String>, count: usize) -> Self {
        Self::AmbiguousRow {
            label: label.into(),
            count,
        }
    }

    /// Creates a configuration error.
    #[must_use]
    pub fn config(reason: impl Into<String>) -> Self {
        Self::Config {
            reason: reason.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_reference_row_display() {
        let err = CoreError::missing_reference_row("TỔNG CỘNG TÀI SẢN");
        assert!(err.to_string().contains("TỔNG CỘNG TÀI SẢN"));
        assert!(err.to_string().contains("Reference row not found"));
    }

    #[test]
    fn test_ambiguous_row_display() {
        let err = CoreError::ambiguous_row("TÀI SẢN", 3);
        assert!(err.to_string().contains("3 line items"));
    }
}
