//! Statement row types.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A single line item of a two-period financial statement.
///
/// Rows are read positionally from the uploaded spreadsheet: the first
/// column is the item label, the second the prior-period value, the third
/// the current-period value, whatever the original headers said.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StatementRow {
    /// Line item label (e.g. "TÀI SẢN NGẮN HẠN").
    pub item_label: String,
    /// Value for the prior period.
    pub prior_value: f64,
    /// Value for the current period.
    pub current_value: f64,
}

impl StatementRow {
    /// Creates a new statement row.
    #[must_use]
    pub fn new(item_label: impl Into<String>, prior_value: f64, current_value: f64) -> Self {
        Self {
            item_label: item_label.into(),
            prior_value,
            current_value,
        }
    }

    /// Returns true if this row's label contains `needle`, case-insensitively.
    #[must_use]
    pub fn label_contains(&self, needle: &str) -> bool {
        self.item_label
            .to_lowercase()
            .contains(&needle.to_lowercase())
    }
}

impl fmt::Display for StatementRow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}: {} -> {}",
            self.item_label, self.prior_value, self.current_value
        )
    }
}

/// A statement row enriched with growth and composition columns.
///
/// Derived fields are computed once by the enrichment step and never
/// mutated afterward.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EnrichedRow {
    /// Line item label.
    pub item_label: String,
    /// Value for the prior period.
    pub prior_value: f64,
    /// Value for the current period.
    pub current_value: f64,
    /// Year-over-year growth, in percent.
    pub growth_pct: f64,
    /// Share of prior-period total assets, in percent.
    pub prior_share_pct: f64,
    /// Share of current-period total assets, in percent.
    pub current_share_pct: f64,
}

impl EnrichedRow {
    /// Returns true if this row's label contains `needle`, case-insensitively.
    #[must_use]
    pub fn label_contains(&self, needle: &str) -> bool {
        self.item_label
            .to_lowercase()
            .contains(&needle.to_lowercase())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_label_contains_is_case_insensitive() {
        let row = StatementRow::new("Tổng cộng tài sản", 1000.0, 2000.0);
        assert!(row.label_contains("TỔNG CỘNG TÀI SẢN"));
        assert!(row.label_contains("tài sản"));
        assert!(!row.label_contains("NỢ NGẮN HẠN"));
    }
}
