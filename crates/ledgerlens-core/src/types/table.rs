//! Statement table types.

use serde::{Deserialize, Serialize};
use std::hash::{Hash, Hasher};

use crate::error::{CoreError, CoreResult};

use super::{EnrichedRow, StatementRow};

/// Label substring identifying the total-assets reference row.
pub const TOTAL_ASSETS_LABEL: &str = "TỔNG CỘNG TÀI SẢN";

/// Label substring identifying the current-assets row.
pub const CURRENT_ASSETS_LABEL: &str = "TÀI SẢN NGẮN HẠN";

/// An ordered two-period financial statement.
///
/// The table is immutable once built: ingestion produces it, the
/// enrichment step consumes it, and a new upload fully replaces it.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct StatementTable {
    rows: Vec<StatementRow>,
}

impl StatementTable {
    /// Creates a table from its rows.
    #[must_use]
    pub fn new(rows: Vec<StatementRow>) -> Self {
        Self { rows }
    }

    /// Returns the rows in statement order.
    #[must_use]
    pub fn rows(&self) -> &[StatementRow] {
        &self.rows
    }

    /// Returns the number of line items.
    #[must_use]
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Returns true if the table has no line items.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Finds the unique row whose label contains `needle` (case-insensitive).
    ///
    /// Fails loudly in both degenerate cases: zero matches yields
    /// [`CoreError::RowNotFound`], more than one yields
    /// [`CoreError::AmbiguousRow`]. Never silently takes the first match.
    pub fn find_unique_row(&self, needle: &str) -> CoreResult<&StatementRow> {
        find_unique(self.rows.iter(), needle, |r| r.label_contains(needle))
    }

    /// Returns a stable 64-bit key over the table's full content.
    ///
    /// Two tables with identical labels and values (bit-for-bit) produce
    /// the same key, so re-uploads of the same file hit the memoization
    /// cache instead of recomputing.
    #[must_use]
    pub fn content_key(&self) -> u64 {
        let mut hasher = std::collections::hash_map::DefaultHasher::new();
        for row in &self.rows {
            row.item_label.hash(&mut hasher);
            row.prior_value.to_bits().hash(&mut hasher);
            row.current_value.to_bits().hash(&mut hasher);
        }
        hasher.finish()
    }
}

/// A statement table enriched with growth and composition columns.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EnrichedTable {
    rows: Vec<EnrichedRow>,
}

impl EnrichedTable {
    /// Creates an enriched table from its rows.
    #[must_use]
    pub fn new(rows: Vec<EnrichedRow>) -> Self {
        Self { rows }
    }

    /// Returns the rows in statement order.
    #[must_use]
    pub fn rows(&self) -> &[EnrichedRow] {
        &self.rows
    }

    /// Returns the number of line items.
    #[must_use]
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Returns true if the table has no line items.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Finds the unique row whose label contains `needle` (case-insensitive).
    ///
    /// Same loud-failure contract as [`StatementTable::find_unique_row`].
    pub fn find_unique_row(&self, needle: &str) -> CoreResult<&EnrichedRow> {
        find_unique(self.rows.iter(), needle, |r| r.label_contains(needle))
    }
}

/// Finds exactly one item satisfying `matches`, erroring on zero or many.
fn find_unique<'a, T, I, F>(items: I, needle: &str, matches: F) -> CoreResult<&'a T>
where
    I: Iterator<Item = &'a T>,
    F: Fn(&T) -> bool,
{
    let mut found: Option<&T> = None;
    let mut count = 0usize;
    for item in items {
        if matches(item) {
            count += 1;
            if found.is_none() {
                found = Some(item);
            }
        }
    }
    match (found, count) {
        (Some(item), 1) => Ok(item),
        (None, _) => Err(CoreError::row_not_found(needle)),
        (_, n) => Err(CoreError::ambiguous_row(needle, n)),
    }
}
