//! Statement enrichment: growth and composition columns.
//!
//! Given a three-column statement table, produce an enriched table with
//! three derived columns:
//!
//! ```text
//! growth_pct        = (current - prior) / safe_denom(prior) * 100
//! prior_share_pct   = prior   / total_assets_prior   * 100
//! current_share_pct = current / total_assets_current * 100
//! ```
//!
//! where `safe_denom(x)` substitutes ε = 1e-9 when the prior value is
//! zero, so a line item appearing from nothing reports a very large finite
//! growth instead of failing.
//!
//! The composition denominators come from the unique row whose label
//! contains [`TOTAL_ASSETS_LABEL`]; its absence is fatal.

use tracing::debug;

use crate::error::{CoreError, CoreResult};
use crate::types::{EnrichedRow, EnrichedTable, StatementTable, TOTAL_ASSETS_LABEL};

/// Substituted for a zero prior value in the growth denominator.
pub const GROWTH_EPSILON: f64 = 1e-9;

/// Returns `x`, or [`GROWTH_EPSILON`] when `x` is exactly zero.
#[must_use]
pub fn safe_denom(x: f64) -> f64 {
    if x == 0.0 {
        GROWTH_EPSILON
    } else {
        x
    }
}

/// Enriches a statement table with growth and composition columns.
///
/// Pure: no I/O, no side effects; identical input yields identical output.
///
/// # Errors
///
/// - [`CoreError::MissingReferenceRow`] when no row label contains the
///   total-assets substring. No partial table is produced.
/// - [`CoreError::AmbiguousRow`] when more than one row matches it.
/// - [`CoreError::ZeroTotalAssets`] when either period's total assets is
///   zero, since the composition shares would be undefined.
pub fn enrich(table: &StatementTable) -> CoreResult<EnrichedTable> {
    let totals = table
        .find_unique_row(TOTAL_ASSETS_LABEL)
        .map_err(|err| match err {
            CoreError::RowNotFound { .. } => CoreError::missing_reference_row(TOTAL_ASSETS_LABEL),
            other => other,
        })?;

    let total_assets_prior = totals.prior_value;
    let total_assets_current = totals.current_value;
    if total_assets_prior == 0.0 {
        return Err(CoreError::ZeroTotalAssets { period: "prior" });
    }
    if total_assets_current == 0.0 {
        return Err(CoreError::ZeroTotalAssets { period: "current" });
    }

    debug!(
        rows = table.len(),
        total_assets_prior, total_assets_current, "enriching statement table"
    );

    let rows = table
        .rows()
        .iter()
        .map(|row| EnrichedRow {
            item_label: row.item_label.clone(),
            prior_value: row.prior_value,
            current_value: row.current_value,
            growth_pct: (row.current_value - row.prior_value) / safe_denom(row.prior_value)
                * 100.0,
            prior_share_pct: row.prior_value / total_assets_prior * 100.0,
            current_share_pct: row.current_value / total_assets_current * 100.0,
        })
        .collect();

    Ok(EnrichedTable::new(rows))
}
