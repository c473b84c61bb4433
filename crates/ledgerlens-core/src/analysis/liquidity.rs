//! Current-ratio derivation.
//!
//! ```text
//! current_ratio = current_assets / current_liabilities
//! ```
//!
//! Current assets come from the unique row whose label contains
//! [`CURRENT_ASSETS_LABEL`]; current liabilities are an external input
//! (see [`crate::config::Liabilities`]) because the statement layout this
//! tool accepts never carries them.

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::config::Liabilities;
use crate::error::{CoreError, CoreResult};
use crate::types::{EnrichedTable, CURRENT_ASSETS_LABEL};

/// Current ratio for both periods, plus the period-over-period change.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LiquiditySnapshot {
    /// Current ratio for the prior period.
    pub prior_ratio: f64,
    /// Current ratio for the current period.
    pub current_ratio: f64,
    /// `current_ratio - prior_ratio`.
    pub delta: f64,
    /// Year-over-year growth of current assets, in percent.
    pub current_assets_growth_pct: f64,
}

/// Derives the current ratio for both periods.
///
/// Returns `Ok(None)` when no current-assets row exists: the liquidity
/// section is skipped and the caller reports a warning, while the rest of
/// the analysis still renders.
///
/// # Errors
///
/// - [`CoreError::AmbiguousRow`] when more than one row matches the
///   current-assets label.
/// - [`CoreError::ZeroLiabilities`] when either configured liability value
///   is zero.
pub fn derive_liquidity(
    table: &EnrichedTable,
    liabilities: &Liabilities,
) -> CoreResult<Option<LiquiditySnapshot>> {
    let current_assets = match table.find_unique_row(CURRENT_ASSETS_LABEL) {
        Ok(row) => row,
        Err(CoreError::RowNotFound { .. }) => {
            warn!(
                label = CURRENT_ASSETS_LABEL,
                "no current-assets row; skipping liquidity section"
            );
            return Ok(None);
        }
        Err(err) => return Err(err),
    };

    if liabilities.prior == 0.0 {
        return Err(CoreError::ZeroLiabilities { period: "prior" });
    }
    if liabilities.current == 0.0 {
        return Err(CoreError::ZeroLiabilities { period: "current" });
    }

    let prior_ratio = current_assets.prior_value / liabilities.prior;
    let current_ratio = current_assets.current_value / liabilities.current;

    Ok(Some(LiquiditySnapshot {
        prior_ratio,
        current_ratio,
        delta: current_ratio - prior_ratio,
        current_assets_growth_pct: current_assets.growth_pct,
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::enrich;
    use crate::types::{StatementRow, StatementTable};
    use approx::assert_relative_eq;

    fn enriched() -> EnrichedTable {
        let table = StatementTable::new(vec![
            StatementRow::new("TỔNG CỘNG TÀI SẢN", 1000.0, 2000.0),
            StatementRow::new("TÀI SẢN NGẮN HẠN", 400.0, 1200.0),
        ]);
        enrich(&table).unwrap()
    }

    #[test]
    fn test_ratios_with_placeholder_liabilities() {
        let snapshot = derive_liquidity(&enriched(), &Liabilities::default())
            .unwrap()
            .expect("current-assets row present");

        // 400 / 600 and 1200 / 800 with the placeholder liabilities.
        assert_relative_eq!(snapshot.prior_ratio, 0.6666666666666666, epsilon = 1e-12);
        assert_relative_eq!(snapshot.current_ratio, 1.5, epsilon = 1e-12);
        assert_relative_eq!(snapshot.delta, 0.8333333333333334, epsilon = 1e-12);
        assert_relative_eq!(snapshot.current_assets_growth_pct, 200.0, epsilon = 1e-9);
    }

    #[test]
    fn test_missing_current_assets_row_is_soft() {
        let table = StatementTable::new(vec![StatementRow::new(
            "TỔNG CỘNG TÀI SẢN",
            1000.0,
            2000.0,
        )]);
        let enriched = enrich(&table).unwrap();
        let snapshot = derive_liquidity(&enriched, &Liabilities::default()).unwrap();
        assert!(snapshot.is_none());
    }

    #[test]
    fn test_zero_liabilities_is_rejected() {
        let liabilities = Liabilities {
            prior: 0.0,
            current: 800.0,
        };
        let err = derive_liquidity(&enriched(), &liabilities).unwrap_err();
        assert_eq!(err, CoreError::ZeroLiabilities { period: "prior" });
    }
}
