//! Per-invocation session state.

use std::sync::Arc;

use ledgerlens_core::analysis::{derive_liquidity, CachedEnricher, LiquiditySnapshot};
use ledgerlens_core::config::AnalysisConfig;
use ledgerlens_core::types::{EnrichedTable, StatementTable, CURRENT_ASSETS_LABEL};
use ledgerlens_core::CoreResult;

/// State for one analysis pass, passed explicitly into render calls.
///
/// One invocation ingests one file, builds one session, renders it, and
/// exits; a new invocation starts from scratch. Nothing is module-level.
#[derive(Debug)]
pub struct Session {
    /// The enriched statement table.
    pub table: Arc<EnrichedTable>,
    /// Liquidity snapshot, absent when the statement has no
    /// current-assets row.
    pub liquidity: Option<LiquiditySnapshot>,
    /// Non-fatal problems accumulated while building the session.
    pub warnings: Vec<String>,
}

impl Session {
    /// Builds a session from an ingested statement.
    ///
    /// Fatal analysis errors (missing or ambiguous reference row, zero
    /// denominators) propagate; a missing current-assets row only records
    /// a warning.
    pub fn build(statement: &StatementTable, config: &AnalysisConfig) -> CoreResult<Self> {
        let enricher = CachedEnricher::new();
        let table = enricher.enrich(statement)?;

        let mut warnings = Vec::new();
        let liquidity = derive_liquidity(&table, &config.liabilities)?;
        if liquidity.is_none() {
            warnings.push(format!(
                "No line item contains '{CURRENT_ASSETS_LABEL}'; skipping the current-ratio section."
            ));
        }

        Ok(Self {
            table,
            liquidity,
            warnings,
        })
    }
}
