//! Content-keyed memoization of enrichment results.

use std::sync::Arc;

use dashmap::DashMap;
use tracing::debug;

use crate::analysis::enrich;
use crate::error::CoreResult;
use crate::types::{EnrichedTable, StatementTable};

/// Memoizing wrapper around [`enrich`].
///
/// Keyed by [`StatementTable::content_key`], so re-processing a table with
/// identical content returns the cached result without recomputation.
/// Correctness never depends on the cache being present: the wrapped
/// function is pure, and errors are never cached.
#[derive(Debug, Default)]
pub struct CachedEnricher {
    cache: DashMap<u64, Arc<EnrichedTable>>,
}

impl CachedEnricher {
    /// Creates an empty enricher cache.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Enriches `table`, serving repeats of identical content from cache.
    pub fn enrich(&self, table: &StatementTable) -> CoreResult<Arc<EnrichedTable>> {
        let key = table.content_key();
        if let Some(cached) = self.cache.get(&key) {
            debug!(key, "enrichment cache hit");
            return Ok(Arc::clone(&cached));
        }

        debug!(key, "enrichment cache miss");
        let enriched = Arc::new(enrich(table)?);
        self.cache.insert(key, Arc::clone(&enriched));
        Ok(enriched)
    }

    /// Number of cached results.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cache.len()
    }

    /// Returns true if nothing has been cached yet.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cache.is_empty()
    }
}
