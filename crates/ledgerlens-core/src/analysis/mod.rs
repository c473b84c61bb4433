//! Statement analysis: enrichment, memoization, and ratio derivation.

mod enrich;
mod liquidity;
mod memo;

pub use enrich::{enrich, safe_denom, GROWTH_EPSILON};
pub use liquidity::{derive_liquidity, LiquiditySnapshot};
pub use memo::CachedEnricher;
