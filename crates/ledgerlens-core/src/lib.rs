//! # LedgerLens Core
//!
//! Types and analysis logic for two-period financial statements.
//!
//! This crate provides the building blocks behind the LedgerLens tool:
//!
//! - **Types**: [`StatementTable`] and its enriched counterpart
//! - **Analysis**: growth and composition enrichment, the current-ratio
//!   derivation, and content-keyed memoization
//! - **Configuration**: the external current-liabilities input
//! - **Commentary**: a pluggable narrative generator with a template stub
//!
//! ## Example
//!
//! ```rust
//! use ledgerlens_core::analysis::{derive_liquidity, enrich};
//! use ledgerlens_core::config::Liabilities;
//! use ledgerlens_core::types::{StatementRow, StatementTable};
//!
//! let table = StatementTable::new(vec![
//!     StatementRow::new("TỔNG CỘNG TÀI SẢN", 1000.0, 2000.0),
//!     StatementRow::new("TÀI SẢN NGẮN HẠN", 400.0, 1200.0),
//! ]);
//!
//! let enriched = enrich(&table).unwrap();
//! assert_eq!(enriched.rows()[1].growth_pct, 200.0);
//!
//! let liquidity = derive_liquidity(&enriched, &Liabilities::default())
//!     .unwrap()
//!     .unwrap();
//! assert_eq!(liquidity.current_ratio, 1.5);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::must_use_candidate)]

pub mod analysis;
pub mod commentary;
pub mod config;
pub mod error;
pub mod types;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::analysis::{derive_liquidity, enrich, CachedEnricher, LiquiditySnapshot};
    pub use crate::commentary::{CommentaryGenerator, CommentaryInput, TemplateCommentary};
    pub use crate::config::{AnalysisConfig, Liabilities};
    pub use crate::error::{CoreError, CoreResult};
    pub use crate::types::{
        EnrichedRow, EnrichedTable, StatementRow, StatementTable, CURRENT_ASSETS_LABEL,
        TOTAL_ASSETS_LABEL,
    };
}

// Re-export commonly used items at crate root
pub use error::{CoreError, CoreResult};
pub use types::{EnrichedTable, StatementTable};
