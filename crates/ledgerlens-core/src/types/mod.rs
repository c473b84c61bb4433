//! Domain types for two-period financial statements.

mod row;
mod table;

pub use row::{EnrichedRow, StatementRow};
pub use table::{EnrichedTable, StatementTable, CURRENT_ASSETS_LABEL, TOTAL_ASSETS_LABEL};
