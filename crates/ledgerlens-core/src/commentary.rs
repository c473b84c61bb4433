//! Commentary generation.
//!
//! The commentary block is a seam for an external language-model service
//! that is not wired up yet. [`CommentaryGenerator`] is the seam;
//! [`TemplateCommentary`] is the shipped implementation, substituting the
//! computed figures into a fixed narrative.

use serde::{Deserialize, Serialize};

use crate::analysis::LiquiditySnapshot;
use crate::error::CoreResult;

/// Figures the commentary is built from.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CommentaryInput {
    /// Year-over-year growth of current assets, in percent.
    pub current_assets_growth_pct: f64,
    /// Current ratio for the prior period.
    pub prior_ratio: f64,
    /// Current ratio for the current period.
    pub current_ratio: f64,
}

impl From<&LiquiditySnapshot> for CommentaryInput {
    fn from(snapshot: &LiquiditySnapshot) -> Self {
        Self {
            current_assets_growth_pct: snapshot.current_assets_growth_pct,
            prior_ratio: snapshot.prior_ratio,
            current_ratio: snapshot.current_ratio,
        }
    }
}

/// Produces a commentary text from the computed figures.
///
/// Implementations may call out to an external service; the default
/// [`TemplateCommentary`] does not.
pub trait CommentaryGenerator: Send + Sync {
    /// Renders the commentary for the given figures.
    fn commentary(&self, input: &CommentaryInput) -> CoreResult<String>;
}

/// Fixed-narrative commentary with the figures substituted in.
#[derive(Debug, Clone, Copy, Default)]
pub struct TemplateCommentary;

impl CommentaryGenerator for TemplateCommentary {
    fn commentary(&self, input: &CommentaryInput) -> CoreResult<String> {
        Ok(format!(
            "[TEMPLATE RESULT]\n\n\
             Current assets grew {growth:.2}% year over year. The current \
             ratio moved from {prior:.2} to {current:.2}, a signal on the \
             company's short-term solvency. The quality of the current \
             assets should be examined before drawing conclusions about \
             liquidity.",
            growth = input.current_assets_growth_pct,
            prior = input.prior_ratio,
            current = input.current_ratio,
        ))
    }
}
