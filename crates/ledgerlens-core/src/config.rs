//! Analysis configuration.
//!
//! The one tunable is the pair of current-liability values. The accepted
//! statement layout carries three columns and no liabilities section, so
//! the current ratio's denominator has to come from outside the file. The
//! defaults (600 prior, 800 current) are placeholder figures carried over
//! from the tool this replaces; override them per run with a TOML file or
//! CLI flags until liabilities are sourced from a real statement.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{CoreError, CoreResult};

/// Placeholder prior-period current liabilities.
pub const DEFAULT_LIABILITIES_PRIOR: f64 = 600.0;

/// Placeholder current-period current liabilities.
pub const DEFAULT_LIABILITIES_CURRENT: f64 = 800.0;

/// Current liabilities for both periods.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Liabilities {
    /// Prior-period current liabilities.
    pub prior: f64,
    /// Current-period current liabilities.
    pub current: f64,
}

impl Default for Liabilities {
    fn default() -> Self {
        Self {
            prior: DEFAULT_LIABILITIES_PRIOR,
            current: DEFAULT_LIABILITIES_CURRENT,
        }
    }
}

/// Analysis configuration, loadable from a TOML file.
///
/// ```toml
/// [liabilities]
/// prior = 550.0
/// current = 720.0
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AnalysisConfig {
    /// Current liabilities for both periods.
    #[serde(default)]
    pub liabilities: Liabilities,
}

impl AnalysisConfig {
    /// Parses a configuration from TOML text.
    pub fn from_toml_str(text: &str) -> CoreResult<Self> {
        let config: Self =
            toml::from_str(text).map_err(|e| CoreError::config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Loads a configuration from a TOML file.
    pub fn load(path: impl AsRef<Path>) -> CoreResult<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|e| {
            CoreError::config(format!("cannot read {}: {e}", path.display()))
        })?;
        Self::from_toml_str(&text)
    }

    /// Rejects liability values the ratio derivation cannot divide by.
    pub fn validate(&self) -> CoreResult<()> {
        for (period, value) in [
            ("prior", self.liabilities.prior),
            ("current", self.liabilities.current),
        ] {
            if !value.is_finite() || value <= 0.0 {
                return Err(CoreError::config(format!(
                    "liabilities.{period} must be a positive number, got {value}"
                )));
            }
        }
        Ok(())
    }
}
