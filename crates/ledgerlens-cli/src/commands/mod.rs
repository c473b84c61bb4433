//! CLI command implementations.

pub mod analyze;
pub mod comment;

// Re-export submodules for convenience
pub use analyze::AnalyzeArgs;
pub use comment::CommentArgs;

use std::path::PathBuf;

use clap::Args;

use ledgerlens_core::config::AnalysisConfig;
use ledgerlens_ingest::read_statement;

use crate::error::{CliError, CliResult};
use crate::session::Session;

/// Input arguments shared by the statement-processing commands.
#[derive(Args, Debug)]
pub struct InputArgs {
    /// Statement spreadsheet (.xlsx or .xls): label | prior | current
    pub file: PathBuf,

    /// TOML file with analysis settings (current liabilities)
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Override prior-period current liabilities
    #[arg(long)]
    pub liabilities_prior: Option<f64>,

    /// Override current-period current liabilities
    #[arg(long)]
    pub liabilities_current: Option<f64>,
}

/// Resolves the analysis configuration: flags beat the config file, which
/// beats the built-in placeholder defaults.
pub fn resolve_config(args: &InputArgs) -> CliResult<AnalysisConfig> {
    let mut config = match &args.config {
        Some(path) => AnalysisConfig::load(path)?,
        None => AnalysisConfig::default(),
    };

    if let Some(prior) = args.liabilities_prior {
        validate_liability(prior)?;
        config.liabilities.prior = prior;
    }
    if let Some(current) = args.liabilities_current {
        validate_liability(current)?;
        config.liabilities.current = current;
    }

    config.validate()?;
    Ok(config)
}

fn validate_liability(value: f64) -> CliResult<f64> {
    if !value.is_finite() || value <= 0.0 {
        return Err(CliError::InvalidLiability(value));
    }
    Ok(value)
}

/// Ingests the statement and builds the session for one invocation.
pub fn load_session(args: &InputArgs) -> CliResult<Session> {
    let config = resolve_config(args)?;
    let statement = read_statement(&args.file)?;
    Ok(Session::build(&statement, &config)?)
}
