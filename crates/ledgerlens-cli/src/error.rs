//! CLI error types.

use thiserror::Error;

/// CLI error type.
#[derive(Debug, Error)]
pub enum CliError {
    /// Invalid liability override flag.
    #[error("Invalid liability value: {0}. Must be a positive number.")]
    InvalidLiability(f64),

    /// Analysis error from the core library.
    #[error(transparent)]
    Core(#[from] ledgerlens_core::CoreError),

    /// Ingestion error.
    #[error(transparent)]
    Ingest(#[from] ledgerlens_ingest::IngestError),
}

/// CLI result type.
pub type CliResult<T> = Result<T, CliError>;
