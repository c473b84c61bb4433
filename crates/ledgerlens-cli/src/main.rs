//! LedgerLens CLI - two-period financial statement analysis.
//!
//! # Usage
//!
//! ```bash
//! # Growth, composition, and current-ratio analysis
//! ledgerlens analyze statement.xlsx
//!
//! # Same, with liabilities from a config file
//! ledgerlens analyze statement.xlsx --config ledgerlens.toml
//!
//! # Analysis plus the commentary block
//! ledgerlens comment statement.xlsx
//!
//! # Machine-readable output
//! ledgerlens analyze statement.xlsx --format json
//! ```

use clap::Parser;

mod cli;
mod commands;
mod error;
mod output;
mod session;

use cli::{Cli, Commands};

fn main() {
    let cli = Cli::parse();

    // Initialize logging
    let filter = if cli.verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let format = cli.format;

    // Execute command; every error surfaces verbatim as an error banner.
    let result = match cli.command {
        Commands::Analyze(args) => commands::analyze::execute(args, format),
        Commands::Comment(args) => commands::comment::execute(args, format),
    };

    if let Err(err) = result {
        output::print_error(&format!("{err}"));
        std::process::exit(1);
    }
}
