//! Comment command implementation.
//!
//! Runs the full analysis, then renders the commentary block. The
//! narrative comes from the [`CommentaryGenerator`] seam; the shipped
//! implementation substitutes the figures into a fixed template.

use anyhow::Result;
use clap::Args;
use serde::Serialize;

use ledgerlens_core::commentary::{CommentaryGenerator, CommentaryInput, TemplateCommentary};

use crate::cli::OutputFormat;
use crate::commands::analyze::render_analysis;
use crate::commands::{load_session, InputArgs};
use crate::output::{print_header, print_info, print_warning};

/// Arguments for the comment command.
#[derive(Args, Debug)]
pub struct CommentArgs {
    #[command(flatten)]
    pub input: InputArgs,
}

/// Execute the comment command.
pub fn execute(args: CommentArgs, format: OutputFormat) -> Result<()> {
    let session = load_session(&args.input)?;

    let Some(snapshot) = &session.liquidity else {
        render_analysis(&session, format)?;
        print_warning("Commentary needs the current-assets figures; section skipped.");
        return Ok(());
    };

    let input = CommentaryInput::from(snapshot);
    let generator = TemplateCommentary;
    let text = generator.commentary(&input)?;

    match format {
        OutputFormat::Table => {
            render_analysis(&session, format)?;
            print_info("Generating commentary...");
            print_header("Commentary");
            println!("{text}");
        }
        OutputFormat::Json => {
            let report = CommentaryReport {
                input,
                commentary: &text,
            };
            println!("{}", serde_json::to_string_pretty(&report)?);
        }
        OutputFormat::Csv | OutputFormat::Minimal => {
            println!("{text}");
        }
    }

    Ok(())
}

#[derive(Serialize)]
struct CommentaryReport<'a> {
    input: CommentaryInput,
    commentary: &'a str,
}
