//! Analyze command implementation.
//!
//! Renders the enriched statement table and the current-ratio metrics.

use anyhow::Result;
use clap::Args;
use serde::Serialize;
use tabled::Tabled;

use ledgerlens_core::types::EnrichedRow;

use crate::cli::OutputFormat;
use crate::commands::{load_session, InputArgs};
use crate::output::{
    format_grouped, format_pct, format_ratio, print_header, print_metric, print_success,
    print_warning,
};
use crate::session::Session;

/// Arguments for the analyze command.
#[derive(Args, Debug)]
pub struct AnalyzeArgs {
    #[command(flatten)]
    pub input: InputArgs,
}

/// Execute the analyze command.
pub fn execute(args: AnalyzeArgs, format: OutputFormat) -> Result<()> {
    let session = load_session(&args.input)?;

    if format == OutputFormat::Table {
        print_success(&format!(
            "Loaded {} ({} line items)",
            args.input.file.display(),
            session.table.len()
        ));
    }

    render_analysis(&session, format)
}

/// Renders the enriched table, metrics, and accumulated warnings.
pub fn render_analysis(session: &Session, format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Table => {
            print_header("Growth & Composition");
            render_table(session);
            render_metrics(session);
            for warning in &session.warnings {
                print_warning(warning);
            }
        }
        OutputFormat::Json => {
            let report = JsonReport {
                rows: session.table.rows(),
                liquidity: session.liquidity.as_ref().map(LiquidityJson::from),
                warnings: &session.warnings,
            };
            println!("{}", serde_json::to_string_pretty(&report)?);
        }
        OutputFormat::Csv => {
            let mut wtr = csv::Writer::from_writer(std::io::stdout());
            for row in session.table.rows() {
                wtr.serialize(row)?;
            }
            wtr.flush()?;
        }
        OutputFormat::Minimal => match &session.liquidity {
            Some(snapshot) => println!(
                "current_ratio_prior={:.4} current_ratio_current={:.4} delta={:+.4}",
                snapshot.prior_ratio, snapshot.current_ratio, snapshot.delta
            ),
            None => println!("rows={}", session.table.len()),
        },
    }
    Ok(())
}

fn render_table(session: &Session) {
    let rows: Vec<DisplayRow> = session.table.rows().iter().map(DisplayRow::from).collect();
    let table = tabled::Table::new(&rows)
        .with(tabled::settings::Style::rounded())
        .to_string();
    println!("{}", table);
}

fn render_metrics(session: &Session) {
    let Some(snapshot) = &session.liquidity else {
        return;
    };

    print_header("Current Ratio");
    print_metric(
        "Current Ratio (prior year)",
        &format_ratio(snapshot.prior_ratio),
        None,
    );
    print_metric(
        "Current Ratio (current year)",
        &format_ratio(snapshot.current_ratio),
        Some(snapshot.delta),
    );
}

/// One enriched row, formatted for table display.
#[derive(Tabled)]
struct DisplayRow {
    #[tabled(rename = "Line Item")]
    item: String,
    #[tabled(rename = "Prior")]
    prior: String,
    #[tabled(rename = "Current")]
    current: String,
    #[tabled(rename = "Growth")]
    growth: String,
    #[tabled(rename = "Prior Share")]
    prior_share: String,
    #[tabled(rename = "Current Share")]
    current_share: String,
}

impl From<&EnrichedRow> for DisplayRow {
    fn from(row: &EnrichedRow) -> Self {
        Self {
            item: row.item_label.clone(),
            prior: format_grouped(row.prior_value),
            current: format_grouped(row.current_value),
            growth: format_pct(row.growth_pct),
            prior_share: format_pct(row.prior_share_pct),
            current_share: format_pct(row.current_share_pct),
        }
    }
}

#[derive(Serialize)]
struct JsonReport<'a> {
    rows: &'a [EnrichedRow],
    liquidity: Option<LiquidityJson>,
    warnings: &'a [String],
}

#[derive(Serialize)]
struct LiquidityJson {
    prior_ratio: f64,
    current_ratio: f64,
    delta: f64,
}

impl From<&ledgerlens_core::analysis::LiquiditySnapshot> for LiquidityJson {
    fn from(s: &ledgerlens_core::analysis::LiquiditySnapshot) -> Self {
        Self {
            prior_ratio: s.prior_ratio,
            current_ratio: s.current_ratio,
            delta: s.delta,
        }
    }
}
