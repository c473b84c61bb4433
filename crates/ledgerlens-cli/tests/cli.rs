//! End-to-end CLI tests over the shared spreadsheet fixtures.

use std::io::Write;

use assert_cmd::Command;
use predicates::prelude::*;

/// Path to the shared spreadsheet fixtures.
fn fixture(name: &str) -> String {
    format!("{}/../../tests/fixtures/{name}", env!("CARGO_MANIFEST_DIR"))
}

fn ledgerlens() -> Command {
    Command::cargo_bin("ledgerlens").unwrap()
}

#[test]
fn analyze_renders_table_metrics_and_success_banner() {
    ledgerlens()
        .args(["analyze", &fixture("statement.xlsx")])
        .assert()
        .success()
        .stdout(predicate::str::contains("Loaded"))
        .stdout(predicate::str::contains("TỔNG CỘNG TÀI SẢN"))
        .stdout(predicate::str::contains("1,000"))
        .stdout(predicate::str::contains("200.00%"))
        .stdout(predicate::str::contains("Current Ratio"))
        .stdout(predicate::str::contains("0.67x"))
        .stdout(predicate::str::contains("1.50x"))
        .stdout(predicate::str::contains("+0.83"));
}

#[test]
fn analyze_json_reports_rows_and_liquidity() {
    ledgerlens()
        .args(["analyze", &fixture("statement.xlsx"), "--format", "json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"growth_pct\": 200.0"))
        .stdout(predicate::str::contains("\"prior_share_pct\": 40.0"))
        .stdout(predicate::str::contains("\"current_share_pct\": 60.0"))
        .stdout(predicate::str::contains("\"current_ratio\": 1.5"));
}

#[test]
fn analyze_minimal_prints_the_ratio_line() {
    ledgerlens()
        .args(["analyze", &fixture("statement.xlsx"), "--format", "minimal"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "current_ratio_prior=0.6667 current_ratio_current=1.5000 delta=+0.8333",
        ));
}

#[test]
fn missing_total_assets_row_is_a_fatal_error() {
    ledgerlens()
        .args(["analyze", &fixture("missing_total.xlsx")])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Reference row not found"))
        .stdout(predicate::str::contains("TÀI SẢN NGẮN HẠN").not());
}

#[test]
fn missing_current_assets_row_only_warns() {
    ledgerlens()
        .args(["analyze", &fixture("missing_current_assets.xlsx")])
        .assert()
        .success()
        .stdout(predicate::str::contains("TỔNG CỘNG TÀI SẢN"))
        .stderr(predicate::str::contains("skipping the current-ratio section"));
}

#[test]
fn wrong_column_count_is_an_ingestion_error() {
    ledgerlens()
        .args(["analyze", &fixture("bad_columns.xlsx")])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Expected exactly 3 columns"));
}

#[test]
fn non_numeric_cell_is_reported_verbatim() {
    ledgerlens()
        .args(["analyze", &fixture("non_numeric.xlsx")])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Non-numeric value in row 2"));
}

#[test]
fn comment_renders_the_commentary_block() {
    ledgerlens()
        .args(["comment", &fixture("statement.xlsx")])
        .assert()
        .success()
        .stdout(predicate::str::contains("Commentary"))
        .stdout(predicate::str::contains("Current assets grew 200.00%"))
        .stdout(predicate::str::contains("0.67 to 1.50"));
}

#[test]
fn comment_without_current_assets_skips_the_block() {
    ledgerlens()
        .args(["comment", &fixture("missing_current_assets.xlsx")])
        .assert()
        .success()
        .stdout(predicate::str::contains("Current assets grew").not())
        .stderr(predicate::str::contains("Commentary needs the current-assets figures"));
}

#[test]
fn liability_flags_override_the_placeholders() {
    ledgerlens()
        .args([
            "analyze",
            &fixture("statement.xlsx"),
            "--liabilities-prior",
            "400",
            "--liabilities-current",
            "1200",
            "--format",
            "minimal",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "current_ratio_prior=1.0000 current_ratio_current=1.0000 delta=+0.0000",
        ));
}

#[test]
fn config_file_supplies_the_liabilities() {
    let mut config = tempfile::NamedTempFile::new().unwrap();
    writeln!(config, "[liabilities]\nprior = 400.0\ncurrent = 600.0").unwrap();

    ledgerlens()
        .args([
            "analyze",
            &fixture("statement.xlsx"),
            "--config",
            config.path().to_str().unwrap(),
            "--format",
            "minimal",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "current_ratio_prior=1.0000 current_ratio_current=2.0000 delta=+1.0000",
        ));
}

#[test]
fn non_positive_liability_flag_is_rejected() {
    ledgerlens()
        .args([
            "analyze",
            &fixture("statement.xlsx"),
            "--liabilities-prior",
            "0",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid liability value"));
}
