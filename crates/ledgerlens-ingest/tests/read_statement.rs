//! Integration tests reading real xlsx containers from the shared fixtures.

use ledgerlens_ingest::{read_statement, IngestError};

/// Path to the shared spreadsheet fixtures.
fn fixture(name: &str) -> String {
    format!("{}/../../tests/fixtures/{name}", env!("CARGO_MANIFEST_DIR"))
}

#[test]
fn reads_three_column_statement() {
    let table = read_statement(fixture("statement.xlsx")).unwrap();

    assert_eq!(table.len(), 3);
    assert_eq!(table.rows()[0].item_label, "TÀI SẢN NGẮN HẠN");
    assert_eq!(table.rows()[0].prior_value, 400.0);
    assert_eq!(table.rows()[0].current_value, 1200.0);
    assert_eq!(table.rows()[2].item_label, "TỔNG CỘNG TÀI SẢN");
    assert_eq!(table.rows()[2].prior_value, 1000.0);
}

#[test]
fn headers_are_ignored_and_columns_renamed_positionally() {
    // The fixture's headers are Vietnamese; nothing downstream sees them.
    let table = read_statement(fixture("statement.xlsx")).unwrap();
    assert!(table.rows().iter().all(|r| r.item_label != "Chỉ tiêu"));
}

#[test]
fn four_columns_are_rejected() {
    let err = read_statement(fixture("bad_columns.xlsx")).unwrap_err();
    assert!(matches!(
        err,
        IngestError::ColumnCount {
            expected: 3,
            found: 4
        }
    ));
}

#[test]
fn non_numeric_value_cell_is_reported_with_position() {
    let err = read_statement(fixture("non_numeric.xlsx")).unwrap_err();
    match err {
        IngestError::NonNumericCell { row, column, value } => {
            assert_eq!((row, column), (2, 2));
            assert_eq!(value, "n/a");
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn missing_file_is_a_spreadsheet_error() {
    let err = read_statement(fixture("does_not_exist.xlsx")).unwrap_err();
    assert!(matches!(err, IngestError::Spreadsheet(_)));
}
