//! # LedgerLens Ingest
//!
//! Spreadsheet ingestion for the LedgerLens financial statement analyzer.
//!
//! Reads the first worksheet of an `.xlsx` or `.xls` file into a
//! [`StatementTable`]. The layout is fixed: row 1 is a header (its text is
//! ignored), and every following row carries exactly three columns that are
//! renamed positionally to item label, prior-period value, and
//! current-period value. Any other column count is an error, and value
//! cells must be numeric; there is no further schema validation.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]

use std::path::Path;

use calamine::{open_workbook_auto, Data, Reader};
use tracing::debug;

use ledgerlens_core::types::{StatementRow, StatementTable};

mod error;

pub use error::{IngestError, IngestResult};

/// Number of columns the statement layout requires.
pub const EXPECTED_COLUMNS: usize = 3;

/// Reads a two-period statement from a spreadsheet file.
///
/// Supports the two container formats this tool accepts, `.xlsx` and
/// legacy `.xls`, dispatched by extension via
/// [`calamine::open_workbook_auto`].
pub fn read_statement(path: impl AsRef<Path>) -> IngestResult<StatementTable> {
    let path = path.as_ref();
    let mut workbook = open_workbook_auto(path)?;

    let sheet_name = workbook
        .sheet_names()
        .first()
        .cloned()
        .ok_or(IngestError::EmptySheet)?;
    let range = workbook.worksheet_range(&sheet_name)?;

    debug!(
        path = %path.display(),
        sheet = %sheet_name,
        rows = range.height(),
        "read worksheet"
    );

    table_from_rows(range.rows())
}

/// Builds a statement table from worksheet rows, header row included.
fn table_from_rows<'a>(
    mut rows: impl Iterator<Item = &'a [Data]>,
) -> IngestResult<StatementTable> {
    // Row 1 is assumed to be a header; its text is irrelevant because the
    // columns are renamed positionally.
    let Some(header) = rows.next() else {
        return Err(IngestError::EmptySheet);
    };
    check_width(header)?;

    let mut statement_rows = Vec::new();
    for (index, row) in rows.enumerate() {
        check_width(row)?;
        // One-based spreadsheet row, counting the header.
        let sheet_row = index + 2;
        statement_rows.push(StatementRow::new(
            label_cell(&row[0]),
            numeric_cell(&row[1], sheet_row, 2)?,
            numeric_cell(&row[2], sheet_row, 3)?,
        ));
    }

    if statement_rows.is_empty() {
        return Err(IngestError::EmptySheet);
    }
    Ok(StatementTable::new(statement_rows))
}

fn check_width(row: &[Data]) -> IngestResult<()> {
    if row.len() != EXPECTED_COLUMNS {
        return Err(IngestError::ColumnCount {
            expected: EXPECTED_COLUMNS,
            found: row.len(),
        });
    }
    Ok(())
}

/// Converts the label cell to text. Labels are taken as-is; numeric or
/// empty labels are legal (they simply never match a reference lookup).
fn label_cell(cell: &Data) -> String {
    match cell {
        Data::String(s) => s.clone(),
        other => other.to_string(),
    }
}

/// Converts a value cell to f64, rejecting anything non-numeric.
fn numeric_cell(cell: &Data, row: usize, column: usize) -> IngestResult<f64> {
    match cell {
        Data::Float(f) => Ok(*f),
        Data::Int(i) => Ok(*i as f64),
        other => Err(IngestError::NonNumericCell {
            row,
            column,
            value: other.to_string(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cells(label: &str, prior: Data, current: Data) -> Vec<Data> {
        vec![Data::String(label.to_string()), prior, current]
    }

    #[test]
    fn test_table_from_rows_skips_header() {
        let header = cells("Chỉ tiêu", Data::String("Năm trước".into()), Data::String("Năm sau".into()));
        let item = cells("TỔNG CỘNG TÀI SẢN", Data::Float(1000.0), Data::Int(2000));
        let table = table_from_rows([header.as_slice(), item.as_slice()].into_iter()).unwrap();

        assert_eq!(table.len(), 1);
        assert_eq!(table.rows()[0].item_label, "TỔNG CỘNG TÀI SẢN");
        assert_eq!(table.rows()[0].prior_value, 1000.0);
        assert_eq!(table.rows()[0].current_value, 2000.0);
    }

    #[test]
    fn test_wrong_column_count_is_rejected() {
        let header: Vec<Data> = vec![Data::String("a".into()), Data::String("b".into())];
        let err = table_from_rows([header.as_slice()].into_iter()).unwrap_err();
        assert!(matches!(
            err,
            IngestError::ColumnCount {
                expected: 3,
                found: 2
            }
        ));
    }

    #[test]
    fn test_non_numeric_value_cell_is_rejected() {
        let header = cells("h", Data::String("p".into()), Data::String("c".into()));
        let item = cells("TIỀN", Data::String("n/a".into()), Data::Float(1.0));
        let err = table_from_rows([header.as_slice(), item.as_slice()].into_iter()).unwrap_err();

        match err {
            IngestError::NonNumericCell { row, column, value } => {
                assert_eq!(row, 2);
                assert_eq!(column, 2);
                assert_eq!(value, "n/a");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_header_only_sheet_is_empty() {
        let header = cells("h", Data::String("p".into()), Data::String("c".into()));
        let err = table_from_rows([header.as_slice()].into_iter()).unwrap_err();
        assert!(matches!(err, IngestError::EmptySheet));
    }
}
