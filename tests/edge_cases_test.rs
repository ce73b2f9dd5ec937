/// Edge case tests: malformed rows, inverted ranges, boundary dates
mod common;

use chrono::NaiveDate;
use common::{SheetBuilder, fixture_dir};
use testname_counter::aggregate::{CancelToken, aggregate};
use testname_counter::loader::{ColumnSpec, load_records};
use testname_counter::models::DateRange;

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

#[test]
fn test_rows_with_blank_cells_are_skipped() {
    let dir = fixture_dir();
    let file = SheetBuilder::new()
        .row(&["2024-01-01", "A"])
        .row(&["", "B"])
        .row(&["2024-01-02", ""])
        .row(&["", ""])
        .row(&["2024-01-03", "C"])
        .write_to(dir.path(), "blanks.xlsx");

    let records = load_records(&file, &ColumnSpec::default()).unwrap();
    assert_eq!(records.len(), 2);
    assert_eq!(records[0].label, "A");
    assert_eq!(records[1].label, "C");
}

#[test]
fn test_rows_with_unparseable_dates_are_skipped() {
    let dir = fixture_dir();
    let file = SheetBuilder::new()
        .row(&["2024-01-01", "A"])
        .row(&["not a date", "B"])
        .row(&["2024-13-40", "C"])
        .row(&["2024-01-02", "D"])
        .write_to(dir.path(), "dates.xlsx");

    let records = load_records(&file, &ColumnSpec::default()).unwrap();
    let labels: Vec<&str> = records.iter().map(|r| r.label.as_str()).collect();
    assert_eq!(labels, vec!["A", "D"]);
}

#[test]
fn test_datetime_cells_compare_as_calendar_dates() {
    let dir = fixture_dir();
    // A time-of-day component must not push a boundary date out of range.
    let file = SheetBuilder::new()
        .row(&["2024-01-03 23:59:59", "A"])
        .row(&["2024-01-04 00:00:01", "B"])
        .write_to(dir.path(), "times.xlsx");

    let records = load_records(&file, &ColumnSpec::default()).unwrap();
    let range = DateRange::new(date(2024, 1, 1), date(2024, 1, 3));
    let summary = aggregate(&records, &range, &CancelToken::new()).unwrap();

    assert_eq!(summary.total_count, 1);
    assert_eq!(summary.label_counts.get("A"), Some(&1));
}

#[test]
fn test_header_row_is_not_counted_as_data() {
    let dir = fixture_dir();
    let file = SheetBuilder::new().write_to(dir.path(), "empty.xlsx");

    let records = load_records(&file, &ColumnSpec::default()).unwrap();
    assert!(records.is_empty());
}

#[test]
fn test_custom_column_names() {
    let dir = fixture_dir();
    let file = SheetBuilder::with_headers(&["Received", "Assay"])
        .row(&["2024-01-01", "Adm"])
        .row(&["2024-01-02", "Panel"])
        .write_to(dir.path(), "custom.xlsx");

    let records = load_records(&file, &ColumnSpec::new("Received", "Assay")).unwrap();
    assert_eq!(records.len(), 2);
}

#[test]
fn test_extra_columns_are_ignored() {
    let dir = fixture_dir();
    let file = SheetBuilder::with_headers(&["Id", "Indatum", "Operator", "Testnamn"])
        .row(&["17", "2024-01-01", "Alice", "A"])
        .write_to(dir.path(), "wide.xlsx");

    let records = load_records(&file, &ColumnSpec::default()).unwrap();
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].label, "A");
}

#[test]
fn test_inverted_range_on_real_file_counts_nothing() {
    let dir = fixture_dir();
    let file = SheetBuilder::new()
        .row(&["2024-01-01", "A"])
        .row(&["2024-01-02", "B"])
        .write_to(dir.path(), "inverted.xlsx");

    let records = load_records(&file, &ColumnSpec::default()).unwrap();
    let range = DateRange::new(date(2024, 1, 2), date(2024, 1, 1));
    let summary = aggregate(&records, &range, &CancelToken::new()).unwrap();

    assert_eq!(summary.total_count, 0);
    assert_eq!(summary.adjusted_count, 0);
    assert!(summary.label_counts.is_empty());
}

#[test]
fn test_duplicate_rows_are_counted_twice() {
    let dir = fixture_dir();
    let file = SheetBuilder::new()
        .row(&["2024-01-01", "A"])
        .row(&["2024-01-01", "A"])
        .write_to(dir.path(), "dupes.xlsx");

    let records = load_records(&file, &ColumnSpec::default()).unwrap();
    let range = DateRange::new(date(2024, 1, 1), date(2024, 1, 1));
    let summary = aggregate(&records, &range, &CancelToken::new()).unwrap();

    assert_eq!(summary.total_count, 2);
    assert_eq!(summary.label_counts.get("A"), Some(&2));
}
