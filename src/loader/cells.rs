//! Cell coercion for the two required columns.

use calamine::Data;
use chrono::NaiveDate;

/// String layouts accepted for date cells, tried in order. Layouts with a
/// time part still parse to a plain date; chrono discards the surplus
/// fields.
const DATE_LAYOUTS: &[&str] = &[
    "%Y-%m-%d",
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y/%m/%d",
];

/// Coerce a cell to a calendar date, discarding any time-of-day component.
///
/// Returns `None` for blank cells and values that are not recognizable
/// dates; the caller skips those rows.
pub(crate) fn date_from_cell(cell: &Data) -> Option<NaiveDate> {
    match cell {
        Data::DateTime(dt) => dt.as_datetime().map(|dt| dt.date()),
        Data::DateTimeIso(text) => parse_date_text(text),
        Data::String(text) => parse_date_text(text.trim()),
        _ => None,
    }
}

fn parse_date_text(text: &str) -> Option<NaiveDate> {
    if text.is_empty() {
        return None;
    }
    DATE_LAYOUTS.iter().find_map(|layout| NaiveDate::parse_from_str(text, layout).ok())
}

/// Coerce a cell to a test name.
///
/// Text cells are trimmed; numeric and boolean cells are rendered to their
/// display text. Blank cells return `None` and the row is skipped.
pub(crate) fn label_from_cell(cell: &Data) -> Option<String> {
    match cell {
        Data::String(text) => {
            let trimmed = text.trim();
            if trimmed.is_empty() { None } else { Some(trimmed.to_string()) }
        }
        Data::Int(value) => Some(value.to_string()),
        Data::Float(value) => Some(value.to_string()),
        Data::Bool(value) => Some(value.to_string()),
        _ => None,
    }
}
