//! The delimited text log format.
//!
//! A summary block (date range, counts, search timestamp), a blank line,
//! then a two-column table of test name counts. The layout matches the
//! log files produced by earlier versions of this tool, so downstream
//! consumers keep working.

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

use crate::error::{CountError, Result};
use crate::models::{DateRange, Summary};

/// Write the summary block and the per-testname count table.
pub fn write_log(
    path: &Path,
    range: &DateRange,
    summary: &Summary,
    search_time: &str,
) -> Result<()> {
    let file = File::create(path).map_err(|source| CountError::io(path, source))?;
    let mut writer = BufWriter::new(file);
    render(&mut writer, range, summary, search_time).map_err(|source| CountError::io(path, source))
}

fn render(
    writer: &mut impl Write,
    range: &DateRange,
    summary: &Summary,
    search_time: &str,
) -> io::Result<()> {
    writeln!(writer, "Summary")?;
    writeln!(writer, "Date Range, {} to {}", range.start, range.end)?;
    writeln!(writer, "Total Count, {}", summary.total_count)?;
    writeln!(writer, "Adm Count, {}", summary.adm_count)?;
    writeln!(writer, "Adjusted Total (Excluding 'Adm'), {}", summary.adjusted_count)?;
    writeln!(writer, "Search Made, {}", search_time)?;
    writeln!(writer)?;
    writeln!(writer, "Testname Counts")?;
    writeln!(writer, "Testname,Count")?;
    for (label, count) in &summary.label_counts {
        writeln!(writer, "{},{}", label, count)?;
    }
    writer.flush()
}
