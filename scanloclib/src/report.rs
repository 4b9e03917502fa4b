//! Markdown report output.
//!
//! The report has a heading, one summary line with the totals, and a table
//! with one row per file in scan order.

use std::fmt;
use std::fs;
use std::path::Path;

use crate::error::ScanlocError;
use crate::stats::{ScanResult, Totals};
use crate::Result;

/// Default report file name, relative to the working directory.
pub const DEFAULT_REPORT_PATH: &str = "report.md";

const TITLE: &str = "# File Analysis Report";
const TABLE_HEADER: &str = "| File | Lines | Characters |";
const TABLE_SEPARATOR: &str = "|------|-------|------------|";

/// Render the report as a markdown string.
pub fn render_markdown(scan: &ScanResult, totals: &Totals) -> String {
    let mut out = String::new();
    write_markdown(&mut out, scan, totals).expect("writing to a String cannot fail");
    out
}

fn write_markdown(out: &mut impl fmt::Write, scan: &ScanResult, totals: &Totals) -> fmt::Result {
    writeln!(out, "{}\n", TITLE)?;
    writeln!(
        out,
        "**Files:** {}  |  **Lines:** {}  |  **Characters:** {}\n",
        totals.file_count, totals.total_lines, totals.total_chars
    )?;
    writeln!(out, "{}", TABLE_HEADER)?;
    writeln!(out, "{}", TABLE_SEPARATOR)?;

    for record in scan {
        writeln!(
            out,
            "| {} | {} | {} |",
            escape_cell(&record.path.to_string_lossy()),
            record.metrics.lines,
            record.metrics.chars
        )?;
    }

    Ok(())
}

/// Escape pipe characters so a path cannot break the table.
fn escape_cell(text: &str) -> String {
    text.replace('|', "\\|")
}

/// Render the report and write it to `path`, replacing any existing file.
pub fn write_report(scan: &ScanResult, totals: &Totals, path: impl AsRef<Path>) -> Result<()> {
    let path = path.as_ref();
    fs::write(path, render_markdown(scan, totals)).map_err(|source| ScanlocError::ReportWrite {
        path: path.to_path_buf(),
        source,
    })
}
