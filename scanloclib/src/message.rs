//! Console messages as plain data.
//!
//! The library never styles or prints anything itself. Each message carries a
//! [`Category`] and the front end decides how to present it.

use std::fmt;
use std::path::Path;

use crate::exclusion::ExclusionSet;
use crate::stats::{FileMetrics, Totals};

/// Kind of console message, used by front ends to pick a style.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    /// Start of a scan step
    Progress,
    /// Secondary detail, such as the exclusion list
    Muted,
    /// One analyzed file
    File,
    /// Final totals
    Summary,
    /// A recovered failure
    Error,
    /// A question waiting for an answer
    Prompt,
    /// The report was written
    Saved,
}

/// A categorized plain-text console message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Message {
    pub category: Category,
    pub text: String,
}

impl Message {
    pub fn new(category: Category, text: impl Into<String>) -> Self {
        Self {
            category,
            text: text.into(),
        }
    }
}

impl fmt::Display for Message {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

pub fn scanning(root: &Path) -> Message {
    Message::new(
        Category::Progress,
        format!("Scanning directory '{}'...", root.display()),
    )
}

pub fn ignoring(exclusions: &ExclusionSet) -> Message {
    Message::new(
        Category::Muted,
        format!("Ignoring directories: {}", exclusions),
    )
}

pub fn file_row(path: &Path, metrics: &FileMetrics) -> Message {
    Message::new(
        Category::File,
        format!(
            "{} | Lines: {} | Characters: {}",
            path.display(),
            metrics.lines,
            metrics.chars
        ),
    )
}

pub fn summary(totals: &Totals) -> Message {
    Message::new(
        Category::Summary,
        format!(
            "Total: files: {} | lines: {} | characters: {}",
            totals.file_count, totals.total_lines, totals.total_chars
        ),
    )
}

pub fn no_files(root: &Path) -> Message {
    Message::new(
        Category::Error,
        format!("No matching files found in '{}'", root.display()),
    )
}

/// Any recovered error: unreadable file, bad exclusion file, failed report.
pub fn error(err: &dyn std::error::Error) -> Message {
    Message::new(Category::Error, format!("Error: {}", err))
}

pub fn report_saved(path: &Path) -> Message {
    Message::new(
        Category::Saved,
        format!("Markdown report saved to {}", path.display()),
    )
}

/// Question asked before writing the report.
pub const REPORT_PROMPT: &str = "Create a .md report? (y/n): ";

pub fn report_prompt() -> Message {
    Message::new(Category::Prompt, REPORT_PROMPT)
}
