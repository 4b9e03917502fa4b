//! Per-file line and character counting.
//!
//! Files are decoded as UTF-8 and read in text mode: `\r\n` and a lone `\r`
//! are each treated as a single `\n`. Characters are counted after that
//! translation. Lines are the segments left after splitting at line
//! boundaries, so a trailing newline does not add an empty last line and an
//! empty file has zero lines.

use std::fs::File;
use std::io::{self, BufRead, BufReader, ErrorKind};
use std::path::Path;

use utf8_chars::BufReadCharsExt;

use crate::error::ScanlocError;
use crate::stats::FileMetrics;
use crate::Result;

/// Characters other than `\n` and `\r` that end a line.
const EXTRA_LINE_BOUNDARIES: [char; 8] = [
    '\x0b', '\x0c', '\x1c', '\x1d', '\x1e', '\u{85}', '\u{2028}', '\u{2029}',
];

fn is_line_boundary(c: char) -> bool {
    c == '\n' || EXTRA_LINE_BOUNDARIES.contains(&c)
}

/// Incremental counter fed one decoded character at a time.
#[derive(Debug, Default)]
struct Counter {
    metrics: FileMetrics,
    /// Previous character was `\r`, so a following `\n` is part of the same break
    after_cr: bool,
    /// Characters seen since the last line boundary
    open_line: bool,
}

impl Counter {
    fn push(&mut self, c: char) {
        if std::mem::take(&mut self.after_cr) && c == '\n' {
            return;
        }

        self.metrics.chars += 1;

        if c == '\r' {
            self.after_cr = true;
            self.end_line();
        } else if is_line_boundary(c) {
            self.end_line();
        } else {
            self.open_line = true;
        }
    }

    fn end_line(&mut self) {
        self.metrics.lines += 1;
        self.open_line = false;
    }

    fn finish(mut self) -> FileMetrics {
        if self.open_line {
            self.metrics.lines += 1;
        }
        self.metrics
    }
}

/// Count lines and characters from a buffered reader.
///
/// Invalid UTF-8 is reported as an [`ErrorKind::InvalidData`] error.
pub fn count_reader<R: BufRead>(mut reader: R) -> io::Result<FileMetrics> {
    let mut counter = Counter::default();
    for c in reader.chars() {
        counter.push(c?);
    }
    Ok(counter.finish())
}

/// Count lines and characters of in-memory text.
pub fn count_str(text: &str) -> FileMetrics {
    let mut counter = Counter::default();
    text.chars().for_each(|c| counter.push(c));
    counter.finish()
}

/// Count lines and characters of a single file.
///
/// # Example
///
/// ```rust,ignore
/// use scanloclib::analyze_file;
///
/// let metrics = analyze_file("inside/main.py")?;
/// println!("{} lines, {} characters", metrics.lines, metrics.chars);
/// ```
pub fn analyze_file(path: impl AsRef<Path>) -> Result<FileMetrics> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|source| ScanlocError::FileRead {
        path: path.to_path_buf(),
        source,
    })?;

    count_reader(BufReader::new(file)).map_err(|source| {
        if source.kind() == ErrorKind::InvalidData {
            ScanlocError::Decode {
                path: path.to_path_buf(),
                source,
            }
        } else {
            ScanlocError::FileRead {
                path: path.to_path_buf(),
                source,
            }
        }
    })
}

/// Outcome of a best-effort file analysis.
#[derive(Debug)]
pub struct Analysis {
    /// Counted metrics, or zeros if the file could not be read
    pub metrics: FileMetrics,
    /// Why the file could not be read, if it could not
    pub error: Option<ScanlocError>,
}

impl Analysis {
    pub fn is_ok(&self) -> bool {
        self.error.is_none()
    }
}

/// Analyze a file without failing.
///
/// Read and decode errors produce zero metrics with the error attached, so
/// the caller can report it and keep going.
pub fn analyze(path: impl AsRef<Path>) -> Analysis {
    match analyze_file(path) {
        Ok(metrics) => Analysis {
            metrics,
            error: None,
        },
        Err(error) => Analysis {
            metrics: FileMetrics::default(),
            error: Some(error),
        },
    }
}
