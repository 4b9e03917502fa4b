//! # scanloclib
//!
//! Quick codebase size inspection: count lines and characters of source files
//! under a directory and optionally write a markdown summary.
//!
//! ## Overview
//!
//! A scan runs as a single sequential pipeline:
//!
//! - **Exclusions**: bare directory names read from a plain-text file (`.filter`)
//! - **Walk**: recursive traversal that prunes excluded directories and keeps
//!   `.py`, `.cs`, `.cpp`, `.js`, `.ts` and `.lua` files
//! - **Analyze**: per-file line and character counts, decoded as UTF-8
//! - **Aggregate**: file, line and character totals derived from the scan
//! - **Report**: a markdown table written on request
//!
//! Failures never abort a scan. An unreadable file counts as zero lines and
//! zero characters; a missing root simply finds no files.
//!
//! The library does no terminal I/O. Console output is produced as
//! categorized [`Message`] values and the report question goes through the
//! [`Confirm`] trait.
//!
//! ## Example
//!
//! ```rust
//! use scanloclib::{analyze_file, collect_files, ExclusionSet};
//! use std::fs;
//! use tempfile::tempdir;
//!
//! let dir = tempdir().unwrap();
//! fs::create_dir_all(dir.path().join("node_modules")).unwrap();
//! fs::write(dir.path().join("main.py"), "print('hi')\nprint('bye')\n").unwrap();
//! fs::write(dir.path().join("node_modules/dep.js"), "x\n").unwrap();
//!
//! let exclusions = ExclusionSet::parse(".node_modules\n");
//! let files = collect_files(dir.path(), &exclusions);
//! assert_eq!(files.len(), 1);
//!
//! let metrics = analyze_file(&files[0]).unwrap();
//! assert_eq!(metrics.lines, 2);
//! assert_eq!(metrics.chars, 25);
//! ```

pub mod analyzer;
pub mod error;
pub mod exclusion;
pub mod message;
pub mod pipeline;
pub mod report;
pub mod stats;
pub mod walker;

pub use analyzer::{analyze, analyze_file, count_reader, count_str, Analysis};
pub use error::ScanlocError;
pub use exclusion::{ExclusionSet, DEFAULT_FILTER_FILE};
pub use message::{Category, Message};
pub use pipeline::{
    is_affirmative, run, scan_files, Confirm, MessageSink, ReportStatus, RunOutcome, ScanOptions,
};
pub use report::{render_markdown, write_report, DEFAULT_REPORT_PATH};
pub use stats::{totals, FileMetrics, FileRecord, ScanResult, Totals};
pub use walker::{collect_files, has_target_extension, DEFAULT_ROOT, TARGET_EXTENSIONS};

/// Result type for scanloclib operations
pub type Result<T> = std::result::Result<T, ScanlocError>;
