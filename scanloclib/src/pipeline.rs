//! High-level scan API.
//!
//! [`run`] drives a whole scan: load exclusions, walk the tree, analyze each
//! file, print totals and optionally write the markdown report. Console
//! output goes through a [`MessageSink`] and the report question through a
//! [`Confirm`], so front ends and tests supply their own.
//!
//! Nothing in a run is fatal. A bad exclusion file means no exclusions, an
//! unreadable file counts as zero lines and characters, and a failed report
//! write is reported and otherwise ignored.

use std::path::{Path, PathBuf};

use tracing::{debug, info};

use crate::analyzer::analyze;
use crate::exclusion::{ExclusionSet, DEFAULT_FILTER_FILE};
use crate::message::{self, Message};
use crate::report::{write_report, DEFAULT_REPORT_PATH};
use crate::stats::{ScanResult, Totals};
use crate::walker::{collect_files, DEFAULT_ROOT};

/// Receives console messages as a run progresses.
pub trait MessageSink {
    fn emit(&mut self, message: Message);
}

impl MessageSink for Vec<Message> {
    fn emit(&mut self, message: Message) {
        self.push(message);
    }
}

/// Answers the yes/no question asked before writing the report.
pub trait Confirm {
    /// Return `true` to write the report.
    fn confirm(&mut self, prompt: &Message) -> bool;
}

impl<F: FnMut(&Message) -> bool> Confirm for F {
    fn confirm(&mut self, prompt: &Message) -> bool {
        self(prompt)
    }
}

/// Whether a confirmation answer means yes: a case-insensitive `y`.
pub fn is_affirmative(answer: &str) -> bool {
    answer.trim().eq_ignore_ascii_case("y")
}

/// Options for a scan run.
#[derive(Debug, Clone)]
pub struct ScanOptions {
    /// Directory to scan
    pub root: PathBuf,
    /// File listing directory names to skip
    pub filter_file: PathBuf,
    /// Where the markdown report is written
    pub report_path: PathBuf,
    /// Answer to the report question given up front (`None` asks)
    pub assume_yes: Option<bool>,
}

impl Default for ScanOptions {
    fn default() -> Self {
        Self {
            root: PathBuf::from(DEFAULT_ROOT),
            filter_file: PathBuf::from(DEFAULT_FILTER_FILE),
            report_path: PathBuf::from(DEFAULT_REPORT_PATH),
            assume_yes: None,
        }
    }
}

impl ScanOptions {
    /// Create default options (`inside`, `.filter`, `report.md`, ask).
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the directory to scan.
    pub fn root(mut self, root: impl Into<PathBuf>) -> Self {
        self.root = root.into();
        self
    }

    /// Set the exclusion file.
    pub fn filter_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.filter_file = path.into();
        self
    }

    /// Set the report output path.
    pub fn report_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.report_path = path.into();
        self
    }

    /// Answer the report question without asking.
    pub fn assume(mut self, write_report: bool) -> Self {
        self.assume_yes = Some(write_report);
        self
    }
}

/// What happened to the report at the end of a run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReportStatus {
    /// The user said no
    Declined,
    /// The report was written to this path
    Written(PathBuf),
    /// Writing failed; the error text
    Failed(String),
}

/// Result of a scan run.
#[derive(Debug)]
pub enum RunOutcome {
    /// The walk found nothing; no totals were computed and no report written
    NoFiles,
    /// Files were analyzed
    Completed {
        scan: ScanResult,
        totals: Totals,
        report: ReportStatus,
    },
}

/// Load the exclusion set, degrading a read failure to no exclusions.
fn load_exclusions(path: &Path, sink: &mut dyn MessageSink) -> ExclusionSet {
    match ExclusionSet::load(path) {
        Ok(set) => set,
        Err(err) => {
            sink.emit(message::error(&err));
            ExclusionSet::new()
        }
    }
}

/// Analyze every file in order, reporting each result.
pub fn scan_files(files: Vec<PathBuf>, sink: &mut dyn MessageSink) -> ScanResult {
    let mut scan = ScanResult::new();

    for path in files {
        let analysis = analyze(&path);
        if let Some(err) = &analysis.error {
            sink.emit(message::error(err));
        }
        sink.emit(message::file_row(&path, &analysis.metrics));
        scan.insert(path, analysis.metrics);
    }

    scan
}

/// Run a full scan.
///
/// # Example
///
/// ```rust,ignore
/// use scanloclib::{run, Message, ScanOptions};
///
/// let mut messages: Vec<Message> = Vec::new();
/// let mut never = |_: &Message| false;
/// let outcome = run(&ScanOptions::new().root("src"), &mut messages, &mut never);
/// ```
pub fn run(
    options: &ScanOptions,
    sink: &mut dyn MessageSink,
    confirm: &mut dyn Confirm,
) -> RunOutcome {
    let exclusions = load_exclusions(&options.filter_file, sink);
    sink.emit(message::scanning(&options.root));
    sink.emit(message::ignoring(&exclusions));

    let files = collect_files(&options.root, &exclusions);
    if files.is_empty() {
        sink.emit(message::no_files(&options.root));
        return RunOutcome::NoFiles;
    }
    debug!(count = files.len(), "collected files");

    let scan = scan_files(files, sink);
    let totals = scan.totals();
    sink.emit(message::summary(&totals));

    let wanted = match options.assume_yes {
        Some(answer) => answer,
        None => confirm.confirm(&message::report_prompt()),
    };

    let report = if wanted {
        match write_report(&scan, &totals, &options.report_path) {
            Ok(()) => {
                info!(path = %options.report_path.display(), "report written");
                sink.emit(message::report_saved(&options.report_path));
                ReportStatus::Written(options.report_path.clone())
            }
            Err(err) => {
                sink.emit(message::error(&err));
                ReportStatus::Failed(err.to_string())
            }
        }
    } else {
        ReportStatus::Declined
    };

    RunOutcome::Completed {
        scan,
        totals,
        report,
    }
}
