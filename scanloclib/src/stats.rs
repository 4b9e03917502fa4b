//! Core data structures for scan statistics

use std::collections::HashMap;
use std::ops::{Add, AddAssign};
use std::path::{Path, PathBuf};

/// Line and character counts for a single file
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FileMetrics {
    /// Number of lines (a trailing newline does not add one)
    pub lines: u64,
    /// Number of decoded characters
    pub chars: u64,
}

impl FileMetrics {
    pub fn new(lines: u64, chars: u64) -> Self {
        Self { lines, chars }
    }
}

impl Add for FileMetrics {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self {
            lines: self.lines + other.lines,
            chars: self.chars + other.chars,
        }
    }
}

impl AddAssign for FileMetrics {
    fn add_assign(&mut self, other: Self) {
        self.lines += other.lines;
        self.chars += other.chars;
    }
}

/// Statistics for a single file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileRecord {
    /// Path to the file, as produced by the walker
    pub path: PathBuf,
    /// Counts for this file
    pub metrics: FileMetrics,
}

impl FileRecord {
    pub fn new(path: PathBuf, metrics: FileMetrics) -> Self {
        Self { path, metrics }
    }
}

/// All analyzed files of one run, in the order they were recorded.
#[derive(Debug, Clone, Default)]
pub struct ScanResult {
    records: Vec<FileRecord>,
    index: HashMap<PathBuf, usize>,
}

impl ScanResult {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record metrics for a file.
    ///
    /// Recording a path a second time replaces its metrics and keeps its
    /// original position, so a path never appears twice.
    pub fn insert(&mut self, path: PathBuf, metrics: FileMetrics) {
        if let Some(&i) = self.index.get(&path) {
            self.records[i].metrics = metrics;
            return;
        }
        self.index.insert(path.clone(), self.records.len());
        self.records.push(FileRecord::new(path, metrics));
    }

    /// Look up the metrics recorded for a path.
    pub fn get(&self, path: &Path) -> Option<FileMetrics> {
        self.index.get(path).map(|&i| self.records[i].metrics)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Records in insertion order.
    pub fn iter(&self) -> std::slice::Iter<'_, FileRecord> {
        self.records.iter()
    }

    /// Aggregate totals over all records.
    pub fn totals(&self) -> Totals {
        totals(self)
    }
}

impl<'a> IntoIterator for &'a ScanResult {
    type Item = &'a FileRecord;
    type IntoIter = std::slice::Iter<'a, FileRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl FromIterator<(PathBuf, FileMetrics)> for ScanResult {
    fn from_iter<I: IntoIterator<Item = (PathBuf, FileMetrics)>>(iter: I) -> Self {
        let mut scan = Self::new();
        for (path, metrics) in iter {
            scan.insert(path, metrics);
        }
        scan
    }
}

/// Aggregated statistics across a scan. Always derived, never stored.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Totals {
    /// Number of files analyzed
    pub file_count: u64,
    /// Sum of line counts
    pub total_lines: u64,
    /// Sum of character counts
    pub total_chars: u64,
}

impl Totals {
    pub fn new() -> Self {
        Self::default()
    }
}

impl From<FileMetrics> for Totals {
    fn from(metrics: FileMetrics) -> Self {
        Self {
            file_count: 1,
            total_lines: metrics.lines,
            total_chars: metrics.chars,
        }
    }
}

impl Add for Totals {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self {
            file_count: self.file_count + other.file_count,
            total_lines: self.total_lines + other.total_lines,
            total_chars: self.total_chars + other.total_chars,
        }
    }
}

impl AddAssign for Totals {
    fn add_assign(&mut self, other: Self) {
        self.file_count += other.file_count;
        self.total_lines += other.total_lines;
        self.total_chars += other.total_chars;
    }
}

/// Fold every record of a scan into totals.
pub fn totals(scan: &ScanResult) -> Totals {
    scan.iter()
        .map(|record| Totals::from(record.metrics))
        .fold(Totals::new(), Add::add)
}
