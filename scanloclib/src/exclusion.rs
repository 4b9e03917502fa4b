//! Directory exclusion list.
//!
//! The exclusion file is plain text with one directory name per line. Each
//! line is trimmed and loses a single leading `.`, so `.git` and `git` both
//! exclude directories named `git`. Blank lines are ignored.

use std::collections::BTreeSet;
use std::ffi::OsStr;
use std::fmt;
use std::fs;
use std::io::ErrorKind;
use std::path::{Component, Path};

use tracing::debug;

use crate::error::ScanlocError;
use crate::Result;

/// Default name of the exclusion file, relative to the working directory.
pub const DEFAULT_FILTER_FILE: &str = ".filter";

/// Set of bare directory names to skip during traversal.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExclusionSet {
    names: BTreeSet<String>,
}

impl ExclusionSet {
    /// Create an empty set (nothing excluded).
    pub fn new() -> Self {
        Self::default()
    }

    /// Load exclusions from a file.
    ///
    /// A missing file yields an empty set. Any other read failure is an error.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        match fs::read_to_string(path) {
            Ok(text) => Ok(Self::parse(&text)),
            Err(e) if e.kind() == ErrorKind::NotFound => {
                debug!(path = %path.display(), "no exclusion file, nothing excluded");
                Ok(Self::new())
            }
            Err(source) => Err(ScanlocError::ConfigRead {
                path: path.to_path_buf(),
                source,
            }),
        }
    }

    /// Parse exclusion file contents.
    pub fn parse(text: &str) -> Self {
        text.lines()
            .filter_map(normalize_line)
            .map(str::to_string)
            .collect()
    }

    /// Check whether a bare directory name is excluded.
    pub fn contains(&self, name: &str) -> bool {
        self.names.contains(name)
    }

    /// Check whether any segment of `path` is an excluded name.
    ///
    /// The path is normalized lexically first, so `skip/../src` is only the
    /// segment `src`.
    pub fn is_excluded(&self, path: &Path) -> bool {
        if self.names.is_empty() {
            return false;
        }
        normalized_segments(path)
            .iter()
            .any(|segment| segment.to_str().is_some_and(|s| self.contains(s)))
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Iterate over excluded names in sorted order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.names.iter().map(String::as_str)
    }
}

/// Named segments of a path after resolving `.` and `..` without touching the filesystem.
fn normalized_segments(path: &Path) -> Vec<&OsStr> {
    let mut segments = Vec::new();
    for component in path.components() {
        match component {
            Component::Normal(segment) => segments.push(segment),
            Component::ParentDir => {
                segments.pop();
            }
            Component::CurDir | Component::RootDir | Component::Prefix(_) => {}
        }
    }
    segments
}

/// Turn one line of the exclusion file into a directory name.
fn normalize_line(line: &str) -> Option<&str> {
    let trimmed = line.trim();
    if trimmed.is_empty() {
        return None;
    }
    let name = trimmed.strip_prefix('.').unwrap_or(trimmed);
    // A name with a separator can never equal a single path segment
    if name.is_empty() || name.contains(['/', '\\']) {
        debug!(line = trimmed, "ignoring exclusion entry");
        return None;
    }
    Some(name)
}

impl FromIterator<String> for ExclusionSet {
    fn from_iter<I: IntoIterator<Item = String>>(iter: I) -> Self {
        Self {
            names: iter
                .into_iter()
                .filter(|name| !name.is_empty() && !name.contains(['/', '\\']))
                .collect(),
        }
    }
}

impl fmt::Display for ExclusionSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{")?;
        for (i, name) in self.names.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", name)?;
        }
        write!(f, "}}")
    }
}
