//! Source file discovery.
//!
//! Walks a directory tree, pruning excluded directories by bare name and
//! selecting files whose extension is in a fixed allowlist.

use std::path::{Path, PathBuf};

use tracing::debug;
use walkdir::{DirEntry, WalkDir};

use crate::exclusion::ExclusionSet;

/// Default root directory, relative to the working directory.
pub const DEFAULT_ROOT: &str = "inside";

/// File extensions counted as source code (without the leading dot).
pub const TARGET_EXTENSIONS: [&str; 6] = ["py", "cs", "cpp", "js", "ts", "lua"];

/// Check if a path has one of the target extensions.
///
/// The match is case-sensitive: `main.PY` is not selected.
pub fn has_target_extension(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| TARGET_EXTENSIONS.contains(&ext))
}

/// Collect source files under `root`.
///
/// Returns an empty list when `root` does not exist, is not a directory, or
/// is itself inside an excluded directory. Entries are visited in file name
/// order so the result is stable for an unchanged tree.
pub fn collect_files(root: impl AsRef<Path>, exclusions: &ExclusionSet) -> Vec<PathBuf> {
    let root = root.as_ref();

    if !root.is_dir() {
        debug!(root = %root.display(), "root is not a directory");
        return Vec::new();
    }

    if exclusions.is_excluded(root) {
        debug!(root = %root.display(), "root is excluded");
        return Vec::new();
    }

    let walker = WalkDir::new(root).sort_by_file_name().into_iter();

    let mut files = Vec::new();

    for entry in walker.filter_entry(|e| keep_entry(e, exclusions)) {
        let entry = match entry {
            Ok(e) => e,
            Err(err) => {
                debug!(error = %err, "skipping unreadable entry");
                continue;
            }
        };

        if is_file(&entry) && has_target_extension(entry.path()) {
            files.push(entry.into_path());
        }
    }

    files
}

/// Decide whether the walker should yield (and for directories, enter) an entry.
fn keep_entry(entry: &DirEntry, exclusions: &ExclusionSet) -> bool {
    // Root was already checked against the full path
    if entry.depth() == 0 || !entry.file_type().is_dir() {
        return true;
    }
    let excluded = entry
        .file_name()
        .to_str()
        .is_some_and(|name| exclusions.contains(name));
    if excluded {
        debug!(dir = %entry.path().display(), "pruning excluded directory");
    }
    !excluded
}

/// Regular files, plus symlinks that do not point at a directory.
///
/// Dangling links are kept so that reading them fails visibly later.
fn is_file(entry: &DirEntry) -> bool {
    let file_type = entry.file_type();
    file_type.is_file() || (file_type.is_symlink() && !entry.path().is_dir())
}
