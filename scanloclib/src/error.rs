//! Error types for scanloclib

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while scanning
#[derive(Error, Debug)]
pub enum ScanlocError {
    /// The exclusion file exists but could not be read
    #[error("failed to read exclusion file '{path}': {source}")]
    ConfigRead {
        path: PathBuf,
        source: std::io::Error,
    },

    /// Failed to open or read a file
    #[error("failed to read file '{path}': {source}")]
    FileRead {
        path: PathBuf,
        source: std::io::Error,
    },

    /// File content is not valid UTF-8
    #[error("failed to decode file '{path}' as UTF-8: {source}")]
    Decode {
        path: PathBuf,
        source: std::io::Error,
    },

    /// Failed to write the markdown report
    #[error("failed to write report '{path}': {source}")]
    ReportWrite {
        path: PathBuf,
        source: std::io::Error,
    },
}
