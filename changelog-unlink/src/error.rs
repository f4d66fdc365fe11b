//! Per-file failure types.

use std::path::PathBuf;

use serde::Serialize;

/// The kind of failure that stopped a single file from being processed.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[non_exhaustive]
pub enum FileErrorKind {
    /// The file could not be opened or read.
    Io,
    /// The file exceeded the configured maximum size limit.
    FileTooLarge,
    /// The file content is not valid UTF-8.
    InvalidEncoding,
    /// The rewritten content could not be written back.
    WriteFailed,
    /// A directory could not be listed (permission denied, loop detected, etc.).
    WalkError,
}

/// A failure contained to one file (or, for [`FileErrorKind::WalkError`], one directory).
///
/// These never abort a run: the scan moves on to the next entry.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[non_exhaustive]
pub struct FileError {
    /// The path that could not be processed.
    pub file: PathBuf,
    /// The kind of failure.
    pub kind: FileErrorKind,
    /// Human-readable description of the failure.
    pub message: String,
}

impl FileError {
    /// Create an error for `file`.
    #[must_use]
    pub fn new(file: impl Into<PathBuf>, kind: FileErrorKind, message: String) -> Self {
        Self {
            file: file.into(),
            kind,
            message,
        }
    }

    /// Format the error for the console: `error processing {file}: {message}`.
    #[must_use]
    pub fn format_human_readable(&self) -> String {
        format!("error processing {}: {}", self.file.display(), self.message)
    }
}
