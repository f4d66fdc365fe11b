//! Run report types.

use std::path::PathBuf;

use serde::Serialize;

use crate::error::FileError;

/// What happened to one discovered file.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[serde(tag = "status", rename_all = "snake_case")]
#[non_exhaustive]
pub enum FileStatus {
    /// Linked headings were rewritten and the file was overwritten.
    Changed {
        /// Number of headings that lost their link.
        headings: usize,
    },
    /// Content already had no linked headings; the file was not written.
    Unchanged,
    /// The file could not be read or written.
    Failed {
        /// The contained failure.
        error: FileError,
    },
}

/// Outcome of processing a single path.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[non_exhaustive]
pub struct FileOutcome {
    /// Path of the file as discovered under the scan root.
    pub file: PathBuf,
    /// What happened to it.
    #[serde(flatten)]
    pub status: FileStatus,
}

impl FileOutcome {
    /// Outcome for a rewritten file.
    #[must_use]
    pub fn changed(file: PathBuf, headings: usize) -> Self {
        Self {
            file,
            status: FileStatus::Changed { headings },
        }
    }

    /// Outcome for a file that needed no rewrite.
    #[must_use]
    pub fn unchanged(file: PathBuf) -> Self {
        Self {
            file,
            status: FileStatus::Unchanged,
        }
    }

    /// Outcome for a failure, keyed by the failing path.
    #[must_use]
    pub fn failed(error: FileError) -> Self {
        Self {
            file: error.file.clone(),
            status: FileStatus::Failed { error },
        }
    }

    /// Format the outcome as its console status line.
    #[must_use]
    pub fn format_human_readable(&self) -> String {
        match &self.status {
            FileStatus::Changed { .. } => format!("removed link: {}", self.file.display()),
            FileStatus::Unchanged => format!("no change needed: {}", self.file.display()),
            FileStatus::Failed { error } => error.format_human_readable(),
        }
    }
}

/// Result of a full run.
///
/// Per-file failures never abort the run; check `failed_files` (or [`StripReport::ok`])
/// to know whether every discovered file was handled.
#[derive(Debug, Clone, Default, Serialize)]
#[non_exhaustive]
pub struct StripReport {
    /// Number of files rewritten.
    pub changed_files: usize,
    /// Number of files left as they were.
    pub unchanged_files: usize,
    /// Number of files (or directories) that could not be processed.
    pub failed_files: usize,
    /// Every outcome, in processing order.
    pub outcomes: Vec<FileOutcome>,
}

impl StripReport {
    /// Count `outcome` and append it.
    pub fn record(&mut self, outcome: FileOutcome) {
        match outcome.status {
            FileStatus::Changed { .. } => self.changed_files += 1,
            FileStatus::Unchanged => self.unchanged_files += 1,
            FileStatus::Failed { .. } => self.failed_files += 1,
        }
        self.outcomes.push(outcome);
    }

    /// Total number of entries attempted (changed + unchanged + failed).
    #[must_use]
    pub fn files_attempted(&self) -> usize {
        self.changed_files + self.unchanged_files + self.failed_files
    }

    /// Whether every discovered file was processed without error.
    #[must_use]
    pub fn ok(&self) -> bool {
        self.failed_files == 0
    }
}
