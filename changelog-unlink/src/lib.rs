//! # changelog-unlink
//!
//! Strips hyperlinks from version headings in `CHANGELOG.md` files.
//!
//! Every file named `CHANGELOG.md` under a root directory has its headings of the form
//! `## [<label>](<url>) (<date>)` rewritten to `## <label> (<date>)`. Files are only
//! written back when their content actually changes, and a failure on one file never
//! stops the rest of the scan.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use changelog_unlink::{StripConfig, strip_fs};
//!
//! let report = strip_fs(&StripConfig::for_root("packages")).unwrap();
//! for outcome in &report.outcomes {
//!     println!("{}", outcome.format_human_readable());
//! }
//! println!("Rewritten: {}", report.changed_files);
//! println!("OK: {}", report.ok());
//! ```

mod config;
mod error;
pub mod fs;
pub mod output;
mod report;
pub mod rewrite;

pub use config::{CHANGELOG_FILE_NAME, StripConfig};
pub use error::{FileError, FileErrorKind};
pub use report::{FileOutcome, FileStatus, StripReport};

use std::path::Path;

use tracing::{debug, info, warn};

/// Strip heading links in every changelog under `config.root`.
///
/// Collecting form of [`strip_fs_with`].
///
/// # Errors
///
/// Returns an error if `config.root` does not exist or is not a directory.
/// Per-file failures are reported in the returned [`StripReport`], never as `Err`.
pub fn strip_fs(config: &StripConfig) -> anyhow::Result<StripReport> {
    strip_fs_with(config, |_| {})
}

/// Strip heading links in every changelog under `config.root`, handing each
/// [`FileOutcome`] to `on_outcome` as soon as that file is done.
///
/// Files are processed one at a time: read, rewrite, compare, then write only if
/// the content changed.
///
/// # Errors
///
/// Returns an error if `config.root` does not exist or is not a directory.
/// Once traversal has started every failure is contained to its file and
/// recorded in the report.
pub fn strip_fs_with<F>(config: &StripConfig, mut on_outcome: F) -> anyhow::Result<StripReport>
where
    F: FnMut(&FileOutcome),
{
    if !config.root.exists() {
        anyhow::bail!("Path does not exist: {}", config.root.display());
    }
    if !config.root.is_dir() {
        anyhow::bail!("Path is not a directory: {}", config.root.display());
    }

    let mut report = StripReport::default();

    for discovered in fs::discover(config) {
        let outcome = match discovered {
            Ok(path) => process_file(&path, config.max_file_size),
            Err(walk_err) => FileOutcome::failed(walk_err),
        };

        if let FileStatus::Failed { error } = &outcome.status {
            warn!(file = %error.file.display(), kind = ?error.kind, "{}", error.message);
        }

        on_outcome(&outcome);
        report.record(outcome);
    }

    info!(
        attempted = report.files_attempted(),
        changed = report.changed_files,
        unchanged = report.unchanged_files,
        failed = report.failed_files,
        "changelog scan finished"
    );

    Ok(report)
}

/// Read, rewrite and conditionally write back a single file.
fn process_file(path: &Path, max_file_size: Option<u64>) -> FileOutcome {
    debug!(file = %path.display(), "processing changelog");

    let content = match fs::read_file_bounded(path, max_file_size) {
        Ok(c) => c,
        Err(e) => return FileOutcome::failed(e),
    };

    let rewrite = rewrite::strip_heading_links(&content);
    if !rewrite.differs_from(&content) {
        return FileOutcome::unchanged(path.to_path_buf());
    }

    debug!(file = %path.display(), headings = rewrite.headings, "writing rewritten changelog");
    match fs::write_file(path, &rewrite.content) {
        Ok(()) => FileOutcome::changed(path.to_path_buf(), rewrite.headings),
        Err(e) => FileOutcome::failed(e),
    }
}
