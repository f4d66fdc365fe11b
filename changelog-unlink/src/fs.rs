//! Filesystem side of a run.
//!
//! Discovers changelog files under the scan root and reads and writes them.
//! - Symlinked directories are not descended unless `follow_links` is set
//! - Existing entries that are not regular files (directories, pipes, devices) are
//!   never opened; entries whose target is missing are yielded so the read fails
//!   and reports them
//! - Reads are bounded by `max_file_size` when one is configured

use std::ffi::OsStr;
use std::io::Read;
use std::path::{Path, PathBuf};

use walkdir::WalkDir;

use crate::config::StripConfig;
use crate::error::{FileError, FileErrorKind};

/// Walk `config.root` and yield every file named `config.file_name`.
///
/// Entries are visited depth-first and sorted by file name within each directory.
/// Directories that cannot be listed are yielded as [`FileErrorKind::WalkError`]
/// and the walk carries on with their siblings.
pub fn discover(config: &StripConfig) -> impl Iterator<Item = Result<PathBuf, FileError>> + '_ {
    let target = OsStr::new(config.file_name.as_str());

    WalkDir::new(&config.root)
        .follow_links(config.follow_links)
        .sort_by_file_name()
        .into_iter()
        .filter_map(move |entry_result| {
            let entry = match entry_result {
                Ok(e) => e,
                Err(walk_err) => {
                    let path = walk_err
                        .path()
                        .map_or_else(|| config.root.clone(), Path::to_path_buf);
                    return Some(Err(FileError::new(
                        path,
                        FileErrorKind::WalkError,
                        format!("Directory traversal error: {walk_err}"),
                    )));
                }
            };

            if entry.file_name() != target {
                return None;
            }

            // Metadata follows symlinks. An entry that vanished or dangles is kept
            // so the read reports it; only existing non-regular files are skipped.
            let file_path = entry.path();
            match std::fs::metadata(file_path) {
                Ok(meta) if !meta.is_file() => None,
                Ok(_) | Err(_) => Some(Ok(file_path.to_path_buf())),
            }
        })
}

/// Read a file as UTF-8, enforcing `max_file_size` when one is given.
///
/// # Errors
///
/// Returns a [`FileError`] if the file cannot be opened or read, exceeds
/// `max_file_size`, or is not valid UTF-8.
pub fn read_file_bounded(path: &Path, max_file_size: Option<u64>) -> Result<String, FileError> {
    let file = std::fs::File::open(path).map_err(|e| {
        FileError::new(path, FileErrorKind::Io, format!("Failed to open file: {e}"))
    })?;

    // Read at most max_file_size + 1 bytes to detect oversized files
    let limit = max_file_size.map_or(u64::MAX, |max| max.saturating_add(1));
    let mut buffer = Vec::new();
    file.take(limit).read_to_end(&mut buffer).map_err(|e| {
        FileError::new(path, FileErrorKind::Io, format!("Failed to read file: {e}"))
    })?;

    if let Some(max) = max_file_size
        && buffer.len() as u64 > max
    {
        return Err(FileError::new(
            path,
            FileErrorKind::FileTooLarge,
            format!("File exceeds maximum size of {max} bytes"),
        ));
    }

    String::from_utf8(buffer).map_err(|e| {
        FileError::new(
            path,
            FileErrorKind::InvalidEncoding,
            format!("File is not valid UTF-8: {}", e.utf8_error()),
        )
    })
}

/// Replace the whole content of `path` with `content`, in place.
///
/// # Errors
///
/// Returns a [`FileError`] if the file cannot be opened for writing or written.
pub fn write_file(path: &Path, content: &str) -> Result<(), FileError> {
    std::fs::write(path, content).map_err(|e| {
        FileError::new(
            path,
            FileErrorKind::WriteFailed,
            format!("Failed to write file: {e}"),
        )
    })
}
