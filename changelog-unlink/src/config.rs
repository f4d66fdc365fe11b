//! Configuration for a changelog link-stripping run.

use std::path::PathBuf;

/// File name that marks a changelog to rewrite. Matched exactly and case-sensitively.
pub const CHANGELOG_FILE_NAME: &str = "CHANGELOG.md";

/// Filesystem options for [`crate::strip_fs`].
#[derive(Debug, Clone)]
#[non_exhaustive]
pub struct StripConfig {
    /// Directory to scan recursively (default: the current working directory, `.`).
    pub root: PathBuf,
    /// Exact file name of the files to rewrite (default: `CHANGELOG.md`).
    pub file_name: String,
    /// Whether to descend into symlinked directories.
    ///
    /// **Defaults to `false`**. A symlink named like a changelog that points to a
    /// regular file is still processed through the link either way.
    pub follow_links: bool,
    /// Optional maximum file size in bytes (default: `None`, no limit).
    /// When set, larger files are reported as failures and left untouched.
    pub max_file_size: Option<u64>,
}

impl StripConfig {
    /// Config scanning `root` with every other option at its default.
    #[must_use]
    pub fn for_root(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            ..Self::default()
        }
    }
}

impl Default for StripConfig {
    fn default() -> Self {
        Self {
            root: PathBuf::from("."),
            file_name: CHANGELOG_FILE_NAME.to_owned(),
            follow_links: false,
            max_file_size: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_targets_changelog_in_cwd() {
        let config = StripConfig::default();
        assert_eq!(config.root, PathBuf::from("."));
        assert_eq!(config.file_name, "CHANGELOG.md");
        assert!(!config.follow_links);
    }

    #[test]
    fn test_for_root_keeps_other_defaults() {
        let config = StripConfig::for_root("docs");
        assert_eq!(config.root, PathBuf::from("docs"));
        assert_eq!(config.file_name, CHANGELOG_FILE_NAME);
        assert_eq!(config.max_file_size, None);
    }
}
