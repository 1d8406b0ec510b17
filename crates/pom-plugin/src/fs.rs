// SPDX-FileCopyrightText: 2026 Pom Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Filesystem accessors that never fail.
//!
//! Plugin sources are optional: a configured directory that is missing,
//! unreadable, or not a directory at all simply contributes nothing.
//! Failures are logged at debug level and turned into `false` or an empty
//! listing.

use std::path::Path;

/// Returns whether `path` is a directory, following symlinks.
///
/// Any stat failure (missing path, permission denied, empty path) yields `false`.
pub fn safe_is_directory(path: impl AsRef<Path>) -> bool {
    let path = path.as_ref();
    match std::fs::metadata(path) {
        Ok(meta) => meta.is_dir(),
        Err(e) => {
            tracing::debug!(path = %path.display(), error = %e, "stat failed");
            false
        }
    }
}

/// Lists the names of the direct children of `path`.
///
/// Names come back in the order the OS yields them; nothing is sorted.
/// Returns an empty list if `path` cannot be read as a directory. Entries
/// that fail mid-listing or whose names are not valid UTF-8 are skipped.
pub fn safe_list_directory(path: impl AsRef<Path>) -> Vec<String> {
    let path = path.as_ref();
    let entries = match std::fs::read_dir(path) {
        Ok(entries) => entries,
        Err(e) => {
            tracing::debug!(path = %path.display(), error = %e, "directory listing failed");
            return Vec::new();
        }
    };

    entries
        .flatten()
        .filter_map(|entry| entry.file_name().into_string().ok())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn is_directory_true_for_directory() {
        let dir = tempfile::tempdir().unwrap();
        assert!(safe_is_directory(dir.path()));
    }

    #[test]
    fn is_directory_false_for_file() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("plugin.js");
        std::fs::write(&file, "").unwrap();
        assert!(!safe_is_directory(&file));
    }

    #[test]
    fn is_directory_false_for_missing_or_empty_path() {
        assert!(!safe_is_directory("/nonexistent/pom/plugins"));
        assert!(!safe_is_directory(""));
    }

    #[test]
    fn list_directory_returns_children() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("a.js"), "").unwrap();
        std::fs::create_dir(dir.path().join("b")).unwrap();

        let mut names = safe_list_directory(dir.path());
        names.sort();
        assert_eq!(names, vec!["a.js", "b"]);
    }

    #[test]
    fn list_directory_does_not_recurse() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::create_dir(dir.path().join("b")).unwrap();
        std::fs::write(dir.path().join("b").join("index.js"), "").unwrap();

        assert_eq!(safe_list_directory(dir.path()), vec!["b"]);
    }

    #[test]
    fn list_directory_empty_for_file_or_missing_path() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("plugin.js");
        std::fs::write(&file, "").unwrap();

        assert!(safe_list_directory(&file).is_empty());
        assert!(safe_list_directory("/nonexistent/pom/plugins").is_empty());
        assert!(safe_list_directory("").is_empty());
    }
}
