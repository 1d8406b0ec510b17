// SPDX-FileCopyrightText: 2026 Pom Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Boolean tests over plugin file names and paths.

use std::path::Path;

use crate::fs::{safe_is_directory, safe_list_directory};

/// Extension of a plugin module source file, without the dot.
pub const MODULE_EXTENSION: &str = "js";

/// Entry point that turns a directory into a plugin module.
pub const INDEX_MODULE: &str = "index.js";

/// Returns whether `name` has exactly the module source extension.
///
/// Dotfiles such as `.js` have no extension and do not count, and neither
/// do near matches like `.jsx`, `.JS` or `.js.map`.
pub fn is_module_source_file(name: impl AsRef<Path>) -> bool {
    name.as_ref()
        .extension()
        .is_some_and(|ext| ext == MODULE_EXTENSION)
}

/// Returns whether `path` is a directory whose direct listing contains
/// [`INDEX_MODULE`].
pub fn directory_has_index_module(path: impl AsRef<Path>) -> bool {
    let path = path.as_ref();
    safe_is_directory(path)
        && safe_list_directory(path)
            .iter()
            .any(|entry| entry == INDEX_MODULE)
}

/// Strips the module source extension from a file name, if present.
///
/// Names that are nothing but the extension are returned unchanged.
pub fn module_stem(file: &str) -> &str {
    match file
        .strip_suffix(MODULE_EXTENSION)
        .and_then(|rest| rest.strip_suffix('.'))
    {
        Some(stem) if !stem.is_empty() => stem,
        _ => file,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn module_source_file_requires_exact_extension() {
        assert!(is_module_source_file("file.js"));
        assert!(is_module_source_file("nested/dir/file.js"));
        assert!(!is_module_source_file("file.txt"));
        assert!(!is_module_source_file("file.ts"));
        assert!(!is_module_source_file("file.jsx"));
        assert!(!is_module_source_file("file.JS"));
        assert!(!is_module_source_file("file.js.map"));
        assert!(!is_module_source_file("file"));
    }

    #[test]
    fn module_source_file_false_for_empty_and_dotfiles() {
        assert!(!is_module_source_file(""));
        assert!(!is_module_source_file(".js"));
        assert!(!is_module_source_file("file."));
    }

    #[test]
    fn index_module_found_in_directory() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("index.js"), "").unwrap();
        assert!(directory_has_index_module(dir.path()));
    }

    #[test]
    fn index_module_missing_from_directory() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("main.js"), "").unwrap();
        std::fs::write(dir.path().join("index.ts"), "").unwrap();
        assert!(!directory_has_index_module(dir.path()));
    }

    #[test]
    fn index_module_not_searched_recursively() {
        let dir = tempfile::tempdir().unwrap();
        let nested = dir.path().join("lib");
        std::fs::create_dir(&nested).unwrap();
        std::fs::write(nested.join("index.js"), "").unwrap();
        assert!(!directory_has_index_module(dir.path()));
    }

    #[test]
    fn index_module_false_for_file_and_missing_path() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("index.js");
        std::fs::write(&file, "").unwrap();

        assert!(!directory_has_index_module(&file));
        assert!(!directory_has_index_module("/nonexistent/pom"));
        assert!(!directory_has_index_module(""));
    }

    #[test]
    fn module_stem_strips_only_module_extension() {
        assert_eq!(module_stem("AddUtilities.js"), "AddUtilities");
        assert_eq!(module_stem("b"), "b");
        assert_eq!(module_stem("archive.tar"), "archive.tar");
        assert_eq!(module_stem("lib.js.js"), "lib.js");
        assert_eq!(module_stem(".js"), ".js");
    }
}
