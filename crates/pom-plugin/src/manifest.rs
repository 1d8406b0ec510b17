// SPDX-FileCopyrightText: 2026 Pom Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Reading dependency names from a `package.json`-style manifest.
//!
//! Only the keys of the `dependencies` object matter; they are returned in
//! declaration order.

use std::io::ErrorKind;
use std::path::Path;

use pom_core::PomError;
use serde_json::Value;

/// Returns the keys of the manifest's `dependencies` object in declaration order.
///
/// A manifest without a `dependencies` object has no dependencies. Malformed
/// JSON is an error.
pub fn dependency_names_from_str(content: &str) -> Result<Vec<String>, PomError> {
    parse_dependency_names(content, "<inline>")
}

/// Reads the manifest at `path` and returns its dependency names.
///
/// A missing manifest is treated as having no dependencies.
pub fn read_dependency_names(path: &Path) -> Result<Vec<String>, PomError> {
    let content = match std::fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) if e.kind() == ErrorKind::NotFound => {
            tracing::debug!(path = %path.display(), "no package manifest, no external plugins");
            return Ok(Vec::new());
        }
        Err(e) => {
            return Err(PomError::Manifest {
                path: path.display().to_string(),
                message: e.to_string(),
            });
        }
    };

    parse_dependency_names(&content, &path.display().to_string())
}

fn parse_dependency_names(content: &str, source: &str) -> Result<Vec<String>, PomError> {
    let manifest: Value = serde_json::from_str(content).map_err(|e| PomError::Manifest {
        path: source.to_string(),
        message: e.to_string(),
    })?;

    let names = manifest
        .get("dependencies")
        .and_then(Value::as_object)
        .map(|deps| deps.keys().cloned().collect())
        .unwrap_or_default();

    Ok(names)
}
