// SPDX-FileCopyrightText: 2026 Pom Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Error types for the Pom plugin finder.

use thiserror::Error;

/// The primary error type used across the Pom crates.
///
/// Discovery itself never produces one of these: a missing or unreadable
/// plugin directory is an empty result, not an error. Errors only surface
/// from configuration, manifest parsing, and plugin instantiation.
#[derive(Debug, Error)]
pub enum PomError {
    /// Configuration errors (invalid TOML, bad prefixes, type mismatches).
    #[error("configuration error: {0}")]
    Config(String),

    /// The package manifest exists but could not be read or parsed.
    #[error("manifest error in {path}: {message}")]
    Manifest { path: String, message: String },

    /// A plugin factory rejected a discovered descriptor.
    #[error("plugin `{name}` failed: {message}")]
    Plugin { name: String, message: String },

    /// Internal or unexpected errors.
    #[error("internal error: {0}")]
    Internal(String),
}
