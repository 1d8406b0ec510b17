// SPDX-FileCopyrightText: 2026 Pom Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Post-deserialization validation for configuration values.
//!
//! Validates semantic constraints that cannot be expressed via serde attributes,
//! such as well-formed plugin prefixes and non-empty directory paths.

use std::collections::HashSet;

use crate::diagnostic::ConfigError;
use crate::model::PomConfig;

/// Marker that distinguishes a namespace prefix (`@scope`) from a plain one.
const NAMESPACE_MARKER: char = '@';

const LOG_LEVELS: &[&str] = &["trace", "debug", "info", "warn", "error"];

/// Validate a deserialized configuration for semantic correctness.
///
/// Returns `Ok(())` if all validations pass, or `Err(Vec<ConfigError>)` with
/// all collected validation errors (does not fail fast).
pub fn validate_config(config: &PomConfig) -> Result<(), Vec<ConfigError>> {
    let mut errors = Vec::new();
    let discovery = &config.discovery;

    validate_prefix("discovery.prefix", &discovery.prefix, &mut errors);
    for (i, prefix) in discovery.additional_prefixes.iter().enumerate() {
        validate_prefix(
            &format!("discovery.additional_prefixes[{i}]"),
            prefix,
            &mut errors,
        );
    }

    let mut seen = HashSet::new();
    for prefix in discovery.prefixes() {
        if !seen.insert(prefix.clone()) {
            errors.push(ConfigError::Validation {
                message: format!("duplicate plugin prefix `{prefix}`"),
            });
        }
    }

    if let Some(dir) = &discovery.plugin_directory
        && dir.as_os_str().is_empty()
    {
        errors.push(ConfigError::Validation {
            message: "discovery.plugin_directory must not be empty; use `false` to disable it"
                .to_string(),
        });
    }

    if discovery.framework_plugin_directory.as_os_str().is_empty() {
        errors.push(ConfigError::Validation {
            message: "discovery.framework_plugin_directory must not be empty".to_string(),
        });
    }

    if discovery.manifest.as_os_str().is_empty() {
        errors.push(ConfigError::Validation {
            message: "discovery.manifest must not be empty".to_string(),
        });
    }

    let level = config.log.level.to_ascii_lowercase();
    if !LOG_LEVELS.contains(&level.as_str()) {
        errors.push(ConfigError::Validation {
            message: format!(
                "log.level `{}` is not one of: {}",
                config.log.level,
                LOG_LEVELS.join(", ")
            ),
        });
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

fn validate_prefix(key: &str, prefix: &str, errors: &mut Vec<ConfigError>) {
    if prefix.trim().is_empty() {
        errors.push(ConfigError::Validation {
            message: format!("{key} must not be empty"),
        });
        return;
    }

    if prefix.chars().any(char::is_whitespace) {
        errors.push(ConfigError::Validation {
            message: format!("{key} `{prefix}` must not contain whitespace"),
        });
    }

    if prefix.contains('/') {
        errors.push(ConfigError::Validation {
            message: format!("{key} `{prefix}` must not contain `/`"),
        });
    }

    if let Some(scope) = prefix.strip_prefix(NAMESPACE_MARKER)
        && scope.is_empty()
    {
        errors.push(ConfigError::Validation {
            message: format!("{key} `{prefix}` is missing a namespace name after `@`"),
        });
    }
}
