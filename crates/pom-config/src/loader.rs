// SPDX-FileCopyrightText: 2026 Pom Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Configuration loader using Figment for layered config merging.
//!
//! Supports XDG hierarchy: `./pom.toml` > `~/.config/pom/pom.toml` > `/etc/pom/pom.toml`
//! with environment variable overrides via `POM_` prefix.

#![allow(clippy::result_large_err)] // figment::Error is external and cannot be boxed without wrapper

use std::path::{Path, PathBuf};

use figment::{
    providers::{Env, Format, Serialized, Toml},
    Figment,
};

use crate::model::PomConfig;

/// System-wide configuration file.
pub const SYSTEM_CONFIG_PATH: &str = "/etc/pom/pom.toml";

/// Configuration file looked up in the working directory.
pub const LOCAL_CONFIG_FILE: &str = "pom.toml";

/// Per-user configuration file under the XDG config directory.
pub fn user_config_path() -> PathBuf {
    dirs::config_dir()
        .map(|d| d.join("pom").join(LOCAL_CONFIG_FILE))
        .unwrap_or_default()
}

/// Load configuration from the standard XDG hierarchy with env var overrides.
///
/// Merge order (later overrides earlier):
/// 1. Compiled defaults
/// 2. `/etc/pom/pom.toml` (system-wide)
/// 3. `~/.config/pom/pom.toml` (user XDG config)
/// 4. `./pom.toml` (local directory)
/// 5. `POM_*` environment variables
pub fn load_config() -> Result<PomConfig, figment::Error> {
    tracing::debug!("loading configuration from XDG hierarchy");
    build_figment().extract()
}

/// Load configuration from a TOML string only (no XDG lookup, no env vars).
///
/// Used for testing and explicit configuration.
pub fn load_config_from_str(toml_content: &str) -> Result<PomConfig, figment::Error> {
    Figment::new()
        .merge(Serialized::defaults(PomConfig::default()))
        .merge(Toml::string(toml_content))
        .extract()
}

/// Load configuration from a specific file path with env var overrides.
pub fn load_config_from_path(path: &Path) -> Result<PomConfig, figment::Error> {
    tracing::debug!(path = %path.display(), "loading configuration file");
    Figment::new()
        .merge(Serialized::defaults(PomConfig::default()))
        .merge(Toml::file(path))
        .merge(env_provider())
        .extract()
}

/// Build the Figment used internally for config loading (exposed for diagnostic use).
///
/// Returns the Figment before extraction so callers can inspect metadata.
pub fn build_figment() -> Figment {
    Figment::new()
        .merge(Serialized::defaults(PomConfig::default()))
        .merge(Toml::file(SYSTEM_CONFIG_PATH))
        .merge(Toml::file(user_config_path()))
        .merge(Toml::file(LOCAL_CONFIG_FILE))
        .merge(env_provider())
}

/// Create the environment variable provider using explicit `map()` for section-to-dot mapping.
///
/// Uses `Env::map()` rather than `Env::split("_")` because key names contain
/// underscores: `POM_DISCOVERY_PLUGIN_DIRECTORY` must map to
/// `discovery.plugin_directory`, not `discovery.plugin.directory`.
///
/// `POM_CONFIG` names the config file itself and is not a config key.
fn env_provider() -> Env {
    Env::prefixed("POM_")
        .ignore(&[CONFIG_PATH_ENV_KEY])
        .map(|key| map_env_key(key.as_str()).into())
}

/// Env key (after the `POM_` prefix) reserved for the config file path.
const CONFIG_PATH_ENV_KEY: &str = "config";

/// Map a lowercased, prefix-stripped env var name to its dotted config key.
fn map_env_key(key: &str) -> String {
    if let Some(rest) = key.strip_prefix("discovery_") {
        format!("discovery.{rest}")
    } else if let Some(rest) = key.strip_prefix("log_") {
        format!("log.{rest}")
    } else {
        key.to_string()
    }
}
