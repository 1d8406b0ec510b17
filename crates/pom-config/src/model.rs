// SPDX-FileCopyrightText: 2026 Pom Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Configuration model structs for the Pom plugin finder.
//!
//! All structs use `#[serde(deny_unknown_fields)]` to reject unrecognized
//! config keys at startup, providing actionable error messages.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Top-level Pom configuration.
///
/// Loaded from TOML files following XDG hierarchy, with environment variable overrides.
/// All sections are optional and default to sensible values.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct PomConfig {
    /// Plugin discovery settings.
    #[serde(default)]
    pub discovery: DiscoveryConfig,

    /// Logging settings.
    #[serde(default)]
    pub log: LogConfig,
}

/// Where and how plugins are discovered.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct DiscoveryConfig {
    /// Primary plugin prefix. `pomegranate` matches `pomegranate-foo`.
    #[serde(default = "default_prefix")]
    pub prefix: String,

    /// Extra prefixes. Entries starting with `@` are namespaces and match
    /// scoped packages such as `@scope/name`.
    #[serde(default)]
    pub additional_prefixes: Vec<String>,

    /// Local plugin directory. Set to `false` to disable local discovery.
    #[serde(
        default = "default_plugin_directory",
        with = "plugin_directory"
    )]
    pub plugin_directory: Option<PathBuf>,

    /// Directory holding the plugins bundled with the framework.
    #[serde(default = "default_framework_plugin_directory")]
    pub framework_plugin_directory: PathBuf,

    /// Package manifest whose dependencies are scanned for plugins.
    #[serde(default = "default_manifest")]
    pub manifest: PathBuf,
}

impl DiscoveryConfig {
    /// The primary prefix followed by the additional ones, in order.
    pub fn prefixes(&self) -> Vec<String> {
        std::iter::once(self.prefix.clone())
            .chain(self.additional_prefixes.iter().cloned())
            .collect()
    }
}

impl Default for DiscoveryConfig {
    fn default() -> Self {
        Self {
            prefix: default_prefix(),
            additional_prefixes: Vec::new(),
            plugin_directory: default_plugin_directory(),
            framework_plugin_directory: default_framework_plugin_directory(),
            manifest: default_manifest(),
        }
    }
}

fn default_prefix() -> String {
    "pomegranate".to_string()
}

fn default_plugin_directory() -> Option<PathBuf> {
    Some(PathBuf::from("plugins"))
}

fn default_framework_plugin_directory() -> PathBuf {
    dirs::data_dir()
        .map(|p| p.join("pom").join("framework-plugins"))
        .unwrap_or_else(|| PathBuf::from("framework-plugins"))
}

fn default_manifest() -> PathBuf {
    PathBuf::from("package.json")
}

/// Logging configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct LogConfig {
    /// Logging level (trace, debug, info, warn, error).
    #[serde(default = "default_log_level")]
    pub level: String,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

/// `plugin_directory` accepts a path or `false`; `None` is written back as `false`.
mod plugin_directory {
    use std::path::PathBuf;

    use serde::de::Error as _;
    use serde::{Deserialize, Deserializer, Serialize, Serializer};

    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Flag(bool),
        Path(PathBuf),
    }

    pub fn serialize<S: Serializer>(value: &Option<PathBuf>, s: S) -> Result<S::Ok, S::Error> {
        match value {
            Some(path) => path.serialize(s),
            None => s.serialize_bool(false),
        }
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(d: D) -> Result<Option<PathBuf>, D::Error> {
        match Option::<Raw>::deserialize(d)? {
            None | Some(Raw::Flag(false)) => Ok(None),
            Some(Raw::Flag(true)) => Err(D::Error::custom(
                "plugin_directory must be a path or `false`",
            )),
            Some(Raw::Path(path)) => Ok(Some(path)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prefixes_lists_primary_first() {
        let mut config = DiscoveryConfig::default();
        config.additional_prefixes = vec!["@scope".into(), "pom".into()];
        assert_eq!(config.prefixes(), vec!["pomegranate", "@scope", "pom"]);
    }

    #[test]
    fn plugin_directory_false_disables_local_discovery() {
        let config: PomConfig = toml::from_str(
            r#"
[discovery]
plugin_directory = false
"#,
        )
        .unwrap();
        assert!(config.discovery.plugin_directory.is_none());
    }

    #[test]
    fn plugin_directory_true_is_rejected() {
        let result = toml::from_str::<PomConfig>(
            r#"
[discovery]
plugin_directory = true
"#,
        );
        assert!(result.is_err());
    }

    #[test]
    fn plugin_directory_path_parses() {
        let config: PomConfig = toml::from_str(
            r#"
[discovery]
plugin_directory = "/srv/app/plugins"
"#,
        )
        .unwrap();
        assert_eq!(
            config.discovery.plugin_directory,
            Some(PathBuf::from("/srv/app/plugins"))
        );
    }

    #[test]
    fn disabled_plugin_directory_serializes_as_false() {
        let mut config = PomConfig::default();
        config.discovery.plugin_directory = None;
        let rendered = toml::to_string(&config).unwrap();
        assert!(rendered.contains("plugin_directory = false"), "{rendered}");

        let parsed: PomConfig = toml::from_str(&rendered).unwrap();
        assert!(parsed.discovery.plugin_directory.is_none());
    }

    #[test]
    fn discovery_deny_unknown_fields() {
        let result = toml::from_str::<PomConfig>(
            r#"
[discovery]
prefixes = ["pom"]
"#,
        );
        assert!(result.is_err());
    }
}
