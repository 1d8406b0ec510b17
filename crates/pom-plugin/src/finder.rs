// SPDX-FileCopyrightText: 2026 Pom Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Plugin discovery across the framework, manifest, and local sources.
//!
//! Each source is scanned independently and the results are concatenated in
//! a fixed order: framework, prefixed external, namespaced external, then
//! local internal plugins. Within a group, candidates keep the order of the
//! manifest or directory listing. Duplicate module names across groups are
//! kept as-is.

use std::path::{Path, PathBuf};

use pom_config::DiscoveryConfig;
use pom_core::{FrameworkLogger, PluginDescriptor};

use crate::classify::{
    classify_external, classify_framework, classify_internal, classify_namespaced,
    is_internal_candidate, matches_namespace, matches_prefix,
};
use crate::fs::safe_list_directory;
use crate::predicates::is_module_source_file;

/// Inputs to a discovery pass besides the manifest dependency names.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiscoveryOptions {
    /// Directory holding the plugins bundled with the framework.
    pub framework_plugin_directory: PathBuf,
    /// Local plugin directory; `None` disables local discovery.
    pub plugin_directory: Option<PathBuf>,
    /// Plain prefixes and `@namespace` prefixes, in priority order.
    pub prefixes: Vec<String>,
}

impl From<&DiscoveryConfig> for DiscoveryOptions {
    fn from(config: &DiscoveryConfig) -> Self {
        Self {
            framework_plugin_directory: config.framework_plugin_directory.clone(),
            plugin_directory: config.plugin_directory.clone(),
            prefixes: config.prefixes(),
        }
    }
}

/// Discovered plugins, grouped by the step that found them.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DiscoveredPlugins {
    pub framework: Vec<PluginDescriptor>,
    pub external: Vec<PluginDescriptor>,
    pub namespaced: Vec<PluginDescriptor>,
    pub internal: Vec<PluginDescriptor>,
}

impl DiscoveredPlugins {
    /// Total number of descriptors across all groups.
    pub fn len(&self) -> usize {
        self.framework.len() + self.external.len() + self.namespaced.len() + self.internal.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Group names paired with their descriptor counts, in concatenation order.
    pub fn counts(&self) -> [(&'static str, usize); 4] {
        [
            ("framework", self.framework.len()),
            ("external", self.external.len()),
            ("namespaced", self.namespaced.len()),
            ("internal", self.internal.len()),
        ]
    }

    /// Concatenates the groups: framework, external, namespaced, internal.
    pub fn into_ordered(self) -> Vec<PluginDescriptor> {
        let mut all = Vec::with_capacity(self.len());
        all.extend(self.framework);
        all.extend(self.external);
        all.extend(self.namespaced);
        all.extend(self.internal);
        all
    }
}

/// Plugins bundled in the framework plugin directory: every module source
/// file directly inside it.
pub fn find_framework_plugins(dir: &Path) -> Vec<PluginDescriptor> {
    safe_list_directory(dir)
        .iter()
        .filter(|file| is_module_source_file(file.as_str()))
        .map(|file| classify_framework(dir, file))
        .collect()
}

/// Manifest dependencies matching a plain prefix, e.g. `pomegranate-foo`.
pub fn find_prefixed_plugins<S: AsRef<str>>(
    dependencies: &[S],
    prefixes: &[String],
) -> Vec<PluginDescriptor> {
    dependencies
        .iter()
        .map(|name| name.as_ref())
        .filter(|name| matches_prefix(name, prefixes))
        .map(classify_external)
        .collect()
}

/// Manifest dependencies in a configured namespace, e.g. `@scope/foo`.
pub fn find_namespaced_plugins<S: AsRef<str>>(
    dependencies: &[S],
    prefixes: &[String],
) -> Vec<PluginDescriptor> {
    dependencies
        .iter()
        .map(|name| name.as_ref())
        .filter(|name| matches_namespace(name, prefixes))
        .filter_map(classify_namespaced)
        .collect()
}

/// Module files and index-module directories in the local plugin directory.
///
/// An unset, missing, or unreadable directory yields no plugins.
pub fn find_internal_plugins(dir: Option<&Path>) -> Vec<PluginDescriptor> {
    let Some(dir) = dir else {
        tracing::debug!("local plugin directory disabled");
        return Vec::new();
    };

    safe_list_directory(dir)
        .iter()
        .filter(|entry| {
            let accepted = is_internal_candidate(dir, entry);
            tracing::debug!(entry = %entry, accepted, "local plugin candidate");
            accepted
        })
        .map(|entry| classify_internal(dir, entry))
        .collect()
}

/// Runs all four discovery steps and keeps the results grouped.
///
/// Never fails: an absent source contributes an empty group.
pub fn discover_grouped<S: AsRef<str>>(
    dependencies: &[S],
    options: &DiscoveryOptions,
    logger: &dyn FrameworkLogger,
) -> DiscoveredPlugins {
    logger.log("Discovering plugins.");
    logger.log(&format!(
        "{} prefixed plugins will load from the manifest dependencies.",
        options.prefixes.join(", ")
    ));

    let found = DiscoveredPlugins {
        framework: find_framework_plugins(&options.framework_plugin_directory),
        external: find_prefixed_plugins(dependencies, &options.prefixes),
        namespaced: find_namespaced_plugins(dependencies, &options.prefixes),
        internal: find_internal_plugins(options.plugin_directory.as_deref()),
    };

    tracing::debug!(plugins = ?found.framework, "framework plugins");
    tracing::debug!(plugins = ?found.external, "external plugins");
    tracing::debug!(plugins = ?found.namespaced, "namespaced plugins");
    tracing::debug!(plugins = ?found.internal, "internal plugins");

    for (group, count) in found.counts() {
        logger.log(&found_message(count, group));
    }

    found
}

/// Discovers plugins and returns them in concatenation order.
pub fn discover<S: AsRef<str>>(
    dependencies: &[S],
    options: &DiscoveryOptions,
    logger: &dyn FrameworkLogger,
) -> Vec<PluginDescriptor> {
    discover_grouped(dependencies, options, logger).into_ordered()
}

/// Summary line for one plugin group, e.g. `Found 1 internal plugin.`
pub fn found_message(count: usize, group: &str) -> String {
    let noun = if count == 1 { "plugin" } else { "plugins" };
    format!("Found {count} {group} {noun}.")
}
