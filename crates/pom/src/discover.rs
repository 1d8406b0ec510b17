// SPDX-FileCopyrightText: 2026 Pom Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! `pom discover` command implementation.
//!
//! Reads the package manifest, runs plugin discovery with the configured
//! prefixes and directories, and prints the descriptors as a table or JSON.

use std::io::IsTerminal;
use std::path::PathBuf;

use pom_config::PomConfig;
use pom_core::{PluginCategory, PluginDescriptor, PomError, TracingLogger};
use pom_plugin::{discover, read_dependency_names, DiscoveryOptions};

/// Options for a single `pom discover` run.
#[derive(Debug, Clone, Default)]
pub struct DiscoverArgs {
    /// Manifest to read instead of `discovery.manifest`.
    pub manifest: Option<PathBuf>,
    /// Only show plugins of this category.
    pub category: Option<PluginCategory>,
    /// Emit JSON instead of a table.
    pub json: bool,
    /// Disable colors.
    pub plain: bool,
}

/// Run the `pom discover` command.
pub fn run_discover(config: &PomConfig, args: &DiscoverArgs) -> Result<(), PomError> {
    let manifest = args
        .manifest
        .clone()
        .unwrap_or_else(|| config.discovery.manifest.clone());
    let dependencies = read_dependency_names(&manifest)?;
    tracing::debug!(
        manifest = %manifest.display(),
        count = dependencies.len(),
        "read manifest dependencies"
    );

    let options = DiscoveryOptions::from(&config.discovery);
    let found = filter_category(discover(&dependencies, &options, &TracingLogger), args.category);

    if args.json {
        let rendered = serde_json::to_string_pretty(&found)
            .map_err(|e| PomError::Internal(format!("failed to serialize plugins: {e}")))?;
        println!("{rendered}");
    } else {
        let use_color = !args.plain && std::io::stdout().is_terminal();
        print!("{}", render_table(&found, use_color));
    }

    Ok(())
}

fn filter_category(
    found: Vec<PluginDescriptor>,
    category: Option<PluginCategory>,
) -> Vec<PluginDescriptor> {
    match category {
        Some(category) => found
            .into_iter()
            .filter(|d| d.category() == category)
            .collect(),
        None => found,
    }
}

/// Format descriptors as an aligned table, one plugin per line.
pub fn render_table(found: &[PluginDescriptor], use_color: bool) -> String {
    let mut out = String::new();
    out.push('\n');
    out.push_str("  pom discover\n");
    out.push_str(&format!("  {}\n", "-".repeat(50)));

    if found.is_empty() {
        out.push_str("    no plugins found\n\n");
        return out;
    }

    for d in found {
        let name = match d.namespace() {
            Some(ns) => format!("{ns}/{}", d.module_name()),
            None => d.module_name().to_string(),
        };
        let category = format!("{:<10}", d.category().to_string());
        let category = if use_color {
            use colored::Colorize;
            match d.category() {
                PluginCategory::Framework => category.cyan().to_string(),
                PluginCategory::External => category.green().to_string(),
                PluginCategory::Internal => category.yellow().to_string(),
            }
        } else {
            category
        };
        out.push_str(&format!("    {category} {name:<30} {}\n", d.require()));
    }

    let count = found.len();
    let noun = if count == 1 { "plugin" } else { "plugins" };
    out.push_str(&format!("\n  {count} {noun} found.\n\n"));
    out
}
