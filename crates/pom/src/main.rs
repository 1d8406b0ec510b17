// SPDX-FileCopyrightText: 2026 Pom Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Pom - plugin finder for the Pom framework.
//!
//! This is the binary entry point for the `pom` command.

#[cfg(not(target_env = "msvc"))]
use tikv_jemallocator::Jemalloc;

#[cfg(not(target_env = "msvc"))]
#[global_allocator]
static GLOBAL: Jemalloc = Jemalloc;

mod discover;
mod show_config;

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use pom_core::PluginCategory;

use crate::discover::DiscoverArgs;

/// Pom - find and classify framework plugins.
#[derive(Parser, Debug)]
#[command(name = "pom", version, about, long_about = None)]
struct Cli {
    /// Read configuration from this file instead of the XDG hierarchy.
    #[arg(long, global = true, env = "POM_CONFIG")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

/// Available subcommands.
#[derive(Subcommand, Debug)]
enum Commands {
    /// Discover plugins from the framework, the package manifest, and the plugin directory.
    Discover {
        /// Package manifest to scan (defaults to `discovery.manifest`).
        #[arg(long)]
        manifest: Option<PathBuf>,
        /// Only list plugins of this category (framework, external, internal).
        #[arg(long)]
        category: Option<PluginCategory>,
        /// Output as JSON.
        #[arg(long)]
        json: bool,
        /// Disable colored output.
        #[arg(long)]
        plain: bool,
    },
    /// Print the effective configuration.
    Config,
}

fn main() {
    let cli = Cli::parse();

    let loaded = match &cli.config {
        Some(path) => pom_config::load_and_validate_path(path),
        None => pom_config::load_and_validate(),
    };
    let config = match loaded {
        Ok(config) => config,
        Err(errors) => {
            pom_config::render_errors(&errors);
            std::process::exit(1);
        }
    };

    init_tracing(&config.log.level);

    let result = match cli.command {
        Some(Commands::Discover {
            manifest,
            category,
            json,
            plain,
        }) => discover::run_discover(
            &config,
            &DiscoverArgs {
                manifest,
                category,
                json,
                plain,
            },
        ),
        Some(Commands::Config) => show_config::run_config(&config),
        None => {
            println!("pom: use --help for available commands");
            Ok(())
        }
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}

/// Initializes the tracing subscriber with the given log level.
///
/// Logs go to stderr so `--json` output on stdout stays parseable.
fn init_tracing(log_level: &str) {
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("pom={log_level},warn")));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_thread_names(false)
        .init();
}
