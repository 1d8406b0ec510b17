// SPDX-FileCopyrightText: 2026 Pom Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! `pom config` command implementation.

use pom_config::PomConfig;
use pom_core::PomError;

/// Print the effective, merged configuration as TOML.
pub fn run_config(config: &PomConfig) -> Result<(), PomError> {
    print!("{}", render_config(config)?);
    Ok(())
}

fn render_config(config: &PomConfig) -> Result<String, PomError> {
    toml::to_string_pretty(config)
        .map_err(|e| PomError::Config(format!("failed to render configuration: {e}")))
}
