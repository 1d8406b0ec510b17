// SPDX-FileCopyrightText: 2026 Pom Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Plugin discovery and classification for the Pom framework.
//!
//! Plugins come from three places: the framework's own bundled plugin
//! directory, package-manifest dependencies whose names follow a configured
//! prefix or `@namespace` convention, and a local plugin directory. This
//! crate decides which candidates are plugins and produces a
//! [`PluginDescriptor`](pom_core::PluginDescriptor) for each. It never loads
//! or runs plugin code.

pub mod classify;
pub mod factory;
pub mod finder;
pub mod fs;
pub mod manifest;
pub mod predicates;

pub use factory::{build_plugins, PluginFactory};
pub use finder::{discover, discover_grouped, DiscoveredPlugins, DiscoveryOptions};
pub use manifest::{dependency_names_from_str, read_dependency_names};
