// SPDX-FileCopyrightText: 2026 Pom Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Hand-off from discovery to plugin instantiation.
//!
//! Turning a descriptor into a running plugin belongs to the host framework.
//! [`PluginFactory`] is the seam it plugs into; [`build_plugins`] feeds it
//! every discovered descriptor in discovery order.

use pom_core::{FrameworkLogger, PluginDescriptor, PomError};

use crate::finder::{discover, DiscoveryOptions};

/// Creates runtime plugin instances from discovered descriptors.
pub trait PluginFactory {
    /// The runtime plugin type produced by this factory.
    type Plugin;

    /// Instantiate the plugin described by `descriptor`.
    fn create(&self, descriptor: PluginDescriptor) -> Result<Self::Plugin, PomError>;
}

impl<F, P> PluginFactory for F
where
    F: Fn(PluginDescriptor) -> Result<P, PomError>,
{
    type Plugin = P;

    fn create(&self, descriptor: PluginDescriptor) -> Result<P, PomError> {
        self(descriptor)
    }
}

/// Discovers plugins and instantiates each one with `factory`.
///
/// Discovery itself never fails; the first factory error aborts the build.
pub fn build_plugins<S, F>(
    dependencies: &[S],
    options: &DiscoveryOptions,
    logger: &dyn FrameworkLogger,
    factory: &F,
) -> Result<Vec<F::Plugin>, PomError>
where
    S: AsRef<str>,
    F: PluginFactory + ?Sized,
{
    discover(dependencies, options, logger)
        .into_iter()
        .map(|descriptor| factory.create(descriptor))
        .collect()
}
