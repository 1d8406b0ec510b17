// SPDX-FileCopyrightText: 2026 Pom Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Plugin descriptor model produced by discovery.

use std::fmt;
use std::path::PathBuf;

use serde::{Serialize, Serializer};
use strum::{Display, EnumString};

/// Where a discovered plugin came from.
///
/// A descriptor carries exactly one category, so a plugin can never be both
/// bundled and external, or external and internal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString)]
#[strum(serialize_all = "lowercase")]
pub enum PluginCategory {
    /// Bundled with the framework's own distribution.
    Framework,
    /// Declared as a dependency in the package manifest.
    External,
    /// Found under the configured local plugin directory.
    Internal,
}

/// Location used to resolve and load a plugin later on.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(untagged)]
pub enum PluginLocation {
    /// A file or directory on disk.
    Path(PathBuf),
    /// A package name resolved by the host's module loader.
    Package(String),
}

impl fmt::Display for PluginLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PluginLocation::Path(p) => write!(f, "{}", p.display()),
            PluginLocation::Package(name) => f.write_str(name),
        }
    }
}

/// A discovered plugin: where it lives and what kind it is.
///
/// Descriptors are created fresh by every discovery pass and handed over to
/// the caller; nothing here loads or executes plugin code.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PluginDescriptor {
    require: PluginLocation,
    module_name: String,
    namespace: Option<String>,
    category: PluginCategory,
}

impl PluginDescriptor {
    /// A plugin bundled in the framework's plugin directory.
    pub fn framework(path: PathBuf, module_name: impl Into<String>) -> Self {
        Self {
            require: PluginLocation::Path(path),
            module_name: module_name.into(),
            namespace: None,
            category: PluginCategory::Framework,
        }
    }

    /// A manifest dependency matched by plain prefix. The package name is
    /// both the location and the module name.
    pub fn external(package: impl Into<String>) -> Self {
        let package = package.into();
        Self {
            require: PluginLocation::Package(package.clone()),
            module_name: package,
            namespace: None,
            category: PluginCategory::External,
        }
    }

    /// A manifest dependency matched by namespace, e.g. `@scope/name`.
    pub fn namespaced(
        package: impl Into<String>,
        namespace: impl Into<String>,
        module_name: impl Into<String>,
    ) -> Self {
        Self {
            require: PluginLocation::Package(package.into()),
            module_name: module_name.into(),
            namespace: Some(namespace.into()),
            category: PluginCategory::External,
        }
    }

    /// A plugin found in the local plugin directory.
    pub fn internal(path: PathBuf, module_name: impl Into<String>) -> Self {
        Self {
            require: PluginLocation::Path(path),
            module_name: module_name.into(),
            namespace: None,
            category: PluginCategory::Internal,
        }
    }

    pub fn require(&self) -> &PluginLocation {
        &self.require
    }

    pub fn module_name(&self) -> &str {
        &self.module_name
    }

    pub fn namespace(&self) -> Option<&str> {
        self.namespace.as_deref()
    }

    pub fn category(&self) -> PluginCategory {
        self.category
    }

    pub fn is_system_plugin(&self) -> bool {
        self.category == PluginCategory::Framework
    }

    pub fn is_external(&self) -> bool {
        self.category == PluginCategory::External
    }

    pub fn is_internal(&self) -> bool {
        self.category == PluginCategory::Internal
    }
}

/// Wire shape of a descriptor, with the category flattened into flags.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct DescriptorRecord<'a> {
    require: &'a PluginLocation,
    module_name: &'a str,
    namespace: Option<&'a str>,
    external: bool,
    internal: bool,
    system_plugin: bool,
}

impl Serialize for PluginDescriptor {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        DescriptorRecord {
            require: &self.require,
            module_name: &self.module_name,
            namespace: self.namespace(),
            external: self.is_external(),
            internal: self.is_internal(),
            system_plugin: self.is_system_plugin(),
        }
        .serialize(serializer)
    }
}
