// SPDX-FileCopyrightText: 2026 Pom Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Candidate tests and classifiers.
//!
//! A candidate is either an entry name from a scanned directory or a
//! dependency name from the package manifest. The `matches_*` and
//! `is_internal_candidate` functions decide whether a candidate is a plugin;
//! the `classify_*` functions turn an accepted candidate into a
//! [`PluginDescriptor`]. Classifiers do no I/O.

use std::path::Path;

use pom_core::PluginDescriptor;

use crate::predicates::{directory_has_index_module, is_module_source_file, module_stem};

/// Separator required between a plain prefix and the rest of the name.
pub const PREFIX_SEPARATOR: char = '-';

/// First character of a namespaced (scoped) package name.
pub const NAMESPACE_MARKER: char = '@';

/// Separator between the namespace and the module name.
pub const NAMESPACE_SEPARATOR: char = '/';

/// Prefix test: `name` starts with one of `prefixes` immediately followed by
/// [`PREFIX_SEPARATOR`].
///
/// With prefix `pomegranate`, `pomegranate-foo` matches while
/// `pomegranateless` and a bare `pomegranate` do not.
pub fn matches_prefix<P: AsRef<str>>(name: &str, prefixes: &[P]) -> bool {
    prefixes.iter().any(|prefix| {
        name.strip_prefix(prefix.as_ref())
            .is_some_and(|rest| rest.starts_with(PREFIX_SEPARATOR))
    })
}

/// Splits `@scope/name` into `("@scope", "name")`.
///
/// Returns `None` unless the name starts with [`NAMESPACE_MARKER`] and has a
/// non-empty segment on both sides of the first [`NAMESPACE_SEPARATOR`].
pub fn split_namespace(name: &str) -> Option<(&str, &str)> {
    if !name.starts_with(NAMESPACE_MARKER) {
        return None;
    }
    let (namespace, module_name) = name.split_once(NAMESPACE_SEPARATOR)?;
    if namespace.len() == NAMESPACE_MARKER.len_utf8() || module_name.is_empty() {
        return None;
    }
    Some((namespace, module_name))
}

/// Namespace test: `name` is namespaced and its whole namespace segment
/// equals one of `prefixes`.
pub fn matches_namespace<P: AsRef<str>>(name: &str, prefixes: &[P]) -> bool {
    split_namespace(name).is_some_and(|(namespace, _)| {
        prefixes.iter().any(|prefix| prefix.as_ref() == namespace)
    })
}

/// Internal-path test for an entry of the local plugin directory `base`.
///
/// Standalone module files are accepted without touching the filesystem;
/// anything else must be a directory containing an index module.
pub fn is_internal_candidate(base: &Path, entry: &str) -> bool {
    if is_module_source_file(entry) {
        return true;
    }
    directory_has_index_module(base.join(entry))
}

/// A file bundled in the framework plugin directory `dir`.
pub fn classify_framework(dir: &Path, file: &str) -> PluginDescriptor {
    PluginDescriptor::framework(dir.join(file), module_stem(file))
}

/// A manifest dependency accepted by [`matches_prefix`].
pub fn classify_external(name: &str) -> PluginDescriptor {
    debug_assert!(
        name.contains(PREFIX_SEPARATOR),
        "`{name}` was not accepted by the prefix test"
    );
    PluginDescriptor::external(name)
}

/// A manifest dependency accepted by [`matches_namespace`].
///
/// Returns `None` if `name` is not namespaced at all.
pub fn classify_namespaced(name: &str) -> Option<PluginDescriptor> {
    let (namespace, module_name) = split_namespace(name)?;
    Some(PluginDescriptor::namespaced(name, namespace, module_name))
}

/// An entry of the local plugin directory `base` accepted by
/// [`is_internal_candidate`].
pub fn classify_internal(base: &Path, entry: &str) -> PluginDescriptor {
    PluginDescriptor::internal(base.join(entry), module_stem(entry))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pom_core::{PluginCategory, PluginLocation};
    use proptest::prelude::*;
    use std::path::PathBuf;

    #[test]
    fn prefix_requires_separator() {
        let prefixes = ["pom"];
        assert!(matches_prefix("pom-foo", &prefixes));
        assert!(!matches_prefix("pomfoo", &prefixes));
        assert!(!matches_prefix("pom", &prefixes));
        assert!(!matches_prefix("xpom-foo", &prefixes));
    }

    #[test]
    fn prefix_checks_every_configured_prefix() {
        let prefixes = vec!["pomegranate".to_string(), "pom".to_string()];
        assert!(matches_prefix("pomegranate-test-plugin", &prefixes));
        assert!(matches_prefix("pom-web", &prefixes));
        assert!(!matches_prefix("pomegranateless", &prefixes));
        assert!(!matches_prefix("express", &prefixes));
    }

    #[test]
    fn prefix_never_matches_namespaced_names() {
        assert!(!matches_prefix("@scope/plugin-a", &["@scope"]));
    }

    #[test]
    fn split_namespace_requires_marker_and_both_segments() {
        assert_eq!(
            split_namespace("@scope/plugin-a"),
            Some(("@scope", "plugin-a"))
        );
        assert_eq!(split_namespace("scope/plugin-a"), None);
        assert_eq!(split_namespace("@scope"), None);
        assert_eq!(split_namespace("@/plugin-a"), None);
        assert_eq!(split_namespace("@scope/"), None);
    }

    #[test]
    fn split_namespace_splits_at_first_separator() {
        assert_eq!(split_namespace("@scope/a/b"), Some(("@scope", "a/b")));
    }

    #[test]
    fn namespace_must_match_whole_segment() {
        let prefixes = ["@testNamespace"];
        assert!(matches_namespace("@testNamespace/test1", &prefixes));
        assert!(!matches_namespace("@testNamespaceExtra/test1", &prefixes));
        assert!(!matches_namespace("@other/test1", &prefixes));
        assert!(!matches_namespace("testNamespace/test1", &["testNamespace"]));
    }

    #[test]
    fn framework_classifier_joins_directory() {
        let d = classify_framework(Path::new("/fw"), "ApplicationEnvironment.js");
        assert_eq!(
            d.require(),
            &PluginLocation::Path(PathBuf::from("/fw/ApplicationEnvironment.js"))
        );
        assert_eq!(d.module_name(), "ApplicationEnvironment");
        assert_eq!(d.category(), PluginCategory::Framework);
        assert!(d.namespace().is_none());
    }

    #[test]
    fn external_classifier_keeps_name_verbatim() {
        let d = classify_external("pomegranate-test-plugin");
        assert_eq!(d.module_name(), "pomegranate-test-plugin");
        assert_eq!(
            d.require(),
            &PluginLocation::Package("pomegranate-test-plugin".into())
        );
        assert!(d.is_external());
        assert!(d.namespace().is_none());
    }

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic(expected = "not accepted by the prefix test")]
    fn external_classifier_rejects_unprefixed_name() {
        classify_external("pomegranate");
    }

    #[test]
    fn namespaced_classifier_splits_name() {
        let d = classify_namespaced("@scope/plugin-a").expect("namespaced");
        assert_eq!(d.namespace(), Some("@scope"));
        assert_eq!(d.module_name(), "plugin-a");
        assert_eq!(d.require(), &PluginLocation::Package("@scope/plugin-a".into()));
        assert!(d.is_external());
    }

    #[test]
    fn namespaced_classifier_rejects_plain_name() {
        assert!(classify_namespaced("pomegranate-foo").is_none());
    }

    #[test]
    fn internal_classifier_strips_extension() {
        let base = Path::new("/app/plugins");
        let file = classify_internal(base, "a.js");
        assert_eq!(file.module_name(), "a");
        assert_eq!(
            file.require(),
            &PluginLocation::Path(PathBuf::from("/app/plugins/a.js"))
        );
        assert!(file.is_internal());

        let dir = classify_internal(base, "b");
        assert_eq!(dir.module_name(), "b");
        assert_eq!(dir.require(), &PluginLocation::Path(PathBuf::from("/app/plugins/b")));
    }

    #[test]
    fn internal_candidate_file_needs_no_filesystem() {
        assert!(is_internal_candidate(Path::new("/nonexistent"), "a.js"));
    }

    #[test]
    fn internal_candidate_directory_needs_index() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::create_dir(dir.path().join("b")).unwrap();
        std::fs::write(dir.path().join("b").join("index.js"), "").unwrap();
        std::fs::create_dir(dir.path().join("c")).unwrap();
        std::fs::write(dir.path().join("readme.md"), "").unwrap();

        assert!(is_internal_candidate(dir.path(), "b"));
        assert!(!is_internal_candidate(dir.path(), "c"));
        assert!(!is_internal_candidate(dir.path(), "readme.md"));
        assert!(!is_internal_candidate(dir.path(), "missing"));
    }

    proptest! {
        #[test]
        fn prefix_with_separator_always_matches(
            prefix in "[a-z]{1,10}",
            rest in "[a-z0-9-]{0,10}",
        ) {
            let name = format!("{prefix}-{rest}");
            prop_assert!(matches_prefix(&name, &[prefix]));
        }

        #[test]
        fn prefix_without_separator_never_matches(
            prefix in "[a-z]{1,10}",
            rest in "[a-z0-9]{0,10}",
        ) {
            let name = format!("{prefix}{rest}");
            prop_assert!(!matches_prefix(&name, &[prefix]));
        }

        #[test]
        fn namespaced_names_split_back_into_parts(
            scope in "[a-zA-Z][a-zA-Z0-9]{0,8}",
            module in "[a-z][a-z0-9-]{0,8}",
        ) {
            let namespace = format!("@{scope}");
            let name = format!("{namespace}/{module}");
            prop_assert!(matches_namespace(&name, &[namespace.clone()]));

            let d = classify_namespaced(&name).unwrap();
            prop_assert_eq!(d.namespace(), Some(namespace.as_str()));
            prop_assert_eq!(d.module_name(), module.as_str());
        }
    }
}
