// SPDX-FileCopyrightText: 2026 Pom Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Collaborator traits consumed by the plugin finder.

pub mod logger;

pub use logger::{FrameworkLogger, TracingLogger};
