// SPDX-FileCopyrightText: 2026 Pom Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Core library for the Pom plugin finder.
//!
//! This crate provides the descriptor model produced by plugin discovery,
//! the shared error type, and the logger trait discovery reports through.

pub mod error;
pub mod traits;
pub mod types;

// Re-export key items at crate root for ergonomic imports.
pub use error::PomError;
pub use traits::{FrameworkLogger, TracingLogger};
pub use types::{PluginCategory, PluginDescriptor, PluginLocation};
