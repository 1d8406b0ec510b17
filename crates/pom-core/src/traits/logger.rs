// SPDX-FileCopyrightText: 2026 Pom Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! The framework logger that discovery reports its progress through.

/// Line-oriented logger owned by the host framework.
///
/// Discovery emits a start line, the active prefixes, and one summary line
/// per plugin group through this trait.
pub trait FrameworkLogger {
    fn log(&self, message: &str);
}

impl<T: FrameworkLogger + ?Sized> FrameworkLogger for &T {
    fn log(&self, message: &str) {
        (**self).log(message);
    }
}

/// Forwards framework log lines to `tracing` at info level.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingLogger;

impl FrameworkLogger for TracingLogger {
    fn log(&self, message: &str) {
        tracing::info!("{message}");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tracing_test::traced_test;

    #[test]
    #[traced_test]
    fn tracing_logger_emits_info_event() {
        TracingLogger.log("Discovering plugins.");
        assert!(logs_contain("Discovering plugins."));
    }

    #[test]
    #[traced_test]
    fn logger_reference_forwards() {
        fn emit<L: FrameworkLogger>(logger: L) {
            logger.log("forwarded line");
        }
        emit(&TracingLogger);
        assert!(logs_contain("forwarded line"));
    }
}
