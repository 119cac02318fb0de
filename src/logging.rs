// SPDX-License-Identifier: MPL-2.0
//! Logging capability used by the catalog loader.
//!
//! The loader reports seeding progress and read failures through a small
//! [`Logger`] trait instead of a concrete backend, so host applications can
//! route messages into whatever logging they already have. [`LogFacade`]
//! forwards to the `log` crate macros; [`Prefixed`] wraps any logger to tag
//! its messages with a bracketed label.

/// Fire-and-forget message sink for load-time diagnostics.
pub trait Logger {
    /// Progress messages, e.g. first-run seeding.
    fn info(&self, message: &str);

    /// Degraded but recoverable situations.
    fn warn(&self, message: &str);

    /// Failures that were contained (a skipped locale, an unread file).
    fn error(&self, message: &str);
}

/// Decorator that prepends `[label]` to every message before delegating.
///
/// Composed at construction time:
///
/// ```
/// use lingua_lens::logging::{LogFacade, Logger, Prefixed};
///
/// let logger = Prefixed::new("i18n", LogFacade);
/// logger.info("catalogs loaded");
/// ```
pub struct Prefixed<L> {
    label: String,
    inner: L,
}

impl<L: Logger> Prefixed<L> {
    /// Wraps `inner`, tagging its messages with `label`.
    pub fn new(label: impl Into<String>, inner: L) -> Self {
        Self {
            label: label.into(),
            inner,
        }
    }

    fn tag(&self, message: &str) -> String {
        format!("[{}] {}", self.label, message)
    }
}

impl<L: Logger> Logger for Prefixed<L> {
    fn info(&self, message: &str) {
        self.inner.info(&self.tag(message));
    }

    fn warn(&self, message: &str) {
        self.inner.warn(&self.tag(message));
    }

    fn error(&self, message: &str) {
        self.inner.error(&self.tag(message));
    }
}

/// Default sink that forwards to the `log` crate macros.
///
/// Messages go wherever the host application's `log` backend sends them,
/// or nowhere if no backend is installed.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogFacade;

impl Logger for LogFacade {
    fn info(&self, message: &str) {
        log::info!("{message}");
    }

    fn warn(&self, message: &str) {
        log::warn!("{message}");
    }

    fn error(&self, message: &str) {
        log::error!("{message}");
    }
}
