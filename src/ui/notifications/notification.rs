// SPDX-License-Identifier: MPL-2.0
//! A single toast: what it says, how it looks and how long it stays up.

use crate::ui::design_tokens::palette;
use iced::Color;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;

/// Identifies a toast across the visible list and the backlog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NotificationId(u64);

impl NotificationId {
    fn next() -> Self {
        static NEXT: AtomicU64 = AtomicU64::new(0);
        Self(NEXT.fetch_add(1, Ordering::Relaxed))
    }
}

/// Tone of a toast, which picks its accent and its lifetime.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    /// A user action went through (link copied).
    Success,
    /// Something quietly degraded but the page still works.
    Info,
    /// A problem worth reading, such as an unreadable settings file.
    Warning,
}

impl Severity {
    #[must_use]
    pub fn color(self) -> Color {
        match self {
            Self::Success => palette::SUCCESS_500,
            Self::Info => palette::INFO_500,
            Self::Warning => palette::WARNING_500,
        }
    }

    /// How long a toast stays on screen once shown.
    #[must_use]
    pub fn lifetime(self) -> Duration {
        match self {
            Self::Success | Self::Info => Duration::from_secs(3),
            Self::Warning => Duration::from_secs(5),
        }
    }
}

#[derive(Debug, Clone)]
pub struct Notification {
    id: NotificationId,
    severity: Severity,
    message: String,
}

impl Notification {
    fn new(severity: Severity, message: impl Into<String>) -> Self {
        Self {
            id: NotificationId::next(),
            severity,
            message: message.into(),
        }
    }

    pub fn success(message: impl Into<String>) -> Self {
        Self::new(Severity::Success, message)
    }

    pub fn info(message: impl Into<String>) -> Self {
        Self::new(Severity::Info, message)
    }

    pub fn warning(message: impl Into<String>) -> Self {
        Self::new(Severity::Warning, message)
    }

    #[must_use]
    pub fn id(&self) -> NotificationId {
        self.id
    }

    #[must_use]
    pub fn severity(&self) -> Severity {
        self.severity
    }

    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_toast_gets_its_own_id() {
        let first = Notification::success("copiado");
        let second = Notification::success("copiado");
        assert_ne!(first.id(), second.id());
    }

    #[test]
    fn severities_have_distinct_accents() {
        assert_ne!(Severity::Success.color(), Severity::Info.color());
        assert_ne!(Severity::Info.color(), Severity::Warning.color());
        assert_ne!(Severity::Success.color(), Severity::Warning.color());
    }

    #[test]
    fn warnings_outlive_confirmations() {
        assert!(Severity::Warning.lifetime() > Severity::Success.lifetime());
        assert_eq!(Severity::Info.lifetime(), Severity::Success.lifetime());
    }

    #[test]
    fn constructors_pick_the_severity() {
        assert_eq!(Notification::success("").severity(), Severity::Success);
        assert_eq!(Notification::info("").severity(), Severity::Info);
        assert_eq!(Notification::warning("aviso").severity(), Severity::Warning);
        assert_eq!(Notification::warning("aviso").message(), "aviso");
    }
}
