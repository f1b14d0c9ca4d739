// SPDX-License-Identifier: MPL-2.0
//! Core notification data structures.

use crate::ui::design_tokens::{opacity, palette};
use iced::Color;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{Duration, Instant};

/// Unique identifier for a notification. Never reused within a process.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NotificationId(u64);

impl NotificationId {
    /// Allocates the next identifier.
    #[must_use]
    pub fn new() -> Self {
        static COUNTER: AtomicU64 = AtomicU64::new(0);
        Self(COUNTER.fetch_add(1, Ordering::Relaxed))
    }
}

impl Default for NotificationId {
    fn default() -> Self {
        Self::new()
    }
}

/// Severity level, which drives the accent color, icon and default title.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Severity {
    Success,
    Error,
    Warning,
    #[default]
    Info,
}

impl Severity {
    pub const ALL: [Severity; 4] = [
        Severity::Success,
        Severity::Error,
        Severity::Warning,
        Severity::Info,
    ];

    #[must_use]
    pub fn color(self) -> Color {
        match self {
            Severity::Success => palette::SUCCESS_500,
            Severity::Error => palette::ERROR_500,
            Severity::Warning => palette::WARNING_500,
            Severity::Info => palette::INFO_500,
        }
    }

    /// Glyph drawn next to the message.
    #[must_use]
    pub fn glyph(self) -> &'static str {
        match self {
            Severity::Success => "✓",
            Severity::Error => "✕",
            Severity::Warning => "!",
            Severity::Info => "i",
        }
    }

    /// i18n key of the title used by the severity shortcuts.
    #[must_use]
    pub fn default_title_key(self) -> &'static str {
        match self {
            Severity::Success => "notification-title-success",
            Severity::Error => "notification-title-error",
            Severity::Warning => "notification-title-warning",
            Severity::Info => "notification-title-info",
        }
    }
}

/// Lifecycle of a mounted notification.
///
/// `Entering` → `Visible` → `Exiting`, after which the notification is
/// detached from the registry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Mounted, waiting for the enter transition.
    Entering,
    Visible,
    /// Exit transition running; detached when it ends.
    Exiting,
}

impl Phase {
    /// Opacity applied to the rendered toast.
    #[must_use]
    pub fn opacity(self) -> f32 {
        match self {
            Phase::Entering | Phase::Exiting => opacity::TRANSPARENT,
            Phase::Visible => opacity::OPAQUE,
        }
    }
}

/// A notification mounted in the center.
#[derive(Debug, Clone)]
pub struct Notification {
    id: NotificationId,
    severity: Severity,
    title: Option<String>,
    message: String,
    /// `Duration::ZERO` keeps the notification until dismissed.
    duration: Duration,
    phase: Phase,
    mounted_at: Instant,
}

impl Notification {
    pub(super) fn mount(
        now: Instant,
        severity: Severity,
        title: Option<String>,
        message: String,
        duration: Duration,
    ) -> Self {
        Self {
            id: NotificationId::new(),
            severity,
            title: title.filter(|t| !t.is_empty()),
            message,
            duration,
            phase: Phase::Entering,
            mounted_at: now,
        }
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
    pub fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    #[must_use]
    pub fn duration(&self) -> Duration {
        self.duration
    }

    #[must_use]
    pub fn is_persistent(&self) -> bool {
        self.duration.is_zero()
    }

    #[must_use]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub(super) fn set_phase(&mut self, phase: Phase) {
        self.phase = phase;
    }

    #[must_use]
    pub fn mounted_at(&self) -> Instant {
        self.mounted_at
    }
}
