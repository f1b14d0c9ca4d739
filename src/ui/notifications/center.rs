// SPDX-License-Identifier: MPL-2.0
//! Notification lifecycle management.
//!
//! The center owns a registry of mounted notifications (in mount order) and
//! a scheduler of pending transitions. Every notification runs on its own
//! timers, so mounting or dismissing one never affects another.
//!
//! Timeline of a notification shown at `t` with duration `d`:
//!
//! - `t`: mounted as [`Phase::Entering`]
//! - `t + enter_delay`: [`Phase::Visible`]
//! - `t + max(d, enter_delay)`: auto-removal starts, [`Phase::Exiting`]
//!   (skipped when `d` is zero)
//! - removal start `+ exit_delay`: detached from the registry

use super::notification::{Notification, NotificationId, Phase, Severity};
use crate::config::NotificationsConfig;
use crate::diagnostics::{DiagnosticsHandle, ErrorEvent, ErrorType, WarningEvent, WarningType};
use crate::i18n::fluent::I18n;
use crate::scheduler::Scheduler;
use std::time::{Duration, Instant};

/// Messages emitted by rendered toasts.
#[derive(Debug, Clone)]
pub enum Message {
    /// Close button pressed.
    Dismiss(NotificationId),
}

/// Transition and auto-dismiss timings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NotificationTiming {
    pub enter_delay: Duration,
    pub exit_delay: Duration,
    /// Used by the severity shortcuts and when `show` gets no duration.
    pub default_duration: Duration,
}

impl NotificationTiming {
    #[must_use]
    pub fn from_config(config: &NotificationsConfig) -> Self {
        Self {
            enter_delay: config.enter_delay(),
            exit_delay: config.exit_delay(),
            default_duration: config.default_duration(),
        }
    }
}

impl Default for NotificationTiming {
    fn default() -> Self {
        Self::from_config(&NotificationsConfig::default())
    }
}

/// Titles used by [`NotificationCenter::success`] and friends.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DefaultTitles {
    pub success: String,
    pub error: String,
    pub warning: String,
    pub info: String,
}

impl DefaultTitles {
    #[must_use]
    pub fn from_i18n(i18n: &I18n) -> Self {
        Self {
            success: i18n.tr(Severity::Success.default_title_key()),
            error: i18n.tr(Severity::Error.default_title_key()),
            warning: i18n.tr(Severity::Warning.default_title_key()),
            info: i18n.tr(Severity::Info.default_title_key()),
        }
    }

    #[must_use]
    pub fn for_severity(&self, severity: Severity) -> &str {
        match severity {
            Severity::Success => &self.success,
            Severity::Error => &self.error,
            Severity::Warning => &self.warning,
            Severity::Info => &self.info,
        }
    }
}

impl Default for DefaultTitles {
    fn default() -> Self {
        Self {
            success: "Sucesso".to_string(),
            error: "Erro".to_string(),
            warning: "Atenção".to_string(),
            info: "Informação".to_string(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Transition {
    Enter(NotificationId),
    AutoRemove(NotificationId),
    Detach(NotificationId),
}

/// Registry and timer owner for toast notifications.
#[derive(Debug)]
pub struct NotificationCenter {
    /// `false` when there is nowhere to render toasts.
    attached: bool,
    registry: Vec<Notification>,
    timers: Scheduler<Transition>,
    timing: NotificationTiming,
    titles: DefaultTitles,
    diagnostics: Option<DiagnosticsHandle>,
}

impl Default for NotificationCenter {
    fn default() -> Self {
        Self::new(NotificationTiming::default(), DefaultTitles::default())
    }
}

impl NotificationCenter {
    #[must_use]
    pub fn new(timing: NotificationTiming, titles: DefaultTitles) -> Self {
        Self {
            attached: true,
            registry: Vec::new(),
            timers: Scheduler::new(),
            timing,
            titles,
            diagnostics: None,
        }
    }

    /// A center with no rendering target: every `show` is a no-op.
    #[must_use]
    pub fn detached() -> Self {
        Self {
            attached: false,
            ..Self::default()
        }
    }

    /// Sets the diagnostics handle used to record warnings and errors.
    pub fn set_diagnostics(&mut self, handle: DiagnosticsHandle) {
        self.diagnostics = Some(handle);
    }

    /// Replaces the shortcut titles, e.g. after a language change.
    pub fn set_titles(&mut self, titles: DefaultTitles) {
        self.titles = titles;
    }

    #[must_use]
    pub fn timing(&self) -> NotificationTiming {
        self.timing
    }

    /// Mounts a notification and schedules its transitions.
    ///
    /// `duration` defaults to the configured default; zero keeps the
    /// notification until it is dismissed. Returns `None` when the center
    /// is [`detached`](Self::detached).
    pub fn show(
        &mut self,
        now: Instant,
        message: impl Into<String>,
        severity: Severity,
        title: Option<String>,
        duration: Option<Duration>,
    ) -> Option<NotificationId> {
        if !self.attached {
            return None;
        }

        let message = message.into();
        self.record(severity, &message);

        let duration = duration.unwrap_or(self.timing.default_duration);
        let notification = Notification::mount(now, severity, title, message, duration);
        let id = notification.id();
        self.registry.push(notification);

        self.timers
            .schedule(now, self.timing.enter_delay, Transition::Enter(id));
        if !duration.is_zero() {
            // Never start leaving before the enter transition ran.
            let delay = duration.max(self.timing.enter_delay);
            self.timers.schedule(now, delay, Transition::AutoRemove(id));
        }

        Some(id)
    }

    pub fn success(&mut self, now: Instant, message: impl Into<String>, title: Option<&str>) -> Option<NotificationId> {
        self.show_with_default_title(now, message, Severity::Success, title)
    }

    pub fn error(&mut self, now: Instant, message: impl Into<String>, title: Option<&str>) -> Option<NotificationId> {
        self.show_with_default_title(now, message, Severity::Error, title)
    }

    pub fn warning(&mut self, now: Instant, message: impl Into<String>, title: Option<&str>) -> Option<NotificationId> {
        self.show_with_default_title(now, message, Severity::Warning, title)
    }

    pub fn info(&mut self, now: Instant, message: impl Into<String>, title: Option<&str>) -> Option<NotificationId> {
        self.show_with_default_title(now, message, Severity::Info, title)
    }

    fn show_with_default_title(
        &mut self,
        now: Instant,
        message: impl Into<String>,
        severity: Severity,
        title: Option<&str>,
    ) -> Option<NotificationId> {
        let title = title
            .unwrap_or_else(|| self.titles.for_severity(severity))
            .to_string();
        self.show(now, message, severity, Some(title), None)
    }

    /// Starts the exit transition of `id`.
    ///
    /// Returns `false` without doing anything when the id is unknown or
    /// the notification is already leaving.
    pub fn remove(&mut self, now: Instant, id: NotificationId) -> bool {
        let Some(notification) = self.registry.iter_mut().find(|n| n.id() == id) else {
            return false;
        };
        if notification.phase() == Phase::Exiting {
            return false;
        }
        notification.set_phase(Phase::Exiting);
        self.timers
            .schedule(now, self.timing.exit_delay, Transition::Detach(id));
        true
    }

    /// Fires every transition due at `now`, in deadline order.
    ///
    /// Each transition runs at its own deadline, so follow-up timers keep
    /// their exact offsets however coarse the ticks are.
    pub fn tick(&mut self, now: Instant) {
        while let Some((due, transition)) = self.timers.pop_due(now) {
            match transition {
                Transition::Enter(id) => {
                    if let Some(n) = self.registry.iter_mut().find(|n| n.id() == id) {
                        if n.phase() == Phase::Entering {
                            n.set_phase(Phase::Visible);
                        }
                    }
                }
                Transition::AutoRemove(id) => {
                    self.remove(due, id);
                }
                Transition::Detach(id) => {
                    self.registry.retain(|n| n.id() != id);
                }
            }
        }
    }

    pub fn handle_message(&mut self, now: Instant, message: &Message) {
        match message {
            Message::Dismiss(id) => {
                self.remove(now, *id);
            }
        }
    }

    #[must_use]
    pub fn get(&self, id: NotificationId) -> Option<&Notification> {
        self.registry.iter().find(|n| n.id() == id)
    }

    /// Mounted notifications in mount order, including entering and exiting ones.
    pub fn visible(&self) -> impl Iterator<Item = &Notification> {
        self.registry.iter()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.registry.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.registry.is_empty()
    }

    #[must_use]
    pub fn has_notifications(&self) -> bool {
        !self.registry.is_empty()
    }

    #[must_use]
    pub fn has_pending_timers(&self) -> bool {
        !self.timers.is_empty()
    }

    /// Earliest pending transition, used to decide whether to keep ticking.
    #[must_use]
    pub fn next_deadline(&self) -> Option<Instant> {
        self.timers.next_deadline()
    }

    /// Drops every notification and pending transition immediately.
    pub fn clear(&mut self) {
        self.registry.clear();
        self.timers.clear();
    }

    fn record(&self, severity: Severity, message: &str) {
        let Some(handle) = &self.diagnostics else {
            return;
        };
        match severity {
            Severity::Warning => handle.log_warning(WarningEvent::new(WarningType::Other, message)),
            Severity::Error => handle.log_error(ErrorEvent::new(ErrorType::Other, message)),
            Severity::Success | Severity::Info => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::diagnostics::{DiagnosticEventKind, DiagnosticsCollector};

    fn ms(value: u64) -> Duration {
        Duration::from_millis(value)
    }

    fn center() -> NotificationCenter {
        NotificationCenter::default()
    }

    #[test]
    fn new_center_is_empty() {
        let center = center();
        assert!(!center.has_notifications());
        assert!(!center.has_pending_timers());
        assert_eq!(center.len(), 0);
    }

    #[test]
    fn show_mounts_entering_then_becomes_visible() {
        let start = Instant::now();
        let mut center = center();
        let id = center
            .show(start, "Olá", Severity::Info, None, None)
            .expect("attached center returns an id");

        assert_eq!(center.get(id).map(Notification::phase), Some(Phase::Entering));
        center.tick(start + ms(99));
        assert_eq!(center.get(id).map(Notification::phase), Some(Phase::Entering));
        center.tick(start + ms(100));
        assert_eq!(center.get(id).map(Notification::phase), Some(Phase::Visible));
    }

    #[test]
    fn auto_removal_then_detach() {
        let start = Instant::now();
        let mut center = center();
        let id = center.info(start, "Olá", None).unwrap();

        center.tick(start + ms(4999));
        assert_eq!(center.get(id).map(Notification::phase), Some(Phase::Visible));

        center.tick(start + ms(5000));
        assert_eq!(center.get(id).map(Notification::phase), Some(Phase::Exiting));

        center.tick(start + ms(5499));
        assert!(center.get(id).is_some());
        center.tick(start + ms(5500));
        assert!(center.get(id).is_none());
        assert!(!center.has_pending_timers());
    }

    #[test]
    fn coarse_tick_keeps_exact_offsets() {
        let start = Instant::now();
        let mut center = center();
        let id = center.info(start, "Olá", None).unwrap();

        // One late tick after removal started must also run the detach
        // scheduled relative to the removal deadline.
        center.tick(start + ms(5600));
        assert!(center.get(id).is_none());
    }

    #[test]
    fn zero_duration_persists_until_dismissed() {
        let start = Instant::now();
        let mut center = center();
        let id = center
            .show(start, "fixo", Severity::Error, None, Some(Duration::ZERO))
            .unwrap();

        center.tick(start + ms(600_000));
        assert_eq!(center.get(id).map(Notification::phase), Some(Phase::Visible));

        assert!(center.remove(start + ms(600_000), id));
        center.tick(start + ms(600_500));
        assert!(center.get(id).is_none());
    }

    #[test]
    fn short_duration_never_precedes_enter() {
        let start = Instant::now();
        let mut center = center();
        let id = center
            .show(start, "rápido", Severity::Info, None, Some(ms(10)))
            .unwrap();

        center.tick(start + ms(10));
        assert_eq!(center.get(id).map(Notification::phase), Some(Phase::Entering));

        center.tick(start + ms(100));
        assert_eq!(center.get(id).map(Notification::phase), Some(Phase::Exiting));
    }

    #[test]
    fn remove_twice_detaches_exactly_once() {
        let start = Instant::now();
        let mut center = center();
        let id = center.success(start, "ok", None).unwrap();

        assert!(center.remove(start, id));
        assert!(!center.remove(start + ms(1), id));
        assert_eq!(center.timers.len(), 3, "enter, auto-remove and one detach");

        center.tick(start + ms(500));
        assert!(center.get(id).is_none());
        assert!(!center.remove(start + ms(600), id));
    }

    #[test]
    fn remove_unknown_id_is_noop() {
        let mut center = center();
        assert!(!center.remove(Instant::now(), NotificationId::new()));
    }

    #[test]
    fn late_auto_removal_after_manual_dismiss_is_noop() {
        let start = Instant::now();
        let mut center = center();
        let id = center.warning(start, "cuidado", None).unwrap();
        center.handle_message(start + ms(200), &Message::Dismiss(id));
        center.tick(start + ms(700));
        assert!(center.get(id).is_none());

        center.tick(start + ms(10_000));
        assert!(!center.has_pending_timers());
        assert!(center.is_empty());
    }

    #[test]
    fn notifications_are_independent() {
        let start = Instant::now();
        let mut center = center();
        let first = center.info(start, "um", None).unwrap();
        let second = center.info(start + ms(50), "dois", None).unwrap();

        center.remove(start + ms(60), first);
        center.tick(start + ms(560));

        assert!(center.get(first).is_none());
        assert_eq!(center.get(second).map(Notification::phase), Some(Phase::Visible));
        let order: Vec<_> = center.visible().map(Notification::id).collect();
        assert_eq!(order, vec![second]);
    }

    #[test]
    fn visible_preserves_mount_order() {
        let start = Instant::now();
        let mut center = center();
        let ids: Vec<_> = (0..4)
            .map(|i| center.info(start, format!("n{i}"), None).unwrap())
            .collect();
        let listed: Vec<_> = center.visible().map(Notification::id).collect();
        assert_eq!(listed, ids);
    }

    #[test]
    fn show_then_remove_never_panics_for_any_severity() {
        for severity in Severity::ALL {
            for remove_offset in [0, 50, 100, 5000, 9000] {
                let start = Instant::now();
                let mut center = center();
                let id = center.show(start, "x", severity, None, None).unwrap();
                center.tick(start + ms(remove_offset));
                center.remove(start + ms(remove_offset), id);
                center.tick(start + ms(20_000));
                assert!(center.get(id).is_none());
            }
        }
    }

    #[test]
    fn shortcuts_use_default_titles() {
        let now = Instant::now();
        let mut center = center();
        let id = center.warning(now, "cuidado", None).unwrap();
        assert_eq!(center.get(id).and_then(Notification::title), Some("Atenção"));

        let id = center.error(now, "falhou", Some("Ops")).unwrap();
        assert_eq!(center.get(id).and_then(Notification::title), Some("Ops"));

        let id = center.show(now, "sem título", Severity::Info, None, None).unwrap();
        assert_eq!(center.get(id).and_then(Notification::title), None);
    }

    #[test]
    fn detached_center_ignores_show() {
        let mut center = NotificationCenter::detached();
        assert_eq!(center.success(Instant::now(), "ok", None), None);
        assert!(!center.has_notifications());
        assert!(!center.has_pending_timers());
    }

    #[test]
    fn clear_drops_everything() {
        let now = Instant::now();
        let mut center = center();
        center.info(now, "a", None);
        center.error(now, "b", None);
        center.clear();
        assert!(center.is_empty());
        assert_eq!(center.next_deadline(), None);
    }

    #[test]
    fn warnings_and_errors_are_recorded() {
        let mut collector = DiagnosticsCollector::default();
        let mut center = center();
        center.set_diagnostics(collector.handle());

        let now = Instant::now();
        center.success(now, "ok", None);
        center.warning(now, "cuidado", None);
        center.error(now, "falhou", None);
        collector.process_pending();

        let kinds: Vec<_> = collector
            .iter()
            .map(|event| match &event.kind {
                DiagnosticEventKind::Warning { .. } => "warning",
                DiagnosticEventKind::Error { .. } => "error",
                _ => "other",
            })
            .collect();
        assert_eq!(kinds, vec!["warning", "error"]);
    }

    #[test]
    fn timing_follows_config() {
        let config = NotificationsConfig {
            enter_delay_ms: Some(10),
            exit_delay_ms: Some(20),
            default_duration_ms: Some(30),
        };
        let timing = NotificationTiming::from_config(&config);
        assert_eq!(timing.enter_delay, ms(10));
        assert_eq!(timing.exit_delay, ms(20));
        assert_eq!(timing.default_duration, ms(30));
    }
}
