// SPDX-License-Identifier: MPL-2.0
//! Diagnostics collector for aggregating and storing diagnostic events.

use std::fs;
use std::io;
use std::path::Path;
use std::time::Instant;

use chrono::{DateTime, Utc};
use crossbeam_channel::{bounded, Receiver, Sender};

use super::{
    sanitize_message, AppStateEvent, BufferCapacity, CircularBuffer, DiagnosticEvent,
    DiagnosticEventKind, DiagnosticReport, ErrorEvent, ReportMetadata, SerializableEvent,
    UserAction, WarningEvent,
};

/// Handle for sending diagnostic events to the collector.
///
/// Cheap to clone and shareable across threads. Sends never block: when
/// the channel is full the event is dropped.
#[derive(Clone, Debug)]
pub struct DiagnosticsHandle {
    event_tx: Sender<DiagnosticEvent>,
}

impl DiagnosticsHandle {
    pub fn log_action(&self, action: UserAction) {
        self.log_action_with_details(action, None);
    }

    pub fn log_action_with_details(&self, action: UserAction, details: Option<String>) {
        self.send(DiagnosticEventKind::UserAction { action, details });
    }

    pub fn log_state(&self, state: AppStateEvent) {
        self.send(DiagnosticEventKind::AppState { state });
    }

    /// Logs a warning. The message is sanitized first.
    pub fn log_warning(&self, warning: WarningEvent) {
        let event = WarningEvent {
            message: sanitize_message(&warning.message),
            ..warning
        };
        self.send(DiagnosticEventKind::Warning { event });
    }

    /// Logs an error. The message is sanitized first.
    pub fn log_error(&self, error: ErrorEvent) {
        let event = ErrorEvent {
            message: sanitize_message(&error.message),
            ..error
        };
        self.send(DiagnosticEventKind::Error { event });
    }

    fn send(&self, kind: DiagnosticEventKind) {
        // Non-blocking send, drop if channel is full
        let _ = self.event_tx.try_send(DiagnosticEvent::new(kind));
    }
}

/// Central collector for diagnostic events.
///
/// Receives events through a channel and keeps them in a bounded circular
/// buffer; old events are evicted when the buffer is full.
pub struct DiagnosticsCollector {
    buffer: CircularBuffer<DiagnosticEvent>,
    event_rx: Receiver<DiagnosticEvent>,
    event_tx: Sender<DiagnosticEvent>,
    collection_started_at: Instant,
    collection_started_at_utc: DateTime<Utc>,
}

const DEFAULT_CHANNEL_CAPACITY: usize = 100;

impl DiagnosticsCollector {
    #[must_use]
    pub fn new(capacity: BufferCapacity) -> Self {
        let (event_tx, event_rx) = bounded(DEFAULT_CHANNEL_CAPACITY);
        Self {
            buffer: CircularBuffer::new(capacity),
            event_rx,
            event_tx,
            collection_started_at: Instant::now(),
            collection_started_at_utc: Utc::now(),
        }
    }

    /// Creates a handle for sending events to this collector.
    #[must_use]
    pub fn handle(&self) -> DiagnosticsHandle {
        DiagnosticsHandle {
            event_tx: self.event_tx.clone(),
        }
    }

    /// Drains the channel into the buffer. Called on every UI tick.
    pub fn process_pending(&mut self) {
        while let Ok(event) = self.event_rx.try_recv() {
            self.buffer.push(event);
        }
    }

    /// Logs an action directly to the buffer, bypassing the channel.
    pub fn log_action(&mut self, action: UserAction) {
        self.buffer
            .push(DiagnosticEvent::new(DiagnosticEventKind::UserAction {
                action,
                details: None,
            }));
    }

    /// Logs a state change directly to the buffer, bypassing the channel.
    pub fn log_state(&mut self, state: AppStateEvent) {
        self.buffer
            .push(DiagnosticEvent::new(DiagnosticEventKind::AppState { state }));
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.buffer.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }

    /// Stored events, oldest first.
    pub fn iter(&self) -> impl Iterator<Item = &DiagnosticEvent> {
        self.buffer.iter()
    }

    pub fn clear(&mut self) {
        self.buffer.clear();
    }

    #[must_use]
    pub fn capacity(&self) -> usize {
        self.buffer.capacity()
    }

    /// Exports all collected events as a pretty JSON report.
    ///
    /// # Errors
    ///
    /// Returns an error if JSON serialization fails.
    pub fn export_json(&self) -> serde_json::Result<String> {
        self.build_report().to_json()
    }

    /// Writes the JSON report to `path` atomically.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization or any file operation fails.
    pub fn export_to_file(&self, path: impl AsRef<Path>) -> io::Result<()> {
        let json = self.export_json().map_err(io::Error::other)?;
        write_atomic(path.as_ref(), &json)
    }

    #[allow(clippy::cast_possible_truncation)] // Duration in ms fits comfortably in u64
    fn build_report(&self) -> DiagnosticReport {
        let collection_duration_ms = self.collection_started_at.elapsed().as_millis() as u64;
        let events: Vec<SerializableEvent> = self
            .buffer
            .iter()
            .map(|event| {
                SerializableEvent::new(
                    event.timestamp,
                    self.collection_started_at,
                    event.kind.clone(),
                )
            })
            .collect();
        let metadata = ReportMetadata::new(
            self.collection_started_at_utc,
            collection_duration_ms,
            events.len(),
        );
        DiagnosticReport::new(metadata, events)
    }
}

impl Default for DiagnosticsCollector {
    fn default() -> Self {
        Self::new(BufferCapacity::default())
    }
}

/// Writes through a temporary sibling file, then renames over `path`.
fn write_atomic(path: &Path, content: &str) -> io::Result<()> {
    let temp_path = path.with_extension("json.tmp");
    fs::write(&temp_path, content)?;
    if let Err(e) = fs::rename(&temp_path, path) {
        let _ = fs::remove_file(&temp_path);
        return Err(e);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::diagnostics::{ErrorType, WarningType};

    #[test]
    fn collector_starts_empty() {
        let collector = DiagnosticsCollector::default();
        assert!(collector.is_empty());
        assert_eq!(collector.capacity(), BufferCapacity::default().value());
    }

    #[test]
    fn handle_events_arrive_after_processing() {
        let mut collector = DiagnosticsCollector::default();
        let handle = collector.handle();

        handle.log_action(UserAction::CarouselNext);
        handle.log_state(AppStateEvent::CountersStarted);
        assert!(collector.is_empty());

        collector.process_pending();
        assert_eq!(collector.len(), 2);
    }

    #[test]
    fn handle_is_clone() {
        let mut collector = DiagnosticsCollector::default();
        let first = collector.handle();
        let second = first.clone();
        first.log_action(UserAction::AcceptCookies);
        second.log_action(UserAction::RejectCookies);
        collector.process_pending();
        assert_eq!(collector.len(), 2);
    }

    #[test]
    fn warnings_and_errors_are_sanitized() {
        let mut collector = DiagnosticsCollector::default();
        let handle = collector.handle();
        handle.log_warning(WarningEvent::new(
            WarningType::StorageIssue,
            "retry for maria@example.com",
        ));
        handle.log_error(ErrorEvent::new(
            ErrorType::Other,
            "timeout calling 11999998888",
        ));
        collector.process_pending();

        let messages: Vec<_> = collector
            .iter()
            .filter_map(|event| match &event.kind {
                DiagnosticEventKind::Warning { event } => Some(event.message.clone()),
                DiagnosticEventKind::Error { event } => Some(event.message.clone()),
                _ => None,
            })
            .collect();
        assert_eq!(
            messages,
            vec!["retry for <email>".to_string(), "timeout calling <phone>".to_string()]
        );
    }

    #[test]
    fn direct_logging_bypasses_channel() {
        let mut collector = DiagnosticsCollector::default();
        collector.log_action(UserAction::ToggleContrast);
        collector.log_state(AppStateEvent::CookieBannerShown);
        assert_eq!(collector.len(), 2);
    }

    #[test]
    fn export_json_full_pipeline() {
        let mut collector = DiagnosticsCollector::default();
        collector.log_action(UserAction::SubmitContactForm);
        collector.log_state(AppStateEvent::SubmissionFinished { success: true });

        let json = collector.export_json().expect("export should succeed");
        let parsed: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed["metadata"]["event_count"], 2);
        assert_eq!(parsed["events"][0]["type"], "user_action");
        assert_eq!(parsed["events"][0]["action"], "submit_contact_form");
        assert_eq!(parsed["events"][1]["state"], "submission_finished");
    }

    #[test]
    fn export_to_file_writes_valid_json() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("report.json");
        let mut collector = DiagnosticsCollector::default();
        collector.log_action(UserAction::IncreaseFontSize);

        collector.export_to_file(&path).expect("export should succeed");

        let content = std::fs::read_to_string(&path).unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&content).unwrap();
        assert_eq!(parsed["summary"]["user_actions"], 1);
        assert!(!path.with_extension("json.tmp").exists());
    }

    #[test]
    fn clear_removes_all_events() {
        let mut collector = DiagnosticsCollector::default();
        collector.log_action(UserAction::CarouselPrevious);
        collector.clear();
        assert!(collector.is_empty());
    }
}
