// SPDX-License-Identifier: MPL-2.0
//! Diagnostic report generation and JSON export.

use std::time::Instant;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::DiagnosticEventKind;

/// Metadata about a diagnostic report.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ReportMetadata {
    /// When the report was generated (RFC 3339).
    pub generated_at: String,
    /// Crate version that generated the report.
    pub app_version: String,
    /// When collection started (RFC 3339).
    pub collection_started_at: String,
    pub collection_duration_ms: u64,
    pub event_count: usize,
}

impl ReportMetadata {
    #[must_use]
    pub fn new(
        collection_started_at: DateTime<Utc>,
        collection_duration_ms: u64,
        event_count: usize,
    ) -> Self {
        Self {
            generated_at: Utc::now().to_rfc3339(),
            app_version: env!("CARGO_PKG_VERSION").to_string(),
            collection_started_at: collection_started_at.to_rfc3339(),
            collection_duration_ms,
            event_count,
        }
    }
}

/// A diagnostic event with its timestamp made relative to collection start.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SerializableEvent {
    /// Milliseconds since collection started.
    pub timestamp_ms: u64,
    #[serde(flatten)]
    pub kind: DiagnosticEventKind,
}

impl SerializableEvent {
    #[must_use]
    #[allow(clippy::cast_possible_truncation)] // Duration in ms fits comfortably in u64
    pub fn new(
        event_timestamp: Instant,
        collection_start: Instant,
        kind: DiagnosticEventKind,
    ) -> Self {
        let timestamp_ms = event_timestamp
            .saturating_duration_since(collection_start)
            .as_millis() as u64;
        Self { timestamp_ms, kind }
    }
}

/// Event counts per category.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct ReportSummary {
    pub user_actions: usize,
    pub state_changes: usize,
    pub warnings: usize,
    pub errors: usize,
}

impl ReportSummary {
    #[must_use]
    pub fn from_events(events: &[SerializableEvent]) -> Self {
        events
            .iter()
            .fold(Self::default(), |mut summary, event| {
                match event.kind {
                    DiagnosticEventKind::UserAction { .. } => summary.user_actions += 1,
                    DiagnosticEventKind::AppState { .. } => summary.state_changes += 1,
                    DiagnosticEventKind::Warning { .. } => summary.warnings += 1,
                    DiagnosticEventKind::Error { .. } => summary.errors += 1,
                }
                summary
            })
    }
}

/// A complete diagnostic report ready for JSON export.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DiagnosticReport {
    pub metadata: ReportMetadata,
    pub events: Vec<SerializableEvent>,
    pub summary: ReportSummary,
}

impl DiagnosticReport {
    #[must_use]
    pub fn new(metadata: ReportMetadata, events: Vec<SerializableEvent>) -> Self {
        let summary = ReportSummary::from_events(&events);
        Self {
            metadata,
            events,
            summary,
        }
    }

    /// Exports the report as pretty-printed JSON.
    ///
    /// # Errors
    ///
    /// Returns an error if JSON serialization fails.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::diagnostics::{ErrorEvent, ErrorType, UserAction, WarningEvent, WarningType};
    use std::time::Duration;

    fn events() -> Vec<SerializableEvent> {
        let start = Instant::now();
        vec![
            SerializableEvent::new(
                start + Duration::from_millis(10),
                start,
                DiagnosticEventKind::UserAction {
                    action: UserAction::AcceptCookies,
                    details: None,
                },
            ),
            SerializableEvent::new(
                start + Duration::from_millis(20),
                start,
                DiagnosticEventKind::Warning {
                    event: WarningEvent::new(WarningType::Other, "w"),
                },
            ),
            SerializableEvent::new(
                start + Duration::from_millis(30),
                start,
                DiagnosticEventKind::Error {
                    event: ErrorEvent::new(ErrorType::Other, "e"),
                },
            ),
        ]
    }

    #[test]
    fn timestamps_are_relative_to_collection_start() {
        let events = events();
        let stamps: Vec<_> = events.iter().map(|e| e.timestamp_ms).collect();
        assert_eq!(stamps, vec![10, 20, 30]);
    }

    #[test]
    fn event_before_start_saturates_to_zero() {
        let earlier = Instant::now();
        let start = earlier + Duration::from_millis(5);
        let event = SerializableEvent::new(
            earlier,
            start,
            DiagnosticEventKind::UserAction {
                action: UserAction::ToggleContrast,
                details: None,
            },
        );
        assert_eq!(event.timestamp_ms, 0);
    }

    #[test]
    fn summary_counts_each_category() {
        let summary = ReportSummary::from_events(&events());
        assert_eq!(
            summary,
            ReportSummary {
                user_actions: 1,
                state_changes: 0,
                warnings: 1,
                errors: 1,
            }
        );
    }

    #[test]
    fn report_json_contains_metadata_and_events() {
        let events = events();
        let metadata = ReportMetadata::new(Utc::now(), 30, events.len());
        let json = DiagnosticReport::new(metadata, events)
            .to_json()
            .expect("serialization should succeed");
        let parsed: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed["metadata"]["event_count"], 3);
        assert_eq!(parsed["events"].as_array().map(Vec::len), Some(3));
        assert_eq!(parsed["summary"]["errors"], 1);
    }
}
