// SPDX-License-Identifier: MPL-2.0
//! Diagnostic event types for activity tracking.

use std::time::Instant;

use serde::{Deserialize, Serialize};

use super::{ErrorType, WarningType};

/// Visitor-initiated actions worth correlating with warnings and errors.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum UserAction {
    // Navigation
    ToggleMobileMenu,
    NavigateToSection {
        section: String,
    },

    // Contact form
    SubmitContactForm,
    /// Submission blocked by validation.
    ContactFormRejected {
        first_invalid: String,
    },

    // Widgets
    CarouselNext,
    CarouselPrevious,
    CarouselGoTo {
        index: usize,
    },
    ToggleFaqItem {
        index: usize,
    },
    IncreaseFontSize,
    DecreaseFontSize,
    ToggleContrast,
    AcceptCookies,
    RejectCookies,
    DismissNotification,
}

/// Widget or page state transitions.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum AppStateEvent {
    SubmissionStarted,
    SubmissionFinished { success: bool },
    CountersStarted,
    CookieBannerShown,
    CookieBannerHidden,
    LoadingOverlayShown,
    LoadingOverlayHidden,
    LanguageChanged { locale: String },
}

/// A non-critical issue.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct WarningEvent {
    pub warning_type: WarningType,
    pub message: String,
}

impl WarningEvent {
    #[must_use]
    pub fn new(warning_type: WarningType, message: impl Into<String>) -> Self {
        Self {
            warning_type,
            message: message.into(),
        }
    }
}

/// A failure that prevented an operation from completing.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ErrorEvent {
    pub error_type: ErrorType,
    pub message: String,
}

impl ErrorEvent {
    #[must_use]
    pub fn new(error_type: ErrorType, message: impl Into<String>) -> Self {
        Self {
            error_type,
            message: message.into(),
        }
    }
}

/// A diagnostic event with timestamp.
#[derive(Debug, Clone)]
pub struct DiagnosticEvent {
    /// When the event occurred (monotonic clock).
    pub timestamp: Instant,
    pub kind: DiagnosticEventKind,
}

impl DiagnosticEvent {
    /// Creates an event stamped with the current instant.
    #[must_use]
    pub fn new(kind: DiagnosticEventKind) -> Self {
        Self::with_timestamp(kind, Instant::now())
    }

    #[must_use]
    pub fn with_timestamp(kind: DiagnosticEventKind, timestamp: Instant) -> Self {
        Self { timestamp, kind }
    }
}

/// The type and associated data for a diagnostic event.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum DiagnosticEventKind {
    UserAction {
        action: UserAction,
        #[serde(skip_serializing_if = "Option::is_none")]
        details: Option<String>,
    },
    AppState {
        state: AppStateEvent,
    },
    Warning {
        #[serde(flatten)]
        event: WarningEvent,
    },
    Error {
        #[serde(flatten)]
        event: ErrorEvent,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn with_timestamp_uses_provided_instant() {
        let timestamp = Instant::now();
        let event = DiagnosticEvent::with_timestamp(
            DiagnosticEventKind::UserAction {
                action: UserAction::CarouselNext,
                details: None,
            },
            timestamp,
        );
        assert_eq!(event.timestamp, timestamp);
    }

    #[test]
    fn user_action_serializes_with_tag() {
        let kind = DiagnosticEventKind::UserAction {
            action: UserAction::ToggleFaqItem { index: 2 },
            details: None,
        };
        let json = serde_json::to_string(&kind).expect("serialization should succeed");
        assert!(json.contains("\"type\":\"user_action\""));
        assert!(json.contains("\"action\":\"toggle_faq_item\""));
        assert!(json.contains("\"index\":2"));
        assert!(!json.contains("details"));
    }

    #[test]
    fn warning_fields_are_flattened() {
        let kind = DiagnosticEventKind::Warning {
            event: WarningEvent::new(WarningType::StorageIssue, "quota exceeded"),
        };
        let json = serde_json::to_string(&kind).expect("serialization should succeed");
        assert!(json.contains("\"type\":\"warning\""));
        assert!(json.contains("\"warning_type\":\"storage_issue\""));
        assert!(json.contains("\"message\":\"quota exceeded\""));
    }

    #[test]
    fn error_deserializes_from_json() {
        let json = r#"{"type":"error","error_type":"internal_error","message":"panic"}"#;
        let kind: DiagnosticEventKind =
            serde_json::from_str(json).expect("deserialization should succeed");
        match kind {
            DiagnosticEventKind::Error { event } => {
                assert_eq!(event.error_type, ErrorType::InternalError);
                assert_eq!(event.message, "panic");
            }
            _ => panic!("expected Error variant"),
        }
    }

    #[test]
    fn app_state_serializes_nested_tag() {
        let kind = DiagnosticEventKind::AppState {
            state: AppStateEvent::SubmissionFinished { success: true },
        };
        let json = serde_json::to_string(&kind).expect("serialization should succeed");
        assert!(json.contains("\"state\":\"submission_finished\""));
        assert!(json.contains("\"success\":true"));
    }
}
