// SPDX-License-Identifier: MPL-2.0
//! Diagnostics module for collecting and exporting activity reports.
//!
//! Events raised while the page is in use (visitor actions, widget state
//! changes, warnings and errors) are captured in a memory-bounded circular
//! buffer and can be exported as a JSON report.
//!
//! # Architecture
//!
//! - [`CircularBuffer`]: Generic ring buffer with configurable capacity
//! - [`DiagnosticEvent`]: Timestamped event with a [`DiagnosticEventKind`]
//! - [`DiagnosticsCollector`] / [`DiagnosticsHandle`]: Owner of the buffer and
//!   the cheap, cloneable sender handed to services
//!
//! # Privacy
//!
//! Warning and error messages are sanitized before they are stored: e-mail
//! addresses and phone numbers typed into the contact form never reach the
//! report.

mod buffer;
mod collector;
mod events;
mod report;
mod sanitizer;

pub use buffer::{BufferCapacity, CircularBuffer};
pub use collector::{DiagnosticsCollector, DiagnosticsHandle};
pub use events::{
    AppStateEvent, DiagnosticEvent, DiagnosticEventKind, ErrorEvent, UserAction, WarningEvent,
};
pub use report::{DiagnosticReport, ReportMetadata, ReportSummary, SerializableEvent};
pub use sanitizer::{sanitize_message, ErrorType, WarningType};
