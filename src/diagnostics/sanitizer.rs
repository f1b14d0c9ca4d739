// SPDX-License-Identifier: MPL-2.0
//! Diagnostic categories and message sanitization.

use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

/// Categories of warnings raised while the page runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WarningType {
    /// Settings file could not be read or written.
    ConfigurationIssue,
    /// Local storage could not be read or written.
    StorageIssue,
    /// A deferred image failed to load.
    ImageLoadFailed,
    Other,
}

/// Categories of errors raised while the page runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorType {
    /// Diagnostics report could not be written.
    IoError,
    /// Unexpected failure caught by the panic hook.
    InternalError,
    Other,
}

static EMAIL_PATTERN: LazyLock<Option<Regex>> =
    LazyLock::new(|| Regex::new(r"[^\s@<>()]+@[^\s@<>()]+\.[^\s@<>()]+").ok());

// Runs of eight or more digits, optionally broken by phone punctuation.
static PHONE_PATTERN: LazyLock<Option<Regex>> =
    LazyLock::new(|| Regex::new(r"\+?\(?\d[\d()\s.\-]{6,}\d").ok());

/// Removes contact details from a message before it is stored.
///
/// E-mail addresses become `<email>` and phone-like digit runs become
/// `<phone>`, keeping the rest of the message readable.
///
/// # Examples
///
/// ```
/// use silva_site::diagnostics::sanitize_message;
///
/// let msg = "Submission from maria@example.com failed";
/// assert_eq!(sanitize_message(msg), "Submission from <email> failed");
///
/// let msg = "Callback (11) 99999-8888 requested";
/// assert_eq!(sanitize_message(msg), "Callback <phone> requested");
/// ```
#[must_use]
pub fn sanitize_message(message: &str) -> String {
    let mut sanitized = message.to_owned();
    if let Some(pattern) = EMAIL_PATTERN.as_ref() {
        sanitized = pattern.replace_all(&sanitized, "<email>").into_owned();
    }
    if let Some(pattern) = PHONE_PATTERN.as_ref() {
        sanitized = pattern.replace_all(&sanitized, "<phone>").into_owned();
    }
    sanitized
}
