// SPDX-License-Identifier: MPL-2.0
//! Contact form submission port.

use futures_util::future::BoxFuture;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Validated contact form values, as they would be posted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactPayload {
    #[serde(rename = "nome")]
    pub name: String,
    pub email: String,
    #[serde(rename = "telefone")]
    pub phone: String,
    #[serde(rename = "assunto")]
    pub subject: String,
    #[serde(rename = "mensagem")]
    pub message: String,
    #[serde(rename = "lgpd")]
    pub consent: bool,
}

impl ContactPayload {
    /// First whitespace-separated token of the name, used to greet the sender.
    #[must_use]
    pub fn first_name(&self) -> &str {
        self.name.split_whitespace().next().unwrap_or_default()
    }
}

/// Why a submission did not go through.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitError {
    /// The endpoint could not be reached.
    Unavailable(String),
    /// The endpoint refused the message.
    Rejected(String),
    /// No answer within the allowed time.
    Timeout,
}

impl SubmitError {
    /// Returns the i18n message key for this error.
    #[must_use]
    pub fn i18n_key(&self) -> &'static str {
        match self {
            SubmitError::Unavailable(_) => "contact-error-unavailable",
            SubmitError::Rejected(_) => "contact-error-rejected",
            SubmitError::Timeout => "contact-error-timeout",
        }
    }
}

impl fmt::Display for SubmitError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SubmitError::Unavailable(msg) => write!(f, "endpoint unavailable: {msg}"),
            SubmitError::Rejected(msg) => write!(f, "submission rejected: {msg}"),
            SubmitError::Timeout => write!(f, "submission timed out"),
        }
    }
}

impl std::error::Error for SubmitError {}

/// Capability that delivers a contact message.
///
/// The returned future owns everything it needs so it can run on the Iced
/// executor while the form stays responsive.
pub trait ContactSubmitter: Send + Sync {
    fn submit(&self, payload: ContactPayload) -> BoxFuture<'static, Result<(), SubmitError>>;
}
