// SPDX-License-Identifier: MPL-2.0
//! Validation rules for contact form fields.

use super::field::{FieldId, FieldInput, FieldSpec};
use super::phone::digits;
use regex::Regex;
use std::fmt;
use std::sync::LazyLock;

/// Minimum trimmed length of the name field, in characters.
pub const NAME_MIN_CHARS: usize = 2;
/// Minimum trimmed length of the message field, in characters.
pub const MESSAGE_MIN_CHARS: usize = 10;
/// Accepted phone lengths once formatting is stripped (landline, mobile).
pub const PHONE_DIGIT_RANGE: std::ops::RangeInclusive<usize> = 10..=11;

static EMAIL_PATTERN: LazyLock<Option<Regex>> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").ok());

/// Why a field value was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValidationError {
    Required,
    NameTooShort,
    InvalidEmail,
    InvalidPhone,
    MessageTooShort,
    ConsentRequired,
}

impl ValidationError {
    /// Returns the i18n message key for this error.
    #[must_use]
    pub fn i18n_key(self) -> &'static str {
        match self {
            ValidationError::Required => "validation-required",
            ValidationError::NameTooShort => "validation-name-too-short",
            ValidationError::InvalidEmail => "validation-invalid-email",
            ValidationError::InvalidPhone => "validation-invalid-phone",
            ValidationError::MessageTooShort => "validation-message-too-short",
            ValidationError::ConsentRequired => "validation-consent-required",
        }
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationError::Required => write!(f, "field is required"),
            ValidationError::NameTooShort => {
                write!(f, "name must have at least {NAME_MIN_CHARS} characters")
            }
            ValidationError::InvalidEmail => write!(f, "invalid e-mail address"),
            ValidationError::InvalidPhone => write!(f, "phone must have 10 or 11 digits"),
            ValidationError::MessageTooShort => {
                write!(f, "message must have at least {MESSAGE_MIN_CHARS} characters")
            }
            ValidationError::ConsentRequired => write!(f, "privacy policy consent is required"),
        }
    }
}

/// Result of validating one field. Recomputed on every trigger.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldValidation {
    pub field: FieldId,
    /// Trimmed value that was checked.
    pub value: String,
    pub error: Option<ValidationError>,
}

impl FieldValidation {
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.error.is_none()
    }
}

/// Validates `input` against the rules of `spec.id`.
///
/// A field-specific rule only runs on non-empty values, so an empty
/// required field always reports [`ValidationError::Required`]. An
/// unchecked consent box is rejected whatever the schema says.
#[must_use]
pub fn validate(spec: &FieldSpec, input: &FieldInput) -> FieldValidation {
    let value = input.as_text().trim().to_owned();

    if spec.id == FieldId::Consent && !input.is_checked() {
        return FieldValidation {
            field: spec.id,
            value,
            error: Some(ValidationError::ConsentRequired),
        };
    }

    let error = if value.is_empty() {
        spec.required.then_some(ValidationError::Required)
    } else {
        check_field(spec.id, &value)
    };

    FieldValidation {
        field: spec.id,
        value,
        error,
    }
}

fn check_field(field: FieldId, value: &str) -> Option<ValidationError> {
    match field {
        FieldId::Name if value.chars().count() < NAME_MIN_CHARS => {
            Some(ValidationError::NameTooShort)
        }
        FieldId::Email if !is_valid_email(value) => Some(ValidationError::InvalidEmail),
        FieldId::Phone => {
            let count = digits(value).len();
            // Punctuation-only input has no digits to check.
            (count > 0 && !PHONE_DIGIT_RANGE.contains(&count))
                .then_some(ValidationError::InvalidPhone)
        }
        FieldId::Message if value.chars().count() < MESSAGE_MIN_CHARS => {
            Some(ValidationError::MessageTooShort)
        }
        _ => None,
    }
}

fn is_valid_email(value: &str) -> bool {
    EMAIL_PATTERN
        .as_ref()
        .is_some_and(|pattern| pattern.is_match(value))
}
