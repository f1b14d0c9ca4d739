// SPDX-License-Identifier: MPL-2.0
//! Contact form domain.
//!
//! The form has a fixed, ordered set of fields. Each field is validated by a
//! pure function of its current input, so results are recomputed on every
//! trigger and never cached.
//!
//! - [`field`]: Field identifiers, schema and raw inputs
//! - [`rules`]: Per-field validation rules and error kinds
//! - [`phone`]: Brazilian phone mask applied while typing

pub mod field;
pub mod phone;
pub mod rules;

pub use field::{FieldId, FieldInput, FieldKind, FieldSpec, FormSchema};
pub use phone::{digits, format_phone};
pub use rules::{validate, FieldValidation, ValidationError};
