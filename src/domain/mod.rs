// SPDX-License-Identifier: MPL-2.0
//! Domain layer - page rules with no UI or I/O dependencies.
//!
//! This module contains value objects and business rules that the
//! presentation layer renders but never re-implements.
//!
//! # Modules
//!
//! - [`contact`]: Contact form fields, validation rules and the phone mask
//! - [`diagnostics`]: Diagnostics types ([`BufferCapacity`](diagnostics::BufferCapacity))
//! - [`ui`]: UI value objects ([`FontSize`](ui::FontSize))

pub mod contact;
pub mod diagnostics;
pub mod ui;
