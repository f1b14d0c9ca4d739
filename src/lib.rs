// SPDX-License-Identifier: MPL-2.0
//! `silva_site` is the interaction layer of the Silva & Associados landing
//! page, built with the Iced GUI framework.
//!
//! It provides a notification center, a validated contact form and the
//! page's peripheral widgets (navigation, counters, carousel, FAQ,
//! accessibility preferences, cookie consent), with Fluent localization
//! and persisted visitor preferences.

pub mod app;
pub mod application;
pub mod config;
pub mod diagnostics;
pub mod domain;
pub mod error;
pub mod i18n;
pub mod infrastructure;
pub mod scheduler;
pub mod ui;
