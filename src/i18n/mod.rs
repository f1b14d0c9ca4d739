// SPDX-License-Identifier: MPL-2.0
//! Internationalization (i18n) support.
//!
//! Translations are Fluent (`.ftl`) files embedded in the binary. The page
//! is written in Brazilian Portuguese, which is also the fallback locale;
//! an English translation is provided.
//!
//! Locale resolution order: CLI `--lang`, `[general] language` in the
//! config file, the OS locale, then `pt-BR`.

pub mod fluent;
