// SPDX-License-Identifier: MPL-2.0
//! Loading and saving of `settings.toml`.
//!
//! # Configuration Sections
//!
//! - `[general]` - Interface language
//! - `[notifications]` - Toast transition and auto-dismiss timings
//! - `[contact]` - Simulated submission delay
//! - `[carousel]` - Testimonial autoplay interval
//! - `[diagnostics]` - Event buffer capacity
//!
//! Every value is optional. Missing or out-of-range values fall back to
//! [`defaults`] through the accessor methods, so a hand-edited file can
//! never put a widget in an unusable state.
//!
//! # Examples
//!
//! ```no_run
//! use silva_site::config;
//!
//! let (mut config, _warning) = config::load();
//! config.general.language = Some("en-US".to_string());
//! config::save(&config).expect("Failed to save config");
//! ```

pub mod defaults;

pub use defaults::*;

use crate::app::paths;
use crate::domain::diagnostics::BufferCapacity;
use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

const CONFIG_FILE: &str = "settings.toml";

/// General settings.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct GeneralConfig {
    /// UI language code (e.g., "pt-BR", "en-US").
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
}

/// Toast timings, in milliseconds.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct NotificationsConfig {
    #[serde(default = "default_enter_delay", skip_serializing_if = "Option::is_none")]
    pub enter_delay_ms: Option<u64>,
    #[serde(default = "default_exit_delay", skip_serializing_if = "Option::is_none")]
    pub exit_delay_ms: Option<u64>,
    /// Zero keeps toasts until dismissed.
    #[serde(default = "default_duration", skip_serializing_if = "Option::is_none")]
    pub default_duration_ms: Option<u64>,
}

impl Default for NotificationsConfig {
    fn default() -> Self {
        Self {
            enter_delay_ms: default_enter_delay(),
            exit_delay_ms: default_exit_delay(),
            default_duration_ms: default_duration(),
        }
    }
}

impl NotificationsConfig {
    #[must_use]
    pub fn enter_delay(&self) -> Duration {
        bounded_ms(
            self.enter_delay_ms,
            DEFAULT_NOTIFICATION_ENTER_DELAY_MS,
            0,
            MAX_NOTIFICATION_TIMING_MS,
        )
    }

    #[must_use]
    pub fn exit_delay(&self) -> Duration {
        bounded_ms(
            self.exit_delay_ms,
            DEFAULT_NOTIFICATION_EXIT_DELAY_MS,
            0,
            MAX_NOTIFICATION_TIMING_MS,
        )
    }

    #[must_use]
    pub fn default_duration(&self) -> Duration {
        bounded_ms(
            self.default_duration_ms,
            DEFAULT_NOTIFICATION_DURATION_MS,
            0,
            MAX_NOTIFICATION_TIMING_MS,
        )
    }
}

/// Contact form settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ContactConfig {
    #[serde(default = "default_submit_delay", skip_serializing_if = "Option::is_none")]
    pub submit_delay_ms: Option<u64>,
}

impl Default for ContactConfig {
    fn default() -> Self {
        Self {
            submit_delay_ms: default_submit_delay(),
        }
    }
}

impl ContactConfig {
    #[must_use]
    pub fn submit_delay(&self) -> Duration {
        bounded_ms(
            self.submit_delay_ms,
            DEFAULT_SUBMIT_DELAY_MS,
            0,
            MAX_SUBMIT_DELAY_MS,
        )
    }
}

/// Testimonial carousel settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CarouselConfig {
    #[serde(
        default = "default_autoplay_interval",
        skip_serializing_if = "Option::is_none"
    )]
    pub autoplay_interval_ms: Option<u64>,
}

impl Default for CarouselConfig {
    fn default() -> Self {
        Self {
            autoplay_interval_ms: default_autoplay_interval(),
        }
    }
}

impl CarouselConfig {
    #[must_use]
    pub fn autoplay_interval(&self) -> Duration {
        bounded_ms(
            self.autoplay_interval_ms,
            DEFAULT_CAROUSEL_AUTOPLAY_MS,
            MIN_CAROUSEL_AUTOPLAY_MS,
            MAX_CAROUSEL_AUTOPLAY_MS,
        )
    }
}

/// Diagnostics settings.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct DiagnosticsConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub buffer_capacity: Option<usize>,
}

impl DiagnosticsConfig {
    #[must_use]
    pub fn buffer_capacity(&self) -> BufferCapacity {
        self.buffer_capacity
            .map(BufferCapacity::new)
            .unwrap_or_default()
    }
}

/// Application configuration with logical sections.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct Config {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub notifications: NotificationsConfig,
    #[serde(default)]
    pub contact: ContactConfig,
    #[serde(default)]
    pub carousel: CarouselConfig,
    #[serde(default)]
    pub diagnostics: DiagnosticsConfig,
}

fn default_enter_delay() -> Option<u64> {
    Some(DEFAULT_NOTIFICATION_ENTER_DELAY_MS)
}

fn default_exit_delay() -> Option<u64> {
    Some(DEFAULT_NOTIFICATION_EXIT_DELAY_MS)
}

fn default_duration() -> Option<u64> {
    Some(DEFAULT_NOTIFICATION_DURATION_MS)
}

fn default_submit_delay() -> Option<u64> {
    Some(DEFAULT_SUBMIT_DELAY_MS)
}

fn default_autoplay_interval() -> Option<u64> {
    Some(DEFAULT_CAROUSEL_AUTOPLAY_MS)
}

/// Out-of-range values fall back to the default rather than being clamped.
fn bounded_ms(value: Option<u64>, default: u64, min: u64, max: u64) -> Duration {
    let ms = value
        .filter(|ms| (min..=max).contains(ms))
        .unwrap_or(default);
    Duration::from_millis(ms)
}

fn get_config_path_with_override(base_dir: Option<PathBuf>) -> Option<PathBuf> {
    paths::get_app_config_dir_with_override(base_dir).map(|mut path| {
        path.push(CONFIG_FILE);
        path
    })
}

/// Loads the configuration from the default path.
///
/// Returns the config and an optional i18n warning key. A missing file is
/// not a warning; an unreadable one yields the defaults.
#[must_use]
pub fn load() -> (Config, Option<String>) {
    load_with_override(None)
}

/// Loads the configuration from `base_dir`, or the default directory if `None`.
#[must_use]
pub fn load_with_override(base_dir: Option<PathBuf>) -> (Config, Option<String>) {
    if let Some(path) = get_config_path_with_override(base_dir) {
        if path.exists() {
            return match load_from_path(&path) {
                Ok(config) => (config, None),
                Err(_) => (
                    Config::default(),
                    Some("notification-config-load-error".to_string()),
                ),
            };
        }
    }
    (Config::default(), None)
}

/// Loads configuration from a specific file.
///
/// # Errors
///
/// Returns [`Error::Io`] if the file cannot be read and [`Error::Config`]
/// if it is not valid TOML for this schema.
pub fn load_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)?;
    let config = toml::from_str(&content)?;
    Ok(config)
}

/// Saves the configuration to the default path.
///
/// # Errors
///
/// See [`save_to_path`].
pub fn save(config: &Config) -> Result<()> {
    save_with_override(config, None)
}

/// Saves the configuration to `base_dir`, or the default directory if `None`.
///
/// # Errors
///
/// See [`save_to_path`].
pub fn save_with_override(config: &Config, base_dir: Option<PathBuf>) -> Result<()> {
    match get_config_path_with_override(base_dir) {
        Some(path) => save_to_path(config, &path),
        None => Ok(()),
    }
}

/// Saves configuration to a specific file, creating parent directories.
///
/// # Errors
///
/// Returns [`Error::Io`] on filesystem failures and [`Error::Config`] if
/// serialization fails.
pub fn save_to_path(config: &Config, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let content = toml::to_string_pretty(config).map_err(Error::from)?;
    fs::write(path, content)?;
    Ok(())
}
