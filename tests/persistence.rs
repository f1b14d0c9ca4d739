// SPDX-License-Identifier: MPL-2.0
use silva_site::application::port::{KeyValueStore, StorageKey};
use silva_site::config::{self, Config, GeneralConfig};
use silva_site::i18n::fluent::I18n;
use silva_site::infrastructure::PersistedStore;
use std::fs;
use std::time::Duration;
use tempfile::tempdir;

#[test]
fn config_language_drives_the_locale() {
    let dir = tempdir().expect("temporary directory");

    let english = Config {
        general: GeneralConfig {
            language: Some("en-US".to_string()),
        },
        ..Config::default()
    };
    config::save_with_override(&english, Some(dir.path().to_path_buf())).expect("save config");

    let (loaded, warning) = config::load_with_override(Some(dir.path().to_path_buf()));
    assert_eq!(warning, None);
    assert_eq!(loaded, english);

    let i18n = I18n::new(None, &loaded);
    assert_eq!(i18n.current_locale().to_string(), "en-US");
    assert_eq!(i18n.tr("contact-submit"), "Send Message");
}

#[test]
fn broken_config_falls_back_with_a_warning() {
    let dir = tempdir().expect("temporary directory");
    fs::write(dir.path().join("settings.toml"), "[contact\nsubmit_delay_ms = ").expect("write");

    let (loaded, warning) = config::load_with_override(Some(dir.path().to_path_buf()));

    assert_eq!(loaded, Config::default());
    assert_eq!(warning.as_deref(), Some("notification-config-load-error"));
}

#[test]
fn partial_config_keeps_defaults_for_missing_sections() {
    let dir = tempdir().expect("temporary directory");
    fs::write(
        dir.path().join("settings.toml"),
        "[carousel]\nautoplay_interval_ms = 8000\n",
    )
    .expect("write");

    let (loaded, warning) = config::load_with_override(Some(dir.path().to_path_buf()));

    assert_eq!(warning, None);
    assert_eq!(loaded.carousel.autoplay_interval(), Duration::from_millis(8000));
    assert_eq!(loaded.contact.submit_delay(), Duration::from_millis(2000));
}

#[test]
fn preferences_survive_a_restart() {
    let dir = tempdir().expect("temporary directory");

    let (mut store, warning) = PersistedStore::load_from(Some(dir.path().to_path_buf()));
    assert_eq!(warning, None);
    store.set(StorageKey::FontSize, "18").expect("write font size");
    store
        .set(StorageKey::CookieAccepted, "true")
        .expect("write cookie choice");

    let (reloaded, warning) = PersistedStore::load_from(Some(dir.path().to_path_buf()));
    assert_eq!(warning, None);
    assert_eq!(reloaded.get(StorageKey::FontSize).as_deref(), Some("18"));
    assert_eq!(reloaded.get(StorageKey::CookieAccepted).as_deref(), Some("true"));
    assert_eq!(reloaded.get(StorageKey::ContrastMode), None);
}
