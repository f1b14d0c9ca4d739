// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use crate::application::port::SubmitError;
use crate::ui::accessibility;
use crate::ui::carousel;
use crate::ui::contact_form;
use crate::ui::cookie_banner;
use crate::ui::faq;
use crate::ui::navbar;
use crate::ui::notifications;
use iced::keyboard;
use iced::widget::scrollable;
use iced::{window, Size};
use std::time::Instant;

/// Top-level messages consumed by `App::update`. The variants forward
/// lower-level component messages while keeping a single update entrypoint.
#[derive(Debug, Clone)]
pub enum Message {
    Navbar(navbar::Message),
    Contact(contact_form::Message),
    /// The submitter answered.
    ContactSubmitted(Result<(), SubmitError>),
    Carousel(carousel::Message),
    Faq(faq::Message),
    Accessibility(accessibility::Message),
    CookieBanner(cookie_banner::Message),
    Notification(notifications::NotificationMessage),
    /// The page scrollable moved, by the visitor or by an animation.
    PageScrolled(scrollable::Viewport),
    /// Mouse wheel or touchpad input; interrupts smooth scrolling.
    WheelScrolled,
    /// A deferred image finished reading.
    ImageLoaded {
        index: usize,
        result: Result<Vec<u8>, String>,
    },
    WindowResized(Size),
    /// A key press no widget captured.
    KeyPressed(keyboard::Key),
    /// Tab, which text inputs leave to the application.
    TabPressed { backwards: bool },
    /// Left mouse button pressed anywhere in the window.
    PointerPressed,
    /// The visitor asked to close the window.
    CloseRequested(window::Id),
    Tick(Instant),
}

/// Runtime flags passed in from the CLI to tweak startup behavior.
#[derive(Debug, Default)]
pub struct Flags {
    /// Optional locale override in BCP-47 form (e.g. `pt-BR`, `en-US`).
    pub lang: Option<String>,
    /// Optional data directory override (for `storage.cbor`).
    /// Takes precedence over `SILVA_SITE_DATA_DIR` environment variable.
    pub data_dir: Option<String>,
    /// Optional config directory override (for settings.toml).
    /// Takes precedence over `SILVA_SITE_CONFIG_DIR` environment variable.
    pub config_dir: Option<String>,
    /// Directory deferred image sources are resolved against.
    /// Defaults to the working directory.
    pub assets_dir: Option<String>,
    /// File the diagnostics report is written to when the window closes.
    pub diagnostics_report: Option<String>,
}
