// SPDX-License-Identifier: MPL-2.0
//! Application root state and composition of the landing page.
//!
//! The `App` struct owns the shared services (localization, notification
//! center, diagnostics, local storage, contact submitter) and the typed
//! widget registry, and translates messages into widget calls and side
//! effects. Services are injected once in [`App::compose`]; nothing is
//! reached through globals.

mod message;
pub mod paths;
mod subscription;
mod update;
mod view;
pub mod widgets;

pub use message::{Flags, Message};
pub use widgets::Widgets;

use crate::application::port::{ContactSubmitter, KeyValueStore};
use crate::config::{self, Config};
use crate::diagnostics::{DiagnosticsCollector, DiagnosticsHandle, ErrorEvent, ErrorType};
use crate::i18n::fluent::I18n;
use crate::infrastructure::{PersistedStore, SimulatedSubmitter};
use crate::ui::faq::faq_schema_json;
use crate::ui::intersection::Span;
use crate::ui::notifications::{DefaultTitles, NotificationCenter, NotificationTiming};
use crate::ui::page::PageLayout;
use crate::ui::smooth_scroll::ScrollMetrics;
use crate::ui::theming::ColorScheme;
use iced::{window, Element, Subscription, Task, Theme};
use std::fmt;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Instant;

pub const WINDOW_DEFAULT_HEIGHT: u32 = 800;
pub const WINDOW_DEFAULT_WIDTH: u32 = 1200;
pub const MIN_WINDOW_HEIGHT: u32 = 480;
pub const MIN_WINDOW_WIDTH: u32 = 360;

/// Capabilities the page depends on, injected at startup.
pub struct Services {
    pub store: Box<dyn KeyValueStore>,
    pub submitter: Arc<dyn ContactSubmitter>,
    /// Directory deferred image sources are read from.
    pub assets_dir: Option<PathBuf>,
}

/// Root Iced application state.
pub struct App {
    i18n: I18n,
    config: Config,
    notifications: NotificationCenter,
    diagnostics: DiagnosticsCollector,
    store: Box<dyn KeyValueStore>,
    submitter: Arc<dyn ContactSubmitter>,
    assets_dir: Option<PathBuf>,
    /// Where to write the diagnostics report on close, if anywhere.
    diagnostics_report: Option<PathBuf>,
    layout: PageLayout,
    widgets: Widgets,
    /// Time of the last processed message, used to render animations.
    now: Instant,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("locale", &self.i18n.current_locale().to_string())
            .field("notifications", &self.notifications.len())
            .field("submitting", &self.widgets.contact.form().is_submitting())
            .finish()
    }
}

/// Builds the window settings.
pub fn window_settings() -> window::Settings {
    window::Settings {
        size: iced::Size::new(WINDOW_DEFAULT_WIDTH as f32, WINDOW_DEFAULT_HEIGHT as f32),
        min_size: Some(iced::Size::new(
            MIN_WINDOW_WIDTH as f32,
            MIN_WINDOW_HEIGHT as f32,
        )),
        // Closing goes through `Message::CloseRequested` so the
        // diagnostics report can be written first.
        exit_on_close_request: false,
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    // iced 0.14 requires a `Fn` boot closure; flags are consumed on the first call.
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state.borrow_mut().take().unwrap_or_default();
        App::new(flags)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

/// Renders the FAQ structured data for the configured locale.
///
/// Returns `None` when no question/answer pair is available.
///
/// # Errors
///
/// Returns an error if the document cannot be serialized.
pub fn export_faq_schema(lang: Option<String>) -> serde_json::Result<Option<String>> {
    let (config, _) = config::load();
    let i18n = I18n::new(lang, &config);
    faq_schema_json(&widgets::faq_items(&i18n))
}

/// Logs panics to stderr and, when available, to the diagnostics buffer.
///
/// The previous hook still runs afterwards.
pub fn install_panic_hook(diagnostics: Option<DiagnosticsHandle>) {
    let previous = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let location = info
            .location()
            .map(|loc| format!("{}:{}", loc.file(), loc.line()))
            .unwrap_or_default();
        let payload = info
            .payload()
            .downcast_ref::<&str>()
            .map(|s| (*s).to_owned())
            .or_else(|| info.payload().downcast_ref::<String>().cloned())
            .unwrap_or_default();
        eprintln!("Unexpected error at {location}: {payload}");
        if let Some(handle) = &diagnostics {
            handle.log_error(ErrorEvent::new(
                ErrorType::InternalError,
                format!("{location}: {payload}"),
            ));
        }
        previous(info);
    }));
}

impl App {
    /// Loads configuration and storage, then composes the page.
    fn new(flags: Flags) -> (Self, Task<Message>) {
        paths::init_cli_overrides(flags.data_dir.clone(), flags.config_dir.clone());

        let (config, config_warning) = config::load();
        let i18n = I18n::new(flags.lang.clone(), &config);
        let (store, storage_warning) = PersistedStore::load();
        let services = Services {
            store: Box::new(store),
            submitter: Arc::new(SimulatedSubmitter::new(config.contact.submit_delay())),
            assets_dir: flags.assets_dir.map(PathBuf::from),
        };

        let (mut app, task) = Self::compose(Instant::now(), config, i18n, services);
        install_panic_hook(Some(app.diagnostics.handle()));
        app.diagnostics_report = flags.diagnostics_report.map(PathBuf::from);

        let now = app.now;
        for key in [config_warning, storage_warning].into_iter().flatten() {
            app.notifications.warning(now, app.i18n.tr(&key), None);
        }

        (app, task)
    }

    /// Composition root: wires the injected services into every widget.
    ///
    /// Returns the app and the initial image loads for blocks already in
    /// view.
    pub fn compose(
        now: Instant,
        config: Config,
        i18n: I18n,
        services: Services,
    ) -> (Self, Task<Message>) {
        let diagnostics = DiagnosticsCollector::new(config.diagnostics.buffer_capacity());

        let mut notifications = NotificationCenter::new(
            NotificationTiming::from_config(&config.notifications),
            DefaultTitles::from_i18n(&i18n),
        );
        notifications.set_diagnostics(diagnostics.handle());

        let layout = PageLayout::default();
        let mut widgets = Widgets::build(now, &config, &i18n, &layout, services.store.as_ref());
        widgets.scroll.set_metrics(ScrollMetrics {
            offset: 0.0,
            viewport_height: WINDOW_DEFAULT_HEIGHT as f32,
            content_height: layout.content_height(),
        });

        let mut app = Self {
            i18n,
            config,
            notifications,
            diagnostics,
            store: services.store,
            submitter: services.submitter,
            assets_dir: services.assets_dir,
            diagnostics_report: None,
            layout,
            widgets,
            now,
        };

        let initial_viewport = Span::new(0.0, WINDOW_DEFAULT_HEIGHT as f32);
        let task = app.observe_viewport(now, initial_viewport);
        (app, task)
    }

    #[must_use]
    pub fn i18n(&self) -> &I18n {
        &self.i18n
    }

    #[must_use]
    pub fn config(&self) -> &Config {
        &self.config
    }

    #[must_use]
    pub fn widgets(&self) -> &Widgets {
        &self.widgets
    }

    #[must_use]
    pub fn notifications(&self) -> &NotificationCenter {
        &self.notifications
    }

    #[must_use]
    pub fn diagnostics(&self) -> &DiagnosticsCollector {
        &self.diagnostics
    }

    #[must_use]
    pub fn store(&self) -> &dyn KeyValueStore {
        self.store.as_ref()
    }

    fn title(&self) -> String {
        self.i18n.tr("window-title")
    }

    fn theme(&self) -> Theme {
        let high_contrast = self.widgets.preferences.is_high_contrast();
        let name = if high_contrast {
            "Silva High Contrast"
        } else {
            "Silva"
        };
        ColorScheme::for_contrast(high_contrast).to_theme(name)
    }

    fn subscription(&self) -> Subscription<Message> {
        let activity = subscription::Activity {
            animating: self.widgets.scroll.is_animating()
                || self.widgets.counters.is_animating(self.now)
                || self.widgets.reveal.is_animating(self.now)
                || self.notifications.has_notifications(),
            pending_timers: self.notifications.has_pending_timers()
                || self.widgets.carousel.next_deadline().is_some()
                || self.widgets.cookie_banner.has_pending_timers()
                || self.widgets.loading.has_pending_timers(),
        };

        Subscription::batch([
            subscription::create_event_subscription(),
            subscription::create_tick_subscription(activity),
        ])
    }

    pub fn update(&mut self, message: Message) -> Task<Message> {
        update::update(self, message)
    }

    pub fn view(&self) -> Element<'_, Message> {
        view::view(self)
    }
}
