// SPDX-License-Identifier: MPL-2.0
//! Message handling for the application.
//!
//! Each handler forwards to the owning widget, records what the visitor did
//! in the diagnostics buffer, and turns widget events into tasks.

use super::{App, Message};
use crate::application::port::StorageError;
use crate::diagnostics::{AppStateEvent, UserAction, WarningEvent, WarningType};
use crate::ui::accessibility;
use crate::ui::carousel;
use crate::ui::contact_form::{self, field_widget_id};
use crate::ui::cookie_banner;
use crate::ui::faq;
use crate::ui::intersection::Span;
use crate::ui::lazy_images::read_source;
use crate::ui::navbar;
use crate::ui::page::{Section, PAGE_SCROLL_ID, STATS_BLOCK};
use crate::ui::smooth_scroll::ScrollMetrics;
use iced::keyboard::{self, key::Named};
use iced::widget::scrollable::{RelativeOffset, Viewport};
use iced::widget::{operation, Id};
use iced::{Size, Task};
use std::time::Instant;

pub(super) fn update(app: &mut App, message: Message) -> Task<Message> {
    let now = match &message {
        Message::Tick(instant) => *instant,
        _ => Instant::now(),
    };
    app.now = now;

    match message {
        Message::Tick(_) => handle_tick(app, now),
        Message::Navbar(navbar_message) => handle_navbar_message(app, now, navbar_message),
        Message::Contact(contact_message) => handle_contact_message(app, now, contact_message),
        Message::ContactSubmitted(result) => {
            let success = result.is_ok();
            if let Err(error) = &result {
                eprintln!("Contact submission failed: {error}");
            }
            app.widgets
                .contact
                .complete(now, result, &mut app.notifications, &app.i18n);
            app.diagnostics
                .log_state(AppStateEvent::SubmissionFinished { success });
            Task::none()
        }
        Message::Carousel(carousel_message) => {
            handle_carousel_message(app, now, carousel_message);
            Task::none()
        }
        Message::Faq(faq_message) => {
            if let faq::Message::Toggle(index) = faq_message {
                app.diagnostics
                    .log_action(UserAction::ToggleFaqItem { index });
            }
            app.widgets.faq.update(faq_message);
            Task::none()
        }
        Message::Accessibility(a11y_message) => {
            handle_accessibility_message(app, now, a11y_message);
            Task::none()
        }
        Message::CookieBanner(banner_message) => {
            handle_cookie_banner_message(app, now, banner_message);
            Task::none()
        }
        Message::Notification(notification_message) => {
            app.diagnostics.log_action(UserAction::DismissNotification);
            app.notifications
                .handle_message(now, &notification_message);
            Task::none()
        }
        Message::PageScrolled(viewport) => handle_page_scrolled(app, now, &viewport),
        Message::WheelScrolled => {
            app.widgets.scroll.cancel();
            Task::none()
        }
        Message::ImageLoaded { index, result } => {
            let handle = app.diagnostics.handle();
            app.widgets
                .team_photos
                .finish(index, result, Some(&handle));
            Task::none()
        }
        Message::WindowResized(size) => {
            handle_window_resized(app, size);
            Task::none()
        }
        Message::KeyPressed(key) => handle_key_pressed(app, now, &key),
        Message::TabPressed { backwards } => handle_contact_message(
            app,
            now,
            contact_form::Message::FocusNext { backwards },
        ),
        Message::PointerPressed => {
            handle_contact_message(app, now, contact_form::Message::PointerPressed)
        }
        Message::CloseRequested(_id) => {
            app.write_diagnostics_report();
            iced::exit()
        }
    }
}

impl App {
    /// Writes the diagnostics report if a destination was given.
    ///
    /// Failures are only logged; closing must not be blocked.
    pub(super) fn write_diagnostics_report(&mut self) {
        let Some(path) = &self.diagnostics_report else {
            return;
        };
        self.diagnostics.process_pending();
        match self.diagnostics.export_to_file(path) {
            Ok(()) => eprintln!("Diagnostics report written to {}", path.display()),
            Err(err) => eprintln!("Failed to write diagnostics report: {err}"),
        }
    }

    /// Runs every viewport-driven widget against `viewport` (page
    /// coordinates) and returns the image loads it triggered.
    pub(super) fn observe_viewport(&mut self, now: Instant, viewport: Span) -> Task<Message> {
        let stats = self.layout.block(Section::About, STATS_BLOCK);
        if self.widgets.counters.observe(now, stats, viewport) {
            self.diagnostics.log_state(AppStateEvent::CountersStarted);
        }
        self.widgets.reveal.observe(now, viewport);

        let requests = self.widgets.team_photos.observe(viewport);
        Task::batch(requests.into_iter().map(|request| {
            let index = request.index;
            Task::perform(
                read_source(self.assets_dir.clone(), request.src),
                move |result| Message::ImageLoaded { index, result },
            )
        }))
    }

    /// Starts a smooth scroll towards `section`.
    pub(super) fn scroll_to_section(&mut self, now: Instant, section: Section) {
        self.widgets.scroll.scroll_to(now, section, &self.layout);
    }

    fn storage_failed(&mut self, now: Instant, error: &StorageError) {
        eprintln!("Failed to persist preference: {error}");
        let handle = self.diagnostics.handle();
        handle.log_warning(WarningEvent::new(
            WarningType::StorageIssue,
            error.to_string(),
        ));
        self.notifications.warning(
            now,
            self.i18n.tr("notification-storage-write-error"),
            None,
        );
    }
}

fn handle_tick(app: &mut App, now: Instant) -> Task<Message> {
    app.notifications.tick(now);
    app.widgets.carousel.tick(now);
    app.widgets.cookie_banner.tick(now);
    app.widgets.loading.tick(now);
    app.diagnostics.process_pending();

    match app.widgets.scroll.tick(now) {
        Some(offset) => {
            let y = app.widgets.scroll.metrics().relative(offset);
            operation::snap_to(Id::new(PAGE_SCROLL_ID), RelativeOffset { x: 0.0, y })
        }
        None => Task::none(),
    }
}

fn handle_navbar_message(app: &mut App, now: Instant, message: navbar::Message) -> Task<Message> {
    match navbar::update(message, &mut app.widgets.navbar) {
        navbar::Event::None => {}
        navbar::Event::MenuToggled { .. } => {
            app.diagnostics.log_action(UserAction::ToggleMobileMenu);
        }
        navbar::Event::ScrollTo(section) => {
            app.diagnostics.log_action(UserAction::NavigateToSection {
                section: section.anchor().to_string(),
            });
            app.scroll_to_section(now, section);
        }
    }
    Task::none()
}

fn handle_contact_message(
    app: &mut App,
    now: Instant,
    message: contact_form::Message,
) -> Task<Message> {
    match contact_form::update(&mut app.widgets.contact, message, now) {
        contact_form::Event::None => Task::none(),
        contact_form::Event::Submitted(payload) => {
            app.diagnostics.log_action(UserAction::SubmitContactForm);
            app.diagnostics.log_state(AppStateEvent::SubmissionStarted);
            Task::perform(app.submitter.submit(payload), Message::ContactSubmitted)
        }
        contact_form::Event::FocusField(field) => {
            app.diagnostics
                .log_action(UserAction::ContactFormRejected {
                    first_invalid: field.form_name().to_string(),
                });
            app.scroll_to_section(now, Section::Contact);
            operation::focus(field_widget_id(field))
        }
        contact_form::Event::MoveFocus(field) => operation::focus(field_widget_id(field)),
    }
}

fn handle_carousel_message(app: &mut App, now: Instant, message: carousel::Message) {
    let action = match &message {
        carousel::Message::Next => Some(UserAction::CarouselNext),
        carousel::Message::Previous => Some(UserAction::CarouselPrevious),
        carousel::Message::GoTo(index) => Some(UserAction::CarouselGoTo { index: *index }),
        carousel::Message::HoverEnter | carousel::Message::HoverLeave => None,
    };
    if let Some(action) = action {
        app.diagnostics.log_action(action);
    }
    app.widgets.carousel.update(now, message);
}

fn handle_accessibility_message(app: &mut App, now: Instant, message: accessibility::Message) {
    app.diagnostics.log_action(match message {
        accessibility::Message::IncreaseFont => UserAction::IncreaseFontSize,
        accessibility::Message::DecreaseFont => UserAction::DecreaseFontSize,
        accessibility::Message::ToggleContrast => UserAction::ToggleContrast,
    });
    if let Err(error) = app
        .widgets
        .preferences
        .update(message, app.store.as_mut())
    {
        app.storage_failed(now, &error);
    }
}

fn handle_cookie_banner_message(app: &mut App, now: Instant, message: cookie_banner::Message) {
    let banner = &mut app.widgets.cookie_banner;
    let stored = match message {
        cookie_banner::Message::Accept => {
            app.diagnostics.log_action(UserAction::AcceptCookies);
            banner.accept(now, app.store.as_mut(), &mut app.notifications, &app.i18n)
        }
        cookie_banner::Message::Reject => {
            app.diagnostics.log_action(UserAction::RejectCookies);
            banner.reject(now, app.store.as_mut(), &mut app.notifications, &app.i18n)
        }
    };
    app.diagnostics.log_state(AppStateEvent::CookieBannerHidden);
    if let Err(error) = stored {
        app.storage_failed(now, &error);
    }
}

fn handle_page_scrolled(app: &mut App, now: Instant, viewport: &Viewport) -> Task<Message> {
    let offset = viewport.absolute_offset().y;
    let height = viewport.bounds().height;
    app.widgets.scroll.set_metrics(ScrollMetrics {
        offset,
        viewport_height: height,
        content_height: viewport.content_bounds().height,
    });
    app.widgets.navbar.on_scroll(offset);
    app.observe_viewport(now, Span::new(offset, height))
}

fn handle_window_resized(app: &mut App, size: Size) {
    app.widgets.navbar.on_resize(size.width);
    let metrics = app.widgets.scroll.metrics();
    app.widgets.scroll.set_metrics(ScrollMetrics {
        viewport_height: size.height,
        ..metrics
    });
}

fn handle_key_pressed(app: &mut App, now: Instant, key: &keyboard::Key) -> Task<Message> {
    match key {
        keyboard::Key::Named(Named::ArrowLeft) => app.widgets.carousel.handle_arrow(true),
        keyboard::Key::Named(Named::ArrowRight) => app.widgets.carousel.handle_arrow(false),
        keyboard::Key::Named(Named::Enter) => {
            app.widgets.faq.handle_key("Enter");
        }
        keyboard::Key::Named(Named::Space) => {
            app.widgets.faq.handle_key(" ");
        }
        keyboard::Key::Named(Named::Escape) => {
            return handle_navbar_message(app, now, navbar::Message::CloseMenu);
        }
        _ => {}
    }
    Task::none()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::Services;
    use crate::application::port::{KeyValueStore, StorageKey, SubmitError};
    use crate::config::Config;
    use crate::domain::contact::FieldId;
    use crate::i18n::fluent::I18n;
    use crate::infrastructure::{MemoryStore, SimulatedSubmitter};
    use crate::ui::cookie_banner::BannerPhase;
    use crate::ui::notifications::Severity;
    use std::sync::Arc;
    use std::time::Duration;

    fn app_with(store: MemoryStore) -> App {
        let config = Config::default();
        let i18n = I18n::new(Some("pt-BR".into()), &config);
        let services = Services {
            store: Box::new(store),
            submitter: Arc::new(SimulatedSubmitter::default()),
            assets_dir: None,
        };
        let (app, _task) = App::compose(Instant::now(), config, i18n, services);
        app
    }

    fn app() -> App {
        app_with(MemoryStore::new())
    }

    fn contact(app: &mut App, message: contact_form::Message) {
        let _ = app.update(Message::Contact(message));
    }

    #[test]
    fn rejected_submit_reports_first_invalid_field() {
        let mut app = app();
        contact(&mut app, contact_form::Message::Submit);

        assert!(!app.widgets().contact.form().is_submitting());
        assert!(app.widgets().scroll.is_animating());
        assert!(app.diagnostics().iter().count() >= 1);
    }

    #[test]
    fn submission_round_trip_greets_and_resets() {
        let mut app = app();
        contact(
            &mut app,
            contact_form::Message::Input(FieldId::Name, "Maria Silva".into()),
        );
        contact(
            &mut app,
            contact_form::Message::Input(FieldId::Email, "maria@example.com".into()),
        );
        contact(
            &mut app,
            contact_form::Message::Input(FieldId::Phone, "11999998888".into()),
        );
        contact(
            &mut app,
            contact_form::Message::Select(FieldId::Subject, "civil".into()),
        );
        contact(
            &mut app,
            contact_form::Message::Input(FieldId::Message, "Preciso de orientação jurídica.".into()),
        );
        contact(&mut app, contact_form::Message::Toggle(FieldId::Consent, true));
        contact(&mut app, contact_form::Message::Submit);
        assert!(app.widgets().contact.form().is_submitting());

        let _ = app.update(Message::ContactSubmitted(Ok(())));

        let toast = app
            .notifications()
            .visible()
            .last()
            .expect("a toast is shown");
        assert_eq!(toast.severity(), Severity::Success);
        assert!(toast.message().contains("Maria"));
        assert!(!app.widgets().contact.form().is_submitting());
        assert_eq!(app.widgets().contact.form().text(FieldId::Name), "");
    }

    #[test]
    fn failed_submission_keeps_values() {
        let mut app = app();
        contact(
            &mut app,
            contact_form::Message::Input(FieldId::Name, "Maria Silva".into()),
        );
        let _ = app.update(Message::ContactSubmitted(Err(SubmitError::Timeout)));

        // Nothing was in flight, so nothing is shown.
        assert!(app.notifications().is_empty());
        assert_eq!(
            app.widgets().contact.form().text(FieldId::Name),
            "Maria Silva"
        );
    }

    #[test]
    fn contrast_toggle_is_persisted() {
        let mut app = app();
        let _ = app.update(Message::Accessibility(
            accessibility::Message::ToggleContrast,
        ));

        assert!(app.widgets().preferences.is_high_contrast());
        assert_eq!(
            app.store().get(StorageKey::ContrastMode).as_deref(),
            Some("true")
        );
    }

    #[test]
    fn accepting_cookies_hides_banner_and_thanks_visitor() {
        let mut app = app();
        let start = Instant::now();
        let _ = app.update(Message::Tick(start + Duration::from_millis(150)));
        assert_eq!(app.widgets().cookie_banner.phase(), BannerPhase::Shown);

        let _ = app.update(Message::CookieBanner(cookie_banner::Message::Accept));

        assert_eq!(
            app.store().get(StorageKey::CookieAccepted).as_deref(),
            Some("true")
        );
        assert!(app.widgets().cookie_banner.analytics_enabled());
        assert_eq!(
            app.notifications().visible().last().map(|n| n.severity()),
            Some(Severity::Success)
        );
    }

    #[test]
    fn stored_cookie_choice_suppresses_banner() {
        let app = app_with(MemoryStore::new().with(StorageKey::CookieAccepted, "true"));
        assert_eq!(app.widgets().cookie_banner.phase(), BannerPhase::Hidden);
    }

    #[test]
    fn navigation_closes_menu_and_scrolls() {
        let mut app = app();
        let _ = app.update(Message::Navbar(navbar::Message::ToggleMenu));
        assert!(app.widgets().navbar.is_menu_open());

        let _ = app.update(Message::Navbar(navbar::Message::Navigate(Section::Faq)));

        assert!(!app.widgets().navbar.is_menu_open());
        assert!(app.widgets().scroll.is_animating());
    }

    #[test]
    fn escape_closes_menu() {
        let mut app = app();
        let _ = app.update(Message::Navbar(navbar::Message::ToggleMenu));
        let _ = app.update(Message::KeyPressed(keyboard::Key::Named(Named::Escape)));
        assert!(!app.widgets().navbar.is_menu_open());
    }

    #[test]
    fn arrow_keys_drive_carousel() {
        let mut app = app();
        let _ = app.update(Message::KeyPressed(keyboard::Key::Named(
            Named::ArrowRight,
        )));
        assert_eq!(app.widgets().carousel.current(), 1);

        let _ = app.update(Message::KeyPressed(keyboard::Key::Named(Named::ArrowLeft)));
        let _ = app.update(Message::KeyPressed(keyboard::Key::Named(Named::ArrowLeft)));
        assert_eq!(
            app.widgets().carousel.current(),
            app.widgets().carousel.slides().len() - 1
        );
    }

    #[test]
    fn resize_to_desktop_closes_menu() {
        let mut app = app();
        let _ = app.update(Message::WindowResized(Size::new(600.0, 800.0)));
        let _ = app.update(Message::Navbar(navbar::Message::ToggleMenu));
        let _ = app.update(Message::WindowResized(Size::new(1200.0, 800.0)));
        assert!(!app.widgets().navbar.is_menu_open());
    }

    #[test]
    fn close_request_writes_the_diagnostics_report() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("report.json");
        let mut app = app();
        app.diagnostics_report = Some(path.clone());

        contact(&mut app, contact_form::Message::Submit);
        let _ = app.update(Message::CloseRequested(iced::window::Id::unique()));

        let json = std::fs::read_to_string(&path).unwrap();
        let report: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert!(!report["events"].as_array().unwrap().is_empty());
    }

    #[test]
    fn page_click_blurs_the_focused_field() {
        let mut app = app();
        contact(
            &mut app,
            contact_form::Message::Input(FieldId::Email, "a@b".into()),
        );
        let _ = app.update(Message::PointerPressed);

        assert_eq!(
            app.widgets().contact.form().decoration(FieldId::Email),
            contact_form::Decoration::Invalid(
                crate::domain::contact::ValidationError::InvalidEmail
            )
        );
    }

    #[test]
    fn tab_moves_between_contact_inputs() {
        let mut app = app();
        contact(
            &mut app,
            contact_form::Message::Input(FieldId::Name, "Maria".into()),
        );
        let _ = app.update(Message::TabPressed { backwards: false });
        assert_eq!(app.widgets().contact.form().focused(), Some(FieldId::Email));
        assert_eq!(
            app.widgets().contact.form().decoration(FieldId::Name),
            contact_form::Decoration::Valid
        );
    }
}
