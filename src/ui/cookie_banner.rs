// SPDX-License-Identifier: MPL-2.0
//! Cookie consent banner.
//!
//! The banner appears for visitors who have not chosen yet. Either choice
//! is stored under `cookieAccepted`, slides the banner out and confirms
//! with a toast.

use crate::application::port::{KeyValueStore, StorageError, StorageKey};
use crate::config::defaults::{COOKIE_BANNER_HIDE_DELAY_MS, COOKIE_BANNER_SHOW_DELAY_MS};
use crate::i18n::fluent::I18n;
use crate::scheduler::Scheduler;
use crate::ui::design_tokens::{spacing, typography};
use crate::ui::notifications::NotificationCenter;
use iced::widget::{button, container, text, Container, Row, Space};
use iced::{alignment, Element, Length};
use std::time::{Duration, Instant};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BannerPhase {
    /// Not part of the page.
    #[default]
    Hidden,
    /// Mounted below the window edge, about to slide in.
    Offscreen,
    Shown,
    /// Sliding out; detached when the transition ends.
    Hiding,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Transition {
    SlideIn,
    Detach,
}

/// Messages emitted by the banner buttons.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Message {
    Accept,
    Reject,
}

#[derive(Debug, Default)]
pub struct CookieBanner {
    phase: BannerPhase,
    timers: Scheduler<Transition>,
    analytics_enabled: bool,
}

impl CookieBanner {
    /// Shows the banner unless a choice is already stored.
    pub fn init(&mut self, now: Instant, store: &dyn KeyValueStore) -> bool {
        match store.get(StorageKey::CookieAccepted).as_deref() {
            Some(choice) => {
                self.analytics_enabled = choice == "true";
                false
            }
            None => {
                self.show(now);
                true
            }
        }
    }

    #[must_use]
    pub fn phase(&self) -> BannerPhase {
        self.phase
    }

    #[must_use]
    pub fn is_visible(&self) -> bool {
        matches!(self.phase, BannerPhase::Shown | BannerPhase::Hiding)
    }

    #[must_use]
    pub fn analytics_enabled(&self) -> bool {
        self.analytics_enabled
    }

    #[must_use]
    pub fn has_pending_timers(&self) -> bool {
        !self.timers.is_empty()
    }

    fn show(&mut self, now: Instant) {
        self.timers.clear();
        self.phase = BannerPhase::Offscreen;
        self.timers.schedule(
            now,
            Duration::from_millis(COOKIE_BANNER_SHOW_DELAY_MS),
            Transition::SlideIn,
        );
    }

    fn hide(&mut self, now: Instant) {
        if self.phase == BannerPhase::Hidden {
            return;
        }
        self.timers.clear();
        self.phase = BannerPhase::Hiding;
        self.timers.schedule(
            now,
            Duration::from_millis(COOKIE_BANNER_HIDE_DELAY_MS),
            Transition::Detach,
        );
    }

    /// Stores consent, enables analytics and thanks the visitor.
    ///
    /// # Errors
    ///
    /// Returns the store's error when the choice could not be persisted.
    /// The banner still closes.
    pub fn accept(
        &mut self,
        now: Instant,
        store: &mut dyn KeyValueStore,
        notifications: &mut NotificationCenter,
        i18n: &I18n,
    ) -> Result<(), StorageError> {
        let stored = store.set(StorageKey::CookieAccepted, "true");
        self.hide(now);
        notifications.success(now, i18n.tr("cookie-accepted-message"), None);
        self.enable_analytics();
        stored
    }

    /// Stores refusal and confirms that only essential cookies are used.
    ///
    /// # Errors
    ///
    /// Returns the store's error when the choice could not be persisted.
    pub fn reject(
        &mut self,
        now: Instant,
        store: &mut dyn KeyValueStore,
        notifications: &mut NotificationCenter,
        i18n: &I18n,
    ) -> Result<(), StorageError> {
        let stored = store.set(StorageKey::CookieAccepted, "false");
        self.hide(now);
        notifications.info(now, i18n.tr("cookie-rejected-message"), None);
        stored
    }

    fn enable_analytics(&mut self) {
        self.analytics_enabled = true;
        eprintln!("Analytics enabled");
    }

    pub fn tick(&mut self, now: Instant) {
        while let Some((_, transition)) = self.timers.pop_due(now) {
            self.phase = match transition {
                Transition::SlideIn => BannerPhase::Shown,
                Transition::Detach => BannerPhase::Hidden,
            };
        }
    }

    pub fn view<'a>(&self, i18n: &I18n) -> Element<'a, Message> {
        if !self.is_visible() {
            return Space::new().into();
        }
        let interactive = self.phase == BannerPhase::Shown;

        let content = Row::new()
            .spacing(spacing::MD)
            .align_y(alignment::Vertical::Center)
            .push(
                text(i18n.tr("cookie-banner-text"))
                    .size(typography::BODY_SM)
                    .width(Length::Fill),
            )
            .push(
                button(text(i18n.tr("cookie-reject")))
                    .on_press_maybe(interactive.then_some(Message::Reject))
                    .style(button::secondary),
            )
            .push(
                button(text(i18n.tr("cookie-accept")))
                    .on_press_maybe(interactive.then_some(Message::Accept))
                    .style(button::primary),
            );

        Container::new(
            Container::new(content)
                .padding(spacing::MD)
                .width(Length::Fill)
                .style(container::rounded_box),
        )
        .width(Length::Fill)
        .height(Length::Fill)
        .align_y(alignment::Vertical::Bottom)
        .padding(spacing::MD)
        .into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::MemoryStore;
    use crate::ui::notifications::{Notification, Severity};

    fn ms(value: u64) -> Duration {
        Duration::from_millis(value)
    }

    fn pt_br() -> I18n {
        I18n::new(Some("pt-BR".into()), &crate::config::Config::default())
    }

    #[test]
    fn shown_when_no_choice_stored() {
        let start = Instant::now();
        let mut banner = CookieBanner::default();
        assert!(banner.init(start, &MemoryStore::new()));
        assert_eq!(banner.phase(), BannerPhase::Offscreen);
        banner.tick(start + ms(99));
        assert_eq!(banner.phase(), BannerPhase::Offscreen);
        banner.tick(start + ms(100));
        assert_eq!(banner.phase(), BannerPhase::Shown);
    }

    #[test]
    fn hidden_when_choice_exists() {
        let mut banner = CookieBanner::default();
        let store = MemoryStore::new().with(StorageKey::CookieAccepted, "false");
        assert!(!banner.init(Instant::now(), &store));
        assert_eq!(banner.phase(), BannerPhase::Hidden);
        assert!(!banner.analytics_enabled());
    }

    #[test]
    fn accept_stores_and_thanks() {
        let start = Instant::now();
        let mut store = MemoryStore::new();
        let mut center = NotificationCenter::default();
        let mut banner = CookieBanner::default();
        banner.init(start, &store);
        banner.tick(start + ms(100));

        banner
            .accept(start + ms(1000), &mut store, &mut center, &pt_br())
            .unwrap();
        assert_eq!(store.get(StorageKey::CookieAccepted).as_deref(), Some("true"));
        assert!(banner.analytics_enabled());
        assert_eq!(banner.phase(), BannerPhase::Hiding);
        let toast: Vec<&Notification> = center.visible().collect();
        assert_eq!(toast.len(), 1);
        assert_eq!(toast[0].severity(), Severity::Success);

        banner.tick(start + ms(1500));
        assert_eq!(banner.phase(), BannerPhase::Hidden);
    }

    #[test]
    fn reject_stores_false_with_info_toast() {
        let start = Instant::now();
        let mut store = MemoryStore::new();
        let mut center = NotificationCenter::default();
        let mut banner = CookieBanner::default();
        banner.init(start, &store);

        banner.reject(start, &mut store, &mut center, &pt_br()).unwrap();
        assert_eq!(store.get(StorageKey::CookieAccepted).as_deref(), Some("false"));
        assert!(!banner.analytics_enabled());
        assert_eq!(
            center.visible().next().map(Notification::severity),
            Some(Severity::Info)
        );
        // The pending slide-in must not bring the banner back.
        banner.tick(start + ms(600));
        assert_eq!(banner.phase(), BannerPhase::Hidden);
    }
}
