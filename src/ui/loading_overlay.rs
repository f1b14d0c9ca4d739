// SPDX-License-Identifier: MPL-2.0
//! Full-page loading overlay with a message.

use crate::i18n::fluent::I18n;
use crate::scheduler::Scheduler;
use crate::ui::design_tokens::{opacity, palette, spacing, typography};
use iced::widget::{container, text, Container, Space};
use iced::{alignment, Color, Element, Length};
use std::time::{Duration, Instant};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Hide;

#[derive(Debug, Default)]
pub struct LoadingOverlay {
    /// `Some` while visible; `None` means the default message.
    visible: Option<Option<String>>,
    timers: Scheduler<Hide>,
}

impl LoadingOverlay {
    #[must_use]
    pub fn is_visible(&self) -> bool {
        self.visible.is_some()
    }

    /// Message to display, resolving the default `Carregando...`.
    #[must_use]
    pub fn message(&self, i18n: &I18n) -> Option<String> {
        self.visible
            .as_ref()
            .map(|message| message.clone().unwrap_or_else(|| i18n.tr("loading-default")))
    }

    /// Shows the overlay, replacing any message shown.
    pub fn show(&mut self, message: Option<String>) {
        self.visible = Some(message);
    }

    pub fn hide(&mut self) {
        self.visible = None;
    }

    /// Shows the overlay and hides it after `duration`.
    pub fn show_for(&mut self, now: Instant, duration: Duration, message: Option<String>) {
        self.show(message);
        self.timers.schedule(now, duration, Hide);
    }

    #[must_use]
    pub fn has_pending_timers(&self) -> bool {
        !self.timers.is_empty()
    }

    pub fn tick(&mut self, now: Instant) {
        while self.timers.pop_due(now).is_some() {
            self.hide();
        }
    }

    pub fn view<'a, M: 'a>(&self, i18n: &I18n) -> Element<'a, M> {
        let Some(message) = self.message(i18n) else {
            return Space::new().into();
        };

        Container::new(text(message).size(typography::TITLE_SM).color(palette::WHITE))
            .width(Length::Fill)
            .height(Length::Fill)
            .align_x(alignment::Horizontal::Center)
            .align_y(alignment::Vertical::Center)
            .padding(spacing::XL)
            .style(|_theme: &iced::Theme| container::Style {
                background: Some(
                    Color {
                        a: opacity::OVERLAY_STRONG,
                        ..palette::NAVY_900
                    }
                    .into(),
                ),
                ..Default::default()
            })
            .into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pt_br() -> I18n {
        I18n::new(Some("pt-BR".into()), &crate::config::Config::default())
    }

    #[test]
    fn default_message() {
        let mut overlay = LoadingOverlay::default();
        assert_eq!(overlay.message(&pt_br()), None);
        overlay.show(None);
        assert_eq!(overlay.message(&pt_br()).as_deref(), Some("Carregando..."));
        overlay.show(Some("Enviando".into()));
        assert_eq!(overlay.message(&pt_br()).as_deref(), Some("Enviando"));
        overlay.hide();
        assert!(!overlay.is_visible());
    }

    #[test]
    fn show_for_hides_after_duration() {
        let start = Instant::now();
        let mut overlay = LoadingOverlay::default();
        overlay.show_for(start, Duration::from_millis(1500), None);
        overlay.tick(start + Duration::from_millis(1499));
        assert!(overlay.is_visible());
        overlay.tick(start + Duration::from_millis(1500));
        assert!(!overlay.is_visible());
        assert!(!overlay.has_pending_timers());
    }
}
