// SPDX-License-Identifier: MPL-2.0
//! Testimonials carousel with autoplay.
//!
//! Slides advance on their own at a fixed interval. Hovering the carousel
//! pauses autoplay and leaving it resumes a fresh interval.

use crate::i18n::fluent::I18n;
use crate::scheduler::{Scheduler, TimerId};
use crate::ui::design_tokens::{palette, radius, sizing, spacing, typography};
use iced::widget::{button, container, mouse_area, text, Column, Container, Row, Space};
use iced::{alignment, Border, Element, Length, Theme};
use std::time::{Duration, Instant};

/// A client testimonial.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Testimonial {
    pub quote_key: String,
    pub author_key: String,
}

/// Shortest autoplay interval. A zero interval would keep `tick` catching
/// up forever.
pub const MIN_INTERVAL: Duration = Duration::from_millis(100);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Advance;

#[derive(Debug, Clone)]
pub struct Carousel {
    slides: Vec<Testimonial>,
    current: usize,
    interval: Duration,
    timers: Scheduler<Advance>,
    autoplay: Option<TimerId>,
    hovered: bool,
}

/// Messages emitted by the carousel controls.
#[derive(Debug, Clone)]
pub enum Message {
    Next,
    Previous,
    GoTo(usize),
    HoverEnter,
    HoverLeave,
}

impl Carousel {
    /// Intervals below [`MIN_INTERVAL`] are raised to it.
    #[must_use]
    pub fn new(slides: Vec<Testimonial>, interval: Duration) -> Self {
        Self {
            slides,
            current: 0,
            interval: interval.max(MIN_INTERVAL),
            timers: Scheduler::new(),
            autoplay: None,
            hovered: false,
        }
    }

    #[must_use]
    pub fn slides(&self) -> &[Testimonial] {
        &self.slides
    }

    #[must_use]
    pub fn current(&self) -> usize {
        self.current
    }

    #[must_use]
    pub fn is_enabled(&self) -> bool {
        !self.slides.is_empty()
    }

    #[must_use]
    pub fn is_hovered(&self) -> bool {
        self.hovered
    }

    #[must_use]
    pub fn is_autoplaying(&self) -> bool {
        self.autoplay.is_some()
    }

    /// Horizontal translation of the slide track, in percent of its width.
    #[must_use]
    pub fn translate_x_percent(&self) -> f32 {
        -100.0 * self.current as f32
    }

    pub fn next(&mut self) {
        if self.is_enabled() {
            self.current = (self.current + 1) % self.slides.len();
        }
    }

    pub fn previous(&mut self) {
        if self.is_enabled() {
            self.current = self
                .current
                .checked_sub(1)
                .unwrap_or(self.slides.len() - 1);
        }
    }

    /// Jumps to slide `index`. Out-of-range indices are ignored.
    pub fn go_to(&mut self, index: usize) {
        if index < self.slides.len() {
            self.current = index;
        }
    }

    /// Starts autoplay unless it is already running.
    pub fn start_autoplay(&mut self, now: Instant) {
        if self.autoplay.is_none() && self.is_enabled() {
            self.autoplay = Some(self.timers.schedule(now, self.interval, Advance));
        }
    }

    pub fn stop_autoplay(&mut self) {
        if let Some(id) = self.autoplay.take() {
            self.timers.cancel(id);
        }
    }

    /// Left and right arrow keys navigate between slides.
    pub fn handle_arrow(&mut self, left: bool) {
        if left {
            self.previous();
        } else {
            self.next();
        }
    }

    pub fn update(&mut self, now: Instant, message: Message) {
        match message {
            Message::Next => self.next(),
            Message::Previous => self.previous(),
            Message::GoTo(index) => self.go_to(index),
            Message::HoverEnter => {
                self.hovered = true;
                self.stop_autoplay();
            }
            Message::HoverLeave => {
                self.hovered = false;
                self.start_autoplay(now);
            }
        }
    }

    /// Advances one slide per elapsed interval.
    pub fn tick(&mut self, now: Instant) {
        while let Some((due, Advance)) = self.timers.pop_due(now) {
            self.next();
            self.autoplay = Some(self.timers.schedule(due, self.interval, Advance));
        }
    }

    #[must_use]
    pub fn next_deadline(&self) -> Option<Instant> {
        self.timers.next_deadline()
    }

    pub fn view<'a>(&'a self, i18n: &'a I18n) -> Element<'a, Message> {
        let Some(slide) = self.slides.get(self.current) else {
            return Space::new().into();
        };

        let quote = text(format!("“{}”", i18n.tr(&slide.quote_key)))
            .size(typography::TITLE_SM)
            .align_x(alignment::Horizontal::Center);
        let author = text(i18n.tr(&slide.author_key))
            .size(typography::BODY_SM)
            .style(|theme: &Theme| text::Style {
                color: Some(theme.palette().primary),
            });

        let dots = (0..self.slides.len()).fold(Row::new().spacing(spacing::XS), |row, index| {
            let active = index == self.current;
            row.push(
                button(Space::new().width(sizing::CAROUSEL_DOT).height(sizing::CAROUSEL_DOT))
                    .on_press(Message::GoTo(index))
                    .padding(0)
                    .style(move |_theme: &Theme, _status| button::Style {
                        background: Some(
                            if active { palette::NAVY_700 } else { palette::GRAY_400 }.into(),
                        ),
                        border: Border {
                            radius: radius::FULL.into(),
                            ..Default::default()
                        },
                        ..Default::default()
                    }),
            )
        });

        let controls = Row::new()
            .spacing(spacing::MD)
            .align_y(alignment::Vertical::Center)
            .push(button(text("‹")).on_press(Message::Previous))
            .push(dots)
            .push(button(text("›")).on_press(Message::Next));

        let content = Column::new()
            .spacing(spacing::MD)
            .align_x(alignment::Horizontal::Center)
            .push(quote)
            .push(author)
            .push(controls);

        let card = Container::new(content)
            .padding(spacing::XL)
            .width(Length::Fill)
            .style(container::rounded_box);

        mouse_area(card)
            .on_enter(Message::HoverEnter)
            .on_exit(Message::HoverLeave)
            .into()
    }
}
