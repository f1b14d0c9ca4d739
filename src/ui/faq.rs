// SPDX-License-Identifier: MPL-2.0
//! FAQ accordion and its `FAQPage` structured data.
//!
//! At most one answer is open at a time. The question and answer texts
//! also feed the JSON-LD document published for search engines.

use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{spacing, typography};
use iced::widget::{button, container, mouse_area, text, Column, Container, Row, Space};
use iced::{alignment, Element, Length};
use serde::Serialize;

/// A question and its answer, as displayed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FaqItem {
    pub question: String,
    pub answer: String,
}

impl FaqItem {
    #[must_use]
    pub fn new(question: impl Into<String>, answer: impl Into<String>) -> Self {
        Self {
            question: question.into(),
            answer: answer.into(),
        }
    }

    /// Builds an item from `<prefix>-question` / `<prefix>-answer` messages.
    #[must_use]
    pub fn from_i18n(i18n: &I18n, prefix: &str) -> Self {
        Self::new(
            i18n.tr(&format!("{prefix}-question")),
            i18n.tr(&format!("{prefix}-answer")),
        )
    }
}

/// Messages emitted by the accordion.
#[derive(Debug, Clone)]
pub enum Message {
    Toggle(usize),
    /// Pointer over a question; it becomes the keyboard target.
    Focus(usize),
}

#[derive(Debug, Clone, Default)]
pub struct Accordion {
    items: Vec<FaqItem>,
    open: Option<usize>,
    focused: Option<usize>,
}

impl Accordion {
    #[must_use]
    pub fn new(items: Vec<FaqItem>) -> Self {
        Self {
            items,
            open: None,
            focused: None,
        }
    }

    #[must_use]
    pub fn items(&self) -> &[FaqItem] {
        &self.items
    }

    /// Replaces the texts, e.g. after a language change. The open item
    /// stays open when it still exists.
    pub fn set_items(&mut self, items: Vec<FaqItem>) {
        self.open = self.open.filter(|index| *index < items.len());
        self.focused = self.focused.filter(|index| *index < items.len());
        self.items = items;
    }

    #[must_use]
    pub fn open_item(&self) -> Option<usize> {
        self.open
    }

    #[must_use]
    pub fn is_open(&self, index: usize) -> bool {
        self.open == Some(index)
    }

    /// Value of the question's `aria-expanded` attribute.
    #[must_use]
    pub fn aria_expanded(&self, index: usize) -> &'static str {
        if self.is_open(index) {
            "true"
        } else {
            "false"
        }
    }

    /// Opens `index` and closes every other item, or closes it when it was
    /// already open. Returns whether the item is now open.
    pub fn toggle(&mut self, index: usize) -> bool {
        if index >= self.items.len() {
            return false;
        }
        self.focused = Some(index);
        self.open = if self.open == Some(index) {
            None
        } else {
            Some(index)
        };
        self.open.is_some()
    }

    /// `Enter` and `Space` toggle the focused question. Returns whether the
    /// key was consumed.
    pub fn handle_key(&mut self, key: &str) -> bool {
        match (key, self.focused) {
            ("Enter" | " ", Some(index)) => {
                self.toggle(index);
                true
            }
            _ => false,
        }
    }

    pub fn update(&mut self, message: Message) {
        match message {
            Message::Toggle(index) => {
                self.toggle(index);
            }
            Message::Focus(index) => {
                if index < self.items.len() {
                    self.focused = Some(index);
                }
            }
        }
    }

    pub fn view(&self) -> Element<'_, Message> {
        let column = self.items.iter().enumerate().fold(
            Column::new().spacing(spacing::XS).width(Length::Fill),
            |column, (index, item)| column.push(self.view_item(index, item)),
        );
        column.into()
    }

    fn view_item<'a>(&'a self, index: usize, item: &'a FaqItem) -> Element<'a, Message> {
        let open = self.is_open(index);
        let header = Row::new()
            .align_y(alignment::Vertical::Center)
            .push(text(&item.question).size(typography::BODY).width(Length::Fill))
            .push(text(if open { "−" } else { "+" }).size(typography::TITLE_SM));

        let question = mouse_area(
            button(header)
                .on_press(Message::Toggle(index))
                .width(Length::Fill)
                .padding(spacing::MD)
                .style(button::text),
        )
        .on_enter(Message::Focus(index));

        let mut body = Column::new().push(question);
        body = if open {
            body.push(
                Container::new(text(&item.answer).size(typography::BODY_SM))
                    .padding([0.0, spacing::MD])
                    .width(Length::Fill),
            )
            .push(Space::new().height(spacing::MD))
        } else {
            body
        };

        Container::new(body)
            .width(Length::Fill)
            .style(container::bordered_box)
            .into()
    }
}

#[derive(Debug, Serialize)]
struct FaqPage<'a> {
    #[serde(rename = "@context")]
    context: &'static str,
    #[serde(rename = "@type")]
    kind: &'static str,
    #[serde(rename = "mainEntity")]
    main_entity: Vec<Question<'a>>,
}

#[derive(Debug, Serialize)]
struct Question<'a> {
    #[serde(rename = "@type")]
    kind: &'static str,
    name: &'a str,
    #[serde(rename = "acceptedAnswer")]
    accepted_answer: Answer<'a>,
}

#[derive(Debug, Serialize)]
struct Answer<'a> {
    #[serde(rename = "@type")]
    kind: &'static str,
    text: &'a str,
}

/// Renders the `FAQPage` JSON-LD document, pretty-printed with two-space
/// indentation.
///
/// Items with an empty question or answer are skipped. Returns `None` when
/// no pair remains.
///
/// # Errors
///
/// Returns an error if serialization fails.
pub fn faq_schema_json(items: &[FaqItem]) -> serde_json::Result<Option<String>> {
    let main_entity: Vec<Question<'_>> = items
        .iter()
        .map(|item| (item.question.trim(), item.answer.trim()))
        .filter(|(question, answer)| !question.is_empty() && !answer.is_empty())
        .map(|(name, text)| Question {
            kind: "Question",
            name,
            accepted_answer: Answer {
                kind: "Answer",
                text,
            },
        })
        .collect();

    if main_entity.is_empty() {
        return Ok(None);
    }

    let page = FaqPage {
        context: "https://schema.org",
        kind: "FAQPage",
        main_entity,
    };
    serde_json::to_string_pretty(&page).map(Some)
}
