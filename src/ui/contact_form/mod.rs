// SPDX-License-Identifier: MPL-2.0
//! Contact section: the form engine plus the widget state it needs.
//!
//! [`ContactForm`] holds values and decorations; [`State`] adds the
//! multi-line editor buffer backing the message field and translates widget
//! messages into engine calls.

mod state;
mod view;

pub use state::{ContactForm, Decoration, SubmitOutcome, Submission, Trigger};
pub use view::{field_widget_id, subject_options, view, SubjectOption, ViewContext};

use crate::application::port::{ContactPayload, SubmitError};
use crate::domain::contact::FieldId;
use crate::i18n::fluent::I18n;
use crate::ui::notifications::{NotificationCenter, NotificationId};
use iced::widget::text_editor;
use std::time::Instant;

/// Values accepted by the subject select, as posted.
pub const SUBJECTS: [&str; 6] = [
    "civil",
    "trabalhista",
    "empresarial",
    "familia",
    "tributario",
    "outros",
];

#[derive(Debug, Clone)]
pub enum Message {
    Input(FieldId, String),
    Select(FieldId, String),
    Toggle(FieldId, bool),
    EditMessage(text_editor::Action),
    Submit,
    /// The pointer entered the area of a field.
    PointerEntered(FieldId),
    /// The pointer left the area of a field.
    PointerLeft(FieldId),
    /// A left click anywhere on the page. Focuses the field under the
    /// pointer, or blurs the focused one.
    PointerPressed,
    /// Tab or Shift+Tab while a text input is focused.
    FocusNext { backwards: bool },
}

/// Text inputs reachable with Tab, in page order.
pub const TAB_ORDER: [FieldId; 3] = [FieldId::Name, FieldId::Email, FieldId::Phone];

/// What the application has to do after an update.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    None,
    /// Hand the payload to the submitter, then call [`State::complete`].
    Submitted(ContactPayload),
    /// Validation failed; bring this field into view and focus it.
    FocusField(FieldId),
    /// Keyboard focus moved to this field's widget.
    MoveFocus(FieldId),
}

#[derive(Default)]
pub struct State {
    form: ContactForm,
    message_editor: text_editor::Content,
    /// Field currently under the pointer.
    hovered: Option<FieldId>,
}

impl State {
    #[must_use]
    pub fn new(form: ContactForm) -> Self {
        let message_editor = text_editor::Content::with_text(form.text(FieldId::Message));
        Self {
            form,
            message_editor,
            hovered: None,
        }
    }

    #[must_use]
    pub fn form(&self) -> &ContactForm {
        &self.form
    }

    #[must_use]
    pub fn hovered(&self) -> Option<FieldId> {
        self.hovered
    }

    #[must_use]
    pub fn message_editor(&self) -> &text_editor::Content {
        &self.message_editor
    }

    /// Ends the in-flight submission; see [`ContactForm::complete`].
    pub fn complete(
        &mut self,
        now: Instant,
        result: Result<(), SubmitError>,
        notifications: &mut NotificationCenter,
        i18n: &I18n,
    ) -> Option<NotificationId> {
        let shown = self.form.complete(now, result, notifications, i18n);
        self.sync_editor();
        shown
    }

    fn sync_editor(&mut self) {
        let buffered = self.message_editor.text();
        if buffered.trim_end_matches('\n') != self.form.text(FieldId::Message) {
            self.message_editor = text_editor::Content::with_text(self.form.text(FieldId::Message));
        }
    }
}

/// Applies a widget message to the form.
pub fn update(state: &mut State, message: Message, now: Instant) -> Event {
    match message {
        Message::Input(id, value) => {
            state.form.set_text(id, &value);
            Event::None
        }
        Message::Select(id, value) => {
            state.form.select(id, &value);
            Event::None
        }
        Message::Toggle(id, checked) => {
            state.form.set_checked(id, checked);
            Event::None
        }
        Message::EditMessage(action) => {
            if state.form.is_submitting() {
                return Event::None;
            }
            let is_edit = action.is_edit();
            state.message_editor.perform(action);
            if is_edit {
                let value = state.message_editor.text();
                state
                    .form
                    .set_text(FieldId::Message, value.trim_end_matches('\n'));
            } else {
                state.form.focus(FieldId::Message);
            }
            Event::None
        }
        Message::Submit => match state.form.submit(now) {
            SubmitOutcome::Busy => Event::None,
            SubmitOutcome::Rejected { first_invalid } => {
                state.form.take_focus_request();
                Event::FocusField(first_invalid)
            }
            SubmitOutcome::Accepted(payload) => Event::Submitted(payload),
        },
        Message::PointerEntered(id) => {
            state.hovered = Some(id);
            Event::None
        }
        Message::PointerLeft(id) => {
            if state.hovered == Some(id) {
                state.hovered = None;
            }
            Event::None
        }
        Message::PointerPressed => {
            if !state.form.is_submitting() {
                match state.hovered {
                    Some(id) => state.form.focus(id),
                    None => state.form.blur(),
                }
            }
            Event::None
        }
        Message::FocusNext { backwards } => {
            let Some(current) = state.form.focused() else {
                return Event::None;
            };
            let Some(position) = TAB_ORDER.iter().position(|&id| id == current) else {
                return Event::None;
            };
            let len = TAB_ORDER.len();
            let next = if backwards {
                TAB_ORDER[(position + len - 1) % len]
            } else {
                TAB_ORDER[(position + 1) % len]
            };
            state.form.focus(next);
            Event::MoveFocus(next)
        }
    }
}
