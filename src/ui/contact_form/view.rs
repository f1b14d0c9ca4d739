// SPDX-License-Identifier: MPL-2.0
//! Contact form rendering.

use super::{Decoration, Message, State, SUBJECTS};
use crate::domain::contact::{FieldId, FieldKind, FieldSpec};
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{palette, sizing, spacing, typography};
use crate::ui::styles;
use iced::alignment::Vertical;
use iced::widget::{
    button, checkbox, container, mouse_area, pick_list, text, text_editor, text_input, Column, Id,
    Row, Space,
};
use iced::{Element, Length};
use std::fmt;

/// Contextual data needed to render the form.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub state: &'a State,
}

/// Subject select entry: the posted value and its translated label.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubjectOption {
    pub value: &'static str,
    pub label: String,
}

impl fmt::Display for SubjectOption {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label)
    }
}

#[must_use]
pub fn subject_options(i18n: &I18n) -> Vec<SubjectOption> {
    SUBJECTS
        .iter()
        .map(|&value| SubjectOption {
            value,
            label: i18n.tr(&format!("contact-subject-{value}")),
        })
        .collect()
}

/// Widget id of the control backing `field`, for focus operations.
#[must_use]
pub fn field_widget_id(field: FieldId) -> Id {
    Id::new(field.form_name())
}

pub fn view<'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    let form = ctx.state.form();

    let mut column = Column::new()
        .spacing(spacing::MD)
        .max_width(sizing::FORM_MAX_WIDTH);
    for spec in form.schema().fields() {
        column = column.push(field_view(&ctx, spec));
    }

    let submit = button(
        text(ctx.i18n.tr(form.submit_label_key()))
            .size(typography::BODY)
            .width(Length::Fill)
            .center(),
    )
    .width(Length::Fill)
    .height(sizing::BUTTON_HEIGHT)
    .padding(spacing::XS)
    .on_press_maybe((!form.is_submitting()).then_some(Message::Submit))
    .style(styles::button::primary);

    column.push(submit).into()
}

fn field_view<'a>(ctx: &ViewContext<'a>, spec: &FieldSpec) -> Element<'a, Message> {
    let id = spec.id;
    let form = ctx.state.form();
    let enabled = !form.is_submitting();
    let decoration = form.decoration(id);

    let control: Element<'a, Message> = match id.kind() {
        FieldKind::Text => {
            let placeholder = if id == FieldId::Phone {
                "(00) 00000-0000"
            } else {
                ""
            };
            text_input(placeholder, form.text(id))
                .id(field_widget_id(id))
                .on_input_maybe(enabled.then_some(move |value: String| Message::Input(id, value)))
                .on_submit(Message::Submit)
                .padding(spacing::XS)
                .size(typography::BODY)
                .into()
        }
        FieldKind::TextArea => {
            let editor = text_editor(ctx.state.message_editor())
                .height(sizing::TEXTAREA_HEIGHT)
                .padding(spacing::XS)
                .size(typography::BODY);
            if enabled {
                editor.on_action(Message::EditMessage).into()
            } else {
                editor.into()
            }
        }
        FieldKind::Select => {
            let options = subject_options(ctx.i18n);
            let selected = options
                .iter()
                .find(|option| option.value == form.text(id))
                .cloned();
            pick_list(options, selected, move |option: SubjectOption| {
                Message::Select(id, option.value.to_owned())
            })
            .placeholder(ctx.i18n.tr("contact-subject-placeholder"))
            .width(Length::Fill)
            .padding(spacing::XS)
            .into()
        }
        FieldKind::Checkbox => checkbox(form.is_checked(id))
            .label(ctx.i18n.tr(id.label_key()))
            .on_toggle_maybe(enabled.then_some(move |checked: bool| Message::Toggle(id, checked)))
            .size(typography::BODY)
            .into(),
    };

    let outlined = container(control)
        .width(Length::Fill)
        .padding(2.0)
        .style(move |theme: &iced::Theme| styles::container::field(theme, decoration));

    let mut column = Column::new().spacing(spacing::XXS);
    if id.kind() != FieldKind::Checkbox {
        column = column.push(label_row(ctx.i18n, id, spec.required, decoration));
    }
    column = column.push(outlined);

    if let Some(error) = decoration.error() {
        column = column.push(
            text(ctx.i18n.tr(error.i18n_key()))
                .size(typography::CAPTION)
                .color(palette::ERROR_500),
        );
    }

    // Tracks the field under the pointer so a click can focus or blur it.
    mouse_area(column)
        .on_enter(Message::PointerEntered(id))
        .on_exit(Message::PointerLeft(id))
        .into()
}

fn label_row<'a>(
    i18n: &I18n,
    id: FieldId,
    required: bool,
    decoration: Decoration,
) -> Element<'a, Message> {
    let label = if required {
        format!("{} *", i18n.tr(id.label_key()))
    } else {
        i18n.tr(id.label_key())
    };

    let mut row = Row::new()
        .spacing(spacing::XS)
        .align_y(Vertical::Center)
        .push(text(label).size(typography::BODY_SM))
        .push(Space::new().width(Length::Fill));

    if decoration == Decoration::Valid {
        row = row.push(
            text("✓")
                .size(typography::BODY_SM)
                .color(palette::SUCCESS_500),
        );
    }

    row.into()
}
