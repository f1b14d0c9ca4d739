// SPDX-License-Identifier: MPL-2.0
//! Button styles.

use crate::ui::design_tokens::{border, opacity, palette, radius, shadow};
use iced::widget::button;
use iced::{Background, Border, Color, Theme};

/// Filled call-to-action button in the brand color.
///
/// Follows the active theme's primary color so the high-contrast theme
/// swaps it for yellow on black.
pub fn primary(theme: &Theme, status: button::Status) -> button::Style {
    let palette = theme.extended_palette();
    let base = button::Style {
        background: Some(Background::Color(palette.primary.base.color)),
        text_color: palette.primary.base.text,
        border: Border {
            color: palette.primary.strong.color,
            width: border::WIDTH_SM,
            radius: radius::SM.into(),
        },
        shadow: shadow::NONE,
        snap: true,
    };

    match status {
        button::Status::Active | button::Status::Pressed => base,
        button::Status::Hovered => button::Style {
            background: Some(Background::Color(palette.primary.strong.color)),
            shadow: shadow::MD,
            ..base
        },
        button::Status::Disabled => button::Style {
            background: Some(Background::Color(Color {
                a: opacity::OVERLAY_MEDIUM,
                ..palette.primary.base.color
            })),
            text_color: Color {
                a: opacity::OVERLAY_STRONG,
                ..palette.primary.base.text
            },
            ..base
        },
    }
}

/// Outlined button, used for toggles that are currently off.
pub fn outline(theme: &Theme, status: button::Status) -> button::Style {
    let palette = theme.extended_palette();
    let accent = palette.primary.base.color;

    let background = match status {
        button::Status::Hovered => Some(Background::Color(Color {
            a: opacity::OVERLAY_SUBTLE,
            ..accent
        })),
        button::Status::Active | button::Status::Pressed | button::Status::Disabled => None,
    };

    button::Style {
        background,
        text_color: if status == button::Status::Disabled {
            palette::GRAY_400
        } else {
            palette.background.base.text
        },
        border: Border {
            color: accent,
            width: border::WIDTH_SM,
            radius: radius::SM.into(),
        },
        shadow: shadow::NONE,
        snap: true,
    }
}
