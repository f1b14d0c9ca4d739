// SPDX-License-Identifier: MPL-2.0
//! Container styles.

use crate::ui::contact_form::Decoration;
use crate::ui::design_tokens::{border, opacity, palette, radius};
use iced::widget::container;
use iced::{Background, Border, Color, Theme};

/// Full-width page section surface.
///
/// Alternate sections get a slightly tinted background so neighbours stay
/// distinguishable; in high contrast both are the theme background.
pub fn section(theme: &Theme, alternate: bool) -> container::Style {
    let palette = theme.extended_palette();
    let background = if alternate {
        palette.background.weak.color
    } else {
        palette.background.base.color
    };

    container::Style {
        background: Some(Background::Color(background)),
        text_color: Some(palette.background.base.text),
        ..Default::default()
    }
}

/// Card surface for stats, team members and form panels.
pub fn card(theme: &Theme) -> container::Style {
    let palette = theme.extended_palette();
    let base = palette.background.base.color;

    container::Style {
        background: Some(Background::Color(Color {
            a: opacity::SURFACE,
            ..base
        })),
        border: Border {
            color: palette.background.strong.color,
            width: border::WIDTH_SM,
            radius: radius::MD.into(),
        },
        ..Default::default()
    }
}

/// Outline drawn around a form control to reflect its validation state.
pub fn field(theme: &Theme, decoration: Decoration) -> container::Style {
    let color = match decoration {
        Decoration::Untouched => Color::TRANSPARENT,
        Decoration::Valid => palette::SUCCESS_500,
        Decoration::Invalid(_) => theme.extended_palette().danger.base.color,
    };

    container::Style {
        border: Border {
            color,
            width: border::WIDTH_MD,
            radius: radius::SM.into(),
        },
        ..Default::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::contact::ValidationError;

    #[test]
    fn untouched_field_has_no_visible_outline() {
        let style = field(&Theme::Light, Decoration::Untouched);
        assert_eq!(style.border.color, Color::TRANSPARENT);
    }

    #[test]
    fn decorated_fields_use_status_colors() {
        let valid = field(&Theme::Light, Decoration::Valid);
        assert_eq!(valid.border.color, palette::SUCCESS_500);

        let invalid = field(
            &Theme::Light,
            Decoration::Invalid(ValidationError::Required),
        );
        assert_eq!(
            invalid.border.color,
            Theme::Light.extended_palette().danger.base.color
        );
    }

    #[test]
    fn alternate_section_differs_from_base() {
        let base = section(&Theme::Light, false);
        let alternate = section(&Theme::Light, true);
        assert_ne!(base.background, alternate.background);
    }
}
