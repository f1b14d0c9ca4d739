// SPDX-License-Identifier: MPL-2.0
//! Color schemes for the normal and high-contrast display modes.

use crate::ui::design_tokens::{opacity, palette};
use iced::{Color, Theme};

/// Colors used by the page sections.
#[derive(Debug, Clone, PartialEq)]
pub struct ColorScheme {
    pub surface_primary: Color,
    pub surface_secondary: Color,

    pub text_primary: Color,
    pub text_secondary: Color,

    pub brand_primary: Color,
    pub brand_accent: Color,

    pub error: Color,
    pub warning: Color,
    pub success: Color,
    pub info: Color,

    pub overlay_background: Color,
    pub overlay_text: Color,
}

impl ColorScheme {
    #[must_use]
    pub fn normal() -> Self {
        Self {
            surface_primary: palette::WHITE,
            surface_secondary: palette::GRAY_100,

            text_primary: palette::GRAY_900,
            text_secondary: palette::GRAY_700,

            brand_primary: palette::NAVY_700,
            brand_accent: palette::GOLD_500,

            error: palette::ERROR_500,
            warning: palette::WARNING_500,
            success: palette::SUCCESS_500,
            info: palette::INFO_500,

            overlay_background: Color {
                a: opacity::OVERLAY_STRONG,
                ..palette::NAVY_900
            },
            overlay_text: palette::WHITE,
        }
    }

    /// Black surfaces, white text and yellow accents.
    #[must_use]
    pub fn high_contrast() -> Self {
        Self {
            surface_primary: palette::BLACK,
            surface_secondary: palette::BLACK,

            text_primary: palette::WHITE,
            text_secondary: palette::WHITE,

            brand_primary: palette::CONTRAST_YELLOW,
            brand_accent: palette::CONTRAST_YELLOW,

            error: palette::ERROR_500,
            warning: palette::CONTRAST_YELLOW,
            success: palette::SUCCESS_500,
            info: palette::WHITE,

            overlay_background: palette::BLACK,
            overlay_text: palette::CONTRAST_YELLOW,
        }
    }

    #[must_use]
    pub fn for_contrast(high_contrast: bool) -> Self {
        if high_contrast {
            Self::high_contrast()
        } else {
            Self::normal()
        }
    }

    /// Builds the Iced theme carrying this scheme's base colors.
    #[must_use]
    pub fn to_theme(&self, name: &str) -> Theme {
        let mut base = Theme::Light.palette();
        base.background = self.surface_primary;
        base.text = self.text_primary;
        base.primary = self.brand_primary;
        base.success = self.success;
        base.danger = self.error;
        Theme::custom(name.to_string(), base)
    }
}
