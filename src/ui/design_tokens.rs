// SPDX-License-Identifier: MPL-2.0
#![doc = r#"
# Design Tokens

Visual constants shared by every page section and widget.

## Organization

- **Palette**: brand, neutral and semantic colors
- **Opacity**: standardized opacity levels
- **Spacing**: spacing scale (8px grid)
- **Sizing**: component sizes
- **Typography**: font size scale, relative to a 16px base
- **Border**, **Radius**, **Shadow**

## Examples

```
use silva_site::ui::design_tokens::{palette, spacing, opacity};
use iced::Color;

let overlay_bg = Color {
    a: opacity::OVERLAY_STRONG,
    ..palette::NAVY_900
};

let padding = spacing::MD; // 16px
```
"#]

use iced::Color;

// ============================================================================
// Color Palette
// ============================================================================

pub mod palette {
    use super::Color;

    // Neutrals
    pub const BLACK: Color = Color::BLACK;
    pub const WHITE: Color = Color::WHITE;
    pub const GRAY_900: Color = Color::from_rgb(0.11, 0.12, 0.14);
    pub const GRAY_700: Color = Color::from_rgb(0.29, 0.31, 0.34);
    pub const GRAY_400: Color = Color::from_rgb(0.55, 0.57, 0.6);
    pub const GRAY_100: Color = Color::from_rgb(0.96, 0.96, 0.97);

    // Brand: navy and gold
    pub const NAVY_900: Color = Color::from_rgb(0.059, 0.122, 0.212);
    pub const NAVY_700: Color = Color::from_rgb(0.102, 0.212, 0.365);
    pub const NAVY_500: Color = Color::from_rgb(0.173, 0.322, 0.51);
    pub const GOLD_500: Color = Color::from_rgb(0.788, 0.635, 0.153);
    pub const GOLD_300: Color = Color::from_rgb(0.91, 0.8, 0.45);

    // High contrast
    pub const CONTRAST_YELLOW: Color = Color::from_rgb(1.0, 1.0, 0.0);

    // Semantic colors
    pub const ERROR_500: Color = Color::from_rgb(0.863, 0.208, 0.271);
    pub const WARNING_500: Color = Color::from_rgb(1.0, 0.757, 0.027);
    pub const SUCCESS_500: Color = Color::from_rgb(0.157, 0.655, 0.271);
    pub const INFO_500: Color = Color::from_rgb(0.09, 0.635, 0.722);
}

// ============================================================================
// Opacity Scale
// ============================================================================

pub mod opacity {
    pub const TRANSPARENT: f32 = 0.0;
    pub const OVERLAY_SUBTLE: f32 = 0.2;
    pub const OVERLAY_MEDIUM: f32 = 0.5;
    pub const OVERLAY_STRONG: f32 = 0.7;
    pub const OPAQUE: f32 = 1.0;

    /// Navbar background once the page is scrolled.
    pub const SURFACE: f32 = 0.95;
}

// ============================================================================
// Spacing Scale (8px baseline grid)
// ============================================================================

pub mod spacing {
    pub const XXS: f32 = 4.0; // 0.5 unit
    pub const XS: f32 = 8.0; // 1 unit
    pub const SM: f32 = 12.0; // 1.5 units
    pub const MD: f32 = 16.0; // 2 units
    pub const LG: f32 = 24.0; // 3 units
    pub const XL: f32 = 32.0; // 4 units
    pub const XXL: f32 = 48.0; // 6 units
    pub const SECTION: f32 = 80.0;
}

// ============================================================================
// Sizing Scale
// ============================================================================

pub mod sizing {
    pub const BUTTON_HEIGHT: f32 = 40.0;
    pub const INPUT_HEIGHT: f32 = 40.0;
    pub const TEXTAREA_HEIGHT: f32 = 120.0;

    /// Rendered navbar height, also the smooth-scroll header offset.
    pub const NAVBAR_HEIGHT: f32 = 80.0;
    pub const CONTENT_MAX_WIDTH: f32 = 1140.0;
    pub const TOAST_WIDTH: f32 = 350.0;
    pub const FORM_MAX_WIDTH: f32 = 640.0;
    pub const CAROUSEL_DOT: f32 = 12.0;
}

// ============================================================================
// Typography Scale
// ============================================================================

pub mod typography {
    //! Sizes are expressed for the default 16px base and scaled with the
    //! user's font size preference.

    pub const HERO: f32 = 40.0;
    pub const TITLE_LG: f32 = 30.0;
    pub const TITLE_MD: f32 = 22.0;
    pub const TITLE_SM: f32 = 18.0;
    pub const BODY: f32 = 16.0;
    pub const BODY_SM: f32 = 14.0;
    pub const CAPTION: f32 = 12.0;
}

// ============================================================================
// Border Scale
// ============================================================================

pub mod border {
    pub const WIDTH_SM: f32 = 1.0;

    /// Field decorations and toast accents.
    pub const WIDTH_MD: f32 = 2.0;
}

// ============================================================================
// Border Radius Scale
// ============================================================================

pub mod radius {
    pub const SM: f32 = 4.0;
    pub const MD: f32 = 8.0;
    pub const FULL: f32 = 9999.0;
}

// ============================================================================
// Shadow Definitions
// ============================================================================

pub mod shadow {
    use super::palette;
    use iced::{Shadow, Vector};

    pub const NONE: Shadow = Shadow {
        color: palette::BLACK,
        offset: Vector::ZERO,
        blur_radius: 0.0,
    };

    pub const MD: Shadow = Shadow {
        color: palette::BLACK,
        offset: Vector { x: 0.0, y: 4.0 },
        blur_radius: 12.0,
    };
}

// ============================================================================
// Compile-time Validation
// ============================================================================

const _: () = {
    assert!(spacing::XS > 0.0);
    assert!(spacing::SM > spacing::XS);
    assert!(spacing::MD > spacing::SM);
    assert!(spacing::LG > spacing::MD);

    assert!(opacity::TRANSPARENT == 0.0);
    assert!(opacity::OPAQUE == 1.0);
    assert!(opacity::SURFACE > 0.0 && opacity::SURFACE < 1.0);

    assert!(typography::HERO > typography::TITLE_LG);
    assert!(typography::TITLE_LG > typography::TITLE_MD);
    assert!(typography::TITLE_MD > typography::TITLE_SM);
    assert!(typography::TITLE_SM > typography::BODY);
    assert!(typography::BODY > typography::BODY_SM);
    assert!(typography::BODY_SM > typography::CAPTION);

    assert!(border::WIDTH_MD > border::WIDTH_SM);
};
