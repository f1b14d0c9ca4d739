// SPDX-License-Identifier: MPL-2.0
//! UI newtypes.

// =============================================================================
// Font Size Bounds
// =============================================================================

/// Root font size bounds in pixels (12px to 22px).
pub mod font_size_bounds {
    /// Smallest root font size.
    pub const MIN: u8 = 12;
    /// Largest root font size.
    pub const MAX: u8 = 22;
    /// Browser default root font size.
    pub const DEFAULT: u8 = 16;
}

// =============================================================================
// FontSize
// =============================================================================

/// Root font size chosen by the visitor, always within 12–22px.
///
/// Stepping past either bound is refused rather than clamped, so a visitor
/// pressing "A+" at the maximum sees no change.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FontSize(u8);

impl FontSize {
    /// Creates a font size, clamping to the valid range.
    #[must_use]
    pub fn new(px: u8) -> Self {
        Self(px.clamp(font_size_bounds::MIN, font_size_bounds::MAX))
    }

    /// Parses a stored preference, falling back to the default when the
    /// value is missing, malformed or zero.
    #[must_use]
    pub fn parse_or_default(raw: Option<&str>) -> Self {
        raw.and_then(|value| value.trim().parse::<u8>().ok())
            .filter(|px| *px > 0)
            .map_or_else(Self::default, Self::new)
    }

    /// Returns the size moved by `delta` pixels, or `None` if it would
    /// leave the valid range.
    #[must_use]
    pub fn step(self, delta: i8) -> Option<Self> {
        let next = i16::from(self.0) + i16::from(delta);
        let range = i16::from(font_size_bounds::MIN)..=i16::from(font_size_bounds::MAX);
        if range.contains(&next) {
            u8::try_from(next).ok().map(Self)
        } else {
            None
        }
    }

    #[must_use]
    pub fn value(self) -> u8 {
        self.0
    }

    /// Multiplier relative to the default size (16px → 1.0).
    #[must_use]
    pub fn scale(self) -> f32 {
        f32::from(self.0) / f32::from(font_size_bounds::DEFAULT)
    }

    #[must_use]
    pub fn is_min(self) -> bool {
        self.0 <= font_size_bounds::MIN
    }

    #[must_use]
    pub fn is_max(self) -> bool {
        self.0 >= font_size_bounds::MAX
    }
}

impl Default for FontSize {
    fn default() -> Self {
        Self(font_size_bounds::DEFAULT)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn new_clamps_to_range() {
        assert_eq!(FontSize::new(4).value(), font_size_bounds::MIN);
        assert_eq!(FontSize::new(40).value(), font_size_bounds::MAX);
        assert_eq!(FontSize::new(18).value(), 18);
    }

    #[test]
    fn step_refuses_to_leave_range() {
        assert_eq!(FontSize::new(22).step(1), None);
        assert_eq!(FontSize::new(12).step(-1), None);
        assert_eq!(FontSize::new(16).step(1), Some(FontSize::new(17)));
        assert_eq!(FontSize::new(16).step(-1), Some(FontSize::new(15)));
    }

    #[test]
    fn parse_falls_back_to_default() {
        assert_eq!(FontSize::parse_or_default(None), FontSize::default());
        assert_eq!(FontSize::parse_or_default(Some("abc")), FontSize::default());
        assert_eq!(FontSize::parse_or_default(Some("0")), FontSize::default());
        assert_eq!(FontSize::parse_or_default(Some("19")).value(), 19);
        assert_eq!(FontSize::parse_or_default(Some("30")).value(), 22);
    }

    #[test]
    fn scale_is_relative_to_default() {
        assert_relative_eq!(FontSize::default().scale(), 1.0);
        assert_relative_eq!(FontSize::new(20).scale(), 1.25);
    }

    #[test]
    fn bounds_detection() {
        assert!(FontSize::new(12).is_min());
        assert!(FontSize::new(22).is_max());
        assert!(!FontSize::default().is_min());
    }
}
