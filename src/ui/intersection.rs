// SPDX-License-Identifier: MPL-2.0
//! Vertical intersection model for viewport-triggered widgets.
//!
//! Counters, scroll reveals and lazy images start when their element
//! enters the viewport. Elements are laid out in a single scrolling column,
//! so intersection only has to consider vertical extents.

/// Vertical extent in page coordinates (top grows downwards).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Span {
    pub top: f32,
    pub bottom: f32,
}

impl Span {
    #[must_use]
    pub fn new(top: f32, height: f32) -> Self {
        Self {
            top,
            bottom: top + height.max(0.0),
        }
    }

    #[must_use]
    pub fn height(self) -> f32 {
        self.bottom - self.top
    }
}

/// Grows (positive) or shrinks (negative) the viewport before testing.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct RootMargin {
    pub top: f32,
    pub bottom: f32,
}

impl RootMargin {
    /// Same margin above and below.
    #[must_use]
    pub fn vertical(margin: f32) -> Self {
        Self {
            top: margin,
            bottom: margin,
        }
    }

    #[must_use]
    pub fn bottom(margin: f32) -> Self {
        Self {
            top: 0.0,
            bottom: margin,
        }
    }
}

/// Threshold and margin of one observer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ObserverOptions {
    /// Visible fraction of the target at which it counts as intersecting.
    pub threshold: f32,
    pub margin: RootMargin,
}

impl ObserverOptions {
    #[must_use]
    pub fn new(threshold: f32, margin: RootMargin) -> Self {
        Self { threshold, margin }
    }

    #[must_use]
    pub fn observes(&self, target: Span, viewport: Span) -> bool {
        is_intersecting(intersection_ratio(target, viewport, self.margin), self.threshold)
    }
}

/// Fraction of `target` inside `viewport` once the margin is applied.
///
/// A zero-height target is fully visible when its position lies inside the
/// adjusted viewport.
#[must_use]
pub fn intersection_ratio(target: Span, viewport: Span, margin: RootMargin) -> f32 {
    let root_top = viewport.top - margin.top;
    let root_bottom = viewport.bottom + margin.bottom;

    if target.height() <= 0.0 {
        return if target.top >= root_top && target.top <= root_bottom {
            1.0
        } else {
            0.0
        };
    }

    let visible = (target.bottom.min(root_bottom) - target.top.max(root_top)).max(0.0);
    (visible / target.height()).clamp(0.0, 1.0)
}

#[must_use]
pub fn is_intersecting(ratio: f32, threshold: f32) -> bool {
    ratio > 0.0 && ratio >= threshold
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn viewport() -> Span {
        Span::new(0.0, 800.0)
    }

    #[test]
    fn fully_visible_target_has_ratio_one() {
        let ratio = intersection_ratio(Span::new(100.0, 200.0), viewport(), RootMargin::default());
        assert_relative_eq!(ratio, 1.0);
    }

    #[test]
    fn partially_visible_target() {
        let ratio = intersection_ratio(Span::new(700.0, 200.0), viewport(), RootMargin::default());
        assert_relative_eq!(ratio, 0.5);
    }

    #[test]
    fn negative_bottom_margin_shrinks_viewport() {
        let target = Span::new(700.0, 200.0);
        let ratio = intersection_ratio(target, viewport(), RootMargin::bottom(-100.0));
        assert_relative_eq!(ratio, 0.0);
        assert!(!ObserverOptions::new(0.5, RootMargin::bottom(-100.0)).observes(target, viewport()));
    }

    #[test]
    fn positive_margin_reaches_below_the_fold() {
        let target = Span::new(830.0, 100.0);
        assert_relative_eq!(
            intersection_ratio(target, viewport(), RootMargin::default()),
            0.0
        );
        let ratio = intersection_ratio(target, viewport(), RootMargin::vertical(50.0));
        assert_relative_eq!(ratio, 0.2);
        assert!(ObserverOptions::new(0.1, RootMargin::vertical(50.0)).observes(target, viewport()));
    }

    #[test]
    fn threshold_is_inclusive_but_zero_never_intersects() {
        assert!(is_intersecting(0.5, 0.5));
        assert!(!is_intersecting(0.49, 0.5));
        assert!(!is_intersecting(0.0, 0.0));
    }

    #[test]
    fn empty_target_uses_position() {
        let inside = intersection_ratio(Span::new(10.0, 0.0), viewport(), RootMargin::default());
        let outside = intersection_ratio(Span::new(900.0, 0.0), viewport(), RootMargin::default());
        assert_relative_eq!(inside, 1.0);
        assert_relative_eq!(outside, 0.0);
    }
}
