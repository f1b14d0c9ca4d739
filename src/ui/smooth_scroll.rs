// SPDX-License-Identifier: MPL-2.0
//! Anchor navigation that eases the page to a section below the fixed header.

use crate::config::defaults::HEADER_FALLBACK_HEIGHT_PX;
use crate::ui::page::{PageLayout, Section};
use std::time::{Duration, Instant};

/// Length of the easing animation.
pub const SCROLL_ANIMATION: Duration = Duration::from_millis(400);

/// Offset to scroll to so an element lands just below the header.
///
/// `element_top` is relative to the viewport, as the element is currently
/// displayed. Without a measured header the fallback height is used. The
/// result never goes above the top of the page.
#[must_use]
pub fn target_offset(element_top: f32, current_offset: f32, header_offset: Option<f32>) -> f32 {
    let header = header_offset.unwrap_or(HEADER_FALLBACK_HEIGHT_PX);
    (element_top + current_offset - header).max(0.0)
}

/// Scroll metrics reported by the page scrollable.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ScrollMetrics {
    pub offset: f32,
    pub viewport_height: f32,
    pub content_height: f32,
}

impl ScrollMetrics {
    /// Largest reachable offset.
    #[must_use]
    pub fn max_offset(&self) -> f32 {
        (self.content_height - self.viewport_height).max(0.0)
    }

    /// Converts an absolute offset to the relative `0.0..=1.0` form used by
    /// scrollable operations.
    #[must_use]
    pub fn relative(&self, offset: f32) -> f32 {
        let max = self.max_offset();
        if max <= 0.0 {
            0.0
        } else {
            (offset / max).clamp(0.0, 1.0)
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
struct Animation {
    from: f32,
    to: f32,
    started_at: Instant,
}

/// Eased scrolling towards a section.
#[derive(Debug, Clone, Default)]
pub struct SmoothScroll {
    metrics: ScrollMetrics,
    animation: Option<Animation>,
}

impl SmoothScroll {
    #[must_use]
    pub fn metrics(&self) -> ScrollMetrics {
        self.metrics
    }

    pub fn set_metrics(&mut self, metrics: ScrollMetrics) {
        self.metrics = metrics;
    }

    #[must_use]
    pub fn is_animating(&self) -> bool {
        self.animation.is_some()
    }

    /// Starts easing towards `section`. Returns the final offset.
    pub fn scroll_to(&mut self, now: Instant, section: Section, layout: &PageLayout) -> f32 {
        let current = self.metrics.offset;
        let element_top = layout.span(section).top - current;
        let to = target_offset(element_top, current, Some(layout.header_height()))
            .min(self.metrics.max_offset().max(0.0));
        self.animation = Some(Animation {
            from: current,
            to,
            started_at: now,
        });
        to
    }

    /// Advances the animation, returning the offset to apply now.
    pub fn tick(&mut self, now: Instant) -> Option<f32> {
        let animation = self.animation?;
        let elapsed = now.saturating_duration_since(animation.started_at);
        let progress = (elapsed.as_secs_f32() / SCROLL_ANIMATION.as_secs_f32()).min(1.0);
        let eased = 1.0 - (1.0 - progress).powi(3);
        let offset = animation.from + (animation.to - animation.from) * eased;

        if progress >= 1.0 {
            self.animation = None;
        }
        self.metrics.offset = offset;
        Some(offset)
    }

    /// The user scrolled manually: any running animation stops.
    pub fn cancel(&mut self) {
        self.animation = None;
    }
}
