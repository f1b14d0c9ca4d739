// SPDX-License-Identifier: MPL-2.0
//! Animated statistics counters.
//!
//! The counters count up once, the first time the stats block scrolls into
//! view, with an ease-out cubic curve.

use crate::config::defaults::{COUNTER_ANIMATION_MS, COUNTER_BOTTOM_MARGIN_PX, COUNTER_THRESHOLD};
use crate::ui::intersection::{ObserverOptions, RootMargin, Span};
use std::time::{Duration, Instant};

/// A statistic to count up to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CounterSpec {
    pub target: u32,
    /// Appended once the count completes, e.g. `+` or `%`.
    pub suffix: String,
    pub label_key: String,
}

impl CounterSpec {
    #[must_use]
    pub fn new(target: u32, suffix: impl Into<String>, label_key: impl Into<String>) -> Self {
        Self {
            target,
            suffix: suffix.into(),
            label_key: label_key.into(),
        }
    }
}

/// Value shown after `elapsed` of an animation lasting `duration`.
#[must_use]
pub fn eased_value(target: u32, elapsed: Duration, duration: Duration) -> u32 {
    let progress = if duration.is_zero() {
        1.0
    } else {
        (elapsed.as_secs_f64() / duration.as_secs_f64()).min(1.0)
    };
    let eased = 1.0 - (1.0 - progress).powi(3);
    (eased * f64::from(target)).floor() as u32
}

#[derive(Debug, Clone)]
pub struct Counters {
    items: Vec<CounterSpec>,
    duration: Duration,
    observer: ObserverOptions,
    started_at: Option<Instant>,
}

impl Counters {
    #[must_use]
    pub fn new(items: Vec<CounterSpec>) -> Self {
        Self {
            items,
            duration: Duration::from_millis(COUNTER_ANIMATION_MS),
            observer: ObserverOptions::new(
                COUNTER_THRESHOLD,
                RootMargin::bottom(COUNTER_BOTTOM_MARGIN_PX),
            ),
            started_at: None,
        }
    }

    #[must_use]
    pub fn items(&self) -> &[CounterSpec] {
        &self.items
    }

    #[must_use]
    pub fn has_started(&self) -> bool {
        self.started_at.is_some()
    }

    /// Starts the animation. Only the first call has an effect, and a
    /// block without counters never starts.
    pub fn start(&mut self, now: Instant) -> bool {
        if self.started_at.is_some() || self.items.is_empty() {
            return false;
        }
        self.started_at = Some(now);
        true
    }

    /// Starts the animation when the stats block intersects the viewport.
    pub fn observe(&mut self, now: Instant, block: Span, viewport: Span) -> bool {
        if self.has_started() || !self.observer.observes(block, viewport) {
            return false;
        }
        self.start(now)
    }

    #[must_use]
    pub fn is_animating(&self, now: Instant) -> bool {
        self.started_at
            .is_some_and(|started| now.saturating_duration_since(started) < self.duration)
    }

    /// Text displayed for counter `index` at `now`.
    ///
    /// Before the animation starts the counter shows `0`; once complete it
    /// shows the target followed by its suffix.
    #[must_use]
    pub fn display(&self, index: usize, now: Instant) -> String {
        let Some(item) = self.items.get(index) else {
            return String::new();
        };
        let Some(started) = self.started_at else {
            return "0".to_string();
        };
        let elapsed = now.saturating_duration_since(started);
        if elapsed >= self.duration {
            format!("{}{}", item.target, item.suffix)
        } else {
            eased_value(item.target, elapsed, self.duration).to_string()
        }
    }
}
