// SPDX-License-Identifier: MPL-2.0
//! One-shot reveal animations for page blocks entering the viewport.

use crate::config::defaults::{REVEAL_BOTTOM_MARGIN_PX, REVEAL_THRESHOLD};
use crate::ui::intersection::{ObserverOptions, RootMargin, Span};
use iced::widget::{Container, Space};
use iced::{Element, Length, Padding};
use std::time::{Duration, Instant};

/// Duration of a reveal transition.
pub const REVEAL_DURATION: Duration = Duration::from_millis(600);

/// Horizontal distance covered by the slide-in variants.
const SLIDE_DISTANCE_PX: f32 = 50.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RevealKind {
    FadeIn,
    SlideInLeft,
    SlideInRight,
}

/// Identifies a revealable block.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RevealId(pub usize);

#[derive(Debug, Clone, PartialEq)]
struct RevealBlock {
    kind: RevealKind,
    span: Span,
    animated_at: Option<Instant>,
}

#[derive(Debug, Clone)]
pub struct ScrollReveal {
    elements: Vec<RevealBlock>,
    observer: ObserverOptions,
}

impl Default for ScrollReveal {
    fn default() -> Self {
        Self::new()
    }
}

impl ScrollReveal {
    #[must_use]
    pub fn new() -> Self {
        Self {
            elements: Vec::new(),
            observer: ObserverOptions::new(
                REVEAL_THRESHOLD,
                RootMargin::bottom(REVEAL_BOTTOM_MARGIN_PX),
            ),
        }
    }

    /// Registers a block and returns its id.
    pub fn register(&mut self, kind: RevealKind, span: Span) -> RevealId {
        self.elements.push(RevealBlock {
            kind,
            span,
            animated_at: None,
        });
        RevealId(self.elements.len() - 1)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    #[must_use]
    pub fn kind(&self, id: RevealId) -> Option<RevealKind> {
        self.elements.get(id.0).map(|element| element.kind)
    }

    #[must_use]
    pub fn is_animated(&self, id: RevealId) -> bool {
        self.elements
            .get(id.0)
            .is_some_and(|element| element.animated_at.is_some())
    }

    /// Starts the animation of every block now intersecting the viewport.
    /// Blocks animate at most once. Returns how many started.
    pub fn observe(&mut self, now: Instant, viewport: Span) -> usize {
        let mut started = 0;
        for element in &mut self.elements {
            if element.animated_at.is_none() && self.observer.observes(element.span, viewport) {
                element.animated_at = Some(now);
                started += 1;
            }
        }
        started
    }

    /// Fallback without viewport tracking: everything animates at once.
    pub fn animate_all(&mut self, now: Instant) {
        for element in &mut self.elements {
            element.animated_at.get_or_insert(now);
        }
    }

    /// Transition progress in `0.0..=1.0`.
    #[must_use]
    pub fn progress(&self, id: RevealId, now: Instant) -> f32 {
        let Some(started) = self.elements.get(id.0).and_then(|e| e.animated_at) else {
            return 0.0;
        };
        let elapsed = now.saturating_duration_since(started).as_secs_f32();
        (elapsed / REVEAL_DURATION.as_secs_f32()).min(1.0)
    }

    #[must_use]
    pub fn is_animating(&self, now: Instant) -> bool {
        self.elements.iter().any(|element| {
            element
                .animated_at
                .is_some_and(|started| now.saturating_duration_since(started) < REVEAL_DURATION)
        })
    }

    /// Horizontal offset of a block at `now`: negative slides in from the
    /// left, positive from the right.
    #[must_use]
    pub fn offset_x(&self, id: RevealId, now: Instant) -> f32 {
        let remaining = 1.0 - self.progress(id, now);
        match self.kind(id) {
            Some(RevealKind::SlideInLeft) => -SLIDE_DISTANCE_PX * remaining,
            Some(RevealKind::SlideInRight) => SLIDE_DISTANCE_PX * remaining,
            Some(RevealKind::FadeIn) | None => 0.0,
        }
    }

    /// Wraps `content` so it stays hidden until revealed, then slides into
    /// place. Unregistered ids render as-is.
    pub fn wrap<'a, M: 'a>(
        &self,
        id: RevealId,
        now: Instant,
        height: f32,
        content: impl Into<Element<'a, M>>,
    ) -> Element<'a, M> {
        if self.elements.get(id.0).is_none() {
            return content.into();
        }
        if !self.is_animated(id) {
            return Space::new().width(Length::Fill).height(height).into();
        }
        let offset = self.offset_x(id, now);
        let padding = Padding {
            left: offset.max(0.0),
            right: (-offset).max(0.0),
            ..Padding::ZERO
        };
        Container::new(content).padding(padding).into()
    }
}
