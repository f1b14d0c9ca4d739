// SPDX-License-Identifier: MPL-2.0
//! Event subscriptions for the application.
//!
//! Native events (keyboard, wheel, window) are routed to the page, and a
//! periodic tick drives every timer and animation while any is pending.

use super::Message;
use iced::{event, keyboard, mouse, time, window, Subscription};
use std::time::Duration;

/// Tick period while something is visibly moving.
pub const ANIMATION_TICK: Duration = Duration::from_millis(16);

/// Tick period while only timers are waiting.
pub const TIMER_TICK: Duration = Duration::from_millis(100);

/// What currently needs the clock.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Activity {
    /// A frame-by-frame animation is running.
    pub animating: bool,
    /// At least one deadline is scheduled.
    pub pending_timers: bool,
}

/// Routes native events to page messages.
///
/// Keys already captured by a widget (typing in the form) are not
/// forwarded, so `Enter`/`Space` in a text field never toggle the FAQ.
/// Left clicks are forwarded whatever captured them: the contact form
/// uses them to tell focus moves from clicks elsewhere.
pub fn create_event_subscription() -> Subscription<Message> {
    event::listen_with(|event, status, window_id| match event {
        event::Event::Window(window::Event::Resized(size)) => Some(Message::WindowResized(size)),
        event::Event::Window(window::Event::CloseRequested) => {
            Some(Message::CloseRequested(window_id))
        }
        event::Event::Mouse(mouse::Event::WheelScrolled { .. }) => Some(Message::WheelScrolled),
        event::Event::Mouse(mouse::Event::ButtonPressed(mouse::Button::Left)) => {
            Some(Message::PointerPressed)
        }
        event::Event::Keyboard(keyboard::Event::KeyPressed {
            key: keyboard::Key::Named(keyboard::key::Named::Tab),
            modifiers,
            ..
        }) => match status {
            event::Status::Ignored => Some(Message::TabPressed {
                backwards: modifiers.shift(),
            }),
            event::Status::Captured => None,
        },
        event::Event::Keyboard(keyboard::Event::KeyPressed { key, .. }) => match status {
            event::Status::Ignored => Some(Message::KeyPressed(key)),
            event::Status::Captured => None,
        },
        _ => None,
    })
}

/// Ticks fast while animating, slowly while only timers are pending, and
/// not at all otherwise.
pub fn create_tick_subscription(activity: Activity) -> Subscription<Message> {
    match tick_period(activity) {
        Some(period) => time::every(period).map(Message::Tick),
        None => Subscription::none(),
    }
}

#[must_use]
pub fn tick_period(activity: Activity) -> Option<Duration> {
    if activity.animating {
        Some(ANIMATION_TICK)
    } else if activity.pending_timers {
        Some(TIMER_TICK)
    } else {
        None
    }
}
