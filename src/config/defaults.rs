// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for configuration and widget constants.
//!
//! # Categories
//!
//! - **Notifications**: Transition and auto-dismiss timings
//! - **Contact**: Simulated submission delay
//! - **Carousel**: Autoplay interval
//! - **Page**: Scroll, counter and visibility thresholds
//! - **Cookie banner**: Slide transitions
//! - **Diagnostics**: Event buffer bounds

// ==========================================================================
// Notification Defaults
// ==========================================================================

/// Delay between mounting a toast and starting its enter transition.
pub const DEFAULT_NOTIFICATION_ENTER_DELAY_MS: u64 = 100;

/// Length of the exit transition before a toast is detached.
pub const DEFAULT_NOTIFICATION_EXIT_DELAY_MS: u64 = 500;

/// Auto-dismiss delay. Zero keeps a toast until dismissed.
pub const DEFAULT_NOTIFICATION_DURATION_MS: u64 = 5000;

/// Upper bound accepted from the config file for any notification timing.
pub const MAX_NOTIFICATION_TIMING_MS: u64 = 60_000;

// ==========================================================================
// Contact Defaults
// ==========================================================================

/// How long the simulated submitter takes to answer.
pub const DEFAULT_SUBMIT_DELAY_MS: u64 = 2000;

pub const MAX_SUBMIT_DELAY_MS: u64 = 30_000;

// ==========================================================================
// Carousel Defaults
// ==========================================================================

pub const DEFAULT_CAROUSEL_AUTOPLAY_MS: u64 = 5000;

pub const MIN_CAROUSEL_AUTOPLAY_MS: u64 = 1000;

pub const MAX_CAROUSEL_AUTOPLAY_MS: u64 = 60_000;

// ==========================================================================
// Page Defaults
// ==========================================================================

/// Scroll offset past which the navbar switches to its scrolled style.
pub const NAVBAR_SCROLL_THRESHOLD_PX: f32 = 20.0;

/// Header height used for anchor offsets when the navbar height is unknown.
pub const HEADER_FALLBACK_HEIGHT_PX: f32 = 80.0;

/// Duration of the statistics counter animation.
pub const COUNTER_ANIMATION_MS: u64 = 2000;

/// Visible share of the statistics block that starts the counters.
pub const COUNTER_THRESHOLD: f32 = 0.5;

/// Bottom root margin applied when observing the statistics block.
pub const COUNTER_BOTTOM_MARGIN_PX: f32 = -100.0;

/// Visible share of an element that triggers its reveal animation.
pub const REVEAL_THRESHOLD: f32 = 0.1;

pub const REVEAL_BOTTOM_MARGIN_PX: f32 = -50.0;

/// Distance outside the viewport at which deferred images start loading.
pub const LAZY_IMAGE_MARGIN_PX: f32 = 50.0;

pub const LAZY_IMAGE_THRESHOLD: f32 = 0.1;

// ==========================================================================
// Cookie Banner Defaults
// ==========================================================================

pub const COOKIE_BANNER_SHOW_DELAY_MS: u64 = 100;

pub const COOKIE_BANNER_HIDE_DELAY_MS: u64 = 500;

// ==========================================================================
// Diagnostics Defaults
// ==========================================================================

pub use crate::domain::diagnostics::buffer_capacity_bounds::{
    DEFAULT as DEFAULT_DIAGNOSTICS_BUFFER_CAPACITY, MAX as MAX_DIAGNOSTICS_BUFFER_CAPACITY,
    MIN as MIN_DIAGNOSTICS_BUFFER_CAPACITY,
};

// ==========================================================================
// Compile-time Validation
// ==========================================================================

const _: () = {
    assert!(DEFAULT_NOTIFICATION_ENTER_DELAY_MS <= MAX_NOTIFICATION_TIMING_MS);
    assert!(DEFAULT_NOTIFICATION_EXIT_DELAY_MS <= MAX_NOTIFICATION_TIMING_MS);
    assert!(DEFAULT_NOTIFICATION_DURATION_MS <= MAX_NOTIFICATION_TIMING_MS);
    // A toast must be on screen before it can be dismissed automatically.
    assert!(DEFAULT_NOTIFICATION_DURATION_MS > DEFAULT_NOTIFICATION_ENTER_DELAY_MS);

    assert!(DEFAULT_SUBMIT_DELAY_MS <= MAX_SUBMIT_DELAY_MS);

    assert!(MIN_CAROUSEL_AUTOPLAY_MS > 0);
    assert!(DEFAULT_CAROUSEL_AUTOPLAY_MS >= MIN_CAROUSEL_AUTOPLAY_MS);
    assert!(DEFAULT_CAROUSEL_AUTOPLAY_MS <= MAX_CAROUSEL_AUTOPLAY_MS);

    assert!(MIN_DIAGNOSTICS_BUFFER_CAPACITY > 0);
    assert!(DEFAULT_DIAGNOSTICS_BUFFER_CAPACITY >= MIN_DIAGNOSTICS_BUFFER_CAPACITY);
    assert!(DEFAULT_DIAGNOSTICS_BUFFER_CAPACITY <= MAX_DIAGNOSTICS_BUFFER_CAPACITY);
};
