// SPDX-License-Identifier: MPL-2.0
//! User interface components and state management.
//!
//! Every widget follows the Elm-style "state down, messages up" pattern and
//! keeps its state machine free of toolkit types where it can, taking the
//! current time explicitly.
//!
//! # Page widgets
//!
//! - [`navbar`] - Fixed navigation bar with the mobile menu and scroll effect
//! - [`smooth_scroll`] - Eased scrolling to page sections
//! - [`contact_form`] - Contact form validation engine and view
//! - [`notifications`] - Toast notification center
//! - [`counters`] - Animated statistics
//! - [`carousel`] - Testimonials carousel with autoplay
//! - [`faq`] - FAQ accordion and its structured data
//! - [`accessibility`] - Font size and high-contrast preferences
//! - [`scroll_reveal`] - Reveal-on-scroll animations
//! - [`lazy_images`] - Deferred image loading
//! - [`cookie_banner`] - Cookie consent banner
//! - [`loading_overlay`] - Full-page loading overlay
//!
//! # Shared infrastructure
//!
//! - [`page`] - Section list and page geometry
//! - [`intersection`] - Viewport intersection model
//! - [`styles`] - Centralized widget styles
//! - [`design_tokens`] - Design system constants (colors, spacing, sizing)
//! - [`theming`] - Normal and high-contrast color schemes

pub mod accessibility;
pub mod carousel;
pub mod contact_form;
pub mod cookie_banner;
pub mod counters;
pub mod design_tokens;
pub mod faq;
pub mod intersection;
pub mod lazy_images;
pub mod loading_overlay;
pub mod navbar;
pub mod notifications;
pub mod page;
pub mod scroll_reveal;
pub mod smooth_scroll;
pub mod styles;
pub mod theming;
