// SPDX-License-Identifier: MPL-2.0
//! UI domain types.
//!
//! Value objects shared by the page widgets, independent of any
//! presentation framework.

pub mod newtypes;

pub use newtypes::{font_size_bounds, FontSize};
