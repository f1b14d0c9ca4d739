// SPDX-License-Identifier: MPL-2.0
//! Shared widget styles for the page sections.

pub mod button;
pub mod container;
