// SPDX-License-Identifier: MPL-2.0
//! Application layer.
//!
//! - [`port`]: Capabilities the page depends on but does not implement
//!   (sending the contact form, local storage)
//!
//! The domain layer knows nothing of these traits; the UI receives concrete
//! adapters from `infrastructure` through the composition root.

pub mod port;
