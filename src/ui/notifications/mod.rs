// SPDX-License-Identifier: MPL-2.0
//! Toast notification system for user feedback.
//!
//! Notifications appear temporarily to report outcomes (form sent, cookie
//! choice saved, configuration problems) without blocking interaction.
//!
//! # Components
//!
//! - [`notification`] - `Notification` data, severity and lifecycle phase
//! - [`center`] - `NotificationCenter`, the registry and timer owner
//! - [`toast`] - Toast widget rendering mounted notifications
//!
//! # Usage
//!
//! ```
//! use silva_site::ui::notifications::NotificationCenter;
//! use std::time::{Duration, Instant};
//!
//! let start = Instant::now();
//! let mut center = NotificationCenter::default();
//! let id = center.success(start, "Mensagem enviada", None).unwrap();
//!
//! // Drive timers from the update loop.
//! center.tick(start + Duration::from_millis(100));
//! assert!(center.get(id).is_some());
//! ```

mod center;
mod notification;
mod toast;

pub use center::{DefaultTitles, Message as NotificationMessage, NotificationCenter, NotificationTiming};
pub use notification::{Notification, NotificationId, Phase, Severity};
pub use toast::Toast;
