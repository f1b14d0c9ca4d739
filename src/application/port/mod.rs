// SPDX-License-Identifier: MPL-2.0
//! Port definitions (traits) for dependency inversion.
//!
//! # Available Ports
//!
//! - [`submission`]: Sending the contact form somewhere
//! - [`storage`]: Browser-like local storage of visitor preferences
//!
//! # Design Notes
//!
//! - Traits are `Send + Sync` so adapters can be shared with background tasks
//! - Asynchronous work returns a boxed future that the UI wraps in an Iced `Task`

pub mod storage;
pub mod submission;

pub use storage::{KeyValueStore, StorageError, StorageKey};
pub use submission::{ContactPayload, ContactSubmitter, SubmitError};
