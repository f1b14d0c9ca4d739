// SPDX-License-Identifier: MPL-2.0
//! Infrastructure layer adapters.
//!
//! Concrete implementations of the traits in `application::port`.
//!
//! - [`simulated_submitter`]: Stand-in for the contact endpoint (implements [`ContactSubmitter`])
//! - [`storage`]: In-memory and CBOR-file local storage (implement [`KeyValueStore`])
//!
//! [`ContactSubmitter`]: crate::application::port::ContactSubmitter
//! [`KeyValueStore`]: crate::application::port::KeyValueStore

pub mod simulated_submitter;
pub mod storage;

pub use simulated_submitter::SimulatedSubmitter;
pub use storage::{MemoryStore, PersistedStore};
