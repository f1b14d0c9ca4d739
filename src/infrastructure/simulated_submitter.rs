// SPDX-License-Identifier: MPL-2.0
//! Contact submitter that only waits.
//!
//! There is no backend behind the page yet. This adapter keeps the
//! submission flow honest (busy state, completion toast) by resolving
//! successfully after a fixed delay.

use crate::application::port::{ContactPayload, ContactSubmitter, SubmitError};
use futures_util::future::BoxFuture;
use futures_util::FutureExt;
use std::time::Duration;

/// Resolves every submission with `Ok(())` after `delay`.
#[derive(Debug, Clone, Copy)]
pub struct SimulatedSubmitter {
    delay: Duration,
}

impl SimulatedSubmitter {
    pub const DEFAULT_DELAY: Duration = Duration::from_millis(2000);

    #[must_use]
    pub fn new(delay: Duration) -> Self {
        Self { delay }
    }

    #[must_use]
    pub fn delay(&self) -> Duration {
        self.delay
    }
}

impl Default for SimulatedSubmitter {
    fn default() -> Self {
        Self::new(Self::DEFAULT_DELAY)
    }
}

impl ContactSubmitter for SimulatedSubmitter {
    fn submit(&self, _payload: ContactPayload) -> BoxFuture<'static, Result<(), SubmitError>> {
        let delay = self.delay;
        async move {
            tokio::time::sleep(delay).await;
            Ok(())
        }
        .boxed()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::time::Instant;

    fn payload() -> ContactPayload {
        ContactPayload {
            name: "Maria Silva".into(),
            email: "maria@example.com".into(),
            phone: "(11) 99999-8888".into(),
            subject: "familia".into(),
            message: "Gostaria de agendar uma consulta".into(),
            consent: true,
        }
    }

    #[tokio::test(start_paused = true)]
    async fn resolves_after_the_configured_delay() {
        let submitter = SimulatedSubmitter::default();
        let started = Instant::now();

        let result = submitter.submit(payload()).await;

        assert_eq!(result, Ok(()));
        assert_eq!(started.elapsed(), Duration::from_millis(2000));
    }

    #[tokio::test(start_paused = true)]
    async fn custom_delay_is_respected() {
        let submitter = SimulatedSubmitter::new(Duration::from_millis(150));
        let started = Instant::now();

        submitter.submit(payload()).await.unwrap();

        assert_eq!(started.elapsed(), Duration::from_millis(150));
    }
}
