//! Retry loop with exponential backoff

use super::classify::classify;
use super::executor::AttemptError;
use crate::config::ClientConfig;
use crate::error::{Result, VoyageError};
use rand::Rng;
use std::future::Future;
use std::time::Duration;
use tracing::{debug, error, warn};

/// How many times a call is attempted and how long to wait in between
#[derive(Debug, Clone)]
pub(crate) struct RetryPolicy {
    max_retries: u32,
    backoff_base: Duration,
    backoff_max: Duration,
    retry_transport_errors: bool,
}

impl RetryPolicy {
    pub fn from_config(config: &ClientConfig) -> Self {
        Self {
            max_retries: config.max_retries,
            backoff_base: Duration::from_millis(config.backoff_base_ms),
            backoff_max: Duration::from_millis(config.backoff_max_ms),
            retry_transport_errors: config.retry_transport_errors,
        }
    }

    /// Attempts per call; an unset (zero) limit still makes one attempt
    pub fn max_attempts(&self) -> u32 {
        self.max_retries.max(1)
    }

    /// Delay after the `failed`-th failed attempt: base * 2^(failed-1),
    /// capped, with +/-25% jitter
    pub fn backoff_delay(&self, failed: u32) -> Duration {
        if self.backoff_base.is_zero() {
            return Duration::ZERO;
        }

        let factor = 2_u32.saturating_pow(failed.saturating_sub(1));
        let delay = self.backoff_base.saturating_mul(factor).min(self.backoff_max);

        let jitter = rand::thread_rng().gen_range(-0.25..=0.25);
        Duration::from_secs_f64(delay.as_secs_f64() * (1.0 + jitter))
    }

    fn should_retry(&self, err: AttemptError) -> (bool, VoyageError) {
        match err {
            AttemptError::Status(api_error) => {
                let classification = classify(&api_error);
                (classification.retryable, classification.error)
            }
            AttemptError::Execution(e)
                if self.retry_transport_errors && (e.is_connect() || e.is_timeout()) =>
            {
                (true, VoyageError::Execution(e))
            }
            other => (false, other.into()),
        }
    }

    /// Drive `attempt` until it succeeds, fails fatally, or runs out of
    /// attempts. The last retryable error is returned in the latter case.
    pub async fn run<T, F, Fut>(&self, mut attempt: F) -> Result<T>
    where
        F: FnMut() -> Fut,
        Fut: Future<Output = std::result::Result<T, AttemptError>>,
    {
        let max_attempts = self.max_attempts();
        let mut attempts = 0;

        loop {
            attempts += 1;

            let err = match attempt().await {
                Ok(response) => {
                    debug!("Request succeeded on attempt {}/{}", attempts, max_attempts);
                    return Ok(response);
                }
                Err(err) => err,
            };

            let (retryable, err) = self.should_retry(err);

            if !retryable {
                error!("Request failed on attempt {}/{}: {}", attempts, max_attempts, err);
                return Err(err);
            }

            if attempts >= max_attempts {
                warn!("Giving up after {} attempts: {}", attempts, err);
                return Err(err);
            }

            warn!("Request failed on attempt {}/{}: {}", attempts, max_attempts, err);

            let delay = self.backoff_delay(attempts);
            if !delay.is_zero() {
                debug!("Retrying after {}ms", delay.as_millis());
                tokio::time::sleep(delay).await;
            }
        }
    }
}
