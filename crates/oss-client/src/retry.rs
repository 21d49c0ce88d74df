//! Linear backoff with jitter for retried transport calls

use crate::config::RetryBackoff;
use rand::Rng;
use std::future::Future;
use std::time::Duration;
use tonic::{Code, Status};
use tracing::warn;

impl RetryBackoff {
    /// Wait before the next attempt: `wait_between` scaled by a random factor
    /// in `[1 - jitter_fraction, 1 + jitter_fraction]`.
    pub fn delay(&self) -> Duration {
        if self.jitter_fraction <= 0.0 {
            return self.wait_between;
        }
        let spread = rand::thread_rng().gen_range(-1.0..=1.0) * self.jitter_fraction;
        self.wait_between.mul_f64((1.0 + spread).max(0.0))
    }
}

/// Retry policy applied to transport calls that are safe to restart
#[derive(Clone, Copy, Debug)]
pub struct RetryPolicy {
    /// Retries after the first attempt
    pub max_retries: u32,
    /// Bound on each attempt
    pub per_attempt_timeout: Duration,
    /// Wait between attempts
    pub backoff: RetryBackoff,
}

impl RetryPolicy {
    /// Whether a failed attempt may be retried
    pub fn is_retryable(status: &Status) -> bool {
        matches!(
            status.code(),
            Code::Unavailable | Code::ResourceExhausted | Code::DeadlineExceeded
        )
    }

    /// Run `attempt` until it succeeds, fails with a non-retryable status, or
    /// the retries run out. Each attempt is bounded by `per_attempt_timeout`.
    pub async fn run<T, F, Fut>(&self, name: &str, mut attempt: F) -> Result<T, Status>
    where
        F: FnMut() -> Fut,
        Fut: Future<Output = Result<T, Status>>,
    {
        let mut tries = 0u32;
        loop {
            let result = match tokio::time::timeout(self.per_attempt_timeout, attempt()).await {
                Ok(result) => result,
                Err(_) => Err(Status::deadline_exceeded(format!(
                    "{} attempt timed out after {:?}",
                    name, self.per_attempt_timeout
                ))),
            };

            match result {
                Ok(value) => return Ok(value),
                Err(status) if tries < self.max_retries && Self::is_retryable(&status) => {
                    tries += 1;
                    let delay = self.backoff.delay();
                    warn!(
                        call = name,
                        attempt = tries,
                        code = ?status.code(),
                        "retrying in {:?}: {}",
                        delay,
                        status.message()
                    );
                    tokio::time::sleep(delay).await;
                }
                Err(status) => return Err(status),
            }
        }
    }
}
