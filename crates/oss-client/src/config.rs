//! Client configuration

use crate::{ClientError, Result};
use std::path::PathBuf;
use std::time::Duration;

/// Pause between retry attempts: a fixed wait, spread by a random jitter.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RetryBackoff {
    /// Base wait between attempts
    pub wait_between: Duration,
    /// Fraction of `wait_between` the actual wait may deviate by, in `[0, 1]`
    pub jitter_fraction: f64,
}

impl Default for RetryBackoff {
    fn default() -> Self {
        Self {
            wait_between: Duration::from_secs(1),
            jitter_fraction: 0.2,
        }
    }
}

/// Client configuration
///
/// Fixed once the client is connected. Build it with [`ClientConfig::new`]
/// and the `with_*` methods.
#[derive(Clone, Debug)]
pub struct ClientConfig {
    /// File server endpoint (`host:port` or a full URI)
    pub endpoint: String,
    /// Bound on a single attempt (connect, or opening a download stream)
    pub retry_timeout: Duration,
    /// Deadline for a unary call; streaming calls run until they finish
    pub timeout: Duration,
    /// Wait between retried attempts
    pub retry_backoff: RetryBackoff,
    /// Retries after the first attempt of a download stream
    pub max_retries: u32,
    /// Largest message the client will send or accept (bytes)
    pub max_message_size: usize,
    /// Directory downloads are written under; the working directory if unset
    pub download_root: Option<PathBuf>,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            endpoint: "http://localhost:50051".to_string(),
            retry_timeout: Duration::from_secs(2),
            timeout: Duration::from_secs(60),
            retry_backoff: RetryBackoff::default(),
            max_retries: 3,
            max_message_size: i32::MAX as usize,
            download_root: None,
        }
    }
}

impl ClientConfig {
    /// Create a new config with the given endpoint
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
            ..Default::default()
        }
    }

    /// Set the per-attempt timeout
    pub fn with_retry_timeout(mut self, timeout: Duration) -> Self {
        self.retry_timeout = timeout;
        self
    }

    /// Set the unary call deadline
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Set the retry backoff
    pub fn with_backoff(mut self, wait_between: Duration, jitter_fraction: f64) -> Self {
        self.retry_backoff = RetryBackoff {
            wait_between,
            jitter_fraction,
        };
        self
    }

    /// Set the number of retries
    pub fn with_max_retries(mut self, max_retries: u32) -> Self {
        self.max_retries = max_retries;
        self
    }

    /// Write downloads under `root` instead of the working directory
    pub fn with_download_root(mut self, root: impl Into<PathBuf>) -> Self {
        self.download_root = Some(root.into());
        self
    }

    /// Endpoint as a URI; `http://` is assumed when no scheme is given.
    pub fn endpoint_uri(&self) -> String {
        if self.endpoint.contains("://") {
            self.endpoint.clone()
        } else {
            format!("http://{}", self.endpoint)
        }
    }

    /// Root directory for downloaded files
    pub fn download_root(&self) -> Result<PathBuf> {
        match &self.download_root {
            Some(root) => Ok(root.clone()),
            None => Ok(std::env::current_dir()?),
        }
    }

    /// Check the configuration before connecting
    pub fn validate(&self) -> Result<()> {
        if self.endpoint.trim().is_empty() {
            return Err(ClientError::Config("endpoint must not be empty".to_string()));
        }
        if self.retry_timeout.is_zero() || self.timeout.is_zero() {
            return Err(ClientError::Config("timeouts must be non-zero".to_string()));
        }
        let jitter = self.retry_backoff.jitter_fraction;
        if !(0.0..=1.0).contains(&jitter) {
            return Err(ClientError::Config(format!(
                "jitter fraction must be between 0 and 1, got {}",
                jitter
            )));
        }
        if self.max_message_size == 0 {
            return Err(ClientError::Config("max message size must be non-zero".to_string()));
        }
        Ok(())
    }
}
