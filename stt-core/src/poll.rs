//! Status polling
//!
//! Waits for a remote resource to leave its processing state. After a corpus
//! is uploaded (or a model is trained) the service works on it in the
//! background; callers block on [`StatusPoller::wait_until`] until the
//! resource reports a terminal status.
//!
//! The first fetch happens immediately. Between fetches the poller sleeps for
//! a fixed interval. Polling stops on the first terminal status, the first
//! transport error, a status outside the known set, the optional maximum
//! wait, or cancellation.

use async_trait::async_trait;
use std::fmt;
use std::time::Duration;
use thiserror::Error;
use tokio::time::{self, Instant};
use tokio_util::sync::CancellationToken;
use tracing::{debug, info, warn};

/// Default delay between two status fetches
pub const DEFAULT_POLL_INTERVAL: Duration = Duration::from_secs(10);

/// A status value that can be polled
pub trait PollStatus: Clone + fmt::Display + Send + Sync {
    /// Whether the value belongs to the documented status set
    fn is_recognized(&self) -> bool;
}

/// Something that can report the current status of a remote resource
#[async_trait]
pub trait StatusSource: Send + Sync {
    type Status: PollStatus;
    type Error: std::error::Error + Send + Sync + 'static;

    /// Fetch the current status of the resource identified by `key`
    async fn fetch_status(&self, key: &str) -> Result<Self::Status, Self::Error>;
}

/// Outcome of a single [`StatusPoller::wait_until`] call
pub type PollResult<T, E> = std::result::Result<T, PollError<E>>;

/// Reasons a poll can end without reaching a terminal status
#[derive(Debug, Error)]
pub enum PollError<E> {
    /// The status could not be fetched
    #[error("failed to fetch status of '{key}' (attempt {attempt}): {source}")]
    Transport {
        key: String,
        attempt: u32,
        #[source]
        source: E,
    },

    /// The service reported a status outside the known set
    #[error("'{key}' reported unexpected status '{status}'")]
    UnexpectedStatus { key: String, status: String },

    /// The maximum wait elapsed before a terminal status was seen
    #[error("gave up waiting for '{key}' after {elapsed:?} (last status: {last_status})")]
    TimedOut {
        key: String,
        elapsed: Duration,
        last_status: String,
    },

    /// Polling was interrupted by the cancellation token
    #[error("polling of '{key}' was cancelled")]
    Cancelled { key: String },
}

/// Poller timing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PollConfig {
    /// Delay between two fetches
    pub interval: Duration,
    /// Upper bound on the total wait; `None` waits until cancelled
    pub max_wait: Option<Duration>,
}

impl PollConfig {
    pub fn new(interval: Duration) -> Self {
        Self {
            interval,
            max_wait: None,
        }
    }

    pub fn with_max_wait(mut self, max_wait: Duration) -> Self {
        self.max_wait = Some(max_wait);
        self
    }
}

impl Default for PollConfig {
    fn default() -> Self {
        Self::new(DEFAULT_POLL_INTERVAL)
    }
}

/// Blocks the calling flow until a resource reaches a terminal status
pub struct StatusPoller<S> {
    source: S,
    config: PollConfig,
    cancel: CancellationToken,
}

impl<S: StatusSource> StatusPoller<S> {
    pub fn new(source: S, config: PollConfig) -> Self {
        Self {
            source,
            config,
            cancel: CancellationToken::new(),
        }
    }

    /// Use an external token so the wait can be interrupted (e.g. on Ctrl-C)
    pub fn with_cancellation(mut self, cancel: CancellationToken) -> Self {
        self.cancel = cancel;
        self
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    /// Poll `key` until `is_terminal` accepts its status
    ///
    /// Every call starts from scratch: nothing from a previous call is cached.
    pub async fn wait_until<F>(&self, key: &str, is_terminal: F) -> PollResult<S::Status, S::Error>
    where
        F: Fn(&S::Status) -> bool,
    {
        let started = Instant::now();
        let mut attempt: u32 = 0;

        loop {
            if self.cancel.is_cancelled() {
                return Err(PollError::Cancelled {
                    key: key.to_string(),
                });
            }

            attempt += 1;
            let fetched = tokio::select! {
                biased;
                _ = self.cancel.cancelled() => {
                    return Err(PollError::Cancelled { key: key.to_string() });
                }
                fetched = self.source.fetch_status(key) => fetched,
            };

            let status = match fetched {
                Ok(status) => status,
                Err(source) => {
                    warn!(key, attempt, error = %source, "status fetch failed");
                    return Err(PollError::Transport {
                        key: key.to_string(),
                        attempt,
                        source,
                    });
                }
            };

            let elapsed = started.elapsed();
            info!(
                key,
                status = %status,
                attempt,
                elapsed_secs = elapsed.as_secs(),
                "status: {} ({}s)",
                status,
                elapsed.as_secs()
            );

            if !status.is_recognized() {
                return Err(PollError::UnexpectedStatus {
                    key: key.to_string(),
                    status: status.to_string(),
                });
            }

            if is_terminal(&status) {
                debug!(key, attempt, "reached terminal status");
                return Ok(status);
            }

            let delay = match self.config.max_wait {
                Some(max_wait) if elapsed >= max_wait => {
                    return Err(PollError::TimedOut {
                        key: key.to_string(),
                        elapsed,
                        last_status: status.to_string(),
                    });
                }
                Some(max_wait) => self.config.interval.min(max_wait - elapsed),
                None => self.config.interval,
            };

            tokio::select! {
                biased;
                _ = self.cancel.cancelled() => {
                    return Err(PollError::Cancelled { key: key.to_string() });
                }
                _ = time::sleep(delay) => {}
            }
        }
    }
}
