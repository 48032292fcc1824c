//! # Query Client
//!
//! A keyed cache for async reads. Each key holds the last successful result
//! along with the instant it was fetched; a read within `stale_time` is served
//! from the cache, anything older (or explicitly invalidated) is fetched again.
//!
//! Failed fetches are retried according to [`QueryConfig::retry`] using the
//! runtime's exponential backoff, and are never cached.
//!
//! ## Example
//!
//! ```no_run
//! use composable_state_query::{QueryClient, QueryConfig};
//! use composable_state_mock_api::{ApiError, MockUserApi};
//!
//! # async fn example() -> Result<(), ApiError> {
//! let api = MockUserApi::new();
//! let users: QueryClient<&'static str, _> = QueryClient::new(QueryConfig::default());
//!
//! let fetch_all = || async { Ok::<_, ApiError>(api.list_all().await) };
//!
//! // Hits the API
//! let first = users.fetch("users", fetch_all).await?;
//! // Served from cache for the next five seconds
//! let second = users.fetch("users", fetch_all).await?;
//! assert_eq!(first, second);
//! # Ok(())
//! # }
//! ```

mod client;

pub use client::QueryClient;

use composable_state_runtime::retry::RetryPolicy;
use std::time::Duration;

/// Cache and retry behavior shared by every key of a [`QueryClient`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryConfig {
    /// How long a fetched value is served without refetching
    pub stale_time: Duration,
    /// Extra attempts after a failed fetch
    pub retry: usize,
    /// Delay before the first retry; later retries back off exponentially
    pub retry_delay: Duration,
    /// Whether [`QueryClient::window_focused`] invalidates the cache
    pub refetch_on_window_focus: bool,
}

impl Default for QueryConfig {
    fn default() -> Self {
        Self {
            stale_time: Duration::from_secs(5),
            retry: 1,
            retry_delay: Duration::from_secs(1),
            refetch_on_window_focus: false,
        }
    }
}

impl QueryConfig {
    /// Set the stale time
    #[must_use]
    pub const fn with_stale_time(mut self, stale_time: Duration) -> Self {
        self.stale_time = stale_time;
        self
    }

    /// Set the number of retries
    #[must_use]
    pub const fn with_retry(mut self, retry: usize) -> Self {
        self.retry = retry;
        self
    }

    /// Set the initial retry delay
    #[must_use]
    pub const fn with_retry_delay(mut self, retry_delay: Duration) -> Self {
        self.retry_delay = retry_delay;
        self
    }

    /// Enable or disable invalidation on window focus
    #[must_use]
    pub const fn with_refetch_on_window_focus(mut self, enabled: bool) -> Self {
        self.refetch_on_window_focus = enabled;
        self
    }

    /// Backoff policy derived from `retry` and `retry_delay`.
    #[must_use]
    pub fn retry_policy(&self) -> RetryPolicy {
        RetryPolicy::builder()
            .max_retries(self.retry)
            .initial_delay(self.retry_delay)
            .build()
    }
}
