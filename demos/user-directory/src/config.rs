//! Configuration for the user directory binary.
//!
//! Loads configuration from environment variables with sensible defaults.

use composable_state_mock_api::MockApiConfig;
use composable_state_query::QueryConfig;
use serde::{Deserialize, Serialize};
use std::env;
use std::time::Duration;

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Default tracing filter when `RUST_LOG` is unset
    pub log_level: String,
    /// Multiplier applied to every simulated API latency
    pub latency_scale: f64,
    /// Seconds a fetched query stays fresh
    pub stale_time_secs: u64,
    /// Extra attempts after a failed query
    pub query_retry: usize,
    /// Whether focus events invalidate cached queries
    pub refetch_on_window_focus: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            latency_scale: 1.0,
            stale_time_secs: 5,
            query_retry: 1,
            refetch_on_window_focus: false,
        }
    }
}

impl Config {
    /// Load configuration from the process environment.
    ///
    /// | variable | default |
    /// |---|---|
    /// | `DIRECTORY_LOG_LEVEL` | `info` |
    /// | `DIRECTORY_LATENCY_SCALE` | `1.0` |
    /// | `DIRECTORY_STALE_TIME_SECS` | `5` |
    /// | `DIRECTORY_QUERY_RETRY` | `1` |
    /// | `DIRECTORY_REFETCH_ON_FOCUS` | `false` |
    ///
    /// Unparseable values fall back to the default.
    #[must_use]
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load configuration through an arbitrary key lookup.
    #[must_use]
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();

        Self {
            log_level: lookup("DIRECTORY_LOG_LEVEL").unwrap_or(defaults.log_level),
            latency_scale: lookup("DIRECTORY_LATENCY_SCALE")
                .and_then(|s| s.parse().ok())
                .filter(|scale: &f64| scale.is_finite() && *scale >= 0.0)
                .unwrap_or(defaults.latency_scale),
            stale_time_secs: lookup("DIRECTORY_STALE_TIME_SECS")
                .and_then(|s| s.parse().ok())
                .unwrap_or(defaults.stale_time_secs),
            query_retry: lookup("DIRECTORY_QUERY_RETRY")
                .and_then(|s| s.parse().ok())
                .unwrap_or(defaults.query_retry),
            refetch_on_window_focus: lookup("DIRECTORY_REFETCH_ON_FOCUS")
                .and_then(|s| s.parse().ok())
                .unwrap_or(defaults.refetch_on_window_focus),
        }
    }

    /// Mock API latencies after scaling.
    #[must_use]
    pub fn api_config(&self) -> MockApiConfig {
        MockApiConfig::default().scaled(self.latency_scale)
    }

    /// Query cache settings.
    #[must_use]
    pub fn query_config(&self) -> QueryConfig {
        QueryConfig::default()
            .with_stale_time(Duration::from_secs(self.stale_time_secs))
            .with_retry(self.query_retry)
            .with_refetch_on_window_focus(self.refetch_on_window_focus)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect();
        move |key| vars.get(key).cloned()
    }

    #[test]
    fn empty_environment_gives_defaults() {
        assert_eq!(Config::from_lookup(lookup(&[])), Config::default());
    }

    #[test]
    fn values_are_read() {
        let config = Config::from_lookup(lookup(&[
            ("DIRECTORY_LOG_LEVEL", "debug"),
            ("DIRECTORY_LATENCY_SCALE", "0.5"),
            ("DIRECTORY_STALE_TIME_SECS", "30"),
            ("DIRECTORY_QUERY_RETRY", "3"),
            ("DIRECTORY_REFETCH_ON_FOCUS", "true"),
        ]));

        assert_eq!(config.log_level, "debug");
        assert_eq!(config.api_config().list_latency, Duration::from_millis(500));
        assert_eq!(config.query_config().stale_time, Duration::from_secs(30));
        assert_eq!(config.query_config().retry, 3);
        assert!(config.query_config().refetch_on_window_focus);
    }

    #[test]
    fn bad_values_fall_back() {
        let config = Config::from_lookup(lookup(&[
            ("DIRECTORY_LATENCY_SCALE", "-2"),
            ("DIRECTORY_QUERY_RETRY", "many"),
        ]));

        assert!((config.latency_scale - 1.0).abs() < f64::EPSILON);
        assert_eq!(config.query_retry, 1);
    }

    #[test]
    fn zero_scale_means_no_latency() {
        let config = Config::from_lookup(lookup(&[("DIRECTORY_LATENCY_SCALE", "0")]));
        assert_eq!(config.api_config(), MockApiConfig::instant());
    }
}
