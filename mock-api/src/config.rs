//! Latency configuration for the mock user API.

use std::time::Duration;

/// Upper bound for [`MockApiConfig::scaled`], keeps a typo from stalling a demo for hours.
const MAX_LATENCY_SCALE: f64 = 100.0;

/// Simulated network delay per operation.
///
/// Defaults match a sluggish backend: one second for list/create, 800ms for
/// single-record reads and deletes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MockApiConfig {
    /// Delay before `list_all` returns
    pub list_latency: Duration,
    /// Delay before `get_by_id` returns
    pub get_latency: Duration,
    /// Delay before `create` applies
    pub create_latency: Duration,
    /// Delay before `delete` applies
    pub delete_latency: Duration,
}

impl Default for MockApiConfig {
    fn default() -> Self {
        Self {
            list_latency: Duration::from_millis(1000),
            get_latency: Duration::from_millis(800),
            create_latency: Duration::from_millis(1000),
            delete_latency: Duration::from_millis(800),
        }
    }
}

impl MockApiConfig {
    /// No simulated latency at all.
    #[must_use]
    pub const fn instant() -> Self {
        Self {
            list_latency: Duration::ZERO,
            get_latency: Duration::ZERO,
            create_latency: Duration::ZERO,
            delete_latency: Duration::ZERO,
        }
    }

    /// Multiply every latency by `factor`.
    ///
    /// Non-finite or non-positive factors yield [`MockApiConfig::instant`];
    /// factors above 100 are clamped.
    #[must_use]
    pub fn scaled(self, factor: f64) -> Self {
        if !factor.is_finite() || factor <= 0.0 {
            return Self::instant();
        }
        let factor = factor.min(MAX_LATENCY_SCALE);

        Self {
            list_latency: self.list_latency.mul_f64(factor),
            get_latency: self.get_latency.mul_f64(factor),
            create_latency: self.create_latency.mul_f64(factor),
            delete_latency: self.delete_latency.mul_f64(factor),
        }
    }

    /// Set the `list_all` delay
    #[must_use]
    pub const fn with_list_latency(mut self, latency: Duration) -> Self {
        self.list_latency = latency;
        self
    }

    /// Set the `get_by_id` delay
    #[must_use]
    pub const fn with_get_latency(mut self, latency: Duration) -> Self {
        self.get_latency = latency;
        self
    }

    /// Set the `create` delay
    #[must_use]
    pub const fn with_create_latency(mut self, latency: Duration) -> Self {
        self.create_latency = latency;
        self
    }

    /// Set the `delete` delay
    #[must_use]
    pub const fn with_delete_latency(mut self, latency: Duration) -> Self {
        self.delete_latency = latency;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_remote_latencies() {
        let config = MockApiConfig::default();
        assert_eq!(config.list_latency, Duration::from_millis(1000));
        assert_eq!(config.get_latency, Duration::from_millis(800));
        assert_eq!(config.create_latency, Duration::from_millis(1000));
        assert_eq!(config.delete_latency, Duration::from_millis(800));
    }

    #[test]
    fn scaled_halves_latency() {
        let config = MockApiConfig::default().scaled(0.5);
        assert_eq!(config.list_latency, Duration::from_millis(500));
        assert_eq!(config.get_latency, Duration::from_millis(400));
    }

    #[test]
    fn scaled_by_nonsense_is_instant() {
        assert_eq!(MockApiConfig::default().scaled(-1.0), MockApiConfig::instant());
        assert_eq!(MockApiConfig::default().scaled(f64::NAN), MockApiConfig::instant());
    }

    #[test]
    fn scaled_is_clamped() {
        let config = MockApiConfig::default().scaled(1e9);
        assert_eq!(config.list_latency, Duration::from_secs(100));
    }
}
