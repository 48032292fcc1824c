//! # Composable State Testing
//!
//! Testing utilities and helpers for reducer-driven client state.
//!
//! This crate provides:
//! - Deterministic implementations of Environment traits
//! - A Given-When-Then harness for reducers
//! - Assertion helpers for effects
//!
//! ## Example
//!
//! ```ignore
//! use composable_state_testing::{test_clock, ReducerTest};
//!
//! ReducerTest::new(TodoReducer::new())
//!     .with_env(TodoEnvironment::new(Arc::new(SequentialIds::new())))
//!     .given_state(TodoState::default())
//!     .when_action(TodoAction::AddTodo("Buy milk".into()))
//!     .then_state(|state| assert_eq!(state.items.len(), 1))
//!     .run();
//! ```

use chrono::{DateTime, Utc};
use composable_state_core::environment::{Clock, IdGenerator};

/// Ergonomic testing utilities for reducers
pub mod reducer_test;

/// Deterministic implementations of Environment traits
pub mod mocks {
    use super::{Clock, DateTime, IdGenerator, Utc};
    use std::sync::atomic::{AtomicI64, Ordering};

    /// Fixed clock for deterministic tests
    ///
    /// Always returns the same time, making tests reproducible.
    ///
    /// # Example
    ///
    /// ```
    /// use composable_state_testing::mocks::FixedClock;
    /// use composable_state_core::environment::Clock;
    /// use chrono::Utc;
    ///
    /// let clock = FixedClock::new(Utc::now());
    /// assert_eq!(clock.now(), clock.now());
    /// ```
    #[derive(Debug, Clone)]
    pub struct FixedClock {
        time: DateTime<Utc>,
    }

    impl FixedClock {
        /// Create a new fixed clock with the given time
        #[must_use]
        pub const fn new(time: DateTime<Utc>) -> Self {
            Self { time }
        }
    }

    impl Clock for FixedClock {
        fn now(&self) -> DateTime<Utc> {
            self.time
        }
    }

    /// Create a default fixed clock for tests (2025-01-01 00:00:00 UTC)
    ///
    /// # Panics
    ///
    /// Panics if the hardcoded timestamp fails to parse, which cannot happen.
    #[must_use]
    #[allow(clippy::expect_used)]
    pub fn test_clock() -> FixedClock {
        FixedClock::new(
            DateTime::parse_from_rfc3339("2025-01-01T00:00:00Z")
                .expect("hardcoded timestamp should always parse")
                .with_timezone(&Utc),
        )
    }

    /// Predictable identifiers: 1, 2, 3, ...
    ///
    /// Unlike the production generator this one can be rewound, which lets
    /// tests provoke id collisions on purpose.
    #[derive(Debug, Default)]
    pub struct SequentialIds {
        last: AtomicI64,
    }

    impl SequentialIds {
        /// Start at 1
        #[must_use]
        pub const fn new() -> Self {
            Self::starting_at(1)
        }

        /// Start at `first`
        #[must_use]
        pub const fn starting_at(first: i64) -> Self {
            Self {
                last: AtomicI64::new(first - 1),
            }
        }

        /// The most recently issued identifier (`first - 1` before any call)
        #[must_use]
        pub fn last_issued(&self) -> i64 {
            self.last.load(Ordering::SeqCst)
        }
    }

    impl IdGenerator for SequentialIds {
        fn next_id(&self) -> i64 {
            self.last.fetch_add(1, Ordering::SeqCst) + 1
        }
    }
}

// Re-export commonly used items
pub use mocks::{FixedClock, SequentialIds, test_clock};
pub use reducer_test::{ReducerTest, assertions};
