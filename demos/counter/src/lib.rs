//! # Counter Example
//!
//! A counter with a configurable step, driven through the Store.
//!
//! The counter is a **pure state machine**: every action returns
//! `Effect::None` and state changes are synchronous and deterministic.
//!
//! ## Example
//!
//! ```no_run
//! use composable_state_runtime::Store;
//! use counter::{CounterAction, CounterReducer, CounterState};
//!
//! # async fn example() {
//! let store = Store::new(CounterState::default(), CounterReducer::new(), ());
//!
//! let _ = store.send(CounterAction::SetStep(5)).await;
//! let _ = store.send(CounterAction::Increment).await;
//! let value = store.state(|s| s.value).await;
//! assert_eq!(value, 5);
//! # }
//! ```

use composable_state_core::{SmallVec, effect::Effect, reducer::Reducer, smallvec};

/// Counter state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CounterState {
    /// Current value
    pub value: i64,
    /// Amount added or removed by `Increment`/`Decrement`
    pub step: i64,
}

impl Default for CounterState {
    fn default() -> Self {
        Self { value: 0, step: 1 }
    }
}

/// Counter actions
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CounterAction {
    /// Add `step` to the value
    Increment,
    /// Subtract `step` from the value
    Decrement,
    /// Set the value back to 0; the step is kept
    Reset,
    /// Change the step
    SetStep(i64),
    /// Add an arbitrary amount, ignoring the step
    IncrementByAmount(i64),
}

/// Counter reducer
///
/// Arithmetic saturates at the `i64` bounds.
#[derive(Debug, Clone, Copy, Default)]
pub struct CounterReducer;

impl CounterReducer {
    /// Create a new counter reducer
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl Reducer for CounterReducer {
    type State = CounterState;
    type Action = CounterAction;
    type Environment = ();

    fn reduce(
        &self,
        state: &mut Self::State,
        action: Self::Action,
        _environment: &Self::Environment,
    ) -> SmallVec<[Effect<Self::Action>; 4]> {
        match action {
            CounterAction::Increment => {
                state.value = state.value.saturating_add(state.step);
            },
            CounterAction::Decrement => {
                state.value = state.value.saturating_sub(state.step);
            },
            CounterAction::Reset => {
                state.value = 0;
            },
            CounterAction::SetStep(step) => {
                state.step = step;
            },
            CounterAction::IncrementByAmount(amount) => {
                state.value = state.value.saturating_add(amount);
            },
        }

        smallvec![Effect::None]
    }
}
