//! Todo list example: add, toggle, delete and filter todos.
//!
//! Demonstrates an environment carrying both a [`Clock`] and an
//! [`IdGenerator`], and selectors over reducer state.
//!
//! # Quick Start
//!
//! ```no_run
//! use composable_state_core::environment::{MonotonicIds, SystemClock};
//! use composable_state_runtime::Store;
//! use std::sync::Arc;
//! use todo::{Filter, TodoAction, TodoEnvironment, TodoReducer, TodoState};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let env = TodoEnvironment::new(Arc::new(SystemClock), Arc::new(MonotonicIds::default()));
//! let store = Store::new(TodoState::new(), TodoReducer::new(), env);
//!
//! store.send(TodoAction::AddTodo("Buy milk".to_string())).await?;
//! store.send(TodoAction::SetFilter(Filter::Active)).await?;
//!
//! let active = store.state(TodoState::active_count).await;
//! assert_eq!(active, 1);
//! # Ok(())
//! # }
//! ```
//!
//! [`Clock`]: composable_state_core::environment::Clock
//! [`IdGenerator`]: composable_state_core::environment::IdGenerator

pub mod reducer;
pub mod types;

pub use reducer::{TodoEnvironment, TodoReducer};
pub use types::{Filter, Todo, TodoAction, TodoId, TodoState};
