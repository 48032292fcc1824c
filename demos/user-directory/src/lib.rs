//! # User Directory Example
//!
//! A directory screen backed by the mock user API. Requests run as effects;
//! list and detail lookups go through [`QueryClient`] caches, and writes
//! invalidate them.
//!
//! ```no_run
//! use composable_state_mock_api::MockUserApi;
//! use composable_state_query::QueryConfig;
//! use composable_state_runtime::Store;
//! use user_directory::{DirectoryAction, DirectoryEnvironment, DirectoryReducer, DirectoryState};
//!
//! # async fn example() -> Result<(), composable_state_runtime::error::StoreError> {
//! let env = DirectoryEnvironment::new(MockUserApi::new(), QueryConfig::default());
//! let store = Store::new(DirectoryState::default(), DirectoryReducer::new(), env);
//!
//! store.send(DirectoryAction::LoadUsers).await?.wait().await;
//! let count = store.state(|s| s.users.len()).await;
//! # Ok(())
//! # }
//! ```
//!
//! [`QueryClient`]: composable_state_query::QueryClient

pub mod config;
pub mod reducer;
pub mod types;

pub use config::Config;
pub use reducer::{DirectoryEnvironment, DirectoryReducer};
pub use types::{DirectoryAction, DirectoryState};
