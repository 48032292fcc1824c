//! # Mock User API
//!
//! An in-process collection of user records that behaves like a slow remote
//! service: every call waits out a simulated network delay before touching
//! the data.
//!
//! The store is an explicitly owned value. Clone the [`MockUserApi`] handle to
//! share it between tasks; all clones see the same records.
//!
//! ## Operations
//!
//! | operation | latency | failure |
//! |---|---|---|
//! | [`MockUserApi::list_all`] | ~1000ms | never |
//! | [`MockUserApi::get_by_id`] | ~800ms | [`ApiError::NotFound`] |
//! | [`MockUserApi::create`] | ~1000ms | never |
//! | [`MockUserApi::delete`] | ~800ms | [`ApiError::NotFound`] |
//!
//! Every returned record is a snapshot: mutating it never changes the store.
//!
//! ## Example
//!
//! ```no_run
//! use composable_state_mock_api::{MockUserApi, NewUser};
//!
//! # async fn example() -> Result<(), composable_state_mock_api::ApiError> {
//! let api = MockUserApi::new();
//!
//! let eve = api
//!     .create(NewUser::new("Eve", "eve@example.com", "QA"))
//!     .await;
//! assert_eq!(api.list_all().await.len(), 5);
//!
//! let confirmation = api.delete(eve.id).await?;
//! assert_eq!(confirmation.deleted_id, eve.id);
//! # Ok(())
//! # }
//! ```

pub mod api;
pub mod config;
pub mod error;
pub mod types;

pub use api::MockUserApi;
pub use config::MockApiConfig;
pub use error::{ApiError, Result};
pub use types::{DeleteConfirmation, NewUser, UserId, UserRecord, seed_users};
