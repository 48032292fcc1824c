//! Reducer logic for the user directory.
//!
//! Commands bump [`DirectoryState::in_flight`] and return one future effect
//! that talks to the API. The effect answers with a result action, which the
//! reducer folds back into state.

use crate::types::{DirectoryAction, DirectoryState};
use composable_state_core::{SmallVec, effect::Effect, reducer::Reducer, smallvec};
use composable_state_mock_api::{ApiError, MockUserApi, UserId, UserRecord};
use composable_state_query::{QueryClient, QueryConfig};

/// Environment dependencies for the directory reducer
#[derive(Clone, Debug)]
pub struct DirectoryEnvironment {
    /// Backing user API
    pub api: MockUserApi,
    /// Cache for the full list (single key)
    pub users_query: QueryClient<(), Vec<UserRecord>>,
    /// Cache for single-user lookups
    pub user_query: QueryClient<UserId, UserRecord>,
}

impl DirectoryEnvironment {
    /// Creates a new `DirectoryEnvironment` with both caches on `query_config`
    #[must_use]
    pub fn new(api: MockUserApi, query_config: QueryConfig) -> Self {
        Self {
            api,
            users_query: QueryClient::new(query_config.clone()),
            user_query: QueryClient::new(query_config),
        }
    }
}

/// Reducer for the user directory
#[derive(Clone, Copy, Debug, Default)]
pub struct DirectoryReducer;

impl DirectoryReducer {
    /// Creates a new `DirectoryReducer`
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    fn start_request(state: &mut DirectoryState) {
        state.in_flight += 1;
        state.last_error = None;
    }

    const fn finish_request(state: &mut DirectoryState) {
        state.in_flight = state.in_flight.saturating_sub(1);
    }
}

fn respond<T>(
    result: Result<T, ApiError>,
    on_success: impl FnOnce(T) -> DirectoryAction,
) -> Option<DirectoryAction> {
    Some(match result {
        Ok(value) => on_success(value),
        Err(error) => DirectoryAction::RequestFailed(error),
    })
}

impl Reducer for DirectoryReducer {
    type State = DirectoryState;
    type Action = DirectoryAction;
    type Environment = DirectoryEnvironment;

    #[allow(clippy::too_many_lines)]
    fn reduce(
        &self,
        state: &mut Self::State,
        action: Self::Action,
        env: &Self::Environment,
    ) -> SmallVec<[Effect<Self::Action>; 4]> {
        match action {
            DirectoryAction::LoadUsers => {
                Self::start_request(state);
                tracing::debug!("Loading users");

                let api = env.api.clone();
                let query = env.users_query.clone();
                smallvec![Effect::future(async move {
                    let result = query
                        .fetch((), || {
                            let api = api.clone();
                            async move { Ok::<_, ApiError>(api.list_all().await) }
                        })
                        .await;
                    respond(result, DirectoryAction::UsersLoaded)
                })]
            },

            DirectoryAction::SelectUser(id) => {
                Self::start_request(state);
                tracing::debug!(id, "Selecting user");

                let api = env.api.clone();
                let query = env.user_query.clone();
                smallvec![Effect::future(async move {
                    let result = query
                        .fetch_if(
                            id,
                            || {
                                let api = api.clone();
                                async move { api.get_by_id(id).await }
                            },
                            ApiError::is_retryable,
                        )
                        .await;
                    respond(result, DirectoryAction::UserSelected)
                })]
            },

            DirectoryAction::ClearSelection => {
                state.selected = None;
                SmallVec::new()
            },

            DirectoryAction::CreateUser(fields) => {
                Self::start_request(state);
                tracing::debug!(name = %fields.name, "Creating user");

                let api = env.api.clone();
                let users_query = env.users_query.clone();
                let user_query = env.user_query.clone();
                smallvec![Effect::future(async move {
                    let record = api.create(fields).await;
                    users_query.invalidate(&()).await;
                    user_query.set_query_data(record.id, record.clone()).await;
                    Some(DirectoryAction::UserCreated(record))
                })]
            },

            DirectoryAction::DeleteUser(id) => {
                Self::start_request(state);
                tracing::debug!(id, "Deleting user");

                let api = env.api.clone();
                let users_query = env.users_query.clone();
                let user_query = env.user_query.clone();
                smallvec![Effect::future(async move {
                    let result = api.delete(id).await;
                    if result.is_ok() {
                        users_query.invalidate(&()).await;
                        user_query.remove_query(&id).await;
                    }
                    respond(result, DirectoryAction::UserDeleted)
                })]
            },

            DirectoryAction::UsersLoaded(users) => {
                Self::finish_request(state);
                tracing::info!(count = users.len(), "Users loaded");
                state.users = users;
                SmallVec::new()
            },

            DirectoryAction::UserSelected(user) => {
                Self::finish_request(state);
                state.selected = Some(user);
                SmallVec::new()
            },

            DirectoryAction::UserCreated(record) => {
                Self::finish_request(state);
                tracing::info!(id = record.id, name = %record.name, "User created");
                if state.user(record.id).is_none() {
                    state.users.push(record);
                }
                SmallVec::new()
            },

            DirectoryAction::UserDeleted(confirmation) => {
                Self::finish_request(state);
                let id = confirmation.deleted_id;
                tracing::info!(id, "User deleted");
                state.users.retain(|user| user.id != id);
                if state.selected.as_ref().is_some_and(|user| user.id == id) {
                    state.selected = None;
                }
                state.last_deleted = Some(confirmation);
                SmallVec::new()
            },

            DirectoryAction::RequestFailed(error) => {
                Self::finish_request(state);
                tracing::warn!(%error, "Request failed");
                state.last_error = Some(error);
                SmallVec::new()
            },
        }
    }
}
