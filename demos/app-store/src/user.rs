//! Session slice: who is logged in.

use crate::AppEnvironment;
use chrono::{DateTime, Utc};
use composable_state_core::{SmallVec, effect::Effect, reducer::Reducer};
use serde::{Deserialize, Serialize};

/// Role given to users who log in without one
pub const DEFAULT_ROLE: &str = "user";

/// The logged-in user
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Login name
    pub username: String,
    /// Access role
    pub role: String,
    /// Contact address, if provided
    pub email: Option<String>,
    /// Name shown in the UI, if provided
    pub display_name: Option<String>,
    /// When the session started
    pub logged_in_at: DateTime<Utc>,
}

/// Partial profile change; `None` fields are left untouched
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProfileUpdate {
    /// New login name
    pub username: Option<String>,
    /// New role
    pub role: Option<String>,
    /// New contact address
    pub email: Option<String>,
    /// New display name
    pub display_name: Option<String>,
}

/// Session state
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct UserState {
    /// Current user, if logged in
    pub user: Option<User>,
    /// Whether a user is logged in
    pub is_authenticated: bool,
}

/// Session actions
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum UserAction {
    /// Start a session
    Login {
        /// Login name
        username: String,
        /// Role, [`DEFAULT_ROLE`] when absent
        role: Option<String>,
    },
    /// End the session
    Logout,
    /// Merge profile fields into the current user; ignored when logged out
    UpdateProfile(ProfileUpdate),
}

/// Reducer for the session slice
#[derive(Clone, Copy, Debug, Default)]
pub struct UserReducer;

impl Reducer for UserReducer {
    type State = UserState;
    type Action = UserAction;
    type Environment = AppEnvironment;

    fn reduce(
        &self,
        state: &mut Self::State,
        action: Self::Action,
        env: &Self::Environment,
    ) -> SmallVec<[Effect<Self::Action>; 4]> {
        match action {
            UserAction::Login { username, role } => {
                let role = role.unwrap_or_else(|| DEFAULT_ROLE.to_string());
                tracing::info!(%username, %role, "User logged in");
                state.user = Some(User {
                    username,
                    role,
                    email: None,
                    display_name: None,
                    logged_in_at: env.clock.now(),
                });
                state.is_authenticated = true;
            },
            UserAction::Logout => {
                state.user = None;
                state.is_authenticated = false;
            },
            UserAction::UpdateProfile(update) => {
                let Some(user) = state.user.as_mut() else {
                    tracing::debug!("Profile update ignored: not logged in");
                    return SmallVec::new();
                };
                if let Some(username) = update.username {
                    user.username = username;
                }
                if let Some(role) = update.role {
                    user.role = role;
                }
                if update.email.is_some() {
                    user.email = update.email;
                }
                if update.display_name.is_some() {
                    user.display_name = update.display_name;
                }
            },
        }

        SmallVec::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use composable_state_core::environment::Clock;
    use composable_state_testing::{ReducerTest, test_clock};
    use std::sync::Arc;

    fn env() -> AppEnvironment {
        AppEnvironment::new(Arc::new(test_clock()))
    }

    fn login(username: &str) -> UserAction {
        UserAction::Login {
            username: username.to_string(),
            role: None,
        }
    }

    #[test]
    fn login_defaults_role() {
        ReducerTest::new(UserReducer)
            .with_env(env())
            .given_state(UserState::default())
            .when_action(login("alice"))
            .then_state(|state| {
                assert!(state.is_authenticated);
                let user = state.user.as_ref().map(|u| (u.username.as_str(), u.role.as_str()));
                assert_eq!(user, Some(("alice", DEFAULT_ROLE)));
            })
            .run();
    }

    #[test]
    fn login_records_time_from_clock() {
        ReducerTest::new(UserReducer)
            .with_env(env())
            .given_state(UserState::default())
            .when_action(UserAction::Login {
                username: "root".into(),
                role: Some("admin".into()),
            })
            .then_state(|state| {
                let user = state.user.as_ref().map(|u| (u.role.clone(), u.logged_in_at));
                assert_eq!(user, Some(("admin".to_string(), test_clock().now())));
            })
            .run();
    }

    #[test]
    fn logout_clears_session() {
        ReducerTest::new(UserReducer)
            .with_env(env())
            .given_state(UserState::default())
            .when_action(login("alice"))
            .when_action(UserAction::Logout)
            .then_state(|state| assert_eq!(*state, UserState::default()))
            .run();
    }

    #[test]
    fn update_profile_merges_fields() {
        ReducerTest::new(UserReducer)
            .with_env(env())
            .given_state(UserState::default())
            .when_action(login("alice"))
            .when_action(UserAction::UpdateProfile(ProfileUpdate {
                email: Some("alice@example.com".into()),
                ..ProfileUpdate::default()
            }))
            .then_state(|state| {
                let user = state.user.clone().map(|u| (u.username, u.email));
                assert_eq!(
                    user,
                    Some(("alice".to_string(), Some("alice@example.com".to_string())))
                );
            })
            .run();
    }

    #[test]
    fn update_profile_when_logged_out_is_ignored() {
        ReducerTest::new(UserReducer)
            .with_env(env())
            .given_state(UserState::default())
            .when_action(UserAction::UpdateProfile(ProfileUpdate {
                username: Some("ghost".into()),
                ..ProfileUpdate::default()
            }))
            .then_state(|state| assert_eq!(*state, UserState::default()))
            .run();
    }
}
