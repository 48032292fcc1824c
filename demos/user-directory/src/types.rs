//! State and actions for the user directory.

use composable_state_mock_api::{ApiError, DeleteConfirmation, NewUser, UserId, UserRecord};

/// What the directory screen currently shows
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DirectoryState {
    /// Last loaded user list, in store order
    pub users: Vec<UserRecord>,
    /// User opened in the detail view
    pub selected: Option<UserRecord>,
    /// Requests sent but not yet answered
    pub in_flight: usize,
    /// Most recent failure, cleared by the next request
    pub last_error: Option<ApiError>,
    /// Confirmation of the most recent delete
    pub last_deleted: Option<DeleteConfirmation>,
}

impl DirectoryState {
    /// Whether any request is outstanding
    #[must_use]
    pub const fn is_loading(&self) -> bool {
        self.in_flight > 0
    }

    /// Loaded user by id
    #[must_use]
    pub fn user(&self, id: UserId) -> Option<&UserRecord> {
        self.users.iter().find(|user| user.id == id)
    }
}

/// Actions for the user directory
///
/// Commands are sent by the caller; the `*ed` results and
/// [`DirectoryAction::RequestFailed`] are produced by effects.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DirectoryAction {
    /// Fetch the full list (served from cache while fresh)
    LoadUsers,
    /// List arrived
    UsersLoaded(Vec<UserRecord>),
    /// Fetch one user for the detail view
    SelectUser(UserId),
    /// Detail arrived
    UserSelected(UserRecord),
    /// Close the detail view
    ClearSelection,
    /// Create a user
    CreateUser(NewUser),
    /// User was created
    UserCreated(UserRecord),
    /// Delete a user
    DeleteUser(UserId),
    /// User was deleted
    UserDeleted(DeleteConfirmation),
    /// A request failed
    RequestFailed(ApiError),
}

impl DirectoryAction {
    /// Whether this action answers a request
    #[must_use]
    pub const fn is_result(&self) -> bool {
        matches!(
            self,
            Self::UsersLoaded(_)
                | Self::UserSelected(_)
                | Self::UserCreated(_)
                | Self::UserDeleted(_)
                | Self::RequestFailed(_)
        )
    }
}
