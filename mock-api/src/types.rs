//! Record types exchanged with the mock user API.

use serde::{Deserialize, Serialize};

/// Identifier of a user record.
pub type UserId = i64;

/// A single user record.
///
/// Plain data: the store hands out clones, never references.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserRecord {
    /// Unique within the store
    pub id: UserId,
    /// Display name
    pub name: String,
    /// Contact address
    pub email: String,
    /// Job role (free text)
    pub role: String,
}

impl UserRecord {
    /// Build a record from its parts.
    #[must_use]
    pub fn new(
        id: UserId,
        name: impl Into<String>,
        email: impl Into<String>,
        role: impl Into<String>,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            email: email.into(),
            role: role.into(),
        }
    }

    /// Attach an id to a create payload.
    #[must_use]
    pub fn from_new(id: UserId, fields: NewUser) -> Self {
        Self {
            id,
            name: fields.name,
            email: fields.email,
            role: fields.role,
        }
    }

    /// The record's fields without its id.
    #[must_use]
    pub fn fields(&self) -> NewUser {
        NewUser {
            name: self.name.clone(),
            email: self.email.clone(),
            role: self.role.clone(),
        }
    }
}

/// Payload for creating a record. The store assigns the id.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewUser {
    /// Display name
    pub name: String,
    /// Contact address
    pub email: String,
    /// Job role (free text)
    pub role: String,
}

impl NewUser {
    /// Build a create payload.
    #[must_use]
    pub fn new(name: impl Into<String>, email: impl Into<String>, role: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            role: role.into(),
        }
    }
}

/// Acknowledgement returned by a successful delete.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeleteConfirmation {
    /// Always `true`; failures are reported as errors instead
    pub success: bool,
    /// Id of the removed record
    pub deleted_id: UserId,
}

impl DeleteConfirmation {
    /// Confirmation for the removal of `deleted_id`.
    #[must_use]
    pub const fn new(deleted_id: UserId) -> Self {
        Self {
            success: true,
            deleted_id,
        }
    }
}

/// The four records every fresh store starts with, in listing order.
#[must_use]
pub fn seed_users() -> Vec<UserRecord> {
    vec![
        UserRecord::new(1, "Alice Johnson", "alice@example.com", "Developer"),
        UserRecord::new(2, "Bob Smith", "bob@example.com", "Designer"),
        UserRecord::new(3, "Carol White", "carol@example.com", "Manager"),
        UserRecord::new(4, "David Brown", "david@example.com", "Developer"),
    ]
}
