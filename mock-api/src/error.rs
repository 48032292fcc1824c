//! Error types for the mock user API.

use crate::types::UserId;
use thiserror::Error;

/// Result type alias for mock API operations.
pub type Result<T> = std::result::Result<T, ApiError>;

/// Errors surfaced by the mock user API.
///
/// Lookups and deletes are the only operations that can fail; there is no
/// I/O underneath, so a missing record is the whole taxonomy.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    /// No record with the requested id exists.
    #[error("User not found: {id}")]
    NotFound {
        /// The id that was looked up
        id: UserId,
    },
}

impl ApiError {
    /// Whether repeating the same request could succeed.
    ///
    /// A missing record stays missing, so request layers should not retry it.
    #[must_use]
    pub const fn is_retryable(&self) -> bool {
        match self {
            Self::NotFound { .. } => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_message_names_the_id() {
        let error = ApiError::NotFound { id: 42 };
        assert_eq!(error.to_string(), "User not found: 42");
        assert!(!error.is_retryable());
    }
}
