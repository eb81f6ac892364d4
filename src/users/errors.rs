use thiserror::Error;

use super::model::UserIdentifier;

// =============================================================================
// LookupError
// =============================================================================

/// A failed user lookup.
///
/// The single error kind the repository collaborator produces. Workflows
/// propagate it unchanged to their callers; nothing along the way remaps or
/// recovers it.
///
/// # Examples
///
/// ```
/// use fp_katas::users::errors::LookupError;
/// use fp_katas::users::model::UserIdentifier;
///
/// let error = LookupError::user_not_found(UserIdentifier::new(4));
/// assert_eq!(error.message(), "User 4 not found");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LookupError {
    /// No user exists for the requested identifier.
    #[error("User {identifier} not found")]
    UserNotFound {
        /// The identifier that missed.
        identifier: UserIdentifier,
    },
}

impl LookupError {
    /// Creates a `UserNotFound` error for the given identifier.
    #[must_use]
    pub const fn user_not_found(identifier: UserIdentifier) -> Self {
        Self::UserNotFound { identifier }
    }

    /// Returns the rendered failure message.
    #[must_use]
    pub fn message(&self) -> String {
        self.to_string()
    }
}

// =============================================================================
// Tests
// =============================================================================
