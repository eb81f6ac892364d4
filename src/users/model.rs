use std::fmt;

use serde::{Deserialize, Serialize};

// =============================================================================
// UserIdentifier
// =============================================================================

/// Identifier of a user record.
///
/// # Examples
///
/// ```
/// use fp_katas::users::model::UserIdentifier;
///
/// let identifier = UserIdentifier::new(7);
/// assert_eq!(identifier.value(), 7);
/// assert_eq!(identifier.to_string(), "7");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct UserIdentifier(u32);

impl UserIdentifier {
    /// Creates a new identifier.
    #[must_use]
    pub const fn new(value: u32) -> Self {
        Self(value)
    }

    /// Returns the raw identifier value.
    #[must_use]
    pub const fn value(self) -> u32 {
        self.0
    }
}

impl fmt::Display for UserIdentifier {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "{}", self.0)
    }
}

// =============================================================================
// Year
// =============================================================================

/// A calendar year, as reported by a [`crate::users::ports::Clock`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Year(i32);

impl Year {
    /// Creates a new year.
    #[must_use]
    pub const fn new(value: i32) -> Self {
        Self(value)
    }

    /// Returns the raw year value.
    #[must_use]
    pub const fn value(self) -> i32 {
        self.0
    }
}

impl fmt::Display for Year {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "{}", self.0)
    }
}

// =============================================================================
// User
// =============================================================================

/// An immutable user record.
///
/// Users exist only as lookup return values: constructed by a repository,
/// consumed within a single workflow call. Every user references a best
/// friend by identifier; the reference is resolved lazily by the workflows
/// that need it.
///
/// # Examples
///
/// ```
/// use fp_katas::users::model::{User, UserIdentifier};
///
/// let user = User::new(UserIdentifier::new(1), "idonea", UserIdentifier::new(2));
/// assert_eq!(user.name(), "idonea");
/// assert_eq!(user.best_friend(), UserIdentifier::new(2));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    identifier: UserIdentifier,
    name: String,
    best_friend: UserIdentifier,
}

impl User {
    /// Creates a new user record.
    #[must_use]
    pub fn new(
        identifier: UserIdentifier,
        name: impl Into<String>,
        best_friend: UserIdentifier,
    ) -> Self {
        Self {
            identifier,
            name: name.into(),
            best_friend,
        }
    }

    /// Returns the user's identifier.
    #[must_use]
    pub const fn identifier(&self) -> UserIdentifier {
        self.identifier
    }

    /// Returns the user's display name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the identifier of the user's best friend.
    #[must_use]
    pub const fn best_friend(&self) -> UserIdentifier {
        self.best_friend
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn identifier_display_is_raw_value() {
        assert_eq!(UserIdentifier::new(42).to_string(), "42");
    }

    #[rstest]
    fn year_display_is_raw_value() {
        assert_eq!(Year::new(2021).to_string(), "2021");
    }

    #[rstest]
    fn user_exposes_all_fields() {
        let user = User::new(UserIdentifier::new(3), "matilda", UserIdentifier::new(1));

        assert_eq!(user.identifier(), UserIdentifier::new(3));
        assert_eq!(user.name(), "matilda");
        assert_eq!(user.best_friend(), UserIdentifier::new(1));
    }
}
