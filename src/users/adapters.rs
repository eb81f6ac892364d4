//! Trivial collaborator implementations.
//!
//! In-memory stand-ins for the collaborators the workflows are exercised
//! against. A real application would replace these with integrations; the
//! katas only need deterministic behavior.

use std::collections::HashMap;

use chrono::Datelike;

use super::errors::LookupError;
use super::model::{User, UserIdentifier, Year};
use super::ports::{Clock, UserRepository};

// =============================================================================
// InMemoryUserRepository
// =============================================================================

/// `HashMap`-backed user repository.
///
/// # Examples
///
/// ```
/// use fp_katas::users::adapters::InMemoryUserRepository;
/// use fp_katas::users::model::{User, UserIdentifier};
///
/// let repository = InMemoryUserRepository::from_users([
///     User::new(UserIdentifier::new(1), "idonea", UserIdentifier::new(2)),
///     User::new(UserIdentifier::new(2), "fidelia", UserIdentifier::new(1)),
/// ]);
/// ```
#[derive(Debug, Clone, Default)]
pub struct InMemoryUserRepository {
    users: HashMap<UserIdentifier, User>,
}

impl InMemoryUserRepository {
    /// Creates an empty repository; every lookup misses.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a repository holding the given users, keyed by identifier.
    #[must_use]
    pub fn from_users(users: impl IntoIterator<Item = User>) -> Self {
        Self {
            users: users
                .into_iter()
                .map(|user| (user.identifier(), user))
                .collect(),
        }
    }
}

impl UserRepository for InMemoryUserRepository {
    async fn find_by_identifier(
        &self,
        identifier: UserIdentifier,
    ) -> Result<User, LookupError> {
        let found = self.users.get(&identifier).cloned();
        tracing::debug!(%identifier, hit = found.is_some(), "user lookup");
        found.ok_or(LookupError::UserNotFound { identifier })
    }
}

// =============================================================================
// SystemClock
// =============================================================================

/// Clock backed by the system time, reporting the current UTC year.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn current_year(&self) -> Year {
        Year::new(chrono::Utc::now().year())
    }
}

// =============================================================================
// FixedClock
// =============================================================================

/// Clock pinned to a fixed year, for deterministic tests.
///
/// # Examples
///
/// ```
/// use fp_katas::users::adapters::FixedClock;
/// use fp_katas::users::model::Year;
/// use fp_katas::users::ports::Clock;
///
/// let clock = FixedClock::new(Year::new(2021));
/// assert_eq!(clock.current_year(), Year::new(2021));
/// ```
#[derive(Debug, Clone, Copy)]
pub struct FixedClock {
    year: Year,
}

impl FixedClock {
    /// Creates a clock that always reports `year`.
    #[must_use]
    pub const fn new(year: Year) -> Self {
        Self { year }
    }
}

impl Clock for FixedClock {
    fn current_year(&self) -> Year {
        self.year
    }
}

// =============================================================================
// Tests
// =============================================================================
