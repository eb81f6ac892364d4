use crate::users::errors::LookupError;
use crate::users::model::UserIdentifier;
use crate::users::ports::{Clock, UserRepository};

use super::capitalize;

// =============================================================================
// UserNameWithCurrentYear Workflow
// =============================================================================

/// Resolves a user and appends the clock's current year to the capitalized
/// name.
///
/// The clock is the synchronous time-service collaborator; only the user
/// lookup suspends.
///
/// # Errors
///
/// Propagates [`LookupError::UserNotFound`] from the repository unchanged.
///
/// # Examples
///
/// ```
/// use fp_katas::users::adapters::{FixedClock, InMemoryUserRepository};
/// use fp_katas::users::model::{User, UserIdentifier, Year};
/// use fp_katas::users::workflows::user_name_with_current_year;
///
/// # #[tokio::main(flavor = "current_thread")]
/// # async fn main() {
/// let repository = InMemoryUserRepository::from_users([User::new(
///     UserIdentifier::new(1),
///     "matilda",
///     UserIdentifier::new(1),
/// )]);
/// let clock = FixedClock::new(Year::new(2021));
///
/// let tagged = user_name_with_current_year(&repository, &clock, UserIdentifier::new(1)).await;
/// assert_eq!(tagged.as_deref(), Ok("Matilda2021"));
/// # }
/// ```
#[tracing::instrument(skip(repository, clock))]
pub async fn user_name_with_current_year<R, C>(
    repository: &R,
    clock: &C,
    identifier: UserIdentifier,
) -> Result<String, LookupError>
where
    R: UserRepository,
    C: Clock,
{
    let user = repository.find_by_identifier(identifier).await?;
    Ok(format!(
        "{}{}",
        capitalize(user.name()),
        clock.current_year()
    ))
}
