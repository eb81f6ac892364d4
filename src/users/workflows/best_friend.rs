use crate::users::errors::LookupError;
use crate::users::model::UserIdentifier;
use crate::users::ports::UserRepository;

use super::capitalize;

// =============================================================================
// BestFriendNames Workflow
// =============================================================================

/// Resolves a user, then the user's best friend, and concatenates the two
/// capitalized names, user first.
///
/// Strictly sequential: the best-friend lookup cannot start until the first
/// lookup has produced the friend's identifier.
///
/// # Errors
///
/// Propagates [`LookupError::UserNotFound`] from either lookup unchanged.
///
/// # Examples
///
/// ```
/// use fp_katas::users::adapters::InMemoryUserRepository;
/// use fp_katas::users::model::{User, UserIdentifier};
/// use fp_katas::users::workflows::best_friend_names;
///
/// # #[tokio::main(flavor = "current_thread")]
/// # async fn main() {
/// let repository = InMemoryUserRepository::from_users([
///     User::new(UserIdentifier::new(1), "idonea", UserIdentifier::new(2)),
///     User::new(UserIdentifier::new(2), "fidelia", UserIdentifier::new(1)),
/// ]);
///
/// let names = best_friend_names(&repository, UserIdentifier::new(1)).await;
/// assert_eq!(names.as_deref(), Ok("IdoneaFidelia"));
/// # }
/// ```
#[tracing::instrument(skip(repository))]
pub async fn best_friend_names<R>(
    repository: &R,
    identifier: UserIdentifier,
) -> Result<String, LookupError>
where
    R: UserRepository,
{
    let user = repository.find_by_identifier(identifier).await?;
    let friend = repository.find_by_identifier(user.best_friend()).await?;

    Ok(format!(
        "{}{}",
        capitalize(user.name()),
        capitalize(friend.name())
    ))
}
