use futures::future;

use crate::users::errors::LookupError;
use crate::users::model::UserIdentifier;
use crate::users::ports::UserRepository;

use super::capitalize;

// =============================================================================
// ConcatenatedUserNames Workflow
// =============================================================================

/// Resolves two users independently and concatenates their capitalized
/// names in `(first, second)` order.
///
/// The lookups do not depend on each other: both are driven to completion
/// before the names are combined, with no required execution order between
/// them.
///
/// # Errors
///
/// Propagates [`LookupError::UserNotFound`] from either lookup unchanged;
/// the first lookup's error wins when both miss.
///
/// # Examples
///
/// ```
/// use fp_katas::users::adapters::InMemoryUserRepository;
/// use fp_katas::users::model::{User, UserIdentifier};
/// use fp_katas::users::workflows::concatenated_user_names;
///
/// # #[tokio::main(flavor = "current_thread")]
/// # async fn main() {
/// let repository = InMemoryUserRepository::from_users([
///     User::new(UserIdentifier::new(1), "idonea", UserIdentifier::new(2)),
///     User::new(UserIdentifier::new(2), "fidelia", UserIdentifier::new(1)),
/// ]);
///
/// let names =
///     concatenated_user_names(&repository, UserIdentifier::new(1), UserIdentifier::new(2))
///         .await;
/// assert_eq!(names.as_deref(), Ok("IdoneaFidelia"));
/// # }
/// ```
#[tracing::instrument(skip(repository))]
pub async fn concatenated_user_names<R>(
    repository: &R,
    first: UserIdentifier,
    second: UserIdentifier,
) -> Result<String, LookupError>
where
    R: UserRepository,
{
    let (first_user, second_user) = future::join(
        repository.find_by_identifier(first),
        repository.find_by_identifier(second),
    )
    .await;

    Ok(format!(
        "{}{}",
        capitalize(first_user?.name()),
        capitalize(second_user?.name())
    ))
}
