use crate::users::errors::LookupError;
use crate::users::model::UserIdentifier;
use crate::users::ports::UserRepository;

use super::capitalize;

// =============================================================================
// CapitalizedUserName Workflow
// =============================================================================

/// Resolves a user and returns the capitalized display name.
///
/// The first letter is upper-cased; the remainder of the name is returned
/// unchanged.
///
/// # Errors
///
/// Propagates [`LookupError::UserNotFound`] from the repository unchanged.
///
/// # Examples
///
/// ```
/// use fp_katas::users::adapters::InMemoryUserRepository;
/// use fp_katas::users::model::{User, UserIdentifier};
/// use fp_katas::users::workflows::capitalized_user_name;
///
/// # #[tokio::main(flavor = "current_thread")]
/// # async fn main() {
/// let repository = InMemoryUserRepository::from_users([User::new(
///     UserIdentifier::new(1),
///     "matilda",
///     UserIdentifier::new(1),
/// )]);
///
/// let name = capitalized_user_name(&repository, UserIdentifier::new(1)).await;
/// assert_eq!(name.as_deref(), Ok("Matilda"));
/// # }
/// ```
#[tracing::instrument(skip(repository))]
pub async fn capitalized_user_name<R>(
    repository: &R,
    identifier: UserIdentifier,
) -> Result<String, LookupError>
where
    R: UserRepository,
{
    let user = repository.find_by_identifier(identifier).await?;
    Ok(capitalize(user.name()))
}
