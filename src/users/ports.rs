//! Capability traits for the lookup collaborators.
//!
//! The exercises receive their collaborators as explicit trait-typed
//! parameters rather than constructing them. Both collaborators are opaque
//! interfaces: a repository that resolves users by identifier, and a time
//! service that reports the current year.

use std::future::Future;

use super::errors::LookupError;
use super::model::{User, UserIdentifier, Year};

// =============================================================================
// UserRepository
// =============================================================================

/// Asynchronous user lookup by identifier.
///
/// A call is a single suspend-resume point; no ordering is guaranteed
/// between independent calls. A miss yields
/// [`LookupError::UserNotFound`], which callers propagate unchanged.
pub trait UserRepository: Send + Sync {
    /// Resolves the user for `identifier`.
    fn find_by_identifier(
        &self,
        identifier: UserIdentifier,
    ) -> impl Future<Output = Result<User, LookupError>> + Send;
}

// =============================================================================
// Clock
// =============================================================================

/// Synchronous time service reporting the current year.
pub trait Clock: Send + Sync {
    /// Returns the current year.
    fn current_year(&self) -> Year;
}
