//! User-lookup katas.
//!
//! Asynchronous fallible lookups against an injected [`UserRepository`],
//! composed sequentially or independently, with a synchronous [`Clock`]
//! collaborator for the year exercise. Collaborators are passed as explicit
//! trait-typed parameters; errors are propagated unchanged with `?`.
//!
//! # Example
//!
//! ```
//! use fp_katas::users::adapters::InMemoryUserRepository;
//! use fp_katas::users::model::{User, UserIdentifier};
//! use fp_katas::users::workflows::capitalized_user_name;
//!
//! # #[tokio::main(flavor = "current_thread")]
//! # async fn main() {
//! let repository = InMemoryUserRepository::from_users([User::new(
//!     UserIdentifier::new(1),
//!     "ruth r. gonzalez",
//!     UserIdentifier::new(2),
//! )]);
//!
//! let name = capitalized_user_name(&repository, UserIdentifier::new(1)).await;
//! assert_eq!(name.as_deref(), Ok("Ruth r. gonzalez"));
//! # }
//! ```

pub mod adapters;
pub mod errors;
pub mod model;
pub mod ports;
pub mod workflows;

pub use adapters::{FixedClock, InMemoryUserRepository, SystemClock};
pub use errors::LookupError;
pub use model::{User, UserIdentifier, Year};
pub use ports::{Clock, UserRepository};
