//! Functional programming katas
//!
//! Small, self-contained exercises demonstrating composition patterns with
//! `Result`, `Option`, and dependency-injected asynchronous lookups. Each
//! exercise is pure glue logic: no persistent state, no concurrency
//! coordination, no storage.
//!
//! The crate contains two independent modules:
//!
//! - [`users`]: sequential and independent asynchronous fallible lookups
//!   against an injected repository, plus name-formatting workflows.
//! - [`combat`]: validated dispatch over a closed character enum and a
//!   success-counting aggregation over an army.
//!
//! The modules do not depend on each other and do not compose into a
//! pipeline; they exist to be read, filled in, and compared.

pub mod combat;
pub mod users;
