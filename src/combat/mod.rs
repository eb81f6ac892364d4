//! Combat dispatch katas.
//!
//! A toy combat model over a closed set of character variants. Each variant
//! exposes a single capability that yields a fixed damage category; the
//! exercises validate an optional target against the capability an action
//! requires, dispatch on success, and aggregate successes over an army.
//!
//! # Example
//!
//! ```
//! use fp_katas::combat::{Character, Damage, check_target_and_smash};
//!
//! let target = Character::Warrior;
//! assert_eq!(check_target_and_smash(Some(&target)), Ok(Damage::Physical));
//! assert!(check_target_and_smash(None).is_err());
//! ```

pub mod army;
pub mod attack;
pub mod character;
pub mod damage;
pub mod errors;

pub use army::{DamageReport, total_damage};
pub use attack::{check_target_and_burn, check_target_and_shoot, check_target_and_smash};
pub use character::Character;
pub use damage::Damage;
pub use errors::{Action, AttackError};
