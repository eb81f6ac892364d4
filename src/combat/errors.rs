use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

// =============================================================================
// Action
// =============================================================================

/// The capability an attack attempts to invoke.
///
/// Carried inside [`AttackError`] so a failed dispatch can name what was
/// attempted. Exactly one [`super::Character`] variant is a valid target for
/// each action.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Action {
    /// The warrior-only melee blow.
    Smash,
    /// The wizard-only spell.
    Burn,
    /// The archer-only shot.
    Shoot,
}

impl Action {
    /// Returns the action verb, lower-case, as used in failure messages.
    #[must_use]
    pub const fn verb(self) -> &'static str {
        match self {
            Self::Smash => "smash",
            Self::Burn => "burn",
            Self::Shoot => "shoot",
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "{}", self.verb())
    }
}

// =============================================================================
// AttackError
// =============================================================================

/// A failed attack dispatch.
///
/// Tagged failure values: the variant is the discriminator, the rendered
/// message is human-readable. Callers receive the error and decide how to
/// react; nothing here recovers.
///
/// # Examples
///
/// ```
/// use fp_katas::combat::{Action, AttackError};
///
/// let error = AttackError::invalid_target("Wizard", Action::Smash);
/// assert_eq!(error.message(), "Wizard is not a valid target to smash");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AttackError {
    /// No target was selected for the attempted action.
    #[error("No target selected to {action}")]
    NoTarget {
        /// The action that was attempted without a target.
        action: Action,
    },

    /// The selected target's variant does not match the attempted action.
    #[error("{kind} is not a valid target to {action}")]
    InvalidTarget {
        /// The actual variant of the selected target.
        kind: &'static str,
        /// The action that was attempted against it.
        action: Action,
    },
}

impl AttackError {
    /// Creates a `NoTarget` error for the given action.
    #[must_use]
    pub const fn no_target(action: Action) -> Self {
        Self::NoTarget { action }
    }

    /// Creates an `InvalidTarget` error naming the target's actual variant
    /// and the attempted action.
    #[must_use]
    pub const fn invalid_target(kind: &'static str, action: Action) -> Self {
        Self::InvalidTarget { kind, action }
    }

    /// Returns the rendered failure message.
    #[must_use]
    pub fn message(&self) -> String {
        self.to_string()
    }
}

// =============================================================================
// Tests
// =============================================================================
