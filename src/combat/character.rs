use std::fmt;

use serde::{Deserialize, Serialize};

use super::damage::Damage;

// =============================================================================
// Character
// =============================================================================

/// A combat character.
///
/// The set of variants is closed: every character is exactly one of
/// `Warrior`, `Wizard`, or `Archer`, and each variant exposes a single
/// capability yielding a fixed [`Damage`] category. Dispatch over the
/// variants is always exhaustive; there is no fallback arm.
///
/// # Examples
///
/// ```
/// use fp_katas::combat::{Character, Damage};
///
/// assert_eq!(Character::Warrior.smash(), Damage::Physical);
/// assert_eq!(Character::Wizard.burn(), Damage::Magical);
/// assert_eq!(Character::Archer.shoot(), Damage::Ranged);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Character {
    /// Melee fighter. Can smash.
    Warrior,
    /// Spell caster. Can burn.
    Wizard,
    /// Ranged fighter. Can shoot.
    Archer,
}

impl Character {
    /// Returns the variant name, used when reporting a failed dispatch.
    #[must_use]
    pub const fn kind(self) -> &'static str {
        match self {
            Self::Warrior => "Warrior",
            Self::Wizard => "Wizard",
            Self::Archer => "Archer",
        }
    }

    /// The warrior capability: a melee blow dealing physical damage.
    #[must_use]
    pub const fn smash(self) -> Damage {
        Damage::Physical
    }

    /// The wizard capability: a spell dealing magical damage.
    #[must_use]
    pub const fn burn(self) -> Damage {
        Damage::Magical
    }

    /// The archer capability: an arrow dealing ranged damage.
    #[must_use]
    pub const fn shoot(self) -> Damage {
        Damage::Ranged
    }
}

impl fmt::Display for Character {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "{}", self.kind())
    }
}

// =============================================================================
// Tests
// =============================================================================
