use std::fmt;

use serde::{Deserialize, Serialize};

// =============================================================================
// Damage
// =============================================================================

/// The damage category a successful attack produces.
///
/// Every character capability yields exactly one fixed category, so the
/// category doubles as a tag for counting successes per attack kind.
///
/// # Examples
///
/// ```
/// use fp_katas::combat::{Character, Damage};
///
/// assert_eq!(Character::Warrior.smash(), Damage::Physical);
/// assert_eq!(Damage::Magical.to_string(), "Magical damage");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Damage {
    /// Dealt by a warrior's smash.
    Physical,
    /// Dealt by a wizard's burn.
    Magical,
    /// Dealt by an archer's shot.
    Ranged,
}

impl Damage {
    /// Returns the category name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Physical => "Physical",
            Self::Magical => "Magical",
            Self::Ranged => "Ranged",
        }
    }
}

impl fmt::Display for Damage {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "{} damage", self.name())
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case::physical(Damage::Physical, "Physical")]
    #[case::magical(Damage::Magical, "Magical")]
    #[case::ranged(Damage::Ranged, "Ranged")]
    fn name_matches_variant(#[case] damage: Damage, #[case] expected: &str) {
        assert_eq!(damage.name(), expected);
    }

    #[rstest]
    fn display_appends_damage_suffix() {
        assert_eq!(format!("{}", Damage::Ranged), "Ranged damage");
    }
}
