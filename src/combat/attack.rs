//! Validate-and-dispatch checks.
//!
//! Each check takes an optional target and either invokes the capability the
//! action requires or fails with a tagged [`AttackError`]:
//!
//! - absent target → [`AttackError::NoTarget`]
//! - variant mismatch → [`AttackError::InvalidTarget`], naming the actual
//!   variant and the attempted action
//! - match → the capability's fixed [`Damage`] category

use super::character::Character;
use super::damage::Damage;
use super::errors::{Action, AttackError};

// =============================================================================
// Checks
// =============================================================================

/// Smashes the target if it is a warrior.
///
/// # Errors
///
/// Returns [`AttackError::NoTarget`] when `target` is `None`, and
/// [`AttackError::InvalidTarget`] when the target is not a warrior.
///
/// # Examples
///
/// ```
/// use fp_katas::combat::{Character, Damage, check_target_and_smash};
///
/// assert_eq!(
///     check_target_and_smash(Some(&Character::Warrior)),
///     Ok(Damage::Physical),
/// );
/// ```
pub fn check_target_and_smash(target: Option<&Character>) -> Result<Damage, AttackError> {
    check_target(target, Action::Smash, |character| {
        matches!(character, Character::Warrior).then_some(character.smash())
    })
}

/// Burns the target if it is a wizard.
///
/// # Errors
///
/// Returns [`AttackError::NoTarget`] when `target` is `None`, and
/// [`AttackError::InvalidTarget`] when the target is not a wizard.
pub fn check_target_and_burn(target: Option<&Character>) -> Result<Damage, AttackError> {
    check_target(target, Action::Burn, |character| {
        matches!(character, Character::Wizard).then_some(character.burn())
    })
}

/// Shoots the target if it is an archer.
///
/// # Errors
///
/// Returns [`AttackError::NoTarget`] when `target` is `None`, and
/// [`AttackError::InvalidTarget`] when the target is not an archer.
pub fn check_target_and_shoot(target: Option<&Character>) -> Result<Damage, AttackError> {
    check_target(target, Action::Shoot, |character| {
        matches!(character, Character::Archer).then_some(character.shoot())
    })
}

// =============================================================================
// Shared validation
// =============================================================================

/// Shared shape of the three checks: presence first, then capability match.
fn check_target(
    target: Option<&Character>,
    action: Action,
    capability: impl FnOnce(Character) -> Option<Damage>,
) -> Result<Damage, AttackError> {
    let character = *target.ok_or(AttackError::no_target(action))?;
    capability(character).ok_or(AttackError::invalid_target(character.kind(), action))
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn smash_on_warrior_yields_physical() {
        assert_eq!(
            check_target_and_smash(Some(&Character::Warrior)),
            Ok(Damage::Physical)
        );
    }

    #[rstest]
    #[case::wizard(Character::Wizard)]
    #[case::archer(Character::Archer)]
    fn smash_on_other_variant_is_invalid(#[case] target: Character) {
        assert_eq!(
            check_target_and_smash(Some(&target)),
            Err(AttackError::invalid_target(target.kind(), Action::Smash))
        );
    }

    #[rstest]
    fn absent_target_is_reported_per_action() {
        assert_eq!(
            check_target_and_burn(None),
            Err(AttackError::no_target(Action::Burn))
        );
    }
}
