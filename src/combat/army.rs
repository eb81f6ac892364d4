//! Army-wide damage aggregation.
//!
//! Runs every validate-and-dispatch check against every member of an army,
//! discards the failures, and counts the successes per damage category.
//! This is the one place a failure is intentionally dropped: a member that
//! is not a valid target for an action simply does not contribute to that
//! category's count.

use serde::{Deserialize, Serialize};

use super::attack::{check_target_and_burn, check_target_and_shoot, check_target_and_smash};
use super::character::Character;
use super::damage::Damage;

// =============================================================================
// DamageReport
// =============================================================================

/// Successes per damage category across an army.
///
/// # Examples
///
/// ```
/// use fp_katas::combat::{Character, total_damage};
///
/// let army = [Character::Warrior, Character::Wizard, Character::Archer];
/// let report = total_damage(&army);
///
/// assert_eq!(report.physical(), 1);
/// assert_eq!(report.magical(), 1);
/// assert_eq!(report.ranged(), 1);
/// assert_eq!(report.total(), 3);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DamageReport {
    physical: usize,
    magical: usize,
    ranged: usize,
}

impl DamageReport {
    /// Number of successful smashes.
    #[must_use]
    pub const fn physical(&self) -> usize {
        self.physical
    }

    /// Number of successful burns.
    #[must_use]
    pub const fn magical(&self) -> usize {
        self.magical
    }

    /// Number of successful shots.
    #[must_use]
    pub const fn ranged(&self) -> usize {
        self.ranged
    }

    /// Total successes across all categories.
    #[must_use]
    pub const fn total(&self) -> usize {
        self.physical + self.magical + self.ranged
    }

    fn record(mut self, damage: Damage) -> Self {
        match damage {
            Damage::Physical => self.physical += 1,
            Damage::Magical => self.magical += 1,
            Damage::Ranged => self.ranged += 1,
        }
        self
    }
}

// =============================================================================
// Aggregation
// =============================================================================

/// Counts, per damage category, how many attacks succeed against an army.
///
/// Each member is checked against all three actions independently; failed
/// checks are discarded, successful ones are tallied by the damage category
/// they produce. An empty army yields an all-zero report.
#[must_use]
pub fn total_damage(army: &[Character]) -> DamageReport {
    army.iter()
        .flat_map(|character| {
            let target = Some(character);
            [
                check_target_and_smash(target),
                check_target_and_burn(target),
                check_target_and_shoot(target),
            ]
        })
        .filter_map(Result::ok)
        .fold(DamageReport::default(), DamageReport::record)
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn empty_army_yields_zero_report() {
        assert_eq!(total_damage(&[]), DamageReport::default());
    }

    #[rstest]
    fn mixed_army_counts_one_per_category() {
        let army = [Character::Warrior, Character::Wizard, Character::Archer];
        let report = total_damage(&army);

        assert_eq!(report.physical(), 1);
        assert_eq!(report.magical(), 1);
        assert_eq!(report.ranged(), 1);
    }

    #[rstest]
    #[case::warriors(vec![Character::Warrior; 4], 4, 0, 0)]
    #[case::wizards(vec![Character::Wizard; 2], 0, 2, 0)]
    #[case::archers(vec![Character::Archer; 3], 0, 0, 3)]
    fn uniform_army_counts_in_single_category(
        #[case] army: Vec<Character>,
        #[case] physical: usize,
        #[case] magical: usize,
        #[case] ranged: usize,
    ) {
        let report = total_damage(&army);

        assert_eq!(report.physical(), physical);
        assert_eq!(report.magical(), magical);
        assert_eq!(report.ranged(), ranged);
    }

    #[rstest]
    fn every_member_contributes_exactly_once() {
        let army = [
            Character::Wizard,
            Character::Wizard,
            Character::Warrior,
            Character::Archer,
        ];

        assert_eq!(total_damage(&army).total(), army.len());
    }
}
