//! Property tests for the pure kata helpers.
//!
//! Capitalization laws and the aggregation counting invariant, checked over
//! generated inputs.

use fp_katas::combat::{Character, total_damage};
use fp_katas::users::workflows::capitalize;
use proptest::prelude::*;

// =============================================================================
// Strategies
// =============================================================================

fn any_character() -> impl Strategy<Value = Character> {
    prop_oneof![
        Just(Character::Warrior),
        Just(Character::Wizard),
        Just(Character::Archer),
    ]
}

fn any_army() -> impl Strategy<Value = Vec<Character>> {
    proptest::collection::vec(any_character(), 0..32)
}

// =============================================================================
// Capitalization laws
// =============================================================================

proptest! {
    /// Capitalizing twice is the same as capitalizing once.
    #[test]
    fn capitalize_is_idempotent(name in ".*") {
        let once = capitalize(&name);
        prop_assert_eq!(capitalize(&once), once);
    }

    /// Everything after the first character is preserved verbatim.
    #[test]
    fn capitalize_preserves_the_remainder(name in ".+") {
        let mut characters = name.chars();
        characters.next();
        let remainder: String = characters.collect();

        prop_assert!(capitalize(&name).ends_with(&remainder));
    }

    /// The result never loses characters: it is at least as long as the
    /// input (upper-casing can expand, never contract).
    #[test]
    fn capitalize_never_shortens(name in ".*") {
        prop_assert!(capitalize(&name).chars().count() >= name.chars().count());
    }

    /// An input that already starts upper-case is a fixed point.
    #[test]
    fn capitalize_fixes_uppercase_initial(name in "[A-Z][a-z ]*") {
        prop_assert_eq!(capitalize(&name), name);
    }
}

// =============================================================================
// Aggregation laws
// =============================================================================

proptest! {
    /// Every member succeeds against exactly one of the three checks, so
    /// the per-category counts sum to the army size.
    #[test]
    fn report_total_equals_army_size(army in any_army()) {
        prop_assert_eq!(total_damage(&army).total(), army.len());
    }

    /// Each category's count equals the number of members of the matching
    /// variant.
    #[test]
    fn category_counts_match_variant_counts(army in any_army()) {
        let report = total_damage(&army);

        let count_of = |expected: Character| {
            army.iter().filter(|member| **member == expected).count()
        };

        prop_assert_eq!(report.physical(), count_of(Character::Warrior));
        prop_assert_eq!(report.magical(), count_of(Character::Wizard));
        prop_assert_eq!(report.ranged(), count_of(Character::Archer));
    }

    /// Aggregation is order-insensitive.
    #[test]
    fn report_is_order_insensitive(army in any_army()) {
        let mut reversed = army.clone();
        reversed.reverse();

        prop_assert_eq!(total_damage(&army), total_damage(&reversed));
    }
}
