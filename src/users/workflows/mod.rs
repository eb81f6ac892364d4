//! The lookup exercises.
//!
//! One operation per file. Every workflow is an `async` function generic
//! over the capability traits in [`crate::users::ports`]; errors flow to
//! the caller with `?`, unchanged.

pub mod best_friend;
pub mod capitalized_name;
pub mod concat_names;
pub mod name_with_year;

pub use best_friend::best_friend_names;
pub use capitalized_name::capitalized_user_name;
pub use concat_names::concatenated_user_names;
pub use name_with_year::user_name_with_current_year;

// =============================================================================
// Shared helpers
// =============================================================================

/// Upper-cases the first character of `name`, leaving the remainder
/// unchanged.
///
/// Unicode-aware: when upper-casing the first character expands it (for
/// example `ß` → `SS`), every produced character is kept. The empty string
/// maps to itself.
///
/// # Examples
///
/// ```
/// use fp_katas::users::workflows::capitalize;
///
/// assert_eq!(capitalize("ruth r. gonzalez"), "Ruth r. gonzalez");
/// assert_eq!(capitalize(""), "");
/// ```
#[must_use]
pub fn capitalize(name: &str) -> String {
    let mut characters = name.chars();
    characters.next().map_or_else(String::new, |first| {
        first.to_uppercase().chain(characters).collect()
    })
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case::plain("matilda", "Matilda")]
    #[case::already_capitalized("Idonea", "Idonea")]
    #[case::remainder_untouched("ruth r. gonzalez", "Ruth r. gonzalez")]
    #[case::single_character("x", "X")]
    #[case::empty("", "")]
    #[case::leading_digit("7th", "7th")]
    #[case::expanding_uppercase("ßeta", "SSeta")]
    fn capitalize_cases(#[case] input: &str, #[case] expected: &str) {
        assert_eq!(capitalize(input), expected);
    }
}
