// crates/picker-core/src/text.rs

//! Case- and diacritic-insensitive text helpers.
//!
//! Everything that compares country names or ISO codes goes through
//! [`fold_key`], so bucketing, sorting, searching and lookups agree on what
//! "the same letter" means.

/// Convert a string into a folded key suitable for comparison.
///
/// This performs:
/// 1\) Transliterate Unicode → ASCII (e.g. `Åland` -> `Aland`)
/// 2\) Normalize to lowercase
///
/// # Examples
///
/// ```rust
/// use country_picker_core::text::fold_key;
///
/// assert_eq!(fold_key("Curaçao"), "curacao");
/// assert_eq!(fold_key("RÉUNION"), "reunion");
/// ```
pub fn fold_key(s: &str) -> String {
    deunicode::deunicode(s).to_lowercase()
}

/// Compares two strings for equality after folding.
pub fn equals_folded(a: &str, b: &str) -> bool {
    fold_key(a) == fold_key(b)
}

/// Returns `true` if `query` is a case/diacritic-insensitive prefix of `name`.
///
/// The comparison is restricted to a window the length of the query: a name
/// with fewer characters than the query never matches, otherwise the folded
/// name must begin with the folded query. An empty query is a prefix of
/// every name; callers that treat "no text" as "no search" must gate on
/// that themselves. A non-empty query that folds away entirely, such as a
/// lone combining accent, matches nothing.
///
/// ```rust
/// use country_picker_core::text::matches_prefix;
///
/// assert!(matches_prefix("Côte d’Ivoire", "cote"));
/// assert!(!matches_prefix("Chad", "Chade"));
/// ```
pub fn matches_prefix(name: &str, query: &str) -> bool {
    if name.chars().count() < query.chars().count() {
        return false;
    }
    let folded = fold_key(query);
    if folded.is_empty() && !query.is_empty() {
        return false;
    }
    fold_key(name).starts_with(&folded)
}

/// First alphabetic character of the folded form, uppercased.
///
/// Used by the built-in collation to pick a section letter.
pub fn initial_letter(s: &str) -> Option<char> {
    fold_key(s)
        .chars()
        .find(|c| c.is_ascii_alphabetic())
        .map(|c| c.to_ascii_uppercase())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fold_strips_case_and_accents() {
        assert_eq!(fold_key("São Tomé & Príncipe"), "sao tome & principe");
        assert_eq!(fold_key("Åland Islands"), "aland islands");
        assert!(equals_folded("TÜRKIYE", "turkiye"));
        assert!(!equals_folded("Chad", "Chile"));
    }

    #[test]
    fn prefix_match_is_windowed_to_query_length() {
        assert!(matches_prefix("Germany", "ger"));
        assert!(matches_prefix("Germany", "GERMANY"));
        assert!(matches_prefix("Réunion", "reu"));
        assert!(!matches_prefix("Germany", "erm"));
        assert!(!matches_prefix("Peru", "Perus"));
    }

    #[test]
    fn empty_query_is_a_prefix_of_everything() {
        assert!(matches_prefix("Chad", ""));
        assert!(matches_prefix("", ""));
    }

    #[test]
    fn query_that_folds_to_nothing_matches_nothing() {
        for query in ["\u{301}", "\u{AD}", "\u{FE0F}"] {
            assert_eq!(fold_key(query), "", "{query:?}");
            assert!(!matches_prefix("Chad", query), "{query:?}");
        }
    }

    #[test]
    fn initial_letter_skips_punctuation() {
        assert_eq!(initial_letter("Åland Islands"), Some('A'));
        assert_eq!(initial_letter("(Unknown) Place"), Some('U'));
        assert_eq!(initial_letter("123"), None);
    }
}
