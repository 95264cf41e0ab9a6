//! Property-based tests using proptest.
//!
//! Tests invariants that should hold for all inputs.

use proptest::prelude::*;

use crate::{clean_text, extract_numbers, is_valid_identifier, most_common_words};

/// Text mixing words, digits, markup, links, and line breaks, with some
/// non-ASCII letters including uppercase forms that have no lowercase.
fn messy_text() -> impl Strategy<Value = String> {
    prop::collection::vec(
        prop_oneof![
            "[a-zA-Z]{1,8}",
            "[a-zA-Z0-9]{1,6}",
            "[à-öø-ÿÀ-ÖØ-Þ]{1,6}",
            Just("ΣΟΦΙΑΣ".to_string()),
            Just("\u{1D400}bc".to_string()),
            Just("\u{03D2}".to_string()),
            "[ \t\n]{1,3}",
            "[!-/:-@\\[-`{-~]{1,3}",
            Just("http://example.com/x".to_string()),
            Just("www.site.org".to_string()),
            Just("<b>".to_string()),
            Just("[note]".to_string()),
        ],
        0..24,
    )
    .prop_map(|parts| parts.concat())
}

proptest! {
    // ========================================================================
    // Cleaning
    // ========================================================================

    #[test]
    fn clean_is_idempotent(text in messy_text()) {
        let once = clean_text(&text);
        prop_assert_eq!(clean_text(&once), once);
    }

    #[test]
    fn clean_output_is_normalized(text in messy_text()) {
        let cleaned = clean_text(&text);

        // Caseless capitals such as U+1D400 survive; everything else is lowered.
        prop_assert!(cleaned.chars().all(|c| c.to_lowercase().eq([c])));
        prop_assert!(!cleaned.chars().any(|c| c.is_ascii_punctuation()));
        prop_assert!(!cleaned.contains('\n'));
        prop_assert!(
            !cleaned
                .split_whitespace()
                .any(|word| word.chars().any(|c| c.is_ascii_digit()))
        );
    }

    // ========================================================================
    // Counting
    // ========================================================================

    #[test]
    fn full_count_covers_every_token(text in messy_text()) {
        let counts = most_common_words(&text, None);
        prop_assert_eq!(counts.total(), text.split_whitespace().count());
    }

    #[test]
    fn limited_count_is_a_ranked_prefix(text in messy_text(), limit in 0usize..8) {
        let all = most_common_words(&text, None);
        let top = most_common_words(&text, Some(limit));

        prop_assert_eq!(top.len(), limit.min(all.len()));
        prop_assert_eq!(top.entries(), &all.entries()[..top.len()]);

        let listed: usize = top.iter().map(|(_, count)| count).sum();
        prop_assert_eq!(top.total(), listed);

        let counts: Vec<usize> = all.iter().map(|(_, count)| count).collect();
        prop_assert!(counts.windows(2).all(|pair| pair[0] >= pair[1]));
    }

    // ========================================================================
    // Numbers
    // ========================================================================

    #[test]
    fn numbers_are_sorted_with_matching_range(
        values in prop::collection::vec(-1_000_000i64..1_000_000, 0..16)
    ) {
        let text = values
            .iter()
            .map(|v| format!("value {v};"))
            .collect::<Vec<_>>()
            .join(" ");
        let found = extract_numbers(&text);

        let mut expected = values.clone();
        expected.sort_unstable();
        prop_assert_eq!(found.numbers(), expected.as_slice());

        match (found.min(), found.max()) {
            (Some(first), Some(last)) => prop_assert_eq!(found.range(), last.abs_diff(first)),
            _ => prop_assert_eq!(found.range(), 0),
        }
    }

    // ========================================================================
    // Identifiers
    // ========================================================================

    #[test]
    fn generated_identifiers_are_valid(name in "[A-Za-z_][A-Za-z0-9_]{0,16}") {
        prop_assert!(is_valid_identifier(&name));
    }

    #[test]
    fn identifier_check_matches_definition(name in "[A-Za-z0-9_ .-]{0,12}") {
        let mut chars = name.chars();
        let expected = match chars.next() {
            Some(first) if first.is_ascii_alphabetic() || first == '_' => {
                chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
            }
            _ => false,
        };
        prop_assert_eq!(is_valid_identifier(&name), expected);
    }
}
