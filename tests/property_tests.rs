//! Property-based tests for branch naming.
//!
//! These tests use proptest to verify invariants hold across
//! randomly generated inputs.

use proptest::prelude::*;

use branch::core::naming::{generate, slugify, split_ticket, BranchSpec};
use branch::core::ticket::TicketMatcher;
use branch::core::types::{BranchName, BranchType};

/// Strategy for valid branch-type keywords.
fn branch_type() -> impl Strategy<Value = String> {
    "[a-z][a-z0-9]{0,8}(-[a-z0-9]{1,4})?".prop_filter("must not be reserved", |s| {
        !BranchType::RESERVED.contains(&s.as_str())
    })
}

/// Strategy for free text mixing letters, digits, separators and punctuation.
fn free_text() -> impl Strategy<Value = String> {
    prop::collection::vec(
        prop_oneof![
            prop::char::range('a', 'z'),
            prop::char::range('A', 'Z'),
            prop::char::range('0', '9'),
            Just(' '),
            Just('_'),
            Just('-'),
            Just('.'),
            Just('#'),
            Just('/'),
            Just('!'),
            Just('~'),
            Just('é'),
        ],
        0..40,
    )
    .prop_map(|chars| chars.into_iter().collect())
}

/// Strategy for ASCII-only free text.
fn ascii_text() -> impl Strategy<Value = String> {
    "[ -~]{0,40}"
}

fn word_list() -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec(free_text(), 0..6)
}

proptest! {
    #[test]
    fn slug_is_idempotent(text in free_text()) {
        let once = slugify(&text);
        prop_assert_eq!(slugify(&once), once);
    }

    #[test]
    fn slug_ignores_ascii_case(text in ascii_text()) {
        prop_assert_eq!(
            slugify(&text.to_ascii_uppercase()),
            slugify(&text.to_ascii_lowercase())
        );
    }

    #[test]
    fn slug_uses_only_safe_characters(text in free_text()) {
        let slug = slugify(&text);
        prop_assert!(slug
            .chars()
            .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-'));
        prop_assert!(!slug.starts_with('-'));
        prop_assert!(!slug.ends_with('-'));
        prop_assert!(!slug.contains("--"));
    }

    #[test]
    fn generated_name_shape(kind in branch_type(), ticket in free_text(), words in word_list()) {
        let name = generate(&kind, &ticket, &words);

        if name == kind {
            prop_assert!(!name.contains('/'));
        } else {
            let prefix = format!("{}/", kind);
            prop_assert!(name.starts_with(&prefix));
            prop_assert_eq!(name.matches('/').count(), 1);
            let slug = &name[prefix.len()..];
            prop_assert!(!slug.is_empty());
            prop_assert_eq!(slugify(slug), slug);
        }
    }

    #[test]
    fn generated_name_is_a_valid_branch(kind in branch_type(), ticket in free_text(), words in word_list()) {
        let name = generate(&kind, &ticket, &words);
        prop_assert!(BranchName::new(name.as_str()).is_ok(), "rejected: {}", name);
    }

    #[test]
    fn empty_input_yields_type(kind in branch_type()) {
        prop_assert_eq!(generate(&kind, "", &[] as &[&str]), kind);
    }

    #[test]
    fn ticket_leads_description(
        kind in branch_type(),
        number in 1u32..100_000,
        words in prop::collection::vec("[a-z]{1,8}", 1..5),
    ) {
        let ticket = format!("PIP-{}", number);
        let name = generate(&kind, &ticket, &words);
        let expected = format!("{}/pip-{}-{}", kind, number, words.join("-"));
        prop_assert_eq!(name, expected);
    }

    #[test]
    fn split_ticket_only_takes_matching_first_word(
        number in 1u32..100_000,
        words in prop::collection::vec("[a-z]{1,8}", 0..5),
    ) {
        let matcher = TicketMatcher::default();

        let mut args = vec![format!("#{}", number)];
        args.extend(words.iter().cloned());
        let (ticket, rest) = split_ticket(&args, &matcher);
        let expected_ticket = format!("#{}", number);
        prop_assert_eq!(ticket, Some(expected_ticket.as_str()));
        prop_assert_eq!(rest, &args[1..]);

        // Lowercase words never match the default patterns
        let (ticket, rest) = split_ticket(&words, &matcher);
        prop_assert_eq!(ticket, None);
        prop_assert_eq!(rest.len(), words.len());
    }

    #[test]
    fn spec_matches_direct_generation(kind in branch_type(), args in word_list()) {
        let matcher = TicketMatcher::default();
        let spec = BranchSpec::from_args(kind.as_str(), &args, &matcher);
        let ticket = spec.ticket.clone().unwrap_or_default();
        prop_assert_eq!(spec.branch_name(), generate(&kind, &ticket, &spec.words));
    }
}
