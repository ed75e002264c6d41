//! Property-based tests for the matcher algebra.
//!
//! These pin down the laws every tree must obey regardless of input:
//! - a literal matches exactly its own text
//! - integer scalars round-trip any `u64`
//! - sequence/alternation arity composition
//! - re-matching after `clear` is deterministic
//! - escaping is idempotent
//! - delimited integer lists recover their items

use matchtree::{Matcher, Value, escape};
use proptest::prelude::*;

/// Text mixing plain characters with pattern metacharacters.
fn literal_text_strategy() -> impl Strategy<Value = String> {
    prop_oneof![
        "[a-z ]{0,12}",
        "[a-z.*+?()|\\[\\]{}^$/-]{1,12}",
        "[A-Za-z0-9:=,;#]{1,12}",
    ]
}

/// A handful of small trees with known arity.
fn tree_strategy() -> impl Strategy<Value = (Matcher, usize)> {
    prop_oneof![
        Just((Matcher::literal("-"), 0)),
        Just((Matcher::integer(), 1)),
        Just((Matcher::word(), 1)),
        Just((Matcher::integer() >> ":" >> Matcher::word(), 2)),
        Just((Matcher::integer().optional(), 1)),
        Just((Matcher::integer().delimited_by(","), 1)),
    ]
}

#[cfg(test)]
mod proptest_tests {
    use super::*;

    proptest! {
        #[test]
        fn literal_matches_its_own_text(text in literal_text_strategy()) {
            let mut lit = Matcher::literal(&text);
            prop_assert!(lit.matches(&text), "fragment {} rejected {:?}", lit.fragment(), text);
        }

        #[test]
        fn literal_rejects_other_text(text in literal_text_strategy(), other in literal_text_strategy()) {
            prop_assume!(text != other);
            let mut lit = Matcher::literal(&text);
            prop_assert!(!lit.matches(&other));
        }

        #[test]
        fn integer_round_trips(n in any::<u64>()) {
            let mut int = Matcher::integer();
            prop_assert!(int.matches(&n.to_string()));
            prop_assert_eq!(int.get(0), &Value::Integer(n));
        }

        #[test]
        fn integer_rejects_non_digits(s in "[0-9]*[a-z ._-][0-9a-z]*") {
            let mut int = Matcher::integer();
            prop_assert!(!int.matches(&s));
            prop_assert!(!int.is_set(0));
        }

        #[test]
        fn sequence_arity_is_the_sum((a, na) in tree_strategy(), (b, nb) in tree_strategy()) {
            prop_assert_eq!(a.arity(), na);
            prop_assert_eq!((a >> b).arity(), na + nb);
        }

        #[test]
        fn same_shape_alternation_shares_arity((a, na) in tree_strategy()) {
            let twin = a.clone();
            prop_assert_eq!((a | twin).arity(), na);
        }

        #[test]
        fn rematch_after_clear_is_identical(words in prop::collection::vec("[a-z]{1,6}", 1..4), n in 0u32..10_000) {
            let input = format!("{} {}", words.join(","), n);
            let mut tree = Matcher::word().delimited_by(",") >> " " >> Matcher::integer();

            prop_assert!(tree.matches(&input));
            let first: Vec<Option<Value>> = tree.values().into_iter().map(|v| v.cloned()).collect();
            tree.clear();
            prop_assert!(tree.values().iter().all(Option::is_none));
            prop_assert!(tree.matches(&input));
            let second: Vec<Option<Value>> = tree.values().into_iter().map(|v| v.cloned()).collect();
            prop_assert_eq!(first, second);
        }

        #[test]
        fn escaping_is_idempotent(text in ".{0,16}") {
            let once = escape(&text);
            prop_assert_eq!(escape(&once), once);
        }

        #[test]
        fn delimited_integers_recover_every_item(items in prop::collection::vec(any::<u32>(), 1..8)) {
            let input = items.iter().map(|n| n.to_string()).collect::<Vec<_>>().join(",");
            let mut list = Matcher::integer().delimited_by(",");

            prop_assert!(list.matches(&input));
            let expected = Value::List(items.iter().map(|&n| Value::Integer(u64::from(n))).collect());
            prop_assert_eq!(list.get(0), &expected);
        }
    }
}
