//! Property-based tests for the matcher
//!
//! Patterns and texts are drawn from a tiny alphabet (including a multi-byte
//! character) so overlaps and shared suffixes are common.

use acmatch::{Hit, Matcher};
use proptest::prelude::*;
use std::collections::HashSet;

/// Quadratic reference scanner: every (end, len) pair, longest first per end
fn naive_search(patterns: &[String], text: &str) -> Vec<Hit> {
    let set: HashSet<&str> = patterns.iter().map(|s| s.as_str()).collect();
    let chars: Vec<char> = text.chars().collect();
    let mut hits = Vec::new();
    for end in 0..chars.len() {
        for len in (1..=end + 1).rev() {
            let candidate: String = chars[end + 1 - len..=end].iter().collect();
            if set.contains(candidate.as_str()) {
                hits.push(Hit {
                    start: end + 1 - len,
                    len,
                });
            }
        }
    }
    hits
}

fn pattern_set() -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec("[ab字]{1,4}", 0..8)
}

fn text() -> impl Strategy<Value = String> {
    "[abc字]{0,40}"
}

proptest! {
    #[test]
    fn search_and_search_indexed_agree(patterns in pattern_set(), text in text()) {
        let m = Matcher::from_patterns(&patterns).unwrap();
        let strings = m.search(&text).unwrap();
        let hits = m.search_indexed(&text).unwrap();

        prop_assert_eq!(strings.len(), hits.len());
        let chars: Vec<char> = text.chars().collect();
        for (s, hit) in strings.iter().zip(&hits) {
            prop_assert_eq!(Some(s.clone()), hit.extract(&chars));
        }
    }

    #[test]
    fn is_match_iff_search_non_empty(patterns in pattern_set(), text in text()) {
        let m = Matcher::from_patterns(&patterns).unwrap();
        prop_assert_eq!(m.is_match(&text).unwrap(), !m.search(&text).unwrap().is_empty());
    }

    #[test]
    fn agrees_with_naive_scan(patterns in pattern_set(), text in text()) {
        let m = Matcher::from_patterns(&patterns).unwrap();
        prop_assert_eq!(m.search_indexed(&text).unwrap(), naive_search(&patterns, &text));
    }

    #[test]
    fn duplicate_insertion_is_idempotent(patterns in pattern_set(), text in text()) {
        let once = Matcher::from_patterns(&patterns).unwrap();
        let doubled: Vec<&String> = patterns.iter().chain(patterns.iter()).collect();
        let twice = Matcher::from_patterns(doubled).unwrap();
        prop_assert_eq!(once.search(&text).unwrap(), twice.search(&text).unwrap());
    }

    #[test]
    fn incremental_build_matches_batch_build(patterns in pattern_set(), text in text()) {
        let batch = Matcher::from_patterns(&patterns).unwrap();

        let mut incremental = Matcher::new();
        let (first, rest) = patterns.split_at(patterns.len() / 2);
        incremental.build_with_patterns(first).unwrap();
        for p in rest {
            incremental.add_pattern(p).unwrap();
        }
        incremental.build();

        prop_assert_eq!(
            batch.search_indexed(&text).unwrap(),
            incremental.search_indexed(&text).unwrap()
        );
    }

    #[test]
    fn suffix_reported_after_longer_pattern(
        prefix in "[ab]{1,3}",
        suffix in "[ab字]{1,3}",
        filler in "[c]{0,3}",
    ) {
        let longer = format!("{}{}", prefix, suffix);
        let m = Matcher::from_patterns([longer.as_str(), suffix.as_str()]).unwrap();
        let text = format!("{}{}{}", filler, longer, filler);
        let hits = m.search_indexed(&text).unwrap();

        let end = filler.chars().count() + longer.chars().count();
        let at_end: Vec<&Hit> = hits.iter().filter(|h| h.end() == end).collect();
        prop_assert!(at_end.len() >= 2);
        prop_assert_eq!(at_end[0].len, longer.chars().count());
        prop_assert_eq!(at_end[1].len, suffix.chars().count());
    }

    #[test]
    fn hits_ordered_by_end_then_longest(patterns in pattern_set(), text in text()) {
        let m = Matcher::from_patterns(&patterns).unwrap();
        let hits = m.search_indexed(&text).unwrap();
        for pair in hits.windows(2) {
            let (a, b) = (pair[0], pair[1]);
            prop_assert!(a.end() < b.end() || (a.end() == b.end() && a.len > b.len));
        }
    }
}
