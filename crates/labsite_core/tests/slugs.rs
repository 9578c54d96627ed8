use labsite_core::format::slug::FALLBACK_SLUG_PREFIX;
use labsite_core::{slugify, unique_slugs};
use proptest::prelude::*;
use std::collections::HashSet;

fn is_slug_charset(value: &str) -> bool {
    value
        .chars()
        .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-')
}

#[test]
fn accented_title_with_symbols_is_url_safe() {
    let slug = slugify("Édge Case: AI/ML!");
    assert_eq!(slug, "edge-case-aiml");
    assert!(is_slug_charset(&slug));
}

#[test]
fn internal_whitespace_collapses_without_edge_hyphens() {
    assert_eq!(slugify("  Multi   Space  "), "multi-space");
}

#[test]
fn tabs_and_newlines_count_as_whitespace() {
    assert_eq!(slugify("Deep\tLearning\nLab"), "deep-learning-lab");
}

#[test]
fn romanian_diacritics_fold_to_latin_letters() {
    assert_eq!(slugify("Robotică Asistivă"), "robotica-asistiva");
    assert_eq!(slugify("Știință și Tehnologie"), "stiinta-si-tehnologie");
}

#[test]
fn slugify_is_deterministic() {
    let title = "Graph Networks for Traffic (2021)";
    assert_eq!(slugify(title), slugify(title));
    assert_eq!(slugify(title), "graph-networks-for-traffic-2021");
}

#[test]
fn blank_or_symbol_only_titles_yield_empty_slug() {
    assert_eq!(slugify(""), "");
    assert_eq!(slugify("   "), "");
    assert_eq!(slugify("!!!???"), "");
}

#[test]
fn colliding_titles_stay_addressable() {
    assert_eq!(slugify("AI/ML Lab"), slugify("AIML Lab"));

    let slugs = unique_slugs(["AI/ML Lab", "AIML Lab", "A/B Test", "A B Test"]);
    assert_eq!(slugs, vec!["aiml-lab", "aiml-lab-2", "ab-test", "a-b-test"]);
}

#[test]
fn empty_slugs_fall_back_to_positional_token() {
    let slugs = unique_slugs(["Vision", "", "???"]);
    assert_eq!(
        slugs,
        vec![
            "vision".to_string(),
            format!("{FALLBACK_SLUG_PREFIX}-1"),
            format!("{FALLBACK_SLUG_PREFIX}-2"),
        ]
    );
}

#[test]
fn fallback_token_never_collides_with_natural_slug() {
    let slugs = unique_slugs(["project 1", ""]);
    assert_eq!(slugs, vec!["project-1", "project-1-2"]);
}

proptest! {
    #[test]
    fn slug_output_is_restricted_to_url_safe_charset(title in "\\PC{0,40}") {
        let slug = slugify(&title);
        prop_assert!(is_slug_charset(&slug), "unexpected slug {slug:?}");
        prop_assert!(!slug.contains("--"));
    }

    #[test]
    fn unique_slugs_are_distinct_and_non_empty(
        titles in prop::collection::vec("[a-cA-C /!é ]{0,6}", 0..16),
    ) {
        let slugs = unique_slugs(titles.iter().map(String::as_str));
        prop_assert_eq!(slugs.len(), titles.len());
        let distinct = slugs.iter().collect::<HashSet<_>>();
        prop_assert_eq!(distinct.len(), slugs.len());
        prop_assert!(slugs.iter().all(|slug| !slug.is_empty() && is_slug_charset(slug)));
    }
}
