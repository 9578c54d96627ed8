//! URL slug generation for addressing projects under a staff member.
//!
//! # Responsibility
//! - Derive a deterministic, URL-safe token from a title.
//! - Assign collision-free slugs across one collection.
//!
//! # Invariants
//! - `slugify` output only contains `[a-z0-9-]`.
//! - `unique_slugs` output is non-empty and pairwise distinct for every item.

use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::HashSet;
use unicode_normalization::UnicodeNormalization;

static DISALLOWED_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[^a-z0-9\s-]").expect("valid disallowed-char regex"));
static WHITESPACE_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").expect("valid ws regex"));
static HYPHEN_RUN_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"-+").expect("valid hyphen regex"));

/// Prefix used for items whose title yields an empty slug.
pub const FALLBACK_SLUG_PREFIX: &str = "project";

/// Converts a title into a lowercase, hyphen-separated token.
///
/// Steps run in this order: NFD + combining-mark strip, lowercase, trim,
/// drop everything outside `[a-z0-9\s-]`, whitespace runs to `-`, hyphen
/// runs to one `-`. Symbol-only or blank titles yield an empty string.
pub fn slugify(title: &str) -> String {
    let folded = title
        .nfd()
        .filter(|c| !is_combining_mark(*c))
        .collect::<String>()
        .to_lowercase();
    let trimmed = folded.trim();
    let stripped = DISALLOWED_RE.replace_all(trimmed, "");
    let hyphenated = WHITESPACE_RE.replace_all(&stripped, "-");
    HYPHEN_RUN_RE.replace_all(&hyphenated, "-").into_owned()
}

/// Assigns one distinct slug per title, in input order.
///
/// - A slug without any letter or digit (empty, or a bare `-` left by
///   symbol-only titles) becomes `{FALLBACK_SLUG_PREFIX}-{index}` (0-based).
/// - A slug already taken gets the smallest free `-{n}` suffix, `n >= 2`.
///
/// The result depends only on the full title sequence.
pub fn unique_slugs<'a>(titles: impl IntoIterator<Item = &'a str>) -> Vec<String> {
    let mut taken = HashSet::new();
    titles
        .into_iter()
        .enumerate()
        .map(|(index, title)| {
            let mut base = slugify(title);
            if !base.chars().any(|c| c.is_ascii_alphanumeric()) {
                base = format!("{FALLBACK_SLUG_PREFIX}-{index}");
            }
            let mut candidate = base.clone();
            let mut suffix = 2_usize;
            while taken.contains(&candidate) {
                candidate = format!("{base}-{suffix}");
                suffix += 1;
            }
            taken.insert(candidate.clone());
            candidate
        })
        .collect()
}

fn is_combining_mark(c: char) -> bool {
    ('\u{0300}'..='\u{036f}').contains(&c)
}
