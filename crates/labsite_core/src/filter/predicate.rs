//! Combined free-text + facet filter predicate.
//!
//! # Responsibility
//! - Hold the filter state of one collection view as a single value.
//! - Decide whether a normalized record passes that state.
//!
//! # Invariants
//! - A record passes iff it satisfies the text predicate AND every active
//!   facet predicate.
//! - Filtering preserves source order and never reorders.
//! - An empty query or an empty facet selection imposes no constraint.

use crate::model::record::{CollectionRecord, Facet};
use std::collections::BTreeMap;

/// Query text and facet selections of one collection view.
///
/// Values are replaced wholesale on each mutation; clearing is a single reset
/// to [`FilterState::default`].
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FilterState {
    query: String,
    selections: BTreeMap<Facet, String>,
}

impl FilterState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a copy with the free-text query replaced.
    pub fn with_query(&self, query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            selections: self.selections.clone(),
        }
    }

    /// Returns a copy with one facet selection replaced.
    ///
    /// `None` or an empty value leaves the facet unconstrained.
    pub fn with_selection(&self, facet: Facet, value: Option<String>) -> Self {
        let mut selections = self.selections.clone();
        match value.filter(|value| !value.is_empty()) {
            Some(value) => {
                selections.insert(facet, value);
            }
            None => {
                selections.remove(&facet);
            }
        }
        Self {
            query: self.query.clone(),
            selections,
        }
    }

    /// Returns the empty state: no query, no facet constraint.
    pub fn cleared(&self) -> Self {
        Self::default()
    }

    /// Raw query text as entered.
    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn selection(&self, facet: Facet) -> Option<&str> {
        self.selections.get(&facet).map(String::as_str)
    }

    /// Active facet constraints in facet order.
    pub fn selections(&self) -> impl Iterator<Item = (Facet, &str)> {
        self.selections
            .iter()
            .map(|(facet, value)| (*facet, value.as_str()))
    }

    pub fn is_empty(&self) -> bool {
        normalize_query(&self.query).is_empty() && self.selections.is_empty()
    }
}

/// Trims and lowercase-folds a free-text query.
pub fn normalize_query(query: &str) -> String {
    query.trim().to_lowercase()
}

/// Text predicate; `query` must already be normalized.
pub fn matches_text<R: CollectionRecord>(record: &R, query: &str) -> bool {
    if query.is_empty() {
        return true;
    }
    record
        .search_fields()
        .join(" ")
        .to_lowercase()
        .contains(query)
}

/// Exact-match facet predicate on the string form of the field.
pub fn matches_facet<R: CollectionRecord>(record: &R, facet: Facet, selected: &str) -> bool {
    if selected.is_empty() {
        return true;
    }
    record.facet_value(facet).as_deref() == Some(selected)
}

/// Full predicate for one record against `state`.
pub fn matches_state<R: CollectionRecord>(record: &R, state: &FilterState) -> bool {
    passes(record, &normalize_query(state.query()), state)
}

/// Source positions of the records passing `state`, in source order.
pub fn filter_indices<R: CollectionRecord>(records: &[R], state: &FilterState) -> Vec<usize> {
    let query = normalize_query(state.query());
    records
        .iter()
        .enumerate()
        .filter(|(_, record)| passes(*record, &query, state))
        .map(|(index, _)| index)
        .collect()
}

/// Records passing `state`, in source order.
pub fn apply_filter<'a, R: CollectionRecord>(records: &'a [R], state: &FilterState) -> Vec<&'a R> {
    filter_indices(records, state)
        .into_iter()
        .map(|index| &records[index])
        .collect()
}

fn passes<R: CollectionRecord>(record: &R, query: &str, state: &FilterState) -> bool {
    matches_text(record, query)
        && state
            .selections()
            .all(|(facet, selected)| matches_facet(record, facet, selected))
}
