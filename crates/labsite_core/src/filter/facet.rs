//! Facet option extraction.
//!
//! # Responsibility
//! - Derive the distinct, non-empty values of one facet from the data itself.
//!
//! # Invariants
//! - Every option appears on at least one record; no option repeats.
//! - `year` options are ordered by descending numeric value (stable), with
//!   non-numeric labels after all numeric ones.
//! - Other facets keep first-seen order.

use crate::model::record::{CollectionRecord, Facet};
use std::collections::HashSet;

/// Returns the ordered option list for `facet` over `records`.
pub fn extract_facet<R: CollectionRecord>(records: &[R], facet: Facet) -> Vec<String> {
    let mut seen = HashSet::new();
    let mut options = records
        .iter()
        .filter_map(|record| record.facet_value(facet))
        .filter(|value| seen.insert(value.clone()))
        .collect::<Vec<_>>();

    if facet == Facet::Year {
        // sort_by_key is stable, so ties keep encounter order.
        options.sort_by_key(|value| year_sort_key(value));
    }

    options
}

/// Option lists for every facet exposed by `R`, in `R::FACETS` order.
pub fn extract_all_facets<R: CollectionRecord>(records: &[R]) -> Vec<(Facet, Vec<String>)> {
    R::FACETS
        .iter()
        .map(|facet| (*facet, extract_facet(records, *facet)))
        .collect()
}

fn year_sort_key(value: &str) -> (bool, std::cmp::Reverse<i64>) {
    match value.trim().parse::<i64>() {
        Ok(year) => (false, std::cmp::Reverse(year)),
        Err(_) => (true, std::cmp::Reverse(0)),
    }
}
