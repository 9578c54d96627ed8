//! Raw collection normalization.
//!
//! # Invariants
//! - Output length and order equal input length and order.
//! - Structured records pass through unchanged; labels become records with
//!   only `title` set.
//! - An absent collection normalizes to an empty one.

use crate::model::record::{CollectionRecord, RawEntry};

/// Normalizes one raw per-person collection into uniform records.
pub fn normalize_entries<R: CollectionRecord>(entries: Option<&[RawEntry<R>]>) -> Vec<R> {
    entries
        .unwrap_or_default()
        .iter()
        .map(|entry| normalize_entry(entry.clone()))
        .collect()
}

/// Normalizes a single raw entry.
pub fn normalize_entry<R: CollectionRecord>(entry: RawEntry<R>) -> R {
    match entry {
        RawEntry::Label(title) => R::from_label(title),
        RawEntry::Record(record) => record,
    }
}
