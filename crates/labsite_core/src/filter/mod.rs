//! Faceted filtering engine for per-person record collections.
//!
//! # Responsibility
//! - Normalize mixed label/record collections into uniform records.
//! - Derive facet option lists from the data.
//! - Apply combined free-text + facet filters.
//!
//! # Invariants
//! - Every function here is pure and total: no I/O, no errors, no state
//!   between calls.

pub mod facet;
pub mod normalize;
pub mod predicate;
