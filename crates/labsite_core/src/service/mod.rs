//! Rendering-facing view services.
//!
//! # Responsibility
//! - Expose normalized collections, facet options, filtered collections and
//!   filter mutators per collection view.
//! - Compose per-staff detail page state, including project routing.

pub mod collection_view;
pub mod staff_page;
