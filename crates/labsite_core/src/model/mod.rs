//! Domain model for staff records and their publication/project collections.
//!
//! # Responsibility
//! - Define the raw shapes supplied by the staff data source.
//! - Define the uniform normalized shapes used by filtering and rendering.
//!
//! # Invariants
//! - Every model type is a plain value object with no shared mutable state.

pub mod duration;
pub mod record;
pub mod staff;
