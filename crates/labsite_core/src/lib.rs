//! Core logic for the research-lab staff pages.
//! This crate is the single source of truth for record normalization, facet
//! derivation, filtering, project slugs and period formatting.

pub mod db;
pub mod filter;
pub mod format;
pub mod logging;
pub mod model;
pub mod provider;
pub mod service;

pub use filter::facet::{extract_all_facets, extract_facet};
pub use filter::normalize::{normalize_entries, normalize_entry};
pub use filter::predicate::{apply_filter, filter_indices, normalize_query, FilterState};
pub use format::duration::format_duration;
pub use format::slug::{slugify, unique_slugs};
pub use logging::{
    default_log_level, init_logging, init_logging_with, logging_status, LoggingConfig,
    LoggingError,
};
pub use model::duration::{DurationSpec, MonthValue, YearValue};
pub use model::record::{CollectionKind, CollectionRecord, Facet, Project, Publication, RawEntry};
pub use model::staff::StaffMember;
pub use provider::sqlite_dir::SqliteStaffDirectory;
pub use provider::static_dir::StaticStaffDirectory;
pub use provider::{DirectoryError, DirectoryResult, StaffDirectory};
pub use service::collection_view::CollectionView;
pub use service::staff_page::{ProjectLink, StaffPage, STAFF_NOT_FOUND_MESSAGE};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
