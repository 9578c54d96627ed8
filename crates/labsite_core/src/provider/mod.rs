//! Staff data provider contracts and backends.
//!
//! # Responsibility
//! - Define the synchronous, already-materialized access the page layer
//!   needs: list staff, look one up by slug.
//! - Provide a static JSON backend and a SQLite backend.
//!
//! # Invariants
//! - An unknown slug is `Ok(None)`, never an error.
//! - Backends never normalize raw collections; that is the filter engine's job.

use crate::db::DbError;
use crate::model::staff::StaffMember;
use std::error::Error;
use std::fmt::{Display, Formatter};

pub mod sqlite_dir;
pub mod static_dir;

pub type DirectoryResult<T> = Result<T, DirectoryError>;

/// Provider-layer error for loading and decoding staff data.
#[derive(Debug)]
pub enum DirectoryError {
    Io(std::io::Error),
    /// Staff JSON could not be decoded.
    Json(serde_json::Error),
    Db(DbError),
    /// Stored data violates directory invariants.
    InvalidData(String),
}

impl Display for DirectoryError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io(err) => write!(f, "failed to read staff data: {err}"),
            Self::Json(err) => write!(f, "invalid staff json: {err}"),
            Self::Db(err) => write!(f, "{err}"),
            Self::InvalidData(message) => write!(f, "invalid staff data: {message}"),
        }
    }
}

impl Error for DirectoryError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Io(err) => Some(err),
            Self::Json(err) => Some(err),
            Self::Db(err) => Some(err),
            Self::InvalidData(_) => None,
        }
    }
}

impl From<std::io::Error> for DirectoryError {
    fn from(value: std::io::Error) -> Self {
        Self::Io(value)
    }
}

impl From<serde_json::Error> for DirectoryError {
    fn from(value: serde_json::Error) -> Self {
        Self::Json(value)
    }
}

impl From<DbError> for DirectoryError {
    fn from(value: DbError) -> Self {
        Self::Db(value)
    }
}

impl From<rusqlite::Error> for DirectoryError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Db(DbError::Sqlite(value))
    }
}

/// Read access to the staff directory.
pub trait StaffDirectory {
    /// All staff members in directory order.
    fn all_staff(&self) -> DirectoryResult<Vec<StaffMember>>;

    /// Looks up one staff member by route slug.
    fn find_staff(&self, slug: &str) -> DirectoryResult<Option<StaffMember>> {
        Ok(self
            .all_staff()?
            .into_iter()
            .find(|member| member.slug == slug))
    }
}

/// Rejects blank and duplicate slugs in one staff listing.
pub(crate) fn validate_slugs(members: &[StaffMember]) -> DirectoryResult<()> {
    let mut seen = std::collections::HashSet::new();
    for member in members {
        let slug = member.slug.trim();
        if slug.is_empty() {
            return Err(DirectoryError::InvalidData(format!(
                "staff member `{}` has an empty slug",
                member.name
            )));
        }
        if !seen.insert(slug) {
            return Err(DirectoryError::InvalidData(format!(
                "duplicate staff slug `{slug}`"
            )));
        }
    }
    Ok(())
}
