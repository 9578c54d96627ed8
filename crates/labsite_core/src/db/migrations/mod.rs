//! Staff store schema versions.
//!
//! Each step is an SQL script with a strictly increasing version; the
//! version of the last applied step is kept in `PRAGMA user_version`.

use crate::db::{DbError, DbResult};
use log::debug;
use rusqlite::Connection;

/// Ordered schema steps as `(version, name, sql)`.
const SCHEMA_STEPS: &[(u32, &str, &str)] = &[
    (1, "staff", include_str!("0001_staff.sql")),
    (2, "staff_name_index", include_str!("0002_staff_name_index.sql")),
];

/// Schema version produced by running every known step.
pub fn latest_version() -> u32 {
    SCHEMA_STEPS.last().map_or(0, |(version, _, _)| *version)
}

/// Brings `conn` up to [`latest_version`] inside one transaction.
///
/// A file written by a newer build is rejected untouched.
pub fn apply_migrations(conn: &mut Connection) -> DbResult<()> {
    let from = current_user_version(conn)?;
    let to = latest_version();
    if from > to {
        return Err(DbError::UnsupportedSchemaVersion {
            db_version: from,
            latest_supported: to,
        });
    }

    let pending = SCHEMA_STEPS.iter().filter(|(version, _, _)| *version > from);
    let tx = conn.transaction()?;
    for (version, name, sql) in pending {
        tx.execute_batch(sql)?;
        tx.pragma_update(None, "user_version", version)?;
        debug!("event=db_migrate module=db status=ok version={version} step={name}");
    }
    tx.commit()?;
    Ok(())
}

pub(crate) fn current_user_version(conn: &Connection) -> DbResult<u32> {
    Ok(conn.pragma_query_value(None, "user_version", |row| row.get(0))?)
}
