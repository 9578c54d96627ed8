//! Connection bootstrap for the staff directory store.
//!
//! # Invariants
//! - Returned connections have migrations fully applied.
//! - Read-only connections are never migrated; an outdated file is rejected.

use super::migrations::{apply_migrations, current_user_version, latest_version};
use super::{DbError, DbResult};
use log::{error, info};
use rusqlite::{Connection, OpenFlags};
use std::path::Path;
use std::time::{Duration, Instant};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum OpenMode {
    File,
    ReadOnly,
    Memory,
}

impl OpenMode {
    fn as_str(self) -> &'static str {
        match self {
            Self::File => "file",
            Self::ReadOnly => "read_only",
            Self::Memory => "memory",
        }
    }
}

/// Opens (creating if needed) a database file and applies pending migrations.
pub fn open_db(path: impl AsRef<Path>) -> DbResult<Connection> {
    open_with(OpenMode::File, || Connection::open(path))
}

/// Opens an existing database file without write access.
///
/// Fails with [`DbError::UnsupportedSchemaVersion`] when the file's schema
/// version differs from the one this binary expects.
pub fn open_db_read_only(path: impl AsRef<Path>) -> DbResult<Connection> {
    open_with(OpenMode::ReadOnly, || {
        Connection::open_with_flags(
            path,
            OpenFlags::SQLITE_OPEN_READ_ONLY | OpenFlags::SQLITE_OPEN_NO_MUTEX,
        )
    })
}

/// Opens a migrated in-memory database.
pub fn open_db_in_memory() -> DbResult<Connection> {
    open_with(OpenMode::Memory, Connection::open_in_memory)
}

fn open_with(
    mode: OpenMode,
    opener: impl FnOnce() -> rusqlite::Result<Connection>,
) -> DbResult<Connection> {
    let started_at = Instant::now();
    info!("event=db_open module=db status=start mode={}", mode.as_str());

    let result = opener()
        .map_err(DbError::from)
        .and_then(|mut conn| bootstrap_connection(&mut conn, mode).map(|()| conn));

    match &result {
        Ok(_) => info!(
            "event=db_open module=db status=ok mode={} duration_ms={}",
            mode.as_str(),
            started_at.elapsed().as_millis()
        ),
        Err(err) => error!(
            "event=db_open module=db status=error mode={} duration_ms={} error={}",
            mode.as_str(),
            started_at.elapsed().as_millis(),
            err
        ),
    }
    result
}

fn bootstrap_connection(conn: &mut Connection, mode: OpenMode) -> DbResult<()> {
    conn.busy_timeout(Duration::from_secs(5))?;
    if mode == OpenMode::ReadOnly {
        let version = current_user_version(conn)?;
        let latest = latest_version();
        if version != latest {
            return Err(DbError::UnsupportedSchemaVersion {
                db_version: version,
                latest_supported: latest,
            });
        }
        return Ok(());
    }
    apply_migrations(conn)
}
