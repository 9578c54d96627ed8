//! SQLite-backed staff directory.
//!
//! # Responsibility
//! - Persist staff identity rows with raw collections kept as JSON text.
//! - Serve directory reads in insertion order.
//!
//! # Invariants
//! - Raw collections round-trip unchanged (labels stay labels).
//! - Re-importing a slug updates the row in place and keeps its position.

use crate::model::record::RawEntry;
use crate::model::staff::StaffMember;
use crate::provider::{validate_slugs, DirectoryError, DirectoryResult, StaffDirectory};
use log::info;
use rusqlite::{params, Connection, OptionalExtension, Row};
use serde::de::DeserializeOwned;
use serde::Serialize;

const STAFF_SELECT_SQL: &str = "SELECT
    slug,
    name,
    title,
    email,
    phone,
    image,
    publications_json,
    projects_json
FROM staff";

/// Staff directory over a migrated SQLite connection.
pub struct SqliteStaffDirectory<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteStaffDirectory<'conn> {
    pub fn new(conn: &'conn Connection) -> Self {
        Self { conn }
    }

    /// Inserts a staff member or replaces the row with the same slug.
    pub fn upsert_staff(&self, member: &StaffMember) -> DirectoryResult<()> {
        validate_slugs(std::slice::from_ref(member))?;
        let publications_json = encode_collection(member.publications.as_deref())?;
        let projects_json = encode_collection(member.projects.as_deref())?;

        self.conn.execute(
            "INSERT INTO staff (
                slug,
                name,
                title,
                email,
                phone,
                image,
                publications_json,
                projects_json
            ) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8)
            ON CONFLICT(slug) DO UPDATE SET
                name = excluded.name,
                title = excluded.title,
                email = excluded.email,
                phone = excluded.phone,
                image = excluded.image,
                publications_json = excluded.publications_json,
                projects_json = excluded.projects_json,
                updated_at = (CAST(strftime('%s', 'now') AS INTEGER) * 1000);",
            params![
                member.slug.trim(),
                member.name.as_str(),
                member.title.as_deref(),
                member.email.as_deref(),
                member.phone.as_deref(),
                member.image.as_deref(),
                publications_json,
                projects_json,
            ],
        )?;
        Ok(())
    }

    /// Imports a whole staff listing atomically.
    pub fn import_all(&self, members: &[StaffMember]) -> DirectoryResult<usize> {
        validate_slugs(members)?;
        let tx = self.conn.unchecked_transaction()?;
        for member in members {
            self.upsert_staff(member)?;
        }
        tx.commit()?;
        info!(
            "event=staff_import module=provider status=ok source=sqlite staff={}",
            members.len()
        );
        Ok(members.len())
    }

    /// Removes one staff member; returns whether a row existed.
    pub fn delete_staff(&self, slug: &str) -> DirectoryResult<bool> {
        let changed = self
            .conn
            .execute("DELETE FROM staff WHERE slug = ?1;", [slug.trim()])?;
        Ok(changed > 0)
    }
}

impl StaffDirectory for SqliteStaffDirectory<'_> {
    fn all_staff(&self) -> DirectoryResult<Vec<StaffMember>> {
        let mut stmt = self
            .conn
            .prepare(&format!("{STAFF_SELECT_SQL} ORDER BY rowid ASC;"))?;
        let mut rows = stmt.query([])?;
        let mut members = Vec::new();
        while let Some(row) = rows.next()? {
            members.push(parse_staff_row(row)?);
        }
        Ok(members)
    }

    fn find_staff(&self, slug: &str) -> DirectoryResult<Option<StaffMember>> {
        let mut stmt = self
            .conn
            .prepare(&format!("{STAFF_SELECT_SQL} WHERE slug = ?1;"))?;
        let raw = stmt
            .query_row([slug], |row| RawStaffRow::from_row(row))
            .optional()?;
        raw.map(RawStaffRow::decode).transpose()
    }
}

/// Column values before JSON decoding.
struct RawStaffRow {
    slug: String,
    name: String,
    title: Option<String>,
    email: Option<String>,
    phone: Option<String>,
    image: Option<String>,
    publications_json: Option<String>,
    projects_json: Option<String>,
}

impl RawStaffRow {
    fn from_row(row: &Row<'_>) -> rusqlite::Result<Self> {
        Ok(Self {
            slug: row.get("slug")?,
            name: row.get("name")?,
            title: row.get("title")?,
            email: row.get("email")?,
            phone: row.get("phone")?,
            image: row.get("image")?,
            publications_json: row.get("publications_json")?,
            projects_json: row.get("projects_json")?,
        })
    }

    fn decode(self) -> DirectoryResult<StaffMember> {
        Ok(StaffMember {
            publications: decode_collection(&self.slug, self.publications_json.as_deref())?,
            projects: decode_collection(&self.slug, self.projects_json.as_deref())?,
            slug: self.slug,
            name: self.name,
            title: self.title,
            email: self.email,
            phone: self.phone,
            image: self.image,
        })
    }
}

fn parse_staff_row(row: &Row<'_>) -> DirectoryResult<StaffMember> {
    RawStaffRow::from_row(row)?.decode()
}

fn encode_collection<R: Serialize>(
    entries: Option<&[RawEntry<R>]>,
) -> DirectoryResult<Option<String>> {
    entries
        .map(|entries| serde_json::to_string(entries))
        .transpose()
        .map_err(DirectoryError::from)
}

fn decode_collection<R: DeserializeOwned>(
    slug: &str,
    json: Option<&str>,
) -> DirectoryResult<Option<Vec<RawEntry<R>>>> {
    json.map(|value| {
        serde_json::from_str(value).map_err(|err| {
            DirectoryError::InvalidData(format!("invalid collection json for `{slug}`: {err}"))
        })
    })
    .transpose()
}
