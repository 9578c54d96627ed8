//! In-memory staff directory loaded from JSON.
//!
//! The JSON document is an array of staff objects whose `publications` and
//! `projects` arrays mix plain strings and structured records.

use crate::model::staff::StaffMember;
use crate::provider::{validate_slugs, DirectoryResult, StaffDirectory};
use log::info;
use std::path::Path;

/// Staff directory held fully in memory.
#[derive(Debug, Clone, Default)]
pub struct StaticStaffDirectory {
    members: Vec<StaffMember>,
}

impl StaticStaffDirectory {
    /// Wraps an already materialized staff list.
    pub fn new(mut members: Vec<StaffMember>) -> DirectoryResult<Self> {
        members.iter_mut().for_each(StaffMember::normalize_slug);
        validate_slugs(&members)?;
        Ok(Self { members })
    }

    pub fn from_json_str(json: &str) -> DirectoryResult<Self> {
        let members: Vec<StaffMember> = serde_json::from_str(json)?;
        Self::new(members)
    }

    /// Reads and decodes a JSON staff file.
    pub fn from_path(path: impl AsRef<Path>) -> DirectoryResult<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)?;
        let directory = Self::from_json_str(&json)?;
        info!(
            "event=staff_load module=provider status=ok source=json path={} staff={}",
            path.display(),
            directory.members.len()
        );
        Ok(directory)
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }
}

impl StaffDirectory for StaticStaffDirectory {
    fn all_staff(&self) -> DirectoryResult<Vec<StaffMember>> {
        Ok(self.members.clone())
    }

    fn find_staff(&self, slug: &str) -> DirectoryResult<Option<StaffMember>> {
        Ok(self
            .members
            .iter()
            .find(|member| member.slug == slug)
            .cloned())
    }
}
