//! Staff member model as supplied by the staff data provider.
//!
//! # Invariants
//! - `slug` is the stable route identifier of a staff member and never
//!   carries surrounding whitespace.
//! - Raw collections may be absent; consumers treat absence as empty.

use crate::model::record::{Project, Publication, RawEntry};
use serde::{Deserialize, Deserializer, Serialize};

/// Avatar shown when a staff member has no image reference.
pub const DEFAULT_AVATAR: &str = "/people/Basic_avatar_image.png";

/// Identity fields plus raw publication/project collections for one person.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StaffMember {
    #[serde(deserialize_with = "trimmed_slug")]
    pub slug: String,
    pub name: String,
    /// Job title, e.g. `Associate Professor`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub publications: Option<Vec<RawEntry<Publication>>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub projects: Option<Vec<RawEntry<Project>>>,
}

impl StaffMember {
    pub fn new(slug: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            slug: slug.into().trim().to_string(),
            name: name.into(),
            title: None,
            email: None,
            phone: None,
            image: None,
            publications: None,
            projects: None,
        }
    }

    /// Drops whitespace around `slug`.
    pub fn normalize_slug(&mut self) {
        let trimmed = self.slug.trim();
        if trimmed.len() != self.slug.len() {
            self.slug = trimmed.to_string();
        }
    }

    /// Image reference, falling back to the default avatar.
    pub fn image_or_default(&self) -> &str {
        self.image
            .as_deref()
            .filter(|image| !image.trim().is_empty())
            .unwrap_or(DEFAULT_AVATAR)
    }
}

fn trimmed_slug<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    Ok(String::deserialize(deserializer)?.trim().to_string())
}
