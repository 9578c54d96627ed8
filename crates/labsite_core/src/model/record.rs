//! Publication/project record model.
//!
//! # Responsibility
//! - Define the raw entry shape accepted from the staff data source.
//! - Define the normalized record types consumed by the filter engine.
//!
//! # Invariants
//! - A raw entry is either a plain label or a structured record, never both.
//! - Normalized records always carry a `title` (possibly empty when the data
//!   source omitted it).
//! - Facet values are reported in string form; absent and empty values are
//!   reported as `None`.

use crate::model::duration::{DurationSpec, YearValue};
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt::{Display, Formatter};
use std::str::FromStr;

/// Categorical dimension a collection can be filtered on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Facet {
    /// Publication year.
    Year,
    /// Publication category/type.
    Kind,
    /// Research area.
    Domain,
    /// Project lead.
    Lead,
}

impl Facet {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Year => "year",
            Self::Kind => "kind",
            Self::Domain => "domain",
            Self::Lead => "lead",
        }
    }
}

impl Display for Facet {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Per-person collection a record belongs to.
///
/// Also doubles as the tab identifier on the staff detail page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CollectionKind {
    #[default]
    Publications,
    Projects,
}

impl CollectionKind {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Publications => "publications",
            Self::Projects => "projects",
        }
    }
}

impl Display for CollectionKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CollectionKind {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "publications" | "pubs" => Ok(Self::Publications),
            "projects" => Ok(Self::Projects),
            other => Err(format!(
                "unsupported collection `{other}`; expected publications|projects"
            )),
        }
    }
}

/// One entry of a raw per-person collection.
///
/// The data source may list an item either as a bare label or as a
/// structured record; both decode from JSON without extra tagging.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RawEntry<R> {
    Label(String),
    Record(R),
}

impl<R> From<R> for RawEntry<R> {
    fn from(record: R) -> Self {
        Self::Record(record)
    }
}

/// Shared behaviour of normalized records, used by the facet extractor and
/// the filter predicate engine.
pub trait CollectionRecord: Clone {
    /// Collection this record type belongs to.
    const KIND: CollectionKind;
    /// Facets exposed for this collection, in display order.
    const FACETS: &'static [Facet];

    /// Builds a record from a bare label; every other field is absent.
    fn from_label(title: String) -> Self;

    fn title(&self) -> &str;

    /// String form of a facet field, or `None` when absent/empty or when the
    /// facet does not apply to this collection.
    fn facet_value(&self, facet: Facet) -> Option<String>;

    /// Fields concatenated for free-text matching, in match order.
    ///
    /// Absent fields contribute an empty string.
    fn search_fields(&self) -> Vec<String>;
}

/// Decodes an optional string, treating `null` like a missing field.
fn null_as_empty<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

/// Normalized publication record.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Publication {
    #[serde(default, deserialize_with = "null_as_empty")]
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub year: Option<YearValue>,
    /// Category/type, e.g. `journal` or `conference`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
    /// Research area.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub domain: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl Publication {
    /// Display heading: title followed by `(year)` when a year is present.
    pub fn heading(&self) -> String {
        match &self.year {
            Some(year) => format!("{} ({year})", self.title),
            None => self.title.clone(),
        }
    }
}

impl CollectionRecord for Publication {
    const KIND: CollectionKind = CollectionKind::Publications;
    const FACETS: &'static [Facet] = &[Facet::Year, Facet::Kind, Facet::Domain];

    fn from_label(title: String) -> Self {
        Self {
            title,
            ..Self::default()
        }
    }

    fn title(&self) -> &str {
        &self.title
    }

    fn facet_value(&self, facet: Facet) -> Option<String> {
        match facet {
            Facet::Year => self.year.as_ref().map(ToString::to_string),
            Facet::Kind => self.kind.clone(),
            Facet::Domain => self.domain.clone(),
            Facet::Lead => None,
        }
        .filter(|value| !value.is_empty())
    }

    fn search_fields(&self) -> Vec<String> {
        vec![
            self.title.clone(),
            self.year.as_ref().map(ToString::to_string).unwrap_or_default(),
            self.domain.clone().unwrap_or_default(),
            self.kind.clone().unwrap_or_default(),
        ]
    }
}

/// Normalized project record.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Project {
    #[serde(default, deserialize_with = "null_as_empty")]
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lead: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub domain: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start: Option<DurationSpec>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end: Option<DurationSpec>,
}

impl CollectionRecord for Project {
    const KIND: CollectionKind = CollectionKind::Projects;
    const FACETS: &'static [Facet] = &[Facet::Domain, Facet::Lead];

    fn from_label(title: String) -> Self {
        Self {
            title,
            ..Self::default()
        }
    }

    fn title(&self) -> &str {
        &self.title
    }

    fn facet_value(&self, facet: Facet) -> Option<String> {
        match facet {
            Facet::Domain => self.domain.clone(),
            Facet::Lead => self.lead.clone(),
            Facet::Year | Facet::Kind => None,
        }
        .filter(|value| !value.is_empty())
    }

    fn search_fields(&self) -> Vec<String> {
        vec![
            self.title.clone(),
            self.lead.clone().unwrap_or_default(),
            self.domain.clone().unwrap_or_default(),
            self.description.clone().unwrap_or_default(),
        ]
    }
}
