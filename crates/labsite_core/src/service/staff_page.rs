//! Staff detail page state.
//!
//! # Responsibility
//! - Bundle one staff member with independent publication/project views.
//! - Assign stable, collision-free project slugs and build project links.
//!
//! # Invariants
//! - Publication and project filter states never affect each other.
//! - Switching tabs never touches either filter state.
//! - Project slugs are assigned over the full collection, so a link does not
//!   change when filters change.

use crate::format::duration::format_duration;
use crate::format::slug::unique_slugs;
use crate::model::record::{CollectionKind, Project, Publication};
use crate::model::staff::StaffMember;
use crate::provider::{DirectoryResult, StaffDirectory};
use crate::service::collection_view::CollectionView;
use log::{debug, info};

/// Message shown when a staff slug does not resolve.
pub const STAFF_NOT_FOUND_MESSAGE: &str = "Staff member not found.";
/// Route prefix of staff detail pages.
pub const STAFF_ROUTE_PREFIX: &str = "/people/staff";

const SUBTITLE_SEPARATOR: &str = " • ";

/// Navigable link to one project detail page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectLink {
    /// Position of the project in the full normalized collection.
    pub index: usize,
    pub slug: String,
    pub href: String,
    pub title: String,
    /// Accessible label, e.g. `Open project Vision` or `Open project #3`.
    pub label: String,
    /// Lead and period joined with ` • `; `None` when both are empty.
    pub subtitle: Option<String>,
}

/// View model for one staff detail page.
#[derive(Debug, Clone)]
pub struct StaffPage {
    staff: StaffMember,
    publications: CollectionView<Publication>,
    projects: CollectionView<Project>,
    project_slugs: Vec<String>,
    active_tab: CollectionKind,
}

impl StaffPage {
    pub fn new(staff: StaffMember) -> Self {
        let publications = CollectionView::new(staff.publications.as_deref());
        let projects = CollectionView::new(staff.projects.as_deref());
        let project_slugs = unique_slugs(
            projects
                .records()
                .iter()
                .map(|project| project.title.as_str()),
        );
        debug!(
            "event=staff_page_init module=service status=ok staff={} publications={} projects={}",
            staff.slug,
            publications.records().len(),
            projects.records().len()
        );
        Self {
            staff,
            publications,
            projects,
            project_slugs,
            active_tab: CollectionKind::default(),
        }
    }

    /// Loads the page for `slug`; `Ok(None)` when the slug does not resolve.
    pub fn load(
        directory: &(impl StaffDirectory + ?Sized),
        slug: &str,
    ) -> DirectoryResult<Option<Self>> {
        let page = directory.find_staff(slug)?.map(Self::new);
        if page.is_none() {
            info!("event=staff_lookup module=service status=not_found staff={slug}");
        }
        Ok(page)
    }

    pub fn staff(&self) -> &StaffMember {
        &self.staff
    }

    pub fn publications(&self) -> &CollectionView<Publication> {
        &self.publications
    }

    pub fn publications_mut(&mut self) -> &mut CollectionView<Publication> {
        &mut self.publications
    }

    pub fn projects(&self) -> &CollectionView<Project> {
        &self.projects
    }

    pub fn projects_mut(&mut self) -> &mut CollectionView<Project> {
        &mut self.projects
    }

    pub fn active_tab(&self) -> CollectionKind {
        self.active_tab
    }

    pub fn select_tab(&mut self, tab: CollectionKind) {
        self.active_tab = tab;
    }

    /// Assigned slug of the project at source position `index`.
    pub fn project_slug(&self, index: usize) -> Option<&str> {
        self.project_slugs.get(index).map(String::as_str)
    }

    /// Links for the projects passing the current project filter.
    pub fn project_links(&self) -> Vec<ProjectLink> {
        self.projects
            .filtered_indices()
            .iter()
            .filter_map(|index| self.project_link(*index))
            .collect()
    }

    /// Link for the project at source position `index`.
    pub fn project_link(&self, index: usize) -> Option<ProjectLink> {
        let project = self.projects.records().get(index)?;
        let slug = self.project_slugs.get(index)?.clone();
        let label = if project.title.is_empty() {
            format!("Open project #{}", index + 1)
        } else {
            format!("Open project {}", project.title)
        };
        Some(ProjectLink {
            index,
            href: project_href(&self.staff.slug, &slug),
            slug,
            title: project.title.clone(),
            label,
            subtitle: project_subtitle(project),
        })
    }

    /// Resolves a project slug back to its record.
    pub fn resolve_project(&self, slug: &str) -> Option<(usize, &Project)> {
        let index = self
            .project_slugs
            .iter()
            .position(|candidate| candidate == slug)?;
        self.projects
            .records()
            .get(index)
            .map(|project| (index, project))
    }
}

/// Route of a project detail page; both segments are percent-encoded.
pub fn project_href(staff_slug: &str, project_slug: &str) -> String {
    format!(
        "{STAFF_ROUTE_PREFIX}/{}/{}",
        urlencoding::encode(staff_slug),
        urlencoding::encode(project_slug)
    )
}

/// Route of a staff detail page.
pub fn staff_href(staff_slug: &str) -> String {
    format!("{STAFF_ROUTE_PREFIX}/{}", urlencoding::encode(staff_slug))
}

/// Lead and period of a project joined for display.
pub fn project_subtitle(project: &Project) -> Option<String> {
    let lead = project
        .lead
        .as_deref()
        .filter(|lead| !lead.is_empty())
        .map(str::to_string);
    let period = Some(format_duration(project.start.as_ref(), project.end.as_ref()))
        .filter(|period| !period.is_empty());
    let parts = lead.into_iter().chain(period).collect::<Vec<_>>();
    (!parts.is_empty()).then(|| parts.join(SUBTITLE_SEPARATOR))
}
