//! Per-collection filter view.
//!
//! # Responsibility
//! - Own one normalized collection with its facet options and filter state.
//! - Expose the filtered collection and the filter mutators to renderers.
//!
//! # Invariants
//! - Facet options are computed once; the source collection never changes
//!   during the lifetime of a view.
//! - The filtered index list always matches the current `FilterState`.
//! - Each mutation replaces the whole `FilterState`; an unchanged state skips
//!   recomputation.

use crate::filter::facet::extract_all_facets;
use crate::filter::normalize::normalize_entries;
use crate::filter::predicate::{filter_indices, FilterState};
use crate::model::record::{CollectionRecord, Facet, RawEntry};
use log::{debug, warn};

/// Filterable view over one normalized collection.
#[derive(Debug, Clone)]
pub struct CollectionView<R: CollectionRecord> {
    records: Vec<R>,
    facet_options: Vec<(Facet, Vec<String>)>,
    state: FilterState,
    visible: Vec<usize>,
}

impl<R: CollectionRecord> CollectionView<R> {
    /// Builds a view from a raw collection; `None` yields an empty view.
    pub fn new(entries: Option<&[RawEntry<R>]>) -> Self {
        Self::from_records(normalize_entries(entries))
    }

    /// Builds a view from already normalized records.
    pub fn from_records(records: Vec<R>) -> Self {
        let facet_options = extract_all_facets(&records);
        let state = FilterState::default();
        let visible = filter_indices(&records, &state);
        debug!(
            "event=view_init module=service status=ok kind={} records={} facets={}",
            R::KIND,
            records.len(),
            facet_options.len()
        );
        Self {
            records,
            facet_options,
            state,
            visible,
        }
    }

    /// Full normalized collection in source order.
    pub fn records(&self) -> &[R] {
        &self.records
    }

    /// Ordered option list for one facet; empty for facets this collection
    /// does not expose.
    pub fn facet_options(&self, facet: Facet) -> &[String] {
        self.facet_options
            .iter()
            .find(|(candidate, _)| *candidate == facet)
            .map(|(_, options)| options.as_slice())
            .unwrap_or(&[])
    }

    /// Option lists for every exposed facet, in display order.
    pub fn all_facet_options(&self) -> &[(Facet, Vec<String>)] {
        &self.facet_options
    }

    pub fn state(&self) -> &FilterState {
        &self.state
    }

    /// Records passing the current filter, in source order.
    pub fn filtered(&self) -> Vec<&R> {
        self.visible
            .iter()
            .map(|index| &self.records[*index])
            .collect()
    }

    /// Source positions of the records passing the current filter.
    pub fn filtered_indices(&self) -> &[usize] {
        &self.visible
    }

    pub fn set_query(&mut self, query: impl Into<String>) {
        let next = self.state.with_query(query);
        self.replace_state(next);
    }

    /// Selects `value` for `facet`; `None` or `""` clears that facet.
    ///
    /// Selections on facets this collection does not expose are ignored.
    pub fn set_facet(&mut self, facet: Facet, value: Option<String>) {
        if !R::FACETS.contains(&facet) {
            warn!(
                "event=facet_select module=service status=ignored kind={} facet={}",
                R::KIND,
                facet
            );
            return;
        }
        let next = self.state.with_selection(facet, value);
        self.replace_state(next);
    }

    /// Resets query and every facet selection in one update.
    pub fn clear_filters(&mut self) {
        let next = self.state.cleared();
        self.replace_state(next);
    }

    fn replace_state(&mut self, next: FilterState) {
        if next == self.state {
            return;
        }
        self.visible = filter_indices(&self.records, &next);
        self.state = next;
        debug!(
            "event=filter_apply module=service status=ok kind={} total={} matched={}",
            R::KIND,
            self.records.len(),
            self.visible.len()
        );
    }
}

#[cfg(test)]
mod tests {
    use super::CollectionView;
    use crate::model::record::{Facet, Project, RawEntry};

    fn projects() -> Vec<RawEntry<Project>> {
        vec![
            RawEntry::Label("Plain".to_string()),
            RawEntry::Record(Project {
                title: "Vision".to_string(),
                lead: Some("Ana".to_string()),
                domain: Some("CV".to_string()),
                ..Project::default()
            }),
        ]
    }

    #[test]
    fn foreign_facet_selection_is_ignored() {
        let entries = projects();
        let mut view = CollectionView::new(Some(entries.as_slice()));
        view.set_facet(Facet::Year, Some("2020".to_string()));
        assert!(view.state().is_empty());
        assert_eq!(view.filtered().len(), 2);
    }

    #[test]
    fn unexposed_facet_has_no_options() {
        let entries = projects();
        let view = CollectionView::new(Some(entries.as_slice()));
        assert!(view.facet_options(Facet::Kind).is_empty());
        assert_eq!(
            view.facet_options(Facet::Lead).to_vec(),
            vec!["Ana".to_string()]
        );
    }
}
