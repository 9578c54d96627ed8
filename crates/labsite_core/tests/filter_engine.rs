use labsite_core::{
    apply_filter, filter_indices, CollectionView, Facet, FilterState, Project, Publication,
    RawEntry, YearValue,
};
use proptest::prelude::*;

fn publication(title: &str, year: Option<i64>, kind: Option<&str>, domain: Option<&str>) -> Publication {
    Publication {
        title: title.to_string(),
        year: year.map(YearValue::Number),
        kind: kind.map(str::to_string),
        domain: domain.map(str::to_string),
        description: None,
    }
}

fn sample_publications() -> Vec<Publication> {
    vec![
        publication("Graph Networks", Some(2021), Some("journal"), Some("AI")),
        publication("Edge Benchmarks", Some(2019), Some("conference"), Some("Embedded")),
        publication("Federated Survey", Some(2020), Some("journal"), Some("ai")),
        Publication {
            title: "Workshop note".to_string(),
            ..Publication::default()
        },
    ]
}

fn titles<'a>(records: &[&'a Publication]) -> Vec<&'a str> {
    records.iter().map(|record| record.title.as_str()).collect()
}

#[test]
fn empty_state_returns_everything_in_order() {
    let records = sample_publications();
    let filtered = apply_filter(&records, &FilterState::new());
    assert_eq!(
        titles(&filtered),
        vec!["Graph Networks", "Edge Benchmarks", "Federated Survey", "Workshop note"]
    );
}

#[test]
fn query_is_case_insensitive_and_trimmed() {
    let records = sample_publications();
    let state = FilterState::new().with_query("  AI ");
    let filtered = apply_filter(&records, &state);
    assert_eq!(titles(&filtered), vec!["Graph Networks", "Federated Survey"]);
}

#[test]
fn query_matches_year_text() {
    let records = sample_publications();
    let state = FilterState::new().with_query("2019");
    assert_eq!(filter_indices(&records, &state), vec![1]);
}

#[test]
fn query_can_span_adjacent_fields() {
    let records = sample_publications();
    let state = FilterState::new().with_query("networks 2021");
    assert_eq!(filter_indices(&records, &state), vec![0]);
}

#[test]
fn facet_match_is_exact() {
    let records = sample_publications();
    let state = FilterState::new().with_selection(Facet::Domain, Some("AI".to_string()));
    assert_eq!(filter_indices(&records, &state), vec![0]);
}

#[test]
fn year_facet_compares_string_forms() {
    let mut records = sample_publications();
    records.push(Publication {
        title: "Text year".to_string(),
        year: Some(YearValue::from("2021")),
        ..Publication::default()
    });
    let state = FilterState::new().with_selection(Facet::Year, Some("2021".to_string()));
    assert_eq!(filter_indices(&records, &state), vec![0, 4]);
}

#[test]
fn query_and_facets_combine_with_and() {
    let records = sample_publications();
    let state = FilterState::new()
        .with_query("survey")
        .with_selection(Facet::Kind, Some("journal".to_string()))
        .with_selection(Facet::Year, Some("2021".to_string()));
    assert!(filter_indices(&records, &state).is_empty());

    let state = state.with_selection(Facet::Year, Some("2020".to_string()));
    assert_eq!(filter_indices(&records, &state), vec![2]);
}

#[test]
fn record_with_absent_field_fails_constraint_but_matches_text() {
    let records = sample_publications();
    let by_kind = FilterState::new().with_selection(Facet::Kind, Some("journal".to_string()));
    assert!(!filter_indices(&records, &by_kind).contains(&3));

    let by_text = FilterState::new().with_query("workshop");
    assert_eq!(filter_indices(&records, &by_text), vec![3]);
}

#[test]
fn project_text_match_covers_lead_and_description() {
    let records = vec![
        Project {
            title: "Mobility".to_string(),
            lead: Some("Ana Popescu".to_string()),
            description: Some("Traffic analytics".to_string()),
            ..Project::default()
        },
        Project {
            title: "Infra".to_string(),
            ..Project::default()
        },
    ];
    assert_eq!(
        filter_indices(&records, &FilterState::new().with_query("popescu")),
        vec![0]
    );
    assert_eq!(
        filter_indices(&records, &FilterState::new().with_query("ANALYTICS")),
        vec![0]
    );
}

#[test]
fn project_text_match_ignores_period() {
    let records = vec![Project {
        title: "Mobility".to_string(),
        start: Some(labsite_core::DurationSpec::year(2020_i64)),
        ..Project::default()
    }];
    assert!(filter_indices(&records, &FilterState::new().with_query("2020")).is_empty());
}

#[test]
fn view_clear_restores_full_collection() {
    let entries = sample_publications()
        .into_iter()
        .map(RawEntry::from)
        .collect::<Vec<_>>();
    let mut view = CollectionView::new(Some(entries.as_slice()));

    view.set_query("graph");
    view.set_facet(Facet::Kind, Some("journal".to_string()));
    assert_eq!(view.filtered_indices(), &[0]);

    view.clear_filters();
    assert!(view.state().is_empty());
    assert_eq!(view.filtered_indices(), &[0, 1, 2, 3]);
}

#[test]
fn view_mutations_replace_state_wholesale() {
    let entries = sample_publications()
        .into_iter()
        .map(RawEntry::from)
        .collect::<Vec<_>>();
    let mut view = CollectionView::new(Some(entries.as_slice()));

    let before = view.state().clone();
    view.set_facet(Facet::Year, Some("2020".to_string()));
    assert_ne!(view.state(), &before);
    assert_eq!(before, FilterState::new());
    assert_eq!(view.state().selection(Facet::Year), Some("2020"));

    view.set_facet(Facet::Year, None);
    assert_eq!(view.state(), &before);
}

fn arb_field() -> impl Strategy<Value = Option<String>> {
    prop::option::of(prop::sample::select(vec![
        String::new(),
        "AI".to_string(),
        "ai".to_string(),
        "Robotics".to_string(),
        "journal".to_string(),
    ]))
}

fn arb_publication() -> impl Strategy<Value = Publication> {
    (
        prop::sample::select(vec!["Graph", "Edge AI", "survey", ""]),
        prop::option::of(2015_i64..2024),
        arb_field(),
        arb_field(),
    )
        .prop_map(|(title, year, kind, domain)| Publication {
            title: title.to_string(),
            year: year.map(YearValue::Number),
            kind,
            domain,
            description: None,
        })
}

fn arb_state() -> impl Strategy<Value = FilterState> {
    (
        prop::sample::select(vec!["", " ai ", "GRAPH", "2020", "journal", "zzz"]),
        prop::option::of(prop::sample::select(vec!["2019", "2020", "2021"])),
        arb_field(),
        arb_field(),
    )
        .prop_map(|(query, year, kind, domain)| {
            FilterState::new()
                .with_query(query)
                .with_selection(Facet::Year, year.map(str::to_string))
                .with_selection(Facet::Kind, kind)
                .with_selection(Facet::Domain, domain)
        })
}

fn independently_matches(record: &Publication, state: &FilterState) -> bool {
    let query = state.query().trim().to_lowercase();
    let year = record.year.as_ref().map(ToString::to_string).unwrap_or_default();
    let haystack = format!(
        "{} {} {} {}",
        record.title,
        year,
        record.domain.clone().unwrap_or_default(),
        record.kind.clone().unwrap_or_default()
    )
    .to_lowercase();
    let text_ok = query.is_empty() || haystack.contains(&query);
    let year_ok = state.selection(Facet::Year).map_or(true, |selected| year == selected);
    let kind_ok = state
        .selection(Facet::Kind)
        .map_or(true, |selected| record.kind.as_deref() == Some(selected));
    let domain_ok = state
        .selection(Facet::Domain)
        .map_or(true, |selected| record.domain.as_deref() == Some(selected));
    text_ok && year_ok && kind_ok && domain_ok
}

proptest! {
    #[test]
    fn filter_output_is_exactly_the_matching_records_in_order(
        records in prop::collection::vec(arb_publication(), 0..12),
        state in arb_state(),
    ) {
        let expected = records
            .iter()
            .enumerate()
            .filter(|(_, record)| independently_matches(record, &state))
            .map(|(index, _)| index)
            .collect::<Vec<_>>();
        prop_assert_eq!(filter_indices(&records, &state), expected);
    }

    #[test]
    fn clearing_after_any_mutations_restores_everything(
        records in prop::collection::vec(arb_publication(), 0..12),
        states in prop::collection::vec(arb_state(), 0..5),
    ) {
        let entries = records.iter().cloned().map(RawEntry::from).collect::<Vec<_>>();
        let mut view = CollectionView::new(Some(entries.as_slice()));
        for state in &states {
            view.set_query(state.query());
            for facet in [Facet::Year, Facet::Kind, Facet::Domain] {
                view.set_facet(facet, state.selection(facet).map(str::to_string));
            }
        }
        view.clear_filters();
        prop_assert_eq!(view.filtered().len(), records.len());
        prop_assert!(view.state().is_empty());
    }
}
