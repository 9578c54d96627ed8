use labsite_core::{
    normalize_entries, normalize_entry, DurationSpec, Project, Publication, RawEntry, YearValue,
};

fn mixed_publications() -> Vec<RawEntry<Publication>> {
    vec![
        RawEntry::Label("Plain label".to_string()),
        RawEntry::Record(Publication {
            title: "Structured".to_string(),
            year: Some(YearValue::Number(2021)),
            kind: Some("journal".to_string()),
            domain: Some("AI".to_string()),
            description: Some("desc".to_string()),
        }),
        RawEntry::Label(String::new()),
    ]
}

#[test]
fn label_entries_keep_only_title() {
    let records = normalize_entries(Some(mixed_publications().as_slice()));

    assert_eq!(records[0].title, "Plain label");
    assert_eq!(records[0].year, None);
    assert_eq!(records[0].kind, None);
    assert_eq!(records[0].domain, None);
    assert_eq!(records[0].description, None);
}

#[test]
fn structured_entries_pass_through_unchanged() {
    let entries = mixed_publications();
    let records = normalize_entries(Some(entries.as_slice()));

    match &entries[1] {
        RawEntry::Record(original) => assert_eq!(&records[1], original),
        other => panic!("unexpected entry: {other:?}"),
    }
}

#[test]
fn normalization_preserves_length_and_order() {
    let records = normalize_entries(Some(mixed_publications().as_slice()));
    let titles = records
        .iter()
        .map(|record| record.title.as_str())
        .collect::<Vec<_>>();
    assert_eq!(titles, vec!["Plain label", "Structured", ""]);
}

#[test]
fn normalization_is_idempotent() {
    let once = normalize_entries(Some(mixed_publications().as_slice()));
    let rewrapped = once
        .iter()
        .cloned()
        .map(RawEntry::from)
        .collect::<Vec<_>>();
    let twice = normalize_entries(Some(rewrapped.as_slice()));
    assert_eq!(once, twice);
}

#[test]
fn absent_collection_normalizes_to_empty() {
    assert!(normalize_entries::<Publication>(None).is_empty());
    assert!(normalize_entries::<Project>(Some(Vec::new().as_slice())).is_empty());
}

#[test]
fn project_label_has_no_period() {
    let project = normalize_entry::<Project>(RawEntry::Label("Infra".to_string()));
    assert_eq!(project.title, "Infra");
    assert_eq!(project.lead, None);
    assert_eq!(project.start, None);
    assert_eq!(project.end, None);
}

#[test]
fn json_collections_decode_both_shapes() {
    let entries: Vec<RawEntry<Project>> = serde_json::from_str(
        r#"["Bare", {"title": "Full", "lead": "Ana", "start": {"month": "3", "year": 2020}}]"#,
    )
    .unwrap();
    let records = normalize_entries(Some(entries.as_slice()));

    assert_eq!(records[0], Project {
        title: "Bare".to_string(),
        ..Project::default()
    });
    assert_eq!(records[1].lead.as_deref(), Some("Ana"));
    assert_eq!(
        records[1].start,
        Some(DurationSpec::month_year("3", 2020_i64))
    );
}

#[test]
fn record_without_title_gets_empty_title() {
    let entries: Vec<RawEntry<Publication>> =
        serde_json::from_str(r#"[{"year": 2018}]"#).unwrap();
    let records = normalize_entries(Some(entries.as_slice()));
    assert_eq!(records[0].title, "");
    assert_eq!(records[0].year, Some(YearValue::Number(2018)));
}

#[test]
fn unusual_json_values_still_normalize() {
    let publications: Vec<RawEntry<Publication>> = serde_json::from_str(
        r#"[{"title": "x", "year": 2020.0}, {"title": null, "year": 2021.5}]"#,
    )
    .unwrap();
    let records = normalize_entries(Some(publications.as_slice()));
    assert_eq!(records[0].year, Some(YearValue::Number(2020)));
    assert_eq!(records[1].title, "");
    assert_eq!(records[1].year, Some(YearValue::from("2021.5")));

    let projects: Vec<RawEntry<Project>> =
        serde_json::from_str(r#"[{"title": "P", "start": {"month": 3.0, "year": 2020}}]"#)
            .unwrap();
    let records = normalize_entries(Some(projects.as_slice()));
    assert_eq!(records[0].start, Some(DurationSpec::month_year(3_i64, 2020_i64)));
}
