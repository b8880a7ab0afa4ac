use chrono::NaiveDate;
use timeline_tool::{
    BarId, BarKind, Deliverable, ProjectMetadata, ProjectSnapshot, Task, TimelineFilter, User,
    WorkPackage, build_timeline, resolve,
};

fn d(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn sample_snapshot() -> ProjectSnapshot {
    let mut metadata = ProjectMetadata::default();
    metadata.project_start_date = Some(d(2024, 1, 1));

    let mut snapshot = ProjectSnapshot::new(metadata);
    snapshot.work_packages = vec![WorkPackage::new(1, "Requirements", 1, 3)];
    snapshot.tasks = vec![Task::new(5, "Interviews", 1, 1, 2)];
    snapshot.deliverables = vec![Deliverable::new(9, "Specification", 1, 4)];
    snapshot.users = vec![User::new(1, "Alice")];
    snapshot
}

#[test]
fn bar_id_display_uses_namespace_prefixes() {
    assert_eq!(BarId::WorkPackage(7).to_string(), "WP-7");
    assert_eq!(BarId::Task(12).to_string(), "T-12");
    assert_eq!(BarId::Deliverable(3).to_string(), "D-3");
}

#[test]
fn bar_id_parses_its_own_display_form() {
    for id in [BarId::WorkPackage(7), BarId::Task(12), BarId::Deliverable(3)] {
        assert_eq!(id.to_string().parse::<BarId>().unwrap(), id);
    }
}

#[test]
fn unknown_prefix_and_malformed_suffix_fail_to_parse() {
    assert!("X-1".parse::<BarId>().is_err());
    assert!("WP1".parse::<BarId>().is_err());
    assert!("WP-abc".parse::<BarId>().is_err());
    assert!("".parse::<BarId>().is_err());
    let err = "X-1".parse::<BarId>().unwrap_err();
    assert!(err.to_string().contains("unrecognized bar id"));
}

#[test]
fn every_built_bar_resolves_to_its_source_entity() {
    let snapshot = sample_snapshot();
    let bars = build_timeline(&snapshot, &TimelineFilter::default());
    assert!(!bars.is_empty());

    for bar in &bars {
        let entity = resolve(&snapshot, bar.id).expect("built bar must resolve");
        assert_eq!(entity.kind(), bar.kind);
        assert_eq!(entity.entity_id(), bar.id.entity_id());
        assert_eq!(entity.name(), bar.name);
    }
}

#[test]
fn resolver_selects_collection_by_namespace() {
    let snapshot = sample_snapshot();
    // Task and deliverable ids do not collide with work package ids even
    // when numerically equal namespaces would: T-5 is a task, never a WP.
    assert_eq!(
        resolve(&snapshot, BarId::Task(5)).unwrap().kind(),
        BarKind::Task
    );
    assert!(resolve(&snapshot, BarId::WorkPackage(5)).is_none());
    assert!(resolve(&snapshot, BarId::Deliverable(5)).is_none());
}

#[test]
fn unknown_id_resolves_to_none() {
    let snapshot = sample_snapshot();
    assert!(resolve(&snapshot, BarId::Task(999)).is_none());
}

#[test]
fn snapshot_resolve_bar_treats_malformed_ids_as_missing() {
    let snapshot = sample_snapshot();
    assert!(snapshot.resolve_bar("nonsense").is_none());
    assert!(snapshot.resolve_bar("T-999").is_none());

    let entity = snapshot.resolve_bar("WP-1").unwrap();
    assert_eq!(entity.kind(), BarKind::WorkPackage);
    assert_eq!(entity.name(), "Requirements");
}
