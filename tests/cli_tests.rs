use assert_cmd::Command;
use chrono::NaiveDate;
use predicates::str::contains as str_contains;
use timeline_tool::{
    Deliverable, ProjectMetadata, ProjectSnapshot, Status, Task, User, WorkPackage,
    save_snapshot_to_json,
};

#[allow(deprecated)]
fn run_cli(script: &str) -> assert_cmd::assert::Assert {
    let mut cmd = Command::cargo_bin("cli").expect("cli binary");
    cmd.write_stdin(script.to_string()).assert()
}

fn d(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn sample_snapshot() -> ProjectSnapshot {
    let mut metadata = ProjectMetadata::default();
    metadata.project_name = "CLI Project".into();
    metadata.project_start_date = Some(d(2024, 1, 1));

    let mut snapshot = ProjectSnapshot::new(metadata);

    let mut wp1 = WorkPackage::new(1, "Requirements", 1, 3);
    wp1.users = vec![1];
    let mut wp2 = WorkPackage::new(2, "Implementation", 2, 6);
    wp2.status = Status::Closed;
    snapshot.work_packages = vec![wp1, wp2];

    let mut t5 = Task::new(5, "Interviews", 1, 1, 2);
    t5.users = vec![1];
    let mut t6 = Task::new(6, "Prototype", 2, 2, 4);
    t6.status = Status::Closed;
    snapshot.tasks = vec![t5, t6];

    snapshot.deliverables = vec![Deliverable::new(9, "Specification", 1, 4)];
    snapshot.users = vec![User::new(1, "Alice")];
    snapshot
}

#[test]
fn cli_prints_help() {
    run_cli("help\nquit\n")
        .success()
        .stdout(str_contains("Rebuild and show the timeline"));
}

#[test]
fn cli_reports_missing_project_start() {
    run_cli("show\nquit\n")
        .success()
        .stdout(str_contains("No project start date set; timeline is empty."));
}

#[test]
fn cli_rejects_unknown_commands() {
    run_cli("bogus\nquit\n")
        .success()
        .stdout(str_contains("Unknown command 'bogus'"));
}

#[test]
fn cli_loads_snapshot_and_resolves_bars() {
    let dir = tempfile::tempdir().expect("create temp dir");
    let snap_path = dir.path().join("snapshot.json");
    save_snapshot_to_json(&sample_snapshot(), &snap_path).unwrap();

    let script = format!(
        "load {}\nresolve WP-1\nresolve T-999\nquit\n",
        snap_path.display()
    );
    run_cli(&script)
        .success()
        .stdout(str_contains("Snapshot loaded from"))
        .stdout(str_contains("WP-1"))
        .stdout(str_contains("WorkPackage 1 — Requirements"))
        .stdout(str_contains("members    : Alice"))
        .stdout(str_contains("No entity found for bar id 'T-999'."));
}

#[test]
fn cli_filters_flow_into_exports() {
    let dir = tempfile::tempdir().expect("create temp dir");
    let snap_path = dir.path().join("snapshot.json");
    let out_path = dir.path().join("timeline.json");
    save_snapshot_to_json(&sample_snapshot(), &snap_path).unwrap();

    let script = format!(
        "load {}\nstatus closed\nexport json {}\nquit\n",
        snap_path.display(),
        out_path.display()
    );
    run_cli(&script).success().stdout(str_contains("Exported"));

    let exported: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(&out_path).unwrap()).unwrap();
    let ids: Vec<&str> = exported
        .as_array()
        .unwrap()
        .iter()
        .map(|record| record["id"].as_str().unwrap())
        .collect();
    // Status filtering drops the active work package and its task but never
    // touches deliverables.
    assert_eq!(ids, vec!["WP-2", "T-6", "D-9"]);
}

#[test]
fn cli_sets_project_start_for_empty_snapshot() {
    run_cli("meta start 2024-01-01\nmeta show\nquit\n")
        .success()
        .stdout(str_contains("Project start date set to 2024-01-01."))
        .stdout(str_contains("Project start date : 2024-01-01"));
}
