use crate::calendar::ProjectCalendar;
use crate::filter::TimelineFilter;
use crate::snapshot::ProjectSnapshot;
use chrono::NaiveDate;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

/// Namespaced bar identifier. The three entity kinds share one flat output
/// list, so the id itself carries the kind; it renders as `WP-<id>`,
/// `T-<id>` or `D-<id>` and only takes that string shape at the
/// serialization boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BarId {
    WorkPackage(i32),
    Task(i32),
    Deliverable(i32),
}

impl BarId {
    pub fn kind(&self) -> BarKind {
        match self {
            BarId::WorkPackage(_) => BarKind::WorkPackage,
            BarId::Task(_) => BarKind::Task,
            BarId::Deliverable(_) => BarKind::Deliverable,
        }
    }

    pub fn entity_id(&self) -> i32 {
        match self {
            BarId::WorkPackage(id) | BarId::Task(id) | BarId::Deliverable(id) => *id,
        }
    }
}

impl fmt::Display for BarId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BarId::WorkPackage(id) => write!(f, "WP-{id}"),
            BarId::Task(id) => write!(f, "T-{id}"),
            BarId::Deliverable(id) => write!(f, "D-{id}"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseBarIdError {
    raw: String,
}

impl ParseBarIdError {
    fn new(raw: impl Into<String>) -> Self {
        Self { raw: raw.into() }
    }
}

impl fmt::Display for ParseBarIdError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unrecognized bar id '{}'", self.raw)
    }
}

impl std::error::Error for ParseBarIdError {}

impl FromStr for BarId {
    type Err = ParseBarIdError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        let (prefix, suffix) = raw.split_once('-').ok_or_else(|| ParseBarIdError::new(raw))?;
        let id = suffix
            .parse::<i32>()
            .map_err(|_| ParseBarIdError::new(raw))?;
        match prefix {
            "WP" => Ok(BarId::WorkPackage(id)),
            "T" => Ok(BarId::Task(id)),
            "D" => Ok(BarId::Deliverable(id)),
            _ => Err(ParseBarIdError::new(raw)),
        }
    }
}

impl Serialize for BarId {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for BarId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum BarKind {
    WorkPackage,
    Task,
    Deliverable,
}

impl BarKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            BarKind::WorkPackage => "work-package",
            BarKind::Task => "task",
            BarKind::Deliverable => "deliverable",
        }
    }
}

/// One timeline element, shaped for the chart collaborator: string id, ISO
/// calendar dates, kind under the `class_tag` wire name. Progress is a fixed
/// convention (100 for ranged bars, 0 for point deliverables), not computed
/// completion.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Bar {
    pub id: BarId,
    pub name: String,
    pub start: NaiveDate,
    pub end: NaiveDate,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parent: Option<BarId>,
    #[serde(rename = "class_tag")]
    pub kind: BarKind,
    pub progress: u8,
}

/// Rebuilds the full bar list from a snapshot and the current filter state.
///
/// Emits work packages first, then tasks, then deliverables, each group in
/// input order. A task bar is only emitted when its parent work package
/// produced a bar in this same build, so `parent` never dangles; a task whose
/// parent was filtered out, toggled off, or missing from the collection is
/// dropped. Without a project start date there is no calendar anchor and the
/// result is empty.
pub fn build_timeline(snapshot: &ProjectSnapshot, filter: &TimelineFilter) -> Vec<Bar> {
    let project_start = match snapshot.project_start() {
        Some(date) => date,
        None => return Vec::new(),
    };
    let calendar = ProjectCalendar::new(project_start);

    let mut bars = Vec::new();
    // Work-package id -> bar id, scoped to this build only.
    let mut wp_bar_ids: HashMap<i32, BarId> = HashMap::new();

    if filter.show_work_packages {
        for wp in &snapshot.work_packages {
            if !filter.admits_work_package(wp, &calendar) {
                continue;
            }
            let id = BarId::WorkPackage(wp.id);
            wp_bar_ids.insert(wp.id, id);
            bars.push(Bar {
                id,
                name: wp.name.clone(),
                start: calendar.month_start(wp.start_month),
                end: calendar.month_end(wp.end_month),
                parent: None,
                kind: BarKind::WorkPackage,
                progress: 100,
            });
        }
    }

    if filter.show_tasks {
        for task in &snapshot.tasks {
            let parent = match wp_bar_ids.get(&task.work_package) {
                Some(parent) => *parent,
                None => continue,
            };
            if !filter.admits_task(task, &calendar) {
                continue;
            }
            bars.push(Bar {
                id: BarId::Task(task.id),
                name: task.name.clone(),
                start: calendar.month_start(task.start_month),
                end: calendar.month_end(task.end_month),
                parent: Some(parent),
                kind: BarKind::Task,
                progress: 100,
            });
        }
    }

    if filter.show_deliverables {
        for deliverable in &snapshot.deliverables {
            if !filter.admits_deliverable(deliverable, &calendar) {
                continue;
            }
            let deadline = calendar.deadline(deliverable.deadline_month);
            bars.push(Bar {
                id: BarId::Deliverable(deliverable.id),
                name: deliverable.name.clone(),
                start: deadline,
                end: deadline,
                parent: None,
                kind: BarKind::Deliverable,
                progress: 0,
            });
        }
    }

    bars
}
