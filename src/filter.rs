use crate::calendar::{DateWindow, ProjectCalendar};
use crate::deliverable::Deliverable;
use crate::task::Task;
use crate::work_package::{Status, WorkPackage};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StatusFilter {
    #[default]
    All,
    Only(Status),
}

impl StatusFilter {
    pub fn admits(&self, status: Status) -> bool {
        match self {
            StatusFilter::All => true,
            StatusFilter::Only(wanted) => status == *wanted,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UserFilter {
    #[default]
    All,
    Only(i32),
}

impl UserFilter {
    pub fn admits(&self, assigned: &[i32]) -> bool {
        match self {
            UserFilter::All => true,
            UserFilter::Only(user_id) => assigned.contains(user_id),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WorkPackageFilter {
    #[default]
    All,
    Selected(HashSet<i32>),
}

impl WorkPackageFilter {
    pub fn admits(&self, work_package_id: i32) -> bool {
        match self {
            WorkPackageFilter::All => true,
            WorkPackageFilter::Selected(allowed) => allowed.contains(&work_package_id),
        }
    }
}

/// The user-selected view state: one criterion per dimension plus the three
/// visibility toggles. All criteria are conjunctive.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TimelineFilter {
    pub status: StatusFilter,
    pub user: UserFilter,
    pub work_packages: WorkPackageFilter,
    pub window: DateWindow,
    pub show_work_packages: bool,
    pub show_tasks: bool,
    pub show_deliverables: bool,
}

impl Default for TimelineFilter {
    fn default() -> Self {
        Self {
            status: StatusFilter::All,
            user: UserFilter::All,
            work_packages: WorkPackageFilter::All,
            window: DateWindow::default(),
            show_work_packages: true,
            show_tasks: true,
            show_deliverables: true,
        }
    }
}

impl TimelineFilter {
    pub fn admits_work_package(&self, wp: &WorkPackage, calendar: &ProjectCalendar) -> bool {
        self.work_packages.admits(wp.id)
            && self.status.admits(wp.status)
            && self.user.admits(&wp.users)
            && self.window.overlaps(
                calendar.month_start(wp.start_month),
                calendar.month_end(wp.end_month),
            )
    }

    /// Criteria only; whether the parent work package made it onto the
    /// timeline is the builder's concern.
    pub fn admits_task(&self, task: &Task, calendar: &ProjectCalendar) -> bool {
        self.work_packages.admits(task.work_package)
            && self.status.admits(task.status)
            && self.user.admits(&task.users)
            && self.window.overlaps(
                calendar.month_start(task.start_month),
                calendar.month_end(task.end_month),
            )
    }

    pub fn admits_deliverable(&self, deliverable: &Deliverable, calendar: &ProjectCalendar) -> bool {
        // Deliverables carry no user assignment: any explicit member filter
        // hides all of them.
        matches!(self.user, UserFilter::All)
            && self.work_packages.admits(deliverable.work_package)
            && self
                .window
                .contains_point(calendar.deadline(deliverable.deadline_month))
    }
}
