use crate::snapshot::ProjectSnapshot;
use std::collections::HashSet;
use std::fmt;

#[derive(Debug, Clone)]
pub struct SnapshotValidationError {
    message: String,
}

impl SnapshotValidationError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl fmt::Display for SnapshotValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for SnapshotValidationError {}

fn validate_month_range(
    kind: &str,
    id: i32,
    start_month: i32,
    end_month: i32,
) -> Result<(), SnapshotValidationError> {
    if start_month < 1 {
        return Err(SnapshotValidationError::new(format!(
            "{kind} {id} has start_month {start_month} (month indices count from 1)"
        )));
    }
    if end_month < start_month {
        return Err(SnapshotValidationError::new(format!(
            "{kind} {id} has end_month {end_month} before start_month {start_month}"
        )));
    }
    Ok(())
}

/// Checks a snapshot at the interchange boundary: unique ids per collection
/// and month indices the date math can anchor. Dangling work_package
/// references are deliberately not rejected; the builder drops those orphans
/// at link time.
pub fn validate_snapshot(snapshot: &ProjectSnapshot) -> Result<(), SnapshotValidationError> {
    let mut wp_ids = HashSet::with_capacity(snapshot.work_packages.len());
    for wp in &snapshot.work_packages {
        if !wp_ids.insert(wp.id) {
            return Err(SnapshotValidationError::new(format!(
                "duplicate work package id {}",
                wp.id
            )));
        }
        validate_month_range("work package", wp.id, wp.start_month, wp.end_month)?;
    }

    let mut task_ids = HashSet::with_capacity(snapshot.tasks.len());
    for task in &snapshot.tasks {
        if !task_ids.insert(task.id) {
            return Err(SnapshotValidationError::new(format!(
                "duplicate task id {}",
                task.id
            )));
        }
        validate_month_range("task", task.id, task.start_month, task.end_month)?;
    }

    let mut deliverable_ids = HashSet::with_capacity(snapshot.deliverables.len());
    for deliverable in &snapshot.deliverables {
        if !deliverable_ids.insert(deliverable.id) {
            return Err(SnapshotValidationError::new(format!(
                "duplicate deliverable id {}",
                deliverable.id
            )));
        }
        if deliverable.deadline_month < 1 {
            return Err(SnapshotValidationError::new(format!(
                "deliverable {} has deadline_month {} (month indices count from 1)",
                deliverable.id, deliverable.deadline_month
            )));
        }
    }

    let mut user_ids = HashSet::with_capacity(snapshot.users.len());
    for user in &snapshot.users {
        if !user_ids.insert(user.id) {
            return Err(SnapshotValidationError::new(format!(
                "duplicate user id {}",
                user.id
            )));
        }
    }

    Ok(())
}
