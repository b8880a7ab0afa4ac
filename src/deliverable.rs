use serde::{Deserialize, Serialize};

/// A point-in-time outcome owed by a work package. `deadline_month` is a
/// single project-month index, not a range, and deliverables carry no user
/// assignment or status.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Deliverable {
    pub id: i32,
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(alias = "deadline")]
    pub deadline_month: i32,
    pub work_package: i32,
}

impl Deliverable {
    pub fn new(id: i32, name: impl Into<String>, work_package: i32, deadline_month: i32) -> Self {
        Self {
            id,
            name: name.into(),
            description: String::new(),
            deadline_month,
            work_package,
        }
    }
}
