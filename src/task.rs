use crate::work_package::Status;
use serde::{Deserialize, Serialize};

/// Child of exactly one work package. A task only appears on the timeline
/// when its parent work package does.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Task {
    pub id: i32,
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub status: Status,
    #[serde(alias = "start_date")]
    pub start_month: i32,
    #[serde(alias = "end_date")]
    pub end_month: i32,
    #[serde(default)]
    pub users: Vec<i32>,
    pub work_package: i32,
}

impl Task {
    pub fn new(
        id: i32,
        name: impl Into<String>,
        work_package: i32,
        start_month: i32,
        end_month: i32,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            description: String::new(),
            status: Status::Active,
            start_month,
            end_month,
            users: Vec::new(),
            work_package,
        }
    }
}
