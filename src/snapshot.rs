use crate::deliverable::Deliverable;
use crate::metadata::ProjectMetadata;
use crate::resolver::{self, EntityRef};
use crate::task::Task;
use crate::timeline::BarId;
use crate::user::User;
use crate::work_package::WorkPackage;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// The data layer's response, held read-only for the duration of a build:
/// project metadata plus the four entity collections. New data replaces the
/// whole snapshot; a build never mixes old and new collections.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProjectSnapshot {
    #[serde(default)]
    pub metadata: ProjectMetadata,
    #[serde(default)]
    pub work_packages: Vec<WorkPackage>,
    #[serde(default)]
    pub tasks: Vec<Task>,
    #[serde(default)]
    pub deliverables: Vec<Deliverable>,
    #[serde(default)]
    pub users: Vec<User>,
}

impl ProjectSnapshot {
    pub fn new(metadata: ProjectMetadata) -> Self {
        Self {
            metadata,
            ..Default::default()
        }
    }

    pub fn project_start(&self) -> Option<NaiveDate> {
        self.metadata.project_start_date
    }

    pub fn work_package(&self, id: i32) -> Option<&WorkPackage> {
        self.work_packages.iter().find(|wp| wp.id == id)
    }

    pub fn task(&self, id: i32) -> Option<&Task> {
        self.tasks.iter().find(|task| task.id == id)
    }

    pub fn deliverable(&self, id: i32) -> Option<&Deliverable> {
        self.deliverables.iter().find(|d| d.id == id)
    }

    pub fn user(&self, id: i32) -> Option<&User> {
        self.users.iter().find(|user| user.id == id)
    }

    /// Display name for an assigned-user id, for detail rendering.
    pub fn user_name(&self, id: i32) -> Option<&str> {
        self.user(id).map(|user| user.name.as_str())
    }

    /// Click handling in one step: parse the raw bar id and look the entity
    /// up. A malformed id resolves to `None` just like an unknown one.
    pub fn resolve_bar(&self, raw: &str) -> Option<EntityRef<'_>> {
        raw.parse::<BarId>()
            .ok()
            .and_then(|id| resolver::resolve(self, id))
    }
}
