use crate::deliverable::Deliverable;
use crate::snapshot::ProjectSnapshot;
use crate::task::Task;
use crate::timeline::{BarId, BarKind};
use crate::work_package::WorkPackage;

/// A resolved bar click: the originating entity together with its kind.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum EntityRef<'a> {
    WorkPackage(&'a WorkPackage),
    Task(&'a Task),
    Deliverable(&'a Deliverable),
}

impl<'a> EntityRef<'a> {
    pub fn kind(&self) -> BarKind {
        match self {
            EntityRef::WorkPackage(_) => BarKind::WorkPackage,
            EntityRef::Task(_) => BarKind::Task,
            EntityRef::Deliverable(_) => BarKind::Deliverable,
        }
    }

    pub fn entity_id(&self) -> i32 {
        match self {
            EntityRef::WorkPackage(wp) => wp.id,
            EntityRef::Task(task) => task.id,
            EntityRef::Deliverable(d) => d.id,
        }
    }

    pub fn name(&self) -> &'a str {
        match self {
            EntityRef::WorkPackage(wp) => &wp.name,
            EntityRef::Task(task) => &task.name,
            EntityRef::Deliverable(d) => &d.name,
        }
    }
}

/// Looks a bar id up in the collection its namespace selects. `None` means
/// no detail is available; the caller decides what to show.
pub fn resolve<'a>(snapshot: &'a ProjectSnapshot, id: BarId) -> Option<EntityRef<'a>> {
    match id {
        BarId::WorkPackage(wp_id) => snapshot.work_package(wp_id).map(EntityRef::WorkPackage),
        BarId::Task(task_id) => snapshot.task(task_id).map(EntityRef::Task),
        BarId::Deliverable(d_id) => snapshot.deliverable(d_id).map(EntityRef::Deliverable),
    }
}
