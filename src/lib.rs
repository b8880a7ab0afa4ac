pub mod calendar;
pub mod deliverable;
pub mod filter;
pub mod interchange;
pub mod metadata;
pub mod resolver;
pub mod snapshot;
pub(crate) mod snapshot_validation;
pub mod task;
pub mod timeline;
pub mod user;
pub mod work_package;

pub use calendar::{DateWindow, ProjectCalendar};
pub use deliverable::Deliverable;
pub use filter::{StatusFilter, TimelineFilter, UserFilter, WorkPackageFilter};
pub use interchange::{
    InterchangeError, load_snapshot_from_json, save_snapshot_to_json, save_timeline_to_csv,
    save_timeline_to_json,
};
pub use metadata::ProjectMetadata;
pub use resolver::{EntityRef, resolve};
pub use snapshot::ProjectSnapshot;
pub use task::Task;
pub use timeline::{Bar, BarId, BarKind, ParseBarIdError, build_timeline};
pub use user::User;
pub use work_package::{Status, WorkPackage};
