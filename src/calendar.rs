use chrono::{Months, NaiveDate};
use serde::{Deserialize, Serialize};

/// Maps project-month indices (counted from 1) onto calendar dates relative
/// to the project start.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProjectCalendar {
    project_start: NaiveDate,
}

impl ProjectCalendar {
    pub fn new(project_start: NaiveDate) -> Self {
        Self { project_start }
    }

    pub fn project_start(&self) -> NaiveDate {
        self.project_start
    }

    /// First day of a project month; month 1 begins exactly at project start.
    pub fn month_start(&self, month: i32) -> NaiveDate {
        offset_by_months(self.project_start, month - 1)
    }

    /// End of a ranged unit: one calendar month past its start, so a range
    /// whose start and end index coincide is exactly one month wide.
    pub fn month_end(&self, month: i32) -> NaiveDate {
        offset_by_months(self.project_start, month)
    }

    /// Deadlines land on the first day of their project month.
    pub fn deadline(&self, month: i32) -> NaiveDate {
        self.month_start(month)
    }
}

fn offset_by_months(base: NaiveDate, months: i32) -> NaiveDate {
    if months >= 0 {
        base.checked_add_months(Months::new(months as u32))
            .expect("month offset past representable dates")
    } else {
        base.checked_sub_months(Months::new(months.unsigned_abs()))
            .expect("month offset before representable dates")
    }
}

/// Optional lower/upper date bounds selected by the user. Either side may be
/// absent; an interval passes when it overlaps the window at all, so
/// partially visible ranges stay on the timeline.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct DateWindow {
    #[serde(default)]
    pub from: Option<NaiveDate>,
    #[serde(default)]
    pub to: Option<NaiveDate>,
}

impl DateWindow {
    pub fn new(from: Option<NaiveDate>, to: Option<NaiveDate>) -> Self {
        Self { from, to }
    }

    pub fn is_unbounded(&self) -> bool {
        self.from.is_none() && self.to.is_none()
    }

    pub fn overlaps(&self, start: NaiveDate, end: NaiveDate) -> bool {
        if let Some(from) = self.from {
            if end < from {
                return false;
            }
        }
        if let Some(to) = self.to {
            if start > to {
                return false;
            }
        }
        true
    }

    pub fn contains_point(&self, date: NaiveDate) -> bool {
        self.overlaps(date, date)
    }
}
