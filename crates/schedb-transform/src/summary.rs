//! Record counts for a converted schedule.

use schedb_model::{Department, Schedule};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DepartmentSummary {
    pub abbrev: String,
    pub name: String,
    pub courses: usize,
    pub sections: usize,
    pub periods: usize,
    pub notes: usize,
}

impl DepartmentSummary {
    fn from_department(dept: &Department) -> Self {
        Self {
            abbrev: dept.abbrev.clone(),
            name: dept.name.clone(),
            courses: dept.courses.len(),
            sections: dept.section_count(),
            periods: dept.period_count(),
            notes: dept.note_count(),
        }
    }
}

/// Per-department counts, in schedule order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScheduleSummary {
    pub departments: Vec<DepartmentSummary>,
}

impl ScheduleSummary {
    pub fn from_schedule(schedule: &Schedule) -> Self {
        Self {
            departments: schedule
                .departments
                .iter()
                .map(DepartmentSummary::from_department)
                .collect(),
        }
    }

    /// Sum over all departments. `abbrev` and `name` are left empty.
    pub fn totals(&self) -> DepartmentSummary {
        self.departments
            .iter()
            .fold(DepartmentSummary::default(), |mut total, dept| {
                total.courses += dept.courses;
                total.sections += dept.sections;
                total.periods += dept.periods;
                total.notes += dept.notes;
                total
            })
    }
}
