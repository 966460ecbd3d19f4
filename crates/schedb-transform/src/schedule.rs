//! Top-level catalog conversion.
//!
//! Courses are grouped into department buckets keyed by their `dept` code.
//! A bucket is created the first time its code is seen and keeps that
//! position; later courses with the same code join it in encounter order.

use std::collections::HashMap;
use std::time::Instant;

use chrono::{DateTime, Utc};
use schedb_ingest::ElementLike;
use schedb_model::{ConvertOptions, Course, Department, Note, Schedule};
use tracing::{debug, info};

use crate::error::ConvertError;
use crate::fields::attribute_or_empty;
use crate::generated::resolve_generated;
use crate::normalization::{classify_grade_type, expand_abbreviation};
use crate::section::build_section;

/// Tag of the catalog root element.
pub const CATALOG_ROOT: &str = "CourseDB";

const COURSE_TAG: &str = "COURSE";
const SECTION_TAG: &str = "SECTION";

/// Convert a catalog root into a schedule, stamped with the current time
/// unless `options` or the catalog say otherwise.
pub fn build_schedule<E: ElementLike>(
    root: &E,
    options: &ConvertOptions,
) -> Result<Schedule, ConvertError> {
    build_schedule_at(root, options, Utc::now())
}

/// Convert a catalog root into a schedule, using `now` as the fallback
/// generation time.
///
/// # Errors
///
/// Returns [`ConvertError::UnexpectedRoot`] when the root is not `CourseDB`.
/// No partial schedule is produced in that case.
pub fn build_schedule_at<E: ElementLike>(
    root: &E,
    options: &ConvertOptions,
    now: DateTime<Utc>,
) -> Result<Schedule, ConvertError> {
    if root.tag() != CATALOG_ROOT {
        return Err(ConvertError::UnexpectedRoot {
            found: root.tag().to_string(),
        });
    }
    let start = Instant::now();
    let mut schedule = Schedule::new(resolve_generated(root, options, now));

    let mut buckets = DepartmentBuckets::default();
    for course in root.children_tagged(COURSE_TAG) {
        let dept = attribute_or_empty(course, "dept");
        let record = build_course(course);
        debug!(
            dept,
            course = %record.number,
            sections = record.sections.len(),
            notes = record.notes.len(),
            "course converted"
        );
        buckets.bucket(dept).courses.push(record);
    }
    schedule.departments = buckets.into_departments();

    info!(
        departments = schedule.departments.len(),
        courses = schedule.course_count(),
        sections = schedule.section_count(),
        duration_ms = start.elapsed().as_millis(),
        "catalog converted"
    );
    Ok(schedule)
}

fn build_course<E: ElementLike>(course: &E) -> Course {
    let mut record = Course::new(
        attribute_or_empty(course, "num"),
        attribute_or_empty(course, "name"),
        attribute_or_empty(course, "credmin"),
        attribute_or_empty(course, "credmax"),
        classify_grade_type(attribute_or_empty(course, "gradetype")),
    );
    let mut notes = Vec::new();
    for section in course.children_tagged(SECTION_TAG) {
        notes.extend(build_section(section, &mut record));
    }
    record.notes.extend(notes.into_iter().map(Note::new));
    record
}

/// Department buckets in first-seen order.
#[derive(Debug, Default)]
struct DepartmentBuckets {
    positions: HashMap<String, usize>,
    departments: Vec<Department>,
}

impl DepartmentBuckets {
    /// The bucket for `abbrev`, created on first sight.
    fn bucket(&mut self, abbrev: &str) -> &mut Department {
        let position = match self.positions.get(abbrev) {
            Some(&position) => position,
            None => {
                let position = self.departments.len();
                self.departments
                    .push(Department::new(abbrev, expand_abbreviation(abbrev)));
                self.positions.insert(abbrev.to_string(), position);
                debug!(dept = abbrev, position, "department bucket created");
                position
            }
        };
        &mut self.departments[position]
    }

    fn into_departments(self) -> Vec<Department> {
        self.departments
    }
}
