//! `SECTION` to `section` conversion.

use schedb_ingest::ElementLike;
use schedb_model::{Course, Section};

use crate::fields::attribute_or_empty;
use crate::period::build_period;

const PERIOD_TAG: &str = "PERIOD";
const NOTE_TAG: &str = "NOTE";

/// Append a `section` built from a catalog `SECTION` to `course`.
///
/// Periods are attached to the section in document order. Notes are not
/// attached here: their text is returned, in document order, so the course
/// can place them after all of its sections.
pub fn build_section<E: ElementLike>(section: &E, course: &mut Course) -> Vec<String> {
    let mut record = Section::new(
        attribute_or_empty(section, "crn"),
        attribute_or_empty(section, "num"),
        attribute_or_empty(section, "seats"),
    );
    let mut notes = Vec::new();
    for child in section.child_elements() {
        match child.tag() {
            PERIOD_TAG => record.periods.push(build_period(child)),
            NOTE_TAG => notes.push(child.text()),
            _ => {}
        }
    }
    course.sections.push(record);
    notes
}
