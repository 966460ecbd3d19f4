//! File output tests for schedb XML.

use std::fs;

use schedb_model::{Course, Department, Note, Schedule, Section};
use schedb_output::{OutputError, WriteOptions, write_schedule};

fn schedule_with_notes() -> Schedule {
    let mut course = Course::new("2000", "Studio", "1", "4", "pass-fail");
    course.sections.push(Section::new("1", "01", "10"));
    course.sections.push(Section::new("2", "02", "10"));
    course.notes = vec![Note::new("A"), Note::new("B"), Note::new("C")];
    let mut dept = Department::new("ARTS", "ARTS");
    dept.courses.push(course);
    let mut schedule = Schedule::new("Fri Oct 16 08:05:00 UTC 2026");
    schedule.departments.push(dept);
    schedule
}

#[test]
fn writes_document_and_creates_parent_directories() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("out").join("schedb.xml");

    write_schedule(&path, &schedule_with_notes(), &WriteOptions::default()).unwrap();

    let xml = fs::read_to_string(&path).unwrap();
    assert!(xml.starts_with("<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n"));
    assert!(xml.contains("grade-type=\"pass-fail\""));
    assert!(xml.ends_with("</schedb>\n"));
}

#[test]
fn notes_follow_all_sections() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("schedb.xml");

    write_schedule(&path, &schedule_with_notes(), &WriteOptions::default()).unwrap();

    let xml = fs::read_to_string(&path).unwrap();
    let last_section = xml.rfind("<section ").unwrap();
    let positions: Vec<usize> = ["<note>A</note>", "<note>B</note>", "<note>C</note>"]
        .iter()
        .map(|note| xml.find(note).unwrap())
        .collect();
    assert!(positions.iter().all(|&position| position > last_section));
    assert!(positions.windows(2).all(|pair| pair[0] < pair[1]));
}

#[test]
fn sections_without_periods_are_empty_elements() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("schedb.xml");

    write_schedule(&path, &schedule_with_notes(), &WriteOptions::default()).unwrap();

    let xml = fs::read_to_string(&path).unwrap();
    assert!(xml.contains("<section crn=\"1\" number=\"01\" seats=\"10\"/>"));
}

#[test]
fn unwritable_path_reports_write_error() {
    let dir = tempfile::tempdir().unwrap();
    let blocker = dir.path().join("file");
    fs::write(&blocker, "not a directory").unwrap();
    let path = blocker.join("schedb.xml");

    let error = write_schedule(&path, &schedule_with_notes(), &WriteOptions::default())
        .unwrap_err();

    assert!(matches!(error, OutputError::Write { .. }));
}
