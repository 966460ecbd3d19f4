//! schedb XML generation.

use std::borrow::Cow;
use std::io::{self, Write};
use std::path::Path;

use quick_xml::Writer;
use quick_xml::escape::escape;
use quick_xml::events::attributes::Attribute;
use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, BytesText, Event};
use quick_xml::name::QName;
use schedb_model::{Course, Department, Period, Schedule, Section};
use tracing::info;

use crate::error::OutputError;

/// Options for schedb XML output.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WriteOptions {
    /// Spaces per nesting level.
    pub indent: usize,
}

impl Default for WriteOptions {
    fn default() -> Self {
        Self { indent: 2 }
    }
}

/// Write a schedule to `output_path`, creating parent directories.
///
/// The document is rendered in memory first; the file is only created once
/// serialization has succeeded.
pub fn write_schedule(
    output_path: &Path,
    schedule: &Schedule,
    options: &WriteOptions,
) -> Result<(), OutputError> {
    let bytes = schedule_to_bytes(schedule, options)?;
    if let Some(parent) = output_path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(|error| OutputError::write(parent, error))?;
    }
    std::fs::write(output_path, &bytes).map_err(|error| OutputError::write(output_path, error))?;
    info!(
        path = %output_path.display(),
        bytes = bytes.len(),
        departments = schedule.departments.len(),
        "schedule written"
    );
    Ok(())
}

pub fn schedule_to_string(
    schedule: &Schedule,
    options: &WriteOptions,
) -> Result<String, OutputError> {
    let bytes = schedule_to_bytes(schedule, options)?;
    String::from_utf8(bytes)
        .map_err(|error| OutputError::Serialize(io::Error::new(io::ErrorKind::InvalidData, error)))
}

/// Render a schedule as a complete XML document, ending with a newline.
pub fn schedule_to_bytes(
    schedule: &Schedule,
    options: &WriteOptions,
) -> Result<Vec<u8>, OutputError> {
    let mut xml = Writer::new_with_indent(Vec::new(), b' ', options.indent);
    xml.write_event(Event::Decl(BytesDecl::new("1.0", Some("UTF-8"), None)))?;

    let minutes = schedule.minutes_per_block.to_string();
    let mut root = BytesStart::new("schedb");
    root.push_attribute(attribute("generated", schedule.generated.as_str()));
    root.push_attribute(attribute("minutes-per-block", minutes.as_str()));
    write_element(&mut xml, root, schedule.departments.is_empty(), |xml| {
        for dept in &schedule.departments {
            write_department(xml, dept)?;
        }
        Ok(())
    })?;

    let mut bytes = xml.into_inner();
    bytes.push(b'\n');
    Ok(bytes)
}

fn write_department<W: Write>(xml: &mut Writer<W>, dept: &Department) -> Result<(), OutputError> {
    let mut start = BytesStart::new("dept");
    start.push_attribute(attribute("abbrev", dept.abbrev.as_str()));
    start.push_attribute(attribute("name", dept.name.as_str()));
    write_element(xml, start, dept.courses.is_empty(), |xml| {
        for course in &dept.courses {
            write_course(xml, course)?;
        }
        Ok(())
    })
}

fn write_course<W: Write>(xml: &mut Writer<W>, course: &Course) -> Result<(), OutputError> {
    let mut start = BytesStart::new("course");
    start.push_attribute(attribute("number", course.number.as_str()));
    start.push_attribute(attribute("name", course.name.as_str()));
    start.push_attribute(attribute("min-credits", course.min_credits.as_str()));
    start.push_attribute(attribute("max-credits", course.max_credits.as_str()));
    start.push_attribute(attribute("grade-type", course.grade_type.as_str()));
    let empty = course.sections.is_empty() && course.notes.is_empty();
    write_element(xml, start, empty, |xml| {
        for section in &course.sections {
            write_section(xml, section)?;
        }
        // Notes always follow every section of the course.
        for note in &course.notes {
            xml.write_event(Event::Start(BytesStart::new("note")))?;
            xml.write_event(Event::Text(BytesText::new(&note.text)))?;
            xml.write_event(Event::End(BytesEnd::new("note")))?;
        }
        Ok(())
    })
}

fn write_section<W: Write>(xml: &mut Writer<W>, section: &Section) -> Result<(), OutputError> {
    let mut start = BytesStart::new("section");
    start.push_attribute(attribute("crn", section.crn.as_str()));
    start.push_attribute(attribute("number", section.number.as_str()));
    start.push_attribute(attribute("seats", section.seats.as_str()));
    write_element(xml, start, section.periods.is_empty(), |xml| {
        for period in &section.periods {
            write_period(xml, period)?;
        }
        Ok(())
    })
}

fn write_period<W: Write>(xml: &mut Writer<W>, period: &Period) -> Result<(), OutputError> {
    let mut start = BytesStart::new("period");
    start.push_attribute(attribute("type", period.kind.as_str()));
    start.push_attribute(attribute("professor", period.professor.as_str()));
    start.push_attribute(attribute("days", period.days.as_str()));
    start.push_attribute(attribute("starts", period.starts.as_str()));
    start.push_attribute(attribute("ends", period.ends.as_str()));
    xml.write_event(Event::Empty(start))?;
    Ok(())
}

/// An attribute with markup escaped and whitespace control characters
/// written as character references, so readers do not normalize them away.
fn attribute<'a>(key: &'a str, value: &str) -> Attribute<'a> {
    let escaped = escape(value);
    let value = if escaped.contains(['\n', '\r', '\t']) {
        escaped
            .replace('\n', "&#10;")
            .replace('\r', "&#13;")
            .replace('\t', "&#9;")
    } else {
        escaped.into_owned()
    };
    Attribute {
        key: QName(key.as_bytes()),
        value: Cow::Owned(value.into_bytes()),
    }
}

/// Write `start` as an empty element, or as start tag, children, end tag.
fn write_element<W, F>(
    xml: &mut Writer<W>,
    start: BytesStart<'_>,
    empty: bool,
    children: F,
) -> Result<(), OutputError>
where
    W: Write,
    F: FnOnce(&mut Writer<W>) -> Result<(), OutputError>,
{
    if empty {
        xml.write_event(Event::Empty(start))?;
        return Ok(());
    }
    let end = start.to_end().into_owned();
    xml.write_event(Event::Start(start))?;
    children(xml)?;
    xml.write_event(Event::End(end))?;
    Ok(())
}
