//! Integration tests for reading catalog documents from disk.

use std::fs;

use schedb_ingest::{ElementLike, IngestError, read_catalog};

const CATALOG: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<CourseDB timestamp="1282605551000">
  <COURSE name="Intro to Computer Science" dept="CSCI" num="1100" credmin="4" credmax="4" gradetype="">
    <SECTION crn="50001" num="01" seats="120">
      <PERIOD type="LEC" instructor="Goldschmidt" start="1000" end="1150">
        <DAY>1</DAY>
        <DAY>4</DAY>
      </PERIOD>
      <NOTE>Lab fee required</NOTE>
    </SECTION>
  </COURSE>
</CourseDB>
"#;

#[test]
fn reads_catalog_from_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("catalog.xml");
    fs::write(&path, CATALOG).unwrap();

    let root = read_catalog(&path).unwrap();

    assert_eq!(root.tag(), "CourseDB");
    let course = root.children_tagged("COURSE").next().unwrap();
    assert_eq!(course.attribute("name"), Some("Intro to Computer Science"));
    assert_eq!(course.attribute("gradetype"), Some(""));

    let section = course.children_tagged("SECTION").next().unwrap();
    let period = section.children_tagged("PERIOD").next().unwrap();
    let days: Vec<String> = period.children_tagged("DAY").map(|day| day.text()).collect();
    assert_eq!(days, vec!["1", "4"]);

    let note = section.children_tagged("NOTE").next().unwrap();
    assert_eq!(note.text(), "Lab fee required");
}

#[test]
fn whitespace_between_elements_is_preserved_as_text() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("catalog.xml");
    fs::write(&path, CATALOG).unwrap();

    let root = read_catalog(&path).unwrap();
    let section = root
        .children_tagged("COURSE")
        .flat_map(|course| course.children_tagged("SECTION"))
        .next()
        .unwrap();
    assert!(section.text().starts_with('\n'));
}

#[test]
fn missing_file_reports_path() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("absent.xml");

    let error = read_catalog(&path).unwrap_err();

    assert!(matches!(error, IngestError::Io { .. }));
    assert!(error.to_string().contains("absent.xml"));
}

#[test]
fn decodes_declared_latin1_encoding() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("latin1.xml");
    let mut bytes = b"<?xml version=\"1.0\" encoding=\"ISO-8859-1\"?>\n<CourseDB>\
<COURSE dept=\"LANG\" num=\"1010\" name=\"Fran"
        .to_vec();
    bytes.push(0xE7);
    bytes.extend_from_slice(b"ais\"><SECTION><NOTE>Caf");
    bytes.push(0xE9);
    bytes.extend_from_slice(b"</NOTE></SECTION></COURSE></CourseDB>\n");
    fs::write(&path, &bytes).unwrap();

    let root = read_catalog(&path).unwrap();

    let course = root.children_tagged("COURSE").next().unwrap();
    assert_eq!(course.attribute("name"), Some("Français"));
    assert_eq!(course.text(), "Café");
}

#[test]
fn invalid_utf8_is_a_decoding_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("broken.xml");
    fs::write(&path, b"<CourseDB><COURSE name=\"Fran\xE7ais\"/></CourseDB>").unwrap();

    let error = read_catalog(&path).unwrap_err();

    assert!(!matches!(error, IngestError::Io { .. }));
    assert!(!error.to_string().contains("cannot read"));
}
