//! Catalog XML reading with the `quick-xml` pull parser.

use std::path::Path;

use quick_xml::Reader;
use quick_xml::encoding::Decoder;
use quick_xml::escape::resolve_predefined_entity;
use quick_xml::events::{BytesRef, BytesStart, Event};
use tracing::debug;

use crate::error::IngestError;
use crate::tree::{XmlElement, XmlNode};

/// Read and parse a catalog document from disk.
///
/// The file is decoded according to its byte order mark or the `encoding`
/// of its XML declaration, defaulting to UTF-8.
pub fn read_catalog(path: &Path) -> Result<XmlElement, IngestError> {
    let bytes = std::fs::read(path).map_err(|error| IngestError::io(path, error))?;
    let root = parse_catalog_bytes(&bytes)?;
    debug!(
        path = %path.display(),
        root = root.name(),
        elements = root.element_count(),
        "catalog parsed"
    );
    Ok(root)
}

/// Parse an already decoded catalog document into its root element.
///
/// Text is kept verbatim, including whitespace between elements. Comments,
/// processing instructions and the doctype are dropped. An `encoding` in the
/// XML declaration is ignored.
pub fn parse_catalog(xml: &str) -> Result<XmlElement, IngestError> {
    build_tree(Reader::from_str(xml))
}

/// Parse raw catalog bytes, honouring a BOM or the declared `encoding`.
///
/// Encodings that keep markup ASCII-compatible (UTF-8, ISO-8859-x,
/// windows-125x and similar) are supported.
pub fn parse_catalog_bytes(bytes: &[u8]) -> Result<XmlElement, IngestError> {
    build_tree(Reader::from_reader(bytes))
}

fn build_tree(mut reader: Reader<&[u8]>) -> Result<XmlElement, IngestError> {
    let mut open: Vec<XmlElement> = Vec::new();
    let mut root: Option<XmlElement> = None;

    loop {
        let event = match reader.read_event() {
            Ok(event) => event,
            Err(source) => {
                return Err(IngestError::Xml {
                    position: reader.error_position(),
                    source,
                });
            }
        };
        match event {
            // The decoder switches once the declaration has been read.
            Event::Start(start) => open.push(element_from_start(&start, reader.decoder())?),
            Event::Empty(start) => {
                let element = element_from_start(&start, reader.decoder())?;
                attach(element, &mut open, &mut root)?;
            }
            Event::End(_) => {
                // quick-xml rejects mismatched end tags before we get here.
                if let Some(element) = open.pop() {
                    attach(element, &mut open, &mut root)?;
                }
            }
            Event::Text(text) => push_text(&mut open, &text.decode()?),
            Event::CData(data) => push_text(&mut open, &data.decode()?),
            Event::GeneralRef(reference) => {
                push_text(&mut open, &resolve_reference(&reference)?);
            }
            Event::Eof => break,
            _ => {}
        }
    }

    if let Some(unclosed) = open.pop() {
        return Err(IngestError::Unclosed {
            tag: unclosed.name().to_string(),
        });
    }
    root.ok_or(IngestError::MissingRoot)
}

fn element_from_start(
    start: &BytesStart<'_>,
    decoder: Decoder,
) -> Result<XmlElement, IngestError> {
    let qname = start.name();
    let name = decoder.decode(qname.as_ref())?;
    let mut element = XmlElement::new(name);
    for attribute in start.attributes() {
        let attribute = attribute?;
        let key = decoder.decode(attribute.key.as_ref())?;
        let value = attribute
            .decode_and_unescape_value(decoder)
            .map_err(IngestError::Escape)?;
        element.set_attribute(key, value);
    }
    Ok(element)
}

/// Attach a completed element to its parent, or make it the root.
fn attach(
    element: XmlElement,
    open: &mut [XmlElement],
    root: &mut Option<XmlElement>,
) -> Result<(), IngestError> {
    if let Some(parent) = open.last_mut() {
        parent.push_child(XmlNode::Element(element));
        return Ok(());
    }
    if root.is_some() {
        return Err(IngestError::TrailingElement {
            tag: element.name().to_string(),
        });
    }
    *root = Some(element);
    Ok(())
}

/// Text outside the root element is ignored.
fn push_text(open: &mut [XmlElement], text: &str) {
    if let Some(parent) = open.last_mut() {
        parent.push_text(text);
    }
}

fn resolve_reference(reference: &BytesRef<'_>) -> Result<String, IngestError> {
    if let Some(ch) = reference.resolve_char_ref().map_err(IngestError::Escape)? {
        return Ok(ch.to_string());
    }
    let name = reference.decode()?;
    resolve_predefined_entity(&name)
        .map(str::to_string)
        .ok_or_else(|| IngestError::UnknownEntity {
            name: name.into_owned(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tree::ElementLike;

    #[test]
    fn parses_nested_elements_and_attributes() {
        let root = parse_catalog(
            r#"<?xml version="1.0"?>
<CourseDB timestamp="1">
  <COURSE dept="CSCI" num="100"><SECTION crn="1"/></COURSE>
</CourseDB>"#,
        )
        .unwrap();
        assert_eq!(root.tag(), "CourseDB");
        assert_eq!(root.attribute("timestamp"), Some("1"));
        let course = root.child_elements().next().unwrap();
        assert_eq!(course.attribute("dept"), Some("CSCI"));
        assert_eq!(course.children_tagged("SECTION").count(), 1);
    }

    #[test]
    fn resolves_entities_in_text_and_attributes() {
        let root =
            parse_catalog(r#"<NOTE title="R&amp;D">Labs &amp; lectures &#x41;&#66;</NOTE>"#)
                .unwrap();
        assert_eq!(root.attribute("title"), Some("R&D"));
        assert_eq!(root.text(), "Labs & lectures AB");
    }

    #[test]
    fn keeps_cdata_verbatim() {
        let root = parse_catalog("<NOTE><![CDATA[a < b]]></NOTE>").unwrap();
        assert_eq!(root.text(), "a < b");
    }

    #[test]
    fn skips_comments() {
        let root = parse_catalog("<DAY><!-- monday -->0</DAY>").unwrap();
        assert_eq!(root.text(), "0");
    }

    #[test]
    fn rejects_empty_document() {
        assert!(matches!(
            parse_catalog("<?xml version=\"1.0\"?>\n"),
            Err(IngestError::MissingRoot)
        ));
    }

    #[test]
    fn rejects_second_root() {
        let error = parse_catalog("<CourseDB/><CourseDB/>").unwrap_err();
        assert!(matches!(error, IngestError::TrailingElement { tag } if tag == "CourseDB"));
    }

    #[test]
    fn rejects_mismatched_end_tag() {
        assert!(matches!(
            parse_catalog("<COURSE><SECTION></COURSE></SECTION>"),
            Err(IngestError::Xml { .. })
        ));
    }

    #[test]
    fn rejects_unknown_entity() {
        let error = parse_catalog("<NOTE>&nbsp;</NOTE>").unwrap_err();
        assert!(matches!(error, IngestError::UnknownEntity { name } if name == "nbsp"));
    }
}
