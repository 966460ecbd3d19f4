use schedb_ingest::ElementLike;
use tracing::warn;

/// Attribute value, or empty when the attribute is absent.
pub(crate) fn attribute_or_empty<'a, E: ElementLike>(element: &'a E, name: &str) -> &'a str {
    match element.attribute(name) {
        Some(value) => value,
        None => {
            warn!(
                element = element.tag(),
                attribute = name,
                "missing attribute, using empty value"
            );
            ""
        }
    }
}
