//! Resolution of the schedb `generated` attribute.

use chrono::{DateTime, Utc};
use schedb_ingest::ElementLike;
use schedb_model::ConvertOptions;

/// `chrono` format of generated timestamps, e.g. `Mon Aug 23 19:19:11 UTC 2010`.
pub const GENERATED_FORMAT: &str = "%a %b %d %H:%M:%S UTC %Y";

/// Catalog root attribute carrying the export time in epoch milliseconds.
const TIMESTAMP_ATTRIBUTE: &str = "timestamp";

/// Pick the `generated` value for a conversion.
///
/// An explicit value in `options` wins, then the catalog's export
/// timestamp, then `now`.
pub fn resolve_generated<E: ElementLike>(
    root: &E,
    options: &ConvertOptions,
    now: DateTime<Utc>,
) -> String {
    if let Some(generated) = &options.generated {
        return generated.clone();
    }
    let exported = root
        .attribute(TIMESTAMP_ATTRIBUTE)
        .and_then(parse_epoch_millis);
    format_generated(exported.unwrap_or(now))
}

pub fn format_generated(at: DateTime<Utc>) -> String {
    at.format(GENERATED_FORMAT).to_string()
}

fn parse_epoch_millis(raw: &str) -> Option<DateTime<Utc>> {
    let millis: i64 = raw.trim().parse().ok()?;
    if millis <= 0 {
        return None;
    }
    DateTime::from_timestamp_millis(millis)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use schedb_ingest::XmlElement;

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 10, 16, 8, 5, 0).unwrap()
    }

    #[test]
    fn explicit_value_wins() {
        let root = XmlElement::new("CourseDB").with_attribute("timestamp", "1282605551000");
        let options = ConvertOptions::new().with_generated("fixed");
        assert_eq!(resolve_generated(&root, &options, now()), "fixed");
    }

    #[test]
    fn catalog_timestamp_is_used() {
        let root = XmlElement::new("CourseDB").with_attribute("timestamp", "1282605551000");
        assert_eq!(
            resolve_generated(&root, &ConvertOptions::default(), now()),
            "Mon Aug 23 23:19:11 UTC 2010"
        );
    }

    #[test]
    fn falls_back_to_now() {
        let options = ConvertOptions::default();
        for stamp in ["", "0", "-5", "soon"] {
            let root = XmlElement::new("CourseDB").with_attribute("timestamp", stamp);
            assert_eq!(
                resolve_generated(&root, &options, now()),
                "Fri Oct 16 08:05:00 UTC 2026"
            );
        }
        let root = XmlElement::new("CourseDB");
        assert_eq!(
            resolve_generated(&root, &options, now()),
            "Fri Oct 16 08:05:00 UTC 2026"
        );
    }
}
