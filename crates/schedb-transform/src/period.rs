//! `PERIOD` to `period` conversion.

use schedb_ingest::ElementLike;
use schedb_model::Period;
use tracing::{debug, warn};

use crate::fields::attribute_or_empty;
use crate::normalization::{
    TBA, convert_time, decode_days, expand_abbreviation, is_known_abbreviation,
};

/// Build one `period` record from a catalog `PERIOD` element.
///
/// Missing attributes become empty values; nothing here fails.
pub fn build_period<E: ElementLike>(period: &E) -> Period {
    let kind = attribute_or_empty(period, "type");
    let instructor = attribute_or_empty(period, "instructor");
    let start = attribute_or_empty(period, "start");
    let end = attribute_or_empty(period, "end");

    if !is_known_abbreviation(kind) {
        debug!(code = kind, "unhandled period type code, keeping it as is");
    }
    let starts = convert_time(start);
    let ends = convert_time(end);
    for (raw, converted) in [(start, &starts), (end, &ends)] {
        if !raw.is_empty() && raw != TBA && raw == converted.as_str() {
            warn!(time = raw, "undecodable time code, keeping it as is");
        }
    }

    Period {
        kind: expand_abbreviation(kind).to_string(),
        professor: instructor.to_string(),
        days: decode_days(period.child_elements()).to_string(),
        starts,
        ends,
    }
}
