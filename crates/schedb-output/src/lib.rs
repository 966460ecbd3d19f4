//! Schedule database output.
//!
//! Serializes a [`schedb_model::Schedule`] as the schedb XML document:
//! an `encoding="UTF-8"` declaration followed by the
//! `schedb > dept > course > {section > period, note}` tree.

mod error;
mod schedb_xml;

pub use error::OutputError;
pub use schedb_xml::{WriteOptions, schedule_to_bytes, schedule_to_string, write_schedule};
