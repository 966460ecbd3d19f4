//! Course catalog ingestion.
//!
//! The catalog is consumed as a generic labeled tree: tag, ordered
//! attributes, ordered children, and text. [`ElementLike`] is the only
//! capability the conversion needs, so any parser can feed it.

pub mod error;
pub mod reader;
pub mod tree;

pub use error::IngestError;
pub use reader::{parse_catalog, parse_catalog_bytes, read_catalog};
pub use tree::{ElementLike, XmlElement, XmlNode};
