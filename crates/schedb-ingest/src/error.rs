use std::path::PathBuf;

use quick_xml::encoding::EncodingError;
use quick_xml::events::attributes::AttrError;

#[derive(Debug, thiserror::Error)]
pub enum IngestError {
    #[error("cannot read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed XML at byte {position}: {source}")]
    Xml {
        position: u64,
        #[source]
        source: quick_xml::Error,
    },

    #[error("malformed attribute: {0}")]
    Attribute(#[from] AttrError),

    #[error("invalid text encoding: {0}")]
    Encoding(#[from] EncodingError),

    #[error("invalid escaped value: {0}")]
    Escape(#[source] quick_xml::Error),

    #[error("unknown entity reference &{name};")]
    UnknownEntity { name: String },

    #[error("document has no root element")]
    MissingRoot,

    #[error("unexpected element <{tag}> after the root element")]
    TrailingElement { tag: String },

    #[error("element <{tag}> is never closed")]
    Unclosed { tag: String },
}

impl IngestError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}
