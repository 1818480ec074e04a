//! Error types for linkfield.

use thiserror::Error;

/// Result type for linkfield operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur while parsing a link-list field.
#[derive(Error, Debug)]
pub enum Error {
    /// The field value is not well-formed XML.
    #[error("Malformed link-list document: {0}")]
    MalformedDocument(#[from] roxmltree::Error),

    /// A `<link>` element carries a `linktype` that is not internal, media or external.
    #[error("Unknown link type: {0:?}")]
    UnknownLinkType(String),

    /// Error occurred during file I/O operations.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A catalog line could not be read.
    #[error("Invalid catalog entry on line {line}: {message}")]
    InvalidCatalog { line: usize, message: String },
}
