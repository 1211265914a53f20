//! Error types for parsing and loading

use std::path::PathBuf;
use thiserror::Error;

/// Fatal errors raised while building the tree.
///
/// Lines that simply do not match any role are not errors; they are logged and skipped.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// A metadata line reached the builder with a sign it has no node for. The classifier
    /// and the builder disagree on the sign vocabulary.
    #[error("unknown metadata kind in line: {line:?}")]
    UnknownMetadataKind { line: String },

    /// A block header without start, name and end fields
    #[error("malformed block header: {line:?}")]
    MalformedBlockHeader { line: String },
}

/// Errors that can occur when loading documents
#[derive(Error, Debug)]
pub enum LoaderError {
    #[error("failed to read '{path}': {source}")]
    File {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("parse error: {0}")]
    Parse(#[from] ParseError),
}

impl LoaderError {
    /// Whether the error means the input file does not exist
    pub fn is_not_found(&self) -> bool {
        match self {
            LoaderError::File { source, .. } | LoaderError::Io(source) => {
                source.kind() == std::io::ErrorKind::NotFound
            }
            LoaderError::Parse(_) => false,
        }
    }
}
