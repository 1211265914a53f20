//! Document loading utilities
//!
//! `DocumentLoader` reads NamesList source from files, strings or any buffered reader and runs
//! the parser on it. Files are read line by line; the first I/O error ends the pass and is
//! reported instead of a document.
//!
//! # Example
//!
//! ```rust
//! use nameslist_parser::nameslist::loader::DocumentLoader;
//!
//! // From file
//! let doc = DocumentLoader::from_path("NamesList.txt").parse().unwrap();
//!
//! // From string
//! let doc = DocumentLoader::from_string("@@@\tTitle\n").parse().unwrap();
//! ```

use crate::nameslist::ast::Document;
use crate::nameslist::error::LoaderError;
use crate::nameslist::parsing::{parse_document, parse_str};
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::{Path, PathBuf};
use tracing::debug;

enum Source {
    Path(PathBuf),
    Text(String),
}

/// Document loader
pub struct DocumentLoader {
    source: Source,
}

impl DocumentLoader {
    /// Load from a file path. The file is opened when [DocumentLoader::parse] runs.
    pub fn from_path<P: AsRef<Path>>(path: P) -> Self {
        DocumentLoader {
            source: Source::Path(path.as_ref().to_path_buf()),
        }
    }

    /// Load from a string
    pub fn from_string<S: Into<String>>(source: S) -> Self {
        DocumentLoader {
            source: Source::Text(source.into()),
        }
    }

    /// Parse the source
    pub fn parse(&self) -> Result<Document, LoaderError> {
        match &self.source {
            Source::Path(path) => {
                debug!(path = %path.display(), "loading");
                let file = File::open(path).map_err(|source| LoaderError::File {
                    path: path.clone(),
                    source,
                })?;
                parse_reader(BufReader::new(file))
            }
            Source::Text(text) => Ok(parse_str(text)?),
        }
    }
}

/// Line iterator that parks the first I/O error instead of yielding it.
struct CheckedLines<B> {
    lines: io::Lines<B>,
    error: Option<io::Error>,
}

impl<B: BufRead> Iterator for CheckedLines<B> {
    type Item = String;

    fn next(&mut self) -> Option<String> {
        if self.error.is_some() {
            return None;
        }
        match self.lines.next()? {
            Ok(line) => Some(line),
            Err(err) => {
                self.error = Some(err);
                None
            }
        }
    }
}

/// Parse from a buffered reader, pulling lines as the parser needs them.
pub fn parse_reader<R: BufRead>(reader: R) -> Result<Document, LoaderError> {
    let mut lines = CheckedLines {
        lines: reader.lines(),
        error: None,
    };
    let parsed = parse_document(&mut lines);
    if let Some(err) = lines.error {
        return Err(LoaderError::Io(err));
    }
    Ok(parsed?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{Cursor, Read};

    #[test]
    fn test_from_string() {
        let doc = DocumentLoader::from_string("@@@\tTitle\n").parse().unwrap();
        assert_eq!(doc.title(), Some("Title"));
    }

    #[test]
    fn test_missing_file() {
        let err = DocumentLoader::from_path("definitely/not/here/NamesList.txt")
            .parse()
            .unwrap_err();
        assert!(err.is_not_found());
    }

    #[test]
    fn test_reader_with_crlf() {
        let doc = parse_reader(Cursor::new("@@@\tTitle\r\n@@\t0000\tA\t007F\r\n0041\tX\r\n")).unwrap();
        assert_eq!(doc.title(), Some("Title"));
        assert_eq!(doc.blocks().count(), 1);
    }

    struct FailingReader;

    impl Read for FailingReader {
        fn read(&mut self, _buf: &mut [u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::Other, "disk on fire"))
        }
    }

    #[test]
    fn test_io_error_is_reported() {
        let err = parse_reader(BufReader::new(FailingReader)).unwrap_err();
        assert!(matches!(err, LoaderError::Io(_)));
    }

    #[test]
    fn test_invalid_utf8_is_an_io_error() {
        let err = parse_reader(Cursor::new(vec![b'@', 0xFF, b'\n'])).unwrap_err();
        assert!(matches!(err, LoaderError::Io(_)));
    }
}
