//! Format trait definition
//!
//! This module defines the core Format trait that all output formats implement.

use crate::error::FormatError;
use nameslist_parser::nameslist::Document;

/// Trait for output formats
///
/// # Examples
///
/// ```ignore
/// struct MyFormat;
///
/// impl Format for MyFormat {
///     fn name(&self) -> &str {
///         "my-format"
///     }
///
///     fn serialize(&self, doc: &Document) -> Result<String, FormatError> {
///         Ok(format!("{} nodes", doc.node_count()))
///     }
/// }
/// ```
pub trait Format: Send + Sync {
    /// The name of this format (e.g., "xml", "treeviz")
    fn name(&self) -> &str;

    /// Optional description of this format
    fn description(&self) -> &str {
        ""
    }

    /// File extensions for this format, primary first
    fn file_extensions(&self) -> &[&str] {
        &[]
    }

    /// Serialize a Document into text
    fn serialize(&self, doc: &Document) -> Result<String, FormatError>;
}
