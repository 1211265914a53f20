//! JSON dump of the document tree
//!
//! A direct serde serialization of [Document]: nodes carry their `kind`, an `attributes` map
//! keyed by attribute name, optional `text` and `children`. Empty fields are omitted.

use crate::error::FormatError;
use crate::format::Format;
use nameslist_parser::nameslist::ast::Document;

pub struct JsonFormat;

impl Format for JsonFormat {
    fn name(&self) -> &str {
        "json"
    }

    fn description(&self) -> &str {
        "Document tree as pretty-printed JSON"
    }

    fn file_extensions(&self) -> &[&str] {
        &["json"]
    }

    fn serialize(&self, doc: &Document) -> Result<String, FormatError> {
        serde_json::to_string_pretty(doc).map_err(|e| FormatError::Serialization(e.to_string()))
    }
}
