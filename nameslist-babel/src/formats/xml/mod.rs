//! XML serialization
//!
//! The canonical output of the converter.
//!
//! ## Format
//!
//! - Node kind → element name (see [Tag])
//! - Attributes → sorted by name, values escaped
//! - Text → written inline between the tags
//! - Children → one element per line, one indent unit per depth
//! - Elements without text or children are self-closed
//!
//! ## Example
//!
//! ```text
//! <?xml version="1.0" encoding="UTF-8"?>
//! <ucd>
//!     <title>The Unicode Standard 15.0</title>
//!     <block_header block_end="007F" block_start="0000" name="Basic Latin">
//!         <char_entry code_point="0000" type="control">
//!             <alias_line name="NULL"/>
//!         </char_entry>
//!     </block_header>
//! </ucd>
//! ```

use crate::error::FormatError;
use crate::format::Format;
use nameslist_parser::nameslist::ast::{Document, Node, Tag};

const DECLARATION: &str = r#"<?xml version="1.0" encoding="UTF-8"?>"#;

struct XmlSerializer<'a> {
    output: String,
    indent: &'a str,
    indent_level: usize,
}

impl<'a> XmlSerializer<'a> {
    fn new(indent: &'a str) -> Self {
        Self {
            output: String::new(),
            indent,
            indent_level: 0,
        }
    }

    fn push_indent(&mut self) {
        for _ in 0..self.indent_level {
            self.output.push_str(self.indent);
        }
    }

    fn open_tag(&mut self, node: &Node) {
        self.push_indent();
        self.output.push('<');
        self.output.push_str(node.tag().as_str());
        for (attribute, value) in node.attributes() {
            self.output.push(' ');
            self.output.push_str(attribute.as_str());
            self.output.push_str("=\"");
            self.output.push_str(&escape_xml(value));
            self.output.push('"');
        }
    }

    fn close_tag(&mut self, tag: Tag) {
        self.output.push_str("</");
        self.output.push_str(tag.as_str());
        self.output.push_str(">\n");
    }

    fn serialize_node(&mut self, node: &Node) {
        self.open_tag(node);

        if node.text().is_none() && node.children().is_empty() {
            self.output.push_str("/>\n");
            return;
        }

        self.output.push('>');
        if let Some(text) = node.text() {
            self.output.push_str(&escape_xml(text));
        }

        if node.children().is_empty() {
            self.close_tag(node.tag());
        } else {
            self.output.push('\n');
            self.indent_level += 1;
            for child in node.children() {
                self.serialize_node(child);
            }
            self.indent_level -= 1;
            self.push_indent();
            self.close_tag(node.tag());
        }
    }
}

/// Serialize a document to XML
pub fn serialize_document(doc: &Document, indent: &str, declaration: bool) -> String {
    let mut serializer = XmlSerializer::new(indent);
    if declaration {
        serializer.output.push_str(DECLARATION);
        serializer.output.push('\n');
    }

    let root = doc.tag().as_str();
    if doc.children().is_empty() {
        serializer.output.push_str(&format!("<{}/>\n", root));
        return serializer.output;
    }

    serializer.output.push_str(&format!("<{}>\n", root));
    serializer.indent_level = 1;
    for node in doc.children() {
        serializer.serialize_node(node);
    }
    serializer.indent_level = 0;
    serializer.close_tag(doc.tag());
    serializer.output
}

/// Escape XML special characters
fn escape_xml(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('\"', "&quot;")
        .replace('\'', "&apos;")
}

/// Format implementation for XML output
#[derive(Debug, Clone)]
pub struct XmlFormat {
    indent: String,
    declaration: bool,
}

impl XmlFormat {
    pub fn new(indent: impl Into<String>, declaration: bool) -> Self {
        Self {
            indent: indent.into(),
            declaration,
        }
    }

    pub fn with_indent(mut self, indent: impl Into<String>) -> Self {
        self.indent = indent.into();
        self
    }

    pub fn with_declaration(mut self, declaration: bool) -> Self {
        self.declaration = declaration;
        self
    }
}

impl Default for XmlFormat {
    fn default() -> Self {
        Self::new("\t", true)
    }
}

impl Format for XmlFormat {
    fn name(&self) -> &str {
        "xml"
    }

    fn description(&self) -> &str {
        "NamesList data as XML, one element per source record"
    }

    fn file_extensions(&self) -> &[&str] {
        &["xml"]
    }

    fn serialize(&self, doc: &Document) -> Result<String, FormatError> {
        Ok(serialize_document(doc, &self.indent, self.declaration))
    }
}
