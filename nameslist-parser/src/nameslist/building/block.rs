//! Block tree builder
//!
//!     Builds one `block_header` subtree from a header line and the block's content lines.
//!
//! Attachment
//!
//!     The format is flat, so parenthood is positional. The builder keeps a cursor made of:
//!
//!         - the current scope: the block header, or the most recent sub-header;
//!         - the last entry seen in that scope, if any.
//!
//!     Entries go into the current scope. Metadata and notice lines go into the last entry, or
//!     into the scope itself when no entry has been seen since the scope was opened. A
//!     sub-header opens a new scope and forgets the last entry.
//!
//!         @@      0000    Basic Latin     007F        scope = header
//!         @+              * notice                    -> header
//!         0020    SPACE                               -> header, last entry = 0020
//!                 x 00A0                              -> 0020
//!         @               Punctuation                 scope = sub-header, last entry = none
//!                 * comment                           -> sub-header
//!         0021    EXCLAMATION MARK                    -> sub-header
//!
//! Sub-header placement
//!
//!     Sub-headers are held aside while their scope is filled and appended to the block header
//!     once the whole block is read, in order of appearance. The block's direct children are
//!     therefore whatever was attached before the first sub-header, followed by all sub-headers.

use super::char_entry_info::{build_char_entry_info, build_notice_line};
use super::extraction::{after_first_word, fields, first_field, marker_payload};
use super::sanitize::sanitize;
use crate::nameslist::ast::{Attribute, Node, NodeKind};
use crate::nameslist::error::ParseError;
use crate::nameslist::lexing::{classify, first_word, LineType};
use crate::nameslist::syntax;
use tracing::{debug, info};

/// Build the block header node from its line: `@@ <start> <name> <end>`.
pub fn build_block_header(line: &str) -> Result<Node, ParseError> {
    let parts: Vec<&str> = fields(line).collect();
    match parts.as_slice() {
        [_, start, name, end, ..] => Ok(Node::new(NodeKind::BlockHeader)
            .with_attribute(Attribute::Name, sanitize(name))
            .with_attribute(Attribute::BlockStart, sanitize(start))
            .with_attribute(Attribute::BlockEnd, sanitize(end))),
        _ => Err(ParseError::MalformedBlockHeader {
            line: line.to_string(),
        }),
    }
}

/// Build a character entry from `<code point><tab><name>`.
///
/// Reserved names such as `<control>` go to the `type` attribute, everything else to `name`.
pub fn build_char_entry(line: &str) -> Node {
    let code_point = sanitize(first_word(line));
    let label = sanitize(first_field(after_first_word(line)));
    let label = label.trim_matches(|c: char| syntax::NAME_BRACKETS.contains(&c));

    let attribute = if syntax::CHAR_NAME_TYPES.contains(&label) {
        Attribute::Type
    } else {
        Attribute::Name
    };
    Node::new(NodeKind::CharEntry)
        .with_attribute(Attribute::CodePoint, code_point)
        .with_attribute(attribute, label)
}

/// Build a sub-header node from `@<tab><tab><label>`.
pub fn build_subheader(line: &str) -> Node {
    Node::new(NodeKind::BlockSubheader).with_attribute(Attribute::Name, sanitize(marker_payload(line)))
}

/// Where the next metadata line goes. Private to the builder; the tree never stores it.
#[derive(Debug, Default)]
struct Cursor {
    /// Index of the last entry in the current scope's children
    last_entry: Option<usize>,
}

/// Accumulates one block.
pub struct BlockBuilder {
    header: Node,
    subheaders: Vec<Node>,
    cursor: Cursor,
}

impl BlockBuilder {
    pub fn new(header_line: &str) -> Result<Self, ParseError> {
        Ok(Self {
            header: build_block_header(header_line)?,
            subheaders: Vec::new(),
            cursor: Cursor::default(),
        })
    }

    fn scope_mut(&mut self) -> &mut Node {
        match self.subheaders.last_mut() {
            Some(subheader) => subheader,
            None => &mut self.header,
        }
    }

    fn attachment_point(&mut self) -> &mut Node {
        let last_entry = self.cursor.last_entry;
        let scope = self.scope_mut();
        match last_entry {
            Some(index) if index < scope.children().len() => &mut scope.children_mut()[index],
            _ => scope,
        }
    }

    fn push_entry(&mut self, entry: Node) {
        let scope = self.scope_mut();
        scope.push_child(entry);
        let index = scope.children().len() - 1;
        self.cursor.last_entry = Some(index);
    }

    fn push_subheader(&mut self, subheader: Node) {
        self.subheaders.push(subheader);
        self.cursor = Cursor::default();
    }

    /// Process one content line.
    pub fn push_line(&mut self, line: &str) -> Result<(), ParseError> {
        match classify(line) {
            LineType::CodePoint => self.push_entry(build_char_entry(line)),
            LineType::CharEntryInfo(_) => {
                let node = build_char_entry_info(line)?;
                self.attachment_point().push_child(node);
            }
            LineType::NoticeLine => {
                let node = build_notice_line(line);
                self.attachment_point().push_child(node);
            }
            LineType::Subheader => self.push_subheader(build_subheader(line)),
            LineType::Title
            | LineType::Subtitle
            | LineType::BlockHeader
            | LineType::Unrecognized => info!("Ignoring line: {}", line.trim()),
        }
        Ok(())
    }

    /// Re-home the sub-headers under the block header and hand out the subtree.
    pub fn finish(mut self) -> Node {
        let subheaders = std::mem::take(&mut self.subheaders);
        for subheader in subheaders {
            self.header.push_child(subheader);
        }
        self.header
    }
}

/// Build the complete subtree of one block.
pub fn build_block<S: AsRef<str>>(header_line: &str, content: &[S]) -> Result<Node, ParseError> {
    let mut builder = BlockBuilder::new(header_line)?;
    for line in content {
        builder.push_line(line.as_ref())?;
    }
    let block = builder.finish();
    debug!(
        name = block.attribute(Attribute::Name).unwrap_or_default(),
        children = block.children().len(),
        "built block"
    );
    Ok(block)
}
