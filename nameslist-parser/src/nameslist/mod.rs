//! The NamesList format
//!
//!     NamesList.txt is published by the Unicode Consortium alongside the UCD. It is plain text,
//!     one record per line, and its structure is encoded entirely through line prefixes:
//!
//!         @@@     <tab> title
//!         @@@+    <tab> subtitle
//!         @@      <tab> block start <tab> block name <tab> block end
//!         @       <tab><tab> sub-header
//!         @+      <tab><tab> notice line (optionally starting with "*")
//!         XXXX    <tab> character name (4 to 6 hex digits)
//!         <tab>=  alias          <tab>x  cross reference
//!         <tab>~  variation      <tab>*  comment
//!         <tab>:  decomposition  <tab>#  compatibility mapping
//!         <tab>%  formal alias
//!
//!     Nothing is indented in a way that carries meaning: which entry a metadata line belongs to
//!     is implied by position only. The parser rebuilds the tree those positions imply. See
//!     [building::block] for the attachment rules.

pub mod ast;
pub mod building;
pub mod error;
pub mod lexing;
pub mod loader;
pub mod parsing;
pub mod syntax;
pub mod testing;

pub use ast::{Attribute, Document, Node, NodeKind, Tag};
pub use error::{LoaderError, ParseError};
pub use loader::DocumentLoader;
pub use parsing::{parse_document, parse_str};
