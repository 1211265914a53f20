//! Tree nodes

use super::vocabulary::{Attribute, Tag};
use serde::Serialize;
use std::collections::BTreeMap;
use std::fmt;

/// The variant of a node. Every variant maps to exactly one output [Tag].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum NodeKind {
    Title,
    Subtitle,
    BlockHeader,
    BlockSubheader,
    CharEntry,
    AliasLine,
    CrossRef,
    VariationLine,
    CommentLine,
    Decomposition,
    CompatMapping,
    FormalAliasLine,
    NoticeLine,
}

impl NodeKind {
    pub fn tag(self) -> Tag {
        match self {
            NodeKind::Title => Tag::Title,
            NodeKind::Subtitle => Tag::Subtitle,
            NodeKind::BlockHeader => Tag::BlockHeader,
            NodeKind::BlockSubheader => Tag::BlockSubheader,
            NodeKind::CharEntry => Tag::CharEntry,
            NodeKind::AliasLine => Tag::AliasLine,
            NodeKind::CrossRef => Tag::CrossRef,
            NodeKind::VariationLine => Tag::VariationLine,
            NodeKind::CommentLine => Tag::CommentLine,
            NodeKind::Decomposition => Tag::Decomposition,
            NodeKind::CompatMapping => Tag::CompatMapping,
            NodeKind::FormalAliasLine => Tag::FormalaliasLine,
            NodeKind::NoticeLine => Tag::NoticeLine,
        }
    }

    /// Whether this kind annotates an entry or scope (alias, cross reference, ..., notice)
    pub fn is_metadata(self) -> bool {
        matches!(
            self,
            NodeKind::AliasLine
                | NodeKind::CrossRef
                | NodeKind::VariationLine
                | NodeKind::CommentLine
                | NodeKind::Decomposition
                | NodeKind::CompatMapping
                | NodeKind::FormalAliasLine
                | NodeKind::NoticeLine
        )
    }
}

impl fmt::Display for NodeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self)
    }
}

/// A node of the document tree
///
/// Attributes are keyed by [Attribute], so a key can only appear once per node. They iterate
/// in the serialization order defined by `Attribute`'s `Ord`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Node {
    kind: NodeKind,
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    attributes: BTreeMap<Attribute, String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    text: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    children: Vec<Node>,
}

impl Node {
    pub fn new(kind: NodeKind) -> Self {
        Self {
            kind,
            attributes: BTreeMap::new(),
            text: None,
            children: Vec::new(),
        }
    }

    pub fn with_attribute(mut self, attribute: Attribute, value: impl Into<String>) -> Self {
        self.attributes.insert(attribute, value.into());
        self
    }

    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = Some(text.into());
        self
    }

    pub fn with_child(mut self, child: Node) -> Self {
        self.children.push(child);
        self
    }

    pub(crate) fn push_child(&mut self, child: Node) {
        self.children.push(child);
    }

    pub(crate) fn children_mut(&mut self) -> &mut Vec<Node> {
        &mut self.children
    }

    pub fn kind(&self) -> NodeKind {
        self.kind
    }

    pub fn tag(&self) -> Tag {
        self.kind.tag()
    }

    pub fn attribute(&self, attribute: Attribute) -> Option<&str> {
        self.attributes.get(&attribute).map(String::as_str)
    }

    pub fn has_attribute(&self, attribute: Attribute) -> bool {
        self.attributes.contains_key(&attribute)
    }

    /// Attributes in serialization order
    pub fn attributes(&self) -> impl Iterator<Item = (Attribute, &str)> {
        self.attributes.iter().map(|(k, v)| (*k, v.as_str()))
    }

    pub fn text(&self) -> Option<&str> {
        self.text.as_deref()
    }

    pub fn children(&self) -> &[Node] {
        &self.children
    }

    /// The most descriptive string for this node: its text, or its first naming attribute.
    pub fn display_label(&self) -> String {
        if let Some(text) = &self.text {
            return text.clone();
        }
        match self.kind {
            NodeKind::BlockHeader => format!(
                "{} ({}..{})",
                self.attribute(Attribute::Name).unwrap_or_default(),
                self.attribute(Attribute::BlockStart).unwrap_or_default(),
                self.attribute(Attribute::BlockEnd).unwrap_or_default()
            ),
            NodeKind::CharEntry => format!(
                "{} {}",
                self.attribute(Attribute::CodePoint).unwrap_or_default(),
                self.attribute(Attribute::Name)
                    .or_else(|| self.attribute(Attribute::Type))
                    .unwrap_or_default()
            ),
            _ => self
                .attributes
                .values()
                .next()
                .cloned()
                .unwrap_or_default(),
        }
    }
}
