//! Document root and its assembler

use super::node::{Node, NodeKind};
use super::vocabulary::Tag;
use serde::Serialize;

/// A finished NamesList document.
///
/// Only obtainable through [DocumentAssembler::finalize]; exposes read-only access.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Document {
    children: Vec<Node>,
}

impl Document {
    /// The root element name
    pub fn tag(&self) -> Tag {
        Tag::Root
    }

    /// Top-level nodes in file order: titles, subtitles and blocks
    pub fn children(&self) -> &[Node] {
        &self.children
    }

    /// Block header nodes only
    pub fn blocks(&self) -> impl Iterator<Item = &Node> {
        self.children
            .iter()
            .filter(|n| n.kind() == NodeKind::BlockHeader)
    }

    pub fn title(&self) -> Option<&str> {
        self.children
            .iter()
            .find(|n| n.kind() == NodeKind::Title)
            .and_then(Node::text)
    }

    /// Total number of nodes below the root
    pub fn node_count(&self) -> usize {
        fn count(node: &Node) -> usize {
            1 + node.children().iter().map(count).sum::<usize>()
        }
        self.children.iter().map(count).sum()
    }
}

/// Owns the document root while the parse is in progress.
#[derive(Debug, Default)]
pub struct DocumentAssembler {
    children: Vec<Node>,
}

impl DocumentAssembler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a top-level node; nodes keep the order of the calls.
    pub fn add_top_level(&mut self, node: Node) {
        self.children.push(node);
    }

    pub fn len(&self) -> usize {
        self.children.len()
    }

    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }

    /// Close the assembler and hand out the document.
    pub fn finalize(self) -> Document {
        Document {
            children: self.children,
        }
    }
}
