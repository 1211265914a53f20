//! Fluent assertion API for document trees

use crate::nameslist::ast::{Attribute, Document, Node, NodeKind};

/// Create an assertion builder for a document
pub fn assert_doc(doc: &Document) -> DocumentAssertion<'_> {
    DocumentAssertion { doc }
}

fn summarize(nodes: &[Node]) -> String {
    nodes
        .iter()
        .map(|n| format!("{}({})", n.kind(), n.display_label()))
        .collect::<Vec<_>>()
        .join(", ")
}

pub struct DocumentAssertion<'a> {
    doc: &'a Document,
}

impl<'a> DocumentAssertion<'a> {
    pub fn item_count(self, expected: usize) -> Self {
        let actual = self.doc.children().len();
        assert_eq!(
            actual,
            expected,
            "Expected {} top-level nodes, found {}: [{}]",
            expected,
            actual,
            summarize(self.doc.children())
        );
        self
    }

    pub fn item<F>(self, index: usize, assertion: F) -> Self
    where
        F: FnOnce(NodeAssertion<'a>),
    {
        let children = self.doc.children();
        assert!(
            index < children.len(),
            "Item index {} out of bounds ({} top-level nodes)",
            index,
            children.len()
        );
        assertion(NodeAssertion {
            node: &children[index],
            context: format!("ucd[{}]", index),
        });
        self
    }

    pub fn title(self, expected: &str) -> Self {
        assert_eq!(
            self.doc.title(),
            Some(expected),
            "Expected document title '{}'",
            expected
        );
        self
    }

    pub fn block_count(self, expected: usize) -> Self {
        let actual = self.doc.blocks().count();
        assert_eq!(actual, expected, "Expected {} blocks, found {}", expected, actual);
        self
    }
}

pub struct NodeAssertion<'a> {
    node: &'a Node,
    context: String,
}

impl<'a> NodeAssertion<'a> {
    pub fn kind(self, expected: NodeKind) -> Self {
        assert_eq!(
            self.node.kind(),
            expected,
            "{}: Expected {}, found {}",
            self.context,
            expected,
            self.node.kind()
        );
        self
    }

    pub fn attr(self, attribute: Attribute, expected: &str) -> Self {
        let actual = self.node.attribute(attribute);
        assert_eq!(
            actual,
            Some(expected),
            "{}: Expected {}='{}', got {:?}",
            self.context,
            attribute,
            expected,
            actual
        );
        self
    }

    pub fn no_attr(self, attribute: Attribute) -> Self {
        assert!(
            !self.node.has_attribute(attribute),
            "{}: Expected no {} attribute, got {:?}",
            self.context,
            attribute,
            self.node.attribute(attribute)
        );
        self
    }

    pub fn text(self, expected: &str) -> Self {
        assert_eq!(
            self.node.text(),
            Some(expected),
            "{}: Expected text '{}'",
            self.context,
            expected
        );
        self
    }

    pub fn child_count(self, expected: usize) -> Self {
        let actual = self.node.children().len();
        assert_eq!(
            actual,
            expected,
            "{}: Expected {} children, found {}: [{}]",
            self.context,
            expected,
            actual,
            summarize(self.node.children())
        );
        self
    }

    pub fn child_kinds(self, expected: &[NodeKind]) -> Self {
        let actual: Vec<_> = self.node.children().iter().map(Node::kind).collect();
        assert_eq!(
            actual, expected,
            "{}: Unexpected children [{}]",
            self.context,
            summarize(self.node.children())
        );
        self
    }

    pub fn child<F>(self, index: usize, assertion: F) -> Self
    where
        F: FnOnce(NodeAssertion<'a>),
    {
        let children = self.node.children();
        assert!(
            index < children.len(),
            "{}: Child index {} out of bounds ({} children)",
            self.context,
            index,
            children.len()
        );
        let child = &children[index];
        assertion(NodeAssertion {
            node: child,
            context: format!("{}/{}[{}]", self.context, child.tag(), index),
        });
        self
    }
}
