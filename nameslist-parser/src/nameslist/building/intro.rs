//! Intro builder
//!
//! The intro is everything above the first block header. Only title and subtitle lines carry
//! structure; the rest is free-form commentary and is skipped without logging.

use super::extraction::marker_payload;
use super::sanitize::sanitize;
use crate::nameslist::ast::{Node, NodeKind};
use crate::nameslist::lexing::{classify, LineType};

/// Build the title / subtitle nodes of the intro segment, in file order.
pub fn build_intro<S: AsRef<str>>(lines: &[S]) -> Vec<Node> {
    lines
        .iter()
        .filter_map(|line| {
            let line = line.as_ref();
            let kind = match classify(line) {
                LineType::Title => NodeKind::Title,
                LineType::Subtitle => NodeKind::Subtitle,
                _ => return None,
            };
            Some(Node::new(kind).with_text(sanitize(marker_payload(line))))
        })
        .collect()
}
