//! Treeviz formatter for NamesList documents
//!
//! Treeviz is a visual representation of the tree with one line per node, which makes it quick
//! to check where the positional rules put a metadata line.
//!
//! So the format is :
//! <indentation>(per level) <icon><space><label> (truncated to 30 characters)
//!
//! Example:
//!
//! ⧉ The Unicode Standard 15.0
//! ├─ ⊤ The Unicode Standard 15.0
//! └─ § Basic Latin (0000..007F)
//!   ├─ • 0000 control
//!   │ └─ = NULL
//!   └─ ¶ ASCII punctuation and symbols
//!     └─ • 0021 EXCLAMATION MARK
//!
//! Icons
//!     Document: ⧉
//!     Title: ⊤
//!     Subtitle: ⊥
//!     BlockHeader: §
//!     BlockSubheader: ¶
//!     CharEntry: •
//!     NoticeLine: ※
//!     AliasLine: =
//!     FormalAliasLine: %
//!     CrossRef: →
//!     VariationLine: ~
//!     CommentLine: *
//!     Decomposition: ≡
//!     CompatMapping: ≈

use crate::error::FormatError;
use crate::format::Format;
use nameslist_parser::nameslist::ast::{Document, Node, NodeKind};

const LABEL_WIDTH: usize = 30;

fn truncate(s: &str, max_chars: usize) -> String {
    if s.chars().count() > max_chars {
        let mut truncated = s.chars().take(max_chars).collect::<String>();
        truncated.push_str("...");
        truncated
    } else {
        s.to_string()
    }
}

/// Get the icon for a node kind
fn get_icon(kind: NodeKind) -> &'static str {
    match kind {
        NodeKind::Title => "⊤",
        NodeKind::Subtitle => "⊥",
        NodeKind::BlockHeader => "§",
        NodeKind::BlockSubheader => "¶",
        NodeKind::CharEntry => "•",
        NodeKind::NoticeLine => "※",
        NodeKind::AliasLine => "=",
        NodeKind::FormalAliasLine => "%",
        NodeKind::CrossRef => "→",
        NodeKind::VariationLine => "~",
        NodeKind::CommentLine => "*",
        NodeKind::Decomposition => "≡",
        NodeKind::CompatMapping => "≈",
    }
}

fn format_node(output: &mut String, node: &Node, prefix: &str, is_last: bool) {
    let connector = if is_last { "└─" } else { "├─" };
    output.push_str(&format!(
        "{}{} {} {}\n",
        prefix,
        connector,
        get_icon(node.kind()),
        truncate(&node.display_label(), LABEL_WIDTH)
    ));

    let child_prefix = format!("{}{}", prefix, if is_last { "  " } else { "│ " });
    format_children(output, node.children(), &child_prefix);
}

fn format_children(output: &mut String, children: &[Node], prefix: &str) {
    for (i, child) in children.iter().enumerate() {
        format_node(output, child, prefix, i == children.len() - 1);
    }
}

pub fn to_treeviz_str(doc: &Document) -> String {
    let mut output = format!(
        "⧉ {}\n",
        truncate(doc.title().unwrap_or_else(|| doc.tag().as_str()), LABEL_WIDTH)
    );
    format_children(&mut output, doc.children(), "");
    output
}

/// Format implementation for treeviz
pub struct TreevizFormat;

impl Format for TreevizFormat {
    fn name(&self) -> &str {
        "treeviz"
    }

    fn description(&self) -> &str {
        "Visual tree representation with indentation and Unicode icons"
    }

    fn file_extensions(&self) -> &[&str] {
        &["tree"]
    }

    fn serialize(&self, doc: &Document) -> Result<String, FormatError> {
        Ok(to_treeviz_str(doc))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use nameslist_parser::nameslist::parse_str;

    #[test]
    fn test_treeviz_structure() {
        let doc = parse_str(
            "@@@\tNames\n@@\t0000\tBasic Latin\t007F\n0000\t<control>\n\t= NULL\n@\t\tASCII punctuation and symbols\n0021\tEXCLAMATION MARK\n",
        )
        .unwrap();

        insta::assert_snapshot!(to_treeviz_str(&doc), @r###"
        ⧉ Names
        ├─ ⊤ Names
        └─ § Basic Latin (0000..007F)
          ├─ • 0000 control
          │ └─ = NULL
          └─ ¶ ASCII punctuation and symbols
            └─ • 0021 EXCLAMATION MARK
        "###);
    }

    #[test]
    fn test_untitled_document() {
        let doc = parse_str("").unwrap();
        assert_eq!(to_treeviz_str(&doc), "⧉ ucd\n");
    }

    #[test]
    fn test_truncate() {
        assert_eq!(truncate("short", 30), "short");
        assert_eq!(truncate("abcdef", 3), "abc...");
    }
}
