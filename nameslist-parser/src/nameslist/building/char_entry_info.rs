//! Metadata line builders
//!
//! A metadata line is a sign character followed by its payload:
//!
//!     <tab>= alias name
//!     <tab>x (latin small letter a - 0061)
//!
//! The builder dispatches on the line's own first character rather than on the classifier's
//! tag, so a sign the classifier accepts but the builder does not know surfaces as
//! [ParseError::UnknownMetadataKind] instead of silently producing nothing.

use super::extraction::{first_field, marker_payload};
use super::sanitize::sanitize;
use crate::nameslist::ast::{Attribute, Node, NodeKind, YesNo};
use crate::nameslist::error::ParseError;
use crate::nameslist::syntax;

/// Build the node for an alias / cross reference / variation / comment / decomposition /
/// compatibility mapping / formal alias line.
pub fn build_char_entry_info(line: &str) -> Result<Node, ParseError> {
    let trimmed = line.trim();
    let mut chars = trimmed.chars();
    let sign = chars.next();
    let payload = sanitize(first_field(chars.as_str()));

    let (kind, attribute, value) = match sign {
        Some(syntax::ALIAS_LINE) => (NodeKind::AliasLine, Attribute::Name, payload),
        Some(syntax::CROSS_REF) => (
            NodeKind::CrossRef,
            Attribute::Ref,
            payload
                .trim_matches(|c: char| syntax::REF_PARENS.contains(&c))
                .to_string(),
        ),
        Some(syntax::VARIATION_LINE) => (NodeKind::VariationLine, Attribute::Variation, payload),
        Some(syntax::COMMENT_LINE) => (NodeKind::CommentLine, Attribute::Content, payload),
        Some(syntax::DECOMPOSITION) => (NodeKind::Decomposition, Attribute::Decomp, payload),
        Some(syntax::COMPAT_MAPPING) => (NodeKind::CompatMapping, Attribute::Compat, payload),
        Some(syntax::FORMALALIAS_LINE) => (NodeKind::FormalAliasLine, Attribute::Name, payload),
        _ => {
            return Err(ParseError::UnknownMetadataKind {
                line: line.to_string(),
            })
        }
    };
    Ok(Node::new(kind).with_attribute(attribute, value))
}

/// Build a notice line node.
///
/// `@+<tab><tab>* text` sets `with_asterisk="Y"`; the asterisk and one following space are
/// removed from the text.
pub fn build_notice_line(line: &str) -> Node {
    let payload = sanitize(marker_payload(line));
    match payload.strip_prefix(syntax::ASTERISK) {
        Some(rest) => {
            let text = rest.strip_prefix(syntax::SPACE).unwrap_or(rest);
            Node::new(NodeKind::NoticeLine)
                .with_attribute(Attribute::WithAsterisk, YesNo::Yes.as_str())
                .with_text(text)
        }
        None => Node::new(NodeKind::NoticeLine).with_text(payload),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("\t= alias name", NodeKind::AliasLine, Attribute::Name, "alias name")]
    #[case("\tx (latin small letter a - 0061)", NodeKind::CrossRef, Attribute::Ref, "latin small letter a - 0061")]
    #[case("\tx 0061", NodeKind::CrossRef, Attribute::Ref, "0061")]
    #[case("\t~ 0030 FE00 short diagonal stroke form", NodeKind::VariationLine, Attribute::Variation, "0030 FE00 short diagonal stroke form")]
    #[case("\t* some note", NodeKind::CommentLine, Attribute::Content, "some note")]
    #[case("\t*\tsome note", NodeKind::CommentLine, Attribute::Content, "some note")]
    #[case("\t: 0041 0300", NodeKind::Decomposition, Attribute::Decomp, "0041 0300")]
    #[case("\t# <compat> 0020 0301", NodeKind::CompatMapping, Attribute::Compat, "<compat> 0020 0301")]
    #[case("\t% NULL", NodeKind::FormalAliasLine, Attribute::Name, "NULL")]
    fn test_build_char_entry_info(
        #[case] line: &str,
        #[case] kind: NodeKind,
        #[case] attribute: Attribute,
        #[case] value: &str,
    ) {
        let node = build_char_entry_info(line).expect("known sign");
        assert_eq!(node.kind(), kind);
        assert_eq!(node.attribute(attribute), Some(value));
        assert_eq!(node.attributes().count(), 1);
        assert!(node.children().is_empty());
    }

    #[test]
    fn test_unknown_sign_is_an_error() {
        let err = build_char_entry_info("\t? mystery").unwrap_err();
        assert_eq!(
            err,
            ParseError::UnknownMetadataKind {
                line: "\t? mystery".to_string()
            }
        );
    }

    #[test]
    fn test_empty_line_is_an_error() {
        assert!(build_char_entry_info("").is_err());
    }

    #[test]
    fn test_notice_with_asterisk() {
        let node = build_notice_line("@+\t\t* some text");
        assert_eq!(node.attribute(Attribute::WithAsterisk), Some("Y"));
        assert_eq!(node.text(), Some("some text"));
    }

    #[test]
    fn test_notice_with_asterisk_strips_one_space_only() {
        let node = build_notice_line("@+\t\t*  indented");
        assert_eq!(node.text(), Some(" indented"));
    }

    #[test]
    fn test_notice_without_asterisk() {
        let node = build_notice_line("@+\t\tPlain notice.");
        assert!(!node.has_attribute(Attribute::WithAsterisk));
        assert_eq!(node.text(), Some("Plain notice."));
    }
}
