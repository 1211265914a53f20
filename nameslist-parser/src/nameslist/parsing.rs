//! Parsing entry points
//!
//! Wires the pipeline together: segmenter → intro / block builders → assembler. The assembler
//! is only finalized once every segment was built, so an error never leaves a partial document
//! behind.

use crate::nameslist::ast::{Document, DocumentAssembler};
use crate::nameslist::building::{build_block, build_intro};
use crate::nameslist::error::ParseError;
use crate::nameslist::lexing::{BlockSegmenter, Segment};
use tracing::{debug, warn};

/// Parse a sequence of lines (without line terminators) into a document.
pub fn parse_document<I>(lines: I) -> Result<Document, ParseError>
where
    I: IntoIterator<Item = String>,
{
    let mut assembler = DocumentAssembler::new();

    for segment in BlockSegmenter::new(lines) {
        match segment {
            Segment::Intro(intro) => {
                for node in build_intro(&intro) {
                    assembler.add_top_level(node);
                }
            }
            Segment::Block(block) => {
                for extra in block.extra_headers() {
                    warn!("Ignoring block header without content: {}", extra.trim());
                }
                assembler.add_top_level(build_block(block.header(), &block.content)?);
            }
        }
    }

    debug!(top_level = assembler.len(), "parsed document");
    Ok(assembler.finalize())
}

/// Parse NamesList source text.
pub fn parse_str(source: &str) -> Result<Document, ParseError> {
    parse_document(source.lines().map(str::to_owned))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::nameslist::ast::{Attribute, NodeKind};

    const SAMPLE: &str = "\
; Standard: 15.0.0
@@@\tThe Unicode Standard 15.0
@@@+\tU150M220805.lst
@@\t0000\tC0 Controls and Basic Latin\t007F
@+\t\t* The C0 controls are not named.
0000\t<control>
\t= NULL
@\t\tASCII punctuation and symbols
0021\tEXCLAMATION MARK
\tx 01C3
@@\t0080\tC1 Controls and Latin-1 Supplement\t00FF
0080\t<control>
";

    #[test]
    fn test_parse_sample() {
        let doc = parse_str(SAMPLE).unwrap();
        let kinds: Vec<_> = doc.children().iter().map(|n| n.kind()).collect();
        assert_eq!(
            kinds,
            vec![
                NodeKind::Title,
                NodeKind::Subtitle,
                NodeKind::BlockHeader,
                NodeKind::BlockHeader
            ]
        );
        assert_eq!(doc.title(), Some("The Unicode Standard 15.0"));

        let latin = &doc.children()[2];
        assert_eq!(latin.attribute(Attribute::Name), Some("C0 Controls and Basic Latin"));
        let child_kinds: Vec<_> = latin.children().iter().map(|n| n.kind()).collect();
        assert_eq!(
            child_kinds,
            vec![NodeKind::NoticeLine, NodeKind::CharEntry, NodeKind::BlockSubheader]
        );
    }

    #[test]
    fn test_parse_is_deterministic() {
        assert_eq!(parse_str(SAMPLE).unwrap(), parse_str(SAMPLE).unwrap());
    }

    #[test]
    fn test_empty_source() {
        let doc = parse_str("").unwrap();
        assert!(doc.children().is_empty());
    }

    #[test]
    fn test_header_group_uses_first_header() {
        let doc = parse_str("@@\t0000\tA\t007F\n@@\t0080\tB\t00FF\n0041\tX\n").unwrap();
        assert_eq!(doc.children().len(), 1);
        assert_eq!(doc.children()[0].attribute(Attribute::Name), Some("A"));
        assert_eq!(doc.children()[0].children().len(), 1);
    }

    #[test]
    fn test_error_leaves_no_document() {
        let result = parse_str("@@@\tTitle\n@@\tbroken\n0041\tA\n");
        assert!(matches!(result, Err(ParseError::MalformedBlockHeader { .. })));
    }
}
