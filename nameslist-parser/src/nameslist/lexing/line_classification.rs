//! Line Classification
//!
//! Determines the syntactic role of a single line. The order of the checks matters:
//!
//!     1. The first word is compared against the structural sigils (`@@@`, `@@@+`, `@@`, `@`,
//!        `@+`). Exact matches only, so `@@` never shadows `@@@`.
//!     2. The first non-whitespace character is checked against the metadata signs. Metadata
//!        lines start with a tab, so their first word is empty and step 1 never fires for them.
//!     3. The first word is checked for 4 to 6 hex digits.
//!
//! Anything else is [LineType::Unrecognized], including blank lines.

use crate::nameslist::syntax;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;
use std::fmt;

static CODE_POINT: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)^[0-9A-F]{4,6}$").expect("code point pattern is valid"));

/// Sign of a metadata line, the first non-whitespace character of the line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum InfoSign {
    Alias,
    CrossRef,
    Variation,
    Comment,
    Decomposition,
    CompatMapping,
    FormalAlias,
}

impl InfoSign {
    pub const ALL: [InfoSign; 7] = [
        InfoSign::Alias,
        InfoSign::CrossRef,
        InfoSign::Variation,
        InfoSign::Comment,
        InfoSign::Decomposition,
        InfoSign::CompatMapping,
        InfoSign::FormalAlias,
    ];

    pub fn from_char(c: char) -> Option<Self> {
        match c {
            syntax::ALIAS_LINE => Some(InfoSign::Alias),
            syntax::CROSS_REF => Some(InfoSign::CrossRef),
            syntax::VARIATION_LINE => Some(InfoSign::Variation),
            syntax::COMMENT_LINE => Some(InfoSign::Comment),
            syntax::DECOMPOSITION => Some(InfoSign::Decomposition),
            syntax::COMPAT_MAPPING => Some(InfoSign::CompatMapping),
            syntax::FORMALALIAS_LINE => Some(InfoSign::FormalAlias),
            _ => None,
        }
    }

    pub fn sign(self) -> char {
        match self {
            InfoSign::Alias => syntax::ALIAS_LINE,
            InfoSign::CrossRef => syntax::CROSS_REF,
            InfoSign::Variation => syntax::VARIATION_LINE,
            InfoSign::Comment => syntax::COMMENT_LINE,
            InfoSign::Decomposition => syntax::DECOMPOSITION,
            InfoSign::CompatMapping => syntax::COMPAT_MAPPING,
            InfoSign::FormalAlias => syntax::FORMALALIAS_LINE,
        }
    }
}

/// The role of a line
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum LineType {
    Title,
    Subtitle,
    BlockHeader,
    Subheader,
    NoticeLine,
    /// Alias, cross reference, variation, ... annotating the previous entry
    CharEntryInfo(InfoSign),
    /// A code point and its name
    CodePoint,
    Unrecognized,
}

impl fmt::Display for LineType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LineType::CharEntryInfo(sign) => write!(f, "CharEntryInfo({})", sign.sign()),
            other => write!(f, "{:?}", other),
        }
    }
}

/// The leading whitespace-delimited token of a line; empty when the line starts with whitespace.
pub fn first_word(line: &str) -> &str {
    line.split(char::is_whitespace).next().unwrap_or("")
}

/// Determine the role of a line.
pub fn classify(line: &str) -> LineType {
    let word = first_word(line);
    match word {
        syntax::TITLE => return LineType::Title,
        syntax::SUBTITLE => return LineType::Subtitle,
        syntax::BLOCK_HEADER => return LineType::BlockHeader,
        syntax::SUBHEADER => return LineType::Subheader,
        syntax::NOTICE_LINE => return LineType::NoticeLine,
        _ => {}
    }

    if let Some(sign) = line.trim_start().chars().next().and_then(InfoSign::from_char) {
        return LineType::CharEntryInfo(sign);
    }

    if is_code_point(word) {
        return LineType::CodePoint;
    }

    LineType::Unrecognized
}

/// Whether the line opens a new block
pub fn is_block_header(line: &str) -> bool {
    classify(line) == LineType::BlockHeader
}

/// Whether the text looks like a code point: 4 to 6 hex digits, any case.
pub fn is_code_point(text: &str) -> bool {
    CODE_POINT.is_match(text)
}
