//! Tag, attribute and yes/no constants of the output schema
//!
//! Each set is a closed enum with an `ALL` table so that generators can reflect over the
//! complete vocabulary (see the C declaration output in nameslist-babel).

use serde::Serialize;
use std::fmt;

/// Element names of the output document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Tag {
    Root,
    BlockHeader,
    BlockSubheader,
    FileComment,
    Title,
    Subtitle,
    NoticeLine,
    CharEntry,
    AliasLine,
    CrossRef,
    VariationLine,
    CommentLine,
    Decomposition,
    CompatMapping,
    FormalaliasLine,
}

impl Tag {
    pub const ALL: [Tag; 15] = [
        Tag::Root,
        Tag::BlockHeader,
        Tag::BlockSubheader,
        Tag::FileComment,
        Tag::Title,
        Tag::Subtitle,
        Tag::NoticeLine,
        Tag::CharEntry,
        Tag::AliasLine,
        Tag::CrossRef,
        Tag::VariationLine,
        Tag::CommentLine,
        Tag::Decomposition,
        Tag::CompatMapping,
        Tag::FormalaliasLine,
    ];

    /// The element name as written to XML
    pub fn as_str(self) -> &'static str {
        match self {
            Tag::Root => "ucd",
            Tag::BlockHeader => "block_header",
            Tag::BlockSubheader => "block_subheader",
            Tag::FileComment => "file_comment",
            Tag::Title => "title",
            Tag::Subtitle => "subtitle",
            Tag::NoticeLine => "notice_line",
            Tag::CharEntry => "char_entry",
            Tag::AliasLine => "alias_line",
            Tag::CrossRef => "cross_ref",
            Tag::VariationLine => "variation_line",
            Tag::CommentLine => "comment_line",
            Tag::Decomposition => "decomposition",
            Tag::CompatMapping => "compat_mapping",
            Tag::FormalaliasLine => "formalalias_line",
        }
    }

    /// The constant name used when the vocabulary is emitted as declarations
    pub fn const_name(self) -> &'static str {
        match self {
            Tag::Root => "ROOT",
            Tag::BlockHeader => "BLOCK_HEADER",
            Tag::BlockSubheader => "BLOCK_SUBHEADER",
            Tag::FileComment => "FILE_COMMENT",
            Tag::Title => "TITLE",
            Tag::Subtitle => "SUBTITLE",
            Tag::NoticeLine => "NOTICE_LINE",
            Tag::CharEntry => "CHAR_ENTRY",
            Tag::AliasLine => "ALIAS_LINE",
            Tag::CrossRef => "CROSS_REF",
            Tag::VariationLine => "VARIATION_LINE",
            Tag::CommentLine => "COMMENT_LINE",
            Tag::Decomposition => "DECOMPOSITION",
            Tag::CompatMapping => "COMPAT_MAPPING",
            Tag::FormalaliasLine => "FORMALALIAS_LINE",
        }
    }
}

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Attribute names of the output document.
///
/// Declared in alphabetical order of their XML names: the derived `Ord` is the order
/// attributes are serialized in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Attribute {
    BlockEnd,
    BlockStart,
    CodePoint,
    Compat,
    Content,
    Decomp,
    Name,
    Ref,
    Type,
    Variation,
    WithAsterisk,
}

impl Attribute {
    pub const ALL: [Attribute; 11] = [
        Attribute::BlockStart,
        Attribute::BlockEnd,
        Attribute::CodePoint,
        Attribute::Compat,
        Attribute::Content,
        Attribute::Decomp,
        Attribute::Name,
        Attribute::Ref,
        Attribute::Type,
        Attribute::Variation,
        Attribute::WithAsterisk,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Attribute::BlockEnd => "block_end",
            Attribute::BlockStart => "block_start",
            Attribute::CodePoint => "code_point",
            Attribute::Compat => "compat",
            Attribute::Content => "content",
            Attribute::Decomp => "decomp",
            Attribute::Name => "name",
            Attribute::Ref => "ref",
            Attribute::Type => "type",
            Attribute::Variation => "variation",
            Attribute::WithAsterisk => "with_asterisk",
        }
    }

    pub fn const_name(self) -> &'static str {
        match self {
            Attribute::BlockEnd => "BLOCK_END",
            Attribute::BlockStart => "BLOCK_START",
            Attribute::CodePoint => "CODE_POINT",
            Attribute::Compat => "COMPAT",
            Attribute::Content => "CONTENT",
            Attribute::Decomp => "DECOMP",
            Attribute::Name => "NAME",
            Attribute::Ref => "REF",
            Attribute::Type => "TYPE",
            Attribute::Variation => "VARIATION",
            Attribute::WithAsterisk => "WITH_ASTERISK",
        }
    }
}

impl fmt::Display for Attribute {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Literal values of boolean-like attributes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum YesNo {
    Yes,
    No,
}

impl YesNo {
    pub const ALL: [YesNo; 2] = [YesNo::Yes, YesNo::No];

    pub fn as_str(self) -> &'static str {
        match self {
            YesNo::Yes => "Y",
            YesNo::No => "N",
        }
    }

    pub fn const_name(self) -> &'static str {
        match self {
            YesNo::Yes => "YES",
            YesNo::No => "NO",
        }
    }
}

impl From<bool> for YesNo {
    fn from(value: bool) -> Self {
        if value {
            YesNo::Yes
        } else {
            YesNo::No
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_tag_names_are_unique() {
        let names: HashSet<_> = Tag::ALL.iter().map(|t| t.as_str()).collect();
        assert_eq!(names.len(), Tag::ALL.len());
    }

    #[test]
    fn test_attribute_order_is_alphabetical() {
        let mut sorted = Attribute::ALL;
        sorted.sort();
        let names: Vec<_> = sorted.iter().map(|a| a.as_str()).collect();
        let mut expected = names.clone();
        expected.sort_unstable();
        assert_eq!(names, expected);
    }

    #[test]
    fn test_yes_no_literals() {
        assert_eq!(YesNo::from(true).as_str(), "Y");
        assert_eq!(YesNo::from(false).as_str(), "N");
    }
}
