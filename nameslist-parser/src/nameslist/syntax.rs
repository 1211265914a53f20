//! Line prefixes and delimiters of the NamesList format

/// First word of a title line
pub const TITLE: &str = "@@@";
/// First word of a subtitle line
pub const SUBTITLE: &str = "@@@+";
/// First word of a block header line
pub const BLOCK_HEADER: &str = "@@";
/// First word of a sub-header line
pub const SUBHEADER: &str = "@";
/// First word of a notice line
pub const NOTICE_LINE: &str = "@+";

pub const ALIAS_LINE: char = '=';
pub const CROSS_REF: char = 'x';
pub const VARIATION_LINE: char = '~';
pub const COMMENT_LINE: char = '*';
pub const DECOMPOSITION: char = ':';
pub const COMPAT_MAPPING: char = '#';
pub const FORMALALIAS_LINE: char = '%';

/// Character names that describe a kind of code point rather than naming it.
pub const CHAR_NAME_TYPES: [&str; 2] = ["control", "not a character"];

pub const TAB: char = '\t';
pub const SPACE: char = ' ';
pub const ASTERISK: char = '*';

/// Wrapped around reserved names: `<control>`
pub const NAME_BRACKETS: [char; 2] = ['<', '>'];
/// Wrapped around cross reference payloads: `x (latin small letter a - 0061)`
pub const REF_PARENS: [char; 2] = ['(', ')'];
