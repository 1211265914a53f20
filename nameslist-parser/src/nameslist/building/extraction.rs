//! Field extraction helpers
//!
//! NamesList separates fields with tabs and is not consistent about how many. Fields are
//! therefore read as "tab separated, empty fields skipped".

use crate::nameslist::lexing::first_word;
use crate::nameslist::syntax::TAB;

/// Tab separated fields with blank ones skipped
pub fn fields(text: &str) -> impl Iterator<Item = &str> {
    text.split(TAB).filter(|f| !f.trim().is_empty())
}

/// The first non-blank tab field, or an empty string
pub fn first_field(text: &str) -> &str {
    fields(text).next().unwrap_or("")
}

/// The text following the line's first word
pub fn after_first_word(line: &str) -> &str {
    let word = first_word(line);
    line.strip_prefix(word).unwrap_or("")
}

/// The payload of a marker line (`@@@`, `@`, `@+`, ...): the first field after the marker.
pub fn marker_payload(line: &str) -> &str {
    first_field(after_first_word(line))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fields_skip_empty() {
        let all: Vec<_> = fields("@@\t0000\t\tBasic Latin\t007F").collect();
        assert_eq!(all, vec!["@@", "0000", "Basic Latin", "007F"]);
    }

    #[test]
    fn test_marker_payload() {
        assert_eq!(marker_payload("@@@\tExample Title"), "Example Title");
        assert_eq!(marker_payload("@\t\tSub-header"), "Sub-header");
        assert_eq!(marker_payload("@+\t\t* note\ttrailing"), "* note");
        assert_eq!(marker_payload("@"), "");
    }

    #[test]
    fn test_after_first_word() {
        assert_eq!(after_first_word("0041\tLATIN CAPITAL LETTER A"), "\tLATIN CAPITAL LETTER A");
        assert_eq!(after_first_word("\t= alias"), "\t= alias");
    }
}
