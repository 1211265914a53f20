//! Text sanitizing
//!
//! Every attribute value and text payload passes through [sanitize] before it enters the tree.
//! Characters that the output serialization cannot carry are dropped, not replaced.

/// Whether a character may appear in the output document.
pub fn is_valid_char(c: char) -> bool {
    matches!(
        c as u32,
        0x9 | 0xA | 0xD | 0x20..=0xD7FF | 0xE000..=0xFFFD | 0x10000..=0x10FFFF
    )
}

/// Drop characters outside the accepted ranges, then trim surrounding whitespace.
pub fn sanitize(text: &str) -> String {
    let cleaned: String = text.chars().filter(|c| is_valid_char(*c)).collect();
    cleaned.trim().to_string()
}
