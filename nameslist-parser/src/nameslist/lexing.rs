//! Lexing: from raw lines to classified lines and segments
//!
//!     NamesList has no tokens worth the name: every line's role is decided by its first word or
//!     first character, so lexing is a per-line classification followed by a grouping pass.
//!
//!     - [line_classification]: one line in, one [LineType] out. Pure, never fails.
//!     - [line_grouping]: pulls lines lazily and yields the intro segment followed by one
//!       segment per block, split on block header lines.

pub mod line_classification;
pub mod line_grouping;

pub use line_classification::{classify, first_word, is_block_header, InfoSign, LineType};
pub use line_grouping::{BlockSegment, BlockSegmenter, Segment};
