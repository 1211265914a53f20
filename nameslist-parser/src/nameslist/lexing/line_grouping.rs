//! Line Grouping
//!
//! Splits the line stream into segments on block header lines:
//!
//!     intro lines ...          -> Segment::Intro (always first, possibly empty)
//!     @@ header                \
//!     content lines ...        /  -> Segment::Block
//!     @@ header                \
//!     content lines ...        /  -> Segment::Block
//!
//! Consecutive header lines form one header group; the group is surfaced as a whole and the
//! block builder decides which line to use. The segmenter is a lazy iterator: a segment's lines
//! are pulled from the source only when that segment is requested.

use super::line_classification::is_block_header;
use std::iter::Peekable;

/// One block: the run of header lines that opened it and the content lines that follow.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BlockSegment {
    pub header_group: Vec<String>,
    pub content: Vec<String>,
}

impl BlockSegment {
    /// The meaningful header line: the first of the group
    pub fn header(&self) -> &str {
        self.header_group.first().map(String::as_str).unwrap_or("")
    }

    /// Header lines past the first one, which carry no meaning
    pub fn extra_headers(&self) -> &[String] {
        self.header_group.get(1..).unwrap_or(&[])
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Segment {
    /// Everything before the first block header
    Intro(Vec<String>),
    Block(BlockSegment),
}

/// Lazy segmenter over a line iterator.
pub struct BlockSegmenter<I: Iterator<Item = String>> {
    lines: Peekable<I>,
    intro_done: bool,
}

impl<I: Iterator<Item = String>> BlockSegmenter<I> {
    pub fn new<T>(lines: T) -> Self
    where
        T: IntoIterator<IntoIter = I>,
    {
        Self {
            lines: lines.into_iter().peekable(),
            intro_done: false,
        }
    }

    fn take_while_header(&mut self, header: bool) -> Vec<String> {
        let mut run = Vec::new();
        while let Some(line) = self.lines.next_if(|l| is_block_header(l) == header) {
            run.push(line);
        }
        run
    }
}

impl<I: Iterator<Item = String>> Iterator for BlockSegmenter<I> {
    type Item = Segment;

    fn next(&mut self) -> Option<Segment> {
        if !self.intro_done {
            self.intro_done = true;
            return Some(Segment::Intro(self.take_while_header(false)));
        }

        self.lines.peek()?;
        let header_group = self.take_while_header(true);
        let content = self.take_while_header(false);
        Some(Segment::Block(BlockSegment {
            header_group,
            content,
        }))
    }
}
