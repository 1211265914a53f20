//! # nameslist
//!
//! A parser for the Unicode NamesList format (`NamesList.txt`).
//!
//! File Layout
//!
//! The parser is a straight pipeline with no read-back: lines are classified one at a time,
//! grouped into an intro and a run of blocks, each group is built into nodes and the nodes are
//! handed to an assembler that owns the document root.
//!
//! src/nameslist
//!   ├── lexing      Line classification and block segmentation
//!   ├── building    Intro and block tree builders, text sanitizing
//!   ├── ast         Node, Document and the tag / attribute vocabulary
//!   ├── parsing     The orchestration of the above
//!   └── loader      Reading sources from files, strings and readers
//!
//! For test helpers, see the [testing module](nameslist::testing).

pub mod nameslist;
