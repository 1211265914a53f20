//! AST building from segments
//!
//!     - [intro]: title and subtitle nodes from the intro segment
//!     - [block]: one block header subtree per block segment, with the positional attachment
//!       of entries, sub-headers and metadata
//!     - [char_entry_info]: metadata and notice line nodes
//!     - [extraction]: tab field helpers shared by the builders
//!     - [sanitize]: the character filter applied to every value entering the tree

pub mod block;
pub mod char_entry_info;
pub mod extraction;
pub mod intro;
pub mod sanitize;

pub use block::{build_block, BlockBuilder};
pub use char_entry_info::{build_char_entry_info, build_notice_line};
pub use intro::build_intro;
pub use sanitize::sanitize;
