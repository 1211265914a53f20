//! Testing utilities
//!
//!     Tests should verify structure and content, not just counts. The fluent assertion API
//!     walks the tree with a path-like context so failures point at the offending node:
//!
//!         assert_doc(&doc).item_count(3).item(2, |block| {
//!             block
//!                 .kind(NodeKind::BlockHeader)
//!                 .attr(Attribute::Name, "Basic Latin")
//!                 .child(0, |entry| {
//!                     entry.kind(NodeKind::CharEntry).attr(Attribute::CodePoint, "0041");
//!                 });
//!         });
//!
//!     Sample sources live in `tests/fixtures` and are read with [fixtures::load].

pub mod ast_assertions;

pub use ast_assertions::{assert_doc, DocumentAssertion, NodeAssertion};

pub mod fixtures {
    //! Access to the sample NamesList files under `tests/fixtures`

    use std::fs;
    use std::path::PathBuf;

    /// Directory holding the sample files
    pub fn dir() -> PathBuf {
        PathBuf::from(env!("CARGO_MANIFEST_DIR"))
            .join("tests")
            .join("fixtures")
    }

    /// Path of a sample file
    pub fn path(name: &str) -> PathBuf {
        dir().join(name)
    }

    /// Contents of a sample file. Panics when missing: fixtures are part of the crate.
    pub fn load(name: &str) -> String {
        let path = path(name);
        fs::read_to_string(&path)
            .unwrap_or_else(|e| panic!("failed to read fixture {}: {}", path.display(), e))
    }
}
