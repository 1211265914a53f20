//! Document tree for NamesList data
//!
//!     The tree is deliberately untyped below the node level: every node is a [Node] with a
//!     [NodeKind], a set of [Attribute] values, optional inline text and owned children. This
//!     mirrors the target XML schema one to one, which keeps serializers trivial.
//!
//!     Shape of a finished document:
//!
//!         ucd
//!         ├── title
//!         ├── subtitle
//!         └── block_header (name, block_start, block_end)
//!             ├── char_entry (code_point, name | type)
//!             │   └── alias_line / cross_ref / ... / notice_line
//!             └── block_subheader (name)
//!                 └── char_entry
//!                     └── ...
//!
//!     Ownership is strictly tree shaped and there are no back references. The [Document] is
//!     produced by [DocumentAssembler::finalize] and cannot be mutated afterwards.

pub mod document;
pub mod node;
pub mod vocabulary;

pub use document::{Document, DocumentAssembler};
pub use node::{Node, NodeKind};
pub use vocabulary::{Attribute, Tag, YesNo};
