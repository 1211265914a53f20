//! Output formats for NamesList documents
//!
//!     This crate turns a parsed [Document](nameslist_parser::nameslist::Document) into text. It
//!     is a pure lib: it powers the nameslist CLI but makes no assumption about a shell, so no
//!     printing, no env vars and no file writes happen here.
//!
//! Architecture
//!
//!     - Format trait: uniform interface for every output format
//!     - FormatRegistry: discovery and selection of formats by name
//!     - Format implementations: one module per format under `formats/`
//!     - codegen: C declarations of the output vocabulary
//!
//!     The file structure :
//!     .
//!     ├── error.rs
//!     ├── format.rs               # Format trait definition
//!     ├── registry.rs             # FormatRegistry for discovery and selection
//!     ├── codegen.rs              # C struct declarations of tags and attributes
//!     ├── formats
//!     │   ├── xml                 # The canonical output
//!     │   ├── treeviz             # One line per node, for eyeballing trees
//!     │   └── json                # serde dump of the tree
//!     └── lib.rs
//!
//!     XML is the format the converter exists for; the other two are debugging aids.

pub mod codegen;
pub mod error;
pub mod format;
pub mod formats;
pub mod registry;

pub use codegen::c_declarations;
pub use error::FormatError;
pub use format::Format;
pub use registry::FormatRegistry;
