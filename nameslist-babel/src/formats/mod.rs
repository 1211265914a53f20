//! Format implementations
//!
//! Each format converts a NamesList document into one text representation.

pub mod json;
pub mod treeviz;
pub mod xml;

pub use json::JsonFormat;
pub use treeviz::TreevizFormat;
pub use xml::XmlFormat;
