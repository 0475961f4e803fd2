//! xmlbind - declarative XML resource mapping
//!
//! Record types declare an ordered set of typed fields; the engine converts
//! bidirectionally between populated records and an XML document tree.
//!
//! # Quick Start
//!
//! ```
//! use std::sync::LazyLock;
//! use xmlbind::{from_xml_str, Schema};
//!
//! static ENTRY: LazyLock<Schema> = LazyLock::new(|| {
//!     Schema::builder("time-entry")
//!         .integer("project_id")
//!         .string("hours")
//!         .build()
//! });
//!
//! # fn main() -> Result<(), xmlbind::Error> {
//! let doc = from_xml_str("<time-entry><project-id type=\"integer\">42</project-id></time-entry>")?;
//! let entry = ENTRY.load(&doc.root)?;
//! assert_eq!(entry.get_int("project_id"), Some(42));
//!
//! let mut copy = ENTRY.record();
//! copy.set("project_id", 42)?;
//! copy.set("hours", "2.5")?;
//! assert_eq!(
//!     copy.serialize(),
//!     "<time-entry><project-id type=\"integer\">42</project-id><hours>2.5</hours></time-entry>"
//! );
//! # Ok(())
//! # }
//! ```

#![forbid(unsafe_code)]

pub mod error;
pub use error::{Error, ErrorKind, Pos, Result, Span};

pub mod xml;
pub use xml::{Content, Document, Element, Parser};

pub mod schema;
pub use schema::{
    field_name_to_tag, tag_to_field_name, FieldDescriptor, FieldKind, FieldValue, Raw, Record,
    Schema, SchemaBuilder,
};

pub mod resources;

/// Parse XML from string
pub fn from_xml_str(s: &str) -> Result<Document> {
    let mut parser = Parser::new(s.as_bytes());
    parser.parse()
}

/// Parse XML from bytes
pub fn from_xml_bytes(bytes: &[u8]) -> Result<Document> {
    let mut parser = Parser::new(bytes);
    parser.parse()
}
