//! Declarative record schemas and their field descriptors

pub mod field;
pub mod record;

pub use field::{FieldDescriptor, FieldKind, FieldValue, Raw};
pub use record::{field_name_to_tag, tag_to_field_name, Record, Schema, SchemaBuilder};
