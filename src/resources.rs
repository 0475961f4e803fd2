//! Concrete record type declarations
//!
//! Each module declares one record schema with the engine's builder; none of
//! them carries any logic of its own. `message` records are wrapped in a
//! `post` element on the wire; every other type's wrapper tag matches its
//! module name.

pub mod category;
pub mod company;
pub mod message;
pub mod person;
pub mod project;
pub mod time_entry;
pub mod todo_item;
pub mod todo_list;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::{field_name_to_tag, tag_to_field_name, Schema};

    fn all_schemas() -> Vec<&'static Schema> {
        vec![
            category::schema(),
            company::schema(),
            message::schema(),
            person::schema(),
            project::schema(),
            time_entry::schema(),
            todo_item::schema(),
            todo_list::schema(),
        ]
    }

    #[test]
    fn test_tag_transform_bijective_for_all_declared_fields() {
        for schema in all_schemas() {
            for desc in schema.fields() {
                assert_eq!(tag_to_field_name(desc.xml_tag()), desc.name());
                assert_eq!(field_name_to_tag(desc.name()), desc.xml_tag());
            }
        }
    }

    #[test]
    fn test_every_schema_declares_fields() {
        for schema in all_schemas() {
            assert!(!schema.is_empty(), "{} has no fields", schema.tag());
        }
    }

    #[test]
    fn test_field_names_use_underscores_only() {
        for schema in all_schemas() {
            for name in schema.field_names() {
                assert!(!name.contains('-'), "{name} contains a hyphen");
            }
        }
    }
}
