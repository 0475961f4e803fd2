//! Todo item record type
//!
//! The responsible-party pair only appears when an item is assigned, and
//! `completed_on`/`completer_id` only once it has been completed.

use std::sync::LazyLock;

use crate::schema::Schema;

static SCHEMA: LazyLock<Schema> = LazyLock::new(|| {
    Schema::builder("todo-item")
        .integer("id")
        .string("content")
        .integer("position")
        .datetime("created_on")
        .integer("creator_id")
        .boolean("completed")
        .string("responsible_party_type")
        .integer("responsible_party_id")
        .datetime("completed_on")
        .integer("completer_id")
        .build()
});

pub fn schema() -> &'static Schema {
    &SCHEMA
}
