//! Category record type

use std::sync::LazyLock;

use crate::schema::Schema;

static SCHEMA: LazyLock<Schema> = LazyLock::new(|| {
    Schema::builder("category")
        .integer("id")
        .string("name")
        .string("last_name")
        .integer("project_id")
        .integer("elements_count")
        .string("type")
        .build()
});

pub fn schema() -> &'static Schema {
    &SCHEMA
}
