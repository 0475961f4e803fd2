//! Project record type
//!
//! Carries a nested `<company>` sub-record; `announcement` through
//! `show-announcement` only appear for administrators.

use std::sync::LazyLock;

use crate::resources::company;
use crate::schema::Schema;

static SCHEMA: LazyLock<Schema> = LazyLock::new(|| {
    Schema::builder("project")
        .integer("id")
        .string("name")
        .date("created_on")
        .string("status")
        .datetime("last_changed_on")
        .record("company", company::schema())
        .string("announcement")
        .string("start_page")
        .boolean("show_writeboards")
        .boolean("show_announcement")
        .build()
});

pub fn schema() -> &'static Schema {
    &SCHEMA
}
