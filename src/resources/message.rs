//! Message record type; the wire wrapper tag is `post`

use std::sync::LazyLock;

use crate::schema::Schema;

static SCHEMA: LazyLock<Schema> = LazyLock::new(|| {
    Schema::builder("post")
        .integer("id")
        .string("title")
        .string("body")
        .datetime("posted_on")
        .integer("project_id")
        .integer("category_id")
        .integer("author_id")
        .integer("milestone_id")
        .integer("comments_count")
        .integer("attachments_count")
        .boolean("use_textile")
        .string("extended_body")
        .string("display_body")
        .string("display_extended_body")
        .boolean("private")
        .build()
});

pub fn schema() -> &'static Schema {
    &SCHEMA
}
