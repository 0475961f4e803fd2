//! Time entry record type
//!
//! Wire shape:
//!
//! ```xml
//! <time-entry>
//!   <id type="integer">..</id>
//!   <project-id type="integer">..</project-id>
//!   <person-id type="integer">..</person-id>
//!   <date type="date">..</date>
//!   <hours>..</hours>
//!   <description>..</description>
//!   <todo-item-id type="integer">..</todo-item-id>
//! </time-entry>
//! ```

use std::sync::LazyLock;

use crate::schema::Schema;

static SCHEMA: LazyLock<Schema> = LazyLock::new(|| {
    Schema::builder("time-entry")
        .integer("id")
        .integer("project_id")
        .integer("person_id")
        .date("date")
        .string("hours")
        .string("description")
        .integer("todo_item_id")
        .build()
});

pub fn schema() -> &'static Schema {
    &SCHEMA
}
