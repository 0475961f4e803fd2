//! Todo list record type
//!
//! Wire shape (items only included when the response expands them):
//!
//! ```xml
//! <todo-list>
//!   <id type="integer">..</id>
//!   <name>..</name>
//!   ..
//!   <todo-items>
//!     <todo-item>..</todo-item>
//!     <todo-item>..</todo-item>
//!   </todo-items>
//! </todo-list>
//! ```

use std::sync::LazyLock;

use crate::resources::todo_item;
use crate::schema::Schema;

static SCHEMA: LazyLock<Schema> = LazyLock::new(|| {
    Schema::builder("todo-list")
        .integer("id")
        .string("name")
        .string("description")
        .integer("project_id")
        .integer("milestone_id")
        .integer("position")
        .boolean("private")
        .boolean("tracked")
        .array("todo_items", todo_item::schema())
        .build()
});

pub fn schema() -> &'static Schema {
    &SCHEMA
}
