//! Person record type
//!
//! `user_name`, `password`, and `token` only appear when the requesting
//! user may see them; the trailing booleans are administrator-only.

use std::sync::LazyLock;

use crate::schema::Schema;

static SCHEMA: LazyLock<Schema> = LazyLock::new(|| {
    Schema::builder("person")
        .integer("id")
        .string("first_name")
        .string("last_name")
        .string("title")
        .string("email_address")
        .string("im_handle")
        .string("im_service")
        .string("phone_number_office")
        .string("phone_number_office_ext")
        .string("phone_number_mobile")
        .string("phone_number_home")
        .string("phone_number_fax")
        .datetime("last_login")
        .integer("client_id")
        .string("user_name")
        .string("password")
        .string("token")
        .boolean("administrator")
        .boolean("deleted")
        .boolean("has_access_to_new_projects")
        .build()
});

pub fn schema() -> &'static Schema {
    &SCHEMA
}
