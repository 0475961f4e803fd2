//! Company record type

use std::sync::LazyLock;

use crate::schema::Schema;

static SCHEMA: LazyLock<Schema> = LazyLock::new(|| {
    Schema::builder("company")
        .integer("id")
        .string("name")
        .string("address_one")
        .string("address_two")
        .string("city")
        .string("state")
        .string("zip")
        .string("country")
        .string("web_address")
        .string("phone_number_office")
        .string("phone_number_fax")
        .string("time_zone_id")
        .boolean("can_see_private")
        // only present for non-client companies
        .string("url_name")
        .string("uuid")
        .build()
});

pub fn schema() -> &'static Schema {
    &SCHEMA
}
