//! Property-based tests for the mapping engine
//!
//! These verify:
//! 1. The underscore/hyphen tag-name transform is a bijection
//! 2. The exact boolean coercion rule for arbitrary text
//! 3. Scalar records survive serialize -> parse -> load, with falsy values
//!    omitted identically to unset fields

use proptest::prelude::*;
use proptest::test_runner::TestCaseError;
use std::sync::LazyLock;

use xmlbind::{field_name_to_tag, from_xml_str, tag_to_field_name, Schema};

static SAMPLE: LazyLock<Schema> = LazyLock::new(|| {
    Schema::builder("sample")
        .integer("count")
        .string("label")
        .boolean("flag")
        .date("day")
        .datetime("stamp")
        .build()
});

proptest! {
    #[test]
    fn prop_tag_transform_roundtrip(name in "[a-z]+(_[a-z]+){0,3}") {
        let tag = field_name_to_tag(&name);
        prop_assert!(!tag.contains('_'));
        prop_assert_eq!(tag_to_field_name(&tag), name);
    }

    #[test]
    fn prop_nonempty_text_is_true_unless_false(text in "[a-zA-Z0-9]{1,8}") {
        prop_assume!(text != "false");
        let mut record = SAMPLE.record();
        prop_assert!(record.set("flag", text.as_str()).is_ok());
        prop_assert_eq!(record.get_bool("flag"), Some(true));
    }

    #[test]
    fn prop_scalar_record_roundtrip(
        count in any::<i64>(),
        label in "[a-z][a-z0-9&<> ]{0,14}",
        flag in any::<bool>(),
        day in "[0-9]{4}-[0-9]{2}-[0-9]{2}",
    ) {
        let mut record = SAMPLE.record();
        prop_assert!(record.set("count", count).is_ok());
        prop_assert!(record.set("label", label.as_str()).is_ok());
        prop_assert!(record.set("flag", flag).is_ok());
        prop_assert!(record.set("day", day.as_str()).is_ok());

        let xml = record.serialize();
        let doc = match from_xml_str(&xml) {
            Ok(doc) => doc,
            Err(e) => return Err(TestCaseError::fail(format!("reparse failed: {e}"))),
        };
        let back = match SAMPLE.load(&doc.root) {
            Ok(back) => back,
            Err(e) => return Err(TestCaseError::fail(format!("load failed: {e}"))),
        };

        // falsy values are omitted on the wire, so they come back unset
        if count != 0 {
            prop_assert_eq!(back.get_int("count"), Some(count));
        } else {
            prop_assert!(!back.has_value("count"));
        }
        prop_assert_eq!(back.get_str("label"), Some(label.as_str()));
        if flag {
            prop_assert_eq!(back.get_bool("flag"), Some(true));
        } else {
            prop_assert!(!back.has_value("flag"));
        }
        prop_assert_eq!(back.get_str("day"), Some(day.as_str()));
    }
}
