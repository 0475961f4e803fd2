//! Typed field descriptors
//!
//! A [`FieldDescriptor`] is the schema-level unit of a record type: one named,
//! typed field that knows how to coerce a raw input into its declared kind,
//! where to find its value on a record instance, and how to render itself as
//! an XML fragment. Descriptors are immutable and hold no per-instance state;
//! all storage lives on the [`Record`].

use std::fmt;

use crate::error::{Error, Result};
use crate::schema::record::{field_name_to_tag, Record, Schema};
use crate::xml::model::Element;
use crate::xml::writer::escape_text;

/// Declared kind of a field
#[derive(Clone, Copy)]
pub enum FieldKind {
    String,
    Integer,
    Date,
    DateTime,
    Boolean,
    /// A nested record of the given type
    Record(&'static Schema),
    /// A homogeneous array of records of the given type
    Array(&'static Schema),
}

impl FieldKind {
    /// The `type` attribute emitted on the wire; `None` for String (the wire
    /// default) and for composite kinds, which carry no type attribute.
    pub fn wire_name(&self) -> Option<&'static str> {
        match self {
            Self::String | Self::Record(_) | Self::Array(_) => None,
            Self::Integer => Some("integer"),
            Self::Date => Some("date"),
            Self::DateTime => Some("datetime"),
            Self::Boolean => Some("boolean"),
        }
    }

    fn expected(&self) -> &'static str {
        match self {
            Self::String => "string",
            Self::Integer => "integer",
            Self::Date => "date",
            Self::DateTime => "datetime",
            Self::Boolean => "boolean",
            Self::Record(_) => "record",
            Self::Array(_) => "array",
        }
    }
}

impl fmt::Debug for FieldKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Record(schema) => write!(f, "record({})", schema.tag()),
            Self::Array(schema) => write!(f, "array({})", schema.tag()),
            other => f.write_str(other.expected()),
        }
    }
}

/// A value stored on a record instance
///
/// Date and DateTime fields store their text verbatim; no semantic parsing is
/// performed on ISO-8601-shaped input.
#[derive(Clone, Debug, PartialEq)]
pub enum FieldValue {
    Str(String),
    Int(i64),
    Bool(bool),
    Record(Record),
    Array(Vec<Record>),
}

impl FieldValue {
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Str(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_int(&self) -> Option<i64> {
        match self {
            Self::Int(n) => Some(*n),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(b) => Some(*b),
            _ => None,
        }
    }

    pub fn as_record(&self) -> Option<&Record> {
        match self {
            Self::Record(r) => Some(r),
            _ => None,
        }
    }

    pub fn as_records(&self) -> Option<&[Record]> {
        match self {
            Self::Array(records) => Some(records),
            _ => None,
        }
    }

    /// Truthiness of a stored value. A field whose effective value is falsy
    /// is reported as having no value and is omitted from serialization,
    /// identically to an unset field.
    pub fn is_truthy(&self) -> bool {
        match self {
            Self::Str(s) => !s.is_empty(),
            Self::Int(n) => *n != 0,
            Self::Bool(b) => *b,
            Self::Record(_) => true,
            Self::Array(records) => !records.is_empty(),
        }
    }
}

impl From<&str> for FieldValue {
    fn from(value: &str) -> Self {
        Self::Str(value.to_owned())
    }
}

impl From<String> for FieldValue {
    fn from(value: String) -> Self {
        Self::Str(value)
    }
}

impl From<i64> for FieldValue {
    fn from(value: i64) -> Self {
        Self::Int(value)
    }
}

impl From<i32> for FieldValue {
    fn from(value: i32) -> Self {
        Self::Int(i64::from(value))
    }
}

impl From<bool> for FieldValue {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

/// Raw input handed to [`FieldDescriptor::set`] for coercion
#[derive(Debug)]
pub enum Raw<'a> {
    Text(String),
    Int(i64),
    Bool(bool),
    /// A document node, recursed into for composite kinds
    Node(&'a Element),
    Record(Record),
    List(Vec<Record>),
}

impl From<&str> for Raw<'_> {
    fn from(value: &str) -> Self {
        Self::Text(value.to_owned())
    }
}

impl From<String> for Raw<'_> {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<i64> for Raw<'_> {
    fn from(value: i64) -> Self {
        Self::Int(value)
    }
}

impl From<i32> for Raw<'_> {
    fn from(value: i32) -> Self {
        Self::Int(i64::from(value))
    }
}

impl From<bool> for Raw<'_> {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl<'a> From<&'a Element> for Raw<'a> {
    fn from(value: &'a Element) -> Self {
        Self::Node(value)
    }
}

impl From<Record> for Raw<'_> {
    fn from(value: Record) -> Self {
        Self::Record(value)
    }
}

impl From<Vec<Record>> for Raw<'_> {
    fn from(value: Vec<Record>) -> Self {
        Self::List(value)
    }
}

/// One named, typed field of a record schema
#[derive(Clone, Debug)]
pub struct FieldDescriptor {
    name: &'static str,
    xml_tag: String,
    kind: FieldKind,
    default: Option<FieldValue>,
}

impl FieldDescriptor {
    pub fn new(name: &'static str, kind: FieldKind) -> Self {
        Self {
            name,
            xml_tag: field_name_to_tag(name),
            kind,
            default: None,
        }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn xml_tag(&self) -> &str {
        &self.xml_tag
    }

    pub fn kind(&self) -> &FieldKind {
        &self.kind
    }

    pub fn default(&self) -> Option<&FieldValue> {
        self.default.as_ref()
    }

    pub(crate) fn set_default(&mut self, value: FieldValue) {
        self.default = Some(value);
    }

    /// Effective value on an instance: stored, else the declared default
    pub fn get<'a>(&'a self, instance: &'a Record) -> Option<&'a FieldValue> {
        instance.stored(self.name).or(self.default.as_ref())
    }

    /// True iff the effective value exists and is truthy. A field set to an
    /// empty string, zero, or `false` reports no value and serializes to
    /// nothing, indistinguishable from an unset field.
    pub fn has_value(&self, instance: &Record) -> bool {
        self.get(instance).is_some_and(FieldValue::is_truthy)
    }

    /// Coerce `raw` into the declared kind and store it on the instance
    pub fn set(&self, instance: &mut Record, raw: Raw<'_>) -> Result<()> {
        let value = self.coerce(raw)?;
        instance.store(self.name, value);
        Ok(())
    }

    fn coerce(&self, raw: Raw<'_>) -> Result<FieldValue> {
        match (&self.kind, raw) {
            (FieldKind::String | FieldKind::Date | FieldKind::DateTime, Raw::Text(s)) => {
                Ok(FieldValue::Str(s))
            }
            (FieldKind::Integer, Raw::Text(s)) => s
                .trim()
                .parse::<i64>()
                .map(FieldValue::Int)
                .map_err(|_| Error::coercion(self.name, "integer")),
            (FieldKind::Integer, Raw::Int(n)) => Ok(FieldValue::Int(n)),
            // false iff the text is empty or the literal "false"; any other
            // non-empty text, including "0", is true
            (FieldKind::Boolean, Raw::Text(s)) => {
                Ok(FieldValue::Bool(!s.is_empty() && s != "false"))
            }
            (FieldKind::Boolean, Raw::Bool(b)) => Ok(FieldValue::Bool(b)),
            (FieldKind::Boolean, Raw::Int(n)) => Ok(FieldValue::Bool(n != 0)),
            (FieldKind::Record(schema), Raw::Record(record)) => {
                if std::ptr::eq(record.schema(), *schema) {
                    Ok(FieldValue::Record(record))
                } else {
                    Err(Error::coercion(self.name, schema.tag()))
                }
            }
            (FieldKind::Record(schema), Raw::Node(node)) => {
                Ok(FieldValue::Record(schema.load(node)?))
            }
            // keep only records of the declared type, preserving order
            (FieldKind::Array(schema), Raw::List(records)) => Ok(FieldValue::Array(
                records
                    .into_iter()
                    .filter(|r| std::ptr::eq(r.schema(), *schema))
                    .collect(),
            )),
            // the same filter expressed at the tree level: only element
            // children carrying the declared type's tag are loaded
            (FieldKind::Array(schema), Raw::Node(node)) => {
                let mut records = Vec::new();
                for child in node.element_children() {
                    if child.name == schema.tag() {
                        records.push(schema.load(child)?);
                    }
                }
                Ok(FieldValue::Array(records))
            }
            (kind, _) => Err(Error::coercion(self.name, kind.expected())),
        }
    }

    /// Append this field's XML fragment to `out`; nothing when `has_value`
    /// is false
    pub fn serialize(&self, instance: &Record, out: &mut String) {
        if !self.has_value(instance) {
            return;
        }
        let Some(value) = self.get(instance) else {
            return;
        };

        match value {
            FieldValue::Record(record) => record.serialize_into(out),
            FieldValue::Array(records) => {
                out.push('<');
                out.push_str(&self.xml_tag);
                out.push('>');
                for record in records {
                    record.serialize_into(out);
                }
                out.push_str("</");
                out.push_str(&self.xml_tag);
                out.push('>');
            }
            FieldValue::Str(s) => self.write_scalar(out, &escape_text(s)),
            FieldValue::Int(n) => self.write_scalar(out, &n.to_string()),
            FieldValue::Bool(b) => self.write_scalar(out, if *b { "true" } else { "false" }),
        }
    }

    fn write_scalar(&self, out: &mut String, text: &str) {
        out.push('<');
        out.push_str(&self.xml_tag);
        if let Some(wire) = self.kind.wire_name() {
            out.push_str(" type=\"");
            out.push_str(wire);
            out.push('"');
        }
        out.push('>');
        out.push_str(text);
        out.push_str("</");
        out.push_str(&self.xml_tag);
        out.push('>');
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::LazyLock;

    static FLAGS: LazyLock<Schema> = LazyLock::new(|| {
        Schema::builder("flags")
            .boolean("private")
            .integer("count")
            .string("label")
            .build()
    });

    fn descriptor(name: &str) -> &'static FieldDescriptor {
        FLAGS.field(name).expect("declared field")
    }

    #[test]
    fn test_boolean_coercion_table() -> Result<()> {
        let desc = descriptor("private");
        let cases: [(Raw<'_>, bool); 6] = [
            (Raw::from("true"), true),
            (Raw::from("false"), false),
            (Raw::from(""), false),
            (Raw::from("0"), true),
            (Raw::from(true), true),
            (Raw::from(false), false),
        ];
        for (raw, expected) in cases {
            let mut record = FLAGS.record();
            desc.set(&mut record, raw)?;
            assert_eq!(desc.get(&record).and_then(FieldValue::as_bool), Some(expected));
        }
        Ok(())
    }

    #[test]
    fn test_integer_coercion_failure() {
        let desc = descriptor("count");
        let mut record = FLAGS.record();
        let err = desc.set(&mut record, Raw::from("abc"));
        assert!(matches!(
            err.map_err(|e| e.kind().clone()),
            Err(crate::error::ErrorKind::TypeCoercion { .. })
        ));
    }

    #[test]
    fn test_integer_coercion_trims() -> Result<()> {
        let desc = descriptor("count");
        let mut record = FLAGS.record();
        desc.set(&mut record, Raw::from(" 42 "))?;
        assert_eq!(desc.get(&record).and_then(FieldValue::as_int), Some(42));
        Ok(())
    }

    #[test]
    fn test_string_fragment_has_no_type_attribute() -> Result<()> {
        let mut record = FLAGS.record();
        record.set("label", "hours")?;
        let mut out = String::new();
        descriptor("label").serialize(&record, &mut out);
        assert_eq!(out, "<label>hours</label>");
        Ok(())
    }

    #[test]
    fn test_integer_fragment_carries_type() -> Result<()> {
        let mut record = FLAGS.record();
        record.set("count", 7)?;
        let mut out = String::new();
        descriptor("count").serialize(&record, &mut out);
        assert_eq!(out, "<count type=\"integer\">7</count>");
        Ok(())
    }

    #[test]
    fn test_falsy_values_serialize_to_nothing() -> Result<()> {
        let mut record = FLAGS.record();
        record.set("private", false)?;
        record.set("count", 0)?;
        record.set("label", "")?;
        for name in ["private", "count", "label"] {
            let desc = descriptor(name);
            assert!(!desc.has_value(&record), "{name} should report no value");
            let mut out = String::new();
            desc.serialize(&record, &mut out);
            assert_eq!(out, "");
        }
        Ok(())
    }

    #[test]
    fn test_text_content_is_escaped() -> Result<()> {
        let mut record = FLAGS.record();
        record.set("label", "R&D <dept>")?;
        let mut out = String::new();
        descriptor("label").serialize(&record, &mut out);
        assert_eq!(out, "<label>R&amp;D &lt;dept&gt;</label>");
        Ok(())
    }
}
