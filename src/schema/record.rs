//! Record schemas and instances
//!
//! A [`Schema`] is an immutable, ordered set of field descriptors plus the
//! tag name of the record's XML wrapper element. Schemas are built once at
//! process start and shared; [`Record`] instances carry the mutable
//! field-name-keyed storage and are created either by [`Schema::load`] from
//! a parsed document or directly from field/value pairs.

use std::fmt;

use indexmap::IndexMap;
use tracing::debug;

use crate::error::{Error, ErrorKind, Result, Span};
use crate::schema::field::{FieldDescriptor, FieldKind, FieldValue, Raw};
use crate::xml::model::Element;
use crate::xml::parser::Parser;
use crate::xml::writer;

/// In-memory field name to XML tag name: underscores become hyphens
pub fn field_name_to_tag(name: &str) -> String {
    name.replace('_', "-")
}

/// XML tag name to in-memory field name: hyphens become underscores
pub fn tag_to_field_name(tag: &str) -> String {
    tag.replace('-', "_")
}

/// An ordered, immutable record schema
#[derive(Debug)]
pub struct Schema {
    tag: &'static str,
    fields: IndexMap<&'static str, FieldDescriptor>,
}

impl Schema {
    /// Start declaring a schema for records wrapped in `<tag>`
    pub fn builder(tag: &'static str) -> SchemaBuilder {
        SchemaBuilder {
            tag,
            fields: IndexMap::new(),
        }
    }

    /// The XML wrapper tag of this record type
    pub fn tag(&self) -> &'static str {
        self.tag
    }

    /// Look up a field descriptor by field name
    pub fn field(&self, name: &str) -> Option<&FieldDescriptor> {
        self.fields.get(name)
    }

    /// True if `name` is a declared field
    pub fn contains(&self, name: &str) -> bool {
        self.fields.contains_key(name)
    }

    /// Field descriptors in declaration order
    pub fn fields(&self) -> impl Iterator<Item = &FieldDescriptor> {
        self.fields.values()
    }

    /// Field names in declaration order
    pub fn field_names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.fields.keys().copied()
    }

    /// Number of declared fields
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Create an empty instance of this record type
    pub fn record(&'static self) -> Record {
        Record::new(self)
    }

    /// Populate an instance from a parsed document node
    ///
    /// Each element child is routed to the declared field matching its tag
    /// name; dispatch follows the field's declared kind. Children with no
    /// matching field, text and comment children, and childless elements
    /// are ignored; their fields stay unset. Coercion errors propagate.
    pub fn load(&'static self, node: &Element) -> Result<Record> {
        let mut record = Record::new(self);
        for child in node.element_children() {
            let name = tag_to_field_name(&child.name);
            let Some(desc) = self.field(name.as_str()) else {
                continue;
            };
            match desc.kind() {
                FieldKind::Record(_) | FieldKind::Array(_) => {
                    desc.set(&mut record, Raw::Node(child))?;
                }
                _ => {
                    if let Some(text) = child.first_text() {
                        desc.set(&mut record, Raw::Text(text.to_string()))?;
                    }
                }
            }
        }
        debug!(tag = self.tag, populated = record.values.len(), "loaded record");
        Ok(record)
    }

    /// Build an instance directly from field/value pairs
    ///
    /// Keys that do not name a declared field are silently ignored.
    pub fn record_from<'a, I>(&'static self, pairs: I) -> Result<Record>
    where
        I: IntoIterator<Item = (&'a str, Raw<'a>)>,
    {
        let mut record = Record::new(self);
        for (name, raw) in pairs {
            let Some(desc) = self.field(name) else {
                continue;
            };
            desc.set(&mut record, raw)?;
        }
        Ok(record)
    }
}

/// Declaration-order builder for [`Schema`]
#[derive(Debug)]
pub struct SchemaBuilder {
    tag: &'static str,
    fields: IndexMap<&'static str, FieldDescriptor>,
}

impl SchemaBuilder {
    fn push(mut self, name: &'static str, kind: FieldKind) -> Self {
        debug_assert!(
            !self.fields.contains_key(name),
            "field {name} declared twice"
        );
        self.fields.insert(name, FieldDescriptor::new(name, kind));
        self
    }

    pub fn string(self, name: &'static str) -> Self {
        self.push(name, FieldKind::String)
    }

    pub fn integer(self, name: &'static str) -> Self {
        self.push(name, FieldKind::Integer)
    }

    pub fn date(self, name: &'static str) -> Self {
        self.push(name, FieldKind::Date)
    }

    pub fn datetime(self, name: &'static str) -> Self {
        self.push(name, FieldKind::DateTime)
    }

    pub fn boolean(self, name: &'static str) -> Self {
        self.push(name, FieldKind::Boolean)
    }

    pub fn record(self, name: &'static str, schema: &'static Schema) -> Self {
        self.push(name, FieldKind::Record(schema))
    }

    pub fn array(self, name: &'static str, schema: &'static Schema) -> Self {
        self.push(name, FieldKind::Array(schema))
    }

    /// Attach a default value to the most recently declared field
    pub fn default_value(mut self, value: impl Into<FieldValue>) -> Self {
        if let Some(index) = self.fields.len().checked_sub(1) {
            if let Some((_, desc)) = self.fields.get_index_mut(index) {
                desc.set_default(value.into());
            }
        }
        self
    }

    pub fn build(self) -> Schema {
        debug!(tag = self.tag, fields = self.fields.len(), "built schema");
        Schema {
            tag: self.tag,
            fields: self.fields,
        }
    }
}

/// A mutable record instance conforming to a [`Schema`]
///
/// Storage starts empty; a field with no entry is unset, which is distinct
/// from a field explicitly set to a falsy value at the storage level. Fields
/// cannot be retracted once set.
#[derive(Clone)]
pub struct Record {
    schema: &'static Schema,
    values: IndexMap<&'static str, FieldValue>,
}

impl Record {
    pub fn new(schema: &'static Schema) -> Self {
        Self {
            schema,
            values: IndexMap::new(),
        }
    }

    pub fn schema(&self) -> &'static Schema {
        self.schema
    }

    pub(crate) fn stored(&self, name: &str) -> Option<&FieldValue> {
        self.values.get(name)
    }

    pub(crate) fn store(&mut self, name: &'static str, value: FieldValue) {
        self.values.insert(name, value);
    }

    /// Effective value of a field: stored, else its declared default
    pub fn get(&self, name: &str) -> Option<&FieldValue> {
        self.schema.field(name).and_then(|desc| desc.get(self))
    }

    /// True iff the field's effective value exists and is truthy
    pub fn has_value(&self, name: &str) -> bool {
        self.schema
            .field(name)
            .is_some_and(|desc| desc.has_value(self))
    }

    /// Coerce and store a raw value; `UnknownField` for undeclared names
    pub fn set<'a>(&mut self, name: &str, raw: impl Into<Raw<'a>>) -> Result<()> {
        let Some(desc) = self.schema.field(name) else {
            return Err(Error::new(
                ErrorKind::UnknownField {
                    name: name.to_string(),
                },
                Span::empty(),
            ));
        };
        desc.set(self, raw.into())
    }

    pub fn get_str(&self, name: &str) -> Option<&str> {
        self.get(name).and_then(FieldValue::as_str)
    }

    pub fn get_int(&self, name: &str) -> Option<i64> {
        self.get(name).and_then(FieldValue::as_int)
    }

    pub fn get_bool(&self, name: &str) -> Option<bool> {
        self.get(name).and_then(FieldValue::as_bool)
    }

    pub fn get_record(&self, name: &str) -> Option<&Record> {
        self.get(name).and_then(FieldValue::as_record)
    }

    pub fn get_records(&self, name: &str) -> Option<&[Record]> {
        self.get(name).and_then(FieldValue::as_records)
    }

    /// Serialize to an XML fragment: every field with a value, in schema
    /// declaration order, wrapped in the record's tag
    pub fn serialize(&self) -> String {
        let mut out = String::new();
        self.serialize_into(&mut out);
        debug!(tag = self.schema.tag, bytes = out.len(), "serialized record");
        out
    }

    pub(crate) fn serialize_into(&self, out: &mut String) {
        out.push('<');
        out.push_str(self.schema.tag);
        out.push('>');
        for desc in self.schema.fields() {
            desc.serialize(self, out);
        }
        out.push_str("</");
        out.push_str(self.schema.tag);
        out.push('>');
    }

    /// Serialize with two-space indentation
    pub fn pretty_xml(&self) -> Result<String> {
        let xml = self.serialize();
        let doc = Parser::new(xml.as_bytes()).parse()?;
        Ok(writer::pretty(&doc))
    }
}

impl PartialEq for Record {
    fn eq(&self, other: &Self) -> bool {
        std::ptr::eq(self.schema, other.schema) && self.values == other.values
    }
}

impl fmt::Debug for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Record({}) ", self.schema.tag)?;
        let mut map = f.debug_map();
        for (name, value) in &self.values {
            map.entry(name, value);
        }
        map.finish()
    }
}
