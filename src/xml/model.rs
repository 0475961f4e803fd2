//! XML data model
//!
//! The generic document tree consumed by the mapping engine. The engine only
//! looks at tag names, element children, and text content; attributes are
//! carried through for callers that need them (the wire format marks value
//! kinds with a `type` attribute).

use indexmap::IndexMap;

/// XML document
#[derive(Clone, Debug, PartialEq)]
pub struct Document {
    pub root: Element,
}

/// XML element
#[derive(Clone, Debug, PartialEq)]
pub struct Element {
    pub name: String,
    pub attributes: IndexMap<String, String>,
    pub children: Vec<Content>,
}

/// XML content node
#[derive(Clone, Debug, PartialEq)]
pub enum Content {
    Element(Element),
    Text(String),
}

impl Element {
    /// Create an element with no attributes or children
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            attributes: IndexMap::new(),
            children: Vec::new(),
        }
    }

    /// Iterate over element children, skipping text nodes
    pub fn element_children(&self) -> impl Iterator<Item = &Element> {
        self.children.iter().filter_map(|c| match c {
            Content::Element(e) => Some(e),
            Content::Text(_) => None,
        })
    }

    /// Content of the first text child, if any
    pub fn first_text(&self) -> Option<&str> {
        self.children.iter().find_map(|c| match c {
            Content::Text(t) => Some(t.as_str()),
            Content::Element(_) => None,
        })
    }

    /// First element child with the given tag name
    pub fn child(&self, name: &str) -> Option<&Element> {
        self.element_children().find(|e| e.name == name)
    }

    /// True if the element has no children at all
    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }
}
