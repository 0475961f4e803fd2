//! XML text escaping and pretty printing

use crate::xml::model::{Content, Document, Element};

/// Escape text content for embedding in an XML fragment
pub fn escape_text(input: &str) -> String {
    if !input.contains(['&', '<', '>']) {
        return input.to_string();
    }
    input
        .replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

/// Escape an attribute value (quotes included)
pub fn escape_attr(input: &str) -> String {
    escape_text(input)
        .replace('"', "&quot;")
        .replace('\'', "&apos;")
}

/// Render a document with two-space indentation
pub fn pretty(doc: &Document) -> String {
    let mut out = String::new();
    pretty_element(&doc.root, 0, &mut out);
    out
}

fn pretty_element(element: &Element, depth: usize, out: &mut String) {
    let pad = "  ".repeat(depth);
    out.push_str(&pad);
    out.push('<');
    out.push_str(&element.name);
    for (key, value) in &element.attributes {
        out.push(' ');
        out.push_str(key);
        out.push_str("=\"");
        out.push_str(&escape_attr(value));
        out.push('"');
    }

    if element.children.is_empty() {
        out.push_str("/>\n");
        return;
    }

    // text-only elements stay on one line
    let only_text = element
        .children
        .iter()
        .all(|c| matches!(c, Content::Text(_)));
    if only_text {
        out.push('>');
        for child in &element.children {
            if let Content::Text(text) = child {
                out.push_str(&escape_text(text));
            }
        }
        out.push_str("</");
        out.push_str(&element.name);
        out.push_str(">\n");
        return;
    }

    out.push_str(">\n");
    for child in &element.children {
        match child {
            Content::Element(e) => pretty_element(e, depth + 1, out),
            Content::Text(text) => {
                out.push_str(&"  ".repeat(depth + 1));
                out.push_str(&escape_text(text));
                out.push('\n');
            }
        }
    }
    out.push_str(&pad);
    out.push_str("</");
    out.push_str(&element.name);
    out.push_str(">\n");
}
