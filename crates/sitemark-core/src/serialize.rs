//! HTML serialization
//!
//! Converts an [`HtmlNode`] tree into an HTML string. Values and attribute
//! values are written as-is: nothing is escaped.

use crate::ast::{Attributes, HtmlNode};
use crate::StructuralError;

/// Serialize a node tree to an HTML string
pub fn to_html(node: &HtmlNode) -> Result<String, StructuralError> {
    let mut output = String::with_capacity(1024);
    serialize_node(node, &mut output)?;
    Ok(output)
}

/// Render attributes as `key="value"` pairs joined by single spaces.
///
/// An empty map renders as an empty string.
pub fn attributes_to_html(attributes: &Attributes) -> String {
    attributes
        .iter()
        .map(|(key, value)| format!("{key}=\"{value}\""))
        .collect::<Vec<_>>()
        .join(" ")
}

fn serialize_node(node: &HtmlNode, out: &mut String) -> Result<(), StructuralError> {
    match node {
        HtmlNode::Leaf {
            tag,
            value,
            attributes,
        } => {
            match tag.as_deref().filter(|t| !t.is_empty()) {
                Some(tag) => {
                    open_tag(tag, attributes, out);
                    out.push_str(value);
                    close_tag(tag, out);
                }
                None => out.push_str(value),
            }
            Ok(())
        }

        HtmlNode::Parent {
            tag,
            children,
            attributes,
        } => {
            let tag = tag
                .as_deref()
                .filter(|t| !t.is_empty())
                .ok_or(StructuralError::MissingTag)?;
            open_tag(tag, attributes, out);
            for child in children {
                serialize_node(child, out)?;
            }
            close_tag(tag, out);
            Ok(())
        }
    }
}

fn open_tag(tag: &str, attributes: &Attributes, out: &mut String) {
    out.push('<');
    out.push_str(tag);
    push_attributes(attributes, out);
    out.push('>');
}

fn close_tag(tag: &str, out: &mut String) {
    out.push_str("</");
    out.push_str(tag);
    out.push('>');
}

// Each pair is preceded by one space, so an empty map writes nothing.
fn push_attributes(attributes: &Attributes, out: &mut String) {
    for (key, value) in attributes {
        out.push(' ');
        out.push_str(key);
        out.push_str("=\"");
        out.push_str(value);
        out.push('"');
    }
}
