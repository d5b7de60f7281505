//! HTML document tree
//!
//! This module defines the nodes produced by the Markdown tree builder.
//! A document is a tree of parents and leaves; each parent owns its children.

use indexmap::IndexMap;

use crate::StructuralError;

/// Ordered attribute map. Insertion order is the render order.
pub type Attributes = IndexMap<String, String>;

/// A node in the HTML output tree
#[derive(Debug, Clone, PartialEq)]
pub enum HtmlNode {
    /// Terminal node: an optional tag wrapping a text value.
    ///
    /// A leaf without a tag renders its value verbatim.
    Leaf {
        tag: Option<String>,
        value: String,
        attributes: Attributes,
    },

    /// Composite node wrapping an ordered list of children
    Parent {
        tag: Option<String>,
        children: Vec<HtmlNode>,
        attributes: Attributes,
    },
}

impl HtmlNode {
    /// Untagged text leaf
    pub fn text(value: impl Into<String>) -> Self {
        HtmlNode::Leaf {
            tag: None,
            value: value.into(),
            attributes: Attributes::new(),
        }
    }

    /// Tagged leaf without attributes
    pub fn leaf(tag: &str, value: impl Into<String>) -> Self {
        HtmlNode::Leaf {
            tag: Some(tag.to_string()),
            value: value.into(),
            attributes: Attributes::new(),
        }
    }

    /// Tagged leaf with a single attribute
    pub fn leaf_with_attr(tag: &str, value: impl Into<String>, key: &str, attr: &str) -> Self {
        let mut attributes = Attributes::new();
        attributes.insert(key.to_string(), attr.to_string());
        HtmlNode::Leaf {
            tag: Some(tag.to_string()),
            value: value.into(),
            attributes,
        }
    }

    /// Tagged parent without attributes
    pub fn parent(tag: &str, children: Vec<HtmlNode>) -> Self {
        HtmlNode::Parent {
            tag: Some(tag.to_string()),
            children,
            attributes: Attributes::new(),
        }
    }

    /// Build a leaf from possibly-missing parts.
    ///
    /// An empty value is fine; a missing one is a [`StructuralError::MissingValue`].
    pub fn try_leaf(
        tag: Option<&str>,
        value: Option<&str>,
        attributes: Attributes,
    ) -> Result<Self, StructuralError> {
        let value = value.ok_or(StructuralError::MissingValue)?;
        Ok(HtmlNode::Leaf {
            tag: tag.map(str::to_string),
            value: value.to_string(),
            attributes,
        })
    }

    /// Build a parent from possibly-missing parts.
    ///
    /// An empty children vector is fine; a missing one is a
    /// [`StructuralError::MissingChildren`]. A missing tag is only reported
    /// at serialization time.
    pub fn try_parent(
        tag: Option<&str>,
        children: Option<Vec<HtmlNode>>,
        attributes: Attributes,
    ) -> Result<Self, StructuralError> {
        let children = children.ok_or(StructuralError::MissingChildren)?;
        Ok(HtmlNode::Parent {
            tag: tag.map(str::to_string),
            children,
            attributes,
        })
    }

    /// Append an attribute, keeping insertion order
    pub fn with_attribute(mut self, key: &str, value: &str) -> Self {
        match &mut self {
            HtmlNode::Leaf { attributes, .. } | HtmlNode::Parent { attributes, .. } => {
                attributes.insert(key.to_string(), value.to_string());
            }
        }
        self
    }

    pub fn tag(&self) -> Option<&str> {
        match self {
            HtmlNode::Leaf { tag, .. } | HtmlNode::Parent { tag, .. } => tag.as_deref(),
        }
    }

    pub fn attributes(&self) -> &Attributes {
        match self {
            HtmlNode::Leaf { attributes, .. } | HtmlNode::Parent { attributes, .. } => attributes,
        }
    }

    /// Children of a parent; empty for leaves
    pub fn children(&self) -> &[HtmlNode] {
        match self {
            HtmlNode::Parent { children, .. } => children,
            HtmlNode::Leaf { .. } => &[],
        }
    }

    /// Value of a leaf; `None` for parents
    pub fn value(&self) -> Option<&str> {
        match self {
            HtmlNode::Leaf { value, .. } => Some(value),
            HtmlNode::Parent { .. } => None,
        }
    }

    pub fn is_leaf(&self) -> bool {
        matches!(self, HtmlNode::Leaf { .. })
    }

    /// Serialize this node to HTML
    pub fn to_html(&self) -> Result<String, StructuralError> {
        crate::serialize::to_html(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_try_leaf_requires_value() {
        let result = HtmlNode::try_leaf(Some("p"), None, Attributes::new());
        assert_eq!(result, Err(StructuralError::MissingValue));
    }

    #[test]
    fn test_try_leaf_accepts_empty_value() {
        let node = HtmlNode::try_leaf(Some("p"), Some(""), Attributes::new()).unwrap();
        assert_eq!(node.value(), Some(""));
        assert_eq!(node.tag(), Some("p"));
    }

    #[test]
    fn test_try_parent_requires_children() {
        let result = HtmlNode::try_parent(Some("div"), None, Attributes::new());
        assert_eq!(result, Err(StructuralError::MissingChildren));
    }

    #[test]
    fn test_try_parent_accepts_empty_children() {
        let node = HtmlNode::try_parent(Some("div"), Some(Vec::new()), Attributes::new()).unwrap();
        assert!(node.children().is_empty());
        assert!(!node.is_leaf());
    }

    #[test]
    fn test_with_attribute_keeps_order() {
        let node = HtmlNode::leaf("img", "")
            .with_attribute("src", "image.png")
            .with_attribute("alt", "An image");
        let keys: Vec<&str> = node.attributes().keys().map(String::as_str).collect();
        assert_eq!(keys, vec!["src", "alt"]);
    }
}
