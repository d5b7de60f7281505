//! sitemark-core - HTML node tree and serialization
//!
//! This crate provides the document tree built by `sitemark` from Markdown
//! and its serialization to an HTML fragment.
//!
//! # Architecture
//!
//! ```text
//! Markdown String ──sitemark──▶ ┌───────────┐
//!                               │ HtmlNode  │ ──▶ HTML String
//!                               │   tree    │
//!                               └───────────┘
//! ```
//!
//! Text and attribute values are never escaped. Raw HTML present in the
//! Markdown source reaches the output unchanged.
//!
//! # Example
//!
//! ```rust
//! use sitemark_core::{to_html, HtmlNode};
//!
//! let tree = HtmlNode::parent(
//!     "p",
//!     vec![
//!         HtmlNode::text("This is "),
//!         HtmlNode::leaf("b", "bold"),
//!         HtmlNode::text(" text."),
//!     ],
//! );
//!
//! assert_eq!(to_html(&tree).unwrap(), "<p>This is <b>bold</b> text.</p>");
//! ```

mod ast;
mod serialize;

pub use ast::{Attributes, HtmlNode};
pub use serialize::{attributes_to_html, to_html};

/// A node that violates the tree model
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StructuralError {
    #[error("Parent node must have a tag")]
    MissingTag,

    #[error("Leaf node must have a value")]
    MissingValue,

    #[error("Parent node must have a children sequence")]
    MissingChildren,
}
