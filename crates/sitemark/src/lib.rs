//! # sitemark
//!
//! Convert a small Markdown dialect to HTML.
//!
//! This is the engine of a static-site generator: each Markdown page becomes
//! an HTML fragment and a title, which the generator splices into a template.
//!
//! ## Supported syntax
//!
//! - Blocks, separated by blank lines: `#`..`######` headings, fenced code
//!   (```` ``` ````), `> ` quotes, `* ` / `- ` unordered lists, `1. ` ordered
//!   lists, paragraphs.
//! - Inline: `**bold**`, `*italic*`, `` `code` ``, `[text](url)`,
//!   `![alt](url)`.
//!
//! Nested emphasis, escapes, reference links and tables are not supported.
//! Text is not HTML-escaped: raw HTML in the source reaches the output as-is.
//!
//! ## Example
//!
//! ```rust
//! let markdown = "# Title\n\n> A quote.\n\n* one\n* two";
//!
//! let html = sitemark::render(markdown).unwrap();
//! assert_eq!(
//!     html,
//!     "<div><h1>Title</h1><blockquote>A quote.</blockquote><ul><li>one</li><li>two</li></ul></div>"
//! );
//!
//! assert_eq!(sitemark::title_of(markdown).unwrap(), "Title");
//! ```

pub mod block;
mod builder;
mod options;
mod service;
pub mod span;
mod title;
mod utilities;

pub use block::{blocks_of, classify, BlockType};
pub use builder::build;
pub use options::{Options, UnbalancedDelimiters};
pub use service::Renderer;
pub use sitemark_core::{to_html, Attributes, HtmlNode, StructuralError};
pub use span::{extract_images, extract_links, tokenize, tokenize_with, SpanKind, TextSpan};
pub use title::title_of;

/// Error type for sitemark operations
#[derive(Debug, thiserror::Error)]
pub enum SitemarkError {
    #[error("Missing title: {0}")]
    Format(String),

    #[error("Invalid document tree: {0}")]
    Structural(#[from] StructuralError),
}

pub type Result<T> = std::result::Result<T, SitemarkError>;

/// Parse Markdown into a document tree with default options
pub fn parse(markdown: &str) -> HtmlNode {
    build(markdown, &Options::default())
}

/// Parse Markdown into a document tree
pub fn parse_with_options(markdown: &str, options: &Options) -> HtmlNode {
    build(markdown, options)
}

/// Convert Markdown to an HTML fragment with default options
pub fn render(markdown: &str) -> Result<String> {
    Renderer::new().render(markdown)
}
