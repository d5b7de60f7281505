//! Renderer - the main entry point for Markdown to HTML conversion.

use sitemark_core::HtmlNode;

use crate::builder::build;
use crate::options::Options;
use crate::title::title_of;
use crate::Result;

/// Converts Markdown documents with a fixed set of options
#[derive(Debug, Clone, Default)]
pub struct Renderer {
    options: Options,
}

impl Renderer {
    /// Create a Renderer with default options
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a Renderer with custom options
    pub fn with_options(options: Options) -> Self {
        Self { options }
    }

    /// Parse Markdown into a document tree
    pub fn parse(&self, markdown: &str) -> HtmlNode {
        build(markdown, &self.options)
    }

    /// Convert Markdown to an HTML fragment
    pub fn render(&self, markdown: &str) -> Result<String> {
        Ok(self.parse(markdown).to_html()?)
    }

    /// Extract the page title
    pub fn title(&self, markdown: &str) -> Result<String> {
        title_of(markdown)
    }

    /// Get the current options
    pub fn options(&self) -> &Options {
        &self.options
    }

    /// Get mutable access to options
    pub fn options_mut(&mut self) -> &mut Options {
        &mut self.options
    }
}
