//! Configuration options for Markdown parsing

/// How an emphasis or code delimiter without a closing partner is treated
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum UnbalancedDelimiters {
    /// Keep the unclosed delimiter as literal text
    #[default]
    Literal,
    /// Legacy alternation: the text after the last delimiter is typed as if
    /// the span had been closed
    Alternate,
}

/// Options for Markdown parsing
#[derive(Debug, Clone)]
pub struct Options {
    /// Tag of the root container wrapping every block
    pub root_tag: String,

    /// Treatment of unclosed inline delimiters
    pub unbalanced_delimiters: UnbalancedDelimiters,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            root_tag: "div".to_string(),
            unbalanced_delimiters: UnbalancedDelimiters::Literal,
        }
    }
}
