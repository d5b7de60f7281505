//! Build an HTML node tree from Markdown text
//!
//! Each block becomes one child of the root container. Inline content is
//! tokenized into spans and every span becomes one leaf.

use sitemark_core::HtmlNode;

use crate::block::{blocks_of, classify, heading_level, BlockType};
use crate::options::Options;
use crate::span::{tokenize_with, TextSpan};
use crate::utilities::{strip_bullet, strip_ordered, strip_quote, FENCE};

/// Build the document tree for `document`. Never fails: any block that does
/// not match a known shape becomes a paragraph.
pub fn build(document: &str, options: &Options) -> HtmlNode {
    let children = blocks_of(document)
        .into_iter()
        .enumerate()
        .map(|(index, block)| {
            let block_type = classify(block);
            log::debug!("block {index}: {block_type:?}");
            block_to_node(block, block_type, options)
        })
        .collect();

    HtmlNode::parent(&options.root_tag, children)
}

fn block_to_node(block: &str, block_type: BlockType, options: &Options) -> HtmlNode {
    match block_type {
        BlockType::Heading => heading_node(block, options),
        BlockType::Code => code_node(block),
        BlockType::Quote => quote_node(block, options),
        BlockType::UnorderedList => list_node("ul", block, options, |line, _| strip_bullet(line)),
        BlockType::OrderedList => list_node("ol", block, options, strip_ordered),
        BlockType::Paragraph => paragraph_node(block, options),
    }
}

fn heading_node(block: &str, options: &Options) -> HtmlNode {
    match heading_level(block) {
        Some(level) => {
            // Skip the `#` run and the single space after it.
            let content = block[usize::from(level) + 1..].trim();
            HtmlNode::parent(&format!("h{level}"), inline_nodes(content, options))
        }
        None => paragraph_node(block, options),
    }
}

// Code content is kept raw, inner newlines included. Overlapping fences
// leave an empty body.
fn code_node(block: &str) -> HtmlNode {
    let code = block
        .get(FENCE.len()..block.len().saturating_sub(FENCE.len()))
        .unwrap_or("");
    HtmlNode::parent("pre", vec![HtmlNode::leaf("code", code)])
}

fn quote_node(block: &str, options: &Options) -> HtmlNode {
    let content = block.lines().map(strip_quote).collect::<Vec<_>>().join("\n");
    HtmlNode::parent("blockquote", inline_nodes(content.trim(), options))
}

/// One `li` per line; `strip` receives the line and its 1-based number
fn list_node<F>(tag: &str, block: &str, options: &Options, strip: F) -> HtmlNode
where
    F: Fn(&str, usize) -> &str,
{
    let items = block
        .lines()
        .enumerate()
        .map(|(i, line)| HtmlNode::parent("li", inline_nodes(strip(line, i + 1), options)))
        .collect();
    HtmlNode::parent(tag, items)
}

fn paragraph_node(block: &str, options: &Options) -> HtmlNode {
    HtmlNode::parent("p", inline_nodes(block, options))
}

fn inline_nodes(text: &str, options: &Options) -> Vec<HtmlNode> {
    tokenize_with(text, options)
        .into_iter()
        .map(HtmlNode::from)
        .collect()
}

impl From<TextSpan> for HtmlNode {
    fn from(span: TextSpan) -> Self {
        match span {
            TextSpan::Plain(text) => HtmlNode::text(text),
            TextSpan::Bold(text) => HtmlNode::leaf("b", text),
            TextSpan::Italic(text) => HtmlNode::leaf("i", text),
            TextSpan::Code(text) => HtmlNode::leaf("code", text),
            TextSpan::Link { text, url } => HtmlNode::leaf_with_attr("a", text, "href", &url),
            TextSpan::Image { alt, url } => HtmlNode::leaf_with_attr("img", alt, "src", &url),
        }
    }
}
