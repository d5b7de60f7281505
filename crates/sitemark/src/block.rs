//! Block segmentation and classification.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::utilities::{
    every_line, ordered_prefix, BULLET_MARKERS, FENCE, MAX_HEADING_LEVEL, QUOTE_MARKER,
};

/// Structural type of a block
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BlockType {
    Heading,
    Code,
    Quote,
    UnorderedList,
    OrderedList,
    Paragraph,
}

type Matcher = fn(&str) -> bool;

/// Blank line between blocks, LF or CRLF
static BLOCK_SEPARATOR: Lazy<Regex> = Lazy::new(|| Regex::new(r"\r?\n\r?\n").unwrap());

/// Block shapes in priority order. The first matching entry wins; a block
/// matching none of them is a paragraph.
const BLOCK_RULES: &[(BlockType, Matcher)] = &[
    (BlockType::Heading, is_heading),
    (BlockType::Code, is_code),
    (BlockType::Quote, is_quote),
    (BlockType::UnorderedList, is_unordered_list),
    (BlockType::OrderedList, is_ordered_list),
];

/// Split a document into trimmed, non-empty blocks separated by blank lines
pub fn blocks_of(document: &str) -> Vec<&str> {
    BLOCK_SEPARATOR
        .split(document)
        .map(str::trim)
        .filter(|block| !block.is_empty())
        .collect()
}

/// Classify a block by its structural prefix
pub fn classify(block: &str) -> BlockType {
    BLOCK_RULES
        .iter()
        .find(|(_, matches)| matches(block))
        .map_or(BlockType::Paragraph, |&(block_type, _)| block_type)
}

/// Level of a heading block: the length of its leading `#` run, when that run
/// is 1 to 6 characters long and followed by a space
pub fn heading_level(block: &str) -> Option<u8> {
    let level = block.bytes().take_while(|&b| b == b'#').count();
    if (1..=MAX_HEADING_LEVEL).contains(&level) && block[level..].starts_with(' ') {
        u8::try_from(level).ok()
    } else {
        None
    }
}

fn is_heading(block: &str) -> bool {
    heading_level(block).is_some()
}

// A lone fence counts as both opener and closer.
fn is_code(block: &str) -> bool {
    block.starts_with(FENCE) && block.ends_with(FENCE)
}

fn is_quote(block: &str) -> bool {
    every_line(block, |line| line.starts_with(QUOTE_MARKER))
}

// All lines must share one marker.
fn is_unordered_list(block: &str) -> bool {
    BULLET_MARKERS
        .iter()
        .any(|marker| every_line(block, |line| line.starts_with(marker)))
}

fn is_ordered_list(block: &str) -> bool {
    let mut n = 0;
    every_line(block, |line| {
        n += 1;
        line.starts_with(ordered_prefix(n).as_str())
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    #[test]
    fn test_blocks_of() {
        let blocks = blocks_of("# Heading\n\nParagraph text.\n\n* item 1\n* item 2");
        assert_eq!(blocks, vec!["# Heading", "Paragraph text.", "* item 1\n* item 2"]);
    }

    #[test]
    fn test_blocks_of_trims_and_drops_empty() {
        let markdown = "
# This is a heading



This is a paragraph of text. It has some **bold** and *italic* words inside of it.

* This is the first list item in a list block
* This is a list item
        ";
        assert_eq!(
            blocks_of(markdown),
            vec![
                "# This is a heading",
                "This is a paragraph of text. It has some **bold** and *italic* words inside of it.",
                "* This is the first list item in a list block\n* This is a list item",
            ]
        );
    }

    #[test]
    fn test_blocks_of_blank_document() {
        assert!(blocks_of("").is_empty());
        assert!(blocks_of("\n\n  \n\n").is_empty());
    }

    #[test]
    fn test_blocks_of_crlf() {
        assert_eq!(
            blocks_of("# T\r\n\r\npara\r\nmore\r\n\r\n* a\r\n* b\r\n"),
            vec!["# T", "para\r\nmore", "* a\r\n* b"]
        );
        assert_eq!(classify("* a\r\n* b"), BlockType::UnorderedList);
    }

    #[rstest]
    #[case("# Heading", BlockType::Heading)]
    #[case("## Heading", BlockType::Heading)]
    #[case("###### Six", BlockType::Heading)]
    #[case("####### Seven", BlockType::Paragraph)]
    #[case("#NoSpace", BlockType::Paragraph)]
    #[case("```\nprint('Hello, World!')\n```", BlockType::Code)]
    #[case("```", BlockType::Code)]
    #[case("````", BlockType::Code)]
    #[case("``````", BlockType::Code)]
    #[case("> This is a quote.", BlockType::Quote)]
    #[case("> one\n> two", BlockType::Quote)]
    #[case("> one\ntwo", BlockType::Paragraph)]
    #[case("* Item 1\n* Item 2", BlockType::UnorderedList)]
    #[case("- Item 1\n- Item 2", BlockType::UnorderedList)]
    #[case("* Item 1\n- Item 2", BlockType::Paragraph)]
    #[case("1. a\n2. b", BlockType::OrderedList)]
    #[case("1. a\n3. b", BlockType::Paragraph)]
    #[case("2. a\n3. b", BlockType::Paragraph)]
    #[case("1.a", BlockType::Paragraph)]
    #[case("This is a normal paragraph.", BlockType::Paragraph)]
    #[case("", BlockType::Paragraph)]
    fn test_classify(#[case] block: &str, #[case] expected: BlockType) {
        assert_eq!(classify(block), expected);
    }

    #[test]
    fn test_heading_wins_over_later_rules() {
        // Also ends with a fence, but the heading rule comes first.
        assert_eq!(classify("# title ```"), BlockType::Heading);
    }

    #[test]
    fn test_ordered_list_past_nine() {
        let block: Vec<String> = (1..=11).map(|n| format!("{n}. item")).collect();
        assert_eq!(classify(&block.join("\n")), BlockType::OrderedList);
    }

    #[test]
    fn test_heading_level_uses_leading_run() {
        assert_eq!(heading_level("### Three"), Some(3));
        assert_eq!(heading_level("## C# notes"), Some(2));
        assert_eq!(heading_level("# a ## b"), Some(1));
        assert_eq!(heading_level("Not # a heading"), None);
    }
}
