//! Prefix helpers and constants shared by the block classifier and the tree builder.

/// Code block fence
pub const FENCE: &str = "```";

/// Deepest heading level
pub const MAX_HEADING_LEVEL: usize = 6;

/// Unordered list markers
pub const BULLET_MARKERS: &[&str] = &["* ", "- "];

/// Prefix every quote line must carry
pub const QUOTE_MARKER: &str = "> ";

/// Prefix of the `n`th line of an ordered list, e.g. `"3. "`
pub fn ordered_prefix(n: usize) -> String {
    format!("{n}. ")
}

/// Strip a leading bullet marker, if any
pub fn strip_bullet(line: &str) -> &str {
    BULLET_MARKERS
        .iter()
        .find_map(|marker| line.strip_prefix(marker))
        .unwrap_or(line)
}

/// Strip the `"<n>. "` prefix of the `n`th ordered list line, if present
pub fn strip_ordered(line: &str, n: usize) -> &str {
    line.strip_prefix(ordered_prefix(n).as_str()).unwrap_or(line)
}

/// Strip a leading quote marker, if any
pub fn strip_quote(line: &str) -> &str {
    line.strip_prefix(QUOTE_MARKER).unwrap_or(line)
}

/// Check that a block has at least one line and every line satisfies `pred`
pub fn every_line<F>(block: &str, pred: F) -> bool
where
    F: FnMut(&str) -> bool,
{
    !block.is_empty() && block.lines().all(pred)
}
