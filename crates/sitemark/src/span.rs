//! Inline span tokenizer.
//!
//! Turns a run of inline text into typed spans with a fixed pipeline of
//! passes: code, bold, italic, image, link. Each pass only looks at text that
//! is still plain, so the order matters: `**` must be consumed before `*`,
//! and images must be extracted before links or `![alt](url)` would be read
//! as a link preceded by `!`.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::options::{Options, UnbalancedDelimiters};

/// `![alt](url)`
static IMAGE_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"!\[([^\]]+)\]\(([^)]+)\)").unwrap());

/// `[text](url)`
static LINK_PATTERN: Lazy<Regex> = Lazy::new(|| Regex::new(r"\[([^\]]+)\]\(([^)]+)\)").unwrap());

/// Delimiter passes in pipeline order
const DELIMITER_PASSES: &[(&str, fn(String) -> TextSpan)] = &[
    ("`", TextSpan::Code),
    ("**", TextSpan::Bold),
    ("*", TextSpan::Italic),
];

/// Kind of an inline span
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SpanKind {
    Plain,
    Bold,
    Italic,
    Code,
    Link,
    Image,
}

/// A typed run of inline text
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TextSpan {
    /// Untyped text
    Plain(String),

    /// `**bold**`
    Bold(String),

    /// `*italic*`
    Italic(String),

    /// `` `code` ``
    Code(String),

    /// `[text](url)`
    Link { text: String, url: String },

    /// `![alt](url)`
    Image { alt: String, url: String },
}

impl TextSpan {
    pub fn kind(&self) -> SpanKind {
        match self {
            TextSpan::Plain(_) => SpanKind::Plain,
            TextSpan::Bold(_) => SpanKind::Bold,
            TextSpan::Italic(_) => SpanKind::Italic,
            TextSpan::Code(_) => SpanKind::Code,
            TextSpan::Link { .. } => SpanKind::Link,
            TextSpan::Image { .. } => SpanKind::Image,
        }
    }

    /// Visible text of the span (alt text for images)
    pub fn text(&self) -> &str {
        match self {
            TextSpan::Plain(text)
            | TextSpan::Bold(text)
            | TextSpan::Italic(text)
            | TextSpan::Code(text)
            | TextSpan::Link { text, .. } => text,
            TextSpan::Image { alt, .. } => alt,
        }
    }

    /// URL of a link or image; `None` for every other kind
    pub fn target(&self) -> Option<&str> {
        match self {
            TextSpan::Link { url, .. } | TextSpan::Image { url, .. } => Some(url),
            _ => None,
        }
    }
}

/// Tokenize inline text with default options
pub fn tokenize(text: &str) -> Vec<TextSpan> {
    tokenize_with(text, &Options::default())
}

/// Tokenize inline text
pub fn tokenize_with(text: &str, options: &Options) -> Vec<TextSpan> {
    let mut pieces = vec![Piece::live(TextSpan::Plain(text.to_string()))];

    for &(delimiter, make) in DELIMITER_PASSES {
        pieces = apply_pass(pieces, |text| {
            split_delimited(text, delimiter, make, options.unbalanced_delimiters)
        });
    }

    // Kept delimiters rejoin their text so a URL like `a*b` still matches.
    let mut pieces: Vec<Piece> = merge_literals(pieces).into_iter().map(Piece::live).collect();
    pieces = apply_pass(pieces, |text| {
        split_pattern(text, &IMAGE_PATTERN, |alt, url| TextSpan::Image { alt, url })
    });
    pieces = apply_pass(pieces, |text| {
        split_pattern(text, &LINK_PATTERN, |text, url| TextSpan::Link { text, url })
    });

    let spans: Vec<TextSpan> = pieces.into_iter().map(|piece| piece.span).collect();
    log::trace!("tokenized {} bytes into {} spans", text.len(), spans.len());
    spans
}

/// All `(alt, url)` pairs of image syntax in `text`, in order
pub fn extract_images(text: &str) -> Vec<(String, String)> {
    IMAGE_PATTERN
        .captures_iter(text)
        .map(|caps| (caps[1].to_string(), caps[2].to_string()))
        .collect()
}

/// All `(text, url)` pairs of link syntax in `text`, in order.
///
/// Image syntax is not reported.
pub fn extract_links(text: &str) -> Vec<(String, String)> {
    LINK_PATTERN
        .captures_iter(text)
        .filter(|caps| {
            caps.get(0)
                .map_or(true, |m| !text[..m.start()].ends_with('!'))
        })
        .map(|caps| (caps[1].to_string(), caps[2].to_string()))
        .collect()
}

/// A span in flight through the pipeline.
///
/// Literal pieces hold delimiters that were kept as text; no later
/// delimiter pass touches them.
#[derive(Debug)]
struct Piece {
    span: TextSpan,
    live: bool,
}

impl Piece {
    fn live(span: TextSpan) -> Self {
        Self { span, live: true }
    }

    fn literal(text: &str) -> Self {
        Self {
            span: TextSpan::Plain(text.to_string()),
            live: false,
        }
    }
}

/// Run `split` on every live plain piece, passing the rest through
fn apply_pass<F>(pieces: Vec<Piece>, mut split: F) -> Vec<Piece>
where
    F: FnMut(&str) -> Vec<Piece>,
{
    let mut out = Vec::with_capacity(pieces.len());
    for piece in pieces {
        if piece.live {
            if let TextSpan::Plain(text) = &piece.span {
                out.extend(split(text));
                continue;
            }
        }
        out.push(piece);
    }
    out
}

/// Scan `text` for `delimiter`, toggling between outside (plain) and inside
/// (`make`) at each occurrence. Empty fragments are dropped.
fn split_delimited(
    text: &str,
    delimiter: &str,
    make: fn(String) -> TextSpan,
    unbalanced: UnbalancedDelimiters,
) -> Vec<Piece> {
    let mut pieces = Vec::new();
    let mut inside = false;
    let mut rest = text;

    while let Some(pos) = rest.find(delimiter) {
        push_fragment(&mut pieces, &rest[..pos], inside, make);
        inside = !inside;
        rest = &rest[pos + delimiter.len()..];
    }

    if inside && unbalanced == UnbalancedDelimiters::Literal {
        log::trace!("unclosed {delimiter:?} kept as text");
        pieces.push(Piece::literal(delimiter));
        inside = false;
    }
    push_fragment(&mut pieces, rest, inside, make);

    pieces
}

fn push_fragment(
    pieces: &mut Vec<Piece>,
    fragment: &str,
    inside: bool,
    make: fn(String) -> TextSpan,
) {
    if fragment.is_empty() {
        return;
    }
    let text = fragment.to_string();
    let span = if inside { make(text) } else { TextSpan::Plain(text) };
    pieces.push(Piece::live(span));
}

/// Cut every match of `pattern` out of `text` as a span built by `make` from
/// its two capture groups; text between matches stays plain.
fn split_pattern<F>(text: &str, pattern: &Regex, make: F) -> Vec<Piece>
where
    F: Fn(String, String) -> TextSpan,
{
    let mut pieces = Vec::new();
    let mut last = 0;

    for caps in pattern.captures_iter(text) {
        let Some(whole) = caps.get(0) else { continue };
        if whole.start() > last {
            pieces.push(Piece::live(TextSpan::Plain(text[last..whole.start()].to_string())));
        }
        pieces.push(Piece::live(make(caps[1].to_string(), caps[2].to_string())));
        last = whole.end();
    }

    if last < text.len() {
        pieces.push(Piece::live(TextSpan::Plain(text[last..].to_string())));
    }

    pieces
}

/// Literal pieces join the plain text around them. Live plain pieces are
/// never merged with each other.
fn merge_literals(pieces: Vec<Piece>) -> Vec<TextSpan> {
    let mut spans: Vec<TextSpan> = Vec::with_capacity(pieces.len());
    let mut after_literal = false;

    for piece in pieces {
        let joins = !piece.live || after_literal;
        after_literal = !piece.live;

        if joins {
            if let (Some(TextSpan::Plain(prev)), TextSpan::Plain(text)) =
                (spans.last_mut(), &piece.span)
            {
                prev.push_str(text);
                continue;
            }
        }
        spans.push(piece.span);
    }

    spans
}
