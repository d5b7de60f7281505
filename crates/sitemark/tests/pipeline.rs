use pretty_assertions::assert_eq;
use sitemark::{parse, render, title_of, HtmlNode, SitemarkError};

#[test]
fn quote_and_list_document() {
    let markdown = "# Title\n\n> A quote.\n\n* one\n* two";
    let tree = parse(markdown);

    assert_eq!(
        tree,
        HtmlNode::parent(
            "div",
            vec![
                HtmlNode::parent("h1", vec![HtmlNode::text("Title")]),
                HtmlNode::parent("blockquote", vec![HtmlNode::text("A quote.")]),
                HtmlNode::parent(
                    "ul",
                    vec![
                        HtmlNode::parent("li", vec![HtmlNode::text("one")]),
                        HtmlNode::parent("li", vec![HtmlNode::text("two")]),
                    ],
                ),
            ],
        )
    );
    assert_eq!(
        tree.to_html().unwrap(),
        "<div><h1>Title</h1><blockquote>A quote.</blockquote><ul><li>one</li><li>two</li></ul></div>"
    );
}

#[test]
fn every_block_type() {
    let markdown = "
# This is a heading

> This is a quote.

```
print('Hello, World!')
```

* This is an unordered list

1. This is an ordered list

        ";
    let expected = "<div><h1>This is a heading</h1><blockquote>This is a quote.</blockquote><pre><code>
print('Hello, World!')
</code></pre><ul><li>This is an unordered list</li></ul><ol><li>This is an ordered list</li></ol></div>";

    assert_eq!(render(markdown).unwrap(), expected);
}

#[test]
fn paragraph_with_all_inline_kinds() {
    let markdown = "This is **bold**, *italic*, `code`, a [link](https://example.com) and ![an image](/img.png).";
    assert_eq!(
        render(markdown).unwrap(),
        r#"<div><p>This is <b>bold</b>, <i>italic</i>, <code>code</code>, a <a href="https://example.com">link</a> and <img src="/img.png">an image</img>.</p></div>"#
    );
}

#[test]
fn raw_html_passes_through() {
    assert_eq!(
        render("<script>alert(1)</script> & more").unwrap(),
        "<div><p><script>alert(1)</script> & more</p></div>"
    );
}

#[test]
fn page_title_and_body() {
    let markdown = "# My Page\n\nSome *text*.";
    assert_eq!(title_of(markdown).unwrap(), "My Page");
    assert_eq!(
        render(markdown).unwrap(),
        "<div><h1>My Page</h1><p>Some <i>text</i>.</p></div>"
    );
}

#[test]
fn missing_title_is_a_format_error() {
    let err = title_of("## Sub heading\n\ntext").unwrap_err();
    assert!(matches!(err, SitemarkError::Format(_)));
    assert!(err.to_string().starts_with("Missing title"));
}
