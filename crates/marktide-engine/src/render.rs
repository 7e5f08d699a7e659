//! HTML rendering of a finished token stream.
//!
//! The renderer is the pipeline's consumer and also its final auditor: it
//! walks the stream's nesting deltas with an open-tag stack, so a stream that
//! violates the well-nesting invariant fails here with a structural fault
//! instead of producing malformed markup.

use html_escape::{encode_double_quoted_attribute, encode_text};

use crate::fault::StructuralFault;
use crate::stream::{TokenKind, TokenStream};

/// Renders the stream as HTML, validating nesting as it goes.
pub fn render_html(tokens: &TokenStream) -> Result<String, StructuralFault> {
    let mut out = String::new();
    let mut open_tags: Vec<(usize, &str)> = Vec::new();

    for (i, token) in tokens.iter().enumerate() {
        match token.kind {
            TokenKind::Text => out.push_str(&encode_text(&token.content)),
            TokenKind::Open => {
                open_tags.push((i, token.tag.as_str()));
                out.push('<');
                out.push_str(&token.tag);
                for (name, value) in &token.attrs {
                    out.push(' ');
                    out.push_str(name);
                    out.push_str("=\"");
                    out.push_str(&encode_double_quoted_attribute(value));
                    out.push('"');
                }
                out.push('>');
                if token.block && !followed_by_inline(tokens, i) {
                    out.push('\n');
                }
            }
            TokenKind::Close => {
                match open_tags.pop() {
                    Some((_, tag)) if tag == token.tag => {}
                    _ => {
                        return Err(StructuralFault::UnbalancedClose {
                            tag: token.tag.clone(),
                            index: i,
                        });
                    }
                }
                out.push_str("</");
                out.push_str(&token.tag);
                out.push('>');
                if token.block {
                    out.push('\n');
                }
            }
        }
    }

    if let Some((index, tag)) = open_tags.pop() {
        return Err(StructuralFault::UnclosedOpen {
            tag: tag.to_string(),
            index,
        });
    }
    Ok(out)
}

fn followed_by_inline(tokens: &TokenStream, i: usize) -> bool {
    tokens.get(i + 1).is_some_and(|next| !next.block)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stream::Token;

    #[test]
    fn renders_nested_tags_and_text() {
        let s: TokenStream = vec![
            Token::open("p", "").block(),
            Token::open("ins", "^^"),
            Token::text("hi"),
            Token::close("ins", "^^"),
            Token::close("p", "").block(),
        ]
        .into();
        assert_eq!(render_html(&s).unwrap(), "<p><ins>hi</ins></p>\n");
    }

    #[test]
    fn escapes_text_content() {
        let s: TokenStream = vec![Token::text("a < b & c")].into();
        assert_eq!(render_html(&s).unwrap(), "a &lt; b &amp; c");
    }

    #[test]
    fn renders_and_escapes_attributes() {
        let mut open = Token::open("h2", "##").block();
        open.attrs.push(("id".to_string(), "a\"b".to_string()));
        let s: TokenStream = vec![open, Token::text("t"), Token::close("h2", "##").block()].into();
        assert_eq!(render_html(&s).unwrap(), "<h2 id=\"a&quot;b\">t</h2>\n");
    }

    #[test]
    fn block_open_before_block_content_gets_a_newline() {
        let s: TokenStream = vec![
            Token::open("section", "").block(),
            Token::open("p", "").block(),
            Token::text("x"),
            Token::close("p", "").block(),
            Token::close("section", "").block(),
        ]
        .into();
        assert_eq!(render_html(&s).unwrap(), "<section>\n<p>x</p>\n</section>\n");
    }

    #[test]
    fn stray_close_is_a_fault() {
        let s: TokenStream = vec![Token::close("ins", "^^")].into();
        assert_eq!(
            render_html(&s).unwrap_err(),
            StructuralFault::UnbalancedClose {
                tag: "ins".to_string(),
                index: 0,
            }
        );
    }

    #[test]
    fn mismatched_close_is_a_fault() {
        let s: TokenStream = vec![
            Token::open("ins", "^^"),
            Token::close("mark", "=="),
            Token::close("ins", "^^"),
        ]
        .into();
        assert!(matches!(
            render_html(&s).unwrap_err(),
            StructuralFault::UnbalancedClose { .. }
        ));
    }

    #[test]
    fn unclosed_open_is_a_fault() {
        let s: TokenStream = vec![Token::open("ins", "^^"), Token::text("x")].into();
        assert_eq!(
            render_html(&s).unwrap_err(),
            StructuralFault::UnclosedOpen {
                tag: "ins".to_string(),
                index: 0,
            }
        );
    }
}
