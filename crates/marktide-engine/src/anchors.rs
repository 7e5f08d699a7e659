//! Heading anchor assignment.
//!
//! Gives every heading open token a slug `id` attribute derived from its
//! text content, disambiguating repeats with a numeric suffix so links keep
//! pointing at the heading they were written against.

use std::collections::HashMap;

use crate::stream::{TokenKind, TokenStream};

/// Assigns `id` attributes to heading open tokens. Duplicate slugs within one
/// document get `-2`, `-3`, ... suffixes; headings with no sluggable text get
/// no attribute.
pub fn assign_ids(tokens: &mut TokenStream) {
    let mut seen: HashMap<String, usize> = HashMap::new();

    for i in 0..tokens.len() {
        if tokens[i].kind != TokenKind::Open || !is_heading_tag(&tokens[i].tag) {
            continue;
        }
        let slug = slugify(&heading_text(tokens, i));
        if slug.is_empty() {
            continue;
        }
        let count = seen.entry(slug.clone()).or_insert(0);
        *count += 1;
        let id = if *count == 1 {
            slug
        } else {
            format!("{slug}-{count}")
        };
        tokens[i].attrs.push(("id".to_string(), id));
    }
}

fn is_heading_tag(tag: &str) -> bool {
    matches!(tag, "h1" | "h2" | "h3" | "h4" | "h5" | "h6")
}

/// Concatenated text content between a heading open and its matching close.
fn heading_text(tokens: &TokenStream, open: usize) -> String {
    let mut text = String::new();
    let mut depth = 0i32;
    for token in tokens.iter().skip(open) {
        depth += i32::from(token.nesting);
        if depth <= 0 {
            break;
        }
        if token.kind == TokenKind::Text {
            text.push_str(&token.content);
        }
    }
    text
}

/// Lowercases, keeps alphanumerics, and collapses separator runs to single
/// dashes. Everything else is dropped.
fn slugify(text: &str) -> String {
    let mut slug = String::new();
    let mut pending_dash = false;
    for c in text.to_lowercase().chars() {
        if c.is_alphanumeric() {
            if pending_dash && !slug.is_empty() {
                slug.push('-');
            }
            pending_dash = false;
            slug.push(c);
        } else if c.is_whitespace() || c == '-' {
            pending_dash = true;
        }
    }
    slug
}
