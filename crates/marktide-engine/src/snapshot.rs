//! Serializable per-token summaries for dumps and test assertions.

use serde::Serialize;

use crate::stream::{TokenKind, TokenStream};

/// Flat view of one token.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TokenSnap {
    pub kind: String,
    pub tag: String,
    pub nesting: i8,
    pub content: String,
    pub markup: String,
    pub block: bool,
    pub attrs: Vec<(String, String)>,
}

/// Normalizes the stream into a serializable form.
pub fn normalize(tokens: &TokenStream) -> Vec<TokenSnap> {
    tokens
        .iter()
        .map(|t| TokenSnap {
            kind: match t.kind {
                TokenKind::Text => "text",
                TokenKind::Open => "open",
                TokenKind::Close => "close",
            }
            .to_string(),
            tag: t.tag.clone(),
            nesting: t.nesting,
            content: t.content.clone(),
            markup: t.markup.clone(),
            block: t.block,
            attrs: t.attrs.clone(),
        })
        .collect()
}
