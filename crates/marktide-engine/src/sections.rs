//! Whole-document pass partitioning the stream into sections.
//!
//! Runs once after all inline finalization. Each open tag of the chosen
//! heading level ends the previous section and begins a new one; the
//! traversal is backward so the cursor never revisits an inserted token.

use crate::stream::{Token, TokenKind, TokenStream};

pub const SECTION_TAG: &str = "section";

fn open_boundary() -> Token {
    Token::open(SECTION_TAG, "").block()
}

fn close_boundary() -> Token {
    Token::close(SECTION_TAG, "").block()
}

/// Inserts section boundaries around every `level` heading.
///
/// Afterward the stream starts with exactly one open boundary and ends with
/// exactly one close boundary, and one close/open pair immediately precedes
/// every chosen-level heading open that is not the first token.
pub fn insert_boundaries(tokens: &mut TokenStream, level: u8) {
    let heading_tag = format!("h{level}");

    for i in (0..tokens.len()).rev() {
        if tokens[i].kind == TokenKind::Open && tokens[i].tag == heading_tag {
            tokens.insert_before(i, [close_boundary(), open_boundary()]);
        }
    }

    match tokens.get(0) {
        Some(first) if first.kind == TokenKind::Close && first.tag == SECTION_TAG => {
            // The document began with a chosen-level heading; the stray
            // leading close pairs with an implicit final open.
            tokens.rotate_first_to_last();
        }
        _ => {
            tokens.insert_before(0, [open_boundary()]);
            tokens.push(close_boundary());
        }
    }
}
