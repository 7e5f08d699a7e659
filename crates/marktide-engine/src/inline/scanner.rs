//! Marker-run scanning and flanking classification.
//!
//! A run of identical marker characters is chunked into two-character text
//! tokens, each backed by a delimiter descriptor in the current nesting
//! group. Odd-length runs shed one leading single-character token first; the
//! pair finalizer later moves its closing-side counterpart back out of the
//! styled span.

use crate::stream::{Token, TokenStream};

use super::delimiter::{Delimiter, NestingGroup};

/// Tokenizes the marker run starting at byte `start` of `src`.
///
/// Appends the run's text tokens to `tokens` and one descriptor per
/// two-character chunk to `group`, then returns the number of bytes consumed.
/// Returns 0 for runs shorter than two characters; a lone marker has no
/// styling meaning and is left to the caller as ordinary text.
pub fn emit_run(tokens: &mut TokenStream, group: &mut NestingGroup, src: &str, start: usize) -> usize {
    let bytes = src.as_bytes();
    let marker = bytes[start];
    let mut end = start;
    while end < bytes.len() && bytes[end] == marker {
        end += 1;
    }
    let length = end - start;
    if length < 2 {
        return 0;
    }

    // One flanking classification covers every chunk of the run; markers with
    // multiplicity class 0 do not need per-chunk recomputation.
    let (can_open, can_close) = classify_flanking(src, start, end);

    let ch = marker as char;
    let mut remaining = length;
    if remaining % 2 == 1 {
        tokens.push(Token::text(ch.to_string()));
        remaining -= 1;
    }
    for _ in 0..remaining / 2 {
        tokens.push(Token::text(format!("{ch}{ch}")));
        group.delimiters.push(Delimiter {
            marker,
            class: 0,
            token: tokens.len() - 1,
            end: None,
            open: can_open,
            close: can_close,
            jump: 0,
        });
    }
    length
}

/// Left/right-flanking classification from the characters immediately around
/// the run. Fragment boundaries count as whitespace.
///
/// A run can open when it is not followed by whitespace and, when followed by
/// punctuation, is preceded by whitespace or punctuation. Closing mirrors
/// the rule on the preceding character.
fn classify_flanking(src: &str, run_start: usize, run_end: usize) -> (bool, bool) {
    let before = src[..run_start].chars().next_back();
    let after = src[run_end..].chars().next();

    let prev_ws = before.is_none_or(char::is_whitespace);
    let next_ws = after.is_none_or(char::is_whitespace);
    let prev_punct = before.is_some_and(|c| c.is_ascii_punctuation());
    let next_punct = after.is_some_and(|c| c.is_ascii_punctuation());

    let can_open = !next_ws && (!next_punct || prev_ws || prev_punct);
    let can_close = !prev_ws && (!prev_punct || next_ws || next_punct);
    (can_open, can_close)
}
