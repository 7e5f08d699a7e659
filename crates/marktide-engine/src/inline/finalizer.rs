//! Rewrites matched delimiter tokens into open/close tags.
//!
//! Finalization is the only pass allowed to change a token's kind, and the
//! lone-marker repair is the only place an inline token ever moves. Both
//! stay within the fragment the descriptors were scanned from.

use crate::fault::StructuralFault;
use crate::stream::{TokenKind, TokenStream};

use super::MarkRule;
use super::delimiter::NestingGroup;

/// Converts every matched pair of `rule`'s marker in `group` into tag tokens,
/// then relocates leftover lone markers past their close tags.
///
/// Descriptor state is validated on the way: an `end` outside the group or a
/// non-reciprocal pair is a structural fault and aborts the document.
pub fn finalize(
    rule: &MarkRule,
    tokens: &mut TokenStream,
    group: &NestingGroup,
) -> Result<(), StructuralFault> {
    let delims = &group.delimiters;
    let markup = rule.markup();
    let mut lone_markers = Vec::new();

    for (idx, opener) in delims.iter().enumerate() {
        if opener.marker != rule.marker {
            continue;
        }
        let Some(end) = opener.end else { continue };
        if end >= delims.len() {
            return Err(StructuralFault::MatchOutOfRange {
                index: end,
                len: delims.len(),
            });
        }
        if end == idx || delims[end].end != Some(idx) {
            return Err(StructuralFault::DoubleClaim {
                opener: idx.min(end),
                closer: idx.max(end),
            });
        }
        if end < idx {
            // Already rewritten from the opener side.
            continue;
        }
        let closer = &delims[end];

        let token = &mut tokens[opener.token];
        token.kind = TokenKind::Open;
        token.tag = rule.tag.clone();
        token.nesting = 1;
        token.markup = markup.clone();
        token.content.clear();

        let token = &mut tokens[closer.token];
        token.kind = TokenKind::Close;
        token.tag = rule.tag.clone();
        token.nesting = -1;
        token.markup = markup.clone();
        token.content.clear();

        // An odd-length opening run left a single marker outside the span at
        // its start; the matching odd-length closing run leaves one just
        // before the closer, which must end up outside the span too.
        if closer.token > 0 {
            let prev = &tokens[closer.token - 1];
            if prev.kind == TokenKind::Text && prev.content.as_bytes() == [rule.marker] {
                lone_markers.push(closer.token - 1);
            }
        }
    }

    repair_lone_markers(rule, tokens, lone_markers);
    Ok(())
}

/// Moves each recorded lone marker past the consecutive close tags that
/// follow it. Descending order keeps the indices still to be processed valid.
/// A marker with no close tag after it stays where it is, and re-running the
/// repair on an already-repaired stream moves nothing.
fn repair_lone_markers(rule: &MarkRule, tokens: &mut TokenStream, mut lone_markers: Vec<usize>) {
    lone_markers.sort_unstable();
    while let Some(i) = lone_markers.pop() {
        let mut j = i + 1;
        while j < tokens.len() && tokens[j].kind == TokenKind::Close && tokens[j].tag == rule.tag {
            j += 1;
        }
        j -= 1;
        if i != j {
            tokens.swap(i, j);
        }
    }
}
