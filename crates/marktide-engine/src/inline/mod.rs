//! Inline marker processing: scan, balance, finalize.
//!
//! One fragment (the inline content of a single block) is processed at a
//! time. The scanner turns marker runs into candidate text tokens plus
//! delimiter descriptors, the balancer pairs the descriptors up within their
//! nesting group, and the finalizer rewrites the paired tokens into tags.
//! Whatever stays unpaired remains literal text.

pub mod balancer;
pub mod delimiter;
pub mod finalizer;
pub mod scanner;

pub use delimiter::{Delimiter, NestingGroup};

use crate::fault::StructuralFault;
use crate::stream::{Token, TokenKind, TokenStream};

/// A configured inline styling rule: a doubled `marker` character styles
/// spans with `tag`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MarkRule {
    pub marker: u8,
    pub tag: String,
}

impl MarkRule {
    pub fn new(marker: u8, tag: impl Into<String>) -> Self {
        Self {
            marker,
            tag: tag.into(),
        }
    }

    /// The two-character markup string a matched pair carries.
    pub fn markup(&self) -> String {
        let ch = self.marker as char;
        format!("{ch}{ch}")
    }
}

/// Runs the full inline pipeline over one fragment.
///
/// Produces the fragment's token stream with every matched marker pair
/// rewritten into open/close tags and adjacent leftover text collapsed.
pub fn process(src: &str, rules: &[MarkRule]) -> Result<TokenStream, StructuralFault> {
    let mut tokens = TokenStream::new();
    // The fragment root is the one implicit nesting group; container-creating
    // rules would push scoped groups here.
    let mut root = NestingGroup::default();
    let mut pending = String::new();
    let bytes = src.as_bytes();
    let mut pos = 0;

    while pos < src.len() {
        if is_marker(bytes[pos], rules) {
            flush_text(&mut tokens, &mut pending);
            let consumed = scanner::emit_run(&mut tokens, &mut root, src, pos);
            if consumed > 0 {
                pos += consumed;
            } else {
                // A lone marker character has no styling meaning.
                pending.push(bytes[pos] as char);
                pos += 1;
            }
            continue;
        }
        let next = bytes[pos + 1..]
            .iter()
            .position(|b| is_marker(*b, rules))
            .map_or(src.len(), |off| pos + 1 + off);
        pending.push_str(&src[pos..next]);
        pos = next;
    }
    flush_text(&mut tokens, &mut pending);

    balancer::balance(&mut root);
    for rule in rules {
        finalizer::finalize(rule, &mut tokens, &root)?;
    }
    collapse_text(&mut tokens);
    Ok(tokens)
}

fn is_marker(byte: u8, rules: &[MarkRule]) -> bool {
    rules.iter().any(|r| r.marker == byte)
}

fn flush_text(tokens: &mut TokenStream, pending: &mut String) {
    if !pending.is_empty() {
        tokens.push(Token::text(std::mem::take(pending)));
    }
}

/// Merges adjacent plain-text tokens left behind by unmatched marker chunks.
/// Iterates backward per the stream's mutation contract.
fn collapse_text(tokens: &mut TokenStream) {
    for i in (1..tokens.len()).rev() {
        if tokens[i].kind == TokenKind::Text && tokens[i - 1].kind == TokenKind::Text {
            let tail = std::mem::take(&mut tokens[i].content);
            tokens[i - 1].content.push_str(&tail);
            tokens.remove_range(i, 1);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn rules() -> Vec<MarkRule> {
        vec![MarkRule::new(b'^', "ins"), MarkRule::new(b'=', "mark")]
    }

    fn kinds_and_text(tokens: &TokenStream) -> Vec<(TokenKind, String)> {
        tokens
            .iter()
            .map(|t| {
                let label = if t.kind == TokenKind::Text {
                    t.content.clone()
                } else {
                    t.tag.clone()
                };
                (t.kind, label)
            })
            .collect()
    }

    #[test]
    fn plain_text_passes_through() {
        let tokens = process("just words", &rules()).unwrap();
        assert_eq!(tokens.len(), 1);
        assert_eq!(tokens[0].content, "just words");
    }

    #[test]
    fn double_run_styles_a_span() {
        let tokens = process("^^like this^^", &rules()).unwrap();
        assert_eq!(
            kinds_and_text(&tokens),
            vec![
                (TokenKind::Open, "ins".to_string()),
                (TokenKind::Text, "like this".to_string()),
                (TokenKind::Close, "ins".to_string()),
            ]
        );
    }

    #[test]
    fn seven_marker_runs_nest_and_strand_lone_markers() {
        let tokens = process("^^^^^^^hey^^^^^^^", &rules()).unwrap();
        assert_eq!(
            kinds_and_text(&tokens),
            vec![
                (TokenKind::Text, "^".to_string()),
                (TokenKind::Open, "ins".to_string()),
                (TokenKind::Open, "ins".to_string()),
                (TokenKind::Open, "ins".to_string()),
                (TokenKind::Text, "hey".to_string()),
                (TokenKind::Close, "ins".to_string()),
                (TokenKind::Close, "ins".to_string()),
                (TokenKind::Close, "ins".to_string()),
                (TokenKind::Text, "^".to_string()),
            ]
        );
    }

    #[test]
    fn minimum_odd_run_strands_both_lone_markers() {
        let tokens = process("^^^x^^^", &rules()).unwrap();
        assert_eq!(
            kinds_and_text(&tokens),
            vec![
                (TokenKind::Text, "^".to_string()),
                (TokenKind::Open, "ins".to_string()),
                (TokenKind::Text, "x".to_string()),
                (TokenKind::Close, "ins".to_string()),
                (TokenKind::Text, "^".to_string()),
            ]
        );
    }

    #[test]
    fn unmatched_run_collapses_back_into_text() {
        let tokens = process("^^only an opener", &rules()).unwrap();
        assert_eq!(tokens.len(), 1);
        assert_eq!(tokens[0].content, "^^only an opener");
    }

    #[test]
    fn lone_marker_character_stays_literal() {
        let tokens = process("a ^ b", &rules()).unwrap();
        assert_eq!(tokens.len(), 1);
        assert_eq!(tokens[0].content, "a ^ b");
    }

    #[test]
    fn rules_do_not_interfere() {
        let tokens = process("^^a ==b== c^^", &rules()).unwrap();
        assert_eq!(
            kinds_and_text(&tokens),
            vec![
                (TokenKind::Open, "ins".to_string()),
                (TokenKind::Text, "a ".to_string()),
                (TokenKind::Open, "mark".to_string()),
                (TokenKind::Text, "b".to_string()),
                (TokenKind::Close, "mark".to_string()),
                (TokenKind::Text, " c".to_string()),
                (TokenKind::Close, "ins".to_string()),
            ]
        );
    }

    #[test]
    fn empty_fragment_produces_no_tokens() {
        let tokens = process("", &rules()).unwrap();
        assert!(tokens.is_empty());
    }
}
