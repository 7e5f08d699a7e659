//! Document pipeline: blocks, inline processing, anchors, sections.
//!
//! Passes run in a fixed order because each one assumes the structural
//! invariants established by the one before it. A document is processed by
//! exactly one invocation at a time; nothing is shared between documents.

use crate::anchors;
use crate::blocks::{self, BlockKind};
use crate::fault::StructuralFault;
use crate::inline::{self, MarkRule};
use crate::render;
use crate::sections;
use crate::stream::{Token, TokenStream};

/// Pipeline configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Options {
    /// Heading level that starts a new section.
    pub section_level: u8,
    /// Inline marker rules, applied in order.
    pub rules: Vec<MarkRule>,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            section_level: 2,
            rules: vec![MarkRule::new(b'^', "ins"), MarkRule::new(b'=', "mark")],
        }
    }
}

/// Runs the full pipeline over `source`, producing the finished stream.
pub fn parse(source: &str, opts: &Options) -> Result<TokenStream, StructuralFault> {
    let mut stream = TokenStream::new();

    for block in blocks::split_blocks(source) {
        let (tag, markup) = match block.kind {
            BlockKind::Heading(level) => (format!("h{level}"), "#".repeat(level as usize)),
            BlockKind::Paragraph => ("p".to_string(), String::new()),
        };
        stream.push(Token::open(tag.clone(), markup.clone()).block());
        stream.extend(inline::process(&block.content, &opts.rules)?);
        stream.push(Token::close(tag, markup).block());
    }

    anchors::assign_ids(&mut stream);
    sections::insert_boundaries(&mut stream, opts.section_level);
    Ok(stream)
}

/// Parses and renders in one step.
pub fn to_html(source: &str, opts: &Options) -> Result<String, StructuralFault> {
    let stream = parse(source, opts)?;
    render::render_html(&stream)
}
