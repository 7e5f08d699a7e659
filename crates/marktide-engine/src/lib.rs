//! Token-stream transformation engine for a Markdown-like rendering pipeline.
//!
//! Inline marker runs (`^^like this^^`) are balanced into well-nested
//! open/close tag tokens, and a final whole-document pass partitions the
//! stream into sections around a configurable heading level. Everything
//! operates on a flat, index-addressed token array; see [`stream`] for the
//! mutation contract the passes rely on.

pub mod anchors;
pub mod blocks;
pub mod fault;
pub mod inline;
pub mod pipeline;
pub mod render;
pub mod sections;
pub mod snapshot;
pub mod stream;

// Re-export key types for easier usage
pub use fault::StructuralFault;
pub use inline::MarkRule;
pub use pipeline::{Options, parse, to_html};
pub use render::render_html;
pub use stream::{Token, TokenKind, TokenStream};
