/// The closed set of token shapes the pipeline works with.
///
/// Passes change a token's kind by assigning the field directly (together
/// with `tag`, `nesting` and friends) rather than replacing the token, so a
/// descriptor holding the token's index stays valid across finalization.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
    /// Plain content, rendered as escaped text.
    Text,
    /// Opens a tag level (`nesting = +1`).
    Open,
    /// Closes a tag level (`nesting = -1`).
    Close,
}

/// One element of a [`TokenStream`](super::TokenStream).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    /// Tag name emitted by the renderer ("p", "h2", "ins", "section").
    /// Empty for text tokens.
    pub tag: String,
    /// +1 opens a level, -1 closes one, 0 for plain tokens.
    pub nesting: i8,
    /// Literal text carried by text tokens.
    pub content: String,
    /// The raw source markup this token came from ("##", "^^").
    pub markup: String,
    /// Block-level tokens get newline treatment in rendered output.
    pub block: bool,
    /// Rendered attributes, e.g. heading anchor ids.
    pub attrs: Vec<(String, String)>,
}

impl Token {
    /// A plain text token.
    pub fn text(content: impl Into<String>) -> Self {
        Self {
            kind: TokenKind::Text,
            tag: String::new(),
            nesting: 0,
            content: content.into(),
            markup: String::new(),
            block: false,
            attrs: Vec::new(),
        }
    }

    /// An inline open tag.
    pub fn open(tag: impl Into<String>, markup: impl Into<String>) -> Self {
        Self {
            kind: TokenKind::Open,
            tag: tag.into(),
            nesting: 1,
            content: String::new(),
            markup: markup.into(),
            block: false,
            attrs: Vec::new(),
        }
    }

    /// An inline close tag.
    pub fn close(tag: impl Into<String>, markup: impl Into<String>) -> Self {
        Self {
            kind: TokenKind::Close,
            tag: tag.into(),
            nesting: -1,
            content: String::new(),
            markup: markup.into(),
            block: false,
            attrs: Vec::new(),
        }
    }

    /// Marks the token as block-level.
    pub fn block(mut self) -> Self {
        self.block = true;
        self
    }
}
