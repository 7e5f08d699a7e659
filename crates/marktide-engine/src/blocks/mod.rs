//! Line-based front-end splitting raw source into blocks.
//!
//! Phase 1 classifies each line from local facts only; phase 2 folds the
//! classified lines into heading and paragraph blocks. The inline pipeline
//! runs over each block's content afterward.

/// The kind of a leaf block.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlockKind {
    /// An ATX heading with its level (1 through 6).
    Heading(u8),
    /// The default block when no other opener matches.
    Paragraph,
}

/// A block with its inline content extracted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Block {
    pub kind: BlockKind,
    /// Content handed to the inline pipeline. Paragraph lines are joined
    /// with `\n`, so soft breaks survive as literal newlines.
    pub content: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum LineClass<'a> {
    Blank,
    Heading { level: u8, rest: &'a str },
    Text(&'a str),
}

fn classify(line: &str) -> LineClass<'_> {
    if line.trim().is_empty() {
        return LineClass::Blank;
    }
    let hashes = line.bytes().take_while(|b| *b == b'#').count();
    if (1..=6).contains(&hashes) {
        let rest = &line[hashes..];
        if rest.is_empty() || rest.starts_with(' ') || rest.starts_with('\t') {
            return LineClass::Heading {
                level: hashes as u8,
                rest: rest.trim(),
            };
        }
    }
    LineClass::Text(line)
}

/// Splits `src` into heading and paragraph blocks.
pub fn split_blocks(src: &str) -> Vec<Block> {
    let mut out = Vec::new();
    let mut paragraph: Vec<&str> = Vec::new();

    let flush = |paragraph: &mut Vec<&str>, out: &mut Vec<Block>| {
        if !paragraph.is_empty() {
            out.push(Block {
                kind: BlockKind::Paragraph,
                content: paragraph.join("\n"),
            });
            paragraph.clear();
        }
    };

    for line in src.lines() {
        match classify(line) {
            LineClass::Blank => flush(&mut paragraph, &mut out),
            LineClass::Heading { level, rest } => {
                flush(&mut paragraph, &mut out);
                out.push(Block {
                    kind: BlockKind::Heading(level),
                    content: rest.to_string(),
                });
            }
            LineClass::Text(text) => paragraph.push(text),
        }
    }
    flush(&mut paragraph, &mut out);
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn heading_levels() {
        let blocks = split_blocks("# one\n###### six");
        assert_eq!(blocks[0].kind, BlockKind::Heading(1));
        assert_eq!(blocks[0].content, "one");
        assert_eq!(blocks[1].kind, BlockKind::Heading(6));
        assert_eq!(blocks[1].content, "six");
    }

    #[test]
    fn seven_hashes_is_text() {
        let blocks = split_blocks("####### nope");
        assert_eq!(blocks[0].kind, BlockKind::Paragraph);
    }

    #[test]
    fn hash_without_space_is_text() {
        let blocks = split_blocks("#nospace");
        assert_eq!(blocks[0].kind, BlockKind::Paragraph);
        assert_eq!(blocks[0].content, "#nospace");
    }

    #[test]
    fn bare_hashes_make_an_empty_heading() {
        let blocks = split_blocks("##");
        assert_eq!(blocks[0].kind, BlockKind::Heading(2));
        assert_eq!(blocks[0].content, "");
    }

    #[test]
    fn consecutive_lines_join_into_one_paragraph() {
        let blocks = split_blocks("first\nsecond\n\nthird");
        assert_eq!(blocks.len(), 2);
        assert_eq!(blocks[0].content, "first\nsecond");
        assert_eq!(blocks[1].content, "third");
    }

    #[test]
    fn blank_lines_produce_nothing() {
        assert!(split_blocks("\n\n  \n").is_empty());
        assert!(split_blocks("").is_empty());
    }

    #[test]
    fn heading_interrupts_a_paragraph() {
        let blocks = split_blocks("text\n## head\nmore");
        assert_eq!(blocks.len(), 3);
        assert_eq!(blocks[0].kind, BlockKind::Paragraph);
        assert_eq!(blocks[1].kind, BlockKind::Heading(2));
        assert_eq!(blocks[2].kind, BlockKind::Paragraph);
    }
}
