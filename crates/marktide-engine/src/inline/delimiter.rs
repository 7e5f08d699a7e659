/// Metadata for one candidate marker chunk awaiting balancing.
///
/// The descriptor points at its backing token by stream index; balancing
/// fills in `end` without touching the token itself. A descriptor whose `end`
/// is never set stays plain text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Delimiter {
    /// Marker byte the run was made of.
    pub marker: u8,
    /// Length-sensitivity bucket. 0 matches any opener to any closer of the
    /// same marker; a positive value is the run length used for
    /// rule-of-three disambiguation.
    pub class: usize,
    /// Index of the backing token in the fragment stream.
    pub token: usize,
    /// Matched partner, as an index into the same nesting group.
    pub end: Option<usize>,
    /// Eligible to open a styled span.
    pub open: bool,
    /// Eligible to close a styled span.
    pub close: bool,
    /// How many earlier candidates a backward search may skip over.
    pub jump: usize,
}

/// The delimiter descriptors scoped to one enclosing container level.
///
/// Balancing never matches descriptors across groups, which is what keeps the
/// surrounding container's nesting well-formed. The document root is the one
/// implicit group (`anchor` unset); a group created by entering an open tag
/// records that token's index as its anchor.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NestingGroup {
    /// Token index of the open tag that created this level; `None` for the
    /// document root.
    pub anchor: Option<usize>,
    pub delimiters: Vec<Delimiter>,
}

impl NestingGroup {
    /// A group scoped to the container opened by the token at `anchor`.
    pub fn scoped_to(anchor: usize) -> Self {
        Self {
            anchor: Some(anchor),
            delimiters: Vec::new(),
        }
    }
}
