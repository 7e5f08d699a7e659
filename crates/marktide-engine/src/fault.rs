use thiserror::Error;

/// Fatal structural contract violations.
///
/// Unmatched delimiters are never faults (they degrade to plain text); these
/// variants only arise when a pass hands a later pass a stream or descriptor
/// set that breaks the pipeline invariants. Processing of the offending
/// document stops at the first fault; faults are not retried or patched over.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StructuralFault {
    /// A descriptor's matched-end index points outside its nesting group.
    #[error("delimiter match index {index} is out of range for a group of {len} descriptors")]
    MatchOutOfRange { index: usize, len: usize },

    /// Two descriptors claim the same partner, or a pair is not reciprocal.
    #[error("delimiter {opener} is claimed by {closer} but does not claim it back")]
    DoubleClaim { opener: usize, closer: usize },

    /// A close tag appeared with no matching open tag at the same depth.
    #[error("close tag </{tag}> at token {index} does not match any open tag")]
    UnbalancedClose { tag: String, index: usize },

    /// An open tag was never closed before the end of the stream.
    #[error("open tag <{tag}> at token {index} is never closed")]
    UnclosedOpen { tag: String, index: usize },
}
