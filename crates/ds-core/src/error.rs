use crate::tree::NodeId;

/// Failures reported by the fallible cursor operations.
///
/// The set is closed: every fallible operation on [`crate::Cursor`] and
/// [`crate::ListCursor`] reports one of these three and leaves the receiver
/// exactly as it was before the call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, thiserror::Error)]
pub enum CursorError {
    /// An index, or the cursor's own position, is not an occupied index.
    #[error("index out of range")]
    IndexOutOfRange,
    /// An extraction needs more elements than remain after the position.
    #[error("underflow")]
    Underflow,
    /// A mutation would exceed the capacity, or a replace window would run
    /// past the end of the buffer.
    #[error("overflow")]
    Overflow,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum TreeError {
    #[error("node {0} does not belong to this tree")]
    UnknownNode(NodeId),
}
