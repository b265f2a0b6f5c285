use thiserror::Error;

#[derive(Debug, Clone, Copy, Eq, PartialEq, Error)]
pub enum ListError {
    #[error("Illegal capacity: {}", .0)]
    InvalidCapacity(i64),
    #[error("Illegal index: {index} (length is {len})")]
    IndexOutOfRange { index: usize, len: usize },
    #[error("List was modified during iteration (expected stamp {expected}, found {found})")]
    ConcurrentMutation { expected: u64, found: u64 },
    #[error("Cursor belongs to a different list")]
    ForeignCursor,
    #[error("No more elements")]
    NoMoreElements,
}
