//! Pluggable in-place sort strategies for slot buffers.
//!
//! A slot buffer is a `[Option<E>]` where `None` marks an empty slot. Every
//! [Sorter] receives the buffer together with the count of live slots and
//! must only ever touch `buffer[..len]`.

use std::cmp::Ordering;

pub use compact::{compact_empty_slots, Compacting};
pub use quick::QuickSorter;

mod compact;
mod quick;

/// Reorders the live prefix of a slot buffer
pub trait Sorter<E> {
    /// Sorts `buffer[..len]` into non-decreasing order according to `compare`
    ///
    /// Implementations expect every slot in `buffer[..len]` to be occupied.
    /// Slots at `len` and beyond are never read or written. Sorting zero or
    /// one item is a no-op.
    fn sort_by<F>(&mut self, buffer: &mut [Option<E>], len: usize, compare: F)
    where
        F: FnMut(&E, &E) -> Ordering;
}

/// Compares two slots, ordering empty slots after every live one
pub(crate) fn compare_slots<E>(
    a: &Option<E>,
    b: &Option<E>,
    compare: &mut impl FnMut(&E, &E) -> Ordering,
) -> Ordering {
    match (a, b) {
        (Some(a), Some(b)) => compare(a, b),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}
