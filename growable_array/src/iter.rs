use crate::{GrowableArray, ListError};
use std::iter::FusedIterator;

/// Borrowing iterator over the live items of a [GrowableArray]
#[derive(Debug, Clone)]
pub struct Iter<'a, E> {
    pub(crate) slots: std::slice::Iter<'a, Option<E>>,
}

impl<'a, E> Iterator for Iter<'a, E> {
    type Item = &'a E;

    fn next(&mut self) -> Option<Self::Item> {
        self.slots.next().and_then(Option::as_ref)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.slots.size_hint()
    }
}

impl<E> DoubleEndedIterator for Iter<'_, E> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.slots.next_back().and_then(Option::as_ref)
    }
}

impl<E> ExactSizeIterator for Iter<'_, E> {}

impl<E> FusedIterator for Iter<'_, E> {}

/// Fail-fast forward cursor over a [GrowableArray]
///
/// Unlike [Iter], a cursor does not borrow the list between steps, so the
/// list may be mutated while the cursor is alive. Any successful mutation
/// after the cursor was created makes every following [Cursor::next] fail
/// with [ListError::ConcurrentMutation]. A cursor can not be rewound, and
/// reading any list other than the one that created it fails with
/// [ListError::ForeignCursor].
#[derive(Debug)]
pub struct Cursor {
    list: u64,
    position: usize,
    expected: u64,
}

impl Cursor {
    pub(crate) fn new(list: u64, expected: u64) -> Self {
        Self {
            list,
            position: 0,
            expected,
        }
    }

    /// Index of the item the next call to [Cursor::next] would yield
    pub fn position(&self) -> usize {
        self.position
    }

    /// Whether there are items left to read. Does not check for mutations.
    pub fn has_next<E, S>(&self, list: &GrowableArray<E, S>) -> bool {
        self.position != list.len()
    }

    /// Reads the next item and advances
    ///
    /// Fails with [ListError::ConcurrentMutation] if the list was modified
    /// since the cursor was created, and with [ListError::NoMoreElements]
    /// once every item was read.
    pub fn next<'a, E, S>(&mut self, list: &'a GrowableArray<E, S>) -> Result<&'a E, ListError> {
        if list.id() != self.list {
            return Err(ListError::ForeignCursor);
        }

        let found = list.modification_stamp();
        if found != self.expected {
            return Err(ListError::ConcurrentMutation {
                expected: self.expected,
                found,
            });
        }

        if self.position >= list.len() {
            return Err(ListError::NoMoreElements);
        }

        let item = list.get(self.position)?;
        self.position += 1;
        Ok(item)
    }
}
