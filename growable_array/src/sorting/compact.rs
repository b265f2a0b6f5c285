use crate::sorting::Sorter;
use std::cmp::Ordering;

/// Moves every empty slot of `buffer` to its end, returning how many there
/// were.
///
/// Scans from the top down and swaps each empty slot with the last live slot
/// not yet known to be trailing. Live items keep no particular order.
pub fn compact_empty_slots<E>(buffer: &mut [Option<E>]) -> usize {
    let top = buffer.len();
    let mut empty = 0;
    for i in (0..top).rev() {
        if buffer[i].is_none() {
            buffer.swap(i, top - 1 - empty);
            empty += 1;
        }
    }
    empty
}

/// Sorter adapter that tolerates empty slots interleaved with live ones
///
/// Compacts `buffer[..len]` first, then lets the wrapped sorter order the
/// live prefix. Empty slots end up trailing the sorted items.
#[derive(Debug, Clone, Default)]
pub struct Compacting<S>(pub S);

impl<E, S: Sorter<E>> Sorter<E> for Compacting<S> {
    fn sort_by<F>(&mut self, buffer: &mut [Option<E>], len: usize, compare: F)
    where
        F: FnMut(&E, &E) -> Ordering,
    {
        let len = len.min(buffer.len());
        let buffer = &mut buffer[..len];
        let empty = compact_empty_slots(buffer);
        let live = buffer.len() - empty;
        self.0.sort_by(buffer, live, compare);
    }
}
