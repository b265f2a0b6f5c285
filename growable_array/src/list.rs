use crate::growth::grown_capacity;
use crate::iter::{Cursor, Iter};
use crate::sorting::{QuickSorter, Sorter};
use crate::{ListError, DEFAULT_CAPACITY};
use itertools::Itertools;
use std::cmp::Ordering;
use std::fmt::{Debug, Display, Formatter};
use std::hash::{Hash, Hasher};
use std::sync::atomic::{self, AtomicU64};
use tracing::trace;

static NEXT_LIST_ID: AtomicU64 = AtomicU64::new(0);

fn next_list_id() -> u64 {
    NEXT_LIST_ID.fetch_add(1, atomic::Ordering::Relaxed)
}

/// Growable array of `E`, ordered by the sort strategy `S`
///
/// Live items always occupy the front of the backing buffer, so insertion
/// and removal shift the items after the affected index. The buffer never
/// shrinks, not even on [GrowableArray::clear].
///
/// Not synchronized. Mutations made while a [Cursor] is alive are detected by
/// the cursor, not prevented.
pub struct GrowableArray<E, S = QuickSorter> {
    id: u64,
    store: Box<[Option<E>]>,
    len: usize,
    stamp: u64,
    sorter: S,
}

impl<E> GrowableArray<E> {
    /// Creates an empty list with [DEFAULT_CAPACITY] and a [QuickSorter]
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_CAPACITY)
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self::with_capacity_and_sorter(capacity, QuickSorter::new())
    }

    /// Creates an empty list from a signed capacity, rejecting negative ones
    pub fn try_with_capacity(capacity: i64) -> Result<Self, ListError> {
        Self::try_with_capacity_and_sorter(capacity, QuickSorter::new())
    }
}

impl<E, S> GrowableArray<E, S> {
    pub fn with_sorter(sorter: S) -> Self {
        Self::with_capacity_and_sorter(DEFAULT_CAPACITY, sorter)
    }

    pub fn with_capacity_and_sorter(capacity: usize, sorter: S) -> Self {
        Self {
            id: next_list_id(),
            store: empty_slots(capacity),
            len: 0,
            stamp: 0,
            sorter,
        }
    }

    pub fn try_with_capacity_and_sorter(capacity: i64, sorter: S) -> Result<Self, ListError> {
        let capacity =
            usize::try_from(capacity).map_err(|_| ListError::InvalidCapacity(capacity))?;
        Ok(Self::with_capacity_and_sorter(capacity, sorter))
    }

    /// Appends an item to the back of the list
    pub fn push(&mut self, value: E) {
        self.ensure_capacity(self.len + 1);
        self.store[self.len] = Some(value);
        self.len += 1;
        self.bump();
    }

    /// Inserts an item at `index`, shifting every item after it one slot to
    /// the right. Inserting at `len` is the same as [GrowableArray::push].
    pub fn insert(&mut self, index: usize, value: E) -> Result<(), ListError> {
        if index > self.len {
            return Err(self.out_of_range(index));
        }

        self.ensure_capacity(self.len + 1);
        self.store[index..=self.len].rotate_right(1);
        self.store[index] = Some(value);
        self.len += 1;
        self.bump();
        Ok(())
    }

    pub fn get(&self, index: usize) -> Result<&E, ListError> {
        self.store[..self.len]
            .get(index)
            .and_then(Option::as_ref)
            .ok_or(self.out_of_range(index))
    }

    /// Removes and returns the item at `index`, shifting every item after it
    /// one slot to the left
    pub fn remove(&mut self, index: usize) -> Result<E, ListError> {
        let len = self.len;
        let value = self.store[..len]
            .get_mut(index)
            .and_then(Option::take)
            .ok_or(ListError::IndexOutOfRange { index, len })?;

        // The vacated slot travels to the end of the live range
        self.store[index..len].rotate_left(1);
        self.len -= 1;
        self.bump();
        Ok(value)
    }

    /// Overwrites the item at `index`, returning the previous one
    pub fn replace(&mut self, index: usize, value: E) -> Result<E, ListError> {
        let len = self.len;
        let slot = self.store[..len]
            .get_mut(index)
            .and_then(Option::as_mut)
            .ok_or(ListError::IndexOutOfRange { index, len })?;
        let previous = std::mem::replace(slot, value);
        self.bump();
        Ok(previous)
    }

    /// Drops every item, keeping the allocated capacity
    pub fn clear(&mut self) {
        self.store.fill_with(|| None);
        self.len = 0;
        self.bump();
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn capacity(&self) -> usize {
        self.store.len()
    }

    /// Counter bumped by every successful mutation
    pub fn modification_stamp(&self) -> u64 {
        self.stamp
    }

    pub fn sorter(&self) -> &S {
        &self.sorter
    }

    pub fn iter(&self) -> Iter<'_, E> {
        Iter {
            slots: self.store[..self.len].iter(),
        }
    }

    /// Creates a fail-fast cursor positioned before the first item
    ///
    /// The cursor only reads from this list. Clones get their own identity.
    pub fn cursor(&self) -> Cursor {
        Cursor::new(self.id, self.stamp)
    }

    pub(crate) fn id(&self) -> u64 {
        self.id
    }

    fn ensure_capacity(&mut self, min_capacity: usize) {
        if min_capacity > self.store.len() {
            self.grow(min_capacity);
        }
    }

    fn grow(&mut self, min_capacity: usize) {
        let capacity = grown_capacity(self.store.len(), min_capacity);
        trace!(
            from = self.store.len(),
            to = capacity,
            len = self.len,
            "growing backing store"
        );

        let old = std::mem::take(&mut self.store);
        self.store = old
            .into_vec()
            .into_iter()
            .take(self.len)
            .chain(std::iter::repeat_with(|| None))
            .take(capacity)
            .collect();
    }

    fn bump(&mut self) {
        self.stamp = self.stamp.wrapping_add(1);
    }

    fn out_of_range(&self, index: usize) -> ListError {
        ListError::IndexOutOfRange {
            index,
            len: self.len,
        }
    }
}

impl<E, S: Sorter<E>> GrowableArray<E, S> {
    /// Sorts the list with the bound sorter according to `compare`
    ///
    /// Whether equal items keep their relative order depends on the sorter.
    /// [QuickSorter] does not preserve it.
    pub fn sort_by(&mut self, compare: impl FnMut(&E, &E) -> Ordering) {
        self.sorter.sort_by(&mut self.store, self.len, compare);
        self.bump();
    }

    pub fn sort(&mut self)
    where
        E: Ord,
    {
        self.sort_by(E::cmp);
    }
}

impl<E: Clone, S: Clone> Clone for GrowableArray<E, S> {
    fn clone(&self) -> Self {
        Self {
            id: next_list_id(),
            store: self.store.clone(),
            len: self.len,
            stamp: self.stamp,
            sorter: self.sorter.clone(),
        }
    }
}

fn empty_slots<E>(capacity: usize) -> Box<[Option<E>]> {
    std::iter::repeat_with(|| None).take(capacity).collect()
}

impl<E, S: Default> Default for GrowableArray<E, S> {
    fn default() -> Self {
        Self::with_capacity_and_sorter(DEFAULT_CAPACITY, S::default())
    }
}

impl<E, S> Extend<E> for GrowableArray<E, S> {
    fn extend<T: IntoIterator<Item = E>>(&mut self, iter: T) {
        for item in iter {
            self.push(item);
        }
    }
}

impl<E, S: Default> FromIterator<E> for GrowableArray<E, S> {
    fn from_iter<T: IntoIterator<Item = E>>(iter: T) -> Self {
        let mut list = Self::default();
        list.extend(iter);
        list
    }
}

impl<'a, E, S> IntoIterator for &'a GrowableArray<E, S> {
    type Item = &'a E;
    type IntoIter = Iter<'a, E>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<E: PartialEq, S, S2> PartialEq<GrowableArray<E, S2>> for GrowableArray<E, S> {
    fn eq(&self, other: &GrowableArray<E, S2>) -> bool {
        self.len == other.len && self.iter().eq(other.iter())
    }
}

impl<E: Eq, S> Eq for GrowableArray<E, S> {}

impl<E: Hash, S> Hash for GrowableArray<E, S> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.len.hash(state);
        for item in self {
            item.hash(state);
        }
    }
}

impl<E: Display, S> Display for GrowableArray<E, S> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}]", self.iter().format(", "))
    }
}

impl<E: Debug, S> Debug for GrowableArray<E, S> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<E, S> collection_traits::HasLength for GrowableArray<E, S> {
    fn len(&self) -> usize {
        self.len()
    }

    fn is_empty(&self) -> bool {
        self.is_empty()
    }
}

impl<E, S> collection_traits::Iterable for GrowableArray<E, S> {
    type Item<'a> = &'a E where Self: 'a;

    #[expect(clippy::needless_lifetimes)]
    fn iter<'a>(&'a self) -> impl Iterator<Item = Self::Item<'a>> {
        GrowableArray::iter(self)
    }
}
