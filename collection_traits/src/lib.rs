#![forbid(clippy::unconditional_recursion)]

pub mod slice;

/// Collections that know how many live items they hold
pub trait HasLength {
    fn len(&self) -> usize;
    fn is_empty(&self) -> bool;
}

/// Collections that can be walked front to back by reference
pub trait Iterable {
    type Item<'a>
    where
        Self: 'a;

    fn iter<'a>(&'a self) -> impl Iterator<Item = Self::Item<'a>>;
}

/// Collects items of any [Iterable] into a `Vec`, handy for comparing
/// collections of different shapes
pub fn to_vec<'a, C: Iterable + ?Sized>(collection: &'a C) -> Vec<C::Item<'a>> {
    collection.iter().collect()
}

/// Checks that every pair of neighbouring items satisfies `in_order`
pub fn is_sorted_by<'a, C: Iterable + ?Sized>(
    collection: &'a C,
    mut in_order: impl FnMut(&C::Item<'a>, &C::Item<'a>) -> bool,
) -> bool {
    let mut items = collection.iter();
    let Some(mut prev) = items.next() else {
        return true;
    };
    for item in items {
        if !in_order(&prev, &item) {
            return false;
        }
        prev = item;
    }
    true
}
