use crate::DEFAULT_CAPACITY;

/// Computes the capacity a buffer of `capacity` slots grows to when it must
/// hold at least `min_capacity` items.
///
/// Below [DEFAULT_CAPACITY] the buffer grows straight to it, past it the
/// buffer grows by half, and in both cases never to less than `min_capacity`.
/// An empty buffer jumps to at least [DEFAULT_CAPACITY].
pub fn grown_capacity(capacity: usize, min_capacity: usize) -> usize {
    debug_assert!(min_capacity > capacity);
    if capacity == 0 {
        return min_capacity.max(DEFAULT_CAPACITY);
    }

    let preferred = if capacity >= DEFAULT_CAPACITY {
        capacity >> 1
    } else {
        DEFAULT_CAPACITY - capacity
    };
    capacity + preferred.max(min_capacity - capacity)
}
