use crate::sorting::{compare_slots, Sorter};
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use std::cmp::Ordering;
use tracing::trace;

/// Randomized quicksort with Lomuto partitioning
///
/// The pivot of every partition is drawn uniformly from the range being
/// partitioned, so already sorted input does not degrade to quadratic time.
/// The sort is not stable.
#[derive(Debug, Clone)]
pub struct QuickSorter {
    rng: SmallRng,
}

impl QuickSorter {
    /// Creates a sorter seeded from system entropy
    pub fn new() -> Self {
        Self {
            rng: SmallRng::from_entropy(),
        }
    }

    /// Creates a sorter with a reproducible pivot sequence
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: SmallRng::seed_from_u64(seed),
        }
    }

    fn quick_sort<E>(
        &mut self,
        data: &mut [Option<E>],
        mut low: usize,
        mut high: usize,
        compare: &mut impl FnMut(&E, &E) -> Ordering,
    ) {
        // Recurse into the smaller half and loop over the larger one, keeping
        // stack depth logarithmic.
        while low < high {
            let pivot = self.partition(data, low, high, compare);
            if pivot - low < high - pivot {
                if pivot > low {
                    self.quick_sort(data, low, pivot - 1, compare);
                }
                low = pivot + 1;
            } else {
                self.quick_sort(data, pivot + 1, high, compare);
                high = pivot - 1;
            }
        }
    }

    fn partition<E>(
        &mut self,
        data: &mut [Option<E>],
        low: usize,
        high: usize,
        compare: &mut impl FnMut(&E, &E) -> Ordering,
    ) -> usize {
        let pivot = self.rng.gen_range(low..=high);
        data.swap(pivot, high);

        let mut boundary = low;
        for j in low..high {
            if compare_slots(&data[j], &data[high], compare) == Ordering::Less {
                data.swap(boundary, j);
                boundary += 1;
            }
        }

        data.swap(boundary, high);
        boundary
    }
}

impl Default for QuickSorter {
    fn default() -> Self {
        Self::new()
    }
}

impl<E> Sorter<E> for QuickSorter {
    fn sort_by<F>(&mut self, buffer: &mut [Option<E>], len: usize, mut compare: F)
    where
        F: FnMut(&E, &E) -> Ordering,
    {
        let len = len.min(buffer.len());
        trace!(len, "quicksort");
        if len > 1 {
            self.quick_sort(&mut buffer[..len], 0, len - 1, &mut compare);
        }
    }
}
