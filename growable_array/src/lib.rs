//! A self-expanding, indexable sequence container with a pluggable in-place
//! sort.
//!
//! [GrowableArray] keeps its items in a single heap buffer of slots, growing
//! it geometrically once past [DEFAULT_CAPACITY]. Every successful mutation
//! bumps a modification stamp, which lets a detached [Cursor] notice that the
//! list changed underneath it. Ordering is delegated to a [Sorter], by
//! default the randomized [QuickSorter].
//!
//! ```
//! use growable_array::GrowableArray;
//!
//! let mut list = GrowableArray::new();
//! list.extend([4, 1, 3]);
//! list.insert(1, 2).unwrap();
//! list.sort_by(i32::cmp);
//! assert_eq!(list.to_string(), "[1, 2, 3, 4]");
//! ```

pub use errors::ListError;
pub use iter::{Cursor, Iter};
pub use list::GrowableArray;
pub use sorting::{Compacting, QuickSorter, Sorter};

pub mod growth;
pub mod sorting;

mod errors;
mod iter;
mod list;


/// Capacity of a list created without an explicit one, and the threshold
/// past which buffers grow by half instead of straight to this size
pub const DEFAULT_CAPACITY: usize = 10;
