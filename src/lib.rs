//! Indexed binary heap with O(log n) arbitrary removal and priority updates.
//!
//! ```
//! use indexed_heap::IndexedHeap;
//!
//! let mut heap = IndexedHeap::new();
//! for item in [5, 3, 8, 1, 2] {
//!     heap.offer(item);
//! }
//!
//! assert_eq!(heap.peek(), Ok(&1));
//! assert_eq!(heap.remove(&5), Ok(5));
//! assert!(!heap.contains(&5));
//! assert_eq!(heap.into_sorted_vec(), vec![1, 2, 3, 8]);
//! ```

pub mod config;
pub mod error;
pub mod indexed_heap;
pub mod order;
pub mod storage;

pub use config::HeapConfig;
pub use error::{HeapError, InvariantViolation};
pub use indexed_heap::IndexedHeap;
pub use order::{ByKey, Comparator, FnComparator, HeapMode, NaturalOrder};

/// The basic capabilities of a priority queue.
pub trait PriorityQueue<T> {
    /// Returns the number of queued elements.
    fn size(&self) -> usize;

    /// Returns the element that [`poll`](Self::poll) would remove next.
    fn peek(&self) -> Result<&T, HeapError>;

    /// Removes and returns the element with the highest priority.
    fn poll(&mut self) -> Result<T, HeapError>;

    fn offer(&mut self, item: T);

    fn is_empty(&self) -> bool {
        self.size() == 0
    }
}
