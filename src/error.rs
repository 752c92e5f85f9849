use thiserror::Error;

/// Precondition failures of the public heap operations.
///
/// A failed call never mutates the heap.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum HeapError {
    #[error("heap is empty")]
    Empty,
    #[error("element is not a member of the heap")]
    NotFound,
}

/// A broken structural invariant. Only reported by `IndexedHeap::check_invariants`.
///
/// Seeing one of these is a bug in the heap, not a recoverable condition.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InvariantViolation {
    #[error("slot {child} is ordered before its parent slot {parent}")]
    HeapOrder { parent: usize, child: usize },
    #[error("reverse index does not point back to slot {slot}")]
    IndexMismatch { slot: usize },
    #[error("reverse index has {entries} entries for {len} live elements")]
    IndexSize { entries: usize, len: usize },
    #[error("live slot {slot} is empty")]
    SlotEmpty { slot: usize },
    #[error("slot {slot} beyond the live range is occupied")]
    SlotOccupied { slot: usize },
    #[error("{len} live elements do not fit below capacity {capacity}")]
    Capacity { len: usize, capacity: usize },
}
