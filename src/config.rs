use crate::order::HeapMode;

/// Construction options of an [`IndexedHeap`](crate::IndexedHeap).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HeapConfig {
    pub mode: HeapMode,
    /// Number of elements the heap holds before its storage first grows.
    pub capacity: usize,
}

impl HeapConfig {
    /// Slot count of a heap built from the default config.
    pub const DEFAULT_SLOTS: usize = 16;
    /// Smallest possible slot count: the unused slot 0 plus the root.
    pub const MIN_SLOTS: usize = 2;
    /// Largest slot count the doubling sequence can reach.
    pub const MAX_SLOTS: usize = 1 << (usize::BITS - 1);

    pub fn min() -> Self {
        Self::default()
    }

    pub fn max() -> Self {
        Self::default().mode(HeapMode::Max)
    }

    pub fn mode(mut self, mode: HeapMode) -> Self {
        self.mode = mode;
        self
    }

    pub fn capacity(mut self, capacity: usize) -> Self {
        self.capacity = capacity;
        self
    }

    /// Initial number of storage slots.
    ///
    /// Slot 0 is never used and one slot must stay free (`len < capacity`), so room for
    /// `n` elements needs at least `n + 1` slots, rounded up to a power of two and
    /// clamped to [`MAX_SLOTS`](Self::MAX_SLOTS).
    ///
    /// This is only a count. Building a heap allocates all of these slots up front, so
    /// a capacity beyond what the allocator can provide panics just like
    /// `Vec::with_capacity` does.
    pub fn slot_capacity(&self) -> usize {
        self.capacity
            .saturating_add(1)
            .checked_next_power_of_two()
            .unwrap_or(Self::MAX_SLOTS)
            .max(Self::MIN_SLOTS)
    }
}

impl Default for HeapConfig {
    fn default() -> Self {
        HeapConfig {
            mode: HeapMode::Min,
            capacity: Self::DEFAULT_SLOTS - 1,
        }
    }
}
