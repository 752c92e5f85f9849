use std::{borrow::Borrow, cmp::Ordering, collections::HashMap, hash::Hash};

use log::trace;

use crate::{
    HeapError, InvariantViolation, PriorityQueue,
    config::HeapConfig,
    order::{ByKey, Comparator, FnComparator, HeapMode, NaturalOrder, Order},
    storage::{ROOT, Slots, left_of, parent_of, right_of},
};

/// A binary heap of unique elements that can remove or reposition any member in O(log n).
///
/// Alongside the heap-ordered slots it keeps a reverse index from each element to the
/// slot it occupies. Elements are their own keys in that index, so their `Hash` and `Eq`
/// must only look at the parts that never change while they are members. Whatever the
/// comparator looks at (the priority) may change, as long as the heap is told about it
/// through [`update_priority`](Self::update_priority) or [`update_with`](Self::update_with).
pub struct IndexedHeap<T, C = NaturalOrder> {
    /// Heap-ordered elements in slots `1..=len`.
    slots: Slots<T>,
    /// Number of live elements.
    len: usize,
    /// Mapping from element to the slot it occupies.
    index: HashMap<T, usize>,
    order: Order<C>,
}

impl<T: Hash + Eq + Clone + Ord> IndexedHeap<T> {
    /// Creates an empty min-heap ordered by `T`'s own order.
    pub fn new() -> Self {
        Self::with_config(HeapConfig::min())
    }

    /// Creates an empty max-heap ordered by `T`'s own order.
    pub fn new_max() -> Self {
        Self::with_config(HeapConfig::max())
    }

    pub fn with_config(config: HeapConfig) -> Self {
        Self::with_config_and_comparator(config, NaturalOrder)
    }
}

impl<T: Hash + Eq + Clone, F> IndexedHeap<T, FnComparator<F>> {
    /// Creates an empty min-heap ordered by `compare`.
    pub fn with_comparator(compare: F) -> Self
    where
        F: Fn(&T, &T) -> Ordering,
    {
        Self::with_config_and_comparator(HeapConfig::min(), FnComparator(compare))
    }
}

impl<T: Hash + Eq + Clone, F> IndexedHeap<T, ByKey<F>> {
    /// Creates an empty min-heap ordered by the key `key` extracts from each element.
    pub fn by_key<K: Ord>(key: F) -> Self
    where
        F: Fn(&T) -> K,
    {
        Self::with_config_and_comparator(HeapConfig::min(), ByKey(key))
    }
}

impl<T: Hash + Eq + Clone, C: Comparator<T>> IndexedHeap<T, C> {
    /// Creates an empty heap with the mode and initial capacity of `config`.
    ///
    /// # Panics
    ///
    /// Panics if the storage for [`HeapConfig::slot_capacity`] slots cannot be allocated.
    pub fn with_config_and_comparator(config: HeapConfig, comparator: C) -> Self {
        IndexedHeap {
            slots: Slots::with_capacity(config.slot_capacity()),
            len: 0,
            index: HashMap::with_capacity(config.capacity),
            order: Order::new(comparator, config.mode),
        }
    }

    #[inline(always)]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Alias of [`len`](Self::len).
    #[inline(always)]
    pub fn size(&self) -> usize {
        self.len
    }

    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Number of storage slots, including the unused slot 0.
    pub fn capacity(&self) -> usize {
        self.slots.capacity()
    }

    pub fn mode(&self) -> HeapMode {
        self.order.mode()
    }

    /// Returns the element at the root: the minimum of a min-heap, the maximum of a max-heap.
    pub fn peek(&self) -> Result<&T, HeapError> {
        if self.is_empty() {
            return Err(HeapError::Empty);
        }
        Ok(self.slots.live(ROOT))
    }

    /// Inserts `item` into the heap.
    ///
    /// If an equal element is already a member, `item` replaces it in place and the heap
    /// keeps a single copy.
    pub fn offer(&mut self, item: T) {
        if let Some(&slot) = self.index.get(&item) {
            // Last write wins: same identity, possibly a new priority.
            self.index.remove(&item);
            self.index.insert(item.clone(), slot);
            drop(self.slots.take(slot));
            self.slots.put(slot, item);
            self.repair(slot);
            return;
        }

        if self.len + 1 == self.slots.capacity() {
            self.slots.grow();
        }

        self.len += 1;
        let slot = self.len;
        self.index.insert(item.clone(), slot);
        self.slots.put(slot, item);
        self.sift_up(slot);
    }

    /// Alias of [`offer`](Self::offer).
    pub fn add(&mut self, item: T) {
        self.offer(item);
    }

    /// Removes and returns the element at the root.
    pub fn poll(&mut self) -> Result<T, HeapError> {
        if self.is_empty() {
            return Err(HeapError::Empty);
        }

        let top = self.slots.take(ROOT);
        let last = self.len;
        self.len -= 1;

        if last > ROOT {
            // Move the last element to the root and sift down
            let tail = self.slots.take(last);
            self.set_slot(ROOT, tail);
            self.sift_down(ROOT);
        }

        self.index.remove(&top);
        Ok(top)
    }

    pub fn contains<Q>(&self, item: &Q) -> bool
    where
        T: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.index.contains_key(item)
    }

    /// Returns the stored member equal to `item`.
    pub fn get<Q>(&self, item: &Q) -> Option<&T>
    where
        T: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.index.get(item).map(|&slot| self.slots.live(slot))
    }

    /// Removes the member equal to `item` and returns it.
    pub fn remove<Q>(&mut self, item: &Q) -> Result<T, HeapError>
    where
        T: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        let slot = self.slot_of(item)?;
        if slot == ROOT {
            return self.poll();
        }

        self.index.remove(item);
        let removed = self.slots.take(slot);
        let last = self.len;
        self.len -= 1;

        if slot != last {
            // Fill the gap with the last element. It came from another subtree, so it may
            // belong above or below `slot`, but never both.
            let tail = self.slots.take(last);
            self.set_slot(slot, tail);
            self.repair(slot);
        }

        Ok(removed)
    }

    /// Restores the position of the member equal to `item` after its priority changed.
    ///
    /// Meant for elements whose priority is shared with the caller, e.g. through a
    /// `Cell` behind an `Rc`. For owned elements use [`update_with`](Self::update_with).
    pub fn update_priority<Q>(&mut self, item: &Q) -> Result<(), HeapError>
    where
        T: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        let slot = self.slot_of(item)?;
        self.repair(slot);
        Ok(())
    }

    /// Mutates the member equal to `item` in place, then restores its position.
    ///
    /// `f` may change anything the comparator looks at, but must leave the element's
    /// identity (its `Hash` and `Eq`) untouched.
    pub fn update_with<Q, F>(&mut self, item: &Q, f: F) -> Result<(), HeapError>
    where
        T: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
        F: FnOnce(&mut T),
    {
        let slot = self.slot_of(item)?;
        f(self.slots.live_mut(slot));
        debug_assert!(
            self.index.get::<T>(self.slots.live(slot)) == Some(&slot),
            "update_with changed the identity of the element in slot {}",
            slot
        );
        self.repair(slot);
        Ok(())
    }

    /// Drops all elements. The storage keeps its capacity.
    pub fn clear(&mut self) {
        self.slots.clear();
        self.index.clear();
        self.len = 0;
    }

    /// Iterates over all members in slot order, which is not priority order.
    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.slots.iter(self.len)
    }

    /// Polls elements in priority order until the heap is empty.
    ///
    /// Elements not yet yielded when the iterator is dropped stay in the heap.
    pub fn drain_sorted(&mut self) -> impl Iterator<Item = T> + '_ {
        std::iter::from_fn(move || self.poll().ok())
    }

    pub fn into_sorted_vec(mut self) -> Vec<T> {
        let mut sorted = Vec::with_capacity(self.len);
        sorted.extend(self.drain_sorted());
        sorted
    }

    /// Verifies the slot layout, the heap order and the reverse index.
    pub fn check_invariants(&self) -> Result<(), InvariantViolation> {
        let capacity = self.slots.capacity();
        if self.len >= capacity {
            return Err(InvariantViolation::Capacity {
                len: self.len,
                capacity,
            });
        }

        if self.slots.occupied(0) {
            return Err(InvariantViolation::SlotOccupied { slot: 0 });
        }
        if let Some(slot) = (ROOT..=self.len).find(|&s| !self.slots.occupied(s)) {
            return Err(InvariantViolation::SlotEmpty { slot });
        }
        if let Some(slot) = (self.len + 1..capacity).find(|&s| self.slots.occupied(s)) {
            return Err(InvariantViolation::SlotOccupied { slot });
        }

        if self.index.len() != self.len {
            return Err(InvariantViolation::IndexSize {
                entries: self.index.len(),
                len: self.len,
            });
        }

        for slot in ROOT..=self.len {
            let item = self.slots.live(slot);
            if self.index.get(item) != Some(&slot) {
                return Err(InvariantViolation::IndexMismatch { slot });
            }

            let parent = parent_of(slot);
            if slot > ROOT && self.order.precedes(item, self.slots.live(parent)) {
                return Err(InvariantViolation::HeapOrder {
                    parent,
                    child: slot,
                });
            }
        }

        Ok(())
    }

    #[inline(always)]
    fn slot_of<Q>(&self, item: &Q) -> Result<usize, HeapError>
    where
        T: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.index.get(item).copied().ok_or(HeapError::NotFound)
    }

    /// Moves the element in `slot` up or down until the heap property holds around it.
    ///
    /// Everything except `slot` must already be heap-ordered. If the element is ordered
    /// before its parent it is smaller than every descendant of the parent along that
    /// path, so sifting up alone suffices. Otherwise it is no smaller than its parent,
    /// which is in turn no larger than the element's children, so only sifting down
    /// can be needed.
    fn repair(&mut self, slot: usize) {
        if slot > ROOT
            && self
                .order
                .precedes(self.slots.live(slot), self.slots.live(parent_of(slot)))
        {
            trace!("Repairing slot {} upwards", slot);
            self.sift_up(slot);
        } else {
            trace!("Repairing slot {} downwards", slot);
            self.sift_down(slot);
        }
    }

    /// Sifts the element at `slot` up the heap.
    fn sift_up(&mut self, mut slot: usize) {
        let item = self.slots.take(slot);

        while slot > ROOT {
            let parent = parent_of(slot);
            if !self.order.precedes(&item, self.slots.live(parent)) {
                break; // Parent is ordered before or with the item => heap property satisfied
            }

            let moved = self.slots.take(parent);
            self.set_slot(slot, moved);
            slot = parent;
        }

        self.set_slot(slot, item);
    }

    /// Sifts the element at `slot` down the heap.
    fn sift_down(&mut self, mut slot: usize) {
        let item = self.slots.take(slot);

        loop {
            let left = left_of(slot);
            if left > self.len {
                break; // No children
            }
            let right = right_of(slot);

            // Find the child that would become the new parent
            let mut best = left;
            if right <= self.len
                && self
                    .order
                    .precedes(self.slots.live(right), self.slots.live(left))
            {
                best = right;
            }

            if !self.order.precedes(self.slots.live(best), &item) {
                break;
            }

            let moved = self.slots.take(best);
            self.set_slot(slot, moved);
            slot = best;
        }

        self.set_slot(slot, item);
    }

    /// Places `item` into the empty `slot` and points its index entry at it.
    #[inline(always)]
    fn set_slot(&mut self, slot: usize, item: T) {
        debug_assert!(slot >= ROOT && slot <= self.len);
        let tracked = self.index.get_mut(&item);
        debug_assert!(tracked.is_some(), "element for slot {} is not indexed", slot);
        if let Some(tracked) = tracked {
            *tracked = slot;
        }
        self.slots.put(slot, item);
    }
}

impl<T: Hash + Eq + Clone, C: Comparator<T>> PriorityQueue<T> for IndexedHeap<T, C> {
    fn size(&self) -> usize {
        self.len
    }

    fn peek(&self) -> Result<&T, HeapError> {
        IndexedHeap::peek(self)
    }

    fn poll(&mut self) -> Result<T, HeapError> {
        IndexedHeap::poll(self)
    }

    fn offer(&mut self, item: T) {
        IndexedHeap::offer(self, item)
    }
}

impl<T: Hash + Eq + Clone + Ord> Default for IndexedHeap<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Hash + Eq + Clone, C: Comparator<T>> Extend<T> for IndexedHeap<T, C> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for item in iter {
            self.offer(item);
        }
    }
}

impl<T: Hash + Eq + Clone + Ord> FromIterator<T> for IndexedHeap<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut heap = Self::new();
        heap.extend(iter);
        heap
    }
}

impl<T: std::fmt::Debug, C> std::fmt::Debug for IndexedHeap<T, C> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?} Heap: ", self.order.mode())?;
        f.debug_list().entries(self.slots.iter(self.len)).finish()
    }
}
