use log::debug;

/// Slot of the root element.
pub const ROOT: usize = 1;

#[inline(always)]
pub fn parent_of(slot: usize) -> usize {
    slot >> 1
}

#[inline(always)]
pub fn left_of(slot: usize) -> usize {
    slot << 1
}

#[inline(always)]
pub fn right_of(slot: usize) -> usize {
    (slot << 1) + 1
}

/// Growable slot array of a binary heap, addressed from slot 1.
///
/// The vector length is the capacity. Slot 0 is never occupied; the caller keeps
/// the live elements packed in `1..=len`.
pub struct Slots<T> {
    slots: Vec<Option<T>>,
}

impl<T> Slots<T> {
    pub fn with_capacity(capacity: usize) -> Self {
        debug_assert!(capacity > ROOT, "storage needs room for a root slot");
        let mut slots = Vec::with_capacity(capacity);
        slots.resize_with(capacity, || None);
        Slots { slots }
    }

    #[inline(always)]
    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    #[inline(always)]
    pub fn occupied(&self, slot: usize) -> bool {
        self.slots.get(slot).is_some_and(Option::is_some)
    }

    /// Returns the element in a slot that is known to be live.
    #[inline(always)]
    pub fn live(&self, slot: usize) -> &T {
        match &self.slots[slot] {
            Some(item) => item,
            None => unreachable!("slot {} should be live", slot),
        }
    }

    #[inline(always)]
    pub fn live_mut(&mut self, slot: usize) -> &mut T {
        match &mut self.slots[slot] {
            Some(item) => item,
            None => unreachable!("slot {} should be live", slot),
        }
    }

    /// Moves the element out of a live slot, leaving it empty.
    #[inline(always)]
    pub fn take(&mut self, slot: usize) -> T {
        match self.slots[slot].take() {
            Some(item) => item,
            None => unreachable!("slot {} should be live", slot),
        }
    }

    /// Places an element into an empty slot.
    #[inline(always)]
    pub fn put(&mut self, slot: usize, item: T) {
        debug_assert!(slot >= ROOT, "slot 0 is reserved");
        debug_assert!(self.slots[slot].is_none(), "slot {} is occupied", slot);
        self.slots[slot] = Some(item);
    }

    /// Doubles the number of slots. Live slots keep their positions.
    pub fn grow(&mut self) {
        let old = self.capacity();
        let new = old * 2;
        debug!("Growing heap storage from {} to {} slots", old, new);

        let mut slots = Vec::with_capacity(new);
        slots.extend(self.slots.drain(..));
        slots.resize_with(new, || None);
        self.slots = slots;
    }

    /// Drops every element. The capacity is kept.
    pub fn clear(&mut self) {
        self.slots.fill_with(|| None);
    }

    /// Iterates over the elements of slots `1..=len`, skipping empty ones.
    pub fn iter(&self, len: usize) -> impl Iterator<Item = &T> {
        self.slots[ROOT..=len].iter().flatten()
    }
}
