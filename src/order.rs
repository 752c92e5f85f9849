use std::cmp::Ordering;

/// A three-way comparison over `T`.
pub trait Comparator<T: ?Sized> {
    fn compare(&self, a: &T, b: &T) -> Ordering;
}

/// Compares elements by their own total order.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct NaturalOrder;

impl<T: Ord + ?Sized> Comparator<T> for NaturalOrder {
    #[inline(always)]
    fn compare(&self, a: &T, b: &T) -> Ordering {
        a.cmp(b)
    }
}

/// Compares elements with a caller supplied function.
#[derive(Clone, Copy)]
pub struct FnComparator<F>(pub F);

impl<T: ?Sized, F> Comparator<T> for FnComparator<F>
where
    F: Fn(&T, &T) -> Ordering,
{
    #[inline(always)]
    fn compare(&self, a: &T, b: &T) -> Ordering {
        (self.0)(a, b)
    }
}

/// Compares elements by a key extracted from each of them.
#[derive(Clone, Copy)]
pub struct ByKey<F>(pub F);

impl<T: ?Sized, K: Ord, F> Comparator<T> for ByKey<F>
where
    F: Fn(&T) -> K,
{
    #[inline(always)]
    fn compare(&self, a: &T, b: &T) -> Ordering {
        (self.0)(a).cmp(&(self.0)(b))
    }
}

/// Whether the root holds the minimum or the maximum element.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum HeapMode {
    #[default]
    Min,
    Max,
}

/// The effective ordering of a heap: a comparator fixed together with a mode.
///
/// In [`HeapMode::Max`] the comparator's arguments are swapped, so the rest of the
/// heap only ever reasons about "ordered before" and never about the mode.
#[derive(Clone, Copy)]
pub struct Order<C> {
    comparator: C,
    mode: HeapMode,
}

impl<C> Order<C> {
    pub fn new(comparator: C, mode: HeapMode) -> Self {
        Order { comparator, mode }
    }

    pub fn mode(&self) -> HeapMode {
        self.mode
    }

    #[inline(always)]
    pub fn compare<T: ?Sized>(&self, a: &T, b: &T) -> Ordering
    where
        C: Comparator<T>,
    {
        match self.mode {
            HeapMode::Min => self.comparator.compare(a, b),
            HeapMode::Max => self.comparator.compare(b, a),
        }
    }

    /// Returns true if `a` must sit strictly closer to the root than `b`.
    #[inline(always)]
    pub fn precedes<T: ?Sized>(&self, a: &T, b: &T) -> bool
    where
        C: Comparator<T>,
    {
        self.compare(a, b) == Ordering::Less
    }
}

impl<C> std::fmt::Debug for Order<C> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Order").field("mode", &self.mode).finish()
    }
}
