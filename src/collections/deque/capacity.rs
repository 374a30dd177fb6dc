//! Size bookkeeping composed into every deque.

/// Tracks the number of live elements against a fixed maximum.
///
/// This is plain arithmetic; the deque core owns one by value and is the only
/// thing allowed to move `current_size`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Capacity {
    current_size: usize,
    max_size: usize,
}

impl Capacity {
    /// Creates a tracker for an empty container holding at most `max_size` elements.
    pub const fn new(max_size: usize) -> Self {
        Self {
            current_size: 0,
            max_size,
        }
    }

    /// Number of live elements.
    #[inline(always)]
    pub const fn size(&self) -> usize {
        self.current_size
    }

    /// Largest number of elements the container can hold.
    #[inline(always)]
    pub const fn max_size(&self) -> usize {
        self.max_size
    }

    /// Same as [`max_size`](Self::max_size); capacity never changes.
    #[inline(always)]
    pub const fn capacity(&self) -> usize {
        self.max_size
    }

    /// `true` when no elements are live.
    #[inline(always)]
    pub const fn is_empty(&self) -> bool {
        self.current_size == 0
    }

    /// `true` when every usable slot holds a live element.
    #[inline(always)]
    pub const fn is_full(&self) -> bool {
        self.current_size == self.max_size
    }

    /// Remaining free capacity.
    #[inline(always)]
    pub const fn available(&self) -> usize {
        self.max_size - self.current_size
    }

    #[inline(always)]
    pub(crate) fn grow(&mut self, n: usize) {
        debug_assert!(n <= self.available(), "size would exceed capacity");
        self.current_size += n;
    }

    #[inline(always)]
    pub(crate) fn shrink(&mut self, n: usize) {
        debug_assert!(n <= self.current_size, "size would underflow");
        self.current_size -= n;
    }
}
