//! Borrowing and owning iterators, plus contiguous slice views.
//!
//! The borrowing iterators walk a pair of cursors towards each other, so
//! forward and reverse iteration share one implementation (`.rev()`).

use core::fmt;
use core::iter::FusedIterator;
use core::marker::PhantomData;
use core::mem::MaybeUninit;
use core::ptr::NonNull;
use core::slice;

use super::{Cursor, DequeCore, SlotBuffer};
use crate::contract::ViolationPolicy;

/// Shared iterator over a deque, front to back.
pub struct Iter<'a, T> {
    slots: &'a [MaybeUninit<T>],
    front: Cursor,
    back: Cursor,
    remaining: usize,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        let slot = self.front;
        self.front = slot.successor();
        self.remaining -= 1;
        // SAFETY: the slot lies between the cursors, inside the live range.
        Some(unsafe { self.slots.get_unchecked(slot.index).assume_init_ref() })
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }

    fn nth(&mut self, n: usize) -> Option<Self::Item> {
        if n >= self.remaining {
            self.front = self.back;
            self.remaining = 0;
            return None;
        }
        self.front = self.front.forward(n);
        self.remaining -= n;
        self.next()
    }
}

impl<T> DoubleEndedIterator for Iter<'_, T> {
    #[inline]
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        self.back = self.back.predecessor();
        self.remaining -= 1;
        // SAFETY: the slot lies between the cursors, inside the live range.
        Some(unsafe { self.slots.get_unchecked(self.back.index).assume_init_ref() })
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}
impl<T> FusedIterator for Iter<'_, T> {}

impl<T> Clone for Iter<'_, T> {
    fn clone(&self) -> Self {
        Self {
            slots: self.slots,
            front: self.front,
            back: self.back,
            remaining: self.remaining,
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for Iter<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.clone()).finish()
    }
}

/// Mutable iterator over a deque, front to back.
pub struct IterMut<'a, T> {
    base: NonNull<T>,
    front: Cursor,
    back: Cursor,
    remaining: usize,
    _marker: PhantomData<&'a mut T>,
}

// SAFETY: IterMut hands out disjoint `&mut T`, like `slice::IterMut`.
unsafe impl<T: Send> Send for IterMut<'_, T> {}
// SAFETY: a shared `&IterMut` gives no access to the elements.
unsafe impl<T: Sync> Sync for IterMut<'_, T> {}

impl<'a, T> Iterator for IterMut<'a, T> {
    type Item = &'a mut T;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        let slot = self.front;
        self.front = slot.successor();
        self.remaining -= 1;
        // SAFETY: live slot, and each slot is yielded at most once.
        Some(unsafe { &mut *self.base.as_ptr().add(slot.index) })
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> DoubleEndedIterator for IterMut<'_, T> {
    #[inline]
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        self.back = self.back.predecessor();
        self.remaining -= 1;
        // SAFETY: live slot, and each slot is yielded at most once.
        Some(unsafe { &mut *self.base.as_ptr().add(self.back.index) })
    }
}

impl<T> ExactSizeIterator for IterMut<'_, T> {}
impl<T> FusedIterator for IterMut<'_, T> {}

impl<T> fmt::Debug for IterMut<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("IterMut")
            .field("remaining", &self.remaining)
            .finish_non_exhaustive()
    }
}

/// Owning iterator; pops from whichever end is asked for.
pub struct IntoIter<T, S, P>
where
    S: SlotBuffer<T>,
    P: ViolationPolicy,
{
    deque: DequeCore<T, S, P>,
}

impl<T, S, P> IntoIter<T, S, P>
where
    S: SlotBuffer<T>,
    P: ViolationPolicy,
{
    /// The elements not yet yielded.
    pub fn as_deque(&self) -> &DequeCore<T, S, P> {
        &self.deque
    }
}

impl<T, S, P> Iterator for IntoIter<T, S, P>
where
    S: SlotBuffer<T>,
    P: ViolationPolicy,
{
    type Item = T;

    #[inline]
    fn next(&mut self) -> Option<T> {
        self.deque.try_pop_front()
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.deque.len();
        (len, Some(len))
    }
}

impl<T, S, P> DoubleEndedIterator for IntoIter<T, S, P>
where
    S: SlotBuffer<T>,
    P: ViolationPolicy,
{
    #[inline]
    fn next_back(&mut self) -> Option<T> {
        self.deque.try_pop_back()
    }
}

impl<T, S, P> ExactSizeIterator for IntoIter<T, S, P>
where
    S: SlotBuffer<T>,
    P: ViolationPolicy,
{
}

impl<T, S, P> FusedIterator for IntoIter<T, S, P>
where
    S: SlotBuffer<T>,
    P: ViolationPolicy,
{
}

impl<T, S, P> fmt::Debug for IntoIter<T, S, P>
where
    T: fmt::Debug,
    S: SlotBuffer<T>,
    P: ViolationPolicy,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("IntoIter").field(&self.deque).finish()
    }
}

impl<T, S, P> DequeCore<T, S, P>
where
    S: SlotBuffer<T>,
    P: ViolationPolicy,
{
    /// Iterates front to back; call `.rev()` for back to front.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            slots: self.slots.slots(),
            front: self.begin,
            back: self.end,
            remaining: self.len(),
        }
    }

    /// Iterates front to back with mutable access.
    pub fn iter_mut(&mut self) -> IterMut<'_, T> {
        let front = self.begin;
        let back = self.end;
        let remaining = self.len();
        // SAFETY: a slice pointer is never null.
        let base = unsafe { NonNull::new_unchecked(self.base_ptr()) };
        IterMut {
            base,
            front,
            back,
            remaining,
            _marker: PhantomData,
        }
    }

    /// The live elements as at most two contiguous runs, in order.
    ///
    /// The second slice is empty unless the live range wraps past the last slot.
    pub fn as_slices(&self) -> (&[T], &[T]) {
        if self.is_empty() {
            return (&[], &[]);
        }
        let (head, tail) = self.run_lengths();
        let start = self.begin.index;
        // SAFETY: both runs cover live slots only; MaybeUninit<T> has T's layout.
        unsafe {
            let base = self.slots.slots().as_ptr().cast::<T>();
            (
                slice::from_raw_parts(base.add(start), head),
                slice::from_raw_parts(base, tail),
            )
        }
    }

    /// Mutable form of [`as_slices`](Self::as_slices).
    pub fn as_mut_slices(&mut self) -> (&mut [T], &mut [T]) {
        if self.is_empty() {
            return (&mut [], &mut []);
        }
        let (head, tail) = self.run_lengths();
        let start = self.begin.index;
        let base = self.base_ptr();
        // SAFETY: the runs are disjoint and cover live slots only.
        unsafe {
            (
                slice::from_raw_parts_mut(base.add(start), head),
                slice::from_raw_parts_mut(base, tail),
            )
        }
    }

    /// Lengths of the run starting at `begin` and of the wrapped run at slot 0.
    fn run_lengths(&self) -> (usize, usize) {
        let to_buffer_end = self.begin.buffer_size - self.begin.index;
        let len = self.len();
        if len <= to_buffer_end {
            (len, 0)
        } else {
            (to_buffer_end, len - to_buffer_end)
        }
    }
}

impl<T, S, P> IntoIterator for DequeCore<T, S, P>
where
    S: SlotBuffer<T>,
    P: ViolationPolicy,
{
    type Item = T;
    type IntoIter = IntoIter<T, S, P>;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter { deque: self }
    }
}

impl<'a, T, S, P> IntoIterator for &'a DequeCore<T, S, P>
where
    S: SlotBuffer<T>,
    P: ViolationPolicy,
{
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a, T, S, P> IntoIterator for &'a mut DequeCore<T, S, P>
where
    S: SlotBuffer<T>,
    P: ViolationPolicy,
{
    type Item = &'a mut T;
    type IntoIter = IterMut<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter_mut()
    }
}
