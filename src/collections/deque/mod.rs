//! `DequeCore`: a fixed-capacity circular deque over caller-supplied slots.
//!
//! The deque never allocates. It is handed `capacity + 1` slots up front and
//! only decides which of them hold live values and in what order:
//!
//! ```text
//!   slot:   0   1   2   3   4   5
//!         [ d | e | . | . | a | b | c ]   capacity 6, BUFFER_SIZE 7
//!                   ^end      ^begin
//! ```
//!
//! The extra sentinel slot means a full deque never has `begin == end`; the
//! size counter in [`Capacity`] is the single source of truth for emptiness
//! and fullness.
//!
//! Two storage flavours are provided:
//! - [`Deque<T, N>`](crate::Deque): inline `[MaybeUninit<T>; N + 1]`, usable as a `static` or on the stack,
//! - [`SliceDeque<'a, T>`](crate::SliceDeque): borrows a `&mut [MaybeUninit<T>]`, capacity `len - 1`.
//!
//! Broken preconditions (push to a full deque, pop from an empty one,
//! out-of-range index) are routed to the [`ViolationPolicy`] type parameter
//! and leave the deque untouched.
//!
//! Performance characteristics:
//! - Push/pop at either end: O(1)
//! - Indexed access: O(1) with a single conditional wrap
//! - Insert/erase at a cursor: O(min(distance to front, distance to back) + n)

mod assign;
mod capacity;
mod cmp;
mod cursor;
mod erase;
mod insert;
mod iter;
mod slots;

#[cfg(test)]
mod tests;

pub use capacity::Capacity;
pub use cursor::Cursor;
pub use iter::{IntoIter, Iter, IterMut};
pub use slots::{InlineSlots, SlotBuffer};

use core::marker::PhantomData;
use core::mem::MaybeUninit;

use crate::contract::{CapacityError, ContractViolation, Panic, ViolationPolicy};

/// A circular double-ended queue over fixed slot storage `S`.
///
/// Most code uses one of the aliases [`Deque`](crate::Deque) or
/// [`SliceDeque`](crate::SliceDeque) rather than naming this type directly.
pub struct DequeCore<T, S, P = Panic>
where
    S: SlotBuffer<T>,
    P: ViolationPolicy,
{
    /// Backing slots, `capacity + 1` of them.
    slots: S,
    /// First live element.
    begin: Cursor,
    /// One past the last live element.
    end: Cursor,
    /// Live element count and the fixed maximum.
    capacity: Capacity,
    _owns: PhantomData<T>,
    _policy: PhantomData<fn() -> P>,
}

impl<T, const N: usize, P> DequeCore<T, InlineSlots<T, N>, P>
where
    P: ViolationPolicy,
{
    /// Creates an empty deque with inline storage for `N` elements.
    pub const fn new() -> Self {
        Self {
            slots: InlineSlots::new(),
            begin: Cursor::new(0, N + 1),
            end: Cursor::new(0, N + 1),
            capacity: Capacity::new(N),
            _owns: PhantomData,
            _policy: PhantomData,
        }
    }

    /// Creates a deque holding `len` clones of `value`.
    pub fn from_elem(value: T, len: usize) -> Self
    where
        T: Clone,
    {
        let mut deque = Self::new();
        deque.assign_n(len, value);
        deque
    }

    /// Creates a deque holding `len` default values.
    pub fn with_len(len: usize) -> Self
    where
        T: Default,
    {
        let mut deque = Self::new();
        deque.resize_with(len, T::default);
        deque
    }
}

impl<'a, T, P> DequeCore<T, &'a mut [MaybeUninit<T>], P>
where
    P: ViolationPolicy,
{
    /// Creates an empty deque over borrowed storage.
    ///
    /// One slot is reserved as the sentinel, so the capacity is
    /// `buffer.len() - 1`. An empty buffer yields a deque of capacity zero.
    pub fn from_buffer(buffer: &'a mut [MaybeUninit<T>]) -> Self {
        let capacity = buffer.len().saturating_sub(1);
        let buffer_size = capacity + 1;
        Self {
            slots: buffer,
            begin: Cursor::new(0, buffer_size),
            end: Cursor::new(0, buffer_size),
            capacity: Capacity::new(capacity),
            _owns: PhantomData,
            _policy: PhantomData,
        }
    }
}

impl<T, S, P> DequeCore<T, S, P>
where
    S: SlotBuffer<T>,
    P: ViolationPolicy,
{
    /// Number of live elements.
    #[inline(always)]
    pub fn len(&self) -> usize {
        self.capacity.size()
    }

    /// `true` when the deque holds no elements.
    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.capacity.is_empty()
    }

    /// `true` when no further element fits.
    #[inline(always)]
    pub fn is_full(&self) -> bool {
        self.capacity.is_full()
    }

    /// Fixed number of elements the deque can hold.
    #[inline(always)]
    pub fn capacity(&self) -> usize {
        self.capacity.capacity()
    }

    /// Same as [`capacity`](Self::capacity).
    #[inline(always)]
    pub fn max_size(&self) -> usize {
        self.capacity.max_size()
    }

    /// Number of elements that can still be pushed.
    #[inline(always)]
    pub fn available(&self) -> usize {
        self.capacity.available()
    }

    /// The size tracker itself.
    #[inline(always)]
    pub fn capacity_tracker(&self) -> &Capacity {
        &self.capacity
    }

    /// Returns the element at logical `index`, if in bounds.
    #[inline]
    pub fn get(&self, index: usize) -> Option<&T> {
        if index >= self.len() {
            return None;
        }
        let slot = self.begin.forward(index);
        // SAFETY: index < len, so the slot is live.
        Some(unsafe { self.slot_ref(slot.index) })
    }

    /// Returns the element at logical `index` mutably, if in bounds.
    #[inline]
    pub fn get_mut(&mut self, index: usize) -> Option<&mut T> {
        if index >= self.len() {
            return None;
        }
        let slot = self.begin.forward(index);
        // SAFETY: index < len, so the slot is live.
        Some(unsafe { self.slot_mut(slot.index) })
    }

    /// Checked access that reports [`ContractViolation::OutOfRange`].
    pub fn at(&self, index: usize) -> Option<&T> {
        let value = self.get(index);
        if value.is_none() {
            P::report(&ContractViolation::OutOfRange {
                index,
                len: self.len(),
            });
        }
        value
    }

    /// Mutable form of [`at`](Self::at).
    pub fn at_mut(&mut self, index: usize) -> Option<&mut T> {
        let len = self.len();
        if index >= len {
            P::report(&ContractViolation::OutOfRange { index, len });
            return None;
        }
        self.get_mut(index)
    }

    /// First element.
    #[inline]
    pub fn front(&self) -> Option<&T> {
        self.get(0)
    }

    /// First element, mutably.
    #[inline]
    pub fn front_mut(&mut self) -> Option<&mut T> {
        self.get_mut(0)
    }

    /// Last element.
    #[inline]
    pub fn back(&self) -> Option<&T> {
        self.len().checked_sub(1).and_then(|i| self.get(i))
    }

    /// Last element, mutably.
    #[inline]
    pub fn back_mut(&mut self) -> Option<&mut T> {
        let last = self.len().checked_sub(1)?;
        self.get_mut(last)
    }

    /// Appends `value`. Reports [`ContractViolation::Capacity`] when full.
    #[inline]
    pub fn push_back(&mut self, value: T) {
        if self.check_room(1) {
            self.create_element_back(value);
        }
    }

    /// Prepends `value`. Reports [`ContractViolation::Capacity`] when full.
    #[inline]
    pub fn push_front(&mut self, value: T) {
        if self.check_room(1) {
            self.create_element_front(value);
        }
    }

    /// Appends `value`, handing it back when the deque is full.
    #[inline]
    pub fn try_push_back(&mut self, value: T) -> Result<(), CapacityError<T>> {
        if self.is_full() {
            return Err(CapacityError::new(value));
        }
        self.create_element_back(value);
        Ok(())
    }

    /// Prepends `value`, handing it back when the deque is full.
    #[inline]
    pub fn try_push_front(&mut self, value: T) -> Result<(), CapacityError<T>> {
        if self.is_full() {
            return Err(CapacityError::new(value));
        }
        self.create_element_front(value);
        Ok(())
    }

    /// Constructs an element at the back from `make` and returns it.
    ///
    /// `make` is not called when the deque is full.
    pub fn emplace_back<F>(&mut self, make: F) -> Option<&mut T>
    where
        F: FnOnce() -> T,
    {
        if !self.check_room(1) {
            return None;
        }
        self.create_element_back(make());
        self.back_mut()
    }

    /// Constructs an element at the front from `make` and returns it.
    ///
    /// `make` is not called when the deque is full.
    pub fn emplace_front<F>(&mut self, make: F) -> Option<&mut T>
    where
        F: FnOnce() -> T,
    {
        if !self.check_room(1) {
            return None;
        }
        self.create_element_front(make());
        self.front_mut()
    }

    /// Prepends a default value and returns it for in-place filling.
    pub fn push_front_default(&mut self) -> Option<&mut T>
    where
        T: Default,
    {
        self.emplace_front(T::default)
    }

    /// Appends a default value and returns it for in-place filling.
    pub fn push_back_default(&mut self) -> Option<&mut T>
    where
        T: Default,
    {
        self.emplace_back(T::default)
    }

    /// Removes the last element. Reports [`ContractViolation::Underflow`] when empty.
    #[inline]
    pub fn pop_back(&mut self) -> Option<T> {
        if self.check_nonempty("pop_back") {
            Some(self.take_element_back())
        } else {
            None
        }
    }

    /// Removes the first element. Reports [`ContractViolation::Underflow`] when empty.
    #[inline]
    pub fn pop_front(&mut self) -> Option<T> {
        if self.check_nonempty("pop_front") {
            Some(self.take_element_front())
        } else {
            None
        }
    }

    /// Removes the last element, returning `None` silently when empty.
    #[inline]
    pub fn try_pop_back(&mut self) -> Option<T> {
        if self.is_empty() {
            None
        } else {
            Some(self.take_element_back())
        }
    }

    /// Removes the first element, returning `None` silently when empty.
    #[inline]
    pub fn try_pop_front(&mut self) -> Option<T> {
        if self.is_empty() {
            None
        } else {
            Some(self.take_element_front())
        }
    }

    /// Checks the cursor/size invariants.
    ///
    /// Returns `true` when `begin` reaches `end` in exactly `len()` steps,
    /// `len()` does not exceed `capacity()` and both cursors lie inside the buffer.
    pub fn validate_invariants(&self) -> bool {
        let buffer_size = self.begin.buffer_size;
        buffer_size == self.capacity() + 1
            && self.end.buffer_size == buffer_size
            && self.begin.index < buffer_size
            && self.end.index < buffer_size
            && self.len() <= self.capacity()
            && self.position_of(self.end) == self.len()
            && (self.capacity() == 0 || self.slots.slots().len() >= buffer_size)
    }

    #[inline(always)]
    fn debug_check(&self) {
        debug_assert!(self.validate_invariants(), "deque invariant violated");
    }

    /// Reports a capacity violation unless `n` more elements fit.
    #[inline]
    fn check_room(&self, n: usize) -> bool {
        if n > self.available() {
            P::report(&ContractViolation::Capacity {
                requested: self.len().saturating_add(n),
                capacity: self.capacity(),
            });
            return false;
        }
        true
    }

    /// Reports an underflow unless the deque holds an element.
    #[inline]
    fn check_nonempty(&self, operation: &'static str) -> bool {
        if self.is_empty() {
            P::report(&ContractViolation::Underflow { operation });
            return false;
        }
        true
    }
}

impl<T, S, P> Drop for DequeCore<T, S, P>
where
    S: SlotBuffer<T>,
    P: ViolationPolicy,
{
    fn drop(&mut self) {
        while !self.is_empty() {
            self.destroy_element_back();
        }
    }
}

impl<T, const N: usize, P> Default for DequeCore<T, InlineSlots<T, N>, P>
where
    P: ViolationPolicy,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<T, const N: usize, P> Clone for DequeCore<T, InlineSlots<T, N>, P>
where
    T: Clone,
    P: ViolationPolicy,
{
    fn clone(&self) -> Self {
        let mut copy = Self::new();
        for value in self {
            copy.create_element_back(value.clone());
        }
        copy
    }

    fn clone_from(&mut self, source: &Self) {
        self.assign_iter(source.iter().cloned());
    }
}

impl<T, const N: usize, P> FromIterator<T> for DequeCore<T, InlineSlots<T, N>, P>
where
    P: ViolationPolicy,
{
    /// Collects into a new deque. Elements beyond `N` are reported as a
    /// capacity violation and dropped.
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut deque = Self::new();
        deque.extend(iter);
        deque
    }
}

impl<T, const N: usize, const M: usize, P> From<[T; M]> for DequeCore<T, InlineSlots<T, N>, P>
where
    P: ViolationPolicy,
{
    fn from(values: [T; M]) -> Self {
        let mut deque = Self::new();
        deque.assign_iter(values);
        deque
    }
}

impl<T, S, P> Extend<T> for DequeCore<T, S, P>
where
    S: SlotBuffer<T>,
    P: ViolationPolicy,
{
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            if !self.check_room(1) {
                break;
            }
            self.create_element_back(value);
        }
    }
}

impl<'v, T, S, P> Extend<&'v T> for DequeCore<T, S, P>
where
    T: Copy + 'v,
    S: SlotBuffer<T>,
    P: ViolationPolicy,
{
    fn extend<I: IntoIterator<Item = &'v T>>(&mut self, iter: I) {
        self.extend(iter.into_iter().copied());
    }
}

impl<T, S, P> core::ops::Index<usize> for DequeCore<T, S, P>
where
    S: SlotBuffer<T>,
    P: ViolationPolicy,
{
    type Output = T;

    /// Reports [`ContractViolation::OutOfRange`], then panics, when `index >= len()`.
    fn index(&self, index: usize) -> &T {
        match self.at(index) {
            Some(value) => value,
            None => panic!("index {index} out of range for deque of length {}", self.len()),
        }
    }
}

impl<T, S, P> core::ops::IndexMut<usize> for DequeCore<T, S, P>
where
    S: SlotBuffer<T>,
    P: ViolationPolicy,
{
    fn index_mut(&mut self, index: usize) -> &mut T {
        let len = self.len();
        match self.at_mut(index) {
            Some(value) => value,
            None => panic!("index {index} out of range for deque of length {len}"),
        }
    }
}
