//! Whole-content operations: clear, assign and resize.
//!
//! None of these relocate live elements; they only grow or shrink at the
//! back. Capacity is checked before anything is destroyed, so a rejected
//! assign leaves the old contents in place.

use core::iter;

use super::{Cursor, DequeCore, SlotBuffer};
use crate::contract::{ContractViolation, ViolationPolicy};

impl<T, S, P> DequeCore<T, S, P>
where
    S: SlotBuffer<T>,
    P: ViolationPolicy,
{
    /// Destroys every element and resets both cursors to slot 0.
    pub fn clear(&mut self) {
        while !self.is_empty() {
            self.destroy_element_back();
        }
        self.rebase_empty(0);
    }

    /// Destroys elements from the back until at most `len` remain.
    pub fn truncate(&mut self, len: usize) {
        while self.len() > len {
            self.destroy_element_back();
        }
    }

    /// Replaces the contents with `n` clones of `value`.
    ///
    /// Reports [`ContractViolation::Capacity`] and keeps the old contents
    /// when `n > capacity()`.
    pub fn assign_n(&mut self, n: usize, value: T)
    where
        T: Clone,
    {
        if !self.check_total(n) {
            return;
        }
        self.clear();
        for value in iter::repeat(value).take(n) {
            self.create_element_back(value);
        }
        self.debug_check();
    }

    /// Replaces the contents with the values of `values`.
    ///
    /// Reports [`ContractViolation::Capacity`] and keeps the old contents
    /// when the iterator's length exceeds `capacity()`. Values beyond the
    /// announced length are left unconsumed.
    pub fn assign_iter<I>(&mut self, values: I)
    where
        I: IntoIterator<Item = T>,
        I::IntoIter: ExactSizeIterator,
    {
        let values = values.into_iter();
        let n = values.len();
        if !self.check_total(n) {
            return;
        }
        self.clear();
        for value in values.take(n) {
            self.create_element_back(value);
        }
        self.debug_check();
    }

    /// Resizes to `new_len`, appending clones of `value` or truncating.
    ///
    /// Reports [`ContractViolation::Capacity`] and does nothing when
    /// `new_len > capacity()`.
    pub fn resize(&mut self, new_len: usize, value: T)
    where
        T: Clone,
    {
        if !self.check_total(new_len) {
            return;
        }
        if new_len <= self.len() {
            self.truncate(new_len);
        } else {
            let extra = new_len - self.len();
            for value in iter::repeat(value).take(extra) {
                self.create_element_back(value);
            }
        }
        self.debug_check();
    }

    /// Resizes to `new_len`, appending values produced by `make` or truncating.
    pub fn resize_with<F>(&mut self, new_len: usize, mut make: F)
    where
        F: FnMut() -> T,
    {
        if !self.check_total(new_len) {
            return;
        }
        self.truncate(new_len);
        while self.len() < new_len {
            self.create_element_back(make());
        }
        self.debug_check();
    }

    /// Moves both cursors of an empty deque to raw slot `index`.
    ///
    /// Lets tests and strategies start the live range anywhere in the buffer
    /// so wraparound paths are reached without a push/pop preamble.
    pub(crate) fn rebase_empty(&mut self, index: usize) {
        debug_assert!(self.is_empty(), "rebase of a non-empty deque");
        let buffer_size = self.begin.buffer_size;
        debug_assert!(index < buffer_size, "rebase index out of bounds");
        self.begin = Cursor::new(index, buffer_size);
        self.end = self.begin;
    }

    /// Reports a capacity violation unless a total of `n` elements fits.
    fn check_total(&self, n: usize) -> bool {
        if n > self.capacity() {
            P::report(&ContractViolation::Capacity {
                requested: n,
                capacity: self.capacity(),
            });
            return false;
        }
        true
    }
}
