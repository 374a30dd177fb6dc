//! Wraparound-aware positions inside a deque's slot buffer.
//!
//! A [`Cursor`] is a raw slot index together with the buffer size it wraps
//! at. It is a plain `Copy` value that does not borrow the deque, so a cursor
//! obtained from [`DequeCore::begin`] or [`DequeCore::cursor_at`] can be passed
//! straight back into `insert` or `erase`.
//!
//! Logical positions are always measured from the deque's *current* `begin`:
//!
//! ```text
//! distance(x) = x.index - begin.index                 if x.index >= begin.index
//!             = BUFFER_SIZE + x.index - begin.index   otherwise
//! ```
//!
//! so cursor ordering follows element order even after the raw index has
//! wrapped past zero.
//!
//! A cursor is stale once the slot it addresses is destroyed. Staleness is
//! not tracked; dereferencing through [`DequeCore::cursor_get`] only checks
//! that the position lies inside the live range.

use core::cmp::Ordering;

use super::slots::SlotBuffer;
use super::DequeCore;
use crate::contract::{ContractViolation, ViolationPolicy};

/// A position in a deque's circular slot buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Cursor {
    pub(crate) index: usize,
    pub(crate) buffer_size: usize,
}

impl Cursor {
    #[inline(always)]
    pub(crate) const fn new(index: usize, buffer_size: usize) -> Self {
        Self { index, buffer_size }
    }

    /// Raw slot index this cursor addresses.
    #[inline(always)]
    pub const fn index(&self) -> usize {
        self.index
    }

    /// The cursor one slot forward, wrapping to slot 0 after the last slot.
    #[inline(always)]
    #[must_use]
    pub const fn successor(self) -> Self {
        let index = if self.index == self.buffer_size - 1 {
            0
        } else {
            self.index + 1
        };
        Self::new(index, self.buffer_size)
    }

    /// The cursor one slot back, wrapping to the last slot before slot 0.
    #[inline(always)]
    #[must_use]
    pub const fn predecessor(self) -> Self {
        let index = if self.index == 0 {
            self.buffer_size - 1
        } else {
            self.index - 1
        };
        Self::new(index, self.buffer_size)
    }

    /// Moves `n` slots forward in one step. `n` must be below the buffer size.
    #[inline]
    #[must_use]
    pub fn forward(self, n: usize) -> Self {
        debug_assert!(n < self.buffer_size, "offset exceeds buffer size");
        let room = self.buffer_size - self.index;
        let index = if n >= room { n - room } else { self.index + n };
        Self::new(index, self.buffer_size)
    }

    /// Moves `n` slots backward in one step. `n` must be below the buffer size.
    #[inline]
    #[must_use]
    pub fn backward(self, n: usize) -> Self {
        debug_assert!(n < self.buffer_size, "offset exceeds buffer size");
        let index = if n > self.index {
            self.index + self.buffer_size - n
        } else {
            self.index - n
        };
        Self::new(index, self.buffer_size)
    }

    /// Signed offset; positive moves forward, negative moves backward.
    #[inline]
    #[must_use]
    pub fn offset(self, k: isize) -> Self {
        if k >= 0 {
            self.forward(k.unsigned_abs())
        } else {
            self.backward(k.unsigned_abs())
        }
    }
}

impl<T, S, P> DequeCore<T, S, P>
where
    S: SlotBuffer<T>,
    P: ViolationPolicy,
{
    /// Cursor to the first element (equal to [`end`](Self::end) when empty).
    #[inline(always)]
    pub fn begin(&self) -> Cursor {
        self.begin
    }

    /// Cursor one past the last element.
    #[inline(always)]
    pub fn end(&self) -> Cursor {
        self.end
    }

    /// Cursor to the element at logical `index`; `index == len()` yields `end()`.
    ///
    /// Reports [`ContractViolation::OutOfRange`] and returns `end()` when
    /// `index > len()`.
    pub fn cursor_at(&self, index: usize) -> Cursor {
        if index > self.len() {
            P::report(&ContractViolation::OutOfRange {
                index,
                len: self.len(),
            });
            return self.end;
        }
        self.begin.forward(index)
    }

    /// Logical position of `cursor`, i.e. forward steps from `begin()`.
    #[inline]
    pub fn position_of(&self, cursor: Cursor) -> usize {
        if cursor.index < self.begin.index {
            self.begin.buffer_size + cursor.index - self.begin.index
        } else {
            cursor.index - self.begin.index
        }
    }

    /// Signed number of forward steps from `a` to `b`.
    #[inline]
    #[allow(clippy::cast_possible_wrap)] // positions are below the slot count, which fits in `isize`
    pub fn cursor_distance(&self, a: Cursor, b: Cursor) -> isize {
        self.position_of(b) as isize - self.position_of(a) as isize
    }

    /// Compares two cursors by logical position rather than raw slot index.
    #[inline]
    pub fn cursor_cmp(&self, a: Cursor, b: Cursor) -> Ordering {
        self.position_of(a).cmp(&self.position_of(b))
    }

    /// The element `cursor` addresses, or `None` if it lies outside the live range.
    pub fn cursor_get(&self, cursor: Cursor) -> Option<&T> {
        if !self.owns(cursor) {
            return None;
        }
        self.get(self.position_of(cursor))
    }

    /// Mutable form of [`cursor_get`](Self::cursor_get).
    pub fn cursor_get_mut(&mut self, cursor: Cursor) -> Option<&mut T> {
        if !self.owns(cursor) {
            return None;
        }
        let index = self.position_of(cursor);
        self.get_mut(index)
    }

    /// `true` if `cursor` was produced for a buffer of this deque's size.
    #[inline(always)]
    pub(crate) fn owns(&self, cursor: Cursor) -> bool {
        cursor.buffer_size == self.begin.buffer_size && cursor.index < cursor.buffer_size
    }

    /// Logical position of a cursor used as an insertion or erase anchor,
    /// reporting a violation when it falls outside `[begin, end]`.
    pub(crate) fn checked_position(&self, cursor: Cursor) -> Option<usize> {
        if !self.owns(cursor) {
            P::report(&ContractViolation::InvalidCursor {
                index: cursor.index,
            });
            return None;
        }
        let position = self.position_of(cursor);
        if position > self.len() {
            P::report(&ContractViolation::OutOfRange {
                index: position,
                len: self.len(),
            });
            return None;
        }
        Some(position)
    }
}
