//! Insertion at an arbitrary cursor.
//!
//! Inserting `n` values at logical offset `k` of a deque of length `len`
//! relocates whichever side of `k` is shorter:
//!
//! ```text
//!   front shift (k < len - k)            back shift (otherwise)
//!
//!   [ a b | c d e f ]                    [ a b c d | e f ]
//!     <-n                                            n->
//!   [ a b _ _ | c d e f ]                [ a b c d _ _ e f ]
//! ```
//!
//! Of the `n_move` relocated elements, `n_create_copy = min(n, n_move)` land
//! in brand-new slots past the old boundary and `n_copy_old` land inside the
//! old range. The opened gap is then filled in order: `n_create_new` of the
//! inserted values go to slots that were never live, `n_copy_new` to slots
//! that relocated elements vacated.
//!
//! Relocation only moves bits and never runs user code. Values are produced
//! (cloned, or pulled from the caller's iterator) while filling the gap, under
//! a guard that closes whatever part of the gap is still empty if production
//! panics or the iterator runs short.

use core::iter;

use super::{Cursor, DequeCore, SlotBuffer};
use crate::contract::ViolationPolicy;

/// Which end of the deque an interior insert relocates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Side {
    Front,
    Back,
}

impl Side {
    const fn as_str(self) -> &'static str {
        match self {
            Side::Front => "front",
            Side::Back => "back",
        }
    }
}

/// How an interior insert splits between relocation and construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct ShiftPlan {
    /// Existing elements on the shifted side.
    n_move: usize,
    /// Existing elements relocated into never-live slots.
    n_create_copy: usize,
    /// Existing elements relocated within the old live range.
    n_copy_old: usize,
    /// Inserted values written into never-live slots.
    n_create_new: usize,
    /// Inserted values written into slots vacated by relocation.
    n_copy_new: usize,
}

impl ShiftPlan {
    fn new(n_insert: usize, n_move: usize) -> Self {
        let n_create_copy = n_insert.min(n_move);
        Self {
            n_move,
            n_create_copy,
            n_copy_old: n_move - n_create_copy,
            n_create_new: n_insert - n_create_copy,
            n_copy_new: n_create_copy,
        }
    }

    fn n_insert(&self) -> usize {
        self.n_create_new + self.n_copy_new
    }
}

impl<T, S, P> DequeCore<T, S, P>
where
    S: SlotBuffer<T>,
    P: ViolationPolicy,
{
    /// Inserts `value` before `position` and returns a cursor to it.
    ///
    /// On a contract violation (full deque, foreign or stale cursor) nothing
    /// changes and `position` is returned.
    pub fn insert(&mut self, position: Cursor, value: T) -> Cursor {
        self.insert_exact(position, 1, iter::once(value))
    }

    /// Inserts `n` clones of `value` before `position` and returns a cursor
    /// to the first of them.
    pub fn insert_n(&mut self, position: Cursor, n: usize, value: T) -> Cursor
    where
        T: Clone,
    {
        self.insert_exact(position, n, iter::repeat(value).take(n))
    }

    /// Inserts every value of `values`, in order, before `position` and
    /// returns a cursor to the first of them.
    ///
    /// The iterator's reported length decides the capacity check and the size
    /// of the shift. If it yields fewer values the unused room is closed
    /// again; surplus values are left unconsumed.
    pub fn insert_iter<I>(&mut self, position: Cursor, values: I) -> Cursor
    where
        I: IntoIterator<Item = T>,
        I::IntoIter: ExactSizeIterator,
    {
        let values = values.into_iter();
        let n = values.len();
        self.insert_exact(position, n, values)
    }

    /// Inserts clones of `values` before `position`.
    pub fn insert_slice(&mut self, position: Cursor, values: &[T]) -> Cursor
    where
        T: Clone,
    {
        self.insert_iter(position, values.iter().cloned())
    }

    fn insert_exact<I>(&mut self, position: Cursor, n: usize, values: I) -> Cursor
    where
        I: Iterator<Item = T>,
    {
        let Some(offset) = self.checked_position(position) else {
            return position;
        };
        if n == 0 || !self.check_room(n) {
            return position;
        }

        let len = self.len();
        if offset == len {
            for value in values.take(n) {
                self.create_element_back(value);
            }
        } else {
            let n_after = len - offset;
            let (side, plan) = if offset < n_after {
                (Side::Front, ShiftPlan::new(n, offset))
            } else {
                (Side::Back, ShiftPlan::new(n, n_after))
            };
            trace_event!(
                side = side.as_str(),
                n = n,
                n_move = plan.n_move,
                n_create_copy = plan.n_create_copy,
                n_create_new = plan.n_create_new;
                "deque insert"
            );
            match side {
                Side::Front => self.open_gap_front(&plan),
                Side::Back => self.open_gap_back(offset, &plan),
            }
            self.fill_gap(side, offset, n, values);
        }

        self.debug_check();
        self.begin.forward(offset)
    }

    /// Slides the first `plan.n_move` elements `n` slots towards the front,
    /// leaving an unfilled gap of `n` slots at offset `plan.n_move`.
    fn open_gap_front(&mut self, plan: &ShiftPlan) {
        let n = plan.n_insert();
        let old_begin = self.begin;
        let new_begin = old_begin.backward(n);

        // SAFETY: moves run in ascending order and every destination lies
        // `n` slots before its source, so each destination is either one of
        // the `n` free slots before the old begin or a slot already moved out.
        unsafe {
            for i in 0..plan.n_move {
                self.move_slot(old_begin.forward(i).index, new_begin.forward(i).index);
            }
        }
        debug_assert_eq!(plan.n_move, plan.n_create_copy + plan.n_copy_old);

        self.begin = new_begin;
        self.capacity.grow(n);
    }

    /// Slides the elements from `offset` to the end `n` slots towards the
    /// back, leaving an unfilled gap of `n` slots at `offset`.
    fn open_gap_back(&mut self, offset: usize, plan: &ShiftPlan) {
        let n = plan.n_insert();
        let len = self.len();
        let begin = self.begin;

        // SAFETY: moves run in descending order and every destination lies
        // `n` slots after its source, so each destination is either one of
        // the free slots from the old end onwards or a slot already moved out.
        unsafe {
            for j in (offset..len).rev() {
                self.move_slot(begin.forward(j).index, begin.forward(j + n).index);
            }
        }
        debug_assert_eq!(plan.n_move, len - offset);
        debug_assert_eq!(plan.n_move, plan.n_create_copy + plan.n_copy_old);

        self.end = self.end.forward(n);
        self.capacity.grow(n);
    }

    /// Writes up to `len` values into the gap starting at logical `start`.
    fn fill_gap<I>(&mut self, side: Side, start: usize, len: usize, values: I)
    where
        I: Iterator<Item = T>,
    {
        let mut gap = Gap {
            deque: self,
            side,
            start,
            len,
            filled: 0,
        };
        for value in values.take(len) {
            let slot = gap.deque.begin.forward(gap.start + gap.filled);
            // SAFETY: the slot lies in the unfilled part of the gap.
            unsafe { gap.deque.write_slot(slot.index, value) };
            gap.filled += 1;
        }
    }

    /// Removes `count` unfilled slots at logical `hole` by sliding the side
    /// that was shifted back over them.
    fn close_gap(&mut self, side: Side, hole: usize, count: usize) {
        let begin = self.begin;
        match side {
            Side::Front => {
                // SAFETY: [0, hole) is live and [hole, hole + count) is empty;
                // descending moves never overwrite an unmoved element.
                unsafe {
                    for i in (0..hole).rev() {
                        self.move_slot(begin.forward(i).index, begin.forward(i + count).index);
                    }
                }
                self.begin = begin.forward(count);
            }
            Side::Back => {
                let len = self.len();
                // SAFETY: [hole + count, len) is live and [hole, hole + count)
                // is empty; ascending moves never overwrite an unmoved element.
                unsafe {
                    for i in hole + count..len {
                        self.move_slot(begin.forward(i).index, begin.forward(i - count).index);
                    }
                }
                self.end = self.end.backward(count);
            }
        }
        self.capacity.shrink(count);
    }
}

/// An opened, partially filled gap inside the live range.
///
/// Dropping it closes the unfilled remainder, both on the normal path (a
/// short iterator) and while unwinding from a panicking clone or `next`.
struct Gap<'a, T, S, P>
where
    S: SlotBuffer<T>,
    P: ViolationPolicy,
{
    deque: &'a mut DequeCore<T, S, P>,
    side: Side,
    start: usize,
    len: usize,
    filled: usize,
}

impl<T, S, P> Drop for Gap<'_, T, S, P>
where
    S: SlotBuffer<T>,
    P: ViolationPolicy,
{
    fn drop(&mut self) {
        let unfilled = self.len - self.filled;
        if unfilled > 0 {
            trace_event!(side = self.side.as_str(), unfilled = unfilled; "closing unfilled insert gap");
            self.deque
                .close_gap(self.side, self.start + self.filled, unfilled);
        }
    }
}
