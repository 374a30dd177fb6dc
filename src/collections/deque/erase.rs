//! Removal of single elements and ranges at arbitrary cursors.
//!
//! A range touching either end is destroyed from that end. An interior range
//! `[first, last)` is closed by swapping the shorter neighbouring segment over
//! it, which leaves the doomed values stacked at one end where they are
//! destroyed through the normal shrink path. Swaps never run user code, so
//! the only user code involved is the element destructors, and those run
//! after the bookkeeping for their slot is committed.

use super::{Cursor, DequeCore, SlotBuffer};
use crate::contract::{ContractViolation, ViolationPolicy};

impl<T, S, P> DequeCore<T, S, P>
where
    S: SlotBuffer<T>,
    P: ViolationPolicy,
{
    /// Removes the element at `position` and returns a cursor to the element
    /// that followed it (or `end()`).
    ///
    /// Reports [`ContractViolation::Underflow`] on an empty deque and
    /// [`ContractViolation::OutOfRange`] when `position` is `end()`; the deque
    /// is left unchanged and `end()` is returned.
    pub fn erase(&mut self, position: Cursor) -> Cursor {
        if !self.check_nonempty("erase") {
            return self.end;
        }
        let Some(offset) = self.checked_position(position) else {
            return self.end;
        };
        if offset == self.len() {
            P::report(&ContractViolation::OutOfRange {
                index: offset,
                len: self.len(),
            });
            return self.end;
        }
        self.erase_range(position, position.successor())
    }

    /// Removes the elements in `[first, last)` and returns a cursor to the
    /// element now at `first`'s logical position.
    ///
    /// An empty range is a no-op returning `first`. A range whose `last`
    /// precedes `first` reports [`ContractViolation::InvalidCursor`].
    pub fn erase_range(&mut self, first: Cursor, last: Cursor) -> Cursor {
        let Some(f) = self.checked_position(first) else {
            return self.end;
        };
        let Some(l) = self.checked_position(last) else {
            return self.end;
        };
        if l < f {
            P::report(&ContractViolation::InvalidCursor { index: last.index });
            return self.end;
        }

        let len = self.len();
        let length = l - f;
        if length == 0 {
            return first;
        }

        if f == 0 {
            trace_event!(side = "front", n = length; "deque erase at begin");
            for _ in 0..length {
                self.destroy_element_front();
            }
            self.debug_check();
            return self.begin;
        }

        if l == len {
            trace_event!(side = "back", n = length; "deque erase at end");
            for _ in 0..length {
                self.destroy_element_back();
            }
            self.debug_check();
            return self.end;
        }

        let begin = self.begin;
        if f < len / 2 {
            trace_event!(side = "front", n = length, n_move = f; "deque erase");
            // SAFETY: every index below `len` is live.
            unsafe {
                for i in (0..f).rev() {
                    self.swap_slots(begin.forward(i).index, begin.forward(i + length).index);
                }
            }
            for _ in 0..length {
                self.destroy_element_front();
            }
        } else {
            trace_event!(side = "back", n = length, n_move = len - l; "deque erase");
            // SAFETY: every index below `len` is live.
            unsafe {
                for i in f..len - length {
                    self.swap_slots(begin.forward(i).index, begin.forward(i + length).index);
                }
            }
            for _ in 0..length {
                self.destroy_element_back();
            }
        }

        self.debug_check();
        self.begin.forward(f)
    }
}
