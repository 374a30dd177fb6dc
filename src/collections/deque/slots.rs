//! Slot storage and the construct/destroy primitives the deque is built from.
//!
//! Storage is an arena of `capacity + 1` slots of `MaybeUninit<T>`. Each slot
//! is either *uninitialized* or *live*; the deque core is the only code that
//! moves a slot between the two states, and it does so exclusively through
//! the primitives in this module:
//!
//! - `create_element_front` / `create_element_back` construct one slot and
//!   commit the bookkeeping,
//! - `take_element_front` / `take_element_back` commit the bookkeeping and
//!   move the value out, so dropping it happens with the deque consistent,
//! - `move_slot` / `swap_slots` relocate live values without running user code.

use core::mem::MaybeUninit;
use core::ptr;

use super::DequeCore;
use crate::contract::ViolationPolicy;

/// Contiguous backing storage for a deque.
///
/// # Safety
///
/// Implementors must return the same memory, with the same length, from
/// every call to [`slots`](Self::slots) and [`slots_mut`](Self::slots_mut)
/// for as long as the value lives, and must never read, write or drop the
/// slots themselves.
pub unsafe trait SlotBuffer<T> {
    /// Shared view of every slot.
    fn slots(&self) -> &[MaybeUninit<T>];

    /// Exclusive view of every slot.
    fn slots_mut(&mut self) -> &mut [MaybeUninit<T>];
}

/// Inline storage for `N` elements plus the sentinel slot.
///
/// `#[repr(C)]` lays the sentinel directly after the array, giving `N + 1`
/// contiguous slots.
#[repr(C)]
pub struct InlineSlots<T, const N: usize> {
    slots: [MaybeUninit<T>; N],
    sentinel: MaybeUninit<T>,
}

impl<T, const N: usize> InlineSlots<T, N> {
    /// Creates `N + 1` uninitialized slots.
    pub const fn new() -> Self {
        Self {
            // SAFETY: an array of MaybeUninit needs no initialization.
            slots: unsafe { MaybeUninit::<[MaybeUninit<T>; N]>::uninit().assume_init() },
            sentinel: MaybeUninit::uninit(),
        }
    }
}

impl<T, const N: usize> Default for InlineSlots<T, N> {
    fn default() -> Self {
        Self::new()
    }
}

// SAFETY: the slice covers the array and the sentinel, which repr(C) places
// back to back; the length is fixed by the type.
unsafe impl<T, const N: usize> SlotBuffer<T> for InlineSlots<T, N> {
    #[inline(always)]
    fn slots(&self) -> &[MaybeUninit<T>] {
        unsafe { core::slice::from_raw_parts((self as *const Self).cast::<MaybeUninit<T>>(), N + 1) }
    }

    #[inline(always)]
    fn slots_mut(&mut self) -> &mut [MaybeUninit<T>] {
        unsafe { core::slice::from_raw_parts_mut((self as *mut Self).cast::<MaybeUninit<T>>(), N + 1) }
    }
}

// SAFETY: a borrowed slice never changes its address or length while borrowed.
unsafe impl<T> SlotBuffer<T> for &mut [MaybeUninit<T>] {
    #[inline(always)]
    fn slots(&self) -> &[MaybeUninit<T>] {
        self
    }

    #[inline(always)]
    fn slots_mut(&mut self) -> &mut [MaybeUninit<T>] {
        self
    }
}

impl<T, S, P> DequeCore<T, S, P>
where
    S: SlotBuffer<T>,
    P: ViolationPolicy,
{
    #[inline(always)]
    pub(super) fn base_ptr(&mut self) -> *mut T {
        self.slots.slots_mut().as_mut_ptr().cast::<T>()
    }

    #[inline(always)]
    fn slot_ptr(&mut self, index: usize) -> *mut T {
        debug_assert!(index < self.begin.buffer_size, "slot index out of bounds");
        // SAFETY: index is below the buffer size, which equals the slice length.
        unsafe { self.base_ptr().add(index) }
    }

    /// # Safety
    /// The slot must be live.
    #[inline(always)]
    pub(super) unsafe fn slot_ref(&self, index: usize) -> &T {
        debug_assert!(index < self.begin.buffer_size, "slot index out of bounds");
        self.slots.slots().get_unchecked(index).assume_init_ref()
    }

    /// # Safety
    /// The slot must be live.
    #[inline(always)]
    pub(super) unsafe fn slot_mut(&mut self, index: usize) -> &mut T {
        &mut *self.slot_ptr(index)
    }

    /// # Safety
    /// The slot must be uninitialized; it is live afterwards.
    #[inline(always)]
    pub(super) unsafe fn write_slot(&mut self, index: usize, value: T) {
        self.slot_ptr(index).write(value);
    }

    /// # Safety
    /// The slot must be live; it is uninitialized afterwards.
    #[inline(always)]
    pub(super) unsafe fn read_slot(&mut self, index: usize) -> T {
        self.slot_ptr(index).read()
    }

    /// Relocates the value in `from` into `to`.
    ///
    /// # Safety
    /// `from` must be live and `to` uninitialized (or equal to `from`).
    #[inline(always)]
    pub(super) unsafe fn move_slot(&mut self, from: usize, to: usize) {
        debug_assert!(from < self.begin.buffer_size && to < self.begin.buffer_size);
        if from != to {
            let base = self.base_ptr();
            ptr::copy_nonoverlapping(base.add(from), base.add(to), 1);
        }
    }

    /// # Safety
    /// Both slots must be live.
    #[inline(always)]
    pub(super) unsafe fn swap_slots(&mut self, a: usize, b: usize) {
        debug_assert!(a < self.begin.buffer_size && b < self.begin.buffer_size);
        if a != b {
            let base = self.base_ptr();
            ptr::swap_nonoverlapping(base.add(a), base.add(b), 1);
        }
    }

    /// Constructs `value` in the slot before `begin`.
    ///
    /// On an empty deque `begin` already addresses a free slot, so the value
    /// goes there and `end` advances instead.
    pub(super) fn create_element_front(&mut self, value: T) {
        debug_assert!(!self.capacity.is_full());
        if self.capacity.is_empty() {
            // SAFETY: an empty deque has no live slots.
            unsafe { self.write_slot(self.begin.index, value) };
            self.end = self.begin.successor();
        } else {
            let slot = self.begin.predecessor();
            // SAFETY: not full, so the slot before begin is outside the live range.
            unsafe { self.write_slot(slot.index, value) };
            self.begin = slot;
        }
        self.capacity.grow(1);
    }

    /// Constructs `value` in the slot at `end`, then advances `end`.
    pub(super) fn create_element_back(&mut self, value: T) {
        debug_assert!(!self.capacity.is_full());
        // SAFETY: not full, so end addresses a slot outside the live range.
        unsafe { self.write_slot(self.end.index, value) };
        self.end = self.end.successor();
        self.capacity.grow(1);
    }

    /// Moves the front value out and advances `begin`.
    pub(super) fn take_element_front(&mut self) -> T {
        debug_assert!(!self.capacity.is_empty());
        let slot = self.begin;
        self.begin = slot.successor();
        self.capacity.shrink(1);
        // SAFETY: begin addressed a live slot; it is now outside the live range.
        unsafe { self.read_slot(slot.index) }
    }

    /// Retreats `end` and moves the value it now addresses out.
    pub(super) fn take_element_back(&mut self) -> T {
        debug_assert!(!self.capacity.is_empty());
        self.end = self.end.predecessor();
        self.capacity.shrink(1);
        // SAFETY: the slot before end was live; it is now outside the live range.
        unsafe { self.read_slot(self.end.index) }
    }

    /// Destroys the front element.
    #[inline]
    pub(super) fn destroy_element_front(&mut self) {
        drop(self.take_element_front());
    }

    /// Destroys the back element.
    #[inline]
    pub(super) fn destroy_element_back(&mut self) {
        drop(self.take_element_back());
    }
}
