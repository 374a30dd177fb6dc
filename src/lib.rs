//! # `fixed-deque` - Fixed-Capacity Circular Deque
//!
//! A double-ended queue over a fixed block of caller-supplied slots, for
//! targets where the heap is unavailable or forbidden. The deque never
//! allocates; it only decides which of its `capacity + 1` slots hold live
//! values and in what order.
//!
//! ## Key Features
//!
//! - **No allocation**: inline storage sized by a const generic, or a borrowed slice
//! - **O(1) at both ends**: push, pop and indexed access with a single conditional wrap
//! - **Cheap middle edits**: insert and erase shift whichever side is shorter
//! - **Pluggable contract handling**: broken preconditions go to a
//!   [`ViolationPolicy`] chosen at the type level
//!
//! ## Architecture
//!
//! 1. **Slots** ([`SlotBuffer`]): `capacity + 1` uninitialized slots; the
//!    sentinel keeps `begin == end` unambiguous without extra state.
//! 2. **Cursors** ([`Cursor`]): `Copy` slot positions with wraparound arithmetic,
//!    ordered by distance from the deque's `begin`.
//! 3. **Core** ([`DequeCore`]): the `begin`/`end` cursors plus a [`Capacity`]
//!    tracker, and every algorithm.
//! 4. **Adapters** ([`Queue`], [`Stack`]): restricted views over the core.
//!
//! ## Example
//!
//! ```rust
//! use fixed_deque::Deque;
//!
//! let mut dq: Deque<i32, 5> = Deque::new();
//! dq.push_back(1);
//! dq.push_back(2);
//! dq.push_back(3);
//! dq.push_front(0);
//!
//! let at = dq.insert(dq.cursor_at(2), 99);
//! assert_eq!(dq.cursor_get(at), Some(&99));
//! assert_eq!(dq, [0, 1, 99, 2, 3]);
//!
//! dq.erase(dq.cursor_at(1));
//! assert_eq!(dq, [0, 99, 2, 3]);
//! ```
//!
//! Violations panic by default. Pick another policy to make them no-ops:
//!
//! ```rust
//! use fixed_deque::{Deque, Ignore};
//!
//! let mut dq: Deque<u8, 2, Ignore> = Deque::from([1, 2]);
//! dq.push_back(3);
//! assert_eq!(dq, [1, 2]);
//! assert_eq!(dq.try_push_back(3).unwrap_err().into_inner(), 3);
//! ```
//!
//! Runtime-sized storage is borrowed:
//!
//! ```rust
//! use core::mem::MaybeUninit;
//! use fixed_deque::SliceDeque;
//!
//! let mut buffer = [MaybeUninit::<u32>::uninit(); 9];
//! let mut dq: SliceDeque<'_, u32> = SliceDeque::from_buffer(&mut buffer);
//! assert_eq!(dq.capacity(), 8);
//! dq.extend([3, 4]);
//! dq.push_front(2);
//! assert_eq!(dq.iter().rev().copied().collect::<Vec<_>>(), [4, 3, 2]);
//! ```

#![cfg_attr(not(any(feature = "std", test)), no_std)]
#![warn(missing_docs, clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]

#[macro_use]
mod trace;

pub mod collections;
pub mod contract;

#[cfg(feature = "proptest")]
pub mod arbitrary;

use core::mem::MaybeUninit;

pub use collections::{Capacity, Cursor, DequeCore, InlineSlots, Queue, SlotBuffer, Stack};
pub use contract::{CapacityError, ContractViolation, Ignore, LogAndContinue, Panic, ViolationPolicy};

/// A deque with inline storage for `N` elements.
pub type Deque<T, const N: usize, P = Panic> = DequeCore<T, InlineSlots<T, N>, P>;

/// A deque over a borrowed buffer; capacity is `buffer.len() - 1`.
pub type SliceDeque<'a, T, P = Panic> = DequeCore<T, &'a mut [MaybeUninit<T>], P>;
