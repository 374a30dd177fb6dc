//! Fixed-capacity containers.
//!
//! Collections are organized by role:
//! - `deque`: the circular deque core and its storage, cursor and iterator types
//! - `adapters`: queue and stack views over the deque

pub mod adapters;
pub mod deque;

// Re-export commonly used types from submodules
pub use adapters::{Queue, Stack};
pub use deque::{Capacity, Cursor, DequeCore, InlineSlots, IntoIter, Iter, IterMut, SlotBuffer};
