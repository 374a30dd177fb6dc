//! Restricted views over [`Deque`](crate::Deque).
//!
//! - [`Queue`]: first in, first out; pushes at the back, pops at the front.
//! - [`Stack`]: last in, first out; pushes and pops at the back.
//!
//! Both forward straight to the deque, so capacity and contract behaviour
//! (including the violation policy parameter) are exactly the deque's.

mod queue;
mod stack;

pub use queue::Queue;
pub use stack::Stack;
