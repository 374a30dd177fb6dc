use core::fmt;

use crate::collections::deque::Iter;
use crate::contract::{CapacityError, Panic, ViolationPolicy};
use crate::Deque;

/// A fixed-capacity FIFO queue.
#[derive(Clone, Default, PartialEq, Eq, Hash)]
pub struct Queue<T, const N: usize, P = Panic>
where
    P: ViolationPolicy,
{
    deque: Deque<T, N, P>,
}

impl<T, const N: usize, P> Queue<T, N, P>
where
    P: ViolationPolicy,
{
    /// Creates an empty queue.
    pub const fn new() -> Self {
        Self { deque: Deque::new() }
    }

    /// Number of queued elements.
    #[inline(always)]
    pub fn len(&self) -> usize {
        self.deque.len()
    }

    /// `true` when nothing is queued.
    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.deque.is_empty()
    }

    /// `true` when no further element fits.
    #[inline(always)]
    pub fn is_full(&self) -> bool {
        self.deque.is_full()
    }

    /// Fixed capacity, `N`.
    #[inline(always)]
    pub fn capacity(&self) -> usize {
        self.deque.capacity()
    }

    /// Number of elements that can still be pushed.
    #[inline(always)]
    pub fn available(&self) -> usize {
        self.deque.available()
    }

    /// Enqueues `value` at the back.
    #[inline]
    pub fn push(&mut self, value: T) {
        self.deque.push_back(value);
    }

    /// Enqueues `value`, handing it back when the queue is full.
    #[inline]
    pub fn try_push(&mut self, value: T) -> Result<(), CapacityError<T>> {
        self.deque.try_push_back(value)
    }

    /// Enqueues a value built by `make` and returns it.
    pub fn emplace<F>(&mut self, make: F) -> Option<&mut T>
    where
        F: FnOnce() -> T,
    {
        self.deque.emplace_back(make)
    }

    /// Dequeues the oldest element.
    #[inline]
    pub fn pop(&mut self) -> Option<T> {
        self.deque.pop_front()
    }

    /// Dequeues the oldest element without reporting an empty queue.
    #[inline]
    pub fn try_pop(&mut self) -> Option<T> {
        self.deque.try_pop_front()
    }

    /// Oldest element.
    pub fn front(&self) -> Option<&T> {
        self.deque.front()
    }

    /// Oldest element, mutably.
    pub fn front_mut(&mut self) -> Option<&mut T> {
        self.deque.front_mut()
    }

    /// Newest element.
    pub fn back(&self) -> Option<&T> {
        self.deque.back()
    }

    /// Newest element, mutably.
    pub fn back_mut(&mut self) -> Option<&mut T> {
        self.deque.back_mut()
    }

    /// Drops every queued element.
    pub fn clear(&mut self) {
        self.deque.clear();
    }

    /// Exchanges contents with `other`.
    pub fn swap(&mut self, other: &mut Self) {
        core::mem::swap(&mut self.deque, &mut other.deque);
    }

    /// Iterates oldest to newest.
    pub fn iter(&self) -> Iter<'_, T> {
        self.deque.iter()
    }

    /// The underlying deque.
    pub fn as_deque(&self) -> &Deque<T, N, P> {
        &self.deque
    }

    /// Unwraps the underlying deque.
    pub fn into_inner(self) -> Deque<T, N, P> {
        self.deque
    }
}

impl<T, const N: usize, P> From<Deque<T, N, P>> for Queue<T, N, P>
where
    P: ViolationPolicy,
{
    /// Wraps `deque`; its front becomes the head of the queue.
    fn from(deque: Deque<T, N, P>) -> Self {
        Self { deque }
    }
}

impl<T, const N: usize, P> Extend<T> for Queue<T, N, P>
where
    P: ViolationPolicy,
{
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.deque.extend(iter);
    }
}

impl<T: fmt::Debug, const N: usize, P> fmt::Debug for Queue<T, N, P>
where
    P: ViolationPolicy,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Queue").field(&self.deque).finish()
    }
}
