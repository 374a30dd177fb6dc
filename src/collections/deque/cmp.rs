//! Equality, lexicographic ordering, hashing and `Debug`.
//!
//! All of these look at the logical element sequence only. Two deques with
//! the same contents compare equal regardless of where their live ranges sit
//! in the buffer, which storage they use or which violation policy they carry.

use core::cmp::Ordering;
use core::fmt;
use core::hash::{Hash, Hasher};

use super::{DequeCore, SlotBuffer};
use crate::contract::ViolationPolicy;

impl<T, U, S1, S2, P1, P2> PartialEq<DequeCore<U, S2, P2>> for DequeCore<T, S1, P1>
where
    T: PartialEq<U>,
    S1: SlotBuffer<T>,
    S2: SlotBuffer<U>,
    P1: ViolationPolicy,
    P2: ViolationPolicy,
{
    fn eq(&self, other: &DequeCore<U, S2, P2>) -> bool {
        self.len() == other.len() && self.iter().zip(other.iter()).all(|(a, b)| a == b)
    }
}

impl<T, S, P> Eq for DequeCore<T, S, P>
where
    T: Eq,
    S: SlotBuffer<T>,
    P: ViolationPolicy,
{
}

impl<T, U, S, P> PartialEq<[U]> for DequeCore<T, S, P>
where
    T: PartialEq<U>,
    S: SlotBuffer<T>,
    P: ViolationPolicy,
{
    fn eq(&self, other: &[U]) -> bool {
        self.len() == other.len() && self.iter().zip(other).all(|(a, b)| a == b)
    }
}

impl<T, U, S, P> PartialEq<&[U]> for DequeCore<T, S, P>
where
    T: PartialEq<U>,
    S: SlotBuffer<T>,
    P: ViolationPolicy,
{
    fn eq(&self, other: &&[U]) -> bool {
        *self == **other
    }
}

impl<T, U, S, P, const M: usize> PartialEq<[U; M]> for DequeCore<T, S, P>
where
    T: PartialEq<U>,
    S: SlotBuffer<T>,
    P: ViolationPolicy,
{
    fn eq(&self, other: &[U; M]) -> bool {
        *self == other[..]
    }
}

impl<T, S1, S2, P1, P2> PartialOrd<DequeCore<T, S2, P2>> for DequeCore<T, S1, P1>
where
    T: PartialOrd,
    S1: SlotBuffer<T>,
    S2: SlotBuffer<T>,
    P1: ViolationPolicy,
    P2: ViolationPolicy,
{
    fn partial_cmp(&self, other: &DequeCore<T, S2, P2>) -> Option<Ordering> {
        self.iter().partial_cmp(other.iter())
    }
}

impl<T, S, P> Ord for DequeCore<T, S, P>
where
    T: Ord,
    S: SlotBuffer<T>,
    P: ViolationPolicy,
{
    fn cmp(&self, other: &Self) -> Ordering {
        self.iter().cmp(other.iter())
    }
}

impl<T, S, P> Hash for DequeCore<T, S, P>
where
    T: Hash,
    S: SlotBuffer<T>,
    P: ViolationPolicy,
{
    fn hash<H: Hasher>(&self, state: &mut H) {
        state.write_usize(self.len());
        for value in self {
            value.hash(state);
        }
    }
}

impl<T, S, P> fmt::Debug for DequeCore<T, S, P>
where
    T: fmt::Debug,
    S: SlotBuffer<T>,
    P: ViolationPolicy,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}
