//! `proptest` strategies for deques, behind the `proptest` feature.
//!
//! Generated deques start their live range at a random slot so that
//! properties run against wrapped layouts as often as flat ones.

use proptest::collection;
use proptest::prelude::*;

use crate::contract::ViolationPolicy;
use crate::Deque;

/// Strategy for deques of up to `N` elements drawn from `element`.
pub fn deque<T, E, const N: usize, P>(element: E) -> impl Strategy<Value = Deque<T, N, P>>
where
    T: core::fmt::Debug,
    E: Strategy<Value = T>,
    P: ViolationPolicy,
{
    (collection::vec(element, 0..=N), 0..=N).prop_map(|(values, base)| {
        let mut dq = Deque::new();
        dq.rebase_empty(base);
        dq.extend(values);
        dq
    })
}

impl<T, const N: usize, P> Arbitrary for Deque<T, N, P>
where
    T: Arbitrary + 'static,
    T::Strategy: 'static,
    P: ViolationPolicy + 'static,
{
    type Parameters = T::Parameters;
    type Strategy = BoxedStrategy<Self>;

    fn arbitrary_with(args: Self::Parameters) -> Self::Strategy {
        deque(any_with::<T>(args)).boxed()
    }
}
