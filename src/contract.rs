//! Contract violations and the policies that decide what happens on one.
//!
//! The deque never returns an error value for a broken precondition. It
//! describes the violation as a [`ContractViolation`], hands it to the
//! [`ViolationPolicy`] chosen at the type level, and then (if the policy
//! returns at all) leaves its state untouched.
//!
//! Three policies ship with the crate:
//!
//! | Policy             | Effect                                        |
//! |--------------------|-----------------------------------------------|
//! | [`Panic`]          | panics with the violation message (default)   |
//! | [`LogAndContinue`] | emits a `tracing` warning, operation no-ops   |
//! | [`Ignore`]         | silently no-ops                               |
//!
//! Embedders with other needs (a fault counter, an abort, a board LED)
//! implement [`ViolationPolicy`] on their own marker type.

use core::fmt;

/// A broken precondition detected by the deque before it mutated anything.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ContractViolation {
    /// A push, insert, assign or resize would exceed the fixed capacity.
    Capacity {
        /// The size the operation would have produced.
        requested: usize,
        /// The fixed capacity of the deque.
        capacity: usize,
    },
    /// A pop or erase was attempted on an empty deque.
    Underflow {
        /// Name of the offending operation.
        operation: &'static str,
    },
    /// A logical index was not below the current length.
    OutOfRange {
        /// The requested logical index.
        index: usize,
        /// The length at the time of the request.
        len: usize,
    },
    /// A cursor did not address a position inside this deque.
    InvalidCursor {
        /// Raw slot index carried by the cursor.
        index: usize,
    },
}

impl ContractViolation {
    /// Short machine-friendly name of the violation kind.
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::Capacity { .. } => "capacity",
            Self::Underflow { .. } => "underflow",
            Self::OutOfRange { .. } => "out_of_range",
            Self::InvalidCursor { .. } => "invalid_cursor",
        }
    }
}

impl fmt::Display for ContractViolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Capacity { requested, capacity } => write!(
                f,
                "capacity exceeded: {requested} elements requested, capacity is {capacity}"
            ),
            Self::Underflow { operation } => write!(f, "{operation} on an empty deque"),
            Self::OutOfRange { index, len } => {
                write!(f, "index {index} out of range for deque of length {len}")
            }
            Self::InvalidCursor { index } => {
                write!(f, "cursor at slot {index} does not address this deque")
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for ContractViolation {}

/// Hook invoked whenever a deque detects a contract violation.
///
/// `report` runs before any state is touched. If it returns, the operation
/// that triggered it completes as a no-op.
pub trait ViolationPolicy {
    /// Handles a single violation.
    fn report(violation: &ContractViolation);
}

/// Panics on every violation. This is the default policy.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Panic;

impl ViolationPolicy for Panic {
    #[cold]
    #[inline(never)]
    fn report(violation: &ContractViolation) {
        panic!("deque contract violated: {violation}");
    }
}

/// Logs every violation through `tracing` and lets the operation no-op.
///
/// Without the `tracing` feature this behaves like [`Ignore`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct LogAndContinue;

impl ViolationPolicy for LogAndContinue {
    #[cold]
    fn report(violation: &ContractViolation) {
        match *violation {
            ContractViolation::Capacity { requested, capacity } => {
                warn_event!(kind = violation.kind(), requested = requested, capacity = capacity; "deque contract violated");
            }
            ContractViolation::Underflow { operation } => {
                warn_event!(kind = violation.kind(), operation = operation; "deque contract violated");
            }
            ContractViolation::OutOfRange { index, len } => {
                warn_event!(kind = violation.kind(), index = index, len = len; "deque contract violated");
            }
            ContractViolation::InvalidCursor { index } => {
                warn_event!(kind = violation.kind(), index = index; "deque contract violated");
            }
        }
    }
}

/// Drops every violation on the floor; the operation no-ops.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Ignore;

impl ViolationPolicy for Ignore {
    #[inline(always)]
    fn report(_violation: &ContractViolation) {}
}

/// Error returned by the `try_push_*` family, handing the rejected value back.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct CapacityError<T> {
    value: T,
}

impl<T> CapacityError<T> {
    pub(crate) const fn new(value: T) -> Self {
        Self { value }
    }

    /// Returns the value that could not be stored.
    pub fn into_inner(self) -> T {
        self.value
    }
}

impl<T> fmt::Debug for CapacityError<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CapacityError").finish_non_exhaustive()
    }
}

impl<T> fmt::Display for CapacityError<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("deque is full")
    }
}

#[cfg(feature = "std")]
impl<T> std::error::Error for CapacityError<T> {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_messages() {
        let v = ContractViolation::Capacity { requested: 6, capacity: 5 };
        assert_eq!(v.to_string(), "capacity exceeded: 6 elements requested, capacity is 5");
        assert_eq!(v.kind(), "capacity");

        let v = ContractViolation::Underflow { operation: "pop_back" };
        assert_eq!(v.to_string(), "pop_back on an empty deque");

        let v = ContractViolation::OutOfRange { index: 4, len: 2 };
        assert_eq!(v.to_string(), "index 4 out of range for deque of length 2");
    }

    #[test]
    #[should_panic(expected = "deque contract violated: push_front on an empty deque")]
    fn test_panic_policy_panics() {
        Panic::report(&ContractViolation::Underflow { operation: "push_front" });
    }

    #[test]
    fn test_quiet_policies_return() {
        let v = ContractViolation::InvalidCursor { index: 3 };
        Ignore::report(&v);
        LogAndContinue::report(&v);
    }

    #[test]
    fn test_capacity_error_returns_value() {
        let err = CapacityError::new(String::from("rejected"));
        assert_eq!(err.to_string(), "deque is full");
        assert_eq!(err.into_inner(), "rejected");
    }
}
