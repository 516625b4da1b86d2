use std::collections::TryReserveError;

use thiserror::Error;

/// Errors returned by [`LinearSet`](crate::generic::linear_set::LinearSet) operations.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum SetError {
    /// `pop` was called on a set with no members.
    #[error("Cannot pop from an empty set")]
    Empty,
    /// The two operands of a set-algebra operation use different equivalence relations.
    #[error("Sets use incompatible equivalence relations")]
    IncompatibleEquivalence,
    /// Squaring the capacity does not fit in `usize`.
    #[error("Set capacity overflowed while growing from {0} slots")]
    CapacityOverflow(usize),
    /// The allocator refused to provide the grown buffer.
    #[error("Out of memory while growing the set: {0}")]
    OutOfMemory(#[from] TryReserveError),
}
