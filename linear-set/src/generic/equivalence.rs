//! Equality relations used by [`LinearSet`] to decide whether two elements are "the same".
//!
//! A relation is itself a value. Two sets can only be combined when their relations compare
//! equal, which lets union/intersection reject operands that would disagree about membership.
//!
//! [`LinearSet`]: crate::generic::linear_set::LinearSet

use std::fmt;

/// An equivalence relation over `T`.
///
/// Implementations must be reflexive, symmetric and transitive. A relation that is not an
/// equivalence never causes memory unsafety, but the set may then keep elements that the
/// relation considers equal, or treat distinct elements as duplicates.
///
/// The `PartialEq` supertrait compares *relations*, not elements: two relation values that
/// compare equal must agree on every pair of elements.
///
/// # Examples
///
/// ```rust
/// use linear_set::generic::equivalence::Equivalence;
///
/// #[derive(Debug, Default, Clone, Copy, PartialEq)]
/// struct CaseInsensitive;
///
/// impl Equivalence<String> for CaseInsensitive {
///     fn equivalent(&self, a: &String, b: &String) -> bool {
///         a.eq_ignore_ascii_case(b)
///     }
/// }
///
/// assert!(CaseInsensitive.equivalent(&"Hello".to_string(), &"hELLO".to_string()));
/// ```
pub trait Equivalence<T>: PartialEq {
    /// Returns `true` if `a` and `b` denote the same set member.
    fn equivalent(&self, a: &T, b: &T) -> bool;
}

/// The relation given by `T`'s own [`PartialEq`] implementation.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct ByEq;

impl<T: PartialEq> Equivalence<T> for ByEq {
    fn equivalent(&self, a: &T, b: &T) -> bool {
        a == b
    }
}

/// A relation backed by a plain function and identified by an explicit tag.
///
/// Function addresses are not a reliable identity, so compatibility is decided by `tag`
/// alone. Callers are responsible for using one tag per distinct relation.
///
/// # Examples
///
/// ```rust
/// use linear_set::generic::equivalence::{Equivalence, FnEquivalence};
///
/// fn same_parity(a: &i32, b: &i32) -> bool {
///     a % 2 == b % 2
/// }
///
/// let parity = FnEquivalence::new("parity", same_parity);
/// assert!(parity.equivalent(&2, &4));
/// assert!(!parity.equivalent(&2, &3));
/// ```
pub struct FnEquivalence<T> {
    tag: &'static str,
    func: fn(&T, &T) -> bool,
}

impl<T> FnEquivalence<T> {
    pub fn new(tag: &'static str, func: fn(&T, &T) -> bool) -> Self {
        Self { tag, func }
    }

    pub fn tag(&self) -> &'static str {
        self.tag
    }
}

// Manual impls: derives would put bounds on `T`.
impl<T> Clone for FnEquivalence<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for FnEquivalence<T> {}

impl<T> PartialEq for FnEquivalence<T> {
    fn eq(&self, other: &Self) -> bool {
        self.tag == other.tag
    }
}

impl<T> Eq for FnEquivalence<T> {}

impl<T> fmt::Debug for FnEquivalence<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FnEquivalence")
            .field("tag", &self.tag)
            .finish()
    }
}

impl<T> Equivalence<T> for FnEquivalence<T> {
    fn equivalent(&self, a: &T, b: &T) -> bool {
        (self.func)(a, b)
    }
}
