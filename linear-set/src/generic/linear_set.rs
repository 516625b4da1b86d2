//! Growable set with linear-scan membership.
//!
//! This module provides [`LinearSet`], an unordered collection of distinct values where
//! "distinct" is decided by an [`Equivalence`] relation instead of hashing or ordering.

use std::fmt;

use tracing::trace;

use crate::error::SetError;
use crate::generic::equivalence::{ByEq, Equivalence};

/// Number of slots allocated by [`LinearSet::new`].
pub const INITIAL_CAPACITY: usize = 2;

/// Smallest capacity a set is ever given. Squaring anything below this would not grow.
pub const MIN_CAPACITY: usize = 2;

/// An unordered set of distinct values backed by a contiguous buffer.
///
/// Lookups compare the probe against every member with the set's [`Equivalence`], so
/// `contains`, `insert` and `remove` are `O(len)`. Elements need neither `Hash` nor `Ord`.
///
/// # Type Parameters
///
/// * `T` - The element type.
/// * `E` - The equivalence relation, [`ByEq`] (plain `PartialEq`) by default.
///
/// # Growth
///
/// When an insertion finds the buffer full, the capacity is squared: `2 → 4 → 16 → 256 → …`.
/// Capacity never shrinks, not even on [`clear`](Self::clear).
///
/// # Ordering
///
/// Members are stored in insertion order until the first removal. [`remove`](Self::remove)
/// moves the last member into the vacated slot, so no order is guaranteed afterwards.
///
/// # Examples
///
/// ```rust
/// use linear_set::LinearSet;
///
/// let mut set: LinearSet<u32> = LinearSet::new();
/// assert_eq!(set.capacity(), 2);
///
/// assert_eq!(set.insert(10), Ok(true));
/// assert_eq!(set.insert(10), Ok(false)); // already present
/// set.insert(20).unwrap();
/// set.insert(30).unwrap();
///
/// assert_eq!(set.len(), 3);
/// assert_eq!(set.capacity(), 4);
/// assert_eq!(set.remove(&10), Some(10));
/// assert_eq!(set.as_slice(), &[30, 20]);
/// ```
pub struct LinearSet<T, E = ByEq> {
    items: Vec<T>,
    capacity: usize,
    equivalence: E,
}

impl<T, E: Equivalence<T> + Default> Default for LinearSet<T, E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T, E: Equivalence<T> + Default> LinearSet<T, E> {
    /// Creates an empty set with [`INITIAL_CAPACITY`] slots and the default relation.
    pub fn new() -> Self {
        Self::with_equivalence(E::default())
    }

    /// Creates an empty set with room for `capacity` members (at least [`MIN_CAPACITY`]).
    pub fn with_capacity(capacity: usize) -> Self {
        Self::with_capacity_and_equivalence(capacity, E::default())
    }

    /// Builds a set from an iterator, dropping values equivalent to an earlier one.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use linear_set::LinearSet;
    ///
    /// let set: LinearSet<char> = LinearSet::try_from_iter("hello".chars()).unwrap();
    /// assert_eq!(set.as_slice(), &['h', 'e', 'l', 'o']);
    /// ```
    pub fn try_from_iter<I: IntoIterator<Item = T>>(iter: I) -> Result<Self, SetError> {
        let mut set = Self::new();
        set.try_extend(iter)?;
        Ok(set)
    }
}

impl<T, E: Equivalence<T>> LinearSet<T, E> {
    /// Creates an empty set with [`INITIAL_CAPACITY`] slots that compares with `equivalence`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use linear_set::{FnEquivalence, LinearSet};
    ///
    /// fn same_len(a: &&str, b: &&str) -> bool {
    ///     a.len() == b.len()
    /// }
    ///
    /// let mut set = LinearSet::with_equivalence(FnEquivalence::new("len", same_len));
    /// set.insert("abc").unwrap();
    /// assert!(set.contains(&"xyz"));
    /// ```
    pub fn with_equivalence(equivalence: E) -> Self {
        Self::with_capacity_and_equivalence(INITIAL_CAPACITY, equivalence)
    }

    /// Creates an empty set with room for `capacity` members (at least [`MIN_CAPACITY`]).
    pub fn with_capacity_and_equivalence(capacity: usize, equivalence: E) -> Self {
        let capacity = capacity.max(MIN_CAPACITY);
        Self {
            items: Vec::with_capacity(capacity),
            capacity,
            equivalence,
        }
    }

    /// Like [`with_capacity_and_equivalence`](Self::with_capacity_and_equivalence), but
    /// reports allocation failure instead of aborting.
    pub(crate) fn try_with_capacity_and_equivalence(
        capacity: usize,
        equivalence: E,
    ) -> Result<Self, SetError> {
        let capacity = capacity.max(MIN_CAPACITY);
        let mut items = Vec::new();
        items.try_reserve_exact(capacity)?;
        Ok(Self {
            items,
            capacity,
            equivalence,
        })
    }

    /// Returns the number of members.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns the number of members the set can hold before it has to grow.
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Returns `true` if the set has no members.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Returns the width in bytes of a single element.
    pub fn element_size(&self) -> usize {
        std::mem::size_of::<T>()
    }

    /// Returns the relation used to compare elements.
    pub fn equivalence(&self) -> &E {
        &self.equivalence
    }

    /// Returns the index of the member equivalent to `item`, if any.
    ///
    /// Indices are only stable until the next `remove` or `pop`.
    pub fn position(&self, item: &T) -> Option<usize> {
        self.items
            .iter()
            .position(|member| self.equivalence.equivalent(member, item))
    }

    /// Returns `true` if a member is equivalent to `item`.
    pub fn contains(&self, item: &T) -> bool {
        self.position(item).is_some()
    }

    /// Returns the member at `index`, or `None` past the end.
    pub fn get(&self, index: usize) -> Option<&T> {
        self.items.get(index)
    }

    /// Returns the members as a slice, in storage order.
    pub fn as_slice(&self) -> &[T] {
        &self.items
    }

    /// Returns an iterator over the members in storage order.
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.items.iter()
    }

    /// Adds `item` unless an equivalent member is already present.
    ///
    /// Returns `Ok(true)` if `item` was added and `Ok(false)` if the set was left unchanged.
    /// A full set is grown to the square of its capacity first.
    ///
    /// # Errors
    ///
    /// [`SetError::CapacityOverflow`] or [`SetError::OutOfMemory`] if growing fails. The set
    /// is untouched in that case.
    pub fn insert(&mut self, item: T) -> Result<bool, SetError> {
        if self.contains(&item) {
            return Ok(false);
        }
        self.reserve_one()?;
        self.items.push(item);
        Ok(true)
    }

    /// Inserts every value of `iter`, stopping at the first growth failure.
    pub fn try_extend<I: IntoIterator<Item = T>>(&mut self, iter: I) -> Result<(), SetError> {
        for item in iter {
            self.insert(item)?;
        }
        Ok(())
    }

    /// Removes and returns the member equivalent to `item`.
    ///
    /// The last member takes the vacated slot. Capacity is unchanged.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use linear_set::LinearSet;
    ///
    /// let mut set: LinearSet<u8> = LinearSet::try_from_iter([1, 2, 3, 4]).unwrap();
    /// assert_eq!(set.remove(&2), Some(2));
    /// assert_eq!(set.remove(&2), None);
    /// assert_eq!(set.as_slice(), &[1, 4, 3]);
    /// ```
    pub fn remove(&mut self, item: &T) -> Option<T> {
        let index = self.position(item)?;
        Some(self.items.swap_remove(index))
    }

    /// Removes and returns the member in the last slot.
    ///
    /// # Errors
    ///
    /// [`SetError::Empty`] if the set has no members.
    pub fn pop(&mut self) -> Result<T, SetError> {
        self.items.pop().ok_or(SetError::Empty)
    }

    /// Removes every member, keeping the allocated capacity.
    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// Makes room for one more member, squaring the capacity if the set is full.
    fn reserve_one(&mut self) -> Result<(), SetError> {
        if self.items.len() < self.capacity {
            return Ok(());
        }
        let grown = squared(self.capacity)?;
        self.items.try_reserve_exact(grown - self.items.len())?;
        trace!(from = self.capacity, to = grown, "grew linear set");
        self.capacity = grown;
        Ok(())
    }
}

fn squared(capacity: usize) -> Result<usize, SetError> {
    capacity
        .checked_mul(capacity)
        .ok_or(SetError::CapacityOverflow(capacity))
}

impl<T: Clone, E: Clone> Clone for LinearSet<T, E> {
    fn clone(&self) -> Self {
        let mut items = Vec::with_capacity(self.capacity);
        items.extend(self.items.iter().cloned());
        Self {
            items,
            capacity: self.capacity,
            equivalence: self.equivalence.clone(),
        }
    }
}

impl<T: fmt::Debug, E> fmt::Debug for LinearSet<T, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.items.iter()).finish()
    }
}

impl<'a, T, E> IntoIterator for &'a LinearSet<T, E> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

impl<T, E> IntoIterator for LinearSet<T, E> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generic::equivalence::FnEquivalence;
    use proptest::prelude::*;

    fn same_parity(a: &i32, b: &i32) -> bool {
        a.rem_euclid(2) == b.rem_euclid(2)
    }

    #[test]
    fn test_new_and_default_are_empty() {
        let set = LinearSet::<i32>::new();
        assert_eq!(set.len(), 0);
        assert!(set.is_empty());
        assert_eq!(set.capacity(), INITIAL_CAPACITY);
        assert!(!set.contains(&0));
        assert!(!set.contains(&i32::MAX));

        let default_set: LinearSet<i32> = Default::default();
        assert!(default_set.is_empty());
        assert_eq!(default_set.capacity(), INITIAL_CAPACITY);
    }

    #[test]
    fn test_with_capacity_is_clamped() {
        assert_eq!(LinearSet::<u8>::with_capacity(0).capacity(), MIN_CAPACITY);
        assert_eq!(LinearSet::<u8>::with_capacity(1).capacity(), MIN_CAPACITY);
        assert_eq!(LinearSet::<u8>::with_capacity(10).capacity(), 10);
    }

    #[test]
    fn test_insert_and_contains() {
        let mut set = LinearSet::<i32>::new();
        assert_eq!(set.insert(5), Ok(true));
        assert!(set.contains(&5));
        assert_eq!(set.len(), 1);

        // Duplicate insert is a no-op
        assert_eq!(set.insert(5), Ok(false));
        assert_eq!(set.len(), 1);
    }

    #[test]
    fn test_capacity_squares() {
        let mut set = LinearSet::<u32>::new();
        let mut seen = vec![set.capacity()];
        for i in 0..300 {
            set.insert(i).unwrap();
            if *seen.last().unwrap() != set.capacity() {
                seen.push(set.capacity());
            }
        }
        assert_eq!(seen, vec![2, 4, 16, 256, 65536]);
    }

    #[test]
    fn test_growth_preserves_order() {
        let mut set = LinearSet::<u32>::new();
        for i in 0..17 {
            set.insert(i).unwrap();
        }
        assert_eq!(set.capacity(), 256);
        assert_eq!(set.as_slice(), (0..17).collect::<Vec<_>>().as_slice());
    }

    #[test]
    fn test_sequential_insert_ten_thousand() {
        let mut set = LinearSet::<i32>::new();
        for i in 0..10_000 {
            assert_eq!(set.len(), i as usize);
            assert!(!set.contains(&i));
            set.insert(i).unwrap();
            assert!(set.contains(&i));
        }
        assert_eq!(set.len(), 10_000);
        assert!(set.capacity() >= 10_000);
        assert!((0..10_000).all(|i| set.contains(&i)));
    }

    #[test]
    fn test_squared() {
        assert_eq!(squared(2), Ok(4));
        assert_eq!(squared(256), Ok(65536));
        assert_eq!(squared(usize::MAX), Err(SetError::CapacityOverflow(usize::MAX)));
        let limit = 1usize << (usize::BITS / 2);
        assert_eq!(squared(limit), Err(SetError::CapacityOverflow(limit)));
    }

    #[test]
    fn test_remove_swaps_last_into_place() {
        let mut set = LinearSet::<u32>::try_from_iter([10, 20, 30, 40]).unwrap();
        assert_eq!(set.remove(&20), Some(20));
        assert_eq!(set.as_slice(), &[10, 40, 30]);
        assert_eq!(set.remove(&30), Some(30));
        assert_eq!(set.as_slice(), &[10, 40]);
        assert_eq!(set.capacity(), 4);
    }

    #[test]
    fn test_remove_missing_is_noop() {
        let mut set = LinearSet::<u32>::try_from_iter([1, 2]).unwrap();
        assert_eq!(set.remove(&3), None);
        assert_eq!(set.len(), 2);
    }

    #[test]
    fn test_remove_from_full_set() {
        let mut set = LinearSet::<u32>::new();
        set.insert(1).unwrap();
        set.insert(2).unwrap();
        assert_eq!(set.len(), set.capacity());
        assert_eq!(set.remove(&1), Some(1));
        assert_eq!(set.as_slice(), &[2]);
        assert_eq!(set.remove(&2), Some(2));
        assert!(set.is_empty());
    }

    #[test]
    fn test_clear_keeps_capacity() {
        let mut set = LinearSet::<u32>::try_from_iter(0..5).unwrap();
        assert_eq!(set.capacity(), 16);
        set.clear();
        assert!(set.is_empty());
        assert_eq!(set.capacity(), 16);
        assert!(!set.contains(&0));

        set.insert(7).unwrap();
        assert_eq!(set.as_slice(), &[7]);
    }

    #[test]
    fn test_pop() {
        let mut set = LinearSet::<u32>::new();
        assert_eq!(set.pop(), Err(SetError::Empty));

        set.insert(100).unwrap();
        set.insert(200).unwrap();
        assert_eq!(set.pop(), Ok(200));
        assert_eq!(set.pop(), Ok(100));
        assert_eq!(set.pop(), Err(SetError::Empty));
        assert_eq!(set.capacity(), 2);
    }

    #[test]
    fn test_custom_equivalence() {
        let mut set = LinearSet::with_equivalence(FnEquivalence::new("parity", same_parity));
        assert_eq!(set.insert(2), Ok(true));
        assert_eq!(set.insert(4), Ok(false));
        assert_eq!(set.insert(-3), Ok(true));
        assert_eq!(set.len(), 2);
        assert!(set.contains(&100));
        assert!(set.contains(&7));
        assert_eq!(set.remove(&8), Some(2));
        assert_eq!(set.as_slice(), &[-3]);
        assert_eq!(set.equivalence().tag(), "parity");
    }

    #[test]
    fn test_accessors() {
        let set = LinearSet::<u64>::try_from_iter([3, 1, 2]).unwrap();
        assert_eq!(set.element_size(), 8);
        assert_eq!(set.get(0), Some(&3));
        assert_eq!(set.get(3), None);
        assert_eq!(set.position(&2), Some(2));
        assert_eq!(set.position(&9), None);
        assert_eq!(set.iter().copied().collect::<Vec<_>>(), vec![3, 1, 2]);
        assert_eq!((&set).into_iter().count(), 3);
        assert_eq!(set.into_iter().collect::<Vec<_>>(), vec![3, 1, 2]);
    }

    #[test]
    fn test_clone_is_independent() {
        let mut original = LinearSet::<String>::new();
        original.insert("a".to_string()).unwrap();
        let mut copy = original.clone();
        copy.insert("b".to_string()).unwrap();
        assert_eq!(original.len(), 1);
        assert_eq!(copy.len(), 2);
        assert_eq!(copy.capacity(), original.capacity());
    }

    #[test]
    fn test_debug_lists_members() {
        let set = LinearSet::<u8>::try_from_iter([1, 2]).unwrap();
        assert_eq!(format!("{set:?}"), "{1, 2}");
    }

    proptest! {
        #[test]
        fn prop_len_counts_distinct(values in prop::collection::vec(0u8..32, 0..200)) {
            let set = LinearSet::<u8>::try_from_iter(values.iter().copied()).unwrap();
            let mut distinct = values.clone();
            distinct.sort_unstable();
            distinct.dedup();
            prop_assert_eq!(set.len(), distinct.len());
            prop_assert!(set.len() <= set.capacity());
            prop_assert!(values.iter().all(|v| set.contains(v)));
        }

        #[test]
        fn prop_insert_is_idempotent(values in prop::collection::vec(any::<i16>(), 0..50), extra in any::<i16>()) {
            let mut once = LinearSet::<i16>::try_from_iter(values.iter().copied()).unwrap();
            once.insert(extra).unwrap();
            let mut twice = once.clone();
            prop_assert_eq!(twice.insert(extra), Ok(false));
            prop_assert_eq!(once.as_slice(), twice.as_slice());
        }

        #[test]
        fn prop_remove_then_absent(values in prop::collection::vec(0u16..64, 0..100), target in 0u16..64) {
            let mut set = LinearSet::<u16>::try_from_iter(values).unwrap();
            let was_present = set.contains(&target);
            let before = set.len();
            let capacity = set.capacity();
            let removed = set.remove(&target);
            prop_assert_eq!(removed.is_some(), was_present);
            prop_assert!(!set.contains(&target));
            prop_assert_eq!(set.len(), before - usize::from(was_present));
            prop_assert_eq!(set.capacity(), capacity);
        }
    }
}
