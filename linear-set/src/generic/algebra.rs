//! Union and intersection of [`LinearSet`]s.
//!
//! Both operations borrow their operands and return a new, independently owned set. The
//! operands must share an element type and relation type (checked by the compiler) and their
//! relation values must compare equal (checked at runtime).

use tracing::{debug, warn};

use crate::error::SetError;
use crate::generic::equivalence::Equivalence;
use crate::generic::linear_set::LinearSet;

impl<T: Clone, E: Equivalence<T> + Clone> LinearSet<T, E> {
    /// Returns a set holding every member of `self` and of `other`.
    ///
    /// Members of `self` come first, followed by the members of `other` that `self` lacks.
    /// The result starts with `self.capacity() + other.capacity()` slots.
    ///
    /// # Errors
    ///
    /// [`SetError::IncompatibleEquivalence`] if the two relations differ, or a growth error
    /// if the result cannot be allocated.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use linear_set::LinearSet;
    ///
    /// let a: LinearSet<u32> = LinearSet::try_from_iter(0..10).unwrap();
    /// let b: LinearSet<u32> = LinearSet::try_from_iter(5..15).unwrap();
    ///
    /// let c = a.union(&b).unwrap();
    /// assert_eq!(c.len(), 15);
    /// assert!((0..15).all(|i| c.contains(&i)));
    /// ```
    pub fn union(&self, other: &Self) -> Result<Self, SetError> {
        self.check_compatible(other)?;
        let capacity = self
            .capacity()
            .checked_add(other.capacity())
            .ok_or(SetError::CapacityOverflow(self.capacity()))?;
        let mut result =
            Self::try_with_capacity_and_equivalence(capacity, self.equivalence().clone())?;
        result.try_extend(self.iter().chain(other.iter()).cloned())?;
        debug!(
            left = self.len(),
            right = other.len(),
            result = result.len(),
            "computed set union"
        );
        Ok(result)
    }

    /// Returns a set holding the members of `self` that are also in `other`.
    ///
    /// Members keep the relative order they have in `self`. The result starts with
    /// `self.capacity()` slots, which always suffices.
    ///
    /// # Errors
    ///
    /// [`SetError::IncompatibleEquivalence`] if the two relations differ, or a growth error
    /// if the result cannot be allocated.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use linear_set::LinearSet;
    ///
    /// let a: LinearSet<u32> = LinearSet::try_from_iter(0..10).unwrap();
    /// let b: LinearSet<u32> = LinearSet::try_from_iter(5..15).unwrap();
    ///
    /// let c = a.intersection(&b).unwrap();
    /// assert_eq!(c.as_slice(), &[5, 6, 7, 8, 9]);
    /// ```
    pub fn intersection(&self, other: &Self) -> Result<Self, SetError> {
        self.check_compatible(other)?;
        let mut result =
            Self::try_with_capacity_and_equivalence(self.capacity(), self.equivalence().clone())?;
        // Every member of `self` is already distinct, so a single pass is enough.
        result.try_extend(self.iter().filter(|item| other.contains(item)).cloned())?;
        debug!(
            left = self.len(),
            right = other.len(),
            result = result.len(),
            "computed set intersection"
        );
        Ok(result)
    }

    fn check_compatible(&self, other: &Self) -> Result<(), SetError> {
        if self.equivalence() != other.equivalence() {
            warn!("rejected set algebra between sets with different equivalence relations");
            return Err(SetError::IncompatibleEquivalence);
        }
        Ok(())
    }
}
