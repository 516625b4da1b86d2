//! # Linear Set
//!
//! A generic, growable set that needs nothing from its elements beyond an equality relation.
//!
//! Membership is decided by a linear scan with a caller-supplied [`Equivalence`], so elements
//! do not have to implement `Hash` or `Ord`. This fits small sets, and element types whose
//! notion of "the same" is not structural equality.
//!
//! ## Features
//!
//! - **[`LinearSet<T, E>`]** – contiguous, squaring-growth set with swap-remove
//! - **[`Equivalence<T>`]** – the relation trait, with [`ByEq`] and [`FnEquivalence`] built in
//! - **Set algebra** – [`LinearSet::union`] and [`LinearSet::intersection`] returning new sets
//! - **[`SetError`]** – explicit errors for popping an empty set, mismatched relations and
//!   failed growth
//!
//! ## Quick Examples
//!
//! ### Basic usage
//!
//! ```rust
//! use linear_set::LinearSet;
//!
//! let mut set: LinearSet<u32> = LinearSet::new();
//!
//! set.insert(3).unwrap();
//! set.insert(5).unwrap();
//! set.insert(3).unwrap();
//! assert!(set.contains(&3));
//! assert_eq!(set.len(), 2);
//! assert_eq!(set.pop(), Ok(5));
//! ```
//!
//! ### Custom relation
//!
//! ```rust
//! use linear_set::{Equivalence, LinearSet};
//!
//! #[derive(Debug, Default, Clone, PartialEq)]
//! struct CaseInsensitive;
//!
//! impl Equivalence<String> for CaseInsensitive {
//!     fn equivalent(&self, a: &String, b: &String) -> bool {
//!         a.eq_ignore_ascii_case(b)
//!     }
//! }
//!
//! let mut tags: LinearSet<String, CaseInsensitive> = LinearSet::new();
//! tags.insert("Rust".to_string()).unwrap();
//! tags.insert("RUST".to_string()).unwrap();
//! assert_eq!(tags.len(), 1);
//! ```
//!
//! ### Union and intersection
//!
//! ```rust
//! use linear_set::LinearSet;
//!
//! let a: LinearSet<i32> = LinearSet::try_from_iter(0..10).unwrap();
//! let b: LinearSet<i32> = LinearSet::try_from_iter(5..15).unwrap();
//!
//! assert_eq!(a.union(&b).unwrap().len(), 15);
//! assert_eq!(a.intersection(&b).unwrap().as_slice(), &[5, 6, 7, 8, 9]);
//! ```
//!
//! ## Concurrency
//!
//! A set is a plain owned value. Mutation needs `&mut`, so sharing one between threads
//! requires external synchronization such as a `Mutex`.
//!
//! [`LinearSet<T, E>`]: generic::linear_set::LinearSet
//! [`Equivalence<T>`]: generic::equivalence::Equivalence

pub mod error;
pub mod generic;

pub use error::SetError;
pub use generic::equivalence::{ByEq, Equivalence, FnEquivalence};
pub use generic::linear_set::{LinearSet, INITIAL_CAPACITY, MIN_CAPACITY};
