//! In-memory set with set-like membership and array-like indexed access.
//!
//! [`IndexedSet`] stores elements in insertion order in a `Vec` and keeps a
//! position map from each element's derived key to its index, so membership
//! tests and index lookups are O(1) amortized while iteration order stays
//! exactly the insertion order.
//!
//! The closure algorithm grows the set while scanning it by integer index,
//! re-reading `len()` as the loop bound each step. That is the one sanctioned
//! way to iterate a set that is being mutated; the borrowing iterators
//! ([`IndexedSet::iter`], [`IndexedSet::entries`]) must not observe mutation
//! mid-flight.

use std::collections::HashMap;

use crate::debug_invariants::DebugInvariants;
use crate::error::GroupError;

/// Values that derive a canonical, equality-determining key.
///
/// Two values are the same set member iff their keys compare equal. The key
/// must be collision-free over the value domain: it stands in for value
/// equality in every membership decision.
///
/// Rationale for the bounds, following the crate's bound-alias style:
/// - `Eq + Hash` for the `HashMap`-backed position map
/// - `Ord` to allow deterministic ordering where callers need it
/// - `Debug` for diagnostics and invariant checks
pub trait Keyed {
    /// Canonical key type.
    type Key: Clone + Eq + std::hash::Hash + Ord + std::fmt::Debug;

    /// Derive the canonical key for this value.
    fn key(&self) -> Self::Key;
}

/// A set with stable, insertion-ordered indexed access.
///
/// # Example
/// ```rust
/// use cayley_grapher::container::indexed_set::{IndexedSet, Keyed};
///
/// #[derive(Clone, Debug)]
/// struct Tag(u32);
/// impl Keyed for Tag {
///     type Key = u32;
///     fn key(&self) -> u32 { self.0 }
/// }
///
/// let mut set = IndexedSet::new();
/// assert!(set.add(Tag(7)));
/// assert!(!set.add(Tag(7))); // no-op on duplicate key
/// assert_eq!(set.len(), 1);
/// assert_eq!(set.get(0).map(|t| t.0), Some(7));
/// ```
#[derive(Clone, Debug)]
pub struct IndexedSet<T: Keyed> {
    /// Elements in insertion order.
    items: Vec<T>,
    /// Key -> index into `items`.
    pos: HashMap<T::Key, usize>,
}

impl<T: Keyed> Default for IndexedSet<T> {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            pos: HashMap::new(),
        }
    }
}

impl<T: Keyed> IndexedSet<T> {
    /// Creates a new, empty set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty set with room for `capacity` elements.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            items: Vec::with_capacity(capacity),
            pos: HashMap::with_capacity(capacity),
        }
    }

    /// Number of elements currently stored.
    #[inline]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// `true` if the set holds no elements.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Membership test by derived key.
    #[inline]
    pub fn contains(&self, x: &T) -> bool {
        self.pos.contains_key(&x.key())
    }

    /// Membership test by key.
    #[inline]
    pub fn contains_key(&self, key: &T::Key) -> bool {
        self.pos.contains_key(key)
    }

    /// The `i`-th inserted element, or `None` past the end.
    #[inline]
    pub fn get(&self, index: usize) -> Option<&T> {
        self.items.get(index)
    }

    /// The `i`-th inserted element, or [`GroupError::IndexOutOfRange`].
    #[inline]
    pub fn try_get(&self, index: usize) -> Result<&T, GroupError> {
        self.items.get(index).ok_or(GroupError::IndexOutOfRange {
            index,
            len: self.items.len(),
        })
    }

    /// Index assigned to the element equal (by key) to `x`, if present.
    #[inline]
    pub fn index_of(&self, x: &T) -> Option<usize> {
        self.pos.get(&x.key()).copied()
    }

    /// Index assigned to `key`, if present.
    #[inline]
    pub fn index_of_key(&self, key: &T::Key) -> Option<usize> {
        self.pos.get(key).copied()
    }

    /// Inserts `x` if its key is absent; returns whether it was inserted.
    ///
    /// A duplicate key is a no-op: the previously stored element keeps both
    /// its slot and its index assignment.
    pub fn add(&mut self, x: T) -> bool {
        let key = x.key();
        if self.pos.contains_key(&key) {
            return false;
        }
        self.pos.insert(key, self.items.len());
        self.items.push(x);
        true
    }

    /// Adds every element of `iter` in order, skipping duplicate keys.
    pub fn extend_from<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for x in iter {
            self.add(x);
        }
    }

    /// Removes the element stored under `key`, swapping the last element into
    /// the vacated slot and reindexing it so indices stay dense `0..len()`.
    ///
    /// Returns the removed element, or `None` if `key` was absent. Note that
    /// this perturbs the insertion order of the one moved element; the
    /// closure algorithm never deletes, so its order guarantee is unaffected.
    pub fn swap_remove(&mut self, key: &T::Key) -> Option<T> {
        let index = self.pos.remove(key)?;
        let removed = self.items.swap_remove(index);
        if index < self.items.len() {
            let moved_key = self.items[index].key();
            self.pos.insert(moved_key, index);
        }
        self.debug_assert_invariants();
        Some(removed)
    }

    /// Drops every element.
    pub fn clear(&mut self) {
        self.items.clear();
        self.pos.clear();
    }

    /// Iterate elements in insertion order. Snapshot of the call-time
    /// contents; do not mutate the set while this borrow is live.
    #[inline]
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.items.iter()
    }

    /// Iterate `(index, element)` pairs in insertion order.
    #[inline]
    pub fn entries(&self) -> impl Iterator<Item = (usize, &T)> {
        self.items.iter().enumerate()
    }

    /// The stored elements as a slice, in insertion order.
    #[inline]
    pub fn as_slice(&self) -> &[T] {
        &self.items
    }

    /// Consumes the set, yielding its elements in insertion order.
    pub fn into_vec(self) -> Vec<T> {
        self.items
    }
}

impl<'a, T: Keyed> IntoIterator for &'a IndexedSet<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

impl<T: Keyed> IntoIterator for IndexedSet<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}

impl<T: Keyed> FromIterator<T> for IndexedSet<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut set = Self::new();
        set.extend_from(iter);
        set
    }
}

impl<T: Keyed> DebugInvariants for IndexedSet<T> {
    fn debug_assert_invariants(&self) {
        crate::debug_invariants!(self.validate_invariants(), "IndexedSet");
    }

    fn validate_invariants(&self) -> Result<(), GroupError> {
        if self.pos.len() != self.items.len() {
            return Err(GroupError::InvariantViolation(format!(
                "position map holds {} keys for {} elements",
                self.pos.len(),
                self.items.len()
            )));
        }
        for (key, &index) in &self.pos {
            let item = self.items.get(index).ok_or_else(|| {
                GroupError::InvariantViolation(format!(
                    "key {key:?} maps to index {index} past the end ({})",
                    self.items.len()
                ))
            })?;
            if item.key() != *key {
                return Err(GroupError::InvariantViolation(format!(
                    "key {key:?} maps to index {index}, which stores {:?}",
                    item.key()
                )));
            }
        }
        Ok(())
    }
}
