//! Membership containers with stable insertion order.
//!
//! Group closure needs both a map and a set: O(1) membership testing by a
//! derived key, plus array-like indexed access in a stable order. Neither a
//! plain `HashMap` nor a `HashSet` gives both, so [`indexed_set::IndexedSet`]
//! combines them.

pub mod indexed_set;

pub use indexed_set::{IndexedSet, Keyed};
