//! The capability contract every group-element representation satisfies.

use crate::container::indexed_set::Keyed;
use crate::error::GroupError;

/// An immutable group element.
///
/// The derived key ([`Keyed::key`]) is the equality contract: two elements
/// are the same group member iff their keys match. `multiply` must be
/// associative and total over compatible operands; shape or field
/// incompatibilities surface as errors rather than panics. Elements are
/// never mutated after construction, so they can be shared freely between a
/// group, its generator list, orbits, and derived graph nodes.
pub trait GroupElement: Keyed + Clone + std::fmt::Debug {
    /// The group operation. Fails with a shape/field error on incompatible
    /// operands; never fails for two elements of the same group.
    fn multiply(&self, other: &Self) -> Result<Self, GroupError>;

    /// The group inverse. Fails with [`GroupError::NotInvertible`] when no
    /// inverse exists; callers either know the element lies in a group
    /// (hence is invertible) or handle the failure.
    fn invert(&self) -> Result<Self, GroupError>;

    /// The neutral element of the same shape/field/modulus as `self`.
    fn identity_like(&self) -> Self;

    /// Human-readable rendering of the canonical key, used as the node
    /// label in derived graphs.
    fn label(&self) -> String;
}
