//! Residue classes in Z/nZ, composed additively.
//!
//! This is the "integers over Z/nZ" element kind: the group operation is
//! addition mod n, so the closure of `{1 mod n}` is the full cyclic group of
//! order n. Useful both on its own and as the smallest fixture for exercising
//! the closure machinery.

use crate::algebra::element::GroupElement;
use crate::container::indexed_set::Keyed;
use crate::error::GroupError;

/// A residue class `value mod modulus` under addition.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct ModularInt {
    value: u64,
    modulus: u64,
}

impl ModularInt {
    /// Creates the class of `value` in Z/nZ, reducing `value` into `0..n`.
    pub fn new(value: u64, modulus: u64) -> Result<Self, GroupError> {
        if modulus == 0 {
            return Err(GroupError::InvalidModulus { modulus });
        }
        Ok(Self {
            value: value % modulus,
            modulus,
        })
    }

    /// Canonical representative in `0..modulus`.
    #[inline]
    pub fn value(self) -> u64 {
        self.value
    }

    /// The modulus n.
    #[inline]
    pub fn modulus(self) -> u64 {
        self.modulus
    }
}

impl Keyed for ModularInt {
    type Key = String;

    fn key(&self) -> String {
        format!("{} mod {}", self.value, self.modulus)
    }
}

impl GroupElement for ModularInt {
    /// Addition mod n; the "multiplication" of the additive group.
    fn multiply(&self, other: &Self) -> Result<Self, GroupError> {
        if self.modulus != other.modulus {
            return Err(GroupError::ModulusMismatch {
                left: self.modulus,
                right: other.modulus,
            });
        }
        Ok(Self {
            value: (self.value + other.value) % self.modulus,
            modulus: self.modulus,
        })
    }

    /// Negation mod n; always defined.
    fn invert(&self) -> Result<Self, GroupError> {
        Ok(Self {
            value: (self.modulus - self.value) % self.modulus,
            modulus: self.modulus,
        })
    }

    fn identity_like(&self) -> Self {
        Self {
            value: 0,
            modulus: self.modulus,
        }
    }

    fn label(&self) -> String {
        self.key()
    }
}
