//! `PrimeField`: a validated descriptor for GF(p) arithmetic.
//!
//! Matrix elements carry one of these and reduce every entrywise operation
//! through it. Only prime orders are supported; the descriptor's order and
//! characteristic therefore coincide. Products widen through `u128`, so no
//! intermediate can overflow for any prime below `2^63`.

use serde::{Deserialize, Serialize};

use crate::error::GroupError;

/// A prime finite field, described by its order.
///
/// Serializes as the bare order; deserialization re-runs the primality
/// check, so a composite order cannot sneak in through serde.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "u64", into = "u64")]
pub struct PrimeField {
    order: u64,
}

impl TryFrom<u64> for PrimeField {
    type Error = GroupError;

    fn try_from(order: u64) -> Result<Self, Self::Error> {
        Self::new(order)
    }
}

impl From<PrimeField> for u64 {
    fn from(field: PrimeField) -> u64 {
        field.order
    }
}

impl PrimeField {
    /// Creates a field descriptor, rejecting composite or degenerate orders
    /// with [`GroupError::NotPrime`].
    pub fn new(order: u64) -> Result<Self, GroupError> {
        if !is_prime(order) {
            return Err(GroupError::NotPrime { order });
        }
        Ok(Self { order })
    }

    /// Number of field elements.
    #[inline]
    pub const fn order(self) -> u64 {
        self.order
    }

    /// Characteristic of the field; equals the order for a prime field.
    #[inline]
    pub const fn characteristic(self) -> u64 {
        self.order
    }

    /// Canonical representative of `v` in `0..order`.
    #[inline]
    pub const fn reduce(self, v: u64) -> u64 {
        v % self.order
    }

    /// `a + b` in the field.
    #[inline]
    pub const fn add(self, a: u64, b: u64) -> u64 {
        (a % self.order + b % self.order) % self.order
    }

    /// `a - b` in the field.
    #[inline]
    pub const fn sub(self, a: u64, b: u64) -> u64 {
        let a = a % self.order;
        let b = b % self.order;
        (a + self.order - b) % self.order
    }

    /// `-a` in the field.
    #[inline]
    pub const fn neg(self, a: u64) -> u64 {
        (self.order - a % self.order) % self.order
    }

    /// `a * b` in the field, widened through `u128`.
    #[inline]
    pub const fn mul(self, a: u64, b: u64) -> u64 {
        ((a as u128 % self.order as u128) * (b as u128 % self.order as u128) % self.order as u128)
            as u64
    }

    /// Multiplicative inverse of `a`, or `None` for the zero class.
    ///
    /// Fermat: `a^(p-2) = a^-1 (mod p)` for prime `p` and `a != 0`.
    pub fn inv(self, a: u64) -> Option<u64> {
        let a = a % self.order;
        if a == 0 {
            return None;
        }
        Some(self.pow(a, self.order - 2))
    }

    /// `a^e` in the field by square-and-multiply.
    pub fn pow(self, a: u64, mut e: u64) -> u64 {
        let mut base = a % self.order;
        let mut acc = 1 % self.order;
        while e > 0 {
            if e & 1 == 1 {
                acc = self.mul(acc, base);
            }
            base = self.mul(base, base);
            e >>= 1;
        }
        acc
    }
}

/// Trial division; field orders here are tiny.
fn is_prime(n: u64) -> bool {
    if n < 2 {
        return false;
    }
    if n % 2 == 0 {
        return n == 2;
    }
    let mut d: u64 = 3;
    while d.saturating_mul(d) <= n {
        if n % d == 0 {
            return false;
        }
        d += 2;
    }
    true
}
