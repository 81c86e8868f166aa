//! Element representations and the algebra they satisfy.
//!
//! The closure machinery is polymorphic over any type implementing
//! [`element::GroupElement`]: a keyed, immutable value with an associative
//! `multiply` and an `invert`. Two concrete representations ship with the
//! crate:
//! - [`matrix::FieldMatrix`]: square matrices over a prime field GF(p),
//!   composed by matrix multiplication;
//! - [`modular::ModularInt`]: residue classes in Z/nZ, composed additively.

pub mod element;
pub mod field;
pub mod matrix;
pub mod modular;

pub use element::GroupElement;
pub use field::PrimeField;
pub use matrix::FieldMatrix;
pub use modular::ModularInt;
