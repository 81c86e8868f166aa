//! Finite groups and the algorithms that build and check them.
//!
//! [`finite_group::FiniteGroup`] expands a generating set to the full
//! element set by the worklist closure algorithm; [`axioms`] provides the
//! diagnostic group-axiom checks; [`orbit`] holds the standalone orbit
//! algorithms, including transversal tracking.

pub mod axioms;
pub mod finite_group;
pub mod orbit;

pub use axioms::{has_identity, has_inverses, is_closed, is_group};
pub use finite_group::{ClosureOptions, FiniteGroup};
pub use orbit::{OrbitTransversal, conjugacy_orbit, orbit, orbit_with_transversal};
