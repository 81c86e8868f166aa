//! # cayley-grapher
//!
//! cayley-grapher computes the closure of a finite group from a generating
//! set and derives the group's Cayley diagram: a directed multigraph with
//! one node per element and, for each generator, a color-coded edge from
//! every element to its right product with that generator. Elements are
//! polymorphic over a small capability contract, with matrices over prime
//! fields and additive residue classes shipped in the box.
//!
//! ## Features
//! - `IndexedSet`: set membership with stable, insertion-ordered indexed
//!   access, the container the closure algorithm grows while scanning
//! - Worklist group closure with a configurable element ceiling
//! - Group-axiom diagnostics (closure, identity, inverses)
//! - Orbit algorithms, including transversal (word-per-element) tracking
//! - Serde-ready graph output and input records for external collaborators
//!
//! ## Determinism
//!
//! Nothing in the crate draws randomness: element discovery order, node
//! ids, and edge lists are fully determined by the generating set, so two
//! builds from the same snapshot are identical.
//!
//! ## Usage
//! Add `cayley-grapher` as a dependency in your `Cargo.toml`:
//!
//! ```toml
//! [dependencies]
//! cayley-grapher = "0.1"
//! ```
//!
//! ```rust
//! use cayley_grapher::prelude::*;
//!
//! let shift = ModularInt::new(1, 4)?;
//! let group = FiniteGroup::new("z4", vec![shift])?;
//! assert_eq!(group.order(), 4);
//! assert!(is_group(&group));
//!
//! let graph = group.cayley_graph()?;
//! assert_eq!(graph.node_count(), 4);
//! assert_eq!(graph.edge_count(), 4);
//! # Ok::<(), cayley_grapher::error::GroupError>(())
//! ```

// Re-export our major subsystems:
pub mod algebra;
pub mod container;
pub mod debug_invariants;
pub mod error;
pub mod graph;
pub mod group;
pub mod record;

pub use debug_invariants::DebugInvariants;

/// A convenient prelude to import the most-used traits & types:
pub mod prelude {
    pub use crate::algebra::element::GroupElement;
    pub use crate::algebra::field::PrimeField;
    pub use crate::algebra::matrix::FieldMatrix;
    pub use crate::algebra::modular::ModularInt;
    pub use crate::container::indexed_set::{IndexedSet, Keyed};
    pub use crate::debug_invariants::DebugInvariants;
    pub use crate::error::GroupError;
    pub use crate::graph::{CayleyGraph, GraphEdge, GraphNode, GraphOptions};
    pub use crate::group::axioms::{has_identity, has_inverses, is_closed, is_group};
    pub use crate::group::finite_group::{ClosureOptions, FiniteGroup};
    pub use crate::group::orbit::{
        OrbitTransversal, conjugacy_orbit, orbit, orbit_with_transversal,
    };
    pub use crate::record::{GeneratorRecord, GroupRecord};
}
