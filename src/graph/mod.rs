//! Cayley diagram derivation.
//!
//! A Cayley diagram encodes a group's multiplication structure as a graph:
//! every element is a node, and for each generator `s` there is a directed
//! edge `g -> g·s` carrying the generator's ordinal. Each node therefore has
//! exactly `k` outgoing edges for `k` generators; self-loops (when `s` acts
//! trivially) and coincident edges are kept, not deduplicated.
//!
//! The graph is transient: every build recomputes it from the group
//! snapshot, and two builds of the same snapshot yield identical node and
//! edge lists. The rendering collaborator consumes the serialized form and
//! assigns one display color per generator ordinal.

use serde::{Deserialize, Serialize};

use crate::algebra::element::GroupElement;
use crate::error::GroupError;
use crate::group::finite_group::FiniteGroup;

/// A graph node: one group element.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GraphNode {
    /// Element index in the group's membership set.
    pub id: usize,
    /// Canonical key of the element, for display.
    pub label: String,
    /// Display size hint for the renderer.
    pub size: f64,
}

/// A directed edge `source -> target` labeled with the generator ordinal
/// that produced it: `target = source · generators[generator]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GraphEdge {
    pub source: usize,
    pub target: usize,
    /// Ordinal into the group's generator list, not an element index.
    pub generator: usize,
}

/// Rendering hints applied at build time.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GraphOptions {
    /// Size hint stamped on every node.
    pub node_size: f64,
}

impl Default for GraphOptions {
    fn default() -> Self {
        Self { node_size: 4.0 }
    }
}

/// The derived Cayley diagram of a [`FiniteGroup`].
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct CayleyGraph {
    /// One node per group element, in element-set order.
    pub nodes: Vec<GraphNode>,
    /// `order * generator_count` edges, grouped by source element.
    pub edges: Vec<GraphEdge>,
}

impl CayleyGraph {
    /// Builds the diagram with default [`GraphOptions`].
    pub fn from_group<E: GroupElement>(group: &FiniteGroup<E>) -> Result<Self, GroupError> {
        Self::from_group_with_options(group, GraphOptions::default())
    }

    /// Builds the diagram, stamping `options` onto the nodes.
    ///
    /// Fails with [`GroupError::NotClosed`] if a product leaves the element
    /// set, which is only possible for a group assembled from pre-closed
    /// parts that were not actually closed.
    pub fn from_group_with_options<E: GroupElement>(
        group: &FiniteGroup<E>,
        options: GraphOptions,
    ) -> Result<Self, GroupError> {
        let elems = group.element_set();
        let mut nodes = Vec::with_capacity(elems.len());
        for (id, el) in elems.entries() {
            nodes.push(GraphNode {
                id,
                label: el.label(),
                size: options.node_size,
            });
        }

        let mut edges = Vec::with_capacity(elems.len() * group.generators().len());
        for (source, el) in elems.entries() {
            for (ordinal, &gen_index) in group.generators().iter().enumerate() {
                let generator = elems.try_get(gen_index)?;
                let product = el.multiply(generator)?;
                let target = elems.index_of(&product).ok_or_else(|| GroupError::NotClosed {
                    left: el.label(),
                    right: generator.label(),
                })?;
                edges.push(GraphEdge {
                    source,
                    target,
                    generator: ordinal,
                });
            }
        }

        Ok(Self { nodes, edges })
    }

    /// Number of nodes.
    #[inline]
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Number of edges.
    #[inline]
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Edges leaving node `id`, in generator order.
    pub fn edges_from(&self, id: usize) -> impl Iterator<Item = &GraphEdge> {
        self.edges.iter().filter(move |e| e.source == id)
    }
}

impl<E: GroupElement> FiniteGroup<E> {
    /// Derives this group's Cayley diagram. Convenience for
    /// [`CayleyGraph::from_group`].
    pub fn cayley_graph(&self) -> Result<CayleyGraph, GroupError> {
        CayleyGraph::from_group(self)
    }
}

#[cfg(test)]
mod layout_tests {
    //! Compile-time assertion that an edge stays three machine words.
    use super::*;
    use static_assertions::assert_eq_size;

    assert_eq_size!(GraphEdge, [usize; 3]);
}
