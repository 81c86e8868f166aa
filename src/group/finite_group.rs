//! `FiniteGroup`: closure of a generating set under the group operation.
//!
//! Construction seeds the element set with the generators and runs the
//! worklist closure: scan elements by read index, multiply the current
//! element by every element seen so far, append products that are new, and
//! stop when the scan catches up with the growth. Termination is guaranteed
//! only for finite groups, so a configurable element ceiling acts as the
//! safety valve for runaway input.

use once_cell::sync::OnceCell;

use crate::algebra::element::GroupElement;
use crate::container::indexed_set::IndexedSet;
use crate::debug_invariants::DebugInvariants;
use crate::error::GroupError;

/// Safety limits for a closure run.
///
/// The default ceiling of 10 000 elements reflects the algorithm's O(|G|²)
/// multiplication cost; groups in the low thousands close quickly, anything
/// much beyond that deserves an explicit opt-in via [`ClosureOptions::unbounded`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClosureOptions {
    /// Abort with [`GroupError::GroupTooLarge`] once the element count
    /// passes this bound. `None` disables the ceiling.
    pub max_order: Option<usize>,
}

impl Default for ClosureOptions {
    fn default() -> Self {
        Self {
            max_order: Some(10_000),
        }
    }
}

impl ClosureOptions {
    /// No ceiling; closure of a non-finite generating set will not return.
    pub fn unbounded() -> Self {
        Self { max_order: None }
    }

    /// Ceiling at `limit` elements.
    pub fn with_max_order(limit: usize) -> Self {
        Self {
            max_order: Some(limit),
        }
    }
}

/// A finite group generated by a seed set of elements.
///
/// Owns the element set (insertion-ordered, O(1) membership) and the indices
/// of the generating elements, which always occupy slots `0..k` for the `k`
/// distinct generators supplied at construction.
#[derive(Clone, Debug)]
pub struct FiniteGroup<E: GroupElement> {
    name: String,
    elems: IndexedSet<E>,
    generators: Vec<usize>,
    identity: OnceCell<E>,
}

impl<E: GroupElement> FiniteGroup<E> {
    /// Builds the group generated by `generators` under the default
    /// [`ClosureOptions`].
    pub fn new(name: impl Into<String>, generators: Vec<E>) -> Result<Self, GroupError> {
        Self::with_options(name, generators, ClosureOptions::default())
    }

    /// Builds the group generated by `generators`, honoring `options`.
    ///
    /// Duplicate generators collapse to one slot. Any multiplication failure
    /// aborts the whole construction (a partially closed group is not a
    /// meaningful result), wrapped in [`GroupError::ClosureStep`] naming the
    /// offending pair.
    pub fn with_options(
        name: impl Into<String>,
        generators: Vec<E>,
        options: ClosureOptions,
    ) -> Result<Self, GroupError> {
        if generators.is_empty() {
            return Err(GroupError::EmptyGeneratingSet);
        }
        let mut elems = IndexedSet::with_capacity(generators.len());
        for g in generators {
            elems.add(g);
        }
        let generators = (0..elems.len()).collect();
        let mut group = Self {
            name: name.into(),
            elems,
            generators,
            identity: OnceCell::new(),
        };
        group.close(options)?;
        group.debug_assert_invariants();
        Ok(group)
    }

    /// Wraps an element list that is already closed, without re-running the
    /// closure. The first `generator_count` elements are taken as the
    /// generating set.
    ///
    /// Intended for data produced elsewhere (e.g. a deserialized group); the
    /// [`axiom checks`](crate::group::axioms) stay meaningful as diagnostics
    /// on such input, since nothing here verifies closedness.
    pub fn from_closed_parts(
        name: impl Into<String>,
        elements: Vec<E>,
        generator_count: usize,
    ) -> Result<Self, GroupError> {
        if elements.is_empty() || generator_count == 0 {
            return Err(GroupError::EmptyGeneratingSet);
        }
        let elems: IndexedSet<E> = elements.into_iter().collect();
        if generator_count > elems.len() {
            return Err(GroupError::IndexOutOfRange {
                index: generator_count - 1,
                len: elems.len(),
            });
        }
        let group = Self {
            name: name.into(),
            elems,
            generators: (0..generator_count).collect(),
            identity: OnceCell::new(),
        };
        group.debug_assert_invariants();
        Ok(group)
    }

    /// The worklist closure. The outer read index and the inner scan both
    /// re-read `len()` every step, so elements appended mid-pass are picked
    /// up by both loops; the inner scan deliberately multiplies by every
    /// element seen so far, not only by the designated generators.
    fn close(&mut self, options: ClosureOptions) -> Result<(), GroupError> {
        let ceiling = options.max_order.unwrap_or(usize::MAX);
        if self.elems.len() > ceiling {
            return Err(GroupError::GroupTooLarge { limit: ceiling });
        }
        let mut i = 0;
        while i < self.elems.len() {
            let curr = self.elems.try_get(i)?.clone();
            let mut j = 0;
            while j < self.elems.len() {
                let product = {
                    let g = self.elems.try_get(j)?;
                    curr.multiply(g).map_err(|e| GroupError::ClosureStep {
                        left: curr.label(),
                        right: g.label(),
                        source: Box::new(e),
                    })?
                };
                if self.elems.add(product) && self.elems.len() > ceiling {
                    return Err(GroupError::GroupTooLarge { limit: ceiling });
                }
                j += 1;
            }
            i += 1;
        }
        log::debug!(
            "group `{}` closed: order {} from {} generator(s)",
            self.name,
            self.elems.len(),
            self.generators.len()
        );
        Ok(())
    }

    /// Group name, as supplied by the caller.
    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Order of the group (element count after closure).
    #[inline]
    pub fn order(&self) -> usize {
        self.elems.len()
    }

    /// Membership test by the element's derived key.
    #[inline]
    pub fn contains(&self, x: &E) -> bool {
        self.elems.contains(x)
    }

    /// The element at set index `i`.
    #[inline]
    pub fn element(&self, index: usize) -> Result<&E, GroupError> {
        self.elems.try_get(index)
    }

    /// The underlying element set, in insertion order.
    #[inline]
    pub fn element_set(&self) -> &IndexedSet<E> {
        &self.elems
    }

    /// Iterate the elements in insertion order.
    #[inline]
    pub fn elements(&self) -> std::slice::Iter<'_, E> {
        self.elems.iter()
    }

    /// Indices of the generating elements (always `0..k`).
    #[inline]
    pub fn generators(&self) -> &[usize] {
        &self.generators
    }

    /// Iterate the generating elements in generator order.
    pub fn generator_elements(&self) -> impl Iterator<Item = &E> {
        self.generators.iter().filter_map(|&i| self.elems.get(i))
    }

    /// The neutral element for this group's representation, derived from the
    /// first element and cached. Presence in the group is *not* implied; see
    /// [`crate::group::axioms::has_identity`].
    pub fn identity(&self) -> &E {
        self.identity.get_or_init(|| {
            self.elems
                .get(0)
                .expect("a constructed group is never empty")
                .identity_like()
        })
    }
}

impl<E: GroupElement> DebugInvariants for FiniteGroup<E> {
    fn debug_assert_invariants(&self) {
        crate::debug_invariants!(self.validate_invariants(), "FiniteGroup");
    }

    fn validate_invariants(&self) -> Result<(), GroupError> {
        self.elems.validate_invariants()?;
        if self.generators.is_empty() {
            return Err(GroupError::InvariantViolation(
                "group without generators".into(),
            ));
        }
        for &g in &self.generators {
            if g >= self.elems.len() {
                return Err(GroupError::InvariantViolation(format!(
                    "generator index {g} out of range for {} elements",
                    self.elems.len()
                )));
            }
        }
        Ok(())
    }
}
