//! Orbit algorithms.
//!
//! [`orbit`] is the lean worklist: the orbit of a seed under right
//! multiplication by the generators only. Seeded with the identity it
//! enumerates the whole generated group, with O(|orbit| * k) multiplications
//! instead of the closure constructor's quadratic scan.
//!
//! [`conjugacy_orbit`] runs the same worklist under the conjugation action
//! `g⁻¹ · d · g`; for the stated group-theoretic preconditions (e.g. abelian
//! groups) it degenerates to the singleton `{seed}`.
//!
//! [`orbit_with_transversal`] additionally records, for every discovered
//! element, a word in generator indices that reaches it from the seed.
//! Discovery is breadth-first, so each word has minimal length; ties are
//! broken by generator order.

use crate::algebra::element::GroupElement;
use crate::container::indexed_set::IndexedSet;
use crate::error::GroupError;

/// Orbit of `seed` under right multiplication by `generators`, in discovery
/// order (seed first).
pub fn orbit<E: GroupElement>(generators: &[E], seed: &E) -> Result<Vec<E>, GroupError> {
    let mut delta = IndexedSet::with_capacity(generators.len() + 1);
    delta.add(seed.clone());
    let mut i = 0;
    while i < delta.len() {
        let d = delta.try_get(i)?.clone();
        for g in generators {
            let gamma = d.multiply(g)?;
            delta.add(gamma);
        }
        i += 1;
    }
    Ok(delta.into_vec())
}

/// Orbit of `seed` under conjugation by `generators`, in discovery order.
pub fn conjugacy_orbit<E: GroupElement>(
    generators: &[E],
    seed: &E,
) -> Result<Vec<E>, GroupError> {
    let mut delta = IndexedSet::with_capacity(generators.len() + 1);
    delta.add(seed.clone());
    let mut i = 0;
    while i < delta.len() {
        let d = delta.try_get(i)?.clone();
        for g in generators {
            let gamma = g.invert()?.multiply(&d)?.multiply(g)?;
            delta.add(gamma);
        }
        i += 1;
    }
    Ok(delta.into_vec())
}

/// An orbit together with one word per element recording how it was reached.
#[derive(Clone, Debug)]
pub struct OrbitTransversal<E: GroupElement> {
    /// Orbit elements in discovery order; index 0 is the seed.
    pub elements: Vec<E>,
    /// `words[i]` is a sequence of generator indices with
    /// `elements[i] = seed · g[w0] · g[w1] · ...`; the seed's word is empty.
    pub words: Vec<Vec<usize>>,
}

impl<E: GroupElement> OrbitTransversal<E> {
    /// Re-derives `elements[index]` by applying its word to the seed.
    pub fn evaluate(&self, generators: &[E], index: usize) -> Result<E, GroupError> {
        let word = self.words.get(index).ok_or(GroupError::IndexOutOfRange {
            index,
            len: self.words.len(),
        })?;
        let mut acc = self.elements[0].clone();
        for &gi in word {
            let g = generators.get(gi).ok_or(GroupError::IndexOutOfRange {
                index: gi,
                len: generators.len(),
            })?;
            acc = acc.multiply(g)?;
        }
        Ok(acc)
    }
}

/// Orbit of `seed` under right multiplication, tracking a shortest word per
/// element (ties broken by generator order).
pub fn orbit_with_transversal<E: GroupElement>(
    generators: &[E],
    seed: &E,
) -> Result<OrbitTransversal<E>, GroupError> {
    let mut delta = IndexedSet::with_capacity(generators.len() + 1);
    delta.add(seed.clone());
    let mut words: Vec<Vec<usize>> = vec![Vec::new()];
    let mut i = 0;
    while i < delta.len() {
        let d = delta.try_get(i)?.clone();
        let base = words[i].clone();
        for (gi, g) in generators.iter().enumerate() {
            let gamma = d.multiply(g)?;
            if delta.add(gamma) {
                let mut word = base.clone();
                word.push(gi);
                words.push(word);
            }
        }
        i += 1;
    }
    Ok(OrbitTransversal {
        elements: delta.into_vec(),
        words,
    })
}
