//! Group-axiom diagnostics.
//!
//! Each check is a query over a fully-closed [`FiniteGroup`], answering
//! `bool` rather than erroring: an element that fails to invert, or a
//! product that left the set, is a *negative answer*, not a crash. The first
//! counterexample short-circuits the scan and is logged at `warn` so a
//! caller can see which pair or element broke the axiom.
//!
//! Associativity is not checked; it comes with the representation's algebra
//! (matrix multiplication, modular addition) and is not verified empirically.

use itertools::Itertools;

use crate::algebra::element::GroupElement;
use crate::group::finite_group::FiniteGroup;

/// Does every pairwise product stay inside the element set?
pub fn is_closed<E: GroupElement>(group: &FiniteGroup<E>) -> bool {
    for (g, h) in group.elements().cartesian_product(group.elements()) {
        match g.multiply(h) {
            Ok(product) => {
                if !group.contains(&product) {
                    log::warn!(
                        "group `{}` is not closed: `{}` * `{}` = `{}` is missing",
                        group.name(),
                        g.label(),
                        h.label(),
                        product.label()
                    );
                    return false;
                }
            }
            Err(e) => {
                log::warn!(
                    "group `{}`: `{}` * `{}` failed: {e}",
                    group.name(),
                    g.label(),
                    h.label()
                );
                return false;
            }
        }
    }
    true
}

/// Is the neutral element for the active representation present?
pub fn has_identity<E: GroupElement>(group: &FiniteGroup<E>) -> bool {
    let present = group.contains(group.identity());
    if !present {
        log::warn!(
            "group `{}` is missing its identity `{}`",
            group.name(),
            group.identity().label()
        );
    }
    present
}

/// Does every element have its inverse in the set?
pub fn has_inverses<E: GroupElement>(group: &FiniteGroup<E>) -> bool {
    for g in group.elements() {
        match g.invert() {
            Ok(inv) => {
                if !group.contains(&inv) {
                    log::warn!(
                        "group `{}` is missing the inverse of `{}` (`{}`)",
                        group.name(),
                        g.label(),
                        inv.label()
                    );
                    return false;
                }
            }
            Err(e) => {
                log::warn!(
                    "group `{}`: `{}` has no inverse: {e}",
                    group.name(),
                    g.label()
                );
                return false;
            }
        }
    }
    true
}

/// Conjunction of the three axiom checks.
pub fn is_group<E: GroupElement>(group: &FiniteGroup<E>) -> bool {
    has_inverses(group) && has_identity(group) && is_closed(group)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::algebra::modular::ModularInt;

    fn residue(v: u64, n: u64) -> ModularInt {
        ModularInt::new(v, n).unwrap()
    }

    #[test]
    fn closed_cyclic_group_passes_all_checks() {
        let group = FiniteGroup::new("z5", vec![residue(1, 5)]).unwrap();
        assert!(is_closed(&group));
        assert!(has_identity(&group));
        assert!(has_inverses(&group));
        assert!(is_group(&group));
    }

    #[test]
    fn unclosed_parts_fail_each_check() {
        // {1, 2} mod 4 without 0 and 3: not closed, no identity, no inverses.
        let group = FiniteGroup::from_closed_parts(
            "fragment",
            vec![residue(1, 4), residue(2, 4)],
            1,
        )
        .unwrap();
        assert!(!is_closed(&group));
        assert!(!has_identity(&group));
        assert!(!has_inverses(&group));
        assert!(!is_group(&group));
    }

    #[test]
    fn inverse_check_accepts_self_inverse_elements() {
        // {0, 2} mod 4 is a closed subgroup; 2 is its own inverse.
        let group = FiniteGroup::from_closed_parts(
            "two_torsion",
            vec![residue(2, 4), residue(0, 4)],
            1,
        )
        .unwrap();
        assert!(is_group(&group));
    }
}
