//! Axiom checks are queries: expected "invalid" outcomes answer `false`
//! instead of erroring, including elements whose inversion fails outright.

use cayley_grapher::algebra::element::GroupElement;
use cayley_grapher::algebra::modular::ModularInt;
use cayley_grapher::container::indexed_set::Keyed;
use cayley_grapher::error::GroupError;
use cayley_grapher::group::axioms::{has_identity, has_inverses, is_closed, is_group};
use cayley_grapher::group::finite_group::FiniteGroup;

/// Saturating "addition" capped at 3: associative and closed, but with no
/// identity in the generated set and no inverses at all. A monoid-ish
/// counterexample for the validators.
#[derive(Clone, Debug, PartialEq, Eq)]
struct Sat(u8);

impl Keyed for Sat {
    type Key = u8;
    fn key(&self) -> u8 {
        self.0
    }
}

impl GroupElement for Sat {
    fn multiply(&self, other: &Self) -> Result<Self, GroupError> {
        Ok(Sat((self.0 + other.0).min(3)))
    }

    fn invert(&self) -> Result<Self, GroupError> {
        Err(GroupError::NotInvertible {
            key: self.0.to_string(),
        })
    }

    fn identity_like(&self) -> Self {
        Sat(0)
    }

    fn label(&self) -> String {
        self.0.to_string()
    }
}

#[test]
fn closed_group_satisfies_every_axiom() {
    let group = FiniteGroup::new("z7", vec![ModularInt::new(3, 7).unwrap()]).unwrap();
    assert_eq!(group.order(), 7);
    assert!(is_closed(&group));
    assert!(has_identity(&group));
    assert!(has_inverses(&group));
    assert!(is_group(&group));
}

#[test]
fn saturating_elements_close_but_fail_identity_and_inverses() {
    let group = FiniteGroup::new("sat", vec![Sat(1)]).unwrap();
    assert_eq!(group.order(), 3); // {1, 2, 3}
    assert!(is_closed(&group));
    assert!(!has_identity(&group));
    // invert() erroring is a negative answer, not a panic.
    assert!(!has_inverses(&group));
    assert!(!is_group(&group));
}

#[test]
fn pre_closed_fragment_fails_closure_check() {
    let elements = vec![
        ModularInt::new(1, 6).unwrap(),
        ModularInt::new(2, 6).unwrap(),
        ModularInt::new(3, 6).unwrap(),
    ];
    let group = FiniteGroup::from_closed_parts("fragment", elements, 1).unwrap();
    assert!(!is_closed(&group));
    assert!(!is_group(&group));
}

#[test]
fn pre_closed_subgroup_passes() {
    // The even residues form a genuine subgroup of Z/6Z.
    let elements = vec![
        ModularInt::new(2, 6).unwrap(),
        ModularInt::new(4, 6).unwrap(),
        ModularInt::new(0, 6).unwrap(),
    ];
    let group = FiniteGroup::from_closed_parts("evens", elements, 1).unwrap();
    assert!(is_group(&group));
}
