use cayley_grapher::algebra::field::PrimeField;
use cayley_grapher::algebra::matrix::FieldMatrix;
use cayley_grapher::algebra::modular::ModularInt;
use cayley_grapher::error::GroupError;
use cayley_grapher::group::axioms::is_group;
use cayley_grapher::group::finite_group::{ClosureOptions, FiniteGroup};
use cayley_grapher::group::orbit::orbit;

fn gf(p: u64) -> PrimeField {
    PrimeField::new(p).unwrap()
}

fn m2(entries: [u64; 4], p: u64) -> FieldMatrix {
    FieldMatrix::square(2, entries.to_vec(), gf(p)).unwrap()
}

#[test]
fn identity_generator_closes_to_the_trivial_group() {
    let id = FieldMatrix::identity(2, gf(2));
    let group = FiniteGroup::new("trivial", vec![id]).unwrap();
    assert_eq!(group.order(), 1);
    assert!(is_group(&group));
    let graph = group.cayley_graph().unwrap();
    assert_eq!(graph.node_count(), 1);
    // One self-loop per (distinct) generator.
    assert_eq!(graph.edge_count(), 1);
    assert_eq!(graph.edges[0].source, graph.edges[0].target);
}

#[test]
fn additive_shift_mod_4_closes_to_a_4_cycle() {
    let group = FiniteGroup::new("z4", vec![ModularInt::new(1, 4).unwrap()]).unwrap();
    assert_eq!(group.order(), 4);
    assert!(is_group(&group));
    let graph = group.cayley_graph().unwrap();
    assert_eq!(graph.node_count(), 4);
    assert_eq!(graph.edge_count(), 4);
    for edge in &graph.edges {
        assert_eq!(edge.target, (edge.source + 1) % 4);
    }
}

#[test]
fn multiplicative_1x1_matrix_closes_to_a_cyclic_group() {
    // 2 has order 4 in GF(5)*: powers 2, 4, 3, 1.
    let two = FieldMatrix::square(1, vec![2], gf(5)).unwrap();
    let group = FiniteGroup::new("c4", vec![two]).unwrap();
    assert_eq!(group.order(), 4);
    assert!(is_group(&group));
    let entries: Vec<u64> = group.elements().map(|m| m.entry(0, 0)).collect();
    assert_eq!(entries, vec![2, 4, 3, 1]);
}

#[test]
fn two_commuting_generators_close_to_order_8() {
    // diag(4,1) has order 2 and diag(1,2) has order 4 in GF(5); together
    // they generate the eight diagonal matrices diag(4^a, 2^b).
    let flip = m2([4, 0, 0, 1], 5);
    let quarter = m2([1, 0, 0, 2], 5);
    let group = FiniteGroup::new("c2xc4", vec![flip, quarter]).unwrap();
    assert_eq!(group.order(), 8);
    assert!(is_group(&group));
    let graph = group.cayley_graph().unwrap();
    assert_eq!(graph.node_count(), 8);
    assert_eq!(graph.edge_count(), 16);
    for id in 0..graph.node_count() {
        assert_eq!(graph.edges_from(id).count(), 2);
    }
}

#[test]
fn noncommuting_generators_close_to_gl22() {
    // A transposition and a shear generate GL(2,2), order 6.
    let swap = m2([0, 1, 1, 0], 2);
    let shear = m2([1, 1, 0, 1], 2);
    let group = FiniteGroup::new("gl22", vec![swap, shear]).unwrap();
    assert_eq!(group.order(), 6);
    assert!(is_group(&group));
}

#[test]
fn closure_agrees_with_the_orbit_of_the_identity() {
    let swap = m2([0, 1, 1, 0], 2);
    let shear = m2([1, 1, 0, 1], 2);
    let group = FiniteGroup::new("gl22", vec![swap.clone(), shear.clone()]).unwrap();

    let reached = orbit(&[swap, shear], group.identity()).unwrap();
    assert_eq!(reached.len(), group.order());
    for element in &reached {
        assert!(group.contains(element));
    }
}

#[test]
fn ceiling_cuts_off_a_group_that_grows_past_it() {
    let two = FieldMatrix::square(1, vec![2], gf(101)).unwrap();
    // 2 has order 100 mod 101; a ceiling of 10 must trip.
    let err = FiniteGroup::with_options("c100", vec![two], ClosureOptions::with_max_order(10))
        .unwrap_err();
    assert!(matches!(err, GroupError::GroupTooLarge { limit: 10 }));
}

#[test]
fn dimension_mismatch_aborts_construction_with_context() {
    let a = m2([1, 0, 0, 1], 2);
    let b = FieldMatrix::square(3, vec![1, 0, 0, 0, 1, 0, 0, 0, 1], gf(2)).unwrap();
    let err = FiniteGroup::new("mixed", vec![a, b]).unwrap_err();
    match err {
        GroupError::ClosureStep { source, .. } => {
            assert!(matches!(*source, GroupError::DimensionMismatch { .. }));
        }
        other => panic!("expected ClosureStep, got {other:?}"),
    }
}
