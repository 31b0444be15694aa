use std::collections::BTreeSet;

use scm_complex::{Complex, FacetSet, McmcMove};
use scm_core::rng::RngHandle;
use scm_core::{FacetId, VertexId};

fn facet(vertices: &[u64]) -> FacetSet {
    vertices.iter().map(|&v| VertexId::from_raw(v)).collect()
}

fn assert_mirror(complex: &Complex) {
    for f in complex.facet_ids() {
        for &v in complex.facet_neighbors(f) {
            assert_eq!(
                complex.facet_neighbors(f).count(v),
                complex.vertex_neighbors(v).count(f),
            );
        }
    }
}

fn test_complex() -> Complex {
    Complex::from_facets(&[
        facet(&[0, 1, 2]),
        facet(&[2, 3, 4]),
        facet(&[4, 5]),
        facet(&[0, 5]),
        facet(&[1, 3]),
    ])
    .unwrap()
}

#[test]
fn committed_states_preserve_sequences_and_stay_simplicial() {
    let mut complex = test_complex();
    let sizes = complex.size_sequence();
    let degrees = complex.degree_sequence();
    let mut rng = RngHandle::from_seed(42);

    let mut committed = 0;
    for step in 0..400 {
        let l = 2 + step % 3;
        let moves = complex.random_rewire(l, &mut rng);
        assert_eq!(moves.len(), 2 * l);
        if complex.do_moves(&moves) {
            committed += 1;
        }
        assert_eq!(complex.size_sequence(), sizes);
        assert_eq!(complex.degree_sequence(), degrees);
        assert!(complex.is_simplicial_complex());
        assert_mirror(&complex);
    }
    assert!(committed > 0, "no proposal was ever accepted");
}

#[test]
fn smallest_and_largest_proposal_lengths_are_legal() {
    let mut complex = test_complex();
    let mut rng = RngHandle::from_seed(7);
    let l_max = complex.num_edges();

    for _ in 0..20 {
        let moves = complex.random_rewire(2, &mut rng);
        assert_eq!(moves.len(), 4);
        complex.do_moves(&moves);
    }
    // l = M rewires every edge at once.
    let moves = complex.random_rewire(l_max, &mut rng);
    assert_eq!(moves.len(), 2 * l_max);
    complex.do_moves(&moves);
    assert!(complex.is_simplicial_complex());
}

#[test]
fn two_disjoint_pairs_stay_two_disjoint_pairs() {
    let mut complex = Complex::from_facets(&[facet(&[0, 1]), facet(&[2, 3])]).unwrap();
    let mut rng = RngHandle::from_seed(1);

    for _ in 0..200 {
        let moves = complex.random_rewire(2, &mut rng);
        complex.do_moves(&moves);

        assert_eq!(complex.size_sequence(), vec![2, 2]);
        assert_eq!(complex.degree_sequence(), vec![1, 1, 1, 1]);
        let mut seen = BTreeSet::new();
        for f in complex.facet_ids() {
            let vertices = complex.facet_neighbors(f);
            assert_eq!(vertices.distinct_len(), 2);
            seen.extend(vertices.iter().copied());
        }
        assert_eq!(seen.len(), 4, "the two pairs must partition the vertices");
    }
}

#[test]
fn rejected_proposal_reverts_to_the_exact_prior_state() {
    let mut complex = Complex::from_facets(&[facet(&[0, 1, 2]), facet(&[2, 3, 4])]).unwrap();
    let before = complex.clone();

    // Swapping vertex 2 out of the second facet and into the first one
    // doubles vertex 2 in the first facet, so the commit must fail.
    let moves = [
        McmcMove {
            vertex: VertexId::from_raw(0),
            facet: FacetId::from_raw(0),
            attach: false,
        },
        McmcMove {
            vertex: VertexId::from_raw(2),
            facet: FacetId::from_raw(1),
            attach: false,
        },
        McmcMove {
            vertex: VertexId::from_raw(0),
            facet: FacetId::from_raw(1),
            attach: true,
        },
        McmcMove {
            vertex: VertexId::from_raw(2),
            facet: FacetId::from_raw(0),
            attach: true,
        },
    ];
    assert!(!complex.do_moves(&moves));
    assert_eq!(complex, before);
}

#[test]
fn apply_then_revert_is_the_identity() {
    let mut complex = test_complex();
    let before = complex.clone();
    let mut rng = RngHandle::from_seed(99);

    let moves = complex.random_rewire(3, &mut rng);
    complex.apply_moves(&moves);
    complex.revert_moves(&moves);
    assert_eq!(complex, before);
}

#[test]
fn edge_count_is_conserved_mid_proposal() {
    let mut complex = test_complex();
    let mut rng = RngHandle::from_seed(5);
    let moves = complex.random_rewire(2, &mut rng);

    complex.apply_moves(&moves);
    let total_sizes: usize = complex.size_sequence().iter().sum();
    let total_degrees: usize = complex.degree_sequence().iter().sum();
    assert_eq!(total_sizes, complex.num_edges());
    assert_eq!(total_degrees, complex.num_edges());
    complex.revert_moves(&moves);
}
