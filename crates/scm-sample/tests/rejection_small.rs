use std::collections::BTreeSet;

use scm_complex::{sanitize_facets, Complex, FacetSet};
use scm_core::rng::RngHandle;
use scm_core::VertexId;
use scm_sample::randomize;

fn facet(vertices: &[u64]) -> FacetSet {
    vertices.iter().map(|&v| VertexId::from_raw(v)).collect()
}

#[test]
fn sequence_mode_yields_two_disjoint_pairs() {
    let mut complex = Complex::from_sequences(&[2, 2], &[1, 1, 1, 1]).unwrap();
    let mut rng = RngHandle::from_seed(1);

    let attempts = randomize(&mut complex, &mut rng, |_| {});
    assert!(attempts >= 1);
    assert!(complex.is_simplicial_complex());
    assert_eq!(complex.size_sequence(), vec![2, 2]);
    assert_eq!(complex.degree_sequence(), vec![1, 1, 1, 1]);

    let mut seen = BTreeSet::new();
    for f in complex.facet_ids() {
        seen.extend(complex.facet_neighbors(f).iter().copied());
    }
    assert_eq!(seen.len(), 4, "facets must be disjoint");
}

#[test]
fn attempt_callback_observes_every_try() {
    let mut complex = Complex::from_sequences(&[2, 2], &[2, 1, 1]).unwrap();
    let mut rng = RngHandle::from_seed(7);

    let mut observed = Vec::new();
    let attempts = randomize(&mut complex, &mut rng, |n| observed.push(n));
    assert_eq!(observed, (1..=attempts).collect::<Vec<_>>());
}

#[test]
fn facet_list_mode_preserves_the_input_sequences() {
    let sanitized = sanitize_facets(vec![facet(&[0, 1, 2]), facet(&[2, 3]), facet(&[3, 4])]);
    let mut complex = Complex::from_facets(&sanitized.facets).unwrap();
    let sizes = complex.size_sequence();
    let degrees = complex.degree_sequence();
    let mut rng = RngHandle::from_seed(9);

    randomize(&mut complex, &mut rng, |_| {});
    assert!(complex.is_simplicial_complex());
    assert_eq!(complex.size_sequence(), sizes);
    assert_eq!(complex.degree_sequence(), degrees);
}

#[test]
fn identical_seeds_reproduce_the_accepted_state() {
    let run = |seed: u64| {
        let mut complex = Complex::from_sequences(&[2, 2, 2], &[1, 1, 1, 2, 1]).unwrap();
        let mut rng = RngHandle::from_seed(seed);
        let attempts = randomize(&mut complex, &mut rng, |_| {});
        (attempts, complex.facet_sets())
    };
    assert_eq!(run(31), run(31));
}
