use scm_complex::{Complex, FacetSet};
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
                "mirror mismatch for vertex {} in facet {}",
                v.as_raw(),
                f.as_raw(),
            );
        }
    }
    for v in complex.vertex_ids() {
        for &f in complex.vertex_neighbors(v) {
            assert_eq!(
                complex.vertex_neighbors(v).count(f),
                complex.facet_neighbors(f).count(v),
            );
        }
    }
}

#[test]
fn construction_from_facets_counts_edges() {
    let complex = Complex::from_facets(&[facet(&[0, 1, 2]), facet(&[2, 3])]).unwrap();
    assert_eq!(complex.num_facets(), 2);
    assert_eq!(complex.num_vertices(), 4);
    assert_eq!(complex.num_edges(), 5);
    assert_eq!(complex.size_sequence(), vec![3, 2]);
    assert_eq!(complex.degree_sequence(), vec![1, 1, 2, 1]);
    assert_mirror(&complex);
}

#[test]
fn construction_rejects_empty_inputs() {
    assert!(Complex::from_facets(&[]).is_err());
    let err = Complex::from_facets(&[facet(&[0, 1]), FacetSet::new()]).unwrap_err();
    assert_eq!(err.info().code, "empty-facet");
}

#[test]
fn construction_from_sequences_preserves_both_sequences() {
    let complex = Complex::from_sequences(&[3, 2], &[2, 1, 1, 1]).unwrap();
    assert_eq!(complex.size_sequence(), vec![3, 2]);
    assert_eq!(complex.degree_sequence(), vec![2, 1, 1, 1]);
    assert_eq!(complex.num_edges(), 5);
    assert_mirror(&complex);
}

#[test]
fn mismatched_sequence_sums_are_rejected() {
    let err = Complex::from_sequences(&[2, 2], &[1, 1, 1]).unwrap_err();
    assert_eq!(err.info().code, "sequence-mismatch");
}

#[test]
fn zero_sequence_entries_are_rejected() {
    let err = Complex::from_sequences(&[2, 0], &[1, 1]).unwrap_err();
    assert_eq!(err.info().code, "zero-entry");
}

#[test]
fn connect_and_disconnect_mirror_each_other() {
    let mut complex = Complex::from_facets(&[facet(&[0, 1]), facet(&[1, 2])]).unwrap();
    let f0 = FacetId::from_raw(0);
    let v2 = VertexId::from_raw(2);

    complex.connect(f0, v2);
    assert_eq!(complex.size(f0), 3);
    assert_eq!(complex.degree(v2), 2);
    assert_mirror(&complex);

    complex.disconnect(f0, v2);
    assert_eq!(complex.size(f0), 2);
    assert_eq!(complex.degree(v2), 1);
    assert_mirror(&complex);
}

#[test]
fn repeated_connect_increments_multiplicity() {
    let mut complex = Complex::from_facets(&[facet(&[0, 1])]).unwrap();
    let f0 = FacetId::from_raw(0);
    let v0 = VertexId::from_raw(0);

    complex.connect(f0, v0);
    assert_eq!(complex.facet_neighbors(f0).count(v0), 2);
    assert_eq!(complex.vertex_neighbors(v0).count(f0), 2);

    complex.disconnect(f0, v0);
    assert_eq!(complex.facet_neighbors(f0).count(v0), 1);
}

#[test]
#[should_panic(expected = "absent incidence")]
fn disconnecting_an_absent_edge_aborts() {
    let mut complex = Complex::from_facets(&[facet(&[0, 1]), facet(&[2, 3])]).unwrap();
    complex.disconnect(FacetId::from_raw(0), VertexId::from_raw(3));
}

#[test]
fn disconnect_all_keeps_slots_and_prescribed_edge_count() {
    let mut complex = Complex::from_facets(&[facet(&[0, 1, 2]), facet(&[2, 3])]).unwrap();
    complex.disconnect_all();
    assert_eq!(complex.num_facets(), 2);
    assert_eq!(complex.num_vertices(), 4);
    assert_eq!(complex.num_edges(), 5);
    assert_eq!(complex.size_sequence(), vec![0, 0]);
    assert_eq!(complex.degree_sequence(), vec![0, 0, 0, 0]);
}
