use criterion::{black_box, criterion_group, criterion_main, Criterion};
use scm_complex::{Complex, FacetSet};
use scm_core::rng::RngHandle;
use scm_core::VertexId;

fn ring_complex(facets: usize) -> Complex {
    let sets: Vec<FacetSet> = (0..facets)
        .map(|f| {
            let base = (2 * f) as u64;
            [base, base + 1, base + 2]
                .into_iter()
                .map(|v| VertexId::from_raw(v % (2 * facets) as u64))
                .collect()
        })
        .collect();
    Complex::from_facets(&sets).unwrap()
}

fn rewire_bench(c: &mut Criterion) {
    c.bench_function("do_moves_l2_200_facets", |b| {
        let mut complex = ring_complex(200);
        let mut rng = RngHandle::from_seed(42);
        b.iter(|| {
            let moves = complex.random_rewire(2, &mut rng);
            black_box(complex.do_moves(&moves));
        });
    });

    c.bench_function("shuffle_200_facets", |b| {
        let mut complex = ring_complex(200);
        let mut rng = RngHandle::from_seed(42);
        b.iter(|| {
            complex.shuffle(&mut rng);
            black_box(complex.num_edges());
        });
    });
}

criterion_group!(benches, rewire_bench);
criterion_main!(benches);
