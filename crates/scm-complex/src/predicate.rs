//! Membership predicate for the SCM ensemble.

use scm_core::FacetId;

use crate::complex::Complex;
use crate::multiset::Multiset;

impl Complex {
    /// Decides whether the current state is a simplicial complex: no facet
    /// holds a repeated vertex and no facet is included in another.
    pub fn is_simplicial_complex(&self) -> bool {
        !self.has_multi_edges() && !self.has_inclusions()
    }

    /// Returns whether any facet holds the same vertex more than once.
    pub fn has_multi_edges(&self) -> bool {
        self.facet_ids().any(|facet| {
            let neighborhood = self.facet_neighbors(facet);
            neighborhood.distinct_len() != neighborhood.len()
        })
    }

    /// Returns whether any facet is included in another.
    pub fn has_inclusions(&self) -> bool {
        self.facet_ids().any(|facet| !self.inclusions_of(facet).is_empty())
    }

    /// Returns every facet that contains all vertices of `facet`.
    ///
    /// Starts from the facet neighborhood of the first vertex (minus `facet`
    /// itself) and intersects with the neighborhoods of the remaining
    /// vertices, bailing out as soon as the candidate set empties. The cost
    /// is the sum of the incident vertices' degrees, not a pairwise sweep
    /// over all facets.
    pub fn inclusions_of(&self, facet: FacetId) -> Multiset<FacetId> {
        let neighborhood = self.facet_neighbors(facet);
        let mut vertices = neighborhood.iter();
        let Some(&first) = vertices.next() else {
            return Multiset::new();
        };
        let mut candidates = self.vertex_neighbors(first).clone();
        candidates.remove_all(facet);
        for &vertex in vertices {
            if candidates.is_empty() {
                return candidates;
            }
            candidates = candidates.intersection(self.vertex_neighbors(vertex));
        }
        candidates
    }

    /// Returns whether every vertex of `facet_a` also belongs to `facet_b`,
    /// multiplicities included. A facet is included in itself.
    pub fn included_in(&self, facet_a: FacetId, facet_b: FacetId) -> bool {
        let a = self.facet_neighbors(facet_a);
        let b = self.facet_neighbors(facet_b);
        a.intersection(b).len() == a.len()
    }
}
