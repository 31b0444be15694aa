use std::collections::BTreeSet;

use scm_core::errors::{ErrorInfo, ScmError};
use scm_core::{FacetId, VertexId};

use crate::ids::{facet_index, make_facet, make_vertex, vertex_index};
use crate::multiset::Multiset;

/// A facet expressed as a plain vertex set; the currency of sanitization and
/// construction.
pub type FacetSet = BTreeSet<VertexId>;

/// Bipartite incidence store for a simplicial complex.
///
/// Two aligned adjacency lists hold the same incidence edges: one keyed by
/// facet, one by vertex. Every mutation goes through [`connect`] and
/// [`disconnect`], which keep the mirror exact. The number of facets,
/// vertices, and prescribed incidence edges is fixed at construction; only
/// the matching between the two sides changes afterwards.
///
/// [`connect`]: Complex::connect
/// [`disconnect`]: Complex::disconnect
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Complex {
    facet_neighbors: Vec<Multiset<VertexId>>,
    vertex_neighbors: Vec<Multiset<FacetId>>,
    num_edges: usize,
}

impl Complex {
    /// Builds a complex from a list of maximal facets.
    ///
    /// Vertex ids must be dense: the store allocates one slot per id up to
    /// the largest one seen, which sanitized input guarantees.
    pub fn from_facets(maximal_facets: &[FacetSet]) -> Result<Self, ScmError> {
        if maximal_facets.is_empty() {
            return Err(complex_error("no-facets", "a complex requires at least one facet"));
        }
        let mut num_edges = 0;
        let mut max_vertex = 0u64;
        for (idx, facet) in maximal_facets.iter().enumerate() {
            if facet.is_empty() {
                return Err(
                    complex_error("empty-facet", "facets must contain at least one vertex")
                        .with_context("facet", idx.to_string()),
                );
            }
            num_edges += facet.len();
            for vertex in facet {
                max_vertex = max_vertex.max(vertex.as_raw());
            }
        }
        let num_vertices = max_vertex as usize + 1;
        let mut complex = Self {
            facet_neighbors: vec![Multiset::new(); maximal_facets.len()],
            vertex_neighbors: vec![Multiset::new(); num_vertices],
            num_edges,
        };
        for (f, facet) in maximal_facets.iter().enumerate() {
            for &vertex in facet {
                complex.connect(make_facet(f), vertex);
            }
        }
        Ok(complex)
    }

    /// Builds a complex from a facet-size sequence and a degree sequence.
    ///
    /// Stubs are matched in index order, so the result preserves both
    /// sequences by construction but is almost never simplicial; callers
    /// shuffle it into the ensemble.
    pub fn from_sequences(sizes: &[usize], degrees: &[usize]) -> Result<Self, ScmError> {
        if sizes.is_empty() || degrees.is_empty() {
            return Err(input_error(
                "empty-sequence",
                "both the size and the degree sequence must be non-empty",
            ));
        }
        if sizes.iter().any(|&s| s == 0) || degrees.iter().any(|&d| d == 0) {
            return Err(input_error(
                "zero-entry",
                "size and degree sequences must be strictly positive",
            ));
        }
        let num_edges: usize = sizes.iter().sum();
        let degree_total: usize = degrees.iter().sum();
        if num_edges != degree_total {
            return Err(input_error(
                "sequence-mismatch",
                "size and degree sequences must sum to the same edge count",
            )
            .with_context("size_sum", num_edges.to_string())
            .with_context("degree_sum", degree_total.to_string()));
        }
        let mut complex = Self {
            facet_neighbors: vec![Multiset::new(); sizes.len()],
            vertex_neighbors: vec![Multiset::new(); degrees.len()],
            num_edges,
        };
        let mut facet = 0usize;
        let mut remaining_size = sizes[0];
        let mut vertex = 0usize;
        let mut remaining_degree = degrees[0];
        for _ in 0..num_edges {
            complex.connect(make_facet(facet), make_vertex(vertex));
            remaining_size -= 1;
            remaining_degree -= 1;
            if remaining_size == 0 && facet + 1 < sizes.len() {
                facet += 1;
                remaining_size = sizes[facet];
            }
            if remaining_degree == 0 && vertex + 1 < degrees.len() {
                vertex += 1;
                remaining_degree = degrees[vertex];
            }
        }
        Ok(complex)
    }

    /// Inserts the incidence edge `(vertex, facet)` on both sides.
    ///
    /// Repeated insertion is allowed and increments multiplicity.
    pub fn connect(&mut self, facet: FacetId, vertex: VertexId) {
        self.facet_neighbors[facet_index(facet)].insert(vertex);
        self.vertex_neighbors[vertex_index(vertex)].insert(facet);
    }

    /// Removes one occurrence of the incidence edge `(vertex, facet)`.
    ///
    /// Disconnecting an absent edge is a programmer error and aborts.
    pub fn disconnect(&mut self, facet: FacetId, vertex: VertexId) {
        let had_vertex = self.facet_neighbors[facet_index(facet)].remove_one(vertex);
        let had_facet = self.vertex_neighbors[vertex_index(vertex)].remove_one(facet);
        assert!(
            had_vertex && had_facet,
            "disconnect of absent incidence edge (vertex {}, facet {})",
            vertex.as_raw(),
            facet.as_raw(),
        );
    }

    /// Empties both adjacency lists while keeping the facet and vertex slots.
    pub fn disconnect_all(&mut self) {
        for neighborhood in &mut self.facet_neighbors {
            neighborhood.clear();
        }
        for neighborhood in &mut self.vertex_neighbors {
            neighborhood.clear();
        }
    }

    /// Returns the vertex multiset of a facet.
    pub fn facet_neighbors(&self, facet: FacetId) -> &Multiset<VertexId> {
        &self.facet_neighbors[facet_index(facet)]
    }

    /// Returns the facet multiset of a vertex.
    pub fn vertex_neighbors(&self, vertex: VertexId) -> &Multiset<FacetId> {
        &self.vertex_neighbors[vertex_index(vertex)]
    }

    /// Returns the current cardinality of a facet.
    pub fn size(&self, facet: FacetId) -> usize {
        self.facet_neighbors[facet_index(facet)].len()
    }

    /// Returns the current degree of a vertex.
    pub fn degree(&self, vertex: VertexId) -> usize {
        self.vertex_neighbors[vertex_index(vertex)].len()
    }

    /// Returns the number of facets.
    pub fn num_facets(&self) -> usize {
        self.facet_neighbors.len()
    }

    /// Returns the number of vertices.
    pub fn num_vertices(&self) -> usize {
        self.vertex_neighbors.len()
    }

    /// Returns the prescribed total number of incidence edges.
    pub fn num_edges(&self) -> usize {
        self.num_edges
    }

    /// Iterates over all facet identifiers.
    pub fn facet_ids(&self) -> impl ExactSizeIterator<Item = FacetId> {
        (0..self.facet_neighbors.len()).map(make_facet)
    }

    /// Iterates over all vertex identifiers.
    pub fn vertex_ids(&self) -> impl ExactSizeIterator<Item = VertexId> {
        (0..self.vertex_neighbors.len()).map(make_vertex)
    }

    /// Returns the facet-size sequence of the current state.
    pub fn size_sequence(&self) -> Vec<usize> {
        self.facet_neighbors.iter().map(Multiset::len).collect()
    }

    /// Returns the degree sequence of the current state.
    pub fn degree_sequence(&self) -> Vec<usize> {
        self.vertex_neighbors.iter().map(Multiset::len).collect()
    }

    /// Returns every facet as a plain vertex set.
    pub fn facet_sets(&self) -> Vec<FacetSet> {
        self.facet_neighbors
            .iter()
            .map(|neighborhood| neighborhood.iter().copied().collect())
            .collect()
    }

    pub(crate) fn vertex_adjacencies(&self) -> &[Multiset<FacetId>] {
        &self.vertex_neighbors
    }
}

fn complex_error(code: impl Into<String>, message: impl Into<String>) -> ScmError {
    ScmError::Complex(ErrorInfo::new(code, message))
}

fn input_error(code: impl Into<String>, message: impl Into<String>) -> ScmError {
    ScmError::Input(ErrorInfo::new(code, message))
}

trait ContextExt {
    fn with_context(self, key: impl Into<String>, value: impl ToString) -> ScmError;
}

impl ContextExt for ScmError {
    fn with_context(self, key: impl Into<String>, value: impl ToString) -> ScmError {
        match self {
            ScmError::Complex(info) => ScmError::Complex(info.with_context(key, value.to_string())),
            ScmError::Input(info) => ScmError::Input(info.with_context(key, value.to_string())),
            other => other,
        }
    }
}
