//! Rewiring proposals, their commit protocol, and the matching shuffle.

use std::collections::BTreeSet;

use rand::seq::SliceRandom;

use scm_core::rng::RngHandle;
use scm_core::{FacetId, VertexId};

use crate::complex::Complex;
use crate::ids::make_vertex;
use crate::select::{preferential_pick, uniform_pick};

/// A single attach or detach of one incidence edge.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct McmcMove {
    /// Vertex side of the edge.
    pub vertex: VertexId,
    /// Facet side of the edge.
    pub facet: FacetId,
    /// `true` to connect the edge, `false` to disconnect it.
    pub attach: bool,
}

impl Complex {
    /// Proposes an `l`-edge rewiring that preserves both sequences.
    ///
    /// Draws `l` distinct edges by stub-pair sampling, then permutes the
    /// facet slots uniformly while keeping the vertex slots fixed. The
    /// returned proposal detaches the drawn edges and attaches the permuted
    /// ones; every vertex loses and gains one incidence and every facet
    /// keeps its slot count, so only the simplicial invariant can break.
    ///
    /// Requires `l <= M`, otherwise `l` distinct edges do not exist.
    pub fn random_rewire(&self, l: usize, rng: &mut RngHandle) -> Vec<McmcMove> {
        let detach = self.random_edges(l, rng);
        let mut facets: Vec<FacetId> = detach.iter().map(|&(_, facet)| facet).collect();
        facets.shuffle(rng);
        let mut moves = Vec::with_capacity(2 * l);
        for &(vertex, facet) in &detach {
            moves.push(McmcMove {
                vertex,
                facet,
                attach: false,
            });
        }
        for (&(vertex, _), &facet) in detach.iter().zip(&facets) {
            moves.push(McmcMove {
                vertex,
                facet,
                attach: true,
            });
        }
        moves
    }

    // Resamples on collision; cheap while l stays well below the edge count.
    fn random_edges(&self, l: usize, rng: &mut RngHandle) -> Vec<(VertexId, FacetId)> {
        debug_assert!(l <= self.num_edges(), "cannot draw more distinct edges than exist");
        let mut edges = BTreeSet::new();
        while edges.len() < l {
            let vertex = make_vertex(preferential_pick(
                self.vertex_adjacencies(),
                self.num_edges(),
                rng,
            ));
            let facet = uniform_pick(self.vertex_neighbors(vertex), rng);
            edges.insert((vertex, facet));
        }
        edges.into_iter().collect()
    }

    /// Applies a proposal in order: detachments first, then attachments.
    pub fn apply_moves(&mut self, moves: &[McmcMove]) {
        for mv in moves {
            if mv.attach {
                self.connect(mv.facet, mv.vertex);
            } else {
                self.disconnect(mv.facet, mv.vertex);
            }
        }
    }

    /// Undoes a proposal, walking the moves in reverse with inverted
    /// semantics. Apply-then-revert restores the exact multiset state.
    pub fn revert_moves(&mut self, moves: &[McmcMove]) {
        for mv in moves.iter().rev() {
            if mv.attach {
                self.disconnect(mv.facet, mv.vertex);
            } else {
                self.connect(mv.facet, mv.vertex);
            }
        }
    }

    /// Applies a proposal and commits it only if the result stays in the
    /// ensemble. Returns `true` on commit, `false` after a full revert.
    ///
    /// Only facets touched by a move or sharing a moved vertex are
    /// re-checked: a violation introduced by the proposal must involve at
    /// least one modified edge.
    pub fn do_moves(&mut self, moves: &[McmcMove]) -> bool {
        self.apply_moves(moves);
        let mut facets_to_check: BTreeSet<FacetId> = BTreeSet::new();
        for mv in moves {
            facets_to_check.insert(mv.facet);
            for &facet in self.vertex_neighbors(mv.vertex) {
                facets_to_check.insert(facet);
            }
        }
        for &facet in &facets_to_check {
            let neighborhood = self.facet_neighbors(facet);
            // The multi-edge test is cheap; the inclusion intersection only
            // runs when it passes.
            if neighborhood.distinct_len() != neighborhood.len()
                || !self.inclusions_of(facet).is_empty()
            {
                self.revert_moves(moves);
                return false;
            }
        }
        true
    }

    /// Replaces the matching with a uniform one over the same stub lists.
    ///
    /// Extracts both stub lists, shuffles the vertex side, and reconnects
    /// pairwise. Both sequences are preserved exactly; membership in the
    /// ensemble is not, which is the rejection kernel's problem.
    pub fn shuffle(&mut self, rng: &mut RngHandle) {
        let mut facet_stubs = Vec::with_capacity(self.num_edges());
        for facet in self.facet_ids() {
            for _ in 0..self.size(facet) {
                facet_stubs.push(facet);
            }
        }
        let mut vertex_stubs = Vec::with_capacity(self.num_edges());
        for vertex in self.vertex_ids() {
            for _ in 0..self.degree(vertex) {
                vertex_stubs.push(vertex);
            }
        }
        self.disconnect_all();
        vertex_stubs.shuffle(rng);
        for (facet, vertex) in facet_stubs.into_iter().zip(vertex_stubs) {
            self.connect(facet, vertex);
        }
    }
}
