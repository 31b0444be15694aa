#![deny(missing_docs)]

//! Sample-space engine for the simplicial configuration model.
//!
//! A complex is stored as two aligned adjacency multisets, one keyed by facet
//! and one by vertex. The crate provides the membership predicate for the
//! ensemble (no repeated vertex within a facet, no facet included in another),
//! the stub-proportional random selectors, the `l`-edge rewiring proposal used
//! by the MCMC kernel, and the matching shuffle used by the rejection kernel.

mod complex;
mod ids;
mod multiset;
mod predicate;
mod rewire;
mod sanitize;
mod select;

pub use complex::{Complex, FacetSet};
pub use multiset::Multiset;
pub use rewire::McmcMove;
pub use sanitize::{sanitize_facets, LabelMap, SanitizedFacets};
pub use select::{preferential_pick, uniform_pick};
