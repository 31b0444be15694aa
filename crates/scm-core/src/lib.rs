#![deny(missing_docs)]

//! Core identifiers, error types, and deterministic randomness shared by the
//! SCM sampler crates.

use serde::{Deserialize, Serialize};

pub mod errors;
pub mod rng;

pub use errors::{ErrorInfo, ScmError};
pub use rng::{derive_substream_seed, RngHandle};

/// Identifier for a vertex of a simplicial complex.
///
/// Vertices are labeled with contiguous integers in `[0, N)` once the input
/// has been sanitized; the raw value doubles as an index into the adjacency
/// arrays of the incidence store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct VertexId(u64);

impl VertexId {
    /// Creates a new identifier from its raw integer representation.
    pub fn from_raw(raw: u64) -> Self {
        Self(raw)
    }

    /// Returns the raw integer representation of the identifier.
    pub fn as_raw(&self) -> u64 {
        self.0
    }
}

/// Identifier for a maximal facet of a simplicial complex.
///
/// Facet identity is positional: the identifier of a facet never changes
/// across rewiring moves, only its vertex set does.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct FacetId(u64);

impl FacetId {
    /// Creates a new identifier from its raw integer representation.
    pub fn from_raw(raw: u64) -> Self {
        Self(raw)
    }

    /// Returns the raw integer representation of the identifier.
    pub fn as_raw(&self) -> u64 {
        self.0
    }
}
