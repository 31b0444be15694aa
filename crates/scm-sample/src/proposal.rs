//! Proposal-length distribution for the MCMC kernel.

use rand::distributions::{Distribution, WeightedIndex};
use serde::{Deserialize, Serialize};

use scm_core::errors::{ErrorInfo, ScmError};
use scm_core::rng::RngHandle;

/// Shape of the proposal-length distribution over `[2, L_max]`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "kebab-case")]
pub enum ProposalKind {
    /// Every legal length is equally likely.
    Uniform,
    /// Weight `exp(alpha * l)`, favoring long rewirings for positive alpha.
    Exponential {
        /// Rate parameter of the exponential weights.
        alpha: f64,
    },
    /// Weight `l^(-alpha)`, favoring short rewirings for positive alpha.
    PowerLaw {
        /// Exponent of the power-law weights.
        alpha: f64,
    },
}

impl ProposalKind {
    fn weight(&self, l: usize) -> f64 {
        match self {
            ProposalKind::Uniform => 1.0,
            ProposalKind::Exponential { alpha } => (alpha * l as f64).exp(),
            ProposalKind::PowerLaw { alpha } => (l as f64).powf(-alpha),
        }
    }
}

/// Discrete distribution over proposal lengths.
///
/// Lengths below two carry zero weight: a single-edge rewiring can only
/// reattach the edge it detached.
#[derive(Debug, Clone)]
pub struct ProposalLengths {
    index: WeightedIndex<f64>,
    l_max: usize,
}

impl ProposalLengths {
    /// Builds the distribution for lengths `l` in `[2, l_max]`.
    pub fn new(kind: ProposalKind, l_max: usize) -> Result<Self, ScmError> {
        if l_max < 2 {
            return Err(ScmError::Rng(
                ErrorInfo::new("l-max-too-small", "proposal lengths start at two edges")
                    .with_context("l_max", l_max.to_string()),
            ));
        }
        let mut weights = vec![0.0; l_max + 1];
        for (l, weight) in weights.iter_mut().enumerate().skip(2) {
            *weight = kind.weight(l);
        }
        let index = WeightedIndex::new(&weights).map_err(|err| {
            ScmError::Rng(
                ErrorInfo::new("degenerate-weights", err.to_string())
                    .with_context("l_max", l_max.to_string())
                    .with_hint("check the proposal parameter for overflow"),
            )
        })?;
        Ok(Self { index, l_max })
    }

    /// Returns the largest drawable length.
    pub fn l_max(&self) -> usize {
        self.l_max
    }

    /// Draws a proposal length.
    pub fn draw(&self, rng: &mut RngHandle) -> usize {
        self.index.sample(rng)
    }
}

/// Default largest proposal length: `min(max(M / 10, 2 * s_max), M)`.
///
/// The `2 * s_max` floor keeps the chain connected; the `M` cap keeps the
/// distinct-edge draw feasible.
pub fn default_l_max(num_edges: usize, largest_facet: usize) -> usize {
    (num_edges / 10).max(2 * largest_facet).min(num_edges)
}
