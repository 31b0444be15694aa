#![deny(missing_docs)]

//! Sampling drivers for the simplicial configuration model.
//!
//! The MCMC driver walks the ensemble with sequence-preserving rewirings,
//! counting accepted proposals toward burn-in and attempted proposals toward
//! the sampling cadence. The rejection driver reshuffles the whole matching
//! until it lands on a simplicial complex.

mod mcmc;
mod proposal;
mod rejection;

pub use mcmc::{burn_in, default_cadence, sample, BurnInReport, McmcConfig, SamplingReport};
pub use proposal::{default_l_max, ProposalKind, ProposalLengths};
pub use rejection::randomize;
