//! MCMC driver: burn-in, sampling cadence, and acceptance bookkeeping.

use serde::{Deserialize, Serialize};

use scm_complex::Complex;
use scm_core::errors::{ErrorInfo, ScmError};
use scm_core::rng::RngHandle;

use crate::proposal::ProposalLengths;

/// Driver parameters for one MCMC sampling run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct McmcConfig {
    /// Accepted proposals to discard before sampling starts.
    pub burn_in: usize,
    /// Number of samples to emit.
    pub sampling_steps: usize,
    /// Attempted proposals between consecutive samples.
    pub sampling_frequency: usize,
}

impl McmcConfig {
    /// Validates that the sampling cadence is usable.
    pub fn validate(&self) -> Result<(), ScmError> {
        if self.sampling_frequency == 0 {
            return Err(ScmError::Sample(ErrorInfo::new(
                "zero-frequency",
                "sampling frequency must be at least one attempt per sample",
            )));
        }
        Ok(())
    }
}

/// Progress record of the burn-in phase.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BurnInReport {
    /// Accepted proposals; the phase target counts these.
    pub accepted: usize,
    /// Total proposals attempted along the way.
    pub attempts: usize,
}

/// Outcome of the sampling phase.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SamplingReport {
    /// Proposals attempted during sampling.
    pub attempts: usize,
    /// Proposals that landed on a simplicial complex and were committed.
    pub accepted: usize,
    /// Samples handed to the emission hook.
    pub samples: usize,
}

impl SamplingReport {
    /// Accepted over attempted proposals during the sampling phase.
    pub fn acceptance_ratio(&self) -> f64 {
        if self.attempts == 0 {
            0.0
        } else {
            self.accepted as f64 / self.attempts as f64
        }
    }
}

/// Runs burn-in until `target` proposals have been accepted.
pub fn burn_in(
    complex: &mut Complex,
    lengths: &ProposalLengths,
    target: usize,
    rng: &mut RngHandle,
) -> BurnInReport {
    let mut report = BurnInReport::default();
    while report.accepted < target {
        let l = lengths.draw(rng);
        let moves = complex.random_rewire(l, rng);
        report.attempts += 1;
        if complex.do_moves(&moves) {
            report.accepted += 1;
        }
    }
    report
}

/// Runs the sampling phase, handing the current complex to `emit` every
/// `sampling_frequency` attempts regardless of acceptance.
///
/// Consecutive samples may be identical when the rejection rate is high; the
/// cadence is attempt-driven so the chain's wall-clock per sample stays
/// predictable.
pub fn sample<F>(
    complex: &mut Complex,
    lengths: &ProposalLengths,
    config: &McmcConfig,
    rng: &mut RngHandle,
    mut emit: F,
) -> Result<SamplingReport, ScmError>
where
    F: FnMut(&Complex) -> Result<(), ScmError>,
{
    config.validate()?;
    let mut report = SamplingReport::default();
    let total = config.sampling_steps * config.sampling_frequency;
    for attempt in 1..=total {
        let l = lengths.draw(rng);
        let moves = complex.random_rewire(l, rng);
        report.attempts += 1;
        if complex.do_moves(&moves) {
            report.accepted += 1;
        }
        if attempt % config.sampling_frequency == 0 {
            emit(complex)?;
            report.samples += 1;
        }
    }
    Ok(report)
}

/// Default burn-in and sampling cadence, `ceil(M ln M)` clamped to at least
/// one attempt.
pub fn default_cadence(num_edges: usize) -> usize {
    let m = num_edges as f64;
    (m * m.ln()).ceil().max(1.0) as usize
}
