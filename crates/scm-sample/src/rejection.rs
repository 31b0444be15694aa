//! Rejection kernel: reshuffle the matching until it lands in the ensemble.

use scm_complex::Complex;
use scm_core::rng::RngHandle;

/// Shuffles the matching until the state is a simplicial complex, returning
/// the number of shuffles it took.
///
/// Each shuffle draws a uniform matching over the fixed stub lists, so the
/// accepted state is uniform over the ensemble. `on_attempt` observes the
/// running attempt count; verbose callers surface it as progress. There is
/// no internal bound: on pathological inputs this runs until the host kills
/// the process.
pub fn randomize<F>(complex: &mut Complex, rng: &mut RngHandle, mut on_attempt: F) -> usize
where
    F: FnMut(usize),
{
    let mut attempts = 0;
    loop {
        complex.shuffle(rng);
        attempts += 1;
        on_attempt(attempts);
        if complex.is_simplicial_complex() {
            return attempts;
        }
    }
}
