//! Random selectors over adjacency multisets.
//!
//! The two selectors together implement stub-pair sampling: choosing a vertex
//! with probability proportional to its degree and then one of its incident
//! facets uniformly draws every incidence edge with the same probability.

use rand::Rng;

use scm_core::rng::RngHandle;

use crate::multiset::Multiset;

/// Picks an index with probability proportional to its neighborhood size.
///
/// Conceptually `tickets` stubs are laid out contiguously, one block per
/// neighborhood; a uniform ticket in `[1, tickets]` selects the block owner.
/// `tickets` must equal the summed neighborhood sizes and be positive.
pub fn preferential_pick<T: Copy + Ord>(
    neighborhoods: &[Multiset<T>],
    tickets: usize,
    rng: &mut RngHandle,
) -> usize {
    debug_assert!(tickets > 0, "preferential pick over an empty stub list");
    let target = rng.gen_range(1..=tickets);
    let mut covered = 0;
    for (index, neighborhood) in neighborhoods.iter().enumerate() {
        covered += neighborhood.len();
        if covered >= target {
            return index;
        }
    }
    unreachable!("stub count {tickets} does not cover the drawn ticket")
}

/// Picks one occurrence uniformly from a non-empty multiset.
///
/// Each occurrence is a distinct ticket, so repeated keys are proportionally
/// more likely.
pub fn uniform_pick<T: Copy + Ord>(neighborhood: &Multiset<T>, rng: &mut RngHandle) -> T {
    debug_assert!(!neighborhood.is_empty(), "uniform pick from an empty multiset");
    let idx = rng.gen_range(0..neighborhood.len());
    neighborhood.nth(idx)
}
