//! Candidate route enumeration.
//!
//! A candidate departs from one required warehouse, visits a prefix of the
//! remaining warehouses, unloads at the hub, visits the suffix and unloads
//! again. Enumerating every start, ordering and split point covers both
//! single-trip and two-trip strategies.

use hubroute_core::CenterId;

use crate::Permutations;

/// Number of candidates for `required` warehouses: `k * (k - 1)! * k`.
///
/// Saturates at `u64::MAX`; zero warehouses give zero candidates.
///
/// # Examples
/// ```
/// use hubroute_search::candidate_count;
///
/// assert_eq!(candidate_count(1), 1);
/// assert_eq!(candidate_count(3), 18);
/// ```
#[must_use]
pub fn candidate_count(required: usize) -> u64 {
    let k = u64::try_from(required).unwrap_or(u64::MAX);
    (1..k).fold(k.saturating_mul(k), u64::saturating_mul)
}

/// Call `visit` with the stops of every candidate route.
///
/// Candidates are produced in a fixed order for a given `required` slice,
/// so reductions over them are reproducible. The stop buffer is reused
/// between calls.
pub fn for_each_candidate<F>(required: &[CenterId], hub: &CenterId, mut visit: F)
where
    F: FnMut(&[&CenterId]),
{
    let mut stops: Vec<&CenterId> = Vec::with_capacity(required.len() + 2);
    for (index, start) in required.iter().enumerate() {
        let others: Vec<&CenterId> = required
            .iter()
            .enumerate()
            .filter(|(other, _)| *other != index)
            .map(|(_, center)| center)
            .collect();
        let mut orderings = Permutations::new(others);
        while let Some(ordering) = orderings.next_permutation() {
            for split in 0..=ordering.len() {
                let Some((prefix, suffix)) = ordering.split_at_checked(split) else {
                    continue;
                };
                stops.clear();
                stops.push(start);
                stops.extend_from_slice(prefix);
                stops.push(hub);
                stops.extend_from_slice(suffix);
                stops.push(hub);
                visit(&stops);
            }
        }
    }
}

/// Owned stop lists of every candidate, in enumeration order.
#[must_use]
pub fn candidate_stops(required: &[CenterId], hub: &CenterId) -> Vec<Vec<CenterId>> {
    let mut all: Vec<Vec<CenterId>> = Vec::new();
    for_each_candidate(required, hub, |stops| {
        all.push(stops.iter().map(|stop| (*stop).clone()).collect());
    });
    all
}
