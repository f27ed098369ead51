//! Intra-group pairing: top half against bottom half.

use crate::logic::score_groups::Member;
use crate::models::Matchup;

/// Pair an evenified group: member `i` of the upper half takes the first
/// slot against member `i` of the lower half.
///
/// # Panics
/// If the group has an odd number of members. Evenify never produces one.
pub fn pair_group(members: &[Member]) -> Vec<Matchup> {
    assert!(
        members.len() % 2 == 0,
        "score group with {} members reached pairing",
        members.len()
    );
    let (upper, lower) = members.split_at(members.len() / 2);
    upper
        .iter()
        .zip(lower)
        .map(|(first, second)| Matchup::new(first.rank, second.rank))
        .collect()
}
