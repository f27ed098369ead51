//! Bye ("nonplayer") assignment.

use crate::models::{RankId, TournamentRank, SCORE_FOR_NONPLAY};
use std::collections::HashSet;

/// Ranks not placed in any matchup this round, in seed order.
///
/// # Panics
/// If a rank was paired twice.
pub fn unpaired_ranks(ranks: &[TournamentRank], paired: &[RankId]) -> Vec<RankId> {
    let mut placed = HashSet::with_capacity(paired.len());
    for id in paired {
        assert!(placed.insert(*id), "rank {id} paired twice in one round");
    }
    ranks
        .iter()
        .map(|r| r.id)
        .filter(|id| !placed.contains(id))
        .collect()
}

/// Grant the bye to the one rank left out of the matchups, if any.
///
/// # Panics
/// If more than one rank is left out; evenify guarantees at most one.
pub fn assign_bye(ranks: &mut [TournamentRank], paired: &[RankId]) -> Option<RankId> {
    let unpaired = unpaired_ranks(ranks, paired);
    assert!(
        unpaired.len() <= 1,
        "{} ranks left unpaired after evenify",
        unpaired.len()
    );
    let nonplayer = unpaired.first().copied()?;
    if let Some(rank) = ranks.iter_mut().find(|r| r.id == nonplayer) {
        rank.add_score(SCORE_FOR_NONPLAY);
        log::debug!("bye: {} receives {}", rank.name(), SCORE_FOR_NONPLAY);
    }
    Some(nonplayer)
}
