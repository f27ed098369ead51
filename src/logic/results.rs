//! Recording matchup results.

use crate::error::{Result, TournamentError};
use crate::logic::rounds::{can_start_next_round, is_all_games_played};
use crate::models::{Matchup, MatchupId, Outcome, Tournament};
use serde::Serialize;

/// What changed after a result was recorded, and what the caller may do next.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ResultReport {
    pub matchup: Matchup,
    pub outcome: Outcome,
    pub round_number: u32,
    /// False when the same outcome had already been recorded.
    pub applied: bool,
    pub round_finished: bool,
    pub can_start_next_round: bool,
    pub is_all_games_played: bool,
}

/// Decide a matchup once: set both score fields and credit both ranks.
///
/// Recording the outcome a matchup already has is a no-op. Recording a
/// different one fails with [`TournamentError::AlreadyDecided`] and leaves
/// every score untouched.
pub fn record_result(
    tournament: &mut Tournament,
    matchup_id: MatchupId,
    outcome: Outcome,
) -> Result<ResultReport> {
    let round_idx = tournament
        .round_index_of_matchup(matchup_id)
        .ok_or(TournamentError::MatchupNotFound(matchup_id))?;
    let matchup = tournament.rounds[round_idx]
        .matchup(matchup_id)
        .ok_or(TournamentError::MatchupNotFound(matchup_id))?
        .clone();

    let applied = match matchup.outcome() {
        Some(previous) if previous == outcome => false,
        Some(_) => return Err(TournamentError::AlreadyDecided(matchup_id)),
        None => {
            for id in [matchup.first, matchup.second] {
                if tournament.rank(id).is_none() {
                    return Err(TournamentError::RankNotFound(id));
                }
            }
            apply_outcome(tournament, round_idx, &matchup, outcome);
            true
        }
    };

    let round = &tournament.rounds[round_idx];
    let report = ResultReport {
        matchup: round
            .matchup(matchup_id)
            .cloned()
            .unwrap_or(matchup),
        outcome,
        round_number: round.number,
        applied,
        round_finished: round.is_finished(),
        can_start_next_round: can_start_next_round(tournament),
        is_all_games_played: is_all_games_played(tournament),
    };
    Ok(report)
}

fn apply_outcome(
    tournament: &mut Tournament,
    round_idx: usize,
    matchup: &Matchup,
    outcome: Outcome,
) {
    let (first_points, second_points) = outcome.scores();
    let recorded = match tournament.rounds[round_idx].matchup_mut(matchup.id) {
        Some(m) => {
            m.first_score = first_points;
            m.second_score = second_points;
            m.clone()
        }
        None => return,
    };
    for id in [recorded.first, recorded.second] {
        if let Some(rank) = tournament.rank_mut(id) {
            rank.add_score(recorded.score_of(id));
        }
    }
    log::debug!("matchup {}: {:?} recorded", matchup.id, outcome);
}
