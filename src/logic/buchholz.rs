//! Buchholz tiebreak.
//!
//! Byes are not opponents: a round sat out adds nothing to the factor.

use crate::error::{Result, TournamentError};
use crate::models::{RankId, Tournament};

/// Sum of the current scores of every opponent faced in a decided matchup.
///
/// Always computed from live scores, since opponents keep scoring after
/// the game is over.
pub fn buchholz(tournament: &Tournament, rank: RankId) -> Result<f64> {
    if tournament.rank(rank).is_none() {
        return Err(TournamentError::RankNotFound(rank));
    }
    Ok(tournament
        .matchups_of(rank)
        .filter(|m| m.is_decided())
        .filter_map(|m| m.opponent_of(rank))
        .filter_map(|opponent| tournament.rank(opponent))
        .fold(0.0, |total, opponent| total + opponent.score))
}
