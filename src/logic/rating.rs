//! End-of-tournament rating recalculation (Elo expected-value model).

use crate::error::{Result, TournamentError};
use crate::logic::buchholz::buchholz;
use crate::logic::rounds::is_all_games_played;
use crate::models::{RankId, Tournament};
use chrono::Utc;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Below this value K is [`K_FACTOR_HIGH`].
///
/// Compared against the tournament *score*, not the rating. Every realistic
/// score is far below it, so K is effectively always 32.
pub const K_FACTOR_SCORE_THRESHOLD_LOW: f64 = 2100.0;
/// Below this value (and not below the low threshold) K is [`K_FACTOR_MID`].
pub const K_FACTOR_SCORE_THRESHOLD_HIGH: f64 = 2400.0;

pub const K_FACTOR_HIGH: f64 = 32.0;
pub const K_FACTOR_MID: f64 = 24.0;
pub const K_FACTOR_LOW: f64 = 16.0;

/// Final numbers for one rank.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct FinalResult {
    pub final_rating: f64,
    pub buchholz: f64,
}

/// Expected score for a player rated `own` against one rated `opponent`.
///
/// Not symmetric in its arguments: `expected_score(a, b) + expected_score(b, a) == 1`.
pub fn expected_score(own: f64, opponent: f64) -> f64 {
    1.0 / (1.0 + 10.0_f64.powf((opponent - own) / 400.0))
}

/// K-factor tier for a cumulative tournament score.
pub fn k_factor(score: f64) -> f64 {
    if score < K_FACTOR_SCORE_THRESHOLD_LOW {
        K_FACTOR_HIGH
    } else if score < K_FACTOR_SCORE_THRESHOLD_HIGH {
        K_FACTOR_MID
    } else {
        K_FACTOR_LOW
    }
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// `round(starting + K * (score - sum of expected scores), 2)`.
pub fn final_rating(starting_rating: f64, score: f64, expected_total: f64) -> f64 {
    round2(starting_rating + k_factor(score) * (score - expected_total))
}

/// Compute final ratings and Buchholz factors, and close the tournament.
///
/// Allowed once, after the last configured round is complete.
pub fn finalize_tournament(tournament: &mut Tournament) -> Result<HashMap<RankId, FinalResult>> {
    if tournament.is_finished {
        return Err(TournamentError::TournamentFinished);
    }
    if !is_all_games_played(tournament) {
        return Err(TournamentError::PrematureOperation(
            "final round is not complete",
        ));
    }

    let mut results = HashMap::with_capacity(tournament.ranks.len());
    for rank in &tournament.ranks {
        let expected_total = tournament
            .matchups_of(rank.id)
            .filter(|m| m.is_decided())
            .filter_map(|m| m.opponent_of(rank.id))
            .filter_map(|opponent| tournament.rank(opponent))
            .fold(0.0, |total, opponent| {
                total + expected_score(rank.starting_rating, opponent.starting_rating)
            });
        results.insert(
            rank.id,
            FinalResult {
                final_rating: final_rating(rank.starting_rating, rank.score, expected_total),
                buchholz: buchholz(tournament, rank.id)?,
            },
        );
    }

    for rank in &mut tournament.ranks {
        if let Some(result) = results.get(&rank.id) {
            rank.final_rating = Some(result.final_rating);
            rank.buchholz = result.buchholz;
            rank.competitor.rating = result.final_rating;
        }
    }
    tournament.is_finished = true;
    tournament.finished_at = Some(Utc::now());
    log::info!(
        "tournament {}: final ratings computed for {} competitors",
        tournament.id,
        results.len()
    );

    Ok(results)
}
