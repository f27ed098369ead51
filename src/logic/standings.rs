//! Tournament standings: score, then Buchholz, then seed.

use crate::error::Result;
use crate::logic::buchholz::buchholz;
use crate::models::{RankId, Tournament};
use serde::Serialize;

/// One line of the standings table.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Standing {
    /// 1-based position.
    pub place: usize,
    pub rank: RankId,
    pub name: String,
    pub seed: u32,
    pub score: f64,
    pub buchholz: f64,
    pub starting_rating: f64,
    pub final_rating: Option<f64>,
    /// Within the first `number_of_winners` places.
    pub is_winner: bool,
}

/// Ranks ordered by score (desc), Buchholz (desc), seed (asc).
///
/// Buchholz is recomputed from live scores until the tournament is finished;
/// after that the stored final value is used.
pub fn standings(tournament: &Tournament) -> Result<Vec<Standing>> {
    let mut rows = Vec::with_capacity(tournament.ranks.len());
    for rank in &tournament.ranks {
        let tiebreak = if tournament.is_finished {
            rank.buchholz
        } else {
            buchholz(tournament, rank.id)?
        };
        rows.push(Standing {
            place: 0,
            rank: rank.id,
            name: rank.name().to_string(),
            seed: rank.seed,
            score: rank.score,
            buchholz: tiebreak,
            starting_rating: rank.starting_rating,
            final_rating: rank.final_rating,
            is_winner: false,
        });
    }

    rows.sort_by(|a, b| {
        b.score
            .total_cmp(&a.score)
            .then(b.buchholz.total_cmp(&a.buchholz))
            .then(a.seed.cmp(&b.seed))
    });
    let winners = tournament.number_of_winners as usize;
    for (i, row) in rows.iter_mut().enumerate() {
        row.place = i + 1;
        row.is_winner = i < winners;
    }
    Ok(rows)
}
