//! Data structures for a Swiss tournament: competitors, ranks, rounds, matchups.

mod competitor;
mod matchup;
mod round;
mod tournament;

pub use competitor::{Competitor, CompetitorId, RankId, TournamentRank};
pub use matchup::{
    Matchup, MatchupId, Outcome, SCORE_FOR_DRAW, SCORE_FOR_NONPLAY, SCORE_FOR_WIN,
};
pub use round::{Lot, Round, RoundId, RoundStatus, ScoreGroup, ScoreGroupId};
pub use tournament::{Tournament, TournamentId};
