//! Errors returned by tournament operations.

use crate::models::{CompetitorId, MatchupId, RankId, TournamentId};
use thiserror::Error;

/// Convenience alias for engine results.
pub type Result<T> = std::result::Result<T, TournamentError>;

/// Errors that can occur during tournament operations.
///
/// Broken internal invariants (odd score group reaching pairing, a rank
/// paired twice in one round) are not represented here: they panic.
#[derive(Clone, Debug, Eq, PartialEq, Error)]
pub enum TournamentError {
    /// The tournament is not in a state that allows this action yet.
    #[error("premature operation: {0}")]
    PrematureOperation(&'static str),
    /// The tournament has already been finalized.
    #[error("tournament is already finished")]
    TournamentFinished,
    #[error("tournament {0} not found")]
    TournamentNotFound(TournamentId),
    #[error("matchup {0} not found")]
    MatchupNotFound(MatchupId),
    #[error("tournament rank {0} not found")]
    RankNotFound(RankId),
    /// Outcome tag is not one of first / second / draw.
    #[error("invalid outcome: {0:?}")]
    InvalidOutcome(String),
    /// A different outcome was already recorded for this matchup.
    #[error("matchup {0} already has a result")]
    AlreadyDecided(MatchupId),
    #[error("need at least 2 competitors (got {0})")]
    NotEnoughCompetitors(usize),
    #[error("number of winners must be at least 1")]
    InvalidNumberOfWinners,
    /// The same competitor appears twice in a roster.
    #[error("competitor {0} is listed more than once")]
    DuplicateCompetitor(CompetitorId),
    /// A tournament with this id is already stored.
    #[error("tournament {0} already exists")]
    AlreadyExists(TournamentId),
}

impl TournamentError {
    /// True for the unknown-identifier family of errors.
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            TournamentError::TournamentNotFound(_)
                | TournamentError::MatchupNotFound(_)
                | TournamentError::RankNotFound(_)
        )
    }

    /// True when the request conflicts with the current tournament state.
    pub fn is_conflict(&self) -> bool {
        matches!(
            self,
            TournamentError::PrematureOperation(_)
                | TournamentError::TournamentFinished
                | TournamentError::AlreadyDecided(_)
                | TournamentError::AlreadyExists(_)
        )
    }
}
