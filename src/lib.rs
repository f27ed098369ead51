//! Swiss-system tournament engine: library with models, pairing logic and storage glue.

pub mod config;
pub mod error;
pub mod fixtures;
pub mod logic;
pub mod models;
pub mod repository;
pub mod service;

pub use error::{Result, TournamentError};
pub use logic::{
    buchholz, can_finalize, can_start_next_round, finalize_tournament, is_all_games_played,
    record_result, standings, start_next_round, FinalResult, ResultReport, Standing,
};
pub use models::{
    Competitor, CompetitorId, Lot, Matchup, MatchupId, Outcome, RankId, Round, RoundId,
    RoundStatus, ScoreGroup, ScoreGroupId, Tournament, TournamentId, TournamentRank,
};
pub use repository::{InMemoryRepository, TournamentRepository};
pub use service::TournamentService;
