//! Inbound operations over a repository: create, start round, record result, finalize.
//!
//! Every mutating call runs under the tournament's lock and is committed as
//! one unit, so a failure anywhere leaves the stored tournament untouched.

use crate::error::Result;
use crate::logic::{self, FinalResult, ResultReport, Standing};
use crate::models::{Competitor, MatchupId, Outcome, RankId, Round, Tournament, TournamentId};
use crate::repository::{InMemoryRepository, TournamentRepository};
use std::collections::HashMap;

/// Tournament operations backed by a [`TournamentRepository`].
pub struct TournamentService<R = InMemoryRepository> {
    repo: R,
}

impl TournamentService<InMemoryRepository> {
    /// Service over a fresh in-memory repository.
    pub fn in_memory() -> Self {
        Self::new(InMemoryRepository::new())
    }
}

impl Default for TournamentService<InMemoryRepository> {
    fn default() -> Self {
        Self::in_memory()
    }
}

impl<R: TournamentRepository> TournamentService<R> {
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    pub fn repository(&self) -> &R {
        &self.repo
    }

    /// Create and store a tournament. No round is started.
    pub fn create_tournament(
        &self,
        roster: Vec<Competitor>,
        number_of_winners: u32,
    ) -> Result<Tournament> {
        let tournament = Tournament::new(roster, number_of_winners)?;
        self.repo.insert(tournament.clone())?;
        log::info!(
            "tournament {} created: {} competitors, {} rounds",
            tournament.id,
            tournament.ranks.len(),
            tournament.number_of_rounds
        );
        Ok(tournament)
    }

    pub fn tournament(&self, id: TournamentId) -> Result<Tournament> {
        self.repo.load(id)
    }

    pub fn start_next_round(&self, id: TournamentId) -> Result<Round> {
        self.repo
            .update(id, |t| logic::start_next_round(t).map(Round::clone))
    }

    /// Record a result given as an outcome tag (`first`, `second`, `draw`).
    pub fn record_result(&self, matchup: MatchupId, outcome: &str) -> Result<ResultReport> {
        let outcome: Outcome = outcome.parse()?;
        self.record_outcome(matchup, outcome)
    }

    pub fn record_outcome(&self, matchup: MatchupId, outcome: Outcome) -> Result<ResultReport> {
        let id = self.repo.locate_matchup(matchup)?;
        self.repo
            .update(id, |t| logic::record_result(t, matchup, outcome))
    }

    /// Compute final ratings and close the tournament.
    pub fn finalize(&self, id: TournamentId) -> Result<HashMap<RankId, FinalResult>> {
        self.repo.update(id, logic::finalize_tournament)
    }

    pub fn standings(&self, id: TournamentId) -> Result<Vec<Standing>> {
        let tournament = self.repo.load(id)?;
        logic::standings(&tournament)
    }
}
