//! Tournament aggregate: ranks and rounds.

use crate::error::{Result, TournamentError};
use crate::models::competitor::{Competitor, RankId, TournamentRank};
use crate::models::matchup::{Matchup, MatchupId};
use crate::models::round::Round;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use uuid::Uuid;

/// Unique identifier for a tournament.
pub type TournamentId = Uuid;

/// Full tournament state: ranks (one per competitor), rounds played so far and config.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Tournament {
    pub id: TournamentId,
    pub number_of_winners: u32,
    /// Fixed at creation, see [`Tournament::rounds_for`].
    pub number_of_rounds: u32,
    /// Goes false -> true exactly once, when ratings are finalized.
    pub is_finished: bool,
    /// Ranks in seed order.
    pub ranks: Vec<TournamentRank>,
    /// Rounds in number order (round `n` at index `n - 1`).
    pub rounds: Vec<Round>,
    pub created_at: DateTime<Utc>,
    pub finished_at: Option<DateTime<Utc>>,
}

impl Tournament {
    /// Create a tournament from a roster. Seeds are assigned by descending rating.
    pub fn new(roster: Vec<Competitor>, number_of_winners: u32) -> Result<Self> {
        if roster.len() < 2 {
            return Err(TournamentError::NotEnoughCompetitors(roster.len()));
        }
        if number_of_winners == 0 {
            return Err(TournamentError::InvalidNumberOfWinners);
        }
        let mut seen = HashSet::new();
        for c in &roster {
            if !seen.insert(c.id) {
                return Err(TournamentError::DuplicateCompetitor(c.id));
            }
        }

        let mut roster = roster;
        roster.sort_by(|a, b| b.rating.total_cmp(&a.rating));
        let ranks = roster
            .into_iter()
            .enumerate()
            .map(|(i, c)| TournamentRank::new(c, i as u32 + 1))
            .collect::<Vec<_>>();

        Ok(Self {
            id: Uuid::new_v4(),
            number_of_winners,
            number_of_rounds: Self::rounds_for(ranks.len(), number_of_winners),
            is_finished: false,
            ranks,
            rounds: Vec::new(),
            created_at: Utc::now(),
            finished_at: None,
        })
    }

    /// Rounds needed: `round(log2(competitors)) + round(log2(winners))`.
    ///
    /// Rounds to nearest rather than up, so e.g. 5 competitors play only 2 rounds.
    pub fn rounds_for(competitors: usize, number_of_winners: u32) -> u32 {
        let log = |n: f64| if n <= 1.0 { 0.0 } else { n.log2().round() };
        (log(competitors as f64) + log(number_of_winners as f64)) as u32
    }

    pub fn rank(&self, id: RankId) -> Option<&TournamentRank> {
        self.ranks.iter().find(|r| r.id == id)
    }

    pub fn rank_mut(&mut self, id: RankId) -> Option<&mut TournamentRank> {
        self.ranks.iter_mut().find(|r| r.id == id)
    }

    /// Latest round, if any round has started.
    pub fn current_round(&self) -> Option<&Round> {
        self.rounds.last()
    }

    pub fn round_by_number(&self, number: u32) -> Option<&Round> {
        self.rounds.iter().find(|r| r.number == number)
    }

    /// The round following `round`, if it has been started.
    pub fn next_round(&self, round: &Round) -> Option<&Round> {
        self.round_by_number(round.number + 1)
    }

    pub fn is_last_round(&self, round: &Round) -> bool {
        round.number == self.number_of_rounds
    }

    /// Index of the round holding the matchup.
    pub fn round_index_of_matchup(&self, id: MatchupId) -> Option<usize> {
        self.rounds.iter().position(|r| r.matchup(id).is_some())
    }

    pub fn matchup(&self, id: MatchupId) -> Option<&Matchup> {
        self.rounds.iter().find_map(|r| r.matchup(id))
    }

    /// Every matchup (all rounds) the rank took part in, decided or not.
    pub fn matchups_of(&self, rank: RankId) -> impl Iterator<Item = &Matchup> {
        self.rounds
            .iter()
            .flat_map(|r| r.matchups())
            .filter(move |m| m.involves(rank))
    }

    /// Sum of all cumulative scores.
    pub fn total_score(&self) -> f64 {
        self.ranks.iter().map(|r| r.score).sum()
    }
}
