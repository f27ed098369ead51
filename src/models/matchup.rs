//! Matchup (a single game between two ranks) and its outcome.

use crate::error::TournamentError;
use crate::models::competitor::RankId;
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use uuid::Uuid;

/// Unique identifier for a matchup.
pub type MatchupId = Uuid;

/// Points for winning a game.
pub const SCORE_FOR_WIN: f64 = 1.0;
/// Points for each side of a drawn game.
pub const SCORE_FOR_DRAW: f64 = 0.5;
/// Points for sitting a round out (bye).
pub const SCORE_FOR_NONPLAY: f64 = 0.5;

/// Reported result of a matchup.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Outcome {
    FirstWins,
    SecondWins,
    Draw,
}

impl Outcome {
    /// Points awarded to (first, second).
    pub fn scores(self) -> (f64, f64) {
        match self {
            Outcome::FirstWins => (SCORE_FOR_WIN, 0.0),
            Outcome::SecondWins => (0.0, SCORE_FOR_WIN),
            Outcome::Draw => (SCORE_FOR_DRAW, SCORE_FOR_DRAW),
        }
    }
}

impl FromStr for Outcome {
    type Err = TournamentError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "first" | "first_wins" | "first-wins" => Ok(Outcome::FirstWins),
            "second" | "second_wins" | "second-wins" => Ok(Outcome::SecondWins),
            "draw" => Ok(Outcome::Draw),
            _ => Err(TournamentError::InvalidOutcome(s.to_string())),
        }
    }
}

/// A pairing inside a score group. `first`/`second` are fixed slot roles.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Matchup {
    pub id: MatchupId,
    pub first: RankId,
    pub second: RankId,
    pub first_score: f64,
    pub second_score: f64,
}

impl Matchup {
    pub fn new(first: RankId, second: RankId) -> Self {
        Self {
            id: Uuid::new_v4(),
            first,
            second,
            first_score: 0.0,
            second_score: 0.0,
        }
    }

    /// Recorded outcome, derived from the two score fields. None while (0, 0).
    pub fn outcome(&self) -> Option<Outcome> {
        if self.first_score == SCORE_FOR_WIN {
            Some(Outcome::FirstWins)
        } else if self.second_score == SCORE_FOR_WIN {
            Some(Outcome::SecondWins)
        } else if self.first_score == SCORE_FOR_DRAW && self.second_score == SCORE_FOR_DRAW {
            Some(Outcome::Draw)
        } else {
            None
        }
    }

    pub fn is_decided(&self) -> bool {
        self.outcome().is_some()
    }

    /// Human readable result label.
    pub fn winner(&self) -> &'static str {
        match self.outcome() {
            Some(Outcome::FirstWins) => "first",
            Some(Outcome::SecondWins) => "second",
            Some(Outcome::Draw) => "draw",
            None => "not played",
        }
    }

    pub fn involves(&self, rank: RankId) -> bool {
        self.first == rank || self.second == rank
    }

    /// The other side of the matchup, if `rank` took part.
    pub fn opponent_of(&self, rank: RankId) -> Option<RankId> {
        if self.first == rank {
            Some(self.second)
        } else if self.second == rank {
            Some(self.first)
        } else {
            None
        }
    }

    /// Points `rank` earned in this matchup (0 if undecided or not involved).
    pub fn score_of(&self, rank: RankId) -> f64 {
        if self.first == rank {
            self.first_score
        } else if self.second == rank {
            self.second_score
        } else {
            0.0
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_outcome_tags() {
        assert_eq!("first".parse::<Outcome>().unwrap(), Outcome::FirstWins);
        assert_eq!("Second_Wins".parse::<Outcome>().unwrap(), Outcome::SecondWins);
        assert_eq!("draw".parse::<Outcome>().unwrap(), Outcome::Draw);
        assert!(matches!(
            "black".parse::<Outcome>(),
            Err(TournamentError::InvalidOutcome(tag)) if tag == "black"
        ));
    }

    #[test]
    fn outcome_scores_sum_to_one() {
        for outcome in [Outcome::FirstWins, Outcome::SecondWins, Outcome::Draw] {
            let (a, b) = outcome.scores();
            assert_eq!(a + b, 1.0);
        }
    }

    #[test]
    fn new_matchup_is_undecided() {
        let m = Matchup::new(Uuid::new_v4(), Uuid::new_v4());
        assert!(!m.is_decided());
        assert_eq!(m.winner(), "not played");
    }

    #[test]
    fn opponent_lookup() {
        let (a, b) = (Uuid::new_v4(), Uuid::new_v4());
        let m = Matchup::new(a, b);
        assert_eq!(m.opponent_of(a), Some(b));
        assert_eq!(m.opponent_of(b), Some(a));
        assert_eq!(m.opponent_of(Uuid::new_v4()), None);
    }

    #[test]
    fn score_of_follows_the_slot() {
        let (a, b) = (Uuid::new_v4(), Uuid::new_v4());
        let mut m = Matchup::new(a, b);
        (m.first_score, m.second_score) = Outcome::SecondWins.scores();
        assert_eq!(m.score_of(a), 0.0);
        assert_eq!(m.score_of(b), SCORE_FOR_WIN);
        assert_eq!(m.score_of(Uuid::new_v4()), 0.0);
    }
}
