//! Competitor and TournamentRank data structures.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique identifier for a competitor (used across tournaments).
pub type CompetitorId = Uuid;

/// Unique identifier for a competitor's entry in one tournament.
pub type RankId = Uuid;

/// A competitor with a base (Elo) rating.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Competitor {
    pub id: CompetitorId,
    pub name: String,
    pub rating: f64,
}

impl Competitor {
    /// Create a new competitor with the given name and rating.
    pub fn new(name: impl Into<String>, rating: f64) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            rating,
        }
    }
}

/// One competitor's standing inside a single tournament.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TournamentRank {
    pub id: RankId,
    pub competitor: Competitor,
    /// 1-based seed, assigned at creation by descending rating.
    pub seed: u32,
    /// Cumulative score. Never decreases.
    pub score: f64,
    /// Rating snapshot taken when the tournament was created.
    pub starting_rating: f64,
    /// Set once, when the tournament is finalized.
    pub final_rating: Option<f64>,
    /// Last stored Buchholz factor. Live values come from `logic::buchholz`.
    pub buchholz: f64,
}

impl TournamentRank {
    pub fn new(competitor: Competitor, seed: u32) -> Self {
        let starting_rating = competitor.rating;
        Self {
            id: Uuid::new_v4(),
            competitor,
            seed,
            score: 0.0,
            starting_rating,
            final_rating: None,
            buchholz: 0.0,
        }
    }

    pub fn name(&self) -> &str {
        &self.competitor.name
    }

    /// Add points to the cumulative score.
    pub fn add_score(&mut self, points: f64) {
        debug_assert!(points >= 0.0, "scores never decrease");
        self.score += points;
    }
}
