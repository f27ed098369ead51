//! Round, ScoreGroup and Lot.

use crate::models::competitor::RankId;
use crate::models::matchup::{Matchup, MatchupId};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

pub type RoundId = Uuid;
pub type ScoreGroupId = Uuid;

/// Progress of a stored round.
///
/// A round is only stored once its matchups exist, so it is never seen
/// before `InProgress`.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RoundStatus {
    /// At least one matchup has no result yet.
    InProgress,
    /// Every matchup has a result.
    Complete,
}

/// Membership of a rank in a score group.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct Lot {
    pub rank: RankId,
    /// Moved up into this group from the group below during evenify.
    pub is_shifted: bool,
}

/// Ranks that entered the round with the same score, plus their pairings.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ScoreGroup {
    pub id: ScoreGroupId,
    pub score_value: f64,
    /// Members in pairing order.
    pub lots: Vec<Lot>,
    pub matchups: Vec<Matchup>,
}

/// One round of the tournament.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Round {
    pub id: RoundId,
    /// 1-based, immutable.
    pub number: u32,
    pub started_at: DateTime<Utc>,
    /// Groups in ascending score order.
    pub groups: Vec<ScoreGroup>,
    /// Rank granted a bye this round.
    pub nonplayer: Option<RankId>,
}

impl Round {
    pub fn matchups(&self) -> impl Iterator<Item = &Matchup> {
        self.groups.iter().flat_map(|g| g.matchups.iter())
    }

    pub fn matchup(&self, id: MatchupId) -> Option<&Matchup> {
        self.matchups().find(|m| m.id == id)
    }

    pub fn matchup_mut(&mut self, id: MatchupId) -> Option<&mut Matchup> {
        self.groups
            .iter_mut()
            .flat_map(|g| g.matchups.iter_mut())
            .find(|m| m.id == id)
    }

    pub fn status(&self) -> RoundStatus {
        if self.is_finished() {
            RoundStatus::Complete
        } else {
            RoundStatus::InProgress
        }
    }

    /// True once every matchup has a recorded outcome.
    pub fn is_finished(&self) -> bool {
        self.matchups().all(Matchup::is_decided)
    }

    /// Every rank placed in a matchup this round, in group order.
    pub fn paired_ranks(&self) -> Vec<RankId> {
        self.matchups().flat_map(|m| [m.first, m.second]).collect()
    }
}
