//! Round scheduling: build groups, pair them, hand out the bye.

use crate::error::{Result, TournamentError};
use crate::logic::bye::assign_bye;
use crate::logic::pairing::pair_group;
use crate::logic::score_groups::build_score_groups;
use crate::models::{Lot, Round, ScoreGroup, Tournament};
use chrono::Utc;
use std::time::Instant;
use uuid::Uuid;

/// True when the latest round is complete and more rounds are configured
/// (or no round has started yet).
pub fn can_start_next_round(tournament: &Tournament) -> bool {
    check_can_start(tournament).is_ok()
}

/// True when the final configured round is complete.
pub fn is_all_games_played(tournament: &Tournament) -> bool {
    match tournament.current_round() {
        Some(round) => round.number >= tournament.number_of_rounds && round.is_finished(),
        None => tournament.number_of_rounds == 0,
    }
}

/// True when ratings can be finalized: all games played and not finalized yet.
pub fn can_finalize(tournament: &Tournament) -> bool {
    !tournament.is_finished && is_all_games_played(tournament)
}

fn check_can_start(tournament: &Tournament) -> Result<()> {
    if tournament.is_finished {
        return Err(TournamentError::TournamentFinished);
    }
    if let Some(current) = tournament.current_round() {
        if !current.is_finished() {
            return Err(TournamentError::PrematureOperation(
                "current round is still in progress",
            ));
        }
    }
    let played = tournament.rounds.len() as u32;
    if played >= tournament.number_of_rounds {
        return Err(TournamentError::PrematureOperation(
            "all configured rounds have been played",
        ));
    }
    Ok(())
}

/// Create the next round: evenified score groups, their matchups and the bye.
///
/// Nothing is modified when the round cannot start yet.
pub fn start_next_round(tournament: &mut Tournament) -> Result<&Round> {
    check_can_start(tournament)?;
    let number = tournament.rounds.len() as u32 + 1;

    let check = Instant::now();
    let grouping = build_score_groups(&tournament.ranks);
    let grouping_time = check.elapsed();

    let check = Instant::now();
    let groups: Vec<ScoreGroup> = grouping
        .groups
        .into_iter()
        .map(|planned| ScoreGroup {
            id: Uuid::new_v4(),
            score_value: planned.score_value,
            matchups: pair_group(&planned.members),
            lots: planned
                .members
                .iter()
                .map(|m| Lot {
                    rank: m.rank,
                    is_shifted: m.is_shifted,
                })
                .collect(),
        })
        .collect();
    let pairing_time = check.elapsed();

    let mut round = Round {
        id: Uuid::new_v4(),
        number,
        started_at: Utc::now(),
        groups,
        nonplayer: None,
    };

    let paired = round.paired_ranks();
    round.nonplayer = assign_bye(&mut tournament.ranks, &paired);
    debug_assert_eq!(round.nonplayer, grouping.bye_candidate);

    log::info!(
        "tournament {}: round {} started with {} groups, {} matchups, bye: {} \
         (grouping {:?}, pairing {:?})",
        tournament.id,
        number,
        round.groups.len(),
        paired.len() / 2,
        round.nonplayer.is_some(),
        grouping_time,
        pairing_time,
    );

    tournament.rounds.push(round);
    Ok(&tournament.rounds[tournament.rounds.len() - 1])
}
