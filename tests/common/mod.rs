//! Shared helpers for integration tests.
#![allow(dead_code)]

use std::collections::HashSet;
use swiss_pairing::{Competitor, RankId, Round, Tournament};

/// Competitors rated from `top` downwards in steps of 10.
pub fn roster(count: usize, top: f64) -> Vec<Competitor> {
    (0..count)
        .map(|i| Competitor::new(format!("P{}", i + 1), top - 10.0 * i as f64))
        .collect()
}

pub fn tournament(count: usize) -> Tournament {
    Tournament::new(roster(count, 2600.0), 1).unwrap()
}

/// Rank id by 1-based seed.
pub fn seed(t: &Tournament, seed: u32) -> RankId {
    t.ranks.iter().find(|r| r.seed == seed).unwrap().id
}

pub fn score_of(t: &Tournament, seed_no: u32) -> f64 {
    t.rank(seed(t, seed_no)).unwrap().score
}

/// Matchups of a round as (first seed, second seed).
pub fn seed_pairs(t: &Tournament, round: &Round) -> Vec<(u32, u32)> {
    round
        .matchups()
        .map(|m| (t.rank(m.first).unwrap().seed, t.rank(m.second).unwrap().seed))
        .collect()
}

/// Every group even, every rank placed exactly once (matchup or bye).
pub fn assert_round_invariants(t: &Tournament, round: &Round) {
    for group in &round.groups {
        assert_eq!(group.lots.len() % 2, 0, "odd group at score {}", group.score_value);
        assert_eq!(group.matchups.len() * 2, group.lots.len());
    }
    let mut seen = HashSet::new();
    for id in round.paired_ranks().into_iter().chain(round.nonplayer) {
        assert!(seen.insert(id), "rank placed twice in round {}", round.number);
    }
    let roster: HashSet<RankId> = t.ranks.iter().map(|r| r.id).collect();
    assert_eq!(seen, roster);
    assert_eq!(round.nonplayer.is_some(), t.ranks.len() % 2 == 1);
}
