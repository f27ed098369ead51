//! Score-group formation and the evenify pass.
//!
//! Ranks entering a round are split by cumulative score, groups are visited
//! from the lowest score to the highest, and an odd group hands its
//! lowest-ordered member up to the next group. At most one member can fall
//! off the top; that one is the round's bye candidate.

use crate::models::{RankId, TournamentRank};

/// A rank placed in a group, with the fields the ordering rule needs.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Member {
    pub rank: RankId,
    pub score: f64,
    pub rating: f64,
    /// Moved up from the group below.
    pub is_shifted: bool,
}

impl Member {
    fn from_rank(rank: &TournamentRank) -> Self {
        Self {
            rank: rank.id,
            score: rank.score,
            rating: rank.starting_rating,
            is_shifted: false,
        }
    }
}

/// An evenified group, ready for pairing.
#[derive(Clone, Debug, PartialEq)]
pub struct PlannedGroup {
    pub score_value: f64,
    /// Members in pairing order. Always an even number.
    pub members: Vec<Member>,
}

/// Result of grouping one round.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Grouping {
    /// Groups in ascending score order, one per distinct score value.
    pub groups: Vec<PlannedGroup>,
    /// The single member left over after evenify, if the roster is odd.
    pub bye_candidate: Option<RankId>,
}

/// Sort a group by its ordering rule.
///
/// All-zero groups (first round) order by rating, highest first. Anything
/// else orders by score, highest first; the sort is stable so ties keep the
/// order they arrived in.
pub fn order_group(members: &mut [Member]) {
    if members.iter().all(|m| m.score == 0.0) {
        members.sort_by(|a, b| b.rating.total_cmp(&a.rating));
    } else {
        members.sort_by(|a, b| b.score.total_cmp(&a.score));
    }
}

/// Distinct score values present, ascending.
fn distinct_scores(ranks: &[TournamentRank]) -> Vec<f64> {
    let mut values: Vec<f64> = ranks.iter().map(|r| r.score).collect();
    values.sort_by(f64::total_cmp);
    values.dedup();
    values
}

/// Build evenified score groups from ranks given in seed order.
pub fn build_score_groups(ranks: &[TournamentRank]) -> Grouping {
    let mut groups = Vec::new();
    let mut carried: Option<Member> = None;

    for score_value in distinct_scores(ranks) {
        let mut members: Vec<Member> = ranks
            .iter()
            .filter(|r| r.score == score_value)
            .map(Member::from_rank)
            .chain(carried.take())
            .collect();
        order_group(&mut members);

        if members.len() % 2 != 0 {
            carried = members.pop().map(|m| Member {
                is_shifted: true,
                ..m
            });
            if let Some(m) = &carried {
                log::debug!("evenify: shifting {} up from the {} group", m.rank, score_value);
            }
        }

        debug_assert!(members.len() % 2 == 0);
        groups.push(PlannedGroup {
            score_value,
            members,
        });
    }

    Grouping {
        groups,
        bye_candidate: carried.map(|m| m.rank),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Competitor;

    fn rank(rating: f64, score: f64, seed: u32) -> TournamentRank {
        let mut r = TournamentRank::new(Competitor::new(format!("S{seed}"), rating), seed);
        r.score = score;
        r
    }

    #[test]
    fn zero_score_group_orders_by_rating() {
        let ranks = vec![
            rank(2500.0, 0.0, 2),
            rank(2600.0, 0.0, 1),
            rank(2400.0, 0.0, 3),
            rank(2550.0, 0.0, 4),
        ];
        let grouping = build_score_groups(&ranks);
        assert_eq!(grouping.groups.len(), 1);
        let ratings: Vec<f64> = grouping.groups[0].members.iter().map(|m| m.rating).collect();
        assert_eq!(ratings, vec![2600.0, 2550.0, 2500.0, 2400.0]);
        assert_eq!(grouping.bye_candidate, None);
    }

    #[test]
    fn odd_single_group_leaves_lowest_rated() {
        let ranks: Vec<_> = (0..5).map(|i| rank(2600.0 - 10.0 * i as f64, 0.0, i + 1)).collect();
        let grouping = build_score_groups(&ranks);
        assert_eq!(grouping.bye_candidate, Some(ranks[4].id));
        assert_eq!(grouping.groups[0].members.len(), 4);
        assert!(grouping.groups[0].members.iter().all(|m| !m.is_shifted));
    }

    #[test]
    fn shifted_member_lands_last_in_next_group() {
        let ranks = vec![
            rank(2600.0, 1.0, 1),
            rank(2590.0, 1.0, 2),
            rank(2580.0, 1.0, 3),
            rank(2570.0, 0.0, 4),
        ];
        let grouping = build_score_groups(&ranks);
        assert_eq!(grouping.groups.len(), 2);
        assert!(grouping.groups[0].members.is_empty());
        let top = &grouping.groups[1];
        assert_eq!(top.score_value, 1.0);
        assert_eq!(top.members.len(), 4);
        assert_eq!(top.members[3].rank, ranks[3].id);
        assert!(top.members[3].is_shifted);
        assert_eq!(grouping.bye_candidate, None);
    }

    #[test]
    fn shift_cascades_through_even_groups() {
        // 0.0: 1 member, 0.5: 2 members, 1.0: 1 member
        let ranks = vec![
            rank(2600.0, 1.0, 1),
            rank(2590.0, 0.5, 2),
            rank(2580.0, 0.5, 3),
            rank(2570.0, 0.0, 4),
        ];
        let grouping = build_score_groups(&ranks);
        let sizes: Vec<usize> = grouping.groups.iter().map(|g| g.members.len()).collect();
        assert_eq!(sizes, vec![0, 2, 2]);
        let top = &grouping.groups[2];
        assert_eq!(top.members[0].rank, ranks[0].id);
        assert_eq!(top.members[1].rank, ranks[3].id);
        assert!(top.members[1].is_shifted);
        assert_eq!(grouping.bye_candidate, None);
    }

    #[test]
    fn ties_keep_seed_order() {
        let ranks = vec![
            rank(2400.0, 1.0, 1),
            rank(2600.0, 1.0, 2),
            rank(2500.0, 1.0, 3),
            rank(2300.0, 1.0, 4),
        ];
        let grouping = build_score_groups(&ranks);
        let order: Vec<RankId> = grouping.groups[0].members.iter().map(|m| m.rank).collect();
        let expected: Vec<RankId> = ranks.iter().map(|r| r.id).collect();
        assert_eq!(order, expected);
    }

    #[test]
    fn empty_input_has_no_groups() {
        assert_eq!(build_score_groups(&[]), Grouping::default());
    }
}
