//! Integration tests for the repository-backed service and full random tournaments.

mod common;

use common::{assert_round_invariants, roster};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::sync::Arc;
use std::thread;
use swiss_pairing::fixtures::{play_round_randomly, random_roster};
use swiss_pairing::{
    can_start_next_round, finalize_tournament, start_next_round, TournamentError,
    TournamentRepository, TournamentService,
};
use uuid::Uuid;

#[test]
fn create_play_and_finalize_through_the_service() {
    let service = TournamentService::in_memory();
    let t = service.create_tournament(roster(6, 2600.0), 1).unwrap();
    assert_eq!(t.number_of_rounds, 3);
    assert!(t.rounds.is_empty());

    for number in 1..=3 {
        let round = service.start_next_round(t.id).unwrap();
        assert_eq!(round.number, number);
        let ids: Vec<_> = round.matchups().map(|m| m.id).collect();
        for (i, id) in ids.iter().enumerate() {
            let tag = ["first", "second", "draw"][i % 3];
            let report = service.record_result(*id, tag).unwrap();
            assert_eq!(report.round_number, number);
        }
    }

    let stored = service.tournament(t.id).unwrap();
    assert_eq!(stored.rounds.len(), 3);
    assert!((stored.total_score() - 9.0).abs() < 1e-9);

    let results = service.finalize(t.id).unwrap();
    assert_eq!(results.len(), 6);
    assert!(service.tournament(t.id).unwrap().is_finished);
    assert_eq!(service.standings(t.id).unwrap().len(), 6);
}

#[test]
fn invalid_outcome_tag_changes_nothing() {
    let service = TournamentService::in_memory();
    let t = service.create_tournament(roster(4, 2500.0), 1).unwrap();
    let round = service.start_next_round(t.id).unwrap();
    let id = round.matchups().next().unwrap().id;
    let before = service.tournament(t.id).unwrap();

    assert_eq!(
        service.record_result(id, "black").unwrap_err(),
        TournamentError::InvalidOutcome("black".to_string())
    );
    assert_eq!(service.tournament(t.id).unwrap(), before);
}

#[test]
fn rejected_operations_leave_the_stored_tournament_untouched() {
    let service = TournamentService::in_memory();
    let t = service.create_tournament(roster(5, 2500.0), 1).unwrap();
    service.start_next_round(t.id).unwrap();
    let before = service.tournament(t.id).unwrap();

    assert!(matches!(
        service.start_next_round(t.id),
        Err(TournamentError::PrematureOperation(_))
    ));
    assert!(matches!(
        service.finalize(t.id),
        Err(TournamentError::PrematureOperation(_))
    ));
    assert_eq!(service.tournament(t.id).unwrap(), before);
}

#[test]
fn unknown_ids_are_not_found() {
    let service = TournamentService::in_memory();
    let id = Uuid::new_v4();
    assert!(service.start_next_round(id).unwrap_err().is_not_found());
    assert!(service.finalize(id).unwrap_err().is_not_found());
    assert!(service.record_result(id, "draw").unwrap_err().is_not_found());
    assert!(service.standings(id).unwrap_err().is_not_found());
}

#[test]
fn bad_rosters_are_rejected() {
    let service = TournamentService::in_memory();
    assert_eq!(
        service.create_tournament(roster(1, 2500.0), 1).unwrap_err(),
        TournamentError::NotEnoughCompetitors(1)
    );
    assert_eq!(
        service.create_tournament(roster(4, 2500.0), 0).unwrap_err(),
        TournamentError::InvalidNumberOfWinners
    );
    assert!(service.repository().ids().is_empty());
}

#[test]
fn concurrent_results_are_all_applied() {
    let service = Arc::new(TournamentService::in_memory());
    let t = service.create_tournament(roster(16, 2600.0), 1).unwrap();
    let round = service.start_next_round(t.id).unwrap();

    let handles: Vec<_> = round
        .matchups()
        .map(|m| m.id)
        .map(|id| {
            let service = Arc::clone(&service);
            thread::spawn(move || service.record_result(id, "first").unwrap())
        })
        .collect();
    for h in handles {
        h.join().unwrap();
    }

    let stored = service.tournament(t.id).unwrap();
    assert!(stored.current_round().unwrap().is_finished());
    assert_eq!(stored.total_score(), 8.0);
}

#[test]
fn tournaments_are_independent() {
    let service = TournamentService::in_memory();
    let a = service.create_tournament(roster(4, 2600.0), 1).unwrap();
    let b = service.create_tournament(roster(4, 2600.0), 1).unwrap();
    service.start_next_round(a.id).unwrap();
    // b can start even though a has a round in progress
    service.start_next_round(b.id).unwrap();
    assert_eq!(service.repository().ids().len(), 2);
}

#[test]
fn random_tournaments_keep_every_invariant() {
    for count in 2..=13 {
        for seed in 0..4u64 {
            let mut rng = StdRng::seed_from_u64(seed * 100 + count as u64);
            let mut t = swiss_pairing::Tournament::new(random_roster(count, &mut rng), 1).unwrap();

            while can_start_next_round(&t) {
                let round = start_next_round(&mut t).unwrap().clone();
                assert_round_invariants(&t, &round);
                let reports = play_round_randomly(&mut t, &mut rng).unwrap();
                assert_eq!(reports.len(), round.matchups().count());
                assert!(t.current_round().unwrap().is_finished());
            }

            assert_eq!(t.rounds.len() as u32, t.number_of_rounds);
            let results = finalize_tournament(&mut t).unwrap();
            assert_eq!(results.len(), count);
            assert!(t.is_finished);
        }
    }
}
