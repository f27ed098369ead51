//! Random rosters and random results, for demos and tests.

use crate::error::Result;
use crate::logic::{self, ResultReport};
use crate::models::{Competitor, Outcome, Tournament};
use rand::seq::SliceRandom;
use rand::Rng;

const FIRST_NAMES: &[&str] = &["ALEXEI", "PETR", "IAN", "NOAH", "PAK", "LI"];
const LAST_NAMES: &[&str] = &["EGOROV", "PETROV", "JOHNSON", "MCDONALD", "WATANABE", "PAULS"];

const OUTCOMES: [Outcome; 3] = [Outcome::FirstWins, Outcome::SecondWins, Outcome::Draw];

/// `count` competitors with random names and ratings in 2501..=2600.
pub fn random_roster<R: Rng>(count: usize, rng: &mut R) -> Vec<Competitor> {
    (0..count)
        .map(|_| {
            let first = FIRST_NAMES.choose(rng).copied().unwrap_or("ANON");
            let last = LAST_NAMES.choose(rng).copied().unwrap_or("PLAYER");
            let rating = 2500.0 + f64::from(rng.gen_range(1..=100u32));
            Competitor::new(format!("{first} {last}"), rating)
        })
        .collect()
}

/// Record a random outcome for every undecided matchup of the current round.
pub fn play_round_randomly<R: Rng>(
    tournament: &mut Tournament,
    rng: &mut R,
) -> Result<Vec<ResultReport>> {
    let pending: Vec<_> = tournament
        .current_round()
        .map(|round| {
            round
                .matchups()
                .filter(|m| !m.is_decided())
                .map(|m| m.id)
                .collect()
        })
        .unwrap_or_default();

    pending
        .into_iter()
        .map(|id| {
            let outcome = OUTCOMES[rng.gen_range(0..OUTCOMES.len())];
            logic::record_result(tournament, id, outcome)
        })
        .collect()
}
