//! Swiss engine: grouping, pairing, byes, results, tiebreaks and final ratings.

mod buchholz;
mod bye;
mod pairing;
mod rating;
mod results;
mod rounds;
mod score_groups;
mod standings;

pub use buchholz::buchholz;
pub use bye::{assign_bye, unpaired_ranks};
pub use pairing::pair_group;
pub use rating::{
    expected_score, final_rating, finalize_tournament, k_factor, FinalResult, K_FACTOR_HIGH,
    K_FACTOR_LOW, K_FACTOR_MID, K_FACTOR_SCORE_THRESHOLD_HIGH, K_FACTOR_SCORE_THRESHOLD_LOW,
};
pub use results::{record_result, ResultReport};
pub use rounds::{can_finalize, can_start_next_round, is_all_games_played, start_next_round};
pub use score_groups::{build_score_groups, order_group, Grouping, Member, PlannedGroup};
pub use standings::{standings, Standing};
