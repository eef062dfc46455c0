//! Bracket business logic: roster setup, bracket builders, standings.

mod byes;
mod double_elimination;
mod ids;
mod setup;
mod single_elimination;
mod standings;
mod swiss;

pub use byes::{bracket_size, opening_round, pad_with_byes, pair_in_order};
pub use double_elimination::build_double_elimination;
pub use ids::MatchIdAllocator;
pub use setup::{generate_rounds, normalize_roster};
pub use single_elimination::build_single_elimination;
pub use standings::calculate_standings;
pub use swiss::build_swiss_round;
