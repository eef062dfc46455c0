//! Swiss: a single round of in-order pairings.

use crate::logic::byes::pair_in_order;
use crate::logic::ids::MatchIdAllocator;
use crate::models::{Bracket, Round, Slot};

const FIRST_ROUND: &str = "Ronda 1";

/// Pair the roster in order for round 1. An odd roster gives the last entrant a bye.
///
/// Later rounds need score-based ranking; callers re-rank the roster and call again.
pub fn build_swiss_round(slots: &[Slot], ids: &mut MatchIdAllocator) -> Vec<Round> {
    let matches = pair_in_order(slots, Bracket::Swiss, ids);
    log::debug!(
        "Swiss round: {} entrants, {} matches",
        slots.len(),
        matches.len()
    );
    vec![Round::new(FIRST_ROUND, Bracket::Swiss, matches)]
}
