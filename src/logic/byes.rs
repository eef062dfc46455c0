//! Bye handling: power-of-two padding and opening-round pairing.

use crate::logic::ids::MatchIdAllocator;
use crate::models::{Bracket, GameMatch, Slot};

/// Bracket size for `entrants`: the next power of two, never below 2.
pub fn bracket_size(entrants: usize) -> usize {
    entrants.max(2).next_power_of_two()
}

/// Append BYE slots after the real entrants until the bracket is full.
pub fn pad_with_byes(slots: &[Slot]) -> Vec<Slot> {
    let size = bracket_size(slots.len());
    let mut padded = Vec::with_capacity(size);
    padded.extend_from_slice(slots);
    padded.resize_with(size, Slot::bye);
    padded
}

/// Pair slots in order: (0,1), (2,3), ...
///
/// An odd trailing slot faces a BYE. Player-vs-BYE matches are resolved on construction;
/// BYE-vs-BYE matches stay undecided.
pub fn pair_in_order(slots: &[Slot], bracket: Bracket, ids: &mut MatchIdAllocator) -> Vec<GameMatch> {
    slots
        .chunks(2)
        .map(|pair| {
            let top = pair[0].clone();
            let bottom = pair.get(1).cloned().unwrap_or_else(Slot::bye);
            GameMatch::new(ids.next_id(), top, bottom, bracket)
        })
        .collect()
}

/// Padded, paired opening round of an elimination bracket.
pub fn opening_round(slots: &[Slot], bracket: Bracket, ids: &mut MatchIdAllocator) -> Vec<GameMatch> {
    let padded = pad_with_byes(slots);
    let matches = pair_in_order(&padded, bracket, ids);
    log::debug!(
        "Opening round: {} entrants padded to {} ({} byes)",
        slots.len(),
        padded.len(),
        padded.len() - slots.len()
    );
    matches
}
