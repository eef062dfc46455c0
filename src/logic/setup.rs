//! Setup: normalize the roster and build the rounds for the requested format.

use crate::logic::double_elimination::build_double_elimination;
use crate::logic::ids::MatchIdAllocator;
use crate::logic::single_elimination::build_single_elimination;
use crate::logic::swiss::build_swiss_round;
use crate::models::{Format, PlayerEntry, Round, Slot};
use std::collections::HashSet;

/// Turn roster entries into slots, in input order.
///
/// Bare names get `avatar: null`. Profiles keep their avatar and extra fields; a stray `score`
/// field is dropped since scores always start unreported. Every slot is a player, even one
/// named `TBD` or `BYE`.
pub fn normalize_roster(seeded_players: &[PlayerEntry]) -> Vec<Slot> {
    seeded_players
        .iter()
        .map(|entry| match entry {
            PlayerEntry::Name(name) => Slot::player(name.clone()),
            PlayerEntry::Profile(profile) => {
                let mut slot = Slot::player(profile.name.clone());
                slot.avatar = profile.avatar.clone();
                slot.extra = profile.extra.clone();
                slot.extra.remove("score");
                slot.extra.remove("slotKind");
                slot
            }
        })
        .collect()
}

/// Build every round for `format` from the seeded roster.
///
/// Returns no rounds when `num_participants < 2` or the roster has fewer than two entries.
/// When both are given and disagree, the roster length wins. Output is a pure function of the
/// arguments: calling again with the same roster yields an identical structure.
pub fn generate_rounds(
    num_participants: usize,
    seeded_players: &[PlayerEntry],
    format: Format,
) -> Vec<Round> {
    if num_participants < 2 || seeded_players.len() < 2 {
        return Vec::new();
    }
    if num_participants != seeded_players.len() {
        log::debug!(
            "Participant count {} does not match roster of {}; using the roster",
            num_participants,
            seeded_players.len()
        );
    }

    let slots = normalize_roster(seeded_players);
    let mut ids = MatchIdAllocator::new();
    let rounds = match format {
        Format::SingleElimination => build_single_elimination(&slots, &mut ids),
        Format::DoubleElimination => build_double_elimination(&slots, &mut ids),
        Format::Swiss => build_swiss_round(&slots, &mut ids),
    };

    assert_invariants(&rounds);
    rounds
}

/// Panics on a duplicate match id or a player-vs-BYE match left undecided.
fn assert_invariants(rounds: &[Round]) {
    let mut seen = HashSet::new();
    for round in rounds {
        for game in &round.matches {
            assert!(seen.insert(game.id), "duplicate match id {}", game.id);
            assert!(
                game.bye_winner().is_none() || game.winner.is_some(),
                "bye match {} in {:?} has no winner",
                game.id,
                round.name
            );
            assert_eq!(game.bracket, round.bracket, "match {} bracket tag", game.id);
        }
    }
}
