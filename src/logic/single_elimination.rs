//! Single elimination: winners-only bracket, bye winners propagated into round 2.

use crate::logic::byes::opening_round;
use crate::logic::ids::MatchIdAllocator;
use crate::models::{Bracket, GameMatch, Round, Slot};

/// Build a single-elimination bracket. Rounds are named by distance from the final.
pub fn build_single_elimination(slots: &[Slot], ids: &mut MatchIdAllocator) -> Vec<Round> {
    build_winners_bracket(slots, ids, "")
}

/// Winners bracket with every round name prefixed by `prefix` ("" or "W ").
pub(crate) fn build_winners_bracket(
    slots: &[Slot],
    ids: &mut MatchIdAllocator,
    prefix: &str,
) -> Vec<Round> {
    let mut stages: Vec<Vec<GameMatch>> = vec![opening_round(slots, Bracket::Winners, ids)];

    while stages[stages.len() - 1].len() > 1 {
        let previous = stages.len() - 1;
        let next: Vec<GameMatch> = stages[previous]
            .chunks_exact_mut(2)
            .map(|feeders| {
                let game = GameMatch::new(
                    ids.next_id(),
                    advancing_slot(&feeders[0]),
                    advancing_slot(&feeders[1]),
                    Bracket::Winners,
                );
                feeders[0].next_match_winner = Some(game.id);
                feeders[1].next_match_winner = Some(game.id);
                game
            })
            .collect();
        stages.push(next);
    }

    let total = stages.len();
    log::debug!(
        "Winners bracket: {} rounds, {} matches",
        total,
        stages.iter().map(Vec::len).sum::<usize>()
    );

    stages
        .into_iter()
        .enumerate()
        .map(|(index, matches)| {
            Round::new(
                format!("{}{}", prefix, round_name(index, total)),
                Bracket::Winners,
                matches,
            )
        })
        .collect()
}

/// Occupant of the next round's slot: the full bye-winner slot if known, else TBD.
fn advancing_slot(feeder: &GameMatch) -> Slot {
    match feeder.bye_winner() {
        Some(slot) if feeder.winner.is_some() => slot.clone(),
        _ => Slot::pending(),
    }
}

/// "Final", "Semifinales", "Cuartos" for the last three rounds; "Ronda N" before that.
pub(crate) fn round_name(index: usize, total: usize) -> String {
    match total - 1 - index {
        0 => "Final".to_string(),
        1 => "Semifinales".to_string(),
        2 => "Cuartos".to_string(),
        _ => format!("Ronda {}", index + 1),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn names_count_back_from_the_final() {
        let names: Vec<_> = (0..5).map(|i| round_name(i, 5)).collect();
        assert_eq!(names, ["Ronda 1", "Ronda 2", "Cuartos", "Semifinales", "Final"]);
        assert_eq!(round_name(0, 1), "Final");
    }
}
