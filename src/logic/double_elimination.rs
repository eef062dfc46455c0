//! Double elimination: winners bracket, losers bracket fed by winners drop-outs, grand final.

use crate::logic::ids::MatchIdAllocator;
use crate::logic::single_elimination::build_winners_bracket;
use crate::models::{
    Bracket, GameMatch, Round, Slot, LOSERS_CHAMPION, WINNERS_CHAMPION,
};

const WINNERS_PREFIX: &str = "W ";
const LOSERS_PREFIX: &str = "L ";
const GRAND_FINAL: &str = "Gran Final";

/// Build winners ("W ..."), losers ("L ...") and grand final rounds, in that order.
pub fn build_double_elimination(slots: &[Slot], ids: &mut MatchIdAllocator) -> Vec<Round> {
    let mut winners = build_winners_bracket(slots, ids, WINNERS_PREFIX);
    let mut losers = build_losers_bracket(&mut winners, ids);
    let grand_final = build_grand_final(&mut winners, &mut losers, ids);

    log::debug!(
        "Double elimination: {} winners rounds, {} losers rounds",
        winners.len(),
        losers.len()
    );

    winners
        .into_iter()
        .chain(losers)
        .chain(std::iter::once(grand_final))
        .collect()
}

/// Losers bracket for a winners bracket of depth `k`: `2 * (k - 1)` rounds.
///
/// The opening round pairs the losers of winners round 1. After that each winners round `r`
/// gets a drop-in round (losers bracket survivors against the losers of winners round `r`),
/// followed by a consolidation round pairing the drop-in winners, except after the winners
/// final. Drop-ins are reversed on every other round so players who met in the same half of
/// the winners bracket are sent to opposite halves of the losers bracket.
fn build_losers_bracket(winners: &mut [Round], ids: &mut MatchIdAllocator) -> Vec<Round> {
    let depth = winners.len();
    if depth < 2 {
        return Vec::new();
    }

    let mut stages: Vec<Vec<GameMatch>> = Vec::with_capacity(2 * (depth - 1));

    let opening: Vec<GameMatch> = winners[0]
        .matches
        .chunks_exact_mut(2)
        .map(|feeders| {
            let game = GameMatch::new(
                ids.next_id(),
                dropped_slot(&feeders[0]),
                dropped_slot(&feeders[1]),
                Bracket::Losers,
            );
            feeders[0].next_match_loser = Some(game.id);
            feeders[1].next_match_loser = Some(game.id);
            game
        })
        .collect();
    stages.push(opening);

    for round_index in 1..depth {
        let previous = stages.len() - 1;
        let count = stages[previous].len();
        debug_assert_eq!(count, winners[round_index].matches.len());
        let reversed = round_index % 2 == 1;

        let mut drop_in = Vec::with_capacity(count);
        for position in 0..count {
            let source = if reversed { count - 1 - position } else { position };
            let dropping = &mut winners[round_index].matches[source];
            let game = GameMatch::new(
                ids.next_id(),
                Slot::pending(),
                dropped_slot(dropping),
                Bracket::Losers,
            );
            dropping.next_match_loser = Some(game.id);
            stages[previous][position].next_match_winner = Some(game.id);
            drop_in.push(game);
        }
        stages.push(drop_in);

        if round_index + 1 < depth {
            let previous = stages.len() - 1;
            let consolidation: Vec<GameMatch> = stages[previous]
                .chunks_exact_mut(2)
                .map(|feeders| {
                    let game = GameMatch::new(
                        ids.next_id(),
                        Slot::pending(),
                        Slot::pending(),
                        Bracket::Losers,
                    );
                    feeders[0].next_match_winner = Some(game.id);
                    feeders[1].next_match_winner = Some(game.id);
                    game
                })
                .collect();
            stages.push(consolidation);
        }
    }

    let total = stages.len();
    stages
        .into_iter()
        .enumerate()
        .map(|(index, matches)| {
            let name = if index + 1 == total {
                format!("{LOSERS_PREFIX}Final")
            } else {
                format!("{LOSERS_PREFIX}Ronda {}", index + 1)
            };
            Round::new(name, Bracket::Losers, matches)
        })
        .collect()
}

/// Grand final between the two bracket champions, shown as placeholders until decided.
fn build_grand_final(
    winners: &mut [Round],
    losers: &mut [Round],
    ids: &mut MatchIdAllocator,
) -> Round {
    let game = GameMatch::new(
        ids.next_id(),
        Slot::named(WINNERS_CHAMPION),
        Slot::named(LOSERS_CHAMPION),
        Bracket::Finals,
    );

    if let Some(final_match) = winners.last_mut().and_then(|r| r.matches.last_mut()) {
        final_match.next_match_winner = Some(game.id);
        // Two entrants: nobody to meet in a losers bracket, the loser goes straight here.
        if losers.is_empty() {
            final_match.next_match_loser = Some(game.id);
        }
    }
    if let Some(final_match) = losers.last_mut().and_then(|r| r.matches.last_mut()) {
        final_match.next_match_winner = Some(game.id);
    }

    Round::new(GRAND_FINAL, Bracket::Finals, vec![game])
}

/// Who drops out of a winners match: BYE for a bye match, otherwise not known yet.
fn dropped_slot(game: &GameMatch) -> Slot {
    let both_byes = game.top.is_bye() && game.bottom.is_bye();
    if game.is_resolved_bye() || both_byes {
        Slot::bye()
    } else {
        Slot::pending()
    }
}
