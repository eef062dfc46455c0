//! Standings derived from match winners.

use crate::models::{Bracket, Format, GameMatch, Round, Slot, StandingRow};
use std::collections::HashMap;

/// Rank every player found in `rounds`.
///
/// Only the brackets belonging to `format` are read. Order: more wins, then fewer losses, then
/// first appearance. Never mutates `rounds`; call again on any newer snapshot.
pub fn calculate_standings(rounds: &[Round], format: Format) -> Vec<StandingRow> {
    let mut table = Table::default();

    // Depth is counted per bracket, so losers rounds never inflate winners progress.
    let mut depth: HashMap<Bracket, u32> = HashMap::new();
    let relevant = rounds.iter().filter(|r| counts_for(format, r.bracket));
    for round in relevant {
        let round_number = {
            let counter = depth.entry(round.bracket).or_default();
            *counter += 1;
            *counter
        };
        for game in &round.matches {
            for slot in [&game.top, &game.bottom] {
                if slot.is_player() {
                    reach(table.row(slot), round.bracket, round_number);
                }
            }
            table.record(game);
        }
    }

    let limit = format.losses_to_eliminate();
    let mut rows: Vec<StandingRow> = table
        .rows
        .into_iter()
        .map(|tally| {
            let eliminated = match limit {
                Some(limit) => tally.row.losses >= limit || tally.lost_grand_final,
                None => false,
            };
            StandingRow {
                eliminated,
                ..tally.row
            }
        })
        .collect();

    // Stable: ties keep first-appearance order.
    rows.sort_by(|a, b| b.wins.cmp(&a.wins).then(a.losses.cmp(&b.losses)));
    for (position, row) in rows.iter_mut().enumerate() {
        row.rank = position as u32 + 1;
    }
    rows
}

fn counts_for(format: Format, bracket: Bracket) -> bool {
    match format {
        Format::SingleElimination => bracket == Bracket::Winners,
        Format::DoubleElimination => bracket != Bracket::Swiss,
        Format::Swiss => bracket == Bracket::Swiss,
    }
}

fn reach(row: &mut StandingRow, bracket: Bracket, round_number: u32) {
    match bracket {
        Bracket::Winners | Bracket::Swiss => {
            row.rounds_reached = row.rounds_reached.max(round_number)
        }
        Bracket::Losers => row.losers_rounds_reached = row.losers_rounds_reached.max(round_number),
        Bracket::Finals => row.reached_grand_final = true,
    }
}

struct Tally {
    row: StandingRow,
    lost_grand_final: bool,
}

#[derive(Default)]
struct Table {
    rows: Vec<Tally>,
    index: HashMap<String, usize>,
}

impl Table {
    /// Row for this player, created on first sight.
    fn row(&mut self, slot: &Slot) -> &mut StandingRow {
        let position = match self.index.get(&slot.name) {
            Some(&position) => position,
            None => {
                self.rows.push(Tally {
                    row: StandingRow {
                        name: slot.name.clone(),
                        avatar: slot.avatar.clone(),
                        ..StandingRow::default()
                    },
                    lost_grand_final: false,
                });
                self.index.insert(slot.name.clone(), self.rows.len() - 1);
                self.rows.len() - 1
            }
        };
        &mut self.rows[position].row
    }

    fn record(&mut self, game: &GameMatch) {
        let Some(winner_name) = game.winner.as_deref() else {
            return;
        };
        let (Some(winner), Some(loser)) = (game.winning_slot(), game.losing_slot()) else {
            log::warn!(
                "Match {} winner {:?} is neither {:?} nor {:?}; ignored",
                game.id,
                winner_name,
                game.top.name,
                game.bottom.name
            );
            return;
        };

        if winner.is_player() {
            let row = self.row(winner);
            row.wins += 1;
            if loser.is_bye() {
                row.byes += 1;
            } else if loser.is_player() {
                row.played += 1;
            }
        }
        if loser.is_player() {
            let row = self.row(loser);
            row.losses += 1;
            if winner.is_player() {
                row.played += 1;
            }
            if game.bracket == Bracket::Finals {
                let position = self.index[&loser.name];
                self.rows[position].lost_grand_final = true;
            }
        }
    }
}
