//! Data structures for the bracket engine: roster entries, slots, matches, rounds, standings.

mod game;
mod player;
mod round;
mod slot;
mod tournament;

pub use game::{GameMatch, MatchId};
pub use player::{PlayerEntry, PlayerProfile, StandingRow};
pub use round::{Bracket, Round};
pub use slot::{Slot, SlotKind, BYE, LOSERS_CHAMPION, TBD, WINNERS_CHAMPION};
pub use tournament::Format;
