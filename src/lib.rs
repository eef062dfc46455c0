//! Tournament bracket engine: single elimination, double elimination and Swiss rounds,
//! plus standings derived from match results.

pub mod logic;
pub mod models;
pub mod roster;

pub use logic::{calculate_standings, generate_rounds, normalize_roster, MatchIdAllocator};
pub use models::{
    Bracket, Format, GameMatch, MatchId, PlayerEntry, PlayerProfile, Round, Slot, SlotKind,
    StandingRow, BYE, LOSERS_CHAMPION, TBD, WINNERS_CHAMPION,
};
pub use roster::{load_roster, RosterError};
