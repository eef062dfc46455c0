//! Round and Bracket.

use crate::models::game::GameMatch;
use serde::{Deserialize, Serialize};

/// Which sub-bracket a round (and each of its matches) belongs to.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Bracket {
    Winners,
    Losers,
    Finals,
    Swiss,
}

/// An ordered stage of the tournament.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Round {
    /// Display label, e.g. "Cuartos", "W Final", "L Ronda 2".
    pub name: String,
    pub bracket: Bracket,
    pub matches: Vec<GameMatch>,
}

impl Round {
    pub fn new(name: impl Into<String>, bracket: Bracket, matches: Vec<GameMatch>) -> Self {
        Self {
            name: name.into(),
            bracket,
            matches,
        }
    }

    /// True once every match has a winner.
    pub fn is_complete(&self) -> bool {
        self.matches.iter().all(GameMatch::is_decided)
    }
}
