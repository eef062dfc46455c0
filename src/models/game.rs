//! Match between two slots.

use crate::models::round::Bracket;
use crate::models::slot::{Slot, SlotKind};
use serde::{Deserialize, Serialize};

/// Unique identifier for a match within one generated bracket.
pub type MatchId = u64;

/// A single match: top slot against bottom slot.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GameMatch {
    pub id: MatchId,
    pub top: Slot,
    pub bottom: Slot,
    /// Name of the winning slot. None if not yet played.
    pub winner: Option<String>,
    pub bracket: Bracket,
    /// Match the winner advances to.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub next_match_winner: Option<MatchId>,
    /// Losers bracket match the loser drops into (double elimination).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub next_match_loser: Option<MatchId>,
}

impl GameMatch {
    /// Build a match. A real player facing a BYE wins immediately.
    pub fn new(id: MatchId, top: Slot, bottom: Slot, bracket: Bracket) -> Self {
        let mut game = Self {
            id,
            top,
            bottom,
            winner: None,
            bracket,
            next_match_winner: None,
            next_match_loser: None,
        };
        game.winner = game.bye_winner().map(|slot| slot.name.clone());
        game
    }

    pub fn has_bye(&self) -> bool {
        self.top.is_bye() || self.bottom.is_bye()
    }

    /// The player side of a player-vs-BYE match.
    pub fn bye_winner(&self) -> Option<&Slot> {
        match (self.top.kind(), self.bottom.kind()) {
            (SlotKind::Player, SlotKind::Bye) => Some(&self.top),
            (SlotKind::Bye, SlotKind::Player) => Some(&self.bottom),
            _ => None,
        }
    }

    /// A bye match that has been auto-resolved at construction.
    pub fn is_resolved_bye(&self) -> bool {
        self.winner.is_some() && self.bye_winner().is_some()
    }

    pub fn is_decided(&self) -> bool {
        self.winner.is_some()
    }

    /// Slot matching `winner`, if the winner names one of the two sides.
    pub fn winning_slot(&self) -> Option<&Slot> {
        let winner = self.winner.as_deref()?;
        if self.top.name == winner {
            Some(&self.top)
        } else if self.bottom.name == winner {
            Some(&self.bottom)
        } else {
            None
        }
    }

    /// The side that did not win.
    pub fn losing_slot(&self) -> Option<&Slot> {
        let winner = self.winning_slot()?;
        if std::ptr::eq(winner, &self.top) {
            Some(&self.bottom)
        } else {
            Some(&self.top)
        }
    }
}
