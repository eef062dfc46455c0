//! Slot: one contestant position in a match, plus the sentinel names used for byes and placeholders.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Name of the synthetic opponent used to pad a roster.
pub const BYE: &str = "BYE";

/// Name of a slot whose occupant depends on an undecided match.
pub const TBD: &str = "TBD";

/// Grand final placeholder until the winners bracket is decided.
pub const WINNERS_CHAMPION: &str = "Winners Bracket Champion";

/// Grand final placeholder until the losers bracket is decided.
pub const LOSERS_CHAMPION: &str = "Losers Bracket Champion";

/// What a slot holds. Derived from the name unless pinned on the slot.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SlotKind {
    /// A real entrant.
    Player,
    /// Padding opponent; any match against it is won by the other side.
    Bye,
    /// Occupant not known yet (`TBD` or a grand final placeholder).
    Pending,
}

/// One contestant position in a match.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Slot {
    pub name: String,
    /// None until reported.
    #[serde(default)]
    pub score: Option<f64>,
    #[serde(default)]
    pub avatar: Option<String>,
    /// Set only for an entrant whose name collides with a sentinel, e.g. a player called "TBD".
    #[serde(rename = "slotKind", default, skip_serializing_if = "Option::is_none")]
    kind: Option<SlotKind>,
    /// Caller-supplied fields (`email` included) carried through unchanged.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Slot {
    /// Slot for a bare name: no avatar, no extra fields.
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            score: None,
            avatar: None,
            kind: None,
            extra: Map::new(),
        }
    }

    /// Slot for a roster entrant. Always a player, whatever the name.
    pub fn player(name: impl Into<String>) -> Self {
        let mut slot = Self::named(name);
        if slot.kind() != SlotKind::Player {
            slot.kind = Some(SlotKind::Player);
        }
        slot
    }

    pub fn bye() -> Self {
        Self::named(BYE)
    }

    /// `TBD` slot for a match fed by an undecided one.
    pub fn pending() -> Self {
        Self::named(TBD)
    }

    pub fn kind(&self) -> SlotKind {
        if let Some(kind) = self.kind {
            return kind;
        }
        match self.name.as_str() {
            BYE => SlotKind::Bye,
            TBD | WINNERS_CHAMPION | LOSERS_CHAMPION => SlotKind::Pending,
            _ => SlotKind::Player,
        }
    }

    pub fn is_bye(&self) -> bool {
        self.kind() == SlotKind::Bye
    }

    pub fn is_player(&self) -> bool {
        self.kind() == SlotKind::Player
    }

    pub fn email(&self) -> Option<&str> {
        self.extra.get("email").and_then(Value::as_str)
    }
}
