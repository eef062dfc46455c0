//! Roster entries (input) and standing rows (output).

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// One roster entry as supplied by the caller: a bare name or a profile object.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PlayerEntry {
    Name(String),
    Profile(PlayerProfile),
}

impl PlayerEntry {
    pub fn name(&self) -> &str {
        match self {
            PlayerEntry::Name(name) => name,
            PlayerEntry::Profile(profile) => &profile.name,
        }
    }
}

impl From<&str> for PlayerEntry {
    fn from(name: &str) -> Self {
        PlayerEntry::Name(name.to_string())
    }
}

impl From<String> for PlayerEntry {
    fn from(name: String) -> Self {
        PlayerEntry::Name(name)
    }
}

impl From<PlayerProfile> for PlayerEntry {
    fn from(profile: PlayerProfile) -> Self {
        PlayerEntry::Profile(profile)
    }
}

/// Rich roster entry. Unknown fields are kept in `extra` and end up on the slot.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PlayerProfile {
    pub name: String,
    #[serde(default)]
    pub avatar: Option<String>,
    /// Everything else, `email` included, exactly as supplied (an explicit null stays null).
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl PlayerProfile {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            avatar: None,
            extra: Map::new(),
        }
    }

    pub fn with_avatar(mut self, avatar: impl Into<String>) -> Self {
        self.avatar = Some(avatar.into());
        self
    }

    pub fn with_email(mut self, email: impl Into<String>) -> Self {
        self.extra.insert("email".to_string(), Value::String(email.into()));
        self
    }

    pub fn email(&self) -> Option<&str> {
        self.extra.get("email").and_then(Value::as_str)
    }

    pub fn with_field(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.extra.insert(key.into(), value.into());
        self
    }
}

/// One line of the standings table.
#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StandingRow {
    /// 1-based position after sorting.
    pub rank: u32,
    pub name: String,
    pub avatar: Option<String>,
    pub wins: u32,
    pub losses: u32,
    /// Wins awarded against a BYE (included in `wins`).
    pub byes: u32,
    /// Decided matches against a real opponent.
    pub played: u32,
    /// Deepest winners (or Swiss) round the player holds a slot in, counted within that bracket.
    pub rounds_reached: u32,
    /// Deepest losers bracket round reached, counted within the losers bracket; 0 if never there.
    pub losers_rounds_reached: u32,
    /// Holds a slot in the grand final.
    pub reached_grand_final: bool,
    pub eliminated: bool,
}
