//! Tournament format.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Bracket format requested by the caller.
///
/// Deserializing is lenient: any unrecognised name becomes single elimination.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case", from = "String")]
pub enum Format {
    #[default]
    SingleElimination,
    DoubleElimination,
    Swiss,
}

impl Format {
    /// Parse a format name, falling back to single elimination for unknown names.
    pub fn from_name(name: &str) -> Self {
        match name.trim().to_ascii_lowercase().as_str() {
            "single-elimination" => Format::SingleElimination,
            "double-elimination" => Format::DoubleElimination,
            "swiss" => Format::Swiss,
            other => {
                log::warn!("Unknown format {:?}, using single-elimination", other);
                Format::SingleElimination
            }
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Format::SingleElimination => "single-elimination",
            Format::DoubleElimination => "double-elimination",
            Format::Swiss => "swiss",
        }
    }

    /// Losses that knock a player out; None for formats without elimination.
    pub fn losses_to_eliminate(&self) -> Option<u32> {
        match self {
            Format::SingleElimination => Some(1),
            Format::DoubleElimination => Some(2),
            Format::Swiss => None,
        }
    }
}

impl From<String> for Format {
    fn from(name: String) -> Self {
        Format::from_name(&name)
    }
}

impl fmt::Display for Format {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
